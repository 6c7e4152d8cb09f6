//! Personnel deep dives.

use crate::AnalysisOrchestrator;
use greybrainer_core::{GenerateOptions, PersonnelAnalysis, PersonnelType};
use greybrainer_error::{AnalysisError, AnalysisErrorKind, GreybrainerResult};
use greybrainer_extract::collapse_blank_lines;
use greybrainer_prompts::build_personnel_prompt;
use tracing::instrument;

impl AnalysisOrchestrator {
    /// Career commentary on a director or actor.
    ///
    /// Independent of the run state: it neither reads nor changes it.
    #[instrument(skip(self), fields(kind = %kind))]
    pub async fn analyze_personnel(
        &self,
        name: &str,
        kind: PersonnelType,
    ) -> GreybrainerResult<PersonnelAnalysis> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AnalysisError::new(AnalysisErrorKind::EmptyName).into());
        }

        let settings = &self.inner.settings;
        let prompt = build_personnel_prompt(name, kind);
        let options = GenerateOptions::new(format!("personnel_{kind}"))
            .with_use_search(*settings.use_search())
            .with_temperature(*settings.layer_temperature());

        let response = self.inner.gateway.generate(&prompt, &options).await?;
        Ok(PersonnelAnalysis {
            name: name.to_string(),
            kind,
            text: collapse_blank_lines(response.text.trim()),
            citations: response.citations,
        })
    }
}
