//! Run lifecycle: submission, title resolution and run superseding.

use crate::{AnalysisPhase, AnalysisSettings, AnalysisState};
use greybrainer_core::{AnalysisInput, GenerateOptions};
use greybrainer_error::{AnalysisError, AnalysisErrorKind, GreybrainerError, GreybrainerResult};
use greybrainer_extract::parse_title_suggestions;
use greybrainer_interface::LlmGateway;
use greybrainer_prompts::build_title_suggestion_prompt;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// Drives analysis runs against a single [`LlmGateway`].
///
/// Cheap to clone; clones share the same state channel, so a renderer can
/// hold one handle while another drives the run.
///
/// # Examples
///
/// ```no_run
/// use greybrainer_core::{AnalysisInput, ReviewStage};
/// use greybrainer_interface::LlmGateway;
/// use greybrainer_orchestrator::{AnalysisOrchestrator, AnalysisPhase};
/// use std::sync::Arc;
///
/// # async fn example(gateway: Arc<dyn LlmGateway>) -> greybrainer_error::GreybrainerResult<()> {
/// let orchestrator = AnalysisOrchestrator::new(gateway);
/// let input = AnalysisInput::new("Dune", ReviewStage::Released);
/// if orchestrator.submit(input).await? == AnalysisPhase::AwaitingUserChoice {
///     orchestrator.proceed_with_original().await?;
/// }
/// let report = orchestrator.generate_report().await?;
/// println!("{}", report.body_text);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AnalysisOrchestrator {
    pub(crate) inner: Arc<Inner>,
}

pub(crate) struct Inner {
    pub(crate) gateway: Arc<dyn LlmGateway>,
    pub(crate) settings: AnalysisSettings,
    pub(crate) state: watch::Sender<AnalysisState>,
}

impl std::fmt::Debug for AnalysisOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisOrchestrator")
            .field("provider", &self.inner.gateway.provider_name())
            .field("model", &self.inner.gateway.model_name())
            .field("settings", &self.inner.settings)
            .finish()
    }
}

impl AnalysisOrchestrator {
    /// Orchestrator with default settings.
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self::with_settings(gateway, AnalysisSettings::default())
    }

    /// Orchestrator with explicit settings.
    pub fn with_settings(gateway: Arc<dyn LlmGateway>, settings: AnalysisSettings) -> Self {
        Self {
            inner: Arc::new(Inner {
                gateway,
                settings,
                state: watch::Sender::new(AnalysisState::default()),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AnalysisState {
        self.inner.state.borrow().clone()
    }

    /// Current phase.
    pub fn phase(&self) -> AnalysisPhase {
        self.inner.state.borrow().phase
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<AnalysisState> {
        self.inner.state.subscribe()
    }

    /// Settings in use.
    pub fn settings(&self) -> &AnalysisSettings {
        &self.inner.settings
    }

    /// Validate the input, resolve the title and, when no alternative title
    /// is offered, run the layer analyses.
    ///
    /// Returns the phase the run ended in: `AwaitingUserChoice` when
    /// suggestions were found, otherwise `LayersDone`.
    #[instrument(skip(self, input), fields(title = %input.title()))]
    pub async fn submit(&self, input: AnalysisInput) -> GreybrainerResult<AnalysisPhase> {
        let input = self.validate(input)?;
        let run_id = self.begin_run(input.clone(), AnalysisPhase::ResolvingTitle);
        info!(run_id, "Resolving title");

        let suggestions = self.fetch_suggestions(input.title()).await;
        if !self.is_current(run_id) {
            debug!(run_id, "Run superseded during title resolution");
            return Ok(self.phase());
        }

        if suggestions.is_empty() {
            self.run_analysis(run_id, input).await;
        } else {
            info!(run_id, count = suggestions.len(), "Awaiting title choice");
            self.update_if_current(run_id, |state| {
                state.phase = AnalysisPhase::AwaitingUserChoice;
                state.suggestions = suggestions;
            });
        }
        Ok(self.phase())
    }

    /// Analyze the suggestion at `index` instead of the submitted title.
    #[instrument(skip(self))]
    pub async fn choose_suggestion(&self, index: usize) -> GreybrainerResult<AnalysisPhase> {
        let (run_id, input) = self.claim_choice(Some(index))?;
        self.run_analysis(run_id, input).await;
        Ok(self.phase())
    }

    /// Analyze the submitted title, ignoring the suggestions.
    #[instrument(skip(self))]
    pub async fn proceed_with_original(&self) -> GreybrainerResult<AnalysisPhase> {
        let (run_id, input) = self.claim_choice(None)?;
        self.run_analysis(run_id, input).await;
        Ok(self.phase())
    }

    /// Drop the current run and return to `Idle`.
    ///
    /// Calls still in flight resolve normally and their results are ignored.
    #[instrument(skip(self))]
    pub fn cancel(&self) {
        self.inner.state.send_modify(|state| {
            let run_id = state.run_id + 1;
            *state = AnalysisState {
                run_id,
                ..AnalysisState::default()
            };
        });
        info!("Analysis cancelled");
    }

    /// Run the layer analyses on a confirmed title, skipping title resolution.
    ///
    /// Supersedes any run in progress.
    #[instrument(skip(self, input), fields(title = %input.title()))]
    pub async fn start_analysis(&self, input: AnalysisInput) -> GreybrainerResult<AnalysisPhase> {
        let input = self.validate(input)?;
        let run_id = self.begin_run(input.clone(), AnalysisPhase::AnalyzingLayers);
        self.run_analysis(run_id, input).await;
        Ok(self.phase())
    }

    /// Trim the title and check the budget. Rejections are recorded on the
    /// state without touching the gateway.
    fn validate(&self, input: AnalysisInput) -> GreybrainerResult<AnalysisInput> {
        let title = input.title().trim().to_string();
        let rejection = if title.is_empty() {
            Some(AnalysisErrorKind::EmptyTitle)
        } else {
            match input.user_budget() {
                Some(budget) if !budget.is_finite() || *budget <= 0.0 => Some(
                    AnalysisErrorKind::InvalidBudget(format!("{budget} must be a positive amount")),
                ),
                _ => None,
            }
        };

        match rejection {
            Some(kind) => {
                let err: GreybrainerError = AnalysisError::new(kind).into();
                warn!(error = %err.user_message(), "Rejected analysis input");
                let message = err.user_message();
                self.inner
                    .state
                    .send_modify(|state| state.error = Some(message));
                Err(err)
            }
            None => Ok(input.with_title(title)),
        }
    }

    /// Reset the state for a new run and return its id.
    pub(crate) fn begin_run(&self, input: AnalysisInput, phase: AnalysisPhase) -> u64 {
        let mut run_id = 0;
        self.inner.state.send_modify(|state| {
            run_id = state.run_id + 1;
            *state = AnalysisState {
                run_id,
                phase,
                input: Some(input),
                ..AnalysisState::default()
            };
        });
        run_id
    }

    pub(crate) fn is_current(&self, run_id: u64) -> bool {
        self.inner.state.borrow().run_id == run_id
    }

    /// Apply `update` only while `run_id` is still the active run.
    ///
    /// Returns false when the write was discarded as stale.
    pub(crate) fn update_if_current(
        &self,
        run_id: u64,
        update: impl FnOnce(&mut AnalysisState),
    ) -> bool {
        let applied = self.inner.state.send_if_modified(|state| {
            if state.run_id != run_id {
                return false;
            }
            update(state);
            true
        });
        if !applied {
            debug!(run_id, "Discarded write from superseded run");
        }
        applied
    }

    /// Leave `AwaitingUserChoice` with the chosen title.
    ///
    /// The claim is atomic so two concurrent choices cannot both start a run.
    fn claim_choice(&self, index: Option<usize>) -> GreybrainerResult<(u64, AnalysisInput)> {
        let mut outcome: Result<(u64, AnalysisInput), AnalysisErrorKind> =
            Err(AnalysisErrorKind::NotAwaitingChoice);

        self.inner.state.send_if_modified(|state| {
            if state.phase != AnalysisPhase::AwaitingUserChoice {
                return false;
            }
            let Some(input) = state.input.clone() else {
                outcome = Err(AnalysisErrorKind::NoActiveRun);
                return false;
            };
            let input = match index {
                Some(i) => match state.suggestions.get(i) {
                    Some(title) => input.with_title(title.clone()),
                    None => {
                        outcome = Err(AnalysisErrorKind::UnknownSuggestion(i));
                        return false;
                    }
                },
                None => input,
            };
            state.phase = AnalysisPhase::AnalyzingLayers;
            state.suggestions.clear();
            state.input = Some(input.clone());
            outcome = Ok((state.run_id, input));
            true
        });

        outcome.map_err(|kind| AnalysisError::new(kind).into())
    }

    /// Ask for alternative titles. Failures are logged and yield none.
    async fn fetch_suggestions(&self, title: &str) -> Vec<String> {
        let prompt = build_title_suggestion_prompt(title);
        let options = GenerateOptions::new("title_suggestions")
            .json()
            .with_temperature(*self.inner.settings.suggestion_temperature());

        match self.inner.gateway.generate(&prompt, &options).await {
            Ok(response) => parse_title_suggestions(&response.text, title),
            Err(e) => {
                warn!(error = %e, "Title suggestion lookup failed, using original title");
                Vec::new()
            }
        }
    }
}
