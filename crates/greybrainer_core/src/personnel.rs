//! Personnel data aggregated across layers.

use crate::{Citation, LayerAnalysisResult, merge_citations};
use serde::{Deserialize, Serialize};

/// Director and cast gathered from all layer results.
///
/// # Examples
///
/// ```
/// use greybrainer_core::{LayerAnalysisResult, LayerId, PersonnelAggregate};
///
/// let mut story = LayerAnalysisResult::loading(LayerId::Story);
/// story.director_found = Some("Denis Villeneuve".to_string());
///
/// let aggregate = PersonnelAggregate::fold(&[story]);
/// assert_eq!(aggregate.director.as_deref(), Some("Denis Villeneuve"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonnelAggregate {
    /// Last non-empty director seen in fold order
    pub director: Option<String>,
    /// Last non-empty cast list seen in fold order
    pub cast: Option<Vec<String>>,
    /// Union of citations, deduplicated by URI
    pub citations: Vec<Citation>,
}

impl PersonnelAggregate {
    /// Fold one layer's extracted fields into the aggregate.
    ///
    /// Non-empty director and cast overwrite earlier values; citations are
    /// unioned by URI with the first-seen title kept.
    pub fn absorb(&mut self, result: &LayerAnalysisResult) {
        if let Some(director) = result
            .director_found
            .as_ref()
            .filter(|d| !d.trim().is_empty())
        {
            self.director = Some(director.clone());
        }
        if let Some(cast) = result.cast_found.as_ref().filter(|c| !c.is_empty()) {
            self.cast = Some(cast.clone());
        }
        merge_citations(&mut self.citations, &result.citations);
    }

    /// Fold results in layer order (Story, Conceptualization, Performance),
    /// regardless of the order they are supplied in.
    pub fn fold(results: &[LayerAnalysisResult]) -> Self {
        let mut ordered: Vec<&LayerAnalysisResult> = results.iter().collect();
        ordered.sort_by_key(|r| r.layer_id);
        let mut aggregate = Self::default();
        for result in ordered {
            aggregate.absorb(result);
        }
        aggregate
    }
}

/// Kind of person a deep dive is about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum PersonnelType {
    /// Film director
    Director,
    /// Cast member
    Actor,
}

/// Result of a personnel deep dive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonnelAnalysis {
    /// Person analyzed
    pub name: String,
    /// Director or actor
    pub kind: PersonnelType,
    /// Model commentary
    pub text: String,
    /// Grounding sources
    pub citations: Vec<Citation>,
}
