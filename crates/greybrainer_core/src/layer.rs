//! The three fixed analysis layers.

use serde::{Deserialize, Serialize};

/// Identifier of an analysis layer.
///
/// The declaration order is the fold order used for personnel aggregation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LayerId {
    /// Narrative, structure and themes.
    Story,
    /// Direction, world-building and vision.
    Conceptualization,
    /// Acting, music and cinematography.
    Performance,
}

impl LayerId {
    /// All layers in fold order (Story, Conceptualization, Performance).
    pub const ALL: [LayerId; 3] = [
        LayerId::Story,
        LayerId::Conceptualization,
        LayerId::Performance,
    ];

    /// Static definition for this layer.
    pub fn definition(self) -> LayerDefinition {
        match self {
            LayerId::Story => LayerDefinition {
                id: self,
                title: "Magic of Story/Script",
                description: "The foundational narrative, plot structure, themes, originality, character arcs, and dialogue.",
            },
            LayerId::Conceptualization => LayerDefinition {
                id: self,
                title: "Magic of Conceptualization",
                description: "The director's vision, how the story is framed, the world-building, and the overall tone and style.",
            },
            LayerId::Performance => LayerDefinition {
                id: self,
                title: "Magic of Performance/Execution",
                description: "Acting, direction of actors, cinematography, editing, sound design, music, and visual effects.",
            },
        }
    }
}

/// Static description of a layer, embedded in its prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LayerDefinition {
    /// Layer identifier
    pub id: LayerId,
    /// Human readable title
    pub title: &'static str,
    /// What the layer evaluates
    pub description: &'static str,
}

impl LayerDefinition {
    /// The three layer definitions in fold order.
    pub fn all() -> [LayerDefinition; 3] {
        LayerId::ALL.map(LayerId::definition)
    }
}
