//! Director and actor deep-dive prompts.

use greybrainer_core::PersonnelType;

/// Prompt for a deep dive on one director or actor.
pub fn build_personnel_prompt(name: &str, kind: PersonnelType) -> String {
    let focus = match kind {
        PersonnelType::Director => {
            "their directorial signature, recurring themes, collaborators, and how their \
             filmography has evolved"
        }
        PersonnelType::Actor => {
            "their range, defining performances, the kinds of roles they choose, and how \
             their career has evolved"
        }
    };
    format!(
        "Write a concise profile (about 250 words) of the {kind} {name}, covering {focus}. \
         Close with two or three titles that best represent their work."
    )
}
