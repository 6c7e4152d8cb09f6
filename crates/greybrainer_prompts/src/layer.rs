//! Per-layer analysis prompts.

use greybrainer_core::{LayerDefinition, LayerId, ReviewStage};
use greybrainer_extract::anchors::{
    DIRECTOR, JUSTIFICATION, MAIN_CAST, PLOT_POINTS, PLOT_SHAPE_END, PLOT_SHAPE_START,
    POTENTIAL_ENHANCEMENTS, SHAPE_NAME, SUGGESTED_SCORE,
};

fn stage_guidance(stage: ReviewStage) -> &'static str {
    match stage {
        ReviewStage::IdeaAnnouncement => {
            "Only the announcement, logline and creative team are known. Judge potential, not execution, and say so where evidence is thin."
        }
        ReviewStage::Trailer => {
            "Trailers and marketing material are available. Weigh what they reveal against what they may be hiding."
        }
        ReviewStage::Released => {
            "The work has been released. Draw on the finished product and its critical reception."
        }
    }
}

fn story_shape_instructions() -> String {
    format!(
        "Finally, classify the story's arc using Kurt Vonnegut's story shapes \
         (e.g. Man in Hole, Boy Meets Girl, Cinderella, Icarus, Rags to Riches, \
         Riches to Rags, Oedipus, Creation Story). Output the block exactly as:\n\
         {PLOT_SHAPE_START}\n\
         {SHAPE_NAME} <shape name>\n\
         {JUSTIFICATION} <one or two sentences>\n\
         {PLOT_POINTS} (0.0, 0.1, 'Opening situation'), (0.5, -0.6, 'Lowest point'), (1.0, 0.8, 'Resolution')\n\
         {PLOT_SHAPE_END}\n\
         Use 4 to 8 points. Time runs from 0.0 to 1.0 in increasing order, \
         fortune from -1.0 to 1.0, and each description is wrapped in single quotes."
    )
}

/// Prompt for one layer of the analysis.
///
/// The Story layer also asks for the story shape block.
pub fn build_layer_prompt(title: &str, stage: ReviewStage, layer: &LayerDefinition) -> String {
    let mut prompt = format!(
        "You are Greybrainer, a seasoned film and series analyst.\n\n\
         Analyze \"{title}\" (stage: {stage}) through the lens of \"{layer_title}\": {description}\n\
         {guidance}\n\n\
         Start with these two lines:\n\
         {DIRECTOR} <name, or N/A>\n\
         {MAIN_CAST} <comma separated names, or N/A>\n\n\
         Then write a focused analysis of about 300 words in plain paragraphs.\n\n\
         After the analysis add a section titled \"{POTENTIAL_ENHANCEMENTS}\" with 3 to 5 \
         suggestions, one per line, each starting with \"- \".\n\n\
         End with a line in exactly this form:\n\
         {SUGGESTED_SCORE} <number from 0 to 10>/10\n",
        layer_title = layer.title,
        description = layer.description,
        guidance = stage_guidance(stage),
    );

    if layer.id == LayerId::Story {
        prompt.push('\n');
        prompt.push_str(&story_shape_instructions());
        prompt.push('\n');
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_prompt_carries_shape_block() {
        let prompt = build_layer_prompt("Dune", ReviewStage::Released, &LayerId::Story.definition());
        assert!(prompt.contains(PLOT_SHAPE_START));
        assert!(prompt.contains(PLOT_SHAPE_END));
        assert!(prompt.contains("Magic of Story/Script"));
    }

    #[test]
    fn other_layers_skip_shape_block() {
        let prompt = build_layer_prompt(
            "Dune",
            ReviewStage::Trailer,
            &LayerId::Performance.definition(),
        );
        assert!(!prompt.contains(PLOT_SHAPE_START));
        assert!(prompt.contains("stage: Trailer"));
    }
}
