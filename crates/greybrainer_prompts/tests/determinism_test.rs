use greybrainer_core::{
    LayerAnalysisResult, LayerId, PersonnelAggregate, PersonnelType, ReviewStage,
};
use greybrainer_extract::anchors::{
    DIRECTOR, LINKEDIN_START, MAIN_CAST, OVERALL_IMPROVEMENTS, POTENTIAL_ENHANCEMENTS,
    SUGGESTED_SCORE, TWITTER_START,
};
use greybrainer_prompts::{
    build_final_report_prompt, build_financials_prompt, build_layer_prompt,
    build_personnel_prompt, build_roi_prompt, build_title_suggestion_prompt,
};

#[test]
fn builders_are_deterministic() {
    let layer = LayerId::Conceptualization.definition();
    assert_eq!(
        build_layer_prompt("Arrival", ReviewStage::IdeaAnnouncement, &layer),
        build_layer_prompt("Arrival", ReviewStage::IdeaAnnouncement, &layer)
    );

    let results = vec![LayerAnalysisResult::loading(LayerId::Story)];
    let personnel = PersonnelAggregate::default();
    assert_eq!(
        build_final_report_prompt("Arrival", ReviewStage::Released, &results, &personnel, None),
        build_final_report_prompt("Arrival", ReviewStage::Released, &results, &personnel, None)
    );
    assert_eq!(build_financials_prompt("Arrival"), build_financials_prompt("Arrival"));
    assert_eq!(
        build_roi_prompt("Arrival", 47e6, None, false, &results),
        build_roi_prompt("Arrival", 47e6, None, false, &results)
    );
    assert_eq!(
        build_personnel_prompt("Amy Adams", PersonnelType::Actor),
        build_personnel_prompt("Amy Adams", PersonnelType::Actor)
    );
    assert_eq!(
        build_title_suggestion_prompt("Arival"),
        build_title_suggestion_prompt("Arival")
    );
}

#[test]
fn every_layer_prompt_embeds_layer_anchors() {
    for id in LayerId::ALL {
        let prompt = build_layer_prompt("Arrival", ReviewStage::Released, &id.definition());
        for anchor in [DIRECTOR, MAIN_CAST, POTENTIAL_ENHANCEMENTS, SUGGESTED_SCORE] {
            assert!(prompt.contains(anchor), "{id} prompt missing {anchor}");
        }
    }
}

#[test]
fn report_prompt_embeds_report_anchors() {
    let prompt = build_final_report_prompt(
        "Arrival",
        ReviewStage::Released,
        &[],
        &PersonnelAggregate::default(),
        None,
    );
    for anchor in [TWITTER_START, LINKEDIN_START, OVERALL_IMPROVEMENTS] {
        assert!(prompt.contains(anchor), "report prompt missing {anchor}");
    }
}
