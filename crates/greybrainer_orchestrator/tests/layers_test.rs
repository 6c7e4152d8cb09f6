//! Layer fan-out, fault isolation and personnel folding.

mod test_utils;

use greybrainer_core::{AnalysisInput, Citation, LayerId, ReviewStage};
use greybrainer_error::GatewayErrorKind;
use greybrainer_orchestrator::{AnalysisOrchestrator, AnalysisPhase};
use std::sync::Arc;
use test_utils::{ScriptedGateway, layer_reply};

fn dune() -> AnalysisInput {
    AnalysisInput::new("Dune", ReviewStage::Released)
}

#[tokio::test]
async fn one_failed_layer_does_not_block_the_others() -> anyhow::Result<()> {
    let gateway = Arc::new(
        ScriptedGateway::new()
            .all_layers(&layer_reply("Denis Villeneuve"))
            .fail(
                "layer_conceptualization",
                GatewayErrorKind::Http {
                    status_code: 503,
                    message: "model overloaded".to_string(),
                },
            ),
    );
    let orchestrator = AnalysisOrchestrator::new(gateway.clone());

    let phase = orchestrator.start_analysis(dune()).await?;
    assert_eq!(phase, AnalysisPhase::LayersDone);
    assert_eq!(gateway.calls(), 3);

    let state = orchestrator.state();
    assert!(state.layers_settled());
    for id in [LayerId::Story, LayerId::Performance] {
        let layer = state.layer(id).expect("layer present");
        assert!(layer.raw_text.is_some());
        assert_eq!(layer.suggested_score, Some(8.5));
        assert!(layer.error.is_none());
    }

    let failed = state.layer(LayerId::Conceptualization).expect("layer present");
    assert!(failed.raw_text.is_none());
    assert!(failed.error.as_deref().is_some_and(|e| e.contains("model overloaded")));
    assert!(!failed.is_loading);

    assert_eq!(state.personnel.director.as_deref(), Some("Denis Villeneuve"));
    assert!(state.error.is_none());
    Ok(())
}

#[tokio::test]
async fn all_layers_failing_still_settles() -> anyhow::Result<()> {
    let gateway = Arc::new(ScriptedGateway::new());
    let orchestrator = AnalysisOrchestrator::new(gateway.clone());

    orchestrator.start_analysis(dune()).await?;

    let state = orchestrator.state();
    assert_eq!(state.phase, AnalysisPhase::LayersDone);
    assert!(state.layers.iter().all(|l| l.error.is_some()));
    assert!(state.personnel.director.is_none());
    Ok(())
}

#[tokio::test]
async fn credential_failure_is_surfaced_on_the_run() -> anyhow::Result<()> {
    let gateway = Arc::new(
        ScriptedGateway::new()
            .all_layers(&layer_reply("Denis Villeneuve"))
            .fail(
                "layer_story",
                GatewayErrorKind::InvalidCredential {
                    provider: "gemini".to_string(),
                    message: "API key not valid".to_string(),
                },
            ),
    );
    let orchestrator = AnalysisOrchestrator::new(gateway);

    orchestrator.start_analysis(dune()).await?;

    let state = orchestrator.state();
    let run_error = state.error.as_ref().expect("credential error recorded");
    assert!(run_error.contains("check your API key"));
    assert!(state.layer(LayerId::Performance).is_some_and(|l| l.raw_text.is_some()));
    Ok(())
}

#[tokio::test]
async fn last_non_empty_director_wins_in_layer_order() -> anyhow::Result<()> {
    let gateway = Arc::new(
        ScriptedGateway::new()
            .reply("layer_story", &layer_reply("Alejandro Jodorowsky"))
            .reply("layer_conceptualization", "Director: N/A\nSuggested Score: 7/10")
            .reply("layer_performance", &layer_reply("Denis Villeneuve")),
    );
    let orchestrator = AnalysisOrchestrator::new(gateway);

    orchestrator.start_analysis(dune()).await?;

    let state = orchestrator.state();
    assert_eq!(state.personnel.director.as_deref(), Some("Denis Villeneuve"));
    assert_eq!(
        state.personnel.cast,
        Some(vec!["Timothée Chalamet".to_string(), "Zendaya".to_string()])
    );
    Ok(())
}

#[tokio::test]
async fn shared_citations_are_merged_once() -> anyhow::Result<()> {
    let text = layer_reply("Denis Villeneuve");
    let gateway = Arc::new(
        ScriptedGateway::new()
            .reply_cited(
                "layer_story",
                &text,
                vec![Citation::new("https://example.com/dune", "Dune review")],
            )
            .reply_cited(
                "layer_conceptualization",
                &text,
                vec![
                    Citation::new("https://example.com/dune", "A different title"),
                    Citation::new("https://example.com/score", "Hans Zimmer interview"),
                ],
            )
            .reply("layer_performance", &text),
    );
    let orchestrator = AnalysisOrchestrator::new(gateway);

    orchestrator.start_analysis(dune()).await?;

    let citations = orchestrator.state().personnel.citations;
    assert_eq!(citations.len(), 2);
    let dune = citations
        .iter()
        .find(|c| c.uri == "https://example.com/dune")
        .expect("dune citation");
    assert_eq!(dune.title, "Dune review");
    Ok(())
}

#[tokio::test]
async fn layer_calls_use_their_own_operation_labels() -> anyhow::Result<()> {
    let gateway = Arc::new(ScriptedGateway::new().all_layers(&layer_reply("Denis Villeneuve")));
    let orchestrator = AnalysisOrchestrator::new(gateway.clone());

    orchestrator.start_analysis(dune()).await?;

    let mut operations = gateway.operations();
    operations.sort();
    assert_eq!(
        operations,
        vec!["layer_conceptualization", "layer_performance", "layer_story"]
    );
    assert!(gateway.prompts_for("layer_story")[0].contains("\"Dune\""));
    Ok(())
}
