use greybrainer_core::{Citation, GatewayResponse, ImprovementItems, LayerId};
use greybrainer_extract::anchors::{PLOT_SHAPE_END, PLOT_SHAPE_START};
use greybrainer_extract::{parse_layer_response, parse_plot_shape, parse_score};

fn story_response() -> String {
    format!(
        "Director: Denis Villeneuve\n\
         Main Cast: Timothée Chalamet, Zendaya, Rebecca Ferguson\n\n\
         The screenplay distills a dense novel into a clean revenge arc.\n\n\n\
         Its themes of messianic power land with unusual restraint.\n\n\
         {PLOT_SHAPE_START}\n\
         Shape Name: Man in Hole\n\
         Justification: House Atreides falls, Paul rises from the desert.\n\
         Plot Points: (0.0, 0.4, 'Arrival on Arrakis'), (0.4, -0.9, 'The betrayal'), (1.0, 0.7, 'Paul leads the Fremen')\n\
         {PLOT_SHAPE_END}\n\n\
         Potential Enhancements:\n\
         - Give Chani more interiority\n\
         - Clarify the Bene Gesserit plan\n\n\
         Suggested Score: 8.5/10\n"
    )
}

#[test]
fn story_layer_fields_are_extracted() {
    let response = GatewayResponse::with_citations(
        story_response(),
        vec![Citation::new("https://example.com/dune", "Dune review")],
    );
    let result = parse_layer_response(LayerId::Story, &response);

    assert!(!result.is_loading);
    assert_eq!(result.director_found.as_deref(), Some("Denis Villeneuve"));
    assert_eq!(result.cast_found.as_ref().map(Vec::len), Some(3));
    assert_eq!(result.suggested_score, Some(8.5));
    assert_eq!(
        result.improvement_items,
        Some(ImprovementItems::List(vec![
            "Give Chani more interiority".into(),
            "Clarify the Bene Gesserit plan".into(),
        ]))
    );
    let shape = result.plot_shape.as_ref().expect("plot shape");
    assert_eq!(shape.shape_name, "Man in Hole");
    assert_eq!(shape.points.len(), 3);
    assert_eq!(result.citations.len(), 1);
    assert_eq!(result.raw_text.as_deref(), Some(story_response().as_str()));
}

#[test]
fn cleaned_text_keeps_only_prose() {
    let response = GatewayResponse::from_text(story_response());
    let result = parse_layer_response(LayerId::Story, &response);
    let cleaned = result.cleaned_text.expect("cleaned text");

    assert_eq!(
        cleaned,
        "The screenplay distills a dense novel into a clean revenge arc.\n\n\
         Its themes of messianic power land with unusual restraint."
    );
    assert!(!cleaned.contains(PLOT_SHAPE_START));
    assert!(parse_plot_shape(&cleaned).is_none());
    assert!(parse_score(&cleaned).is_none());
}

#[test]
fn non_story_layers_ignore_plot_shape() {
    let response = GatewayResponse::from_text(story_response());
    let result = parse_layer_response(LayerId::Performance, &response);

    assert!(result.plot_shape.is_none());
    // Block was not parsed for this layer, so it stays in the prose
    assert!(
        result
            .cleaned_text
            .as_deref()
            .is_some_and(|text| text.contains(PLOT_SHAPE_START))
    );
}

#[test]
fn unstructured_response_degrades_gracefully() {
    let response = GatewayResponse::from_text("A thoughtful but unstructured review.");
    let result = parse_layer_response(LayerId::Conceptualization, &response);

    assert_eq!(result.director_found, None);
    assert_eq!(result.cast_found, None);
    assert_eq!(result.suggested_score, None);
    assert_eq!(result.improvement_items, None);
    assert_eq!(
        result.cleaned_text.as_deref(),
        Some("A thoughtful but unstructured review.")
    );
    assert_eq!(result.error, None);
}
