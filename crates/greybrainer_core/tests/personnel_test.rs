use greybrainer_core::{Citation, LayerAnalysisResult, LayerId, PersonnelAggregate};

fn layer(id: LayerId, director: Option<&str>, cast: Option<&[&str]>) -> LayerAnalysisResult {
    let mut result = LayerAnalysisResult::loading(id);
    result.is_loading = false;
    result.director_found = director.map(str::to_string);
    result.cast_found = cast.map(|c| c.iter().map(|s| s.to_string()).collect());
    result
}

#[test]
fn later_layer_overwrites_director_in_fixed_order() {
    let story = layer(LayerId::Story, Some("A"), None);
    let concept = layer(LayerId::Conceptualization, Some("B"), None);

    // Supplied out of order, folded in layer order
    let aggregate = PersonnelAggregate::fold(&[concept.clone(), story.clone()]);
    assert_eq!(aggregate.director.as_deref(), Some("B"));

    let aggregate = PersonnelAggregate::fold(&[story, concept]);
    assert_eq!(aggregate.director.as_deref(), Some("B"));
}

#[test]
fn empty_values_do_not_clear_earlier_ones() {
    let story = layer(LayerId::Story, Some("Nolan"), Some(&["Actor One"]));
    let concept = layer(LayerId::Conceptualization, Some("  "), Some(&[]));
    let performance = layer(LayerId::Performance, None, None);

    let aggregate = PersonnelAggregate::fold(&[story, concept, performance]);
    assert_eq!(aggregate.director.as_deref(), Some("Nolan"));
    assert_eq!(aggregate.cast, Some(vec!["Actor One".to_string()]));
}

#[test]
fn citations_are_unioned_by_uri() {
    let mut story = layer(LayerId::Story, None, None);
    story.citations = vec![
        Citation::new("https://a", "First A"),
        Citation::new("https://b", "B"),
    ];
    let mut performance = layer(LayerId::Performance, None, None);
    performance.citations = vec![
        Citation::new("https://a", "Second A"),
        Citation::new("https://c", "C"),
    ];

    let aggregate = PersonnelAggregate::fold(&[story, performance]);
    let uris: Vec<_> = aggregate.citations.iter().map(|c| c.uri.as_str()).collect();
    assert_eq!(uris, vec!["https://a", "https://b", "https://c"]);
    assert_eq!(aggregate.citations[0].title, "First A");
}
