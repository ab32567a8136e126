use crate::core::{
    registry::Registry,
    types::{ClassifiedResult, Comparison, MatchStatus, NO_MATCH_TITLE, Occurrence},
};

/// Classify one occurrence against the registry.
///
/// Only identifier presence is checked; titles never take part in matching.
pub fn classify(occurrence: Occurrence, registry: &Registry) -> ClassifiedResult {
    let status = if registry.contains(&occurrence.resource_type) {
        MatchStatus::Match
    } else {
        MatchStatus::Mismatch
    };

    let registry_title = match registry {
        Registry::FlatList(_) => None,
        Registry::TitledMap(_) => Some(
            registry
                .title(&occurrence.resource_type)
                .unwrap_or(NO_MATCH_TITLE)
                .to_string(),
        ),
    };

    ClassifiedResult {
        filename: occurrence.filename,
        resource_type: occurrence.resource_type,
        registry_title,
        status,
    }
}

/// Classify every occurrence and order the results by (filename, resource_type).
pub fn compare(occurrences: Vec<Occurrence>, registry: &Registry) -> Comparison {
    let mut results: Vec<ClassifiedResult> = occurrences
        .into_iter()
        .map(|o| classify(o, registry))
        .collect();

    results.sort_by(|a, b| {
        a.filename
            .cmp(&b.filename)
            .then_with(|| a.resource_type.cmp(&b.resource_type))
    });

    Comparison {
        results,
        titled: registry.is_titled(),
    }
}
