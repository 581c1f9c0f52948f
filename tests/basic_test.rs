//! Integration tests for the presentation enumerator

use presatlas::{enumerate_presentations, Presentation, SearchConfig, Word};

fn enumerate(max_generators: usize, max_total_length: usize) -> Vec<Presentation> {
    enumerate_presentations(SearchConfig {
        max_generators,
        max_total_length,
        enable_profiling: false,
    })
    .collect()
}

#[test]
fn test_small_catalog_in_order() {
    let notations: Vec<String> = enumerate(2, 3).iter().map(|p| p.to_string()).collect();
    assert_eq!(
        notations,
        vec![
            "<a | >",
            "<a | aa>",
            "<a | aaa>",
            "<a, b | >",
            "<a, b | aa>",
            "<a, b | bb>",
            "<a, b | aaa>",
            "<a, b | aab>",
            "<a, b | aab'>",
            "<a, b | bbb>",
        ]
    );
}

#[test]
fn test_no_generator_is_ever_eliminated_by_a_short_relator() {
    // A relator of length 1 equates its generator with the identity, so the
    // single-generator cell up to total length 2 contains exactly the free
    // group and the square.
    let presentations = enumerate(1, 2);
    assert_eq!(presentations.len(), 2);
    assert!(presentations[0].relations().is_empty());
    assert_eq!(presentations[1].relations(), &[Word::new(vec![1, 1])]);
}

#[test]
fn test_length_one_relators_never_appear() {
    for presentation in enumerate(3, 5) {
        for relation in presentation.relations() {
            assert!(relation.len() >= 2, "length-1 relator in {presentation}");
        }
    }
}

#[test]
fn test_enumeration_is_idempotent() {
    let first = enumerate(2, 5);
    let second = enumerate(2, 5);
    assert_eq!(first, second);
}

#[test]
fn test_lazy_consumption_matches_full_run() {
    let full = enumerate(3, 4);
    let partial: Vec<Presentation> = enumerate_presentations(SearchConfig {
        max_generators: 3,
        max_total_length: 4,
        enable_profiling: false,
    })
    .take(5)
    .collect();
    assert_eq!(partial, full[..5].to_vec());
}

#[test]
fn test_free_presentation_leads_every_generator_count() {
    let presentations = enumerate(3, 3);
    let free: Vec<usize> = presentations
        .iter()
        .filter(|p| p.relations().is_empty())
        .map(|p| p.generator_count())
        .collect();
    assert_eq!(free, vec![1, 2, 3]);
}
