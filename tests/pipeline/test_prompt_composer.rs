// Tests for grounded prompt composition

use fabstir_rag_chat::{PromptComposer, ScoredMatch};

fn du_matches() -> Vec<ScoredMatch> {
    vec![
        ScoredMatch {
            score: 0.91,
            fact_text: "DU was founded in 1864".to_string(),
        },
        ScoredMatch {
            score: 0.27,
            fact_text: "DU's mascot is the Pioneer".to_string(),
        },
    ]
}

#[test]
fn test_compose_is_deterministic() {
    let composer = PromptComposer::default();
    let matches = du_matches();

    let first = composer.compose("When was DU founded?", &matches);
    let second = composer.compose("When was DU founded?", &matches);

    assert_eq!(first, second, "identical input must compose byte-identically");
}

#[test]
fn test_compose_places_top_fact_first_and_ends_with_answer() {
    let composer = PromptComposer::default();
    let prompt = composer.compose("When was DU founded?", &du_matches());

    assert!(prompt.contains("Query: When was DU founded?"));

    let founding = prompt.find("Fact 1: DU was founded in 1864").unwrap();
    let mascot = prompt.find("Fact 2: DU's mascot is the Pioneer").unwrap();
    assert!(founding < mascot, "top-ranked fact must come first");

    assert!(prompt.ends_with("Answer:"));
}

#[test]
fn test_compose_enumerates_matches_in_ranking_order() {
    let composer = PromptComposer::default();
    let matches: Vec<ScoredMatch> = (0..4)
        .map(|i| ScoredMatch {
            score: 1.0 - i as f32 * 0.1,
            fact_text: format!("fact number {}", i),
        })
        .collect();

    let prompt = composer.compose("list them", &matches);
    for i in 0..4 {
        assert!(prompt.contains(&format!("Fact {}: fact number {}", i + 1, i)));
    }
}

#[test]
fn test_compose_with_no_matches_still_has_sentinel() {
    let composer = PromptComposer::default();
    let prompt = composer.compose("anything", &[]);

    assert!(!prompt.contains("Fact 1:"));
    assert!(prompt.ends_with("Answer:"));
}

#[test]
fn test_custom_preamble_is_used_verbatim() {
    let composer = PromptComposer::new("Answer using only the facts below.");
    let prompt = composer.compose("q", &[]);

    assert!(prompt.starts_with("Answer using only the facts below. Query: q"));
}
