// Tests for the family-tagged embedding store

use fabstir_rag_chat::{EmbeddingStore, ModelFamily, RagError};

#[test]
fn test_families_are_isolated_columns() {
    let mut store = EmbeddingStore::new(["shared fact"]);
    store.put(0, ModelFamily::Llama, vec![1.0, 0.0]).unwrap();
    store.put(0, ModelFamily::Mistral, vec![0.0, 1.0]).unwrap();

    let llama = store.vectors_for(ModelFamily::Llama);
    let mistral = store.vectors_for(ModelFamily::Mistral);

    assert_eq!(llama[0].0, &[1.0, 0.0]);
    assert_eq!(mistral[0].0, &[0.0, 1.0]);
    assert!(store.vectors_for(ModelFamily::Phi).is_empty());
}

#[test]
fn test_reinsert_replaces_previous_embedding() {
    let mut store = EmbeddingStore::new(["a fact"]);
    store.put(0, ModelFamily::Phi, vec![1.0]).unwrap();
    store.put(0, ModelFamily::Phi, vec![2.0]).unwrap();

    let slice = store.vectors_for(ModelFamily::Phi);
    assert_eq!(slice.len(), 1);
    assert_eq!(slice[0].0, &[2.0]);
}

#[test]
fn test_unsupported_put_leaves_every_family_unaffected() {
    let mut store = EmbeddingStore::new(["first", "second"]);
    store.put(0, ModelFamily::Mixtral, vec![0.5]).unwrap();

    let result = store.put(1, ModelFamily::Unsupported, vec![0.9]);
    assert!(matches!(result, Err(RagError::UnsupportedFamily(_))));

    for family in ModelFamily::SUPPORTED {
        let expected = if family == ModelFamily::Mixtral { 1 } else { 0 };
        assert_eq!(store.vectors_for(family).len(), expected);
    }
    // The rejected fact keeps its text
    assert_eq!(store.facts()[1].text(), "second");
}

#[test]
fn test_vectors_for_preserves_corpus_order_with_gaps() {
    let mut store = EmbeddingStore::new(["a", "b", "c", "d"]);
    store.put(3, ModelFamily::Llama, vec![0.4]).unwrap();
    store.put(1, ModelFamily::Llama, vec![0.2]).unwrap();

    let slice = store.vectors_for(ModelFamily::Llama);
    let texts: Vec<&str> = slice.iter().map(|(_, text)| *text).collect();
    assert_eq!(texts, vec!["b", "d"]);
}

#[test]
fn test_empty_store() {
    let store = EmbeddingStore::new(Vec::<String>::new());
    assert!(store.is_empty());
    assert!(store.vectors_for(ModelFamily::Llama).is_empty());
}
