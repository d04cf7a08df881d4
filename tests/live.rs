//! Smoke tests against the real catalog. Ignored by default; run with
//! `cargo test -- --ignored` when network access is acceptable.

use hltb::HltbClient;

#[tokio::test]
#[ignore]
async fn detail_fetches_a_known_game() {
    let client = HltbClient::new().unwrap();
    let entry = client.detail("6974").await.unwrap();

    assert_eq!(entry.id, "6974");
    assert!(!entry.name.is_empty());
    assert!(entry.image_url.starts_with("https://"));
    assert!(entry.main_hours >= 0.0);
    assert_eq!(entry.similarity, 1.0);
}

#[tokio::test]
#[ignore]
async fn search_returns_scored_results() {
    let client = HltbClient::new().unwrap();
    let entries = client.search("celeste").await.unwrap();

    assert!(!entries.is_empty());
    for entry in &entries {
        assert!(!entry.id.is_empty());
        assert!((0.0..=1.0).contains(&entry.similarity));
    }
}
