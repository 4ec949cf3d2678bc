//! Round trips against a real bucket. Run with
//! `MINDLOG_TEST_BUCKET=... cargo test -p mindlog-storage -- --ignored`.

use jiff::Timestamp;

use mindlog_core::models::entry::JournalEntry;
use mindlog_core::models::sentiment::{Sentiment, SentimentScores};
use mindlog_storage::error::StorageError;
use mindlog_storage::{EntryRepository, S3Store};

async fn store() -> S3Store {
    let bucket = std::env::var("MINDLOG_TEST_BUCKET").expect("MINDLOG_TEST_BUCKET must be set");
    S3Store::new(mindlog_storage::client::build_client().await, bucket)
}

#[tokio::test]
#[ignore = "requires AWS credentials and a test bucket"]
async fn append_list_delete() {
    let store = store().await;
    let user = format!("test-{}", uuid::Uuid::new_v4());
    let entry = JournalEntry::new(
        &user,
        "s3 round trip",
        Sentiment::Positive,
        0.9,
        SentimentScores {
            positive: 0.9,
            neutral: 0.05,
            negative: 0.05,
        },
        Vec::new(),
        Timestamp::now(),
    );

    store.append(&entry).await.unwrap();
    let listed = EntryRepository::list(&store, &user, None).await.unwrap();
    assert_eq!(listed, vec![entry.clone()]);

    store.delete(&user, entry.id).await.unwrap();
    let err = store.delete(&user, entry.id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}
