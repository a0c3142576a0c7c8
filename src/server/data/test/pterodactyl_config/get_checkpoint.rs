use super::*;

/// Tests reading the checkpoint when no row exists.
///
/// Expected: Ok with empty values
#[tokio::test]
async fn returns_empty_without_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PterodactylConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PterodactylConfigRepository::new(db);
    let checkpoint = repo.get_checkpoint().await?;

    assert!(checkpoint.last_sync.is_none());
    assert!(checkpoint.sync_lease_until.is_none());

    Ok(())
}
