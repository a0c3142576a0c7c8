use super::*;

/// Tests recording the run start time on the seeded row.
///
/// Expected: Ok and the checkpoint reflects the new time
#[tokio::test]
async fn records_last_sync() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PterodactylConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_config(db).await?;
    let at = Utc::now();

    let repo = PterodactylConfigRepository::new(db);
    repo.update_last_sync(at).await?;

    assert_eq!(repo.get_checkpoint().await?.last_sync, Some(at));

    Ok(())
}

/// Tests that the row is created when missing.
///
/// Expected: Ok and the checkpoint reflects the new time
#[tokio::test]
async fn creates_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PterodactylConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let at = Utc::now();

    let repo = PterodactylConfigRepository::new(db);
    repo.update_last_sync(at).await?;

    assert_eq!(repo.get_checkpoint().await?.last_sync, Some(at));

    Ok(())
}
