use super::*;

/// Tests appending an audit row.
///
/// Expected: Ok with every column stored as written
#[tokio::test]
async fn appends_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SyncLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SyncLogRepository::new(db);
    let log = repo
        .create(CreateSyncLogParam {
            entity_type: SyncEntityType::User,
            entity_id: "7".to_string(),
            action: SyncAction::Create,
            status: SyncStatus::Success,
            details: json!({"email": "a@x.com", "pterodactylId": 7}),
        })
        .await?;

    assert_eq!(log.entity_type, SyncEntityType::User);
    assert_eq!(log.entity_id, "7");
    assert_eq!(log.action, SyncAction::Create);
    assert_eq!(log.status, SyncStatus::Success);
    assert_eq!(log.details["pterodactylId"], 7);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
