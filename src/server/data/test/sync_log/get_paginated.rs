use super::*;

/// Tests paging through the audit trail newest first.
///
/// Expected: Ok with first page holding the two newest rows and correct totals
#[tokio::test]
async fn pages_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SyncLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();
    for (i, id) in ["1", "2", "3"].iter().enumerate() {
        factory::create_sync_log(db, "user", id, "success", now + Duration::seconds(i as i64))
            .await?;
    }

    let repo = SyncLogRepository::new(db);
    let first = repo.get_paginated(0, 2).await?;
    let second = repo.get_paginated(1, 2).await?;

    let ids: Vec<_> = first.logs.iter().map(|l| l.entity_id.as_str()).collect();
    assert_eq!(ids, vec!["3", "2"]);
    assert_eq!(first.total, 3);
    assert_eq!(first.total_pages, 2);
    assert_eq!(second.logs.len(), 1);
    assert_eq!(second.logs[0].entity_id, "1");

    Ok(())
}

/// Tests that an unknown stored value is reported instead of guessed.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SyncLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_sync_log(db, "user", "1", "partial", Utc::now()).await?;

    let repo = SyncLogRepository::new(db);
    let result = repo.get_paginated(0, 10).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
