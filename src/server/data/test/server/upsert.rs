use super::*;

/// Tests inserting a new server.
///
/// Expected: Ok with limits and owner stored
#[tokio::test]
async fn inserts_new_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .with_table(Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_profile(db).await?;

    let repo = ServerRepository::new(db);
    let server = repo.upsert(param(99, owner.id)).await?;

    assert_eq!(server.pterodactyl_server_id, 99);
    assert_eq!(server.user_id, owner.id);
    assert_eq!(
        server.limits,
        ServerLimits {
            cpu: 2,
            memory: 2048,
            disk: 20000
        }
    );

    Ok(())
}

/// Tests updating every mutable field of an existing server.
///
/// Verifies that a second upsert with the same panel id rewrites the row in place,
/// including the owner, rather than inserting a second row.
///
/// Expected: Ok with one row holding the new values and the original id
#[tokio::test]
async fn updates_existing_server_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .with_table(Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let first_owner = factory::create_profile(db).await?;
    let second_owner = factory::create_profile(db).await?;
    let repo = ServerRepository::new(db);
    let original = repo.upsert(param(99, first_owner.id)).await?;

    let mut changed = param(99, second_owner.id);
    changed.name = "renamed".to_string();
    changed.status = Some("suspended".to_string());
    changed.limits.memory = 4096;
    let updated = repo.upsert(changed).await?;

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.status.as_deref(), Some("suspended"));
    assert_eq!(updated.limits.memory, 4096);
    assert_eq!(updated.user_id, second_owner.id);
    assert_eq!(Server::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a server cannot reference a missing owner.
///
/// Expected: Err from the foreign key
#[tokio::test]
async fn fails_for_missing_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .with_table(Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    let result = repo.upsert(param(99, Uuid::now_v7())).await;

    assert!(result.is_err());

    Ok(())
}
