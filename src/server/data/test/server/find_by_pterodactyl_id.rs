use super::*;

/// Tests finding a server by panel id.
///
/// Expected: Ok(Some) for the stored id, Ok(None) otherwise
#[tokio::test]
async fn finds_server_by_panel_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .with_table(Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_profile(db).await?;
    ServerFactory::new(db, owner.id)
        .pterodactyl_server_id(99)
        .build()
        .await?;

    let repo = ServerRepository::new(db);

    assert!(repo.find_by_pterodactyl_id(99).await?.is_some());
    assert!(repo.find_by_pterodactyl_id(100).await?.is_none());

    Ok(())
}
