use super::*;

/// Tests listing servers ordered by name.
///
/// Expected: Ok with servers sorted alphabetically
#[tokio::test]
async fn returns_servers_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .with_table(Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_profile(db).await?;
    ServerFactory::new(db, owner.id).name("charlie").build().await?;
    ServerFactory::new(db, owner.id).name("alpha").build().await?;
    ServerFactory::new(db, owner.id).name("bravo").build().await?;

    let repo = ServerRepository::new(db);
    let servers = repo.get_all().await?;

    let names: Vec<_> = servers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "bravo", "charlie"]);

    Ok(())
}

/// Tests listing with no servers.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_servers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .with_table(Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
