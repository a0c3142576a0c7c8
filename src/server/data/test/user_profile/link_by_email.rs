use super::*;

/// Tests linking an unlinked profile.
///
/// Expected: Ok(true) and the profile carries the panel id
#[tokio::test]
async fn links_unlinked_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    ProfileFactory::new(db).email("b@x.com").build().await?;

    let repo = UserProfileRepository::new(db);
    let linked = repo.link_by_email("B@x.com", 42, Utc::now()).await?;

    assert!(linked);
    let profile = repo.find_by_email("b@x.com").await?.unwrap();
    assert_eq!(profile.pterodactyl_id, Some(42));
    assert!(profile.last_synced_at.is_some());

    Ok(())
}

/// Tests that an existing link is never replaced.
///
/// Expected: Ok(false) and the original panel id kept
#[tokio::test]
async fn keeps_existing_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    ProfileFactory::new(db)
        .email("b@x.com")
        .pterodactyl_id(5)
        .build()
        .await?;

    let repo = UserProfileRepository::new(db);
    let linked = repo.link_by_email("b@x.com", 42, Utc::now()).await?;

    assert!(!linked);
    let profile = repo.find_by_email("b@x.com").await?.unwrap();
    assert_eq!(profile.pterodactyl_id, Some(5));

    Ok(())
}
