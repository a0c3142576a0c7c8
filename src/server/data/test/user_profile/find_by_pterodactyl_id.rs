use super::*;

/// Tests finding a linked profile by panel id.
///
/// Expected: Ok(Some) only for the linked panel id
#[tokio::test]
async fn finds_linked_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let linked = ProfileFactory::new(db).pterodactyl_id(7).build().await?;
    ProfileFactory::new(db).build().await?;

    let repo = UserProfileRepository::new(db);

    assert_eq!(
        repo.find_by_pterodactyl_id(7).await?.map(|p| p.id),
        Some(linked.id)
    );
    assert!(repo.find_by_pterodactyl_id(8).await?.is_none());

    Ok(())
}
