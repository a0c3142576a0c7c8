use super::*;

/// Tests finding a profile by email regardless of case.
///
/// Expected: Ok(Some) for a differently-cased email
#[tokio::test]
async fn finds_profile_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let created = ProfileFactory::new(db).email("a@x.com").build().await?;

    let repo = UserProfileRepository::new(db);
    let found = repo.find_by_email("A@X.COM").await?;

    assert_eq!(found.map(|p| p.id), Some(created.id));

    Ok(())
}

/// Tests lookup of an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserProfileRepository::new(db);
    let found = repo.find_by_email("nobody@x.com").await?;

    assert!(found.is_none());

    Ok(())
}
