use super::*;
use sea_orm::{ActiveModelTrait, ActiveValue};
use uuid::Uuid;

async fn insert_identity(db: &sea_orm::DatabaseConnection, email: &str) -> Result<Uuid, DbErr> {
    let id = Uuid::now_v7();
    entity::auth_identity::ActiveModel {
        id: ActiveValue::Set(id),
        email: ActiveValue::Set(email.to_string()),
        password_hash: ActiveValue::Set("hash".to_string()),
        password_reset_required: ActiveValue::Set(true),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await?;
    Ok(id)
}

/// Tests creating a profile from a panel user.
///
/// Expected: Ok with panel link, names and sync time stored
#[tokio::test]
async fn creates_linked_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let id = insert_identity(db, "a@x.com").await?;
    let synced_at = Utc::now();

    let repo = UserProfileRepository::new(db);
    let profile = repo
        .create(CreateProfileParam::from_remote(
            id,
            &remote_user(7, "a@x.com"),
            synced_at,
        ))
        .await?;

    assert_eq!(profile.id, id);
    assert_eq!(profile.email, "a@x.com");
    assert_eq!(profile.pterodactyl_id, Some(7));
    assert_eq!(profile.first_name, "Remote");
    assert_eq!(profile.last_synced_at, Some(synced_at));

    Ok(())
}

/// Tests that a profile cannot exist without its identity.
///
/// Expected: Err from the foreign key
#[tokio::test]
async fn fails_without_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserProfileRepository::new(db);
    let result = repo
        .create(CreateProfileParam::from_remote(
            Uuid::now_v7(),
            &remote_user(7, "a@x.com"),
            Utc::now(),
        ))
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that two profiles cannot share a panel id.
///
/// Expected: Err on the second link to panel user 7
#[tokio::test]
async fn rejects_duplicate_pterodactyl_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    ProfileFactory::new(db).pterodactyl_id(7).build().await?;
    let id = insert_identity(db, "b@x.com").await?;

    let repo = UserProfileRepository::new(db);
    let result = repo
        .create(CreateProfileParam::from_remote(
            id,
            &remote_user(7, "b@x.com"),
            Utc::now(),
        ))
        .await;

    assert!(result.is_err());

    Ok(())
}
