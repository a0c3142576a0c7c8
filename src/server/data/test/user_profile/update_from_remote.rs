use super::*;

/// Tests overwriting panel-owned fields.
///
/// Verifies that names, admin flag, link and sync time take the panel's values
/// while the stored email is left unchanged.
///
/// Expected: Ok with fields overwritten and email preserved
#[tokio::test]
async fn overwrites_panel_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let existing = ProfileFactory::new(db)
        .email("a@x.com")
        .name("Old", "Name")
        .build()
        .await?;
    let synced_at = Utc::now();
    let mut remote = remote_user(7, "other@x.com");
    remote.is_root_admin = true;

    let repo = UserProfileRepository::new(db);
    let updated = repo
        .update_from_remote(existing.id, &remote, synced_at)
        .await?;

    assert_eq!(updated.email, "a@x.com");
    assert_eq!(updated.first_name, "Remote");
    assert_eq!(updated.last_name, "User");
    assert!(updated.is_admin);
    assert_eq!(updated.pterodactyl_id, Some(7));
    assert_eq!(updated.last_synced_at, Some(synced_at));

    Ok(())
}
