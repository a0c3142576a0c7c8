use super::*;

/// Tests that only one caller can hold the lease.
///
/// Expected: first claim succeeds, second fails until release
#[tokio::test]
async fn lease_is_exclusive_until_released() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PterodactylConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_config(db).await?;
    let ttl = Duration::minutes(15);

    let repo = PterodactylConfigRepository::new(db);

    let until = repo.try_acquire_sync_lease(Utc::now(), ttl).await?.unwrap();
    assert!(repo.try_acquire_sync_lease(Utc::now(), ttl).await?.is_none());
    assert!(repo.get_checkpoint().await?.in_progress(Utc::now()));

    assert!(repo.release_sync_lease(until).await?);

    assert!(!repo.get_checkpoint().await?.in_progress(Utc::now()));
    assert!(repo.try_acquire_sync_lease(Utc::now(), ttl).await?.is_some());

    Ok(())
}

/// Tests that an expired lease left by a crashed run can be reclaimed.
///
/// Expected: Ok(true)
#[tokio::test]
async fn reclaims_expired_lease() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PterodactylConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    create_config_with_lease(db, Some(Utc::now() - Duration::minutes(1))).await?;

    let repo = PterodactylConfigRepository::new(db);

    assert!(
        repo.try_acquire_sync_lease(Utc::now(), Duration::minutes(15))
            .await?
            .is_some()
    );

    Ok(())
}

/// Tests that the lease can be claimed on a database without the seeded row.
///
/// Expected: Ok(true)
#[tokio::test]
async fn acquires_without_seeded_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PterodactylConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PterodactylConfigRepository::new(db);

    assert!(
        repo.try_acquire_sync_lease(Utc::now(), Duration::minutes(15))
            .await?
            .is_some()
    );

    Ok(())
}

/// Tests releasing a lease that expired and was taken over by a later run.
///
/// Expected: release reports Ok(false) and the later run keeps its lease
#[tokio::test]
async fn stale_release_keeps_newer_lease() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PterodactylConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_config(db).await?;
    let ttl = Duration::minutes(15);

    let repo = PterodactylConfigRepository::new(db);

    let stale = repo
        .try_acquire_sync_lease(Utc::now() - Duration::minutes(20), ttl)
        .await?
        .unwrap();
    let current = repo.try_acquire_sync_lease(Utc::now(), ttl).await?.unwrap();

    assert!(!repo.release_sync_lease(stale).await?);

    let checkpoint = repo.get_checkpoint().await?;
    assert_eq!(checkpoint.sync_lease_until, Some(current));
    assert!(repo.try_acquire_sync_lease(Utc::now(), ttl).await?.is_none());

    Ok(())
}

/// Tests claiming with a TTL past the representable date range.
///
/// Expected: Err(DbErr) and no lease written
#[tokio::test]
async fn out_of_range_ttl_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PterodactylConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_config(db).await?;

    let repo = PterodactylConfigRepository::new(db);

    let result = repo
        .try_acquire_sync_lease(Utc::now(), Duration::days(365 * 1_000_000))
        .await;

    assert!(result.is_err());
    assert!(repo.get_checkpoint().await?.sync_lease_until.is_none());

    Ok(())
}
