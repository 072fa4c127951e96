use storage::repository::{AUDIO_MUTED_KEY, PreferenceRepository, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_persists_flags() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_flags?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get_flag(AUDIO_MUTED_KEY).await.unwrap(), None);

    repo.set_flag(AUDIO_MUTED_KEY, true).await.unwrap();
    assert_eq!(repo.get_flag(AUDIO_MUTED_KEY).await.unwrap(), Some(true));

    repo.set_flag(AUDIO_MUTED_KEY, false).await.unwrap();
    assert_eq!(repo.get_flag(AUDIO_MUTED_KEY).await.unwrap(), Some(false));
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.set_flag("sample", true).await.unwrap();
    repo.migrate().await.expect("second migrate");
    assert_eq!(repo.get_flag("sample").await.unwrap(), Some(true));
}

#[tokio::test]
async fn storage_bundle_uses_sqlite() {
    let storage = Storage::sqlite("sqlite:file:memdb_bundle?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage
        .preferences
        .set_flag(AUDIO_MUTED_KEY, true)
        .await
        .unwrap();
    assert_eq!(
        storage.preferences.get_flag(AUDIO_MUTED_KEY).await.unwrap(),
        Some(true)
    );
}
