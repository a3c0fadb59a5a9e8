use rhub_storage::{Storage, StorageError};
use tempfile::TempDir;

async fn storage(temp: &TempDir) -> Storage {
    Storage::builder().root(temp.path()).connect().await.unwrap()
}

#[tokio::test]
async fn traversal_and_absolute_paths_are_blocked() {
    let temp = TempDir::new().unwrap();
    let storage = storage(&temp).await;

    assert!(storage.resolve("../etc/passwd").is_err());
    assert!(storage.resolve("foo/../../bar").is_err());
    assert!(matches!(
        storage.resolve("/etc/passwd"),
        Err(StorageError::PathTraversalAttempt { .. })
    ));
}

#[tokio::test]
async fn write_replaces_documents_atomically() {
    let temp = TempDir::new().unwrap();
    let storage = storage(&temp).await;

    storage.write("rm_partner_codes.json", b"[1]").await.unwrap();
    storage.write("rm_partner_codes.json", b"[1,2]").await.unwrap();

    assert_eq!(storage.read("rm_partner_codes.json").await.unwrap(), b"[1,2]");

    let leftovers: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .flatten()
        .filter(|e| e.file_name().to_string_lossy().contains(".rhubtmp."))
        .collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn nested_documents_create_parents() {
    let temp = TempDir::new().unwrap();
    let storage = storage(&temp).await;

    storage.write("sheets/2025/sheet.json", b"[]").await.unwrap();
    assert!(storage.exists("sheets/2025/sheet.json").unwrap());
    assert!(!storage.exists("sheets/2025").unwrap());
}

#[tokio::test]
async fn missing_files_are_reported() {
    let temp = TempDir::new().unwrap();
    let storage = storage(&temp).await;

    let err = storage.read("missing.json").await.unwrap_err();
    assert!(matches!(err, StorageError::FileNotFound { .. }));
    assert!(storage.read_optional("missing.json").await.unwrap().is_none());
    assert!(matches!(
        storage.delete("missing.json").await,
        Err(StorageError::FileNotFound { .. })
    ));
}

#[tokio::test]
async fn delete_removes_file() {
    let temp = TempDir::new().unwrap();
    let storage = storage(&temp).await;

    storage.write("sheet.json", b"[]").await.unwrap();
    storage.delete("sheet.json").await.unwrap();
    assert!(!storage.exists("sheet.json").unwrap());
}

#[tokio::test]
async fn connect_without_create_requires_existing_root() {
    let temp = TempDir::new().unwrap();
    let result = Storage::builder().root(temp.path().join("absent")).create(false).connect().await;
    assert!(matches!(result, Err(StorageError::Io { .. })));
}

#[tokio::test]
async fn root_is_canonical() {
    let temp = TempDir::new().unwrap();
    let storage = storage(&temp).await;
    assert_eq!(storage.root(), temp.path().canonicalize().unwrap());
}
