use crate::engine::TMP_MARKER;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tokio::fs;
use tracing::{info, warn};

const STALE_AFTER: Duration = Duration::from_secs(300);

pub(crate) async fn purge_tmp(root: &Path) {
    let (removed, failed) = remove_stale(root, SystemTime::now(), STALE_AFTER).await;
    if removed > 0 || failed > 0 {
        info!(removed, failed, "Cleaned up temporary files");
    }
}

/// Walks the sandbox and deletes temp files older than `threshold`.
async fn remove_stale(root: &Path, now: SystemTime, threshold: Duration) -> (usize, usize) {
    let mut removed = 0;
    let mut failed = 0;
    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %dir.display(), error = %err, "Cannot scan directory");
                continue;
            },
        };

        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            let Ok(file_type) = entry.file_type().await else { continue };

            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_file() && is_tmp(&path) && is_stale(&path, now, threshold).await
            {
                match fs::remove_file(&path).await {
                    Ok(()) => removed += 1,
                    Err(err) => {
                        warn!(path = %path.display(), error = %err, "Temp file removal failed");
                        failed += 1;
                    },
                }
            }
        }
    }

    (removed, failed)
}

fn is_tmp(path: &Path) -> bool {
    path.file_name().and_then(|name| name.to_str()).is_some_and(|name| name.contains(TMP_MARKER))
}

async fn is_stale(path: &Path, now: SystemTime, threshold: Duration) -> bool {
    fs::metadata(path)
        .await
        .ok()
        .and_then(|m| m.modified().ok())
        .and_then(|modified| now.duration_since(modified).ok())
        .is_none_or(|age| age > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn only_stale_temp_files_are_removed() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("rows");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("sheet.json.rhubtmp.1.1"), b"partial").unwrap();
        std::fs::write(tmp.path().join("sheet.json"), b"[]").unwrap();

        let later = SystemTime::now() + Duration::from_secs(3600);
        let (removed, failed) = remove_stale(tmp.path(), later, STALE_AFTER).await;

        assert_eq!((removed, failed), (1, 0));
        assert!(tmp.path().join("sheet.json").exists());
        assert!(!nested.join("sheet.json.rhubtmp.1.1").exists());
    }

    #[tokio::test]
    async fn fresh_temp_files_survive() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("a.json.rhubtmp.7.1"), b"x").unwrap();

        let (removed, _) = remove_stale(tmp.path(), SystemTime::now(), STALE_AFTER).await;

        assert_eq!(removed, 0);
    }
}
