use crate::error::Result;
use crate::models::UploadedDocument;
use std::path::PathBuf;

/// Flat directory of uploaded files keyed by the client-supplied filename.
///
/// Filenames are joined to the root as given. A name with `..` or an absolute
/// path escapes the root; this is left open and only logged.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    /// Creates the root directory if it does not exist yet.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        log::info!("Upload folder ready at {}", root.display());
        Ok(Self { root })
    }

    fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// Writes `bytes` under `filename`, replacing any earlier upload of the same name.
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> Result<UploadedDocument> {
        if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
            log::warn!("Unsanitized upload filename: {:?}", filename);
        }

        let path = self.path_for(filename);
        tokio::fs::write(&path, bytes).await?;
        log::info!("Stored {} ({} bytes) at {}", filename, bytes.len(), path.display());

        Ok(UploadedDocument { path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_missing_root_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("uploads");

        UploadStore::new(&root).unwrap();
        assert!(root.is_dir());
        UploadStore::new(&root).unwrap();
        assert!(root.is_dir());
    }

    #[tokio::test]
    async fn save_writes_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path().join("uploads")).unwrap();

        let doc = store.save("resume.pdf", b"%PDF-1.4 first").await.unwrap();

        assert_eq!(doc.path, dir.path().join("uploads").join("resume.pdf"));
        assert_eq!(std::fs::read(&doc.path).unwrap(), b"%PDF-1.4 first");
    }

    #[tokio::test]
    async fn same_filename_overwrites_previous_upload() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path()).unwrap();

        store.save("resume.pdf", b"a much longer first version").await.unwrap();
        let doc = store.save("resume.pdf", b"second").await.unwrap();

        assert_eq!(std::fs::read(&doc.path).unwrap(), b"second");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
