// src/attachments.rs
//
// Transient preview registry for file-field answers. The bytes exist only to
// serve a local preview; they never enter an order message (the answer value
// is the original filename alone). Releasing or superseding a preview frees
// its bytes so repeated attach/detach cycles cannot accumulate handles.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct PreviewHandle {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Default)]
pub struct AttachmentStore {
    inner: Arc<Mutex<HashMap<String, PreviewHandle>>>,
}

impl AttachmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, filename: String, content_type: String, bytes: Vec<u8>) -> String {
        let id = Uuid::new_v4().to_string();
        self.inner.lock().await.insert(
            id.clone(),
            PreviewHandle {
                filename,
                content_type,
                bytes,
            },
        );
        id
    }

    pub async fn get(&self, id: &str) -> Option<PreviewHandle> {
        self.inner.lock().await.get(id).cloned()
    }

    /// Idempotent release; the handle and its bytes are dropped here.
    pub async fn release(&self, id: &str) -> bool {
        self.inner.lock().await.remove(id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}

/// Keeps letters (any script), digits, dots, underscores and dashes.
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '.' || *c == '_' || *c == '-')
        .collect()
}

/// Preview content type from the filename extension; the upload never
/// declares one we would trust anyway.
pub fn guess_content_type(filename: &str) -> &'static str {
    match filename.rsplit('.').next().map(|e| e.to_ascii_lowercase()).as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("pdf") => "application/pdf",
        Some("mp4") => "video/mp4",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn release_frees_the_handle_and_is_idempotent() {
        let store = AttachmentStore::new();
        let id = store
            .insert("id.png".to_string(), "image/png".to_string(), vec![1, 2, 3])
            .await;
        assert_eq!(store.len().await, 1);
        assert!(store.get(&id).await.is_some());

        assert!(store.release(&id).await);
        assert!(!store.release(&id).await);
        assert_eq!(store.len().await, 0);
        assert!(store.get(&id).await.is_none());
    }

    #[tokio::test]
    async fn attach_detach_cycles_do_not_accumulate() {
        let store = AttachmentStore::new();
        for _ in 0..50 {
            let id = store
                .insert("صورة.jpg".to_string(), "image/jpeg".to_string(), vec![0; 128])
                .await;
            store.release(&id).await;
        }
        assert_eq!(store.len().await, 0);
    }

    #[test]
    fn sanitize_keeps_unicode_letters_and_drops_separators() {
        assert_eq!(sanitize_filename("my file (1).png"), "myfile1.png");
        assert_eq!(sanitize_filename("../../etc/passwd"), "....etcpasswd");
        assert_eq!(sanitize_filename("صورة-الهوية.jpg"), "صورة-الهوية.jpg");
    }

    #[test]
    fn content_type_guessed_from_extension() {
        assert_eq!(guess_content_type("a.PNG"), "image/png");
        assert_eq!(guess_content_type("clip.mp4"), "video/mp4");
        assert_eq!(guess_content_type("noext"), "application/octet-stream");
    }
}
