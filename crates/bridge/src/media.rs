//! Media index maintenance on the `ghostty/media` channel.
//!
//! The application saves and removes images and videos on shared storage.
//! It asks the host to index new files (`scanFile`) and to drop index
//! entries for files it deleted (`notifyMediaDeleted`), so gallery apps stay
//! in sync.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use ghostty_protocol::{MethodCall, MethodResponse};

use crate::channel::MethodHandler;
use crate::error::{MediaError, Result};

/// Method asking the host to index a file.
pub const SCAN_FILE: &str = "scanFile";

/// Method telling the host a media file was deleted.
pub const NOTIFY_MEDIA_DELETED: &str = "notifyMediaDeleted";

/// Argument naming the file for both media methods.
pub const PATH_ARGUMENT: &str = "path";

/// A media index collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MediaCollection {
    /// Still images.
    Images,
    /// Video clips.
    Videos,
}

impl MediaCollection {
    /// The order deleted files are looked up in.
    pub const LOOKUP_ORDER: [Self; 2] = [Self::Images, Self::Videos];

    /// Returns the collection segment used in content URIs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Images => "images",
            Self::Videos => "video",
        }
    }

    /// Guesses the collection from a file extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use ghostty_bridge::MediaCollection;
    ///
    /// assert_eq!(MediaCollection::for_path(Path::new("a.JPG")), Some(MediaCollection::Images));
    /// assert_eq!(MediaCollection::for_path(Path::new("b.mp4")), Some(MediaCollection::Videos));
    /// assert_eq!(MediaCollection::for_path(Path::new("notes.txt")), None);
    /// ```
    #[must_use]
    pub fn for_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "webp" | "heic" | "heif" | "bmp" => Some(Self::Images),
            "mp4" | "mov" | "m4v" | "mkv" | "webm" | "3gp" => Some(Self::Videos),
            _ => None,
        }
    }
}

/// Address of an entry in the media index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MediaUri {
    /// Collection holding the entry.
    pub collection: MediaCollection,
    /// Row id inside the collection.
    pub id: u64,
}

impl fmt::Display for MediaUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "content://media/external/{}/media/{}",
            self.collection.as_str(),
            self.id
        )
    }
}

/// The platform media index.
pub trait MediaStore {
    /// Indexes the file at `path`. Returns the new entry, or `None` if the
    /// file is not indexable.
    fn scan(&mut self, path: &Path) -> Result<Option<MediaUri>>;

    /// Looks up the entry for `path` in `collection`.
    fn find(&self, collection: MediaCollection, path: &Path) -> Result<Option<MediaUri>>;

    /// Removes an entry.
    fn delete(&mut self, uri: MediaUri) -> Result<()>;
}

/// An in-process media index.
///
/// Scanning checks that the file exists and has a recognized image or video
/// extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use ghostty_bridge::{MediaCollection, MediaStore, MemoryMediaStore};
///
/// let mut store = MemoryMediaStore::default();
/// let uri = store.insert(MediaCollection::Images, "/sdcard/DCIM/a.png");
///
/// let found = store.find(MediaCollection::Images, Path::new("/sdcard/DCIM/a.png")).unwrap();
/// assert_eq!(found, Some(uri));
///
/// store.delete(uri).unwrap();
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryMediaStore {
    entries: BTreeMap<MediaUri, PathBuf>,
    next_id: u64,
}

impl MemoryMediaStore {
    /// Adds an entry without touching the file system.
    pub fn insert(&mut self, collection: MediaCollection, path: impl Into<PathBuf>) -> MediaUri {
        self.next_id += 1;
        let uri = MediaUri {
            collection,
            id: self.next_id,
        };
        self.entries.insert(uri, path.into());
        uri
    }

    /// Returns the number of indexed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the path indexed under `uri`.
    #[must_use]
    pub fn path(&self, uri: MediaUri) -> Option<&Path> {
        self.entries.get(&uri).map(PathBuf::as_path)
    }
}

impl MediaStore for MemoryMediaStore {
    fn scan(&mut self, path: &Path) -> Result<Option<MediaUri>> {
        let Some(collection) = MediaCollection::for_path(path) else {
            return Ok(None);
        };
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Ok(None),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(MediaError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
        if let Some(existing) = self.find(collection, path)? {
            return Ok(Some(existing));
        }
        Ok(Some(self.insert(collection, path)))
    }

    fn find(&self, collection: MediaCollection, path: &Path) -> Result<Option<MediaUri>> {
        Ok(self
            .entries
            .iter()
            .find(|(uri, entry)| uri.collection == collection && entry.as_path() == path)
            .map(|(uri, _)| *uri))
    }

    fn delete(&mut self, uri: MediaUri) -> Result<()> {
        self.entries
            .remove(&uri)
            .map(|_| ())
            .ok_or_else(|| MediaError::UnknownEntry(uri.to_string()))
    }
}

/// Handles the `ghostty/media` channel.
#[derive(Debug, Clone)]
pub struct MediaHandler<M> {
    store: M,
}

impl<M: MediaStore> MediaHandler<M> {
    /// Creates a handler over `store`.
    pub const fn new(store: M) -> Self {
        Self { store }
    }

    /// Returns the media store.
    pub const fn store(&self) -> &M {
        &self.store
    }

    /// Indexes `path`. Returns `true` if an entry was produced.
    pub fn scan_file(&mut self, path: Option<&str>) -> bool {
        let Some(path) = path else {
            return false;
        };
        match self.store.scan(Path::new(path)) {
            Ok(uri) => {
                tracing::debug!(path, uri = ?uri.map(|u| u.to_string()), "scanned media file");
                uri.is_some()
            }
            Err(error) => {
                tracing::warn!(path, %error, "media scan failed");
                false
            }
        }
    }

    /// Drops the index entry for a deleted file.
    ///
    /// Images are searched before videos; only the first hit is removed.
    /// Failures are logged and otherwise ignored.
    pub fn media_deleted(&mut self, path: Option<&str>) {
        let Some(path) = path else {
            return;
        };
        if let Err(error) = self.remove_entry(Path::new(path)) {
            tracing::warn!(path, %error, "failed to remove media index entry");
        }
    }

    fn remove_entry(&mut self, path: &Path) -> Result<()> {
        for collection in MediaCollection::LOOKUP_ORDER {
            if let Some(uri) = self.store.find(collection, path)? {
                self.store.delete(uri)?;
                tracing::debug!(path = %path.display(), %uri, "removed media index entry");
                return Ok(());
            }
        }
        Ok(())
    }
}

/// Reads the `path` argument, treating a malformed value as absent.
fn path_argument(call: &MethodCall) -> Option<String> {
    call.argument::<String>(PATH_ARGUMENT)
        .unwrap_or_else(|error| {
            tracing::warn!(method = %call.method, %error, "ignoring malformed path argument");
            None
        })
}

impl<M: MediaStore> MethodHandler for MediaHandler<M> {
    fn handle(&mut self, call: &MethodCall) -> MethodResponse {
        match call.method.as_str() {
            SCAN_FILE => {
                let path = path_argument(call);
                MethodResponse::success(self.scan_file(path.as_deref()))
            }
            NOTIFY_MEDIA_DELETED => {
                let path = path_argument(call);
                self.media_deleted(path.as_deref());
                MethodResponse::success(true)
            }
            _ => MethodResponse::NotImplemented,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    /// A store whose every operation fails.
    struct BrokenStore;

    impl MediaStore for BrokenStore {
        fn scan(&mut self, _path: &Path) -> Result<Option<MediaUri>> {
            Err(MediaError::Rejected {
                operation: "scan",
                reason: "offline".to_string(),
            })
        }

        fn find(&self, _collection: MediaCollection, _path: &Path) -> Result<Option<MediaUri>> {
            Err(MediaError::Rejected {
                operation: "query",
                reason: "offline".to_string(),
            })
        }

        fn delete(&mut self, uri: MediaUri) -> Result<()> {
            Err(MediaError::UnknownEntry(uri.to_string()))
        }
    }

    fn call(method: &str, path: &str) -> MethodCall {
        MethodCall::with_arguments(method, json!({ "path": path }))
    }

    #[test]
    fn scan_existing_image() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("photo.png");
        std::fs::write(&file, b"png").unwrap();

        let mut handler = MediaHandler::new(MemoryMediaStore::default());
        let response = handler.handle(&call(SCAN_FILE, file.to_str().unwrap()));

        assert_eq!(response, MethodResponse::success(true));
        assert_eq!(handler.store().len(), 1);
    }

    #[test]
    fn scan_twice_reuses_entry() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("clip.mp4");
        std::fs::write(&file, b"mp4").unwrap();

        let mut store = MemoryMediaStore::default();
        let first = store.scan(&file).unwrap();
        let second = store.scan(&file).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.unwrap().collection, MediaCollection::Videos);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn scan_missing_file_is_false() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("gone.jpg");

        let mut handler = MediaHandler::new(MemoryMediaStore::default());
        let response = handler.handle(&call(SCAN_FILE, file.to_str().unwrap()));

        assert_eq!(response, MethodResponse::success(false));
    }

    #[test]
    fn scan_unknown_extension_is_false() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, b"hi").unwrap();

        let mut handler = MediaHandler::new(MemoryMediaStore::default());
        let response = handler.handle(&call(SCAN_FILE, file.to_str().unwrap()));

        assert_eq!(response, MethodResponse::success(false));
        assert!(handler.store().is_empty());
    }

    #[test]
    fn scan_without_path_is_false() {
        let mut handler = MediaHandler::new(MemoryMediaStore::default());

        let response = handler.handle(&MethodCall::new(SCAN_FILE));
        assert_eq!(response, MethodResponse::success(false));

        let response = handler.handle(&MethodCall::with_arguments(SCAN_FILE, json!({ "path": 3 })));
        assert_eq!(response, MethodResponse::success(false));
    }

    #[test]
    fn scan_error_is_false() {
        let mut handler = MediaHandler::new(BrokenStore);
        let response = handler.handle(&call(SCAN_FILE, "/sdcard/a.png"));
        assert_eq!(response, MethodResponse::success(false));
    }

    #[test]
    fn deleted_image_is_removed() {
        let mut store = MemoryMediaStore::default();
        store.insert(MediaCollection::Images, "/sdcard/a.png");
        let video = store.insert(MediaCollection::Videos, "/sdcard/b.mp4");

        let mut handler = MediaHandler::new(store);
        let response = handler.handle(&call(NOTIFY_MEDIA_DELETED, "/sdcard/a.png"));

        assert_eq!(response, MethodResponse::success(true));
        assert_eq!(handler.store().len(), 1);
        assert!(handler.store().path(video).is_some());
    }

    #[test]
    fn images_are_searched_before_videos() {
        let mut store = MemoryMediaStore::default();
        let image = store.insert(MediaCollection::Images, "/sdcard/same");
        let video = store.insert(MediaCollection::Videos, "/sdcard/same");

        let mut handler = MediaHandler::new(store);
        handler.handle(&call(NOTIFY_MEDIA_DELETED, "/sdcard/same"));

        assert!(handler.store().path(image).is_none());
        assert!(handler.store().path(video).is_some());
    }

    #[test]
    fn deleted_video_is_removed() {
        let mut store = MemoryMediaStore::default();
        store.insert(MediaCollection::Videos, "/sdcard/b.mp4");

        let mut handler = MediaHandler::new(store);
        handler.handle(&call(NOTIFY_MEDIA_DELETED, "/sdcard/b.mp4"));

        assert!(handler.store().is_empty());
    }

    #[test]
    fn deletion_always_answers_true() {
        let mut handler = MediaHandler::new(BrokenStore);
        assert_eq!(
            handler.handle(&call(NOTIFY_MEDIA_DELETED, "/sdcard/a.png")),
            MethodResponse::success(true)
        );

        let mut handler = MediaHandler::new(MemoryMediaStore::default());
        assert_eq!(
            handler.handle(&call(NOTIFY_MEDIA_DELETED, "/sdcard/unknown.png")),
            MethodResponse::success(true)
        );
        assert_eq!(
            handler.handle(&MethodCall::new(NOTIFY_MEDIA_DELETED)),
            MethodResponse::success(true)
        );
    }

    #[test]
    fn unknown_method_is_not_implemented() {
        let mut handler = MediaHandler::new(MemoryMediaStore::default());
        assert_eq!(
            handler.handle(&MethodCall::new("deleteFile")),
            MethodResponse::NotImplemented
        );
    }

    #[test]
    fn delete_unknown_entry_fails() {
        let mut store = MemoryMediaStore::default();
        let uri = MediaUri {
            collection: MediaCollection::Images,
            id: 42,
        };
        assert!(matches!(store.delete(uri), Err(MediaError::UnknownEntry(_))));
    }

    #[test]
    fn uri_display() {
        let uri = MediaUri {
            collection: MediaCollection::Videos,
            id: 7,
        };
        assert_eq!(uri.to_string(), "content://media/external/video/media/7");
    }
}
