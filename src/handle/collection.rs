use super::{DiskFile, FileHandle};
use std::path::Path;
use std::sync::Arc;
use walkdir::WalkDir;

/// Ordered batch of file handles, the input shape of a collection ingest
///
/// Mirrors a multi-file input control or a drag-and-drop payload: plain
/// files and archives mixed freely, order as supplied.
#[derive(Clone, Default)]
pub struct FileCollection {
    handles: Vec<Arc<dyn FileHandle>>,
}

impl FileCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, handle: impl FileHandle + 'static) {
        self.handles.push(Arc::new(handle));
    }

    pub fn push_arc(&mut self, handle: Arc<dyn FileHandle>) {
        self.handles.push(handle);
    }

    /// Collect every regular file under `root` into a collection; names are
    /// paths relative to `root`, forward-slashed
    pub fn from_dir(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref();
        let mut collection = Self::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::other)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .replace('\\', "/");
            collection.push(DiskFile::with_name(entry.path(), name));
        }

        Ok(collection)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn FileHandle>> {
        self.handles.iter()
    }
}

impl std::fmt::Debug for FileCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.handles.iter().map(|h| h.name()))
            .finish()
    }
}

impl<H: FileHandle + 'static> FromIterator<H> for FileCollection {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        Self {
            handles: iter
                .into_iter()
                .map(|h| Arc::new(h) as Arc<dyn FileHandle>)
                .collect(),
        }
    }
}
