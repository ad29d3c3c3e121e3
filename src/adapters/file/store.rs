//! `DocumentStore` implementation backed by the local filesystem

use std::fs;
use std::io::Write;
use std::path::Path;

use log::debug;
use tempfile::{Builder, NamedTempFile};

use crate::core::models::SourceDocument;
use crate::core::ports::{DocumentError, DocumentStore};

/// Reads and atomically writes UTF-8 text files
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDocumentStore;

impl FsDocumentStore {
    /// Create a new filesystem store
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentStore for FsDocumentStore {
    fn load(&self, path: &Path) -> Result<SourceDocument, DocumentError> {
        let text = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document = SourceDocument::parse(&text);
        debug!("loaded {} lines from {}", document.len(), path.display());
        Ok(document)
    }

    fn save(&self, path: &Path, lines: &[&str], like: Option<&Path>) -> Result<(), DocumentError> {
        let write_err = |source: std::io::Error| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        };

        // Temp file must live on the same filesystem for the rename to be atomic
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Copy the template's mode, else keep the mode of the file being replaced
        let permissions = like
            .into_iter()
            .chain(std::iter::once(path))
            .find_map(|source| fs::metadata(source).ok())
            .map(|meta| meta.permissions());

        let mut temp = new_temp_file(dir).map_err(write_err)?;
        for line in lines {
            temp.write_all(line.as_bytes()).map_err(write_err)?;
        }
        temp.flush().map_err(write_err)?;
        if let Some(permissions) = permissions {
            temp.as_file().set_permissions(permissions).map_err(write_err)?;
        }
        temp.persist(path).map_err(|err| write_err(err.error))?;

        debug!("wrote {} lines to {}", lines.len(), path.display());
        Ok(())
    }
}

/// Temp file created with the mode a plain new file would get
///
/// `NamedTempFile` defaults to owner-only access; new sources are expected to
/// be `0644` under the process umask.
#[cfg(unix)]
fn new_temp_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .permissions(fs::Permissions::from_mode(0o644))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}
