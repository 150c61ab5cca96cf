use crate::error::Error;
use crate::model::EntryKind;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<(), Error> {
    if !dir.is_dir() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        debug!("Created directory {}", dir.display());
    }
    Ok(())
}

/// Move `source` into `dest_dir`, keeping its file name.
///
/// Whatever already sits at the destination under that name is removed
/// first, so the destination ends up with exactly one copy.
pub fn move_into(dest_dir: &Path, source: &Path) -> Result<PathBuf, Error> {
    ensure_dir(dest_dir)?;

    let file_name = source.file_name().ok_or_else(|| {
        Error::io(
            source,
            io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let target = dest_dir.join(file_name);

    if let Some(kind) = remove(&target)? {
        debug!("Replacing existing {:?} at {}", kind, target.display());
    }

    fs::rename(source, &target).map_err(|e| Error::io(source, e))?;
    debug!("moved: {} -> {}", source.display(), target.display());
    Ok(target)
}

/// Delete `path`, recursively when it is a directory.
///
/// Returns what was removed, or `None` when nothing was there.
pub fn remove(path: &Path) -> Result<Option<EntryKind>, Error> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(Error::io(path, err)),
    };

    if metadata.is_dir() {
        fs::remove_dir_all(path).map_err(|e| Error::io(path, e))?;
        debug!("deleted directory: {}", path.display());
        Ok(Some(EntryKind::Directory))
    } else {
        fs::remove_file(path).map_err(|e| Error::io(path, e))?;
        debug!("deleted file: {}", path.display());
        Ok(Some(EntryKind::File))
    }
}
