use crate::error::Error;
use crate::model::{Entry, Groups};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, trace};
use walkdir::WalkDir;

use super::classify;

/// Single-level directory listing. Buckets every immediate child of `dir`
/// into a group, keeping enumeration order within each group.
///
/// The walker does not follow links, so a link back to `dir` is listed like
/// any other child; each entry is then stat-ed through its links. Entries
/// that disappear between listing and stat (or dangling links) are skipped.
/// Failing to list `dir` itself is an error.
pub fn scan_directory(dir: &Path) -> Result<Groups, Error> {
    let mut groups = Groups::default();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    for entry_result in walker {
        let dir_entry = match entry_result {
            Ok(dir_entry) => dir_entry,
            Err(err) if err.depth() == 0 => {
                return Err(Error::io(dir, io::Error::from(err)));
            }
            Err(err) => {
                debug!("Skipping entry in {}: {}", dir.display(), err);
                continue;
            }
        };

        let metadata = match fs::metadata(dir_entry.path()) {
            Ok(metadata) => metadata,
            Err(err) => {
                debug!(
                    "Skipping {}, metadata unavailable: {}",
                    dir_entry.path().display(),
                    err
                );
                continue;
            }
        };

        let entry = Entry::from_metadata(dir_entry.path(), &metadata);
        let kind = classify(&entry);
        trace!("{} -> {}", entry.name, kind.label());
        groups.push(kind, entry);
    }

    Ok(groups)
}
