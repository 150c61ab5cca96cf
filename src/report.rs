use crate::model::{Bucket, EntryKind};
use std::fmt;
use std::path::{Path, PathBuf};

/// A user-facing line produced during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Unrecognized { name: String },
    Deleted { path: PathBuf, kind: EntryKind },
    UndatedLog { name: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Unrecognized { name } => write!(f, "Unknown extension: {}", name),
            Notice::Deleted {
                path,
                kind: EntryKind::Directory,
            } => write!(f, "DELETED DIRECTORY :   {}", path.display()),
            Notice::Deleted {
                path,
                kind: EntryKind::File,
            } => write!(f, "DELETED FILE      :   {}", path.display()),
            Notice::UndatedLog { name } => write!(f, "Undated log left in place: {}", name),
        }
    }
}

/// Hooks the engine calls while it works through a directory.
///
/// The CLI prints notices to the console; library callers and tests can
/// collect or ignore them. All methods default to no-ops.
pub trait Reporter {
    fn on_notice(&self, _notice: &Notice) {}
    fn on_moved(&self, _bucket: Bucket, _from: &Path, _to: &Path) {}
}

/// Reporter that discards everything.
pub struct SilentReporter;

impl Reporter for SilentReporter {}
