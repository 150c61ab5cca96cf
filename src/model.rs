use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Extensions the engine sorts into category folders. Anything else is left alone.
pub const RECOGNIZED_EXTENSIONS: [&str; 3] = [".csv", ".log", ".txt"];

/// One immediate child of the target directory, as seen at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub extension: Option<String>,
    pub modified: SystemTime,
    pub size: u64,
    pub is_dir: bool,
}

impl Entry {
    pub fn from_metadata(path: &Path, metadata: &Metadata) -> Self {
        let name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = extension_of(&name).map(String::from);

        Entry {
            path: path.to_path_buf(),
            extension,
            name,
            modified: metadata.modified().unwrap_or(UNIX_EPOCH),
            size: metadata.len(),
            is_dir: metadata.is_dir(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Final dot-delimited suffix of a file name, dot included (`"a.b.log"` -> `".log"`).
/// A trailing dot or a name without any dot has no extension.
pub fn extension_of(name: &str) -> Option<&str> {
    let idx = name.rfind('.')?;
    if idx + 1 == name.len() {
        return None;
    }
    Some(&name[idx..])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Log,
    Csv,
    Txt,
    Unrecognized,
    /// Entries whose bare name is itself a recognized token (`log`, `csv`,
    /// `txt`). These are the category folders left by a previous run.
    Reserved,
}

impl GroupKind {
    pub const ALL: [GroupKind; 5] = [
        GroupKind::Log,
        GroupKind::Csv,
        GroupKind::Txt,
        GroupKind::Unrecognized,
        GroupKind::Reserved,
    ];

    pub fn from_extension(ext: &str) -> Option<GroupKind> {
        match ext {
            ".log" => Some(GroupKind::Log),
            ".csv" => Some(GroupKind::Csv),
            ".txt" => Some(GroupKind::Txt),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GroupKind::Log => "log",
            GroupKind::Csv => "csv",
            GroupKind::Txt => "txt",
            GroupKind::Unrecognized => "unrecognized",
            GroupKind::Reserved => "reserved",
        }
    }
}

pub const LARGE_TXT_DIR: &str = "large_txt_files";

/// A retention target: a subset of one group with its own window and
/// destination folder under the target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Log,
    Csv,
    SmallTxt,
    LargeTxt,
}

impl Bucket {
    pub fn group(self) -> GroupKind {
        match self {
            Bucket::Log => GroupKind::Log,
            Bucket::Csv => GroupKind::Csv,
            Bucket::SmallTxt | Bucket::LargeTxt => GroupKind::Txt,
        }
    }

    pub fn destination(self, base: &Path) -> PathBuf {
        match self {
            Bucket::Log => base.join("log"),
            Bucket::Csv => base.join("csv"),
            Bucket::SmallTxt => base.join("txt"),
            Bucket::LargeTxt => base.join("txt").join(LARGE_TXT_DIR),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Bucket::Log => "log",
            Bucket::Csv => "csv",
            Bucket::SmallTxt => "txt",
            Bucket::LargeTxt => "large_txt",
        }
    }
}

/// Scan result: one ordered bucket per [`GroupKind`], in enumeration order.
#[derive(Debug, Default, Clone)]
pub struct Groups {
    log: Vec<Entry>,
    csv: Vec<Entry>,
    txt: Vec<Entry>,
    unrecognized: Vec<Entry>,
    reserved: Vec<Entry>,
}

impl Groups {
    pub fn get(&self, kind: GroupKind) -> &[Entry] {
        match kind {
            GroupKind::Log => &self.log,
            GroupKind::Csv => &self.csv,
            GroupKind::Txt => &self.txt,
            GroupKind::Unrecognized => &self.unrecognized,
            GroupKind::Reserved => &self.reserved,
        }
    }

    pub fn push(&mut self, kind: GroupKind, entry: Entry) {
        let bucket = match kind {
            GroupKind::Log => &mut self.log,
            GroupKind::Csv => &mut self.csv,
            GroupKind::Txt => &mut self.txt,
            GroupKind::Unrecognized => &mut self.unrecognized,
            GroupKind::Reserved => &mut self.reserved,
        };
        bucket.push(entry);
    }

    pub fn len(&self) -> usize {
        GroupKind::ALL.iter().map(|k| self.get(*k).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
