use colored::*;
use dir_maintainer::model::{Bucket, EntryKind};
use dir_maintainer::{Notice, Reporter};
use std::path::Path;
use tracing::debug;

/// Prints one line per notice on stdout. Moves are only traced.
pub struct ConsoleReporter;

impl ConsoleReporter {
    fn render(notice: &Notice) -> ColoredString {
        let line = notice.to_string();
        match notice {
            Notice::Unrecognized { .. } | Notice::UndatedLog { .. } => line.yellow(),
            Notice::Deleted {
                kind: EntryKind::Directory,
                ..
            } => line.red().bold(),
            Notice::Deleted { .. } => line.red(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn on_notice(&self, notice: &Notice) {
        println!("{}", Self::render(notice));
    }

    fn on_moved(&self, bucket: Bucket, from: &Path, to: &Path) {
        debug!("[{}] {} -> {}", bucket.label(), from.display(), to.display());
    }
}
