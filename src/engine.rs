use crate::action_log::{Action, ActionKind};
use crate::actions;
use crate::config::AppConfig;
use crate::error::Error;
use crate::model::{Bucket, Entry, GroupKind};
use crate::report::{Notice, Reporter};
use crate::retention::{split_by_size, Orderer, RetentionWindow};
use crate::scanner;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub struct CleanEngine {
    config: AppConfig,
}

#[derive(Debug, Default)]
pub struct CleanResult {
    pub target: PathBuf,
    pub duration: Duration,
    pub scanned: usize,
    pub moved: usize,
    pub deleted: usize,
    pub unrecognized: usize,
    pub undated: usize,
    pub actions: Vec<Action>,
}

/// Check that `path` exists and is a directory, returning its canonical form.
pub fn validate_target(path: &Path) -> Result<PathBuf, Error> {
    if !path.exists() {
        return Err(Error::TargetNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(Error::NotADirectory(path.to_path_buf()));
    }
    fs::canonicalize(path).map_err(|e| Error::io(path, e))
}

impl CleanEngine {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the maintenance pipeline on one directory:
    /// 1. List and classify its immediate children
    /// 2. Logs: order by date token, keep the newest window into `log/`
    /// 3. CSVs: order by mtime, keep the newest window into `csv/`
    /// 4. TXTs: split by size, each half ordered by mtime, kept into `txt/`
    ///    and `txt/large_txt_files/`
    /// 5. Report unrecognized entries, which stay where they are
    ///
    /// Nothing is touched if `directory` is invalid. A filesystem failure
    /// after that aborts the run; work already done is not undone.
    pub fn clean(&self, directory: &Path, reporter: &dyn Reporter) -> Result<CleanResult, Error> {
        let start = Instant::now();
        let base = validate_target(directory)?;

        let window = self.config.log_window;
        if window.is_unbounded() {
            warn!("Retention window is 0, every file will be kept");
        }

        info!("Scanning {}", base.display());
        let groups = scanner::scan_directory(&base)?;
        debug!(
            "{} entries: {} log, {} csv, {} txt, {} unrecognized",
            groups.len(),
            groups.get(GroupKind::Log).len(),
            groups.get(GroupKind::Csv).len(),
            groups.get(GroupKind::Txt).len(),
            groups.get(GroupKind::Unrecognized).len(),
        );

        let mut run = Run {
            base,
            window,
            reporter,
            result: CleanResult {
                scanned: groups.len(),
                ..Default::default()
            },
        };

        let logs = Orderer::DateToken.order(groups.get(Bucket::Log.group()));
        run.retain(Bucket::Log, logs.ordered)?;
        for entry in &logs.excluded {
            run.leave_undated(entry);
        }

        let csvs = Orderer::Modified.order(groups.get(Bucket::Csv.group()));
        run.retain(Bucket::Csv, csvs.ordered)?;

        let txts = split_by_size(groups.get(GroupKind::Txt), self.config.size_threshold);
        run.retain(Bucket::SmallTxt, Orderer::Modified.order(&txts.small).ordered)?;
        run.retain(Bucket::LargeTxt, Orderer::Modified.order(&txts.large).ordered)?;

        for entry in groups.get(GroupKind::Unrecognized) {
            run.report_unrecognized(entry);
        }

        let mut result = run.finish();
        result.duration = start.elapsed();
        debug!(
            "Done in {:.2}s: {} moved, {} deleted, {} unrecognized",
            result.duration.as_secs_f64(),
            result.moved,
            result.deleted,
            result.unrecognized,
        );
        Ok(result)
    }
}

struct Run<'a> {
    base: PathBuf,
    window: RetentionWindow,
    reporter: &'a dyn Reporter,
    result: CleanResult,
}

impl Run<'_> {
    fn retain(&mut self, bucket: Bucket, ordered: Vec<Entry>) -> Result<(), Error> {
        let destination = bucket.destination(&self.base);
        actions::ensure_dir(&destination)?;

        let decision = self.window.apply(ordered);
        debug!(
            "{}: keeping {}, discarding {}",
            bucket.label(),
            decision.retained.len(),
            decision.discarded.len()
        );

        for entry in &decision.discarded {
            if let Some(kind) = actions::remove(&entry.path)? {
                self.reporter.on_notice(&Notice::Deleted {
                    path: entry.path.clone(),
                    kind,
                });
                self.result
                    .actions
                    .push(Action::new(ActionKind::Deleted, bucket.label(), &entry.path));
                self.result.deleted += 1;
            }
        }

        for entry in &decision.retained {
            let target = actions::move_into(&destination, &entry.path)?;
            self.reporter.on_moved(bucket, &entry.path, &target);
            self.result.actions.push(
                Action::new(ActionKind::Moved, bucket.label(), &entry.path)
                    .with_destination(&target),
            );
            self.result.moved += 1;
        }

        Ok(())
    }

    fn leave_undated(&mut self, entry: &Entry) {
        debug!("No date token in {}, leaving it in place", entry.name);
        self.reporter.on_notice(&Notice::UndatedLog {
            name: entry.name.clone(),
        });
        self.result
            .actions
            .push(Action::new(ActionKind::Undated, Bucket::Log.label(), &entry.path));
        self.result.undated += 1;
    }

    fn report_unrecognized(&mut self, entry: &Entry) {
        self.reporter.on_notice(&Notice::Unrecognized {
            name: entry.name.clone(),
        });
        self.result.actions.push(Action::new(
            ActionKind::Unrecognized,
            GroupKind::Unrecognized.label(),
            &entry.path,
        ));
        self.result.unrecognized += 1;
    }

    fn finish(self) -> CleanResult {
        let mut result = self.result;
        result.target = self.base;
        result
    }
}
