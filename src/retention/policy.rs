use crate::model::Entry;
use serde::Deserialize;

/// Number of most recent entries kept per bucket.
///
/// A window of zero keeps everything: nothing is discarded and every entry
/// is retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RetentionWindow(pub usize);

impl RetentionWindow {
    pub fn is_unbounded(self) -> bool {
        self.0 == 0
    }

    /// Split an oldest-first sequence into discarded and retained parts.
    pub fn apply(self, ordered: Vec<Entry>) -> Decision {
        let mut discarded = ordered;
        let keep = if self.is_unbounded() {
            discarded.len()
        } else {
            self.0.min(discarded.len())
        };
        let retained = discarded.split_off(discarded.len() - keep);
        Decision {
            retained,
            discarded,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Decision {
    /// Newest entries, oldest first.
    pub retained: Vec<Entry>,
    pub discarded: Vec<Entry>,
}
