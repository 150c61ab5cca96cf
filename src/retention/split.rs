use crate::model::Entry;

const KIB: u64 = 1024;

#[derive(Debug, Default, Clone)]
pub struct SizeSplit {
    pub small: Vec<Entry>,
    pub large: Vec<Entry>,
}

/// Partition entries around a threshold in KiB. An entry is large when its
/// size in KiB (exact, not truncated) is strictly above `threshold_kib`.
pub fn split_by_size(entries: &[Entry], threshold_kib: u64) -> SizeSplit {
    let limit = threshold_kib.saturating_mul(KIB);
    let (large, small): (Vec<Entry>, Vec<Entry>) =
        entries.iter().cloned().partition(|e| e.size > limit);
    SizeSplit { small, large }
}
