use crate::model::{Entry, GroupKind, RECOGNIZED_EXTENSIONS};

/// Decide which group an entry belongs to.
///
/// Only regular files with a recognized extension land in a category group.
/// Directories and every other extension are unrecognized, except entries
/// whose whole name is a recognized token (`log`, `csv`, `txt`): those are
/// the category folders themselves and go to [`GroupKind::Reserved`].
pub fn classify(entry: &Entry) -> GroupKind {
    if !entry.is_dir {
        if let Some(kind) = entry
            .extension
            .as_deref()
            .and_then(GroupKind::from_extension)
        {
            return kind;
        }
    }

    if is_reserved_name(&entry.name) {
        GroupKind::Reserved
    } else {
        GroupKind::Unrecognized
    }
}

pub fn is_reserved_name(name: &str) -> bool {
    RECOGNIZED_EXTENSIONS
        .iter()
        .any(|ext| ext.trim_start_matches('.') == name)
}
