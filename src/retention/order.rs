use crate::model::Entry;

const DATE_TOKEN_LEN: usize = 8;

/// How a group is ordered before the retention window is applied.
/// Both strategies sort oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orderer {
    /// By the leading `YYYYMMDD` token of the file name. Names without one
    /// are excluded from the ordering.
    DateToken,
    /// By last-modified time. Ties keep enumeration order.
    Modified,
}

#[derive(Debug, Default, Clone)]
pub struct Ordered {
    pub ordered: Vec<Entry>,
    /// Entries that could not be placed in the ordering.
    pub excluded: Vec<Entry>,
}

impl Orderer {
    pub fn order(self, entries: &[Entry]) -> Ordered {
        match self {
            Orderer::DateToken => order_by_date_token(entries),
            Orderer::Modified => {
                let mut ordered = entries.to_vec();
                ordered.sort_by_key(|e| e.modified);
                Ordered {
                    ordered,
                    excluded: Vec::new(),
                }
            }
        }
    }
}

fn order_by_date_token(entries: &[Entry]) -> Ordered {
    let (mut ordered, excluded): (Vec<Entry>, Vec<Entry>) = entries
        .iter()
        .cloned()
        .partition(|e| date_token(&e.name).is_some());

    ordered.sort_by(|a, b| date_token(&a.name).cmp(&date_token(&b.name)));

    Ordered { ordered, excluded }
}

/// Leading 8-digit token of a file name, e.g. `"20230215"` for `"20230215_run.log"`.
pub fn date_token(name: &str) -> Option<&str> {
    let token = name.get(..DATE_TOKEN_LEN)?;
    token
        .bytes()
        .all(|b| b.is_ascii_digit())
        .then_some(token)
}
