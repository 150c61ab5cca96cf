pub mod order;
pub mod policy;
pub mod split;

pub use order::{date_token, Ordered, Orderer};
pub use policy::{Decision, RetentionWindow};
pub use split::{split_by_size, SizeSplit};
