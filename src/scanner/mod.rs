pub mod classify;
mod walk;

pub use classify::classify;
pub use walk::scan_directory;
