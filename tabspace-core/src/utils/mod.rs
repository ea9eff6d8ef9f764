//! General utilities.
//!
//! - [`fs`]: filesystem helpers returning [`crate::CoreError`].
//! - [`paths`]: XDG base directories and application-specific locations, including the
//!   location of the workspace document.

pub mod fs;
pub mod paths;

pub use fs::ensure_dir_exists;
