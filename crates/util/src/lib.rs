//! Utility functions shared across the Samix crates.

pub mod preferences;
pub mod text;
pub mod time;

pub use preferences::{PreferencesError, UserPreferences};
pub use text::truncate_with_ellipsis;
pub use time::{format_duration_ms, format_timestamp, relative_from};
