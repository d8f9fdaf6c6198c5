//! External service interactions
//!
//! This module contains services for interacting with external systems:
//! - The character API (paginated HTTP source)
//! - Background fetch execution
//! - Status filtering of a loaded page
//! - Persisted preferences and the theme controller built on them

pub mod api;
pub mod fetch_runner;
pub mod filter;
pub mod preferences;
pub mod theme;

pub use api::{CharacterSource, HttpCharacterSource};
pub use fetch_runner::{FetchCompletion, FetchRunner};
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use theme::{prefers_dark_scheme, ThemeController};
