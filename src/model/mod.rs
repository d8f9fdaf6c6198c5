//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `CharacterRecord` / `PageResult` - Data delivered by the API
//! - `ViewState` - Page counters, loaded items and the derived filtered set
//! - `Surface` - Screen model the controller writes and components draw
//! - `ModalStack` - Modal overlay management

pub mod character;
pub mod modal;
pub mod surface;
pub mod theme;
pub mod view_state;
