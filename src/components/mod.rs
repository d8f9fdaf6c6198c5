//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod quit_dialog;
pub mod results;
pub mod status_filter_dialog;

pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent};
pub use quit_dialog::QuitDialog;
pub use results::ResultsComponent;
pub use status_filter_dialog::StatusFilterDialog;
