//! UI state of the question front-end.

mod state;

pub use state::ViewState;
