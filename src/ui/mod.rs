/// Presentation layer: iteration and display only, over the read-only views
/// exposed by [`crate::state::AppState`].
pub mod panels;
pub mod tables;
