//! UI Components
//!
//! Presentation for the playground. Components read the store and call the
//! `PlaygroundState` transitions; none of them holds playground state.

mod header;
mod controls;
mod tabs;
mod result_view;
mod detected_table;
mod diff_view;
mod status_line;

pub use header::Header;
pub use controls::Controls;
pub use tabs::Tabs;
pub use result_view::ResultView;
pub use detected_table::DetectedTable;
pub use diff_view::DiffView;
pub use status_line::StatusLine;
