//! Page composition: widget state plus the assembled [`Document`].

pub mod document;
pub mod widgets;

pub use document::{build_page, build_page_with, Document, PageRoot, MAIN_CHART_ID};
pub use widgets::{DropdownOption, DropdownState, TextFieldState};
