//! Shared UI crate for the PHM dashboard. Chart building, page layout,
//! localization and the Dioxus components all live here; platform crates
//! only launch it.

pub mod charts;
pub mod core;
pub mod error;
pub mod i18n;
pub mod layout;
pub mod page;
pub mod views;

pub mod components {
    // Data file selector (components/data_path_dropdown.rs)
    mod data_path_dropdown;
    pub use data_path_dropdown::DataPathDropdown;

    // Diagnosis text input (components/diagnosis_input.rs)
    mod diagnosis_input;
    pub use diagnosis_input::DiagnosisInput;
}

pub use error::{DashboardError, Result};
