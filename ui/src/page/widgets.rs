//! Presentational state for the two input widgets. Nothing reads these back.

use crate::error::{DashboardError, Result};

pub const DATA_PATH_DROPDOWN_ID: &str = "data-path-dropdown";
pub const DIAGNOSIS_INPUT_ID: &str = "diagnosis-result";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownState {
    pub id: String,
    pub label: String,
    pub options: Vec<DropdownOption>,
    pub selected: String,
}

impl DropdownState {
    /// Fails when `selected` is not one of the option values.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        options: Vec<DropdownOption>,
        selected: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        let selected = selected.into();
        if !options.iter().any(|opt| opt.value == selected) {
            return Err(DashboardError::Configuration(format!(
                "dropdown '{id}' selects '{selected}', which is not among its {} option(s)",
                options.len()
            )));
        }
        Ok(Self {
            id,
            label: label.into(),
            options,
            selected,
        })
    }

    pub fn selected_option(&self) -> Option<&DropdownOption> {
        self.options.iter().find(|opt| opt.value == self.selected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldState {
    pub id: String,
    pub label: String,
    pub placeholder: String,
    pub value: Option<String>,
}

impl TextFieldState {
    /// An empty field showing `placeholder`.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            placeholder: placeholder.into(),
            value: None,
        }
    }
}
