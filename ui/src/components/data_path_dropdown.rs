use dioxus::prelude::*;

use crate::page::DropdownState;

/// Labelled `<select>` listing the candidate data files. Purely
/// presentational: no handler reads the selection back.
#[component]
pub fn DataPathDropdown(state: DropdownState) -> Element {
    rsx! {
        label { r#for: "{state.id}", "{state.label}" }
        select {
            id: "{state.id}",
            name: "{state.id}",
            for opt in state.options.iter() {
                option {
                    key: "{opt.value}",
                    value: "{opt.value}",
                    selected: opt.value == state.selected,
                    "{opt.label}"
                }
            }
        }
    }
}
