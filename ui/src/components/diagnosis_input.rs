use dioxus::prelude::*;

use crate::page::TextFieldState;

/// Free-text diagnosis field; starts empty unless the state carries a value.
#[component]
pub fn DiagnosisInput(state: TextFieldState) -> Element {
    rsx! {
        label { r#for: "{state.id}", "{state.label}" }
        input {
            id: "{state.id}",
            name: "{state.id}",
            r#type: "text",
            placeholder: "{state.placeholder}",
            value: state.value.clone(),
        }
    }
}
