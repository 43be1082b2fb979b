//! Loading spinner

use dioxus::prelude::*;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        style {
            "@keyframes pitchpad-spin {{ from {{ transform: rotate(0deg); }} to {{ transform: rotate(360deg); }} }}"
        }
        div {
            class: "spinner",
            style: "
                width: 48px;
                height: 48px;
                border: 4px solid #e5e7eb;
                border-top-color: #2563eb;
                border-radius: 50%;
                animation: pitchpad-spin 1s linear infinite;
            ",
        }
    }
}
