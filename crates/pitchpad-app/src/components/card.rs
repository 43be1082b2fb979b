//! Card layout primitives
//!
//! Thin layout wrappers so card markup reads the same across views.

use dioxus::prelude::*;

#[component]
pub fn Card(style: Option<String>, children: Element) -> Element {
    let extra = style.unwrap_or_default();
    rsx! {
        div {
            class: "card",
            style: "
                display: flex;
                flex-direction: column;
                border: 1px solid #e5e7eb;
                border-radius: 12px;
                background: #ffffff;
                box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
                {extra}
            ",
            {children}
        }
    }
}

#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div {
            class: "card-header",
            style: "padding: 16px 16px 0 16px;",
            {children}
        }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 {
            class: "card-title",
            style: "margin: 0; font-size: 17px; font-weight: 600; color: #111827;",
            {children}
        }
    }
}

#[component]
pub fn CardDescription(style: Option<String>, children: Element) -> Element {
    let extra = style.unwrap_or_default();
    rsx! {
        p {
            class: "card-description",
            style: "margin: 4px 0 0 0; font-size: 13px; color: #6b7280; {extra}",
            {children}
        }
    }
}

#[component]
pub fn CardContent(style: Option<String>, children: Element) -> Element {
    let extra = style.unwrap_or_default();
    rsx! {
        div {
            class: "card-content",
            style: "padding: 16px; {extra}",
            {children}
        }
    }
}
