//! Button component

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    const fn css(self) -> &'static str {
        match self {
            Self::Primary => "background: #2563eb; color: #ffffff; border: 1px solid #2563eb;",
            Self::Secondary => "background: #f3f4f6; color: #111827; border: 1px solid #e5e7eb;",
            Self::Outline => "background: transparent; color: #111827; border: 1px solid #d1d5db;",
            Self::Ghost => "background: transparent; color: #6b7280; border: 1px solid transparent;",
        }
    }
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    disabled: Option<bool>,
    style: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_css = variant.unwrap_or_default().css();
    let disabled = disabled.unwrap_or(false);
    let extra = style.unwrap_or_default();

    rsx! {
        button {
            style: "
                padding: 8px 16px;
                border-radius: 8px;
                font-size: 14px;
                font-weight: 500;
                cursor: pointer;
                {variant_css}
                {extra}
            ",
            disabled,
            onclick: move |event| onclick.call(event),
            {children}
        }
    }
}
