//! Saved-design card component

use dioxus::prelude::*;

use pitchpad_core::PitchIdea;

use super::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

/// A single saved design rendered in the listing grid.
#[component]
pub fn PitchCard(pitch: PitchIdea) -> Element {
    let startup_name = pitch.startup_name().to_string();
    let description = pitch.idea_description.clone();
    let created = pitch.created_label();
    let pitch_id = pitch.id.clone();

    let on_view_details = move |_| {
        // The details page doesn't exist yet.
        tracing::debug!("View details requested for pitch {}", pitch_id);
    };

    rsx! {
        Card {
            style: "height: 100%;",

            CardHeader {
                CardTitle { "{startup_name}" }
                CardDescription {
                    style: "
                        display: -webkit-box;
                        -webkit-line-clamp: 2;
                        -webkit-box-orient: vertical;
                        overflow: hidden;
                    ",
                    "{description}"
                }
            }

            CardContent {
                style: "flex: 1;",
                p {
                    style: "margin: 0; font-size: 13px; color: #6b7280;",
                    "Created on {created}"
                }
            }

            div {
                style: "padding: 0 16px 16px 16px;",
                Button {
                    variant: ButtonVariant::Secondary,
                    style: "width: 100%;",
                    onclick: on_view_details,
                    "View Details"
                }
            }
        }
    }
}
