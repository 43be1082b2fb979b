//! Saved-designs view - the main listing screen

use dioxus::prelude::*;

use pitchpad_core::listing::sorted_pitches;

use crate::components::{Button, ButtonVariant, Header, PitchCard, Spinner};
use crate::queries::use_pitches_query;
use crate::state::{AppState, AppView};

/// Render phase of the listing screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PagePhase {
    Loading,
    SignedOut,
    Empty,
    Populated,
}

/// First match wins: loading, signed out, empty, populated.
///
/// A pending fetch only counts as loading while a user is signed in; with no
/// user there is nothing to fetch and the signed-out screen takes over.
const fn page_phase(
    auth_loading: bool,
    signed_in: bool,
    fetch_pending: bool,
    listed: usize,
) -> PagePhase {
    if auth_loading || (signed_in && fetch_pending) {
        PagePhase::Loading
    } else if !signed_in {
        PagePhase::SignedOut
    } else if listed == 0 {
        PagePhase::Empty
    } else {
        PagePhase::Populated
    }
}

/// The "My Saved Designs" screen
#[component]
pub fn PitchesPage() -> Element {
    let mut state = use_context::<AppState>();
    let pitches_resource = use_pitches_query(state.store_client.into(), state.auth_session.into());

    let auth_loading = (state.auth_loading)();
    let signed_in = (state.auth_session)().is_some();

    let fetched = pitches_resource.read();
    let fetch_pending = fetched.is_none();
    let pitches = match &*fetched {
        Some(Some(fetched_pitches)) => sorted_pitches(fetched_pitches),
        _ => Vec::new(),
    };

    let on_new_design = move |_| {
        // The design generator ships with the web app, not this shell.
        tracing::info!("New design requested; open the PitchPad generator to create one");
    };

    match page_phase(auth_loading, signed_in, fetch_pending, pitches.len()) {
        PagePhase::Loading => rsx! {
            div {
                style: "display: flex; min-height: 100vh; align-items: center; justify-content: center;",
                Spinner {}
            }
        },
        PagePhase::SignedOut => rsx! {
            div {
                style: "
                    display: flex;
                    min-height: 100vh;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 16px;
                    text-align: center;
                ",
                h2 {
                    style: "margin: 0; font-size: 24px; font-weight: 700;",
                    "Access Denied"
                }
                p {
                    style: "margin: 0; color: #6b7280;",
                    "You must be logged in to view your saved designs."
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| state.view.set(AppView::Login),
                    "Log In"
                }
            }
        },
        PagePhase::Empty | PagePhase::Populated => rsx! {
            div {
                style: "display: flex; flex-direction: column; min-height: 100vh;",
                Header {}

                main {
                    style: "flex: 1; width: 100%; max-width: 1100px; margin: 0 auto; padding: 32px 16px;",

                    div {
                        style: "
                            display: flex;
                            align-items: center;
                            justify-content: space-between;
                            margin-bottom: 32px;
                        ",
                        h1 {
                            style: "margin: 0; font-size: 28px; font-weight: 700;",
                            "My Saved Designs"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: on_new_design,
                            "+ New Design"
                        }
                    }

                    if pitches.is_empty() {
                        div {
                            style: "
                                display: flex;
                                align-items: center;
                                justify-content: center;
                                height: 50vh;
                                border: 2px dashed #e5e7eb;
                                border-radius: 12px;
                            ",
                            div {
                                style: "text-align: center;",
                                h3 {
                                    style: "margin: 0; font-size: 19px; font-weight: 600;",
                                    "No designs saved yet."
                                }
                                p {
                                    style: "margin: 8px 0 16px 0; color: #6b7280;",
                                    "Start by generating a new website design to see it here."
                                }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    onclick: on_new_design,
                                    "Generate a New Design"
                                }
                            }
                        }
                    } else {
                        div {
                            style: "
                                display: grid;
                                grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                                gap: 24px;
                            ",
                            for pitch in pitches {
                                {
                                    let pitch_id = pitch.id.clone();
                                    rsx! {
                                        PitchCard { key: "{pitch_id}", pitch }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn auth_restore_in_flight_is_loading() {
        assert_eq!(page_phase(true, false, true, 0), PagePhase::Loading);
        assert_eq!(page_phase(true, true, false, 3), PagePhase::Loading);
    }

    #[test]
    fn fetch_in_flight_is_loading_only_when_signed_in() {
        assert_eq!(page_phase(false, true, true, 0), PagePhase::Loading);
        assert_eq!(page_phase(false, false, true, 0), PagePhase::SignedOut);
    }

    #[test]
    fn resolved_without_user_is_signed_out() {
        assert_eq!(page_phase(false, false, false, 0), PagePhase::SignedOut);
    }

    #[test]
    fn signed_in_with_no_designs_is_empty() {
        assert_eq!(page_phase(false, true, false, 0), PagePhase::Empty);
    }

    #[test]
    fn signed_in_with_designs_is_populated() {
        assert_eq!(page_phase(false, true, false, 2), PagePhase::Populated);
    }
}
