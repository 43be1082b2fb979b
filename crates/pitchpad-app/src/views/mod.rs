//! Top-level views

mod login;
mod pitches;

pub use login::LoginPage;
pub use pitches::PitchesPage;
