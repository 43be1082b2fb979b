//! UI Components
//!
//! Reusable UI components for the desktop application.

mod button;
mod card;
mod header;
mod pitch_card;
mod spinner;

pub use button::{Button, ButtonVariant};
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
pub use header::Header;
pub use pitch_card::PitchCard;
pub use spinner::Spinner;
