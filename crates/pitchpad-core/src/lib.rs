//! pitchpad-core - Core library for PitchPad
//!
//! This crate contains the shared models, listing derivation, and the auth and
//! pitch-store clients used by the PitchPad interfaces.

pub mod auth;
pub mod error;
pub mod listing;
pub mod models;
pub mod store;
pub mod util;

pub use error::{Error, Result};
pub use models::{CreatedAt, GeneratedWebsite, PitchIdea};
