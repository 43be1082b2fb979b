//! Data models for PitchPad

mod pitch;

pub use pitch::{CreatedAt, GeneratedWebsite, PitchIdea};
