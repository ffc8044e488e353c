//! Shared helpers.
//!
//! - [`progress`] - spinners for the build phases (no-op without the `progress` feature)

pub mod progress;

pub use progress::{finish_phase, phase_spinner};
