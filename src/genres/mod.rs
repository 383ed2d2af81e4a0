// src/genres/mod.rs

// High-level “genre” orchestrations that coordinate multiple systems.
// Each genre is feature-gated so downstream front ends enable only what they use.

pub mod sdk;
pub use sdk::*;

#[cfg(feature = "genre-calculator")]
pub mod calculator;

#[cfg(feature = "genre-calculator")]
pub use calculator::*;
