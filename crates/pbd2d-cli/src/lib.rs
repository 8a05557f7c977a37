//! # pbd2d-cli
//!
//! Canned scenarios shared by the `pbd2d` binary and its tests.

pub mod scenarios;

pub use scenarios::ScenarioKind;
