//! Collision experiments: fill a nickname set, then probe it with fresh draws.
//!
//! The four variants cover 32-bit and 64-bit engines, each either reused for
//! every draw or recreated from fresh entropy per nickname.

pub mod driver;
pub mod engine;
pub mod runner;

pub use driver::{run_all, Variant};
pub use runner::ExperimentResult;
