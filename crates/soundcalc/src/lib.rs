//! Estimates the round-by-round soundness of FRI-based proof systems.
//!
//! A [ProofSystemConfig] describes the proof system. It is validated into [DerivedParams] once and
//! then evaluated under each [Regime], which yields a [RegimeResult] holding the bits of security
//! of every round.

pub mod config;
pub mod error;
pub mod fri;
pub mod proof_system;
pub mod regime;
pub mod soundness;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::*;
pub use error::*;
pub use regime::*;
pub use soundness::*;
