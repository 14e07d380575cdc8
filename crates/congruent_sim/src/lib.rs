//! # congruent_sim: Congruential Generators and Claim Simulation
//!
//! ## Layer 2 (Simulation) Role
//!
//! congruent_sim builds on the number theory and parameter types of
//! congruent_core, providing:
//! - Three congruential generators behind one trait (`rng`)
//! - A Monte Carlo insurance-claim simulator over any uniform sequence (`mc`)
//!
//! ## Generator Families
//!
//! | Generator | Recurrence | State |
//! |-----------|------------|-------|
//! | [`LinearGenerator`] | `x ↦ (a·x + b) mod m` | 1 value |
//! | [`AdditiveGenerator`] | `x ↦ 2¹³·(xᵢ₋₁ + xᵢ₋₂ + xᵢ₋₃) mod m` | 3 values |
//! | [`InversiveGenerator`] | `x ↦ a·(x⁻¹ + c) mod m` | 1 value |
//!
//! All three normalise raw residues by `m`, so every emitted value lies in
//! `[0, 1)`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use congruent_core::GeneratorParameters;
//! use congruent_sim::mc::simulate;
//! use congruent_sim::rng::linear;
//!
//! let params = GeneratorParameters::new(5, 13, 1 << 31).unwrap();
//! let sequence = linear::generate(params, 123, 1_000);
//!
//! let result = simulate(&sequence, 0.02, 100_000.0).unwrap();
//! assert_eq!(result.sample_size, 1_000);
//! assert_eq!(result.total_payout, result.total_events as f64 * 100_000.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Sequence` and `SimulationResult`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;

pub use mc::{simulate, ClaimParams, MonteCarloSimulator, SimulationError, SimulationResult};
pub use rng::{
    AdditiveGenerator, CongruentialGenerator, GeneratorError, InversiveGenerator,
    LinearGenerator, Sequence,
};
