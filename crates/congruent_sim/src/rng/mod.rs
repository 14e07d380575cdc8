//! # Congruential Random Number Generation
//!
//! This module provides three deterministic congruential generators and the
//! sequence type they produce.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: The same parameters and seed always give the same
//!   sequence
//! - **Owned state**: Each generator owns its history and mutates it only
//!   through `&mut self`, so one instance cannot be advanced from two places
//! - **Static dispatch**: The inversive fallback observer is a generic
//!   parameter, never a `Box<dyn Trait>`
//!
//! ## Module Structure
//!
//! - [`generator`]: The [`CongruentialGenerator`] trait shared by all three
//! - [`linear`]: Linear congruential generator and period measurement
//! - [`additive`]: Lag-3 additive ("extended") congruential generator
//! - [`inversive`]: Inversive congruential generator
//! - [`observer`]: Observers for the inversive no-inverse fallback
//! - [`sequence`]: [`Sequence`], an ordered list of values in `[0, 1)`
//! - [`error`]: [`GeneratorError`]
//!
//! ## Usage Example
//!
//! ```rust
//! use congruent_sim::rng::{AdditiveGenerator, CongruentialGenerator};
//!
//! let mut generator = AdditiveGenerator::new(&[123, 456, 789], 1 << 31).unwrap();
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 16];
//! generator.fill_uniform(&mut buffer);
//! assert!(buffer.iter().all(|&x| (0.0..1.0).contains(&x)));
//! ```

pub mod additive;
pub mod error;
pub mod generator;
pub mod inversive;
pub mod linear;
pub mod observer;
pub mod sequence;

pub use additive::{AdditiveGenerator, ADDITIVE_LAG, ADDITIVE_MULTIPLIER};
pub use error::GeneratorError;
pub use generator::CongruentialGenerator;
pub use inversive::{InversiveGenerator, FALLBACK_INVERSE};
pub use linear::{measure_period, LinearGenerator};
pub use observer::{
    FallbackEvent, FallbackObserver, FallbackRecorder, NoopObserver, TracingObserver,
};
pub use sequence::Sequence;
