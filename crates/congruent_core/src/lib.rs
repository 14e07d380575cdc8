//! # congruent_core: Number-Theoretic Foundation for Congruential Generators
//!
//! ## Layer 1 (Foundation) Role
//!
//! congruent_core serves as the bottom layer of the workspace, providing:
//! - Integer helpers: gcd, distinct prime factors, modular inverse (`math`)
//! - A validated positive modulus and the `(a, b, m)` parameter triple (`types`)
//! - The Hull–Dobell full-period check and a bounded parameter search (`params`)
//! - Error types: `ParameterError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other congruent_* crates, with minimal
//! external dependencies:
//! - num-traits: Generic integer arithmetic for the gcd helper
//! - thiserror: Structured error types
//! - tracing: Search diagnostics
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use congruent_core::params::{is_valid, select_or_generate, SearchConfig};
//!
//! let m = 1_i64 << 31;
//!
//! // gcd(12, 2^31) = 4, so the supplied increment is rejected
//! assert!(!is_valid(5, 12, m).unwrap());
//!
//! // The search walks forward from (5, 12) and lands on the first valid pair
//! let selection = select_or_generate(5, 12, m, &SearchConfig::default()).unwrap();
//! assert_eq!((selection.params.a, selection.params.b), (5, 13));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `GeneratorParameters`, `Selection` and `SearchOutcome`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod params;
pub mod types;

pub use params::{diagnose, is_valid, search, select_or_generate, SearchConfig, SearchOutcome};
pub use types::{GeneratorParameters, Modulus, ParameterError};
