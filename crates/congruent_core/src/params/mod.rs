//! Full-period parameter validation and search.
//!
//! This module provides:
//! - [`validator`]: The Hull–Dobell check ([`is_valid`]) and a per-condition
//!   diagnosis ([`diagnose`])
//! - [`search`](mod@search): Bounded, deterministic enumeration of `(a, b)`
//!   pairs, and [`select_or_generate`] which keeps a valid supplied pair or
//!   searches for the next one
//! - [`config`]: [`SearchConfig`] with the iteration bound
//!
//! # Architecture
//!
//! ```text
//! is_valid ──▶ search ──▶ select_or_generate ──▶ LinearGenerator
//!    ▲            │
//!    └────────────┘ (final re-validation)
//! ```

pub mod config;
pub mod search;
pub mod validator;

pub use config::{SearchConfig, DEFAULT_MAX_ITERATIONS};
pub use search::{search, select_or_generate, SearchOutcome, Selection, SelectionOrigin};
pub use validator::{diagnose, is_valid, Violation};
