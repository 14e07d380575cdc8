//! Monte Carlo insurance-claim simulation.
//!
//! Each value of a uniform sequence stands for one client. A client files a
//! claim when its value falls strictly below the event probability, and
//! every claim pays out a fixed amount.
//!
//! # Architecture
//!
//! ```text
//! CongruentialGenerator ──▶ Sequence ──▶ MonteCarloSimulator ──▶ SimulationResult
//!                                              │
//!                                         ClaimParams (p_event, payout)
//! ```
//!
//! The simulator only sees `&[f64]`, so it does not care which generator
//! produced the values.
//!
//! # Examples
//!
//! ```rust
//! use congruent_sim::mc::{ClaimParams, MonteCarloSimulator};
//!
//! let simulator = MonteCarloSimulator::new(ClaimParams::new(0.5, 10.0));
//! let result = simulator.simulate(&[0.1, 0.7, 0.3, 0.9]).unwrap();
//!
//! assert_eq!(result.total_events, 2);
//! assert_eq!(result.total_payout, 20.0);
//! assert_eq!(result.mean_payout, 5.0);
//! assert_eq!(result.empirical_probability, 0.5);
//! ```

pub mod config;
pub mod error;
pub mod result;
pub mod simulator;

pub use config::{ClaimParams, DEFAULT_PAYOUT, DEFAULT_P_EVENT};
pub use error::SimulationError;
pub use result::SimulationResult;
pub use simulator::{simulate, MonteCarloSimulator};
