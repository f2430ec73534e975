//! # sherpa-probe
//!
//! One-shot WebSocket smoke test for the CodeSherpa chat backend.
//!
//! The probe connects to `ws://localhost:8000/ws`, sends a single chat
//! message, and expects exactly two JSON frames back: a status notice and
//! the response. Both are printed; the process exits `0` on success and
//! `1` on any failure.
//!
//! ## Architecture
//!
//! ```text
//! main.rs ── ConsoleReporter (report/)
//!     │
//!     └── run_probe (probe/)
//!             ├── ProbeConfig (config/)
//!             ├── OutboundMessage / ProbeReport (messages/)
//!             └── ProbeError (error/)
//! ```

pub mod config;
pub mod error;
pub mod messages;
pub mod probe;
pub mod report;

pub use config::ProbeConfig;
pub use error::ProbeError;
pub use messages::{OutboundMessage, ProbeReport};
pub use probe::{ProbeObserver, exchange, run_probe};
pub use report::ConsoleReporter;
