//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured tracing events, stderr)
//!
//! Runner produces:
//!     → console.rs (colored per-check status lines for the operator)
//! ```
//!
//! # Design Decisions
//! - Structured logging via `tracing`; filter from RUST_LOG or the CLI
//! - Console notices are separate from logs and never part of the report

pub mod console;
pub mod logging;
