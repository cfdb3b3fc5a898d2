//! Configuration-driven HTTP/TCP health check runner library.

pub mod check;
pub mod config;
pub mod notify;
pub mod observability;
pub mod probe;
pub mod report;
pub mod runner;

pub use check::{CheckSpec, Constraints, Target};
pub use config::MonitorConfig;
pub use report::{CheckResult, Report};
pub use runner::{RunError, Runner};
