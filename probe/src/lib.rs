//! Smoke-test probe for a JSONPlaceholder-style blog API.
//!
//! # Overview
//! Pairs the sans-IO `blog_core::BlogClient` with a blocking ureq
//! transport. Each probe operation performs one request, checks the status
//! and prints either the decoded body or a fixed failure line.
//!
//! # Design
//! - `Transport` is the only I/O seam; tests swap in canned responses.
//! - Transport failures and unexpected statuses share one failure path, so a
//!   dead network never aborts the demonstration sequence.
//! - Console text goes to the probe's writer; diagnostics go to `tracing`.

pub mod cli;
pub mod demo;
pub mod probe;
pub mod transport;

pub use cli::{Cli, DEFAULT_BASE_URL};
pub use demo::{run_demo, DemoReport, DEMO_POST_ID};
pub use probe::{Probe, ProbeError};
pub use transport::{Transport, UreqTransport};
