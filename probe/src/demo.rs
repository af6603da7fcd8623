//! The fixed demonstration sequence run by the `blog-probe` binary.

use std::io::{self, Write};

use crate::probe::{Probe, ProbeError};
use crate::transport::Transport;

/// Post targeted by the read, update and delete steps.
pub const DEMO_POST_ID: u64 = 1;

/// How many demonstration steps received their expected status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DemoReport {
    pub succeeded: usize,
    pub failed: usize,
}

impl DemoReport {
    fn record<V>(&mut self, result: Result<V, ProbeError>) -> io::Result<()> {
        match result {
            Ok(_) => self.succeeded += 1,
            Err(ProbeError::Api(_)) => self.failed += 1,
            Err(ProbeError::Output(err)) => return Err(err),
        }
        Ok(())
    }
}

/// List posts, get post 1, list its comments, create a post, update post 1,
/// delete post 1. A failed step never stops the ones after it; only a broken
/// output stream does.
pub fn run_demo<T: Transport, W: Write>(probe: &mut Probe<T, W>) -> io::Result<DemoReport> {
    let mut report = DemoReport::default();
    report.record(probe.get_posts())?;
    report.record(probe.get_post_by_id(DEMO_POST_ID))?;
    report.record(probe.get_post_comments(DEMO_POST_ID))?;
    report.record(probe.post_post())?;
    report.record(probe.put_post(DEMO_POST_ID))?;
    report.record(probe.delete_post(DEMO_POST_ID))?;
    Ok(report)
}
