//! Binary entrypoint: read one JSON request from stdin, write one JSON object to stdout.
//!
//! The request is `{"project": "ABC", "issues": [...], "top_n_assignees": 10}`.
//! Output is a StatusReport, or an ErrorOutput (exit status 1) when the
//! request is invalid. Logs go to stderr, filtered by `STATUS_ENGINE_LOG`.

use status_engine::types::ErrorOutput;
use status_engine::{run_request, EngineError};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "STATUS_ENGINE_LOG";

fn main() {
  init_tracing();

  let result = run_binary();
  let mut out = io::stdout().lock();
  let written = match &result {
    Ok(json) => out.write_all(json),
    Err(e) => {
      tracing::error!(error = %e, "status-engine failed");
      let mut err = ErrorOutput::new(e.to_string());
      if let Some(field) = e.field() {
        err = err.with_field(field);
      }
      serde_json::to_writer(&mut out, &err).map_err(io::Error::from)
    }
  };
  let written = written.and_then(|_| writeln!(out)).and_then(|_| out.flush());

  if let Err(e) = &written {
    let _ = writeln!(io::stderr(), "status-engine: write error: {}", e);
  }
  if result.is_err() || written.is_err() {
    std::process::exit(1);
  }
}

fn init_tracing() {
  let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_target(false)
    .init();
}

fn run_binary() -> Result<Vec<u8>, EngineError> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;
  let report = run_request(&raw)?;
  Ok(serde_json::to_vec(&report)?)
}
