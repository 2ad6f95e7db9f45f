use std::fmt;
use std::io::BufRead;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use timecard_core::{AttendanceTracker, Submission, SubmissionError};
use tracing::{info, warn};

#[derive(Debug, PartialEq)]
pub enum Rejection {
    NotUtf8,
    Invalid(SubmissionError),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotUtf8 => write!(f, "line is not valid UTF-8"),
            Rejection::Invalid(e) => write!(f, "{e}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct ReplayOutcome {
    pub accepted: usize,
    pub rejected: Vec<(usize, Rejection)>,
}

/// Feeds one submission per line into the tracker. Blank lines and `#` comments
/// are skipped; invalid lines are reported and do not stop the replay.
pub fn replay<R: BufRead>(
    mut reader: R,
    tracker: &mut AttendanceTracker,
    today: NaiveDate,
) -> Result<ReplayOutcome> {
    let mut outcome = ReplayOutcome::default();

    let mut buf = Vec::new();
    let mut line_number = 0;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("failed to read line {}", line_number + 1))?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(_) => {
                warn!(line = line_number, "rejected submission: not valid UTF-8");
                outcome.rejected.push((line_number, Rejection::NotUtf8));
                continue;
            }
        };
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match Submission::from_line(line, today) {
            Ok(submission) => {
                tracker.submit(submission);
                outcome.accepted += 1;
            }
            Err(e) => {
                warn!(line = line_number, error = %e, "rejected submission");
                outcome.rejected.push((line_number, Rejection::Invalid(e)));
            }
        }
    }

    info!(
        accepted = outcome.accepted,
        rejected = outcome.rejected.len(),
        "replay finished"
    );
    Ok(outcome)
}
