//! Fold a recorded event log into a cloud storage snapshot.
//!
//! The log is JSON lines, one [`CloudStoragesEvent`] per line. Blank lines
//! and lines starting with `#` are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cloud_storage::{CloudStoragesEvent, CloudStoragesReducer, CloudStoragesState};
use crate::mvi::Store;

/// Errors that can occur while replaying an event log.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to open event log '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read event log at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid event at line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayOptions {
    /// Log and skip undecodable lines instead of failing.
    pub skip_invalid: bool,
}

/// Result of a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOutcome {
    pub state: CloudStoragesState,
    pub applied: u64,
    /// Line numbers (1-based) that were skipped as invalid.
    pub skipped: Vec<usize>,
}

/// Replay events from `reader`, starting from the default state.
pub fn replay<R: BufRead>(reader: R, options: ReplayOptions) -> Result<ReplayOutcome, ReplayError> {
    let mut store = Store::<CloudStoragesReducer>::new();
    let mut skipped = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| ReplayError::Read {
            line: line_no,
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match serde_json::from_str::<CloudStoragesEvent>(trimmed) {
            Ok(event) => {
                store.dispatch(event);
            }
            Err(source) if options.skip_invalid => {
                tracing::warn!(line = line_no, error = %source, "Skipping invalid event");
                skipped.push(line_no);
            }
            Err(source) => {
                return Err(ReplayError::Decode {
                    line: line_no,
                    source,
                })
            }
        }
    }

    let applied = store.dispatched();
    tracing::debug!(applied, skipped = skipped.len(), "Replay finished");
    Ok(ReplayOutcome {
        state: store.into_state(),
        applied,
        skipped,
    })
}

/// Replay the event log stored at `path`.
pub fn replay_file(path: &Path, options: ReplayOptions) -> Result<ReplayOutcome, ReplayError> {
    let file = File::open(path).map_err(|source| ReplayError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "Replaying event log");
    replay(BufReader::new(file), options)
}
