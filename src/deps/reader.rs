// src/deps/reader.rs

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

/// Read the dependency CSV, treating a missing or unreadable file as empty.
///
/// Sprint assignments without dependency data still produce a figure (all
/// nodes, no edges), so this failure only degrades the output rather than
/// stopping the run. The warning is the user's cue that the path is wrong.
pub fn read_dependency_file(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => {
            debug!(?path, bytes = contents.len(), "loaded dependency CSV");
            contents
        }
        Err(err) => {
            warn!(?path, %err, "could not read dependency file, continuing with empty data");
            String::new()
        }
    }
}
