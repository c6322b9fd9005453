//! Audio metadata
//!
//! Clip durations are measured after synthesis by parsing the container,
//! never taken from the provider.

use crate::error::TtsResult;
use lofty::prelude::*;
use lofty::probe::Probe;
use std::io::Cursor;
use std::path::Path;

/// Duration in seconds of the audio file at `path`
pub fn duration_secs(path: &Path) -> TtsResult<f64> {
    let tagged = Probe::open(path)?.guess_file_type()?.read()?;
    Ok(tagged.properties().duration().as_secs_f64())
}

/// Duration in seconds of in-memory audio
pub fn duration_from_bytes(audio: &[u8]) -> TtsResult<f64> {
    let tagged = Probe::new(Cursor::new(audio)).guess_file_type()?.read()?;
    Ok(tagged.properties().duration().as_secs_f64())
}
