//! Playback streams (sink-inputs)
//!
//! Lists active streams from `pactl list sink-inputs short` and moves them
//! between sinks with `pactl move-sink-input`.

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::pactl::CommandRunner;
use crate::sinks::short_fields;

/// An active playback stream and the sink it outputs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stream {
    pub index: String,
    /// Index of the sink this stream currently plays on
    pub sink: String,
    pub state: String,
}

/// Parse `pactl list sink-inputs short` output, preserving row order
#[must_use]
pub fn parse_short_streams(output: &str) -> Vec<Stream> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let parsed = short_fields(line);
            if parsed.is_none() {
                trace!("Skipping malformed stream row: {:?}", line);
            }
            parsed
        })
        .map(|(index, sink, state)| Stream { index, sink, state })
        .collect()
}

/// Stream queries and moves against the sound server
pub struct StreamRepository<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> StreamRepository<'a> {
    #[must_use]
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    #[must_use]
    pub fn list_streams(&self) -> Vec<Stream> {
        let streams = parse_short_streams(&self.runner.query(&["list", "sink-inputs", "short"]));
        debug!("Found {} playback streams", streams.len());
        streams
    }

    /// Move one stream to another sink; `false` if `pactl` failed
    #[must_use]
    pub fn move_stream(&self, stream_index: &str, sink_index: &str) -> bool {
        match self
            .runner
            .run(&["move-sink-input", stream_index, sink_index])
        {
            Ok(_) => {
                debug!("Moved stream #{} to sink #{}", stream_index, sink_index);
                true
            }
            Err(e) => {
                warn!(
                    "Could not move stream #{} to sink #{}: {:#}",
                    stream_index, sink_index, e
                );
                false
            }
        }
    }
}
