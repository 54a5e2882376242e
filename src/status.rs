//! Status snapshot and status-bar output
//!
//! Builds the widget's view of the audio setup: the sink most streams are
//! playing on, its volume and mute state, and a short display name. The
//! snapshot is rendered as the single JSON object a status-bar host reads
//! from a custom module's stdout.

use color_eyre::eyre::{Context, Result};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

use crate::config::Config;
use crate::names;
use crate::sinks::SinkRepository;
use crate::streams::{Stream, StreamRepository};

/// Raw name used when the chosen sink is missing from the sink listing
pub const UNKNOWN_SINK_NAME: &str = "Unknown";

/// What the widget shows for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub volume_percent: u32,
    pub muted: bool,
    pub display_name: String,
    pub icon: String,
    /// Index of the sink the snapshot describes; `None` when nothing is playing
    pub sink_index: Option<String>,
    /// Number of streams playing on that sink
    pub stream_count: usize,
}

impl StatusSnapshot {
    /// Placeholder shown when there are no playback streams
    #[must_use]
    pub fn inactive(config: &Config) -> Self {
        Self {
            volume_percent: 0,
            muted: true,
            display_name: config.labels.inactive_name.clone(),
            icon: config.labels.glyph_inactive.clone(),
            sink_index: None,
            stream_count: 0,
        }
    }
}

/// Order sink indices numerically when both are numbers, lexically otherwise
fn compare_indices(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

/// The sink hosting the most streams; ties go to the lowest index
#[must_use]
pub fn most_used_sink(streams: &[Stream]) -> Option<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for stream in streams {
        *counts.entry(stream.sink.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .max_by(|(a, count_a), (b, count_b)| {
            count_a.cmp(count_b).then_with(|| compare_indices(b, a))
        })
        .map(|(sink, _)| sink)
}

/// Aggregates sink and stream queries into a [`StatusSnapshot`]
pub struct StatusReporter<'a> {
    sinks: &'a SinkRepository<'a>,
    streams: &'a StreamRepository<'a>,
    config: &'a Config,
}

impl<'a> StatusReporter<'a> {
    #[must_use]
    pub fn new(
        sinks: &'a SinkRepository<'a>,
        streams: &'a StreamRepository<'a>,
        config: &'a Config,
    ) -> Self {
        Self {
            sinks,
            streams,
            config,
        }
    }

    /// Query the sound server and build a fresh snapshot
    #[must_use]
    pub fn current_status(&self) -> StatusSnapshot {
        let streams = self.streams.list_streams();
        let Some(sink_index) = most_used_sink(&streams) else {
            debug!("No playback streams, reporting inactive");
            return StatusSnapshot::inactive(self.config);
        };
        let stream_count = streams.iter().filter(|s| s.sink == sink_index).count();

        let raw_name = self
            .sinks
            .find_sink(sink_index)
            .map_or_else(|| UNKNOWN_SINK_NAME.to_string(), |s| s.name);
        let display_name = names::clean(&raw_name);

        let detail = self.sinks.sink_detail(sink_index);
        let volume_percent = detail.volume_percent();
        let muted = detail.is_muted();

        debug!(
            "Sink #{} ({}): {}%{}, {} stream(s)",
            sink_index,
            raw_name,
            volume_percent,
            if muted { " muted" } else { "" },
            stream_count
        );

        StatusSnapshot {
            volume_percent,
            muted,
            display_name,
            icon: self.config.volume_glyph(volume_percent).to_string(),
            sink_index: Some(sink_index.to_string()),
            stream_count,
        }
    }
}

/// One status-bar update, as read by the host from stdout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarOutput {
    pub text: String,
    pub tooltip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub percentage: u32,
}

impl BarOutput {
    #[must_use]
    pub fn render(snapshot: &StatusSnapshot, config: &Config) -> Self {
        let text = if snapshot.muted {
            format!("{} {}", config.labels.glyph_muted, snapshot.display_name)
        } else {
            format!(
                "{}% {} {}",
                snapshot.volume_percent, snapshot.icon, snapshot.display_name
            )
        };

        Self {
            text,
            tooltip: config.labels.tooltip.clone(),
            class: snapshot.muted.then(|| config.labels.muted_class.clone()),
            percentage: snapshot.volume_percent,
        }
    }

    /// Serialize as a single line of JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_line(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize status-bar output")
    }
}
