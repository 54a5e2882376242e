//! Sink discovery
//!
//! Parses the two sink listings `pactl` offers:
//! - `pactl list sinks short`: one tab-separated row per sink
//! - `pactl list sinks`: verbose `Sink #<N>` blocks of `Key: value` lines
//!
//! Both parsers are tolerant: malformed rows are skipped and missing fields
//! fall back to documented defaults rather than failing.

use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::pactl::CommandRunner;

/// State reported when a short-listing row has no third column
pub const UNKNOWN_STATE: &str = "unknown";

/// Volume assumed when the detail block carries no parseable percentage
pub const DEFAULT_VOLUME_PERCENT: u32 = 100;

static SINK_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Sink #\s*(\S*)").expect("sink header regex is valid"));

static VOLUME_PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)%").expect("volume regex is valid"));

// ============================================================================
// Types
// ============================================================================

/// An output device from `pactl list sinks short`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sink {
    pub index: String,
    /// Raw device name, e.g. `alsa_output.pci-0000_00_1f.3.analog-stereo`
    pub name: String,
    pub state: String,
}

/// Attributes of one sink from the verbose listing
///
/// Keys are lower-cased with spaces replaced by underscores
/// (`Base Volume` becomes `base_volume`); values are trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SinkDetail {
    attributes: BTreeMap<String, String>,
}

impl SinkDetail {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    fn insert(&mut self, key: String, value: String) {
        self.attributes.insert(key, value);
    }

    /// First `<digits>%` in the `volume` attribute, or 100
    ///
    /// Over-amplified volumes (above 100%) are returned as reported.
    #[must_use]
    pub fn volume_percent(&self) -> u32 {
        self.get("volume")
            .and_then(|v| VOLUME_PERCENT.captures(v))
            .and_then(|caps| caps[1].parse().ok())
            .unwrap_or(DEFAULT_VOLUME_PERCENT)
    }

    /// Whether the `mute` attribute is `yes` (case-insensitive); absent means unmuted
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.get("mute")
            .is_some_and(|m| m.eq_ignore_ascii_case("yes"))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SinkDetail {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attributes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Split one short-listing row into `(index, second column, state)`
///
/// Rows with fewer than two whitespace-separated fields are rejected.
pub(crate) fn short_fields(line: &str) -> Option<(String, String, String)> {
    let mut parts = line.split_whitespace();
    let index = parts.next()?;
    let second = parts.next()?;
    let state = parts.next().unwrap_or(UNKNOWN_STATE);
    Some((index.to_string(), second.to_string(), state.to_string()))
}

/// Parse `pactl list sinks short` output, preserving row order
#[must_use]
pub fn parse_short_sinks(output: &str) -> Vec<Sink> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let parsed = short_fields(line);
            if parsed.is_none() {
                trace!("Skipping malformed sink row: {:?}", line);
            }
            parsed
        })
        .map(|(index, name, state)| Sink { index, name, state })
        .collect()
}

/// Parse verbose `pactl list sinks` output into per-index attribute maps
///
/// `Key: value` lines before the first `Sink #<N>` header, or after a header
/// with no index, are ignored. Within a block, a repeated key keeps its last
/// value.
#[must_use]
pub fn parse_sink_details(output: &str) -> HashMap<String, SinkDetail> {
    let mut details: HashMap<String, SinkDetail> = HashMap::new();
    let mut current: Option<String> = None;

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = SINK_HEADER.captures(line) {
            let index = caps[1].to_string();
            if index.is_empty() {
                trace!("Sink header without index: {:?}", line);
                current = None;
            } else {
                details.insert(index.clone(), SinkDetail::default());
                current = Some(index);
            }
            continue;
        }

        let Some(index) = current.as_ref() else {
            continue;
        };
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        let key = key.trim().to_lowercase().replace(' ', "_");
        if let Some(detail) = details.get_mut(index) {
            detail.insert(key, value.trim().to_string());
        }
    }

    details
}

// ============================================================================
// Repository
// ============================================================================

/// Sink queries against the sound server
///
/// Nothing is cached: every call re-runs `pactl`.
pub struct SinkRepository<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> SinkRepository<'a> {
    #[must_use]
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// All sinks in the order `pactl` reports them
    ///
    /// This order defines the cycling order.
    #[must_use]
    pub fn list_sinks(&self) -> Vec<Sink> {
        let sinks = parse_short_sinks(&self.runner.query(&["list", "sinks", "short"]));
        debug!("Found {} sinks", sinks.len());
        sinks
    }

    /// Look up a sink by index in a fresh listing
    #[must_use]
    pub fn find_sink(&self, index: &str) -> Option<Sink> {
        self.list_sinks().into_iter().find(|s| s.index == index)
    }

    /// Attributes for one sink, empty if the index is not in the listing
    #[must_use]
    pub fn sink_detail(&self, index: &str) -> SinkDetail {
        let mut details = parse_sink_details(&self.runner.query(&["list", "sinks"]));
        details.remove(index).unwrap_or_else(|| {
            debug!("No detail block for sink #{}", index);
            SinkDetail::default()
        })
    }
}
