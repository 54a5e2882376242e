//! Sink cycling
//!
//! Moves every playback stream to the next sink in `pactl`'s listing order,
//! wrapping around at the end.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::sinks::{Sink, SinkRepository};
use crate::streams::StreamRepository;

/// Returned when there are no sinks to pick from
pub const NO_SINK_INDEX: &str = "0";

/// Direction for sink cycling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Next,
    Prev,
}

/// Pick the sink after (or before) `current` in listing order
///
/// - No sinks: [`NO_SINK_INDEX`]
/// - No reference, or a reference not in the list: the first sink
/// - Otherwise the neighbour at `position ± 1`, wrapping
#[must_use]
pub fn next_sink_index(sinks: &[Sink], current: Option<&str>, direction: Direction) -> String {
    let Some(first) = sinks.first() else {
        return NO_SINK_INDEX.to_string();
    };

    let Some(position) = current.and_then(|c| sinks.iter().position(|s| s.index == c)) else {
        return first.index.clone();
    };

    let next = match direction {
        Direction::Next => (position + 1) % sinks.len(),
        Direction::Prev => (position + sinks.len() - 1) % sinks.len(),
    };
    sinks[next].index.clone()
}

/// Result of one cycling attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CycleOutcome {
    /// Nothing is playing; no move was attempted
    NoStreams,
    /// Every stream was offered to `target`; `failed` lists the ones that did not move
    Moved {
        target: String,
        moved: Vec<String>,
        failed: Vec<String>,
    },
}

impl CycleOutcome {
    /// True only if there were streams and every move succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Moved { failed, .. } if failed.is_empty())
    }
}

/// Moves all streams between sinks
pub struct SinkCycler<'a> {
    sinks: &'a SinkRepository<'a>,
    streams: &'a StreamRepository<'a>,
}

impl<'a> SinkCycler<'a> {
    #[must_use]
    pub fn new(sinks: &'a SinkRepository<'a>, streams: &'a StreamRepository<'a>) -> Self {
        Self { sinks, streams }
    }

    /// [`next_sink_index`] over a fresh sink listing
    #[must_use]
    pub fn next_sink_index(&self, current: Option<&str>, direction: Direction) -> String {
        next_sink_index(&self.sinks.list_sinks(), current, direction)
    }

    /// Move every stream to the sink after the first stream's sink
    ///
    /// Moves are not rolled back: streams moved before a failure stay moved.
    pub fn cycle_all_streams(&self, direction: Direction) -> CycleOutcome {
        let streams = self.streams.list_streams();
        let Some(reference) = streams.first() else {
            debug!("No playback streams, nothing to cycle");
            return CycleOutcome::NoStreams;
        };

        let target = self.next_sink_index(Some(&reference.sink), direction);
        info!(
            "Cycling {} stream(s) from sink #{} to sink #{}",
            streams.len(),
            reference.sink,
            target
        );

        let (moved, failed): (Vec<_>, Vec<_>) = streams
            .iter()
            .map(|s| s.index.clone())
            .partition(|index| self.streams.move_stream(index, &target));

        if !failed.is_empty() {
            warn!(
                "{} of {} stream(s) could not be moved to sink #{}",
                failed.len(),
                streams.len(),
                target
            );
        }

        CycleOutcome::Moved {
            target,
            moved,
            failed,
        }
    }

    /// Forward cycle, as triggered by a status-bar click
    pub fn cycle_all_streams_to_next_sink(&self) -> CycleOutcome {
        self.cycle_all_streams(Direction::Next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::parse_short_sinks;
    use crate::test_utils::{FakePactl, SHORT_SINKS, SHORT_STREAMS};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn sinks() -> Vec<Sink> {
        parse_short_sinks(SHORT_SINKS)
    }

    #[rstest]
    #[case(Some("47"), Direction::Next, "52")]
    #[case(Some("52"), Direction::Next, "63")]
    #[case(Some("63"), Direction::Next, "47")]
    #[case(Some("47"), Direction::Prev, "63")]
    #[case(Some("63"), Direction::Prev, "52")]
    #[case(Some("999"), Direction::Next, "47")]
    #[case(None, Direction::Next, "47")]
    fn test_next_sink_index(
        #[case] current: Option<&str>,
        #[case] direction: Direction,
        #[case] expected: &str,
    ) {
        assert_eq!(next_sink_index(&sinks(), current, direction), expected);
    }

    #[test]
    fn test_next_sink_index_empty_list() {
        assert_eq!(next_sink_index(&[], Some("47"), Direction::Next), NO_SINK_INDEX);
        assert_eq!(next_sink_index(&[], None, Direction::Prev), NO_SINK_INDEX);
    }

    #[test]
    fn test_next_sink_index_is_circular() {
        let sinks = sinks();
        for start in &sinks {
            let mut index = start.index.clone();
            for _ in 0..sinks.len() {
                index = next_sink_index(&sinks, Some(&index), Direction::Next);
            }
            assert_eq!(index, start.index);
        }
    }

    #[test]
    fn test_next_sink_index_single_sink_wraps_to_itself() {
        let sinks = parse_short_sinks("5\tonly_sink\tRUNNING\n");
        assert_eq!(next_sink_index(&sinks, Some("5"), Direction::Next), "5");
    }

    #[test]
    fn test_cycle_without_streams_moves_nothing() {
        let fake = FakePactl::new().respond(&["list", "sinks", "short"], SHORT_SINKS);
        let sinks = SinkRepository::new(&fake);
        let streams = StreamRepository::new(&fake);

        let outcome = SinkCycler::new(&sinks, &streams).cycle_all_streams_to_next_sink();

        assert_eq!(outcome, CycleOutcome::NoStreams);
        assert!(!outcome.is_success());
        assert!(fake.calls_to("move-sink-input").is_empty());
    }

    #[test]
    fn test_cycle_moves_every_stream_relative_to_first() {
        let fake = FakePactl::new()
            .respond(&["list", "sinks", "short"], SHORT_SINKS)
            .respond(&["list", "sink-inputs", "short"], SHORT_STREAMS);
        let sinks = SinkRepository::new(&fake);
        let streams = StreamRepository::new(&fake);

        let outcome = SinkCycler::new(&sinks, &streams).cycle_all_streams_to_next_sink();

        // First stream is on 52, so everything goes to 63, including the stream on 47
        assert_eq!(
            fake.calls_to("move-sink-input"),
            vec![
                "move-sink-input 101 63",
                "move-sink-input 102 63",
                "move-sink-input 103 63",
            ]
        );
        assert!(outcome.is_success());
    }

    #[test]
    fn test_cycle_partial_failure_keeps_going() {
        let fake = FakePactl::new()
            .respond(&["list", "sinks", "short"], SHORT_SINKS)
            .respond(&["list", "sink-inputs", "short"], SHORT_STREAMS)
            .fail(&["move-sink-input", "102", "63"]);
        let sinks = SinkRepository::new(&fake);
        let streams = StreamRepository::new(&fake);

        let outcome = SinkCycler::new(&sinks, &streams).cycle_all_streams_to_next_sink();

        assert_eq!(
            outcome,
            CycleOutcome::Moved {
                target: "63".to_string(),
                moved: vec!["101".to_string(), "103".to_string()],
                failed: vec!["102".to_string()],
            }
        );
        assert!(!outcome.is_success());
        assert_eq!(fake.calls_to("move-sink-input").len(), 3);
    }

    #[test]
    fn test_cycle_without_sinks_targets_sentinel() {
        let fake = FakePactl::new().respond(&["list", "sink-inputs", "short"], "9\t4\n");
        let sinks = SinkRepository::new(&fake);
        let streams = StreamRepository::new(&fake);

        SinkCycler::new(&sinks, &streams).cycle_all_streams_to_next_sink();

        assert_eq!(fake.calls_to("move-sink-input"), vec!["move-sink-input 9 0"]);
    }
}
