//! sinkctl commands
//!
//! Human-readable (styled) or JSON views over the same repositories the
//! widget uses, plus manual cycling.

use color_eyre::eyre::{self, Result};
use crossterm::style::Stylize;
use serde::Serialize;
use tracing::warn;

use crate::config::Config;
use crate::cycle::{CycleOutcome, Direction, SinkCycler};
use crate::names;
use crate::notification::{send_notification, sink_icon};
use crate::pactl::{CommandRunner, Pactl};
use crate::sinks::SinkRepository;
use crate::status::{BarOutput, StatusReporter, most_used_sink};
use crate::streams::StreamRepository;
use crate::style::SinkStyle;

// ============================================================================
// JSON Output Structures
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SinkJson {
    pub index: String,
    pub name: String,
    pub label: String,
    pub state: String,
    pub streams: usize,
}

// ============================================================================
// Commands
// ============================================================================

/// Show the current status snapshot
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn status(runner: &dyn CommandRunner, config: &Config, json_output: bool) -> Result<()> {
    let sinks = SinkRepository::new(runner);
    let streams = StreamRepository::new(runner);
    let snapshot = StatusReporter::new(&sinks, &streams, config).current_status();

    if json_output {
        println!("{}", BarOutput::render(&snapshot, config).to_json_line()?);
        return Ok(());
    }

    println!("{}", "Audio Output".header());
    println!("{}", "-".repeat(12));

    let Some(index) = snapshot.sink_index.as_deref() else {
        println!("{}", snapshot.display_name.as_str().warning());
        return Ok(());
    };

    println!(
        "{} {} {}",
        "Current:".dim(),
        snapshot.display_name.as_str().bold(),
        format!("(sink #{index})").dim()
    );
    let volume = format!("{}%", snapshot.volume_percent);
    if snapshot.muted {
        println!("{} {} {}", "Volume:".dim(), volume, "muted".warning());
    } else {
        println!("{} {}", "Volume:".dim(), volume.success());
    }
    println!(
        "{} {}",
        "Streams:".dim(),
        snapshot.stream_count.to_string().technical()
    );

    Ok(())
}

/// List sinks in cycling order
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn list_sinks(runner: &dyn CommandRunner, json_output: bool) -> Result<()> {
    let sinks = SinkRepository::new(runner).list_sinks();
    let streams = StreamRepository::new(runner).list_streams();
    let busiest = most_used_sink(&streams);

    let rows: Vec<SinkJson> = sinks
        .into_iter()
        .map(|s| SinkJson {
            label: names::clean(&s.name),
            streams: streams.iter().filter(|st| st.sink == s.index).count(),
            index: s.index,
            name: s.name,
            state: s.state,
        })
        .collect();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", "SINKS:".header());
    println!("{}", "-".repeat(6));
    if rows.is_empty() {
        println!("  {}", "(none)".dim());
        return Ok(());
    }

    for row in &rows {
        let marker = if busiest == Some(row.index.as_str()) {
            "* "
        } else {
            "  "
        };
        println!(
            "{}{} {} {}",
            marker,
            format!("#{}", row.index).technical(),
            row.label.as_str().bold(),
            format!("[{}, {} stream(s)]", row.state, row.streams).dim()
        );
        println!("     {}", row.name.as_str().dim());
    }
    if busiest.is_some() {
        println!("\n  {} = shown in the status bar", "*".dim());
    }

    Ok(())
}

/// List active playback streams
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn list_streams(runner: &dyn CommandRunner, json_output: bool) -> Result<()> {
    let streams = StreamRepository::new(runner).list_streams();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&streams)?);
        return Ok(());
    }

    println!("{}", "STREAMS:".header());
    println!("{}", "-".repeat(8));
    if streams.is_empty() {
        println!("  {}", "(none)".dim());
    }
    for stream in &streams {
        println!(
            "  {} {} {} {}",
            format!("#{}", stream.index).technical(),
            "→".dim(),
            format!("sink #{}", stream.sink).bold(),
            format!("[{}]", stream.state).dim()
        );
    }

    Ok(())
}

/// Cycle every stream to the next (or previous) sink
///
/// # Errors
/// Returns an error if there was nothing to cycle or any stream failed to move.
pub fn cycle(runner: &dyn CommandRunner, direction: Direction, notify: bool) -> Result<()> {
    let sinks = SinkRepository::new(runner);
    let streams = StreamRepository::new(runner);

    match SinkCycler::new(&sinks, &streams).cycle_all_streams(direction) {
        CycleOutcome::NoStreams => {
            println!("{}", "No playback streams, nothing to cycle".warning());
            eyre::bail!("No playback streams to move");
        }
        CycleOutcome::Moved {
            target,
            moved,
            failed,
        } => {
            let raw_name = sinks
                .find_sink(&target)
                .map(|s| s.name)
                .unwrap_or_default();
            let label = names::clean(&raw_name);

            println!(
                "{} {} {}",
                "Switched to:".success(),
                label.as_str().bold(),
                format!("(sink #{target}, {} stream(s))", moved.len()).dim()
            );

            if notify && !moved.is_empty() {
                let body = format!("{label} ({} stream(s))", moved.len());
                if let Err(e) = send_notification("Audio Output", &body, Some(sink_icon(&raw_name)))
                {
                    warn!("Notification failed: {}", e);
                }
            }

            if !failed.is_empty() {
                for index in &failed {
                    println!(
                        "  {} stream {}",
                        "Could not move".error(),
                        format!("#{index}").technical()
                    );
                }
                eyre::bail!(
                    "{} of {} stream(s) could not be moved to sink #{}",
                    failed.len(),
                    failed.len() + moved.len(),
                    target
                );
            }

            Ok(())
        }
    }
}

/// Print the display label for a raw sink name
pub fn clean(name: &str) {
    println!("{}", names::clean(name));
}

/// Check that the control tool runs
///
/// # Errors
/// Returns an error with installation hints if the tool cannot be executed.
pub fn check(pactl: &Pactl) -> Result<()> {
    let version = pactl.validate()?;
    println!(
        "{} {} {}",
        "✓".success(),
        pactl.program().bold(),
        version.as_str().dim()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FakePactl, SHORT_SINKS, SHORT_STREAMS, VERBOSE_SINKS};

    fn populated() -> FakePactl {
        FakePactl::new()
            .respond(&["list", "sinks", "short"], SHORT_SINKS)
            .respond(&["list", "sinks"], VERBOSE_SINKS)
            .respond(&["list", "sink-inputs", "short"], SHORT_STREAMS)
    }

    #[test]
    fn test_status_and_listings_succeed() {
        let fake = populated();
        let config = Config::default();

        assert!(status(&fake, &config, false).is_ok());
        assert!(status(&fake, &config, true).is_ok());
        assert!(list_sinks(&fake, false).is_ok());
        assert!(list_sinks(&fake, true).is_ok());
        assert!(list_streams(&fake, false).is_ok());
        assert!(list_streams(&fake, true).is_ok());
        assert!(fake.calls_to("move-sink-input").is_empty());
    }

    #[test]
    fn test_listings_with_nothing_running() {
        let fake = FakePactl::new();
        assert!(status(&fake, &Config::default(), false).is_ok());
        assert!(list_sinks(&fake, false).is_ok());
        assert!(list_streams(&fake, false).is_ok());
    }

    #[test]
    fn test_cycle_without_streams_fails() {
        let fake = FakePactl::new().respond(&["list", "sinks", "short"], SHORT_SINKS);
        assert!(cycle(&fake, Direction::Next, false).is_err());
        assert!(fake.calls_to("move-sink-input").is_empty());
    }

    #[test]
    fn test_cycle_reverse() {
        let fake = populated();
        assert!(cycle(&fake, Direction::Prev, false).is_ok());
        assert_eq!(
            fake.calls_to("move-sink-input"),
            vec![
                "move-sink-input 101 47",
                "move-sink-input 102 47",
                "move-sink-input 103 47",
            ]
        );
    }

    #[test]
    fn test_cycle_reports_failed_moves() {
        let fake = populated().fail(&["move-sink-input", "103", "63"]);
        let err = cycle(&fake, Direction::Next, false).unwrap_err();
        assert!(err.to_string().contains("1 of 3"));
    }
}
