//! Command-line interface definitions
//!
//! Uses clap for argument parsing with derive macros.
//!
//! The widget binary has no flags and is not parsed by clap: status-bar
//! hosts pass click details as arguments, and any argument at all means
//! "clicked".

use clap::{ArgAction, Parser, Subcommand};

/// Whether a `sinkbar` invocation was triggered by a click
///
/// `args` is the full argv including the program name. Any further argument
/// counts, including ones that look like flags and a bare `--`.
#[must_use]
pub fn is_click_from<I, T>(args: I) -> bool
where
    I: IntoIterator<Item = T>,
{
    args.into_iter().nth(1).is_some()
}

/// sinkctl - inspect and control the sinks the sinkbar widget shows
#[derive(Parser, Debug)]
#[command(name = "sinkctl")]
#[command(version)]
#[command(about = "Inspect and cycle PulseAudio/PipeWire outputs via pactl")]
#[command(after_help = "\
BEHAVIOR:
  - Sinks are cycled in the order 'pactl list sinks short' reports them
  - Cycling moves every playback stream to the sink after the first stream's sink
  - The status shows the sink most streams play on (ties: lowest index)

STATUS BAR:
  sinkbar                  Print the widget JSON line
  sinkbar click            Cycle to the next sink, then print the JSON line

EXAMPLES:
  sinkctl status           Show the current output
  sinkctl list-sinks       List sinks with their display labels
  sinkctl cycle --notify   Cycle and show a desktop notification
  sinkctl cycle --reverse  Cycle to the previous sink instead")]
pub struct Args {
    /// Control tool to run instead of 'pactl'
    #[arg(long, global = true, value_name = "PATH")]
    pub pactl: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the sink most streams play on, its volume and mute state
    Status {
        /// Print the status-bar JSON line instead
        #[arg(long)]
        json: bool,
    },

    /// List output sinks in cycling order
    ListSinks {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// List active playback streams
    ListStreams {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Move every stream to the next sink
    Cycle {
        /// Cycle backwards
        #[arg(long)]
        reverse: bool,

        /// Show a desktop notification with the new output
        #[arg(long)]
        notify: bool,
    },

    /// Print the display label for a raw sink name
    Clean {
        /// Raw sink name, e.g. alsa_output.pci-0000_00_1f.3.analog-stereo
        name: String,
    },

    /// Check that the control tool can be executed
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&["sinkbar"], false ; "no arguments")]
    #[test_case(&["sinkbar", "1"], true ; "button number")]
    #[test_case(&["sinkbar", "click"], true ; "word")]
    #[test_case(&["sinkbar", "--help"], true ; "help looks like a flag")]
    #[test_case(&["sinkbar", "-x", "--y"], true ; "unknown flags")]
    #[test_case(&["sinkbar", ""], true ; "empty argument")]
    #[test_case(&["sinkbar", "--"], true ; "bare separator")]
    #[test_case(&["sinkbar", "-"], true ; "single dash")]
    fn test_widget_click_detection(argv: &[&str], clicked: bool) {
        assert_eq!(is_click_from(argv.iter().copied()), clicked);
    }

    #[test]
    fn test_widget_click_detection_non_utf8() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let argv = [OsString::from("sinkbar"), OsString::from_vec(vec![0xff, 0xfe])];
        assert!(is_click_from(argv));
    }

    #[test]
    fn test_sinkctl_parses_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["sinkctl", "status", "--json", "--pactl", "/bin/false", "-vv"])
            .unwrap();
        assert_eq!(args.pactl.as_deref(), Some("/bin/false"));
        assert_eq!(args.verbose, 2);
        assert!(matches!(args.command, Command::Status { json: true }));
    }

    #[test]
    fn test_sinkctl_cycle_flags() {
        let args = Args::try_parse_from(["sinkctl", "cycle", "--reverse"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Cycle {
                reverse: true,
                notify: false
            }
        ));
    }

    #[test]
    fn test_sinkctl_requires_subcommand() {
        assert!(Args::try_parse_from(["sinkctl"]).is_err());
    }

    #[test]
    fn test_clap_definitions_are_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
