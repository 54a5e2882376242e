//! Test helpers
//!
//! [`FakePactl`] stands in for the control tool: it replays canned stdout per
//! argument vector and records every call, so tests can assert on which
//! commands ran (e.g. that no `move-sink-input` was issued).

use color_eyre::eyre::{self, Result};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::pactl::CommandRunner;

/// Scripted [`CommandRunner`] for tests
///
/// Argument vectors with no scripted response succeed with empty output.
#[derive(Debug, Default)]
pub struct FakePactl {
    responses: HashMap<String, String>,
    failures: HashSet<String>,
    calls: RefCell<Vec<String>>,
}

impl FakePactl {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `args` with `stdout`
    #[must_use]
    pub fn respond(mut self, args: &[&str], stdout: &str) -> Self {
        self.responses.insert(args.join(" "), stdout.to_string());
        self
    }

    /// Make `args` fail as if the tool exited non-zero
    #[must_use]
    pub fn fail(mut self, args: &[&str]) -> Self {
        self.failures.insert(args.join(" "));
        self
    }

    /// Every argument vector run so far, space-joined, in call order
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Calls whose first argument is `verb`
    #[must_use]
    pub fn calls_to(&self, verb: &str) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.split(' ').next() == Some(verb))
            .cloned()
            .collect()
    }
}

impl CommandRunner for FakePactl {
    fn run(&self, args: &[&str]) -> Result<String> {
        let key = args.join(" ");
        self.calls.borrow_mut().push(key.clone());

        if self.failures.contains(&key) {
            eyre::bail!("pactl {key} failed: scripted failure");
        }

        Ok(self.responses.get(&key).cloned().unwrap_or_default())
    }
}

// ============================================================================
// Captured pactl output
// ============================================================================

/// `pactl list sinks short` with a built-in card and an Arctis headset
pub const SHORT_SINKS: &str = "\
47\talsa_output.pci-0000_00_1f.3.analog-stereo\tPipeWire\ts32le 2ch 48000Hz\tSUSPENDED
52\talsa_output.usb-SteelSeries_Arctis_Nova_Pro_Wireless-00.stereo-game\tPipeWire\ts16le 2ch 48000Hz\tRUNNING

63\talsa_output.usb-SteelSeries_Arctis_Nova_Pro_Wireless-00.mono-chat\tPipeWire\ts16le 1ch 48000Hz\tIDLE
";

/// `pactl list sinks` for sinks 47 (40%, unmuted) and 52 (70%, muted)
pub const VERBOSE_SINKS: &str = "\
Sink #47
\tState: SUSPENDED
\tName: alsa_output.pci-0000_00_1f.3.analog-stereo
\tDescription: Built-in Audio Analog Stereo
\tDriver: PipeWire
\tSample Specification: s32le 2ch 48000Hz
\tMute: no
\tVolume: front-left: 26214 /  40% / -23.88 dB,   front-right: 26214 /  40% / -23.88 dB
\t        balance 0.00
\tBase Volume: 65536 / 100% / 0.00 dB

Sink #52
\tState: RUNNING
\tName: alsa_output.usb-SteelSeries_Arctis_Nova_Pro_Wireless-00.stereo-game
\tMute: yes
\tVolume: front-left: 45875 /  70% / -9.29 dB,   front-right: 45875 /  70% / -9.29 dB
";

/// `pactl list sink-inputs short`: two streams on sink 52, one on sink 47
pub const SHORT_STREAMS: &str = "\
101\t52\t88\tPipeWire\tfloat32le 2ch 48000Hz
102\t47\t91\tPipeWire\ts16le 2ch 44100Hz
103\t52\t95\tPipeWire\tfloat32le 2ch 48000Hz
";
