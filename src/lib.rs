//! `sinkbar` - status-bar audio widget
//!
//! Shows which output sink your playback streams are using, with its volume
//! and mute state, and cycles every stream to the next sink on click.
//! Talks to PulseAudio (or PipeWire via `pipewire-pulse`) through `pactl`.
//!
//! # Features
//! - One JSON object per invocation for Waybar-style custom modules
//! - Click-to-cycle across sinks in the order `pactl` lists them
//! - Short labels for common devices (Arctis game/chat, onboard analog)
//! - `sinkctl` for inspecting sinks and streams from a terminal

pub mod cli;
pub mod commands;
pub mod config;
pub mod cycle;
pub mod logging;
pub mod names;
pub mod notification;
pub mod pactl;
pub mod sinks;
pub mod status;
pub mod streams;
pub mod style;
#[cfg(any(test, feature = "test-utils"))]
#[doc(hidden)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use cycle::{CycleOutcome, Direction, SinkCycler};
pub use pactl::{CommandRunner, Pactl};
pub use sinks::{Sink, SinkDetail, SinkRepository};
pub use status::{BarOutput, StatusReporter, StatusSnapshot};
pub use streams::{Stream, StreamRepository};
