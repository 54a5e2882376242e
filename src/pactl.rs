//! `pactl` invocation
//!
//! Every query the widget makes goes through [`CommandRunner`], so the
//! text parsers can be exercised against canned output in tests without
//! spawning processes. The real implementation, [`Pactl`], shells out to
//! the configured control tool and captures stdout.

use color_eyre::eyre::{self, Context, Result};
use std::process::Command;
use tracing::{debug, trace, warn};

/// Runs the sound-server control tool with an argument vector
pub trait CommandRunner {
    /// Execute the tool and return its standard output as text
    ///
    /// # Errors
    /// Returns an error if the tool cannot be spawned or exits non-zero.
    fn run(&self, args: &[&str]) -> Result<String>;

    /// Execute the tool, treating any failure as "no data"
    ///
    /// Callers cannot distinguish a failed query from an empty listing.
    fn query(&self, args: &[&str]) -> String {
        match self.run(args) {
            Ok(stdout) => stdout,
            Err(e) => {
                debug!("Query {:?} failed, treating as empty: {:#}", args, e);
                String::new()
            }
        }
    }
}

/// The system `pactl` (or a compatible replacement)
#[derive(Debug, Clone)]
pub struct Pactl {
    program: String,
}

impl Pactl {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check that the control tool can be executed
    ///
    /// # Errors
    /// Returns an error with installation hints if `<tool> --version` fails.
    pub fn validate(&self) -> Result<String> {
        let version = self.run(&["--version"]).map_err(|e| {
            eyre::eyre!(
                "Control tool '{}' is not usable: {e:#}\n\
                 \n\
                 Please install the PulseAudio utilities for your distribution\n\
                 (pipewire-pulse provides a compatible server):\n\
                 - Arch/Manjaro: pacman -S libpulse\n\
                 - Fedora: dnf install pulseaudio-utils\n\
                 - Debian/Ubuntu: apt install pulseaudio-utils",
                self.program
            )
        })?;
        Ok(version.lines().next().unwrap_or_default().trim().to_string())
    }
}

impl Default for Pactl {
    fn default() -> Self {
        Self::new("pactl")
    }
}

impl CommandRunner for Pactl {
    fn run(&self, args: &[&str]) -> Result<String> {
        trace!("Running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .with_context(|| format!("Failed to execute '{}'", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                "{} {} exited with {}: {}",
                self.program,
                args.join(" "),
                output.status,
                stderr.trim()
            );
            eyre::bail!("{} {} failed: {}", self.program, args.join(" "), stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
