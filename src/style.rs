//! Terminal styling for `sinkctl` output
//!
//! Semantic colors keep the human-readable commands consistent:
//! - Cyan bold for section headers, cyan for indices and counts
//! - Green/yellow/red for success, warning and failure
//! - Dim for secondary detail (raw device names, hints)

use crossterm::style::Stylize;

/// Extension trait for consistent sinkctl styling
///
/// # Examples
///
/// ```
/// use sinkbar::style::SinkStyle;
///
/// println!("{}", "SINKS:".header());
/// println!("{}", "Moved".success());
/// ```
pub trait SinkStyle: Stylize {
    /// Section headers like "SINKS:" (cyan bold)
    fn header(self) -> <<Self as Stylize>::Styled as Stylize>::Styled
    where
        Self: Sized,
        <Self as Stylize>::Styled: Stylize,
    {
        self.cyan().bold()
    }

    /// Positive states: running sinks, completed moves
    fn success(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.green()
    }

    /// Failures: moves that did not happen, unusable tool
    fn error(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.red()
    }

    /// Partial or degraded states: muted, idle, nothing to do
    fn warning(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.yellow()
    }

    /// Sink and stream indices, counts
    fn technical(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.cyan()
    }
}

impl<T: Stylize> SinkStyle for T {}
