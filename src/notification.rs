//! Desktop notifications
//!
//! Sent by `sinkctl cycle --notify` after streams move, using
//! `FreeDesktop` standard icon names picked from the sink's raw name.

use color_eyre::eyre::{Context, Result};
use notify_rust::Notification;

/// Send a desktop notification
///
/// # Errors
/// Returns an error if the notification cannot be sent (e.g., no notification daemon running).
pub fn send_notification(summary: &str, body: &str, icon: Option<&str>) -> Result<()> {
    let icon = icon.unwrap_or("audio-card");

    Notification::new()
        .summary(summary)
        .body(body)
        .appname("sinkbar")
        .icon(icon)
        .timeout(3000)
        .show()
        .context("Failed to show notification")?;

    Ok(())
}

/// `FreeDesktop` icon name for a raw sink name
#[must_use]
pub fn sink_icon(raw_name: &str) -> &'static str {
    let name = raw_name.to_lowercase();

    if name.contains("hdmi") || name.contains("displayport") {
        "video-display"
    } else if name.contains("arctis")
        || name.contains("headset")
        || name.contains("headphone")
        || name.starts_with("bluez")
    {
        "audio-headphones"
    } else {
        "audio-speakers"
    }
}
