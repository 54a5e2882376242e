//! Short display labels for raw sink names
//!
//! Rules are checked in order and the first match wins:
//! 1. SteelSeries Arctis headsets: `Game`, `Chat`, or `Arctis`
//! 2. Onboard analog outputs: `Stereo`
//! 3. Anything else: the last dot-separated component, title-cased

/// Map a raw device name to a short label
#[must_use]
pub fn clean(raw_name: &str) -> String {
    let lower = raw_name.to_lowercase();

    if lower.contains("arctis") {
        return if lower.contains("stereo-game") || lower.contains("game") {
            "Game".to_string()
        } else if lower.contains("mono-chat") || lower.contains("chat") {
            "Chat".to_string()
        } else {
            "Arctis".to_string()
        };
    }

    if (lower.contains("pci") && lower.contains("analog")) || lower.contains("analog-stereo") {
        return "Stereo".to_string();
    }

    let last = raw_name.rsplit('.').next().unwrap_or(raw_name);
    let spaced = last
        .replace("analog-stereo", "")
        .replace(['_', '-'], " ");
    title_case(spaced.trim())
}

/// Upper-case the first letter of every run of letters, lower-case the rest
///
/// Any non-letter starts a new word, so `iec958` becomes `Iec958` and
/// `2ch` becomes `2Ch`.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}
