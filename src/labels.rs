//! Text shown next to the frame: position, zoom and load summary.

/// Format the 1-based position label, `"0 / 0"` when nothing is loaded.
///
/// ```rust
/// use gif_stepper_core::labels::position_label;
///
/// assert_eq!(position_label(Some(0), 12), "1 / 12");
/// assert_eq!(position_label(None, 0), "0 / 0");
/// ```
pub fn position_label(current_index: Option<usize>, frame_count: usize) -> String {
    match current_index {
        Some(index) if frame_count > 0 => format!("{} / {}", index + 1, frame_count),
        _ => "0 / 0".to_string(),
    }
}

/// Format a zoom factor as a whole percentage.
pub fn zoom_label(zoom_factor: f64) -> String {
    format!("{:.0}%", zoom_factor * 100.0)
}

/// Format the message shown after a successful load.
pub fn load_summary(source_name: Option<&str>, frame_count: usize) -> String {
    let noun = if frame_count == 1 { "frame" } else { "frames" };
    match source_name {
        Some(name) => format!("Loaded: {} ({} {})", name, frame_count, noun),
        None => format!("Loaded {} {}", frame_count, noun),
    }
}
