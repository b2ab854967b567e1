//! Plain-text rendering of ticks and sentences.

use melops_sync::sync::Tick;
use melops_sync::types::WordInterval;

/// Format seconds as a string with two decimal places.
pub fn format_secs(secs: f64) -> String {
    format!("{:.2}s", secs)
}

/// Render one tick: the active sentence with active words in brackets.
///
/// ```text
/// [  0.62s] Hello [there!]
/// ```
pub fn tick_line(tick: &Tick) -> String {
    let body = if tick.sentence.is_empty() {
        tick.active
            .iter()
            .map(|w| format!("[{}]", w.display_text()))
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        tick.sentence
            .iter()
            .map(|w| {
                if tick.active.contains(w) {
                    format!("[{}]", w.display_text())
                } else {
                    w.display_text().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    };

    format!("[{:>8}] {}", format_secs(tick.position), body)
        .trim_end()
        .to_string()
}

/// Render one sentence with its time span.
pub fn sentence_line(index: usize, words: &[&WordInterval]) -> String {
    let start = words.iter().map(|w| w.start).fold(f64::INFINITY, f64::min);
    let end = words.iter().map(|w| w.end).fold(0.0, f64::max);
    let text = words
        .iter()
        .map(|w| w.display_text())
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "#{index} [{} - {}] {text}",
        format_secs(start),
        format_secs(end)
    )
}

/// Display preview of lines (first and last entries).
pub fn preview_lines(lines: &[String], head_count: usize, tail_count: usize) -> String {
    let total = lines.len();

    if total <= head_count + tail_count {
        lines.join("\n")
    } else {
        let mut out = Vec::with_capacity(head_count + tail_count + 1);
        out.extend_from_slice(&lines[..head_count]);
        out.push("...".to_string());
        out.extend_from_slice(&lines[total - tail_count..]);
        out.join("\n")
    }
}
