//! Formatting utilities for terminal output

use crate::core::{Code, Color, Feedback};
use colored::Colorize;

const PEG: &str = "●";
const HOLE: &str = "○";

/// Terminal colors for the first twelve peg colors; later colors cycle
const PALETTE: [colored::Color; 12] = [
    colored::Color::Blue,
    colored::Color::Red,
    colored::Color::Green,
    colored::Color::Yellow,
    colored::Color::Magenta,
    colored::Color::Cyan,
    colored::Color::BrightBlue,
    colored::Color::BrightRed,
    colored::Color::BrightGreen,
    colored::Color::BrightYellow,
    colored::Color::BrightMagenta,
    colored::Color::BrightCyan,
];

/// Terminal color used to draw a peg color
#[must_use]
pub const fn peg_color(color: Color) -> colored::Color {
    PALETTE[color as usize % PALETTE.len()]
}

/// Format a code as colored pegs followed by its digits
///
/// Pegs repeat once the palette is exhausted, so the digits stay authoritative.
#[must_use]
pub fn code_to_pegs(code: &Code) -> String {
    let pegs: Vec<String> = code
        .pegs()
        .iter()
        .map(|&color| PEG.color(peg_color(color)).to_string())
        .collect();

    format!("{} {}", pegs.join(" "), code.to_string().bold())
}

/// Format feedback as red pegs for exact and white pegs for partial matches
#[must_use]
pub fn feedback_to_pegs(feedback: Feedback, length: usize) -> String {
    let exact = usize::from(feedback.exact());
    let partial = usize::from(feedback.partial());
    let empty = length.saturating_sub(exact + partial);

    format!(
        "{}{}{}",
        PEG.repeat(exact).red(),
        PEG.repeat(partial).white(),
        HOLE.repeat(empty).bright_black()
    )
}

/// Plain feedback pegs: `●` exact, `○` partial, `·` no match
#[must_use]
pub fn feedback_symbols(feedback: Feedback, length: usize) -> String {
    let exact = usize::from(feedback.exact());
    let partial = usize::from(feedback.partial());
    let empty = length.saturating_sub(exact + partial);

    format!("{}{}{}", "●".repeat(exact), "○".repeat(partial), "·".repeat(empty))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
