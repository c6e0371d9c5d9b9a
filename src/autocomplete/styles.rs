//! Styles for the results panel.

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles applied to result rows.
///
/// Both styles indent the text by the same number of columns so rows stay
/// aligned while the highlight moves.
#[derive(Debug, Clone)]
pub struct Styles {
    /// A row that is not highlighted.
    pub row: Style,
    /// The highlighted row.
    pub highlighted_row: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            row: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                })
                .padding(0, 0, 0, 2),
            highlighted_row: Style::new()
                .border_style(lipgloss::normal_border())
                .border_left(true)
                .border_left_foreground(Color::from("#AD58B4"))
                .foreground(Color::from("#EE6FF8"))
                .padding(0, 0, 0, 1),
        }
    }
}
