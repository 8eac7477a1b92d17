//! Terminal surface with colors and formatting
//!
//! Uses ANSI escape codes for colors and styling.

use std::io::{self, Write};

use super::{Marker, RepoRow, Surface};

// ANSI color codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Terminal surface: rows on stdout, notifications on stderr
pub struct TerminalSurface {
    /// Whether to use colors (can be disabled)
    use_colors: bool,
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSurface {
    /// Create a new terminal surface
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Create without colors
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// Format with color if colors are enabled
    fn color(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Format with multiple styles
    fn styled(&self, codes: &[&str], text: &str) -> String {
        if self.use_colors {
            let prefix: String = codes.iter().copied().collect();
            format!("{}{}{}", prefix, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn format_row(&self, row: &RepoRow) -> String {
        match (row.status.marker(), row.status.badge_text()) {
            (Marker::Danger, Some(badge)) => format!(
                "  {} {} {}",
                self.color(RED, "✗"),
                row.label,
                self.styled(&[BOLD, RED], &format!("[{}]", badge))
            ),
            _ => format!("  {} {}", self.color(GREEN, "✓"), row.label),
        }
    }

    fn format_search_term(&self, term: &str) -> String {
        format!(
            "{} {}",
            self.color(DIM, "Showing repositories for:"),
            self.styled(&[BOLD, CYAN], term)
        )
    }

    fn format_notification(&self, message: &str) -> String {
        format!("{} {}", self.styled(&[BOLD, YELLOW], "!"), message)
    }
}

impl Surface for TerminalSurface {
    fn clear(&self) {
        // A terminal cannot take lines back; start the new block on a fresh line.
        println!();
    }

    fn set_search_term(&self, term: &str) {
        println!("{}", self.format_search_term(term));
    }

    fn append_row(&self, row: RepoRow) {
        println!("{}", self.format_row(&row));
    }

    fn show_empty(&self, message: &str) {
        println!("{}", self.color(DIM, message));
    }

    fn notify(&self, message: &str) {
        eprintln!("{}", self.format_notification(message));
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::IssueStatus;

    #[test]
    fn test_color_formatting() {
        let surface = TerminalSurface::new();
        let colored = surface.color(RED, "test");
        assert!(colored.contains("\x1b[31m"));
        assert!(colored.contains("\x1b[0m"));
        assert!(colored.contains("test"));

        let surface = TerminalSurface::without_colors();
        assert_eq!(surface.color(RED, "test"), "test");
    }

    #[test]
    fn test_format_rows() {
        let surface = TerminalSurface::without_colors();

        let danger = RepoRow {
            label: "octocat/Hello-World".into(),
            status: IssueStatus::Open { count: 3 },
        };
        assert_eq!(surface.format_row(&danger), "  ✗ octocat/Hello-World [3 issue(s)]");

        let success = RepoRow {
            label: "octocat/Spoon-Knife".into(),
            status: IssueStatus::Clear,
        };
        assert_eq!(surface.format_row(&success), "  ✓ octocat/Spoon-Knife");
    }

    #[test]
    fn test_danger_row_is_red() {
        let surface = TerminalSurface::new();
        let row = RepoRow {
            label: "a/b".into(),
            status: IssueStatus::Open { count: 1 },
        };
        assert!(surface.format_row(&row).contains(RED));
    }

    #[test]
    fn test_format_search_term() {
        let surface = TerminalSurface::without_colors();
        assert_eq!(
            surface.format_search_term("octocat"),
            "Showing repositories for: octocat"
        );
    }
}
