//! Plain text surface for pipes and CI environments
//!
//! No colors or special formatting - one line per row.

use std::io::{self, Write};

use super::{RepoRow, Surface};

/// Plain text surface (no colors)
#[derive(Default)]
pub struct PlainSurface;

impl PlainSurface {
    pub fn new() -> Self {
        Self
    }

    fn format_row(row: &RepoRow) -> String {
        match row.status.badge_text() {
            Some(badge) => format!("{}\t{}", row.label, badge),
            None => format!("{}\tok", row.label),
        }
    }
}

impl Surface for PlainSurface {
    fn clear(&self) {}

    fn set_search_term(&self, term: &str) {
        println!("# {}", term);
    }

    fn append_row(&self, row: RepoRow) {
        println!("{}", Self::format_row(&row));
    }

    fn show_empty(&self, message: &str) {
        println!("{}", message);
    }

    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}
