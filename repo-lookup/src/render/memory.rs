//! In-memory surface
//!
//! Keeps the current view and a log of notifications instead of drawing.
//! Used when embedding the pipeline and in tests.

use std::sync::{Mutex, MutexGuard};

use super::{RepoRow, Surface};

/// Snapshot of what a surface currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    /// Username echoed next to the rows
    pub search_term: Option<String>,
    /// Rows, top to bottom
    pub rows: Vec<RepoRow>,
    /// Inline empty-state message, if shown
    pub empty_message: Option<String>,
}

/// Surface that records instead of drawing
#[derive(Debug, Default)]
pub struct MemorySurface {
    view: Mutex<View>,
    notifications: Mutex<Vec<String>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view
    pub fn view(&self) -> View {
        lock(&self.view).clone()
    }

    /// Every notification shown so far, oldest first
    pub fn notifications(&self) -> Vec<String> {
        lock(&self.notifications).clone()
    }
}

// A panic while holding the lock leaves plain data behind; keep using it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Surface for MemorySurface {
    fn clear(&self) {
        let mut view = lock(&self.view);
        view.rows.clear();
        view.empty_message = None;
    }

    fn set_search_term(&self, term: &str) {
        lock(&self.view).search_term = Some(term.to_string());
    }

    fn append_row(&self, row: RepoRow) {
        lock(&self.view).rows.push(row);
    }

    fn show_empty(&self, message: &str) {
        lock(&self.view).empty_message = Some(message.to_string());
    }

    fn notify(&self, message: &str) {
        lock(&self.notifications).push(message.to_string());
    }
}
