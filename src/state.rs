use std::time::{Duration, Instant};

use crate::data::detect::repeat_laureates;
use crate::data::filter::{filtered_indices, Selection};
use crate::data::model::{Laureate, Prize};

// ---------------------------------------------------------------------------
// Transient notice
// ---------------------------------------------------------------------------

/// How long the filter acknowledgment stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(1);

/// A transient banner with a fixed expiry. There is a single notice slot:
/// arming a new one overwrites (and thereby cancels) the pending one.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub expires_at: Instant,
}

impl Notice {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + NOTICE_DURATION,
        }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. Owned by the presentation
/// layer; all transformations are pure functions over this struct's fields.
pub struct AppState {
    /// Loaded snapshot of the full prize collection (empty until the initial
    /// load completes, and stays empty if it fails).
    pub prizes: Vec<Prize>,

    /// Current selector state (year / category constraints).
    pub selection: Selection,

    /// Indices of prizes passing the selectors at the last filter action,
    /// in source order.
    pub visible_indices: Vec<usize>,

    /// Laureate occurrences appearing in more than one prize, computed once
    /// from the unfiltered snapshot. Independent of the current selection.
    pub repeat_laureates: Vec<Laureate>,

    /// Whether the initial fetch is still in flight.
    pub loading: bool,

    /// Pending filter acknowledgment, if any.
    pub notice: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            prizes: Vec::new(),
            selection: Selection::default(),
            visible_indices: Vec::new(),
            repeat_laureates: Vec::new(),
            loading: false,
            notice: None,
        }
    }
}

impl AppState {
    /// Ingest the fetched snapshot: show everything and compute the repeat
    /// view. Repeats are derived from the unfiltered collection and never
    /// recomputed afterwards.
    pub fn set_prizes(&mut self, prizes: Vec<Prize>) {
        self.visible_indices = (0..prizes.len()).collect();
        self.repeat_laureates = repeat_laureates(&prizes);
        self.prizes = prizes;
        self.loading = false;
    }

    /// Recompute the visible set from the current selection and arm the
    /// acknowledgment notice (replacing any pending one).
    pub fn apply_filter(&mut self) {
        self.visible_indices = filtered_indices(&self.prizes, &self.selection);
        self.notice = Some(Notice::new("Filter applied successfully!"));
    }

    /// Drop the notice once its deadline has passed.
    pub fn expire_notice(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::expired) {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::YearField;

    fn snapshot() -> Vec<Prize> {
        let one = Laureate {
            id: "1".to_string(),
            firstname: Some("A".to_string()),
            surname: Some("X".to_string()),
        };
        vec![
            Prize {
                year: YearField::Number(1901),
                category: "Physics".to_string(),
                laureates: vec![one.clone()],
            },
            Prize {
                year: YearField::Number(1902),
                category: "Physics".to_string(),
                laureates: vec![one],
            },
        ]
    }

    #[test]
    fn ingest_shows_everything_and_detects_repeats() {
        let mut state = AppState::default();
        state.set_prizes(snapshot());
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.repeat_laureates.len(), 2);
        assert!(!state.loading);
    }

    #[test]
    fn filter_action_narrows_the_visible_set_and_arms_the_notice() {
        let mut state = AppState::default();
        state.set_prizes(snapshot());
        state.selection.year = Some(1901);
        state.selection.category = Some("physics".to_string());
        state.apply_filter();
        assert_eq!(state.visible_indices, vec![0]);
        assert!(state.notice.is_some());
    }

    #[test]
    fn repeat_view_is_independent_of_the_selection() {
        let mut state = AppState::default();
        state.set_prizes(snapshot());
        state.selection.year = Some(1901);
        state.apply_filter();
        assert_eq!(state.repeat_laureates.len(), 2);
    }

    #[test]
    fn a_new_notice_replaces_the_pending_one() {
        let mut state = AppState::default();
        state.set_prizes(snapshot());
        state.apply_filter();
        let first_deadline = state.notice.as_ref().unwrap().expires_at;
        state.apply_filter();
        let second_deadline = state.notice.as_ref().unwrap().expires_at;
        assert!(second_deadline >= first_deadline);
    }

    #[test]
    fn failed_load_leaves_both_views_empty() {
        let mut state = AppState::default();
        state.selection.year = Some(1901);
        state.apply_filter();
        assert!(state.visible_indices.is_empty());
        assert!(state.repeat_laureates.is_empty());
    }
}
