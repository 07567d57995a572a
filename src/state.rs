use crate::completions::CompletionStore;
use crate::models::{DateKey, ViewMode};
use crate::navigation;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Everything one tracker session owns.
#[derive(Debug, Clone)]
pub struct Tracker {
    reference_date: NaiveDate,
    view_mode: ViewMode,
    completions: CompletionStore,
}

impl Tracker {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            reference_date: today,
            view_mode: ViewMode::default(),
            completions: CompletionStore::default(),
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn completions(&self) -> &CompletionStore {
        &self.completions
    }

    pub fn set_reference_date(&mut self, date: NaiveDate) {
        self.reference_date = date;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn is_completed(&self, key: DateKey) -> bool {
        self.completions.is_completed(key)
    }

    pub fn toggle(&mut self, key: DateKey) -> bool {
        self.completions.toggle(key)
    }

    pub fn replace_completions(&mut self, completions: CompletionStore) {
        self.completions = completions;
    }

    pub fn previous(&mut self) {
        self.reference_date = navigation::previous(self.reference_date, self.view_mode);
    }

    pub fn next(&mut self) {
        self.reference_date = navigation::next(self.reference_date, self.view_mode);
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.reference_date = today;
    }
}

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Mutex<Tracker>>,
}

impl AppState {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }
}
