//! Recent-lookup history shown beside the weather search.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::net::http::ApiError;
use crate::net::types::HistoryRecord;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryState {
    pub records: Vec<HistoryRecord>,
    pub loading: bool,
}

impl HistoryState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Apply a load result. Failures fall back to the empty view.
    pub fn finish_load(&mut self, result: Result<Vec<HistoryRecord>, ApiError>) {
        self.loading = false;
        match result {
            Ok(records) => self.records = records,
            Err(err) => {
                leptos::logging::warn!("history load failed: {err}");
                self.records.clear();
            }
        }
    }

    /// Whether to show the "no history" placeholder.
    pub fn is_empty_view(&self) -> bool {
        !self.loading && self.records.is_empty()
    }

    /// City to search when the record at `index` is clicked.
    pub fn city_at(&self, index: usize) -> Option<String> {
        self.records.get(index).map(|r| r.city_label().to_owned())
    }
}
