//! Sort-order reconciliation against the page URL.
//!
//! Keeps the sort query parameter consistent with the UI-selected value:
//! [`SortOrderSync::initialize_from_url`] seeds the control from the URL on
//! page load, and [`SortOrderSync::apply_selection`] turns a selection change
//! into the next URL. Both are pure with respect to navigation; only
//! [`SortOrderSync::handle_change`] touches the injected [`Navigator`].

mod host;

pub use host::{LocationSource, Navigator};

use crate::config::SyncConfig;
use crate::location::{LocationError, PageLocation};
use crate::query::QueryParams;
use crate::sort::SortOrder;

/// Initial state of the sort control, derived from the URL on page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Active order, or `None` for the default relevance ranking.
    pub active: Option<SortOrder>,
}

impl SelectionState {
    /// Whether the control stays at its default (relevance) position.
    pub fn is_default(&self) -> bool {
        self.active.is_none()
    }
}

/// Reconciles the sort query parameter with the selected sort order.
#[derive(Debug, Clone, Default)]
pub struct SortOrderSync {
    config: SyncConfig,
}

impl SortOrderSync {
    pub fn new(config: SyncConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Reads the initial control selection off the page URL.
    ///
    /// A sort parameter whose value is in the recognized set becomes the
    /// active selection; anything else (absent, sentinel, unknown tag) leaves
    /// the control at its default. Read-only: never navigates.
    pub fn initialize_from_url(&self, current_url: &str) -> Result<SelectionState, LocationError> {
        let location = PageLocation::parse(current_url)?;
        let params = QueryParams::parse(location.query());
        let active = params
            .get(&self.config.sort_param)
            .and_then(SortOrder::from_param_value);
        Ok(SelectionState { active })
    }

    /// Computes the URL the page should move to after a selection change.
    ///
    /// A non-empty, non-sentinel `selected` value is written to the sort
    /// parameter, replacing it in place if present and appending it if new.
    /// The sentinel or an empty selection removes the parameter entirely
    /// (absence, not an empty-string value). Every other parameter passes
    /// through with order and values intact, so applying the same selection
    /// to the returned URL is a no-op.
    pub fn apply_selection(
        &self,
        selected: &str,
        current_url: &str,
    ) -> Result<String, LocationError> {
        let location = PageLocation::parse(current_url)?;
        let mut params = QueryParams::parse(location.query());

        if !selected.is_empty() && selected != self.config.sentinel {
            params.set(&self.config.sort_param, selected);
        } else if params.remove(&self.config.sort_param) {
            tracing::debug!(param = %self.config.sort_param, "sort parameter removed");
        }

        Ok(location.with_query(&params.serialize()))
    }

    /// Typed variant of [`SortOrderSync::apply_selection`]; `None` selects
    /// the relevance default.
    pub fn apply_sort(
        &self,
        sort: Option<SortOrder>,
        current_url: &str,
    ) -> Result<String, LocationError> {
        self.apply_selection(sort.map(|s| s.as_param_value()).unwrap_or(""), current_url)
    }

    /// Event-handler seam: reads the current address from `source`, applies
    /// the selection, and asks `navigator` to go there. Returns the URL it
    /// navigated to. This is the only path that triggers navigation.
    pub fn handle_change<S, N>(
        &self,
        selected: &str,
        source: &S,
        navigator: &mut N,
    ) -> Result<String, LocationError>
    where
        S: LocationSource + ?Sized,
        N: Navigator + ?Sized,
    {
        let current = source.current_url();
        let next = self.apply_selection(selected, &current)?;
        tracing::debug!(%selected, %next, "sort selection applied");
        navigator.navigate_to(&next);
        Ok(next)
    }
}
