//! Place detail panel and the loading indicator.
//!
//! The detail request is asynchronous and the user can pick another place
//! before it answers. Responses therefore carry the id they were requested
//! for, and anything not for the currently open place is dropped.

#[cfg(test)]
#[path = "info_test.rs"]
mod info_test;

use crate::place::PlaceId;

/// Text shown while a place's details are on their way.
pub const LOADING_TEXT: &str = "Loading...";

/// What the detail panel shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InfoPanel {
    #[default]
    Closed,
    Loading(PlaceId),
    /// Server-rendered detail HTML for the place.
    Loaded { id: PlaceId, html: String },
    Failed { id: PlaceId, message: String },
}

impl InfoPanel {
    /// Open the panel for `place`, or close it with `None`.
    pub fn open_info(&mut self, place: Option<PlaceId>) {
        *self = match place {
            Some(id) => Self::Loading(id),
            None => Self::Closed,
        };
    }

    /// The place the panel is showing or loading.
    #[must_use]
    pub fn current(&self) -> Option<PlaceId> {
        match self {
            Self::Closed => None,
            Self::Loading(id) | Self::Loaded { id, .. } | Self::Failed { id, .. } => Some(*id),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Details arrived for `id`. Returns whether they were applied.
    pub fn info_loaded(&mut self, id: PlaceId, html: String) -> bool {
        if self.current() != Some(id) {
            tracing::debug!(id, "dropping stale place details");
            return false;
        }
        *self = Self::Loaded { id, html };
        true
    }

    /// The request for `id` failed. Returns whether the failure was applied.
    pub fn info_failed(&mut self, id: PlaceId, message: &str) -> bool {
        if self.current() != Some(id) {
            return false;
        }
        tracing::warn!(id, message, "place details unavailable");
        *self = Self::Failed { id, message: message.to_owned() };
        true
    }

    /// Text or HTML to show in the panel, `None` when closed.
    #[must_use]
    pub fn content(&self) -> Option<String> {
        match self {
            Self::Closed => None,
            Self::Loading(_) => Some(LOADING_TEXT.to_owned()),
            Self::Loaded { html, .. } => Some(html.clone()),
            Self::Failed { message, .. } => Some(format!("Error retrieving info: {message}")),
        }
    }
}

/// State of the loading indicator control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Okay,
    Error,
}

impl LoadState {
    /// Icon class shown for the state.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Loading => "icon-loading-anim",
            Self::Okay => "icon-check2",
            Self::Error => "icon-exclamation-triangle",
        }
    }
}

/// The loading indicator: a state plus an optional hover title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingIndicator {
    state: LoadState,
    title: Option<String>,
}

impl LoadingIndicator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch state. A missing or empty title clears the previous one.
    pub fn set_state(&mut self, state: LoadState, title: Option<&str>) {
        self.state = state;
        self.title = title.filter(|t| !t.is_empty()).map(str::to_owned);
    }

    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}
