//! Reducer-like transitions for the GUI model.

use client_core::{reduce, ViewAction, ViewState};
use shared::domain::SortMode;

use crate::controller::events::{UiError, UiEvent};

/// Input gestures captured while drawing a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    Search(String),
    Sort(SortMode),
    PreviousPage,
    NextPage,
}

impl From<UserIntent> for ViewAction {
    fn from(intent: UserIntent) -> Self {
        match intent {
            UserIntent::Search(text) => ViewAction::SetFilter(text),
            UserIntent::Sort(mode) => ViewAction::SetSort(mode),
            UserIntent::PreviousPage => ViewAction::PageBackward,
            UserIntent::NextPage => ViewAction::PageForward,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppModel {
    view: ViewState,
    load_failure: Option<UiError>,
    surface_load_errors: bool,
}

impl AppModel {
    pub fn new(surface_load_errors: bool) -> Self {
        Self {
            surface_load_errors,
            ..Self::default()
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn load_failure(&self) -> Option<&UiError> {
        self.load_failure.as_ref()
    }

    /// The failure message to put on screen, if failures are surfaced at
    /// all. Otherwise a failed load keeps showing the loading screen.
    pub fn surfaced_failure(&self) -> Option<&str> {
        if !self.surface_load_errors {
            return None;
        }
        self.load_failure.as_ref().map(UiError::message)
    }
}

pub fn apply_ui_event(model: AppModel, event: UiEvent) -> AppModel {
    match event {
        UiEvent::DirectoryLoaded(directory) => AppModel {
            view: reduce(model.view, ViewAction::Loaded(directory)),
            load_failure: None,
            ..model
        },
        UiEvent::LoadFailed(err) => AppModel {
            load_failure: Some(err),
            ..model
        },
    }
}

pub fn apply_intent(model: AppModel, intent: UserIntent) -> AppModel {
    if model.view.is_loading() {
        tracing::debug!(?intent, "ignoring input while loading");
        return model;
    }
    AppModel {
        view: reduce(model.view, intent.into()),
        ..model
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
