//! Directory view state and its transitions.
//!
//! Every transition consumes the state and returns the next one; derived
//! values (`visible`, pager flags) are recomputed on each call.

use std::{cmp::Reverse, sync::Arc};

use shared::domain::{ClassificationRefs, Directory, Person, SortMode};

/// Rows per pagination window.
pub const PAGE_SIZE: i64 = 10;

/// `[lower, upper)` bounds into the display sequence.
///
/// Signed: paging backward on a list shorter than one page drives both
/// bounds below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub lower: i64,
    pub upper: i64,
}

impl Window {
    pub const INITIAL: Window = Window {
        lower: 0,
        upper: PAGE_SIZE,
    };

    pub fn new(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }
}

#[derive(Debug, Clone)]
pub enum ViewAction {
    Loaded(Directory),
    SetFilter(String),
    SetSort(SortMode),
    PageForward,
    PageBackward,
}

#[derive(Debug, Clone)]
pub struct ViewState {
    all: Arc<[Person]>,
    display: Arc<[Person]>,
    refs: ClassificationRefs,
    filter: String,
    sort: SortMode,
    window: Window,
    is_loading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::loading()
    }
}

pub fn reduce(state: ViewState, action: ViewAction) -> ViewState {
    match action {
        ViewAction::Loaded(directory) => state.loaded(directory),
        ViewAction::SetFilter(text) => state.set_filter(&text),
        ViewAction::SetSort(mode) => state.set_sort(mode),
        ViewAction::PageForward => state.page_forward(),
        ViewAction::PageBackward => state.page_backward(),
    }
}

impl ViewState {
    pub fn loading() -> Self {
        let empty: Arc<[Person]> = Arc::from(Vec::new());
        Self {
            display: Arc::clone(&empty),
            all: empty,
            refs: ClassificationRefs::default(),
            filter: String::new(),
            sort: SortMode::None,
            window: Window::INITIAL,
            is_loading: true,
        }
    }

    /// Install the loaded directory. The people keep fetch order as the
    /// original order; an already selected sort mode is applied on top.
    pub fn loaded(self, directory: Directory) -> Self {
        let all: Arc<[Person]> = Arc::from(directory.people);
        let display = ordered(&all, self.sort);
        Self {
            all,
            display,
            refs: directory.refs,
            is_loading: false,
            ..self
        }
    }

    pub fn set_filter(self, text: &str) -> Self {
        Self {
            filter: text.to_lowercase(),
            ..self
        }
    }

    /// Reorder the display sequence. The window is deliberately left where
    /// it was, so the same bounds now cover different people.
    pub fn set_sort(self, mode: SortMode) -> Self {
        let display = ordered(&self.all, mode);
        Self {
            display,
            sort: mode,
            ..self
        }
    }

    pub fn page_forward(self) -> Self {
        let lower = self.window.upper;
        let upper = (self.window.upper + PAGE_SIZE).min(self.display_len());
        Self {
            window: Window::new(lower, upper),
            ..self
        }
    }

    /// Step one page back. A partial last page first snaps `upper` down to
    /// the last multiple of the page size.
    pub fn page_backward(self) -> Self {
        let len = self.display_len();
        let rounded_down = (len / PAGE_SIZE) * PAGE_SIZE;
        let upper = if self.window.upper > rounded_down {
            rounded_down
        } else {
            self.window.upper - PAGE_SIZE
        };
        Self {
            window: Window::new(upper - PAGE_SIZE, upper),
            ..self
        }
    }

    /// People currently on screen: every filter match when filtering,
    /// otherwise the window slice.
    pub fn visible(&self) -> Vec<&Person> {
        if self.is_filtering() {
            return self
                .display
                .iter()
                .filter(|person| person.name_key().contains(&self.filter))
                .collect();
        }

        let (start, end) = slice_bounds(self.display.len(), self.window);
        self.display[start..end].iter().collect()
    }

    /// Computed from the window even while a filter is active.
    pub fn has_previous(&self) -> bool {
        self.window.lower != 0
    }

    /// Computed from the window even while a filter is active.
    pub fn has_next(&self) -> bool {
        self.window.upper != self.display_len()
    }

    /// `(upper, total)` for the "X of Y" indicator.
    pub fn position(&self) -> (i64, usize) {
        (self.window.upper, self.display.len())
    }

    pub fn is_filtering(&self) -> bool {
        !self.filter.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn all(&self) -> &Arc<[Person]> {
        &self.all
    }

    pub fn display(&self) -> &Arc<[Person]> {
        &self.display
    }

    pub fn refs(&self) -> &ClassificationRefs {
        &self.refs
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn window(&self) -> Window {
        self.window
    }

    fn display_len(&self) -> i64 {
        i64::try_from(self.display.len()).unwrap_or(i64::MAX)
    }
}

fn ordered(all: &Arc<[Person]>, mode: SortMode) -> Arc<[Person]> {
    match mode {
        SortMode::None => Arc::clone(all),
        SortMode::Ascending => {
            let mut people = all.to_vec();
            people.sort_by_cached_key(Person::name_key);
            Arc::from(people)
        }
        SortMode::Descending => {
            let mut people = all.to_vec();
            people.sort_by_cached_key(|person| Reverse(person.name_key()));
            Arc::from(people)
        }
    }
}

/// Resolve window bounds the way `Array.prototype.slice` does: negative
/// indexes count from the end, bounds clamp to the length, and an inverted
/// range is empty.
fn slice_bounds(len: usize, window: Window) -> (usize, usize) {
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let resolve = |index: i64| {
        if index < 0 {
            (len + index).max(0)
        } else {
            index.min(len)
        }
    };
    let start = resolve(window.lower);
    let end = resolve(window.upper);
    if end <= start {
        return (0, 0);
    }
    (start as usize, end as usize)
}

#[cfg(test)]
#[path = "tests/view_state_tests.rs"]
mod tests;
