//! Renderer-agnostic screen model derived from [`ViewState`].

use std::fmt::Write as _;

use shared::domain::{Icon, Person, SortMode};

use crate::view_state::ViewState;

pub const HEADING: &str = "People of Star Wars";
pub const SEARCH_PLACEHOLDER: &str = "Search...";
pub const NO_MATCHES_TITLE: &str = "We couldn't find the droids you were looking for";
pub const NO_MATCHES_HINT: &str = "Please try a different search query";
pub const PREVIOUS_LABEL: &str = "Previous Page";
pub const NEXT_LABEL: &str = "Next Page";
pub const FAILED_TITLE: &str = "The directory could not be loaded";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonCard<'a> {
    pub name: &'a str,
    pub height: &'a str,
    pub mass: &'a str,
    pub gender: &'a str,
    pub icons: Vec<Icon>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub show_previous: bool,
    pub show_next: bool,
    pub upper: i64,
    pub total: usize,
}

impl Pager {
    pub fn position_label(&self) -> String {
        format!("{} of {}", self.upper, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen<'a> {
    Loading,
    Failed {
        message: &'a str,
    },
    Directory {
        filter: &'a str,
        sort: SortMode,
        cards: Vec<PersonCard<'a>>,
        pager: Pager,
    },
}

impl Screen<'_> {
    /// True when the directory is shown but nothing matches.
    pub fn is_empty(&self) -> bool {
        matches!(self, Screen::Directory { cards, .. } if cards.is_empty())
    }
}

/// Derive the screen for `state`.
///
/// `failure` is only consulted while loading; pass `None` to keep a failed
/// load on the loading screen.
pub fn screen<'a>(state: &'a ViewState, failure: Option<&'a str>) -> Screen<'a> {
    if state.is_loading() {
        return match failure {
            Some(message) => Screen::Failed { message },
            None => Screen::Loading,
        };
    }

    let refs = state.refs();
    let cards = state
        .visible()
        .into_iter()
        .map(|person| card(person, person.classify(refs).icons()))
        .collect();
    let (upper, total) = state.position();

    Screen::Directory {
        filter: state.filter(),
        sort: state.sort(),
        cards,
        pager: Pager {
            show_previous: state.has_previous(),
            show_next: state.has_next(),
            upper,
            total,
        },
    }
}

fn card(person: &Person, icons: Vec<Icon>) -> PersonCard<'_> {
    PersonCard {
        name: &person.name,
        height: &person.height,
        mass: &person.mass,
        gender: &person.gender,
        icons,
    }
}

pub fn icon_tag(icon: Icon) -> &'static str {
    match icon {
        Icon::Human => "[human]",
        Icon::Droid => "[droid]",
        Icon::Unknown => "[?]",
    }
}

/// Plain-text rendering used by the CLI.
pub fn render_text(screen: &Screen<'_>) -> String {
    let empty = screen.is_empty();
    let mut out = String::new();
    match screen {
        Screen::Loading => out.push_str("Loading...\n"),
        Screen::Failed { message } => {
            let _ = writeln!(out, "{FAILED_TITLE}");
            let _ = writeln!(out, "{message}");
        }
        Screen::Directory {
            filter,
            sort,
            cards,
            pager,
        } => {
            let _ = writeln!(out, "{HEADING}");
            let search = if filter.is_empty() {
                SEARCH_PLACEHOLDER.to_string()
            } else {
                format!("\"{filter}\"")
            };
            let _ = writeln!(out, "Search: {search}  |  {}", sort.label());
            out.push('\n');

            if empty {
                let _ = writeln!(out, "{NO_MATCHES_TITLE}");
                let _ = writeln!(out, "{NO_MATCHES_HINT}");
                out.push('\n');
            }

            for card in cards {
                let tags: Vec<&str> = card.icons.iter().map(|icon| icon_tag(*icon)).collect();
                let _ = writeln!(out, "{} {}", tags.join(""), card.name);
                let _ = writeln!(
                    out,
                    "    Height: {}  Mass: {}  Gender: {}",
                    card.height, card.mass, card.gender
                );
            }
            out.push('\n');

            let previous = if pager.show_previous {
                format!("< {PREVIOUS_LABEL}")
            } else {
                String::new()
            };
            let next = if pager.show_next {
                format!("{NEXT_LABEL} >")
            } else {
                String::new()
            };
            let _ = writeln!(
                out,
                "{previous} | {} | {next}",
                pager.position_label()
            );
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/presentation_tests.rs"]
mod tests;
