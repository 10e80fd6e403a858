use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use client_core::{
    load_directory, load_settings, reduce, render_text, screen, Settings, ViewAction, ViewState,
};
use shared::domain::{Directory, SortMode};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    None,
    Ascending,
    Descending,
}

impl From<SortArg> for SortMode {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::None => SortMode::None,
            SortArg::Ascending => SortMode::Ascending,
            SortArg::Descending => SortMode::Descending,
        }
    }
}

/// Load the people directory and print one screen of it.
#[derive(Parser, Debug)]
struct Args {
    /// API base URL; overrides directory.toml and the environment.
    #[arg(long)]
    api_url: Option<String>,
    /// Case-insensitive name filter.
    #[arg(long)]
    filter: Option<String>,
    #[arg(long, value_enum, default_value = "none")]
    sort: SortArg,
    /// Page turns forward, applied after sorting.
    #[arg(long, default_value_t = 0)]
    forward: u32,
    /// Page turns backward, applied after the forward turns.
    #[arg(long, default_value_t = 0)]
    backward: u32,
}

impl Args {
    fn actions(&self) -> Vec<ViewAction> {
        let mut actions = vec![ViewAction::SetSort(self.sort.into())];
        actions.extend((0..self.forward).map(|_| ViewAction::PageForward));
        actions.extend((0..self.backward).map(|_| ViewAction::PageBackward));
        if let Some(filter) = &self.filter {
            actions.push(ViewAction::SetFilter(filter.clone()));
        }
        actions
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(api_url) = &args.api_url {
        settings.api_base_url = api_url.clone();
    }

    let directory = fetch_directory(&settings).await?;

    let state = args
        .actions()
        .into_iter()
        .fold(ViewState::loading().loaded(directory), reduce);

    print!("{}", render_text(&screen(&state, None)));
    Ok(())
}

async fn fetch_directory(settings: &Settings) -> Result<Directory> {
    match load_directory(settings).await {
        Ok(directory) => {
            tracing::info!(people = directory.people.len(), "directory loaded");
            Ok(directory)
        }
        Err(err) => {
            tracing::error!(api = %settings.api_base_url, "directory load failed: {err}");
            Err(err)
                .with_context(|| format!("failed to load directory from {}", settings.api_base_url))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::{ClassificationRefs, Directory, Person};

    fn directory(count: usize) -> Directory {
        Directory {
            people: (0..count)
                .map(|i| Person {
                    name: format!("Person {i:03}"),
                    height: "1".to_string(),
                    mass: "1".to_string(),
                    gender: "n/a".to_string(),
                    species: Vec::new(),
                })
                .collect(),
            refs: ClassificationRefs::default(),
        }
    }

    #[test]
    fn parses_flags_into_actions_in_order() {
        let args = Args::parse_from([
            "directory-cli",
            "--sort",
            "descending",
            "--forward",
            "2",
            "--backward",
            "1",
        ]);
        let state = args
            .actions()
            .into_iter()
            .fold(ViewState::loading().loaded(directory(25)), reduce);

        assert_eq!(state.sort(), SortMode::Descending);
        assert_eq!(state.window(), client_core::Window::new(10, 20));
        assert_eq!(state.visible()[0].name, "Person 014");
    }

    #[test]
    fn filter_flag_filters_visible_people() {
        let args = Args::parse_from(["directory-cli", "--filter", "PERSON 00"]);
        let state = args
            .actions()
            .into_iter()
            .fold(ViewState::loading().loaded(directory(25)), reduce);
        assert_eq!(state.visible().len(), 10);
        assert_eq!(state.filter(), "person 00");
    }

    #[tokio::test]
    async fn load_failure_names_the_api_url() {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let settings = Settings {
            api_base_url: "http://127.0.0.1:1/api".to_string(),
            ..Settings::default()
        };

        let err = fetch_directory(&settings).await.expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "failed to load directory from http://127.0.0.1:1/api"
        );
        assert!(err.chain().count() > 1);
    }
}
