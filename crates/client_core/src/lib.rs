//! Directory client: remote loading, view state, and screen derivation
//! shared by the desktop GUI and the CLI.

use async_trait::async_trait;
use shared::protocol::{PeoplePage, SpeciesRecord};

pub mod config;
pub mod error;
pub mod http;
pub mod loader;
pub mod presentation;
pub mod view_state;

pub use config::{load_settings, Settings};
pub use error::NetworkError;
pub use http::HttpDirectoryClient;
pub use loader::{load_all, load_directory};
pub use presentation::{render_text, screen, Screen};
pub use view_state::{reduce, ViewAction, ViewState, Window, PAGE_SIZE};

/// Read access to a paginated people collection plus species search.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Fetch one 1-based page of the people collection.
    async fn fetch_people_page(&self, page: u32) -> Result<PeoplePage, NetworkError>;
    async fn search_species(&self, name: &str) -> Result<Vec<SpeciesRecord>, NetworkError>;
}
