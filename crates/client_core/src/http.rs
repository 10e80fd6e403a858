use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use shared::protocol::{PeoplePage, SpeciesPage, SpeciesRecord};
use tracing::debug;
use url::Url;

use crate::{error::NetworkError, DirectoryApi};

#[derive(Debug, Serialize)]
struct PageQuery {
    page: u32,
}

#[derive(Debug, Serialize)]
struct SearchQuery<'a> {
    search: &'a str,
}

/// [`DirectoryApi`] over HTTP against a SWAPI-shaped server.
#[derive(Debug, Clone)]
pub struct HttpDirectoryClient {
    http: Client,
    base: Url,
}

impl HttpDirectoryClient {
    pub fn new(api_base_url: &str) -> Result<Self, NetworkError> {
        Self::with_client(Client::new(), api_base_url)
    }

    pub fn with_client(http: Client, api_base_url: &str) -> Result<Self, NetworkError> {
        let trimmed = api_base_url.trim();
        let normalized = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        };
        let base = Url::parse(&normalized).map_err(|err| NetworkError::InvalidUrl {
            url: api_base_url.to_string(),
            reason: err.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(NetworkError::InvalidUrl {
                url: api_base_url.to_string(),
                reason: "url cannot be used as a base".to_string(),
            });
        }
        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, NetworkError> {
        self.base.join(path).map_err(|err| NetworkError::InvalidUrl {
            url: format!("{}{path}", self.base),
            reason: err.to_string(),
        })
    }

    async fn get_json<T, Q>(&self, url: Url, query: &Q) -> Result<T, NetworkError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url_text = url.to_string();
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| NetworkError::Transport {
                url: url_text.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status {
                url: url_text,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| NetworkError::Transport {
                url: url_text.clone(),
                source,
            })?;
        serde_json::from_slice(&body).map_err(|err| NetworkError::Malformed {
            url: url_text,
            reason: err.to_string(),
        })
    }
}

#[async_trait]
impl DirectoryApi for HttpDirectoryClient {
    async fn fetch_people_page(&self, page: u32) -> Result<PeoplePage, NetworkError> {
        let url = self.endpoint("people/")?;
        debug!(page, "fetching people page");
        self.get_json(url, &PageQuery { page }).await
    }

    async fn search_species(&self, name: &str) -> Result<Vec<SpeciesRecord>, NetworkError> {
        let url = self.endpoint("species/")?;
        debug!(name, "searching species");
        let page: SpeciesPage = self.get_json(url, &SearchQuery { search: name }).await?;
        Ok(page.results)
    }
}

#[cfg(test)]
#[path = "tests/http_tests.rs"]
mod tests;
