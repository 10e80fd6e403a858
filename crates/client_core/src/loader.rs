use futures::future::try_join_all;
use shared::{
    domain::{ClassificationRefs, Directory, Person, SpeciesRef},
    protocol::total_pages,
};
use tracing::{debug, info};

use crate::{config::Settings, error::NetworkError, http::HttpDirectoryClient, DirectoryApi};

pub const HUMAN_SPECIES: &str = "Human";
pub const DROID_SPECIES: &str = "Droid";

/// Build an HTTP client from `settings` and run [`load_all`] against it.
pub async fn load_directory(settings: &Settings) -> Result<Directory, NetworkError> {
    let client = HttpDirectoryClient::new(&settings.api_base_url)?;
    info!(api = %client.base_url(), "loading directory");
    load_all(&client, settings.remote_page_size).await
}

/// Fetch every person and both classification references.
///
/// People paging and the two species lookups run concurrently. Any single
/// failure fails the whole load; nothing partial is returned.
pub async fn load_all<A>(api: &A, page_size: u32) -> Result<Directory, NetworkError>
where
    A: DirectoryApi + ?Sized,
{
    let (people, human, droid) = futures::try_join!(
        load_people(api, page_size),
        first_species(api, HUMAN_SPECIES),
        first_species(api, DROID_SPECIES),
    )?;

    info!(people = people.len(), "directory loaded");
    Ok(Directory {
        people,
        refs: ClassificationRefs { human, droid },
    })
}

/// Fetch page 1, then every remaining page at once.
///
/// Results are concatenated by page number, not by completion order.
pub async fn load_people<A>(api: &A, page_size: u32) -> Result<Vec<Person>, NetworkError>
where
    A: DirectoryApi + ?Sized,
{
    let first = api.fetch_people_page(1).await?;
    let pages = total_pages(first.count, page_size);
    info!(count = first.count, pages, "fetched first people page");

    let rest = try_join_all((2..=pages).map(|page| api.fetch_people_page(page))).await?;

    let mut people = first.results;
    for (offset, page) in rest.into_iter().enumerate() {
        debug!(page = offset + 2, records = page.results.len(), "appending people page");
        people.extend(page.results);
    }
    Ok(people)
}

async fn first_species<A>(api: &A, name: &str) -> Result<SpeciesRef, NetworkError>
where
    A: DirectoryApi + ?Sized,
{
    api.search_species(name)
        .await?
        .into_iter()
        .next()
        .map(|record| record.url)
        .ok_or_else(|| NetworkError::NoSpeciesMatch {
            name: name.to_string(),
        })
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
