//! SWAPI client helpers.
//!
//! These perform network IO and are meant to be called from commands. Every helper awaits
//! one request at a time: pages are walked in order and homeworlds are resolved record by
//! record, so at most one request is in flight.

use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::http::Client;
use crate::people::{Homeworld, PeoplePage, Person, RawPerson, SwapiError, normalize_person};

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, SwapiError> {
    let response = Client::get(url)
        .send()
        .await
        .map_err(|source| SwapiError::Http {
            url: url.to_owned(),
            source,
        })?;

    if !response.is_success() {
        return Err(SwapiError::Status {
            url: url.to_owned(),
            status: response.status,
        });
    }

    response.json().map_err(|source| SwapiError::Parse {
        url: url.to_owned(),
        source,
    })
}

/// GET a single page of the people collection.
pub async fn fetch_page(url: &str) -> Result<PeoplePage, SwapiError> {
    fetch_json(url).await
}

/// Walk the `next` links from `start_url` until they run out and concatenate every page.
pub async fn fetch_all_people(start_url: &str) -> Result<Vec<RawPerson>, SwapiError> {
    let mut people = Vec::new();
    let mut next = Some(start_url.to_owned());
    let mut pages = 0_usize;

    while let Some(url) = next {
        let page = fetch_page(&url).await?;
        pages += 1;
        debug!(
            "fetch_all_people: page {pages} ({url}) returned {} people",
            page.results.len()
        );

        next = page.next_page().map(str::to_owned);
        people.extend(page.results);
    }

    info!(
        "fetch_all_people: {} people across {pages} pages",
        people.len()
    );
    Ok(people)
}

/// GET a planet and return its display name.
pub async fn fetch_homeworld_name(url: &str) -> Result<String, SwapiError> {
    let planet: Homeworld = fetch_json(url).await?;
    Ok(planet.name)
}

/// Resolve each person's homeworld, one request per person, and normalize the record.
///
/// Shared homeworlds are fetched again for every person that references them.
pub async fn enrich_people(raw: Vec<RawPerson>) -> Result<Vec<Person>, SwapiError> {
    let mut people = Vec::with_capacity(raw.len());

    for person in raw {
        let homeworld = fetch_homeworld_name(&person.homeworld)
            .await
            .map_err(|source| SwapiError::Homeworld {
                person: person.name.clone(),
                url: person.homeworld.clone(),
                source: Box::new(source),
            })?;
        people.push(normalize_person(person, homeworld));
    }

    Ok(people)
}

/// The whole pipeline: every page, then every homeworld.
pub async fn load_people(start_url: &str) -> Result<Vec<Person>, SwapiError> {
    let raw = fetch_all_people(start_url).await?;
    enrich_people(raw).await
}
