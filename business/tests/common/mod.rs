//! Shared helpers for tests that talk to a mock SWAPI server.

#![allow(dead_code)]

use holocron_business::{
    GridState, LoadPeopleCommand, PeopleCompute, SwapiConfig, VisibleRowsCompute,
};
use holocron_states::StateCtx;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A SWAPI person whose homeworld points at planet `planet_id` on `server`.
pub fn person_json(server: &MockServer, name: &str, planet_id: u32) -> Value {
    let base = server.uri();
    json!({
        "name": name,
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "homeworld": format!("{base}/api/planets/{planet_id}/"),
        "films": [format!("{base}/api/films/1/"), format!("{base}/api/films/2/")],
        "species": [],
        "vehicles": [],
        "starships": [format!("{base}/api/starships/12/")],
        "created": "2014-12-09T13:50:51.644000Z",
        "edited": "2014-12-20T21:17:56.891000Z",
        "url": format!("{base}/api/people/{}/", name.len()),
    })
}

/// Link to page `page` of the people collection, as SWAPI formats it.
pub fn page_url(server: &MockServer, page: u32) -> String {
    format!("{}/api/people/?page={page}", server.uri())
}

/// First page lives at the bare collection URL; later ones at `/api/people/?page=N`.
pub async fn mount_page(server: &MockServer, page: u32, results: Vec<Value>, next: Option<String>) {
    let body = json!({
        "count": results.len(),
        "next": next,
        "previous": null,
        "results": results,
    });

    let mock = if page == 1 {
        Mock::given(method("GET")).and(path("/api/people"))
    } else {
        Mock::given(method("GET"))
            .and(path("/api/people/"))
            .and(query_param("page", page.to_string()))
    };

    mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_planet(server: &MockServer, planet_id: u32, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/planets/{planet_id}/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": name })))
        .mount(server)
        .await;
}

pub fn people_url(server: &MockServer) -> String {
    format!("{}/api/people", server.uri())
}

/// State context wired the way the app wires it, pointed at `server`.
pub fn state_ctx(server: &MockServer) -> StateCtx {
    let mut ctx = StateCtx::new();
    ctx.add_state(SwapiConfig::new(format!("{}/api", server.uri())));
    ctx.add_state(GridState::default());
    ctx.record_compute(PeopleCompute::default());
    ctx.record_compute(VisibleRowsCompute::default());
    ctx.record_command(LoadPeopleCommand);
    ctx
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
