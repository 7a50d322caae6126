#![allow(dead_code)]

use egui_kittest::Harness;
use holocron_ui::HolocronApp;
use holocron_ui::state::State;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, HolocronApp>,
}

impl<'a> TestCtx<'a> {
    /// App pointed at a mock SWAPI serving two pages of people.
    pub async fn new_app() -> Self {
        let mock_server = MockServer::start().await;
        mount_people(&mock_server).await;
        Self::with_server(mock_server)
    }

    /// App pointed at a mock SWAPI whose people endpoint answers `status_code`.
    pub async fn new_app_with_status(status_code: u16) -> Self {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/people"))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&mock_server)
            .await;
        Self::with_server(mock_server)
    }

    fn with_server(mock_server: MockServer) -> Self {
        let app = HolocronApp::new(State::test(mock_server.uri()));
        let harness = Harness::builder()
            .with_size(egui::vec2(2600.0, 900.0))
            .build_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, HolocronApp> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, HolocronApp> {
        &self.harness
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Wait for every dispatched command, then render twice so the row model catches up.
    pub async fn settle(&mut self) {
        self.harness.state_mut().state_mut().ctx.settle().await;
        self.harness.step();
        self.harness.step();
    }
}

fn person(server: &MockServer, id: u32, name: &str, mass: &str, planet: u32) -> serde_json::Value {
    let base = server.uri();
    json!({
        "name": name,
        "height": "180",
        "mass": mass,
        "hair_color": "brown",
        "skin_color": "fair",
        "eye_color": "brown",
        "birth_year": "29BBY",
        "gender": "male",
        "homeworld": format!("{base}/api/planets/{planet}/"),
        "films": [format!("{base}/api/films/1/")],
        "species": [],
        "vehicles": [],
        "starships": [],
        "created": "2014-12-10T15:59:50.509000Z",
        "edited": "2014-12-20T21:17:50.323000Z",
        "url": format!("{base}/api/people/{id}/"),
    })
}

async fn mount_people(server: &MockServer) {
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/api/people"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "next": format!("{base}/api/people/?page=2"),
            "previous": null,
            "results": [
                person(server, 1, "Luke Skywalker", "77", 1),
                person(server, 14, "Han Solo", "80", 22),
            ],
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/people/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "next": null,
            "previous": format!("{base}/api/people/?page=1"),
            "results": [person(server, 16, "Jabba Desilijic Tiure", "1,358", 24)],
        })))
        .mount(server)
        .await;

    for (id, name) in [(1, "Tatooine"), (22, "Corellia"), (24, "Nal Hutta")] {
        Mock::given(method("GET"))
            .and(path(format!("/api/planets/{id}/")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": name })))
            .mount(server)
            .await;
    }
}
