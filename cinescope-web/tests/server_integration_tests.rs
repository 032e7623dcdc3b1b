//! End-to-end tests for the web server.
//!
//! A real listener on an ephemeral port serves the router backed by a
//! scripted provider; requests go through `reqwest` like a browser's would.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use cinescope_core::{CinescopeConfig, MovieSummary};
use cinescope_search::providers::ScriptedProvider;
use cinescope_web::{AppState, serve};
use tokio::net::TcpListener;

/// Running server plus a client pointed at it.
struct ServerFixture {
    base_url: String,
    client: reqwest::Client,
}

impl ServerFixture {
    async fn start(provider: ScriptedProvider) -> Self {
        let mut config = CinescopeConfig::for_testing();
        config.search.debounce_period = Duration::from_millis(20);
        config.web.static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static");

        let state = AppState::new(config, Arc::new(provider));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            let _ = serve(listener, state).await;
        });

        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Loads the search page, returning its HTML and session id.
    async fn open_page(&self) -> (String, String) {
        let html = self
            .client
            .get(self.url("/"))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        let session = session_id(&html);
        (html, session)
    }

    async fn state(&self, session: &str) -> serde_json::Value {
        self.client
            .get(self.url(&format!("/api/search/state?session={session}")))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    async fn type_text(&self, session: &str, text: &str) {
        let response = self
            .client
            .post(self.url("/htmx/search"))
            .form(&[("session", session), ("query", text)])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 204);
    }

    /// Polls the state endpoint until the given query has settled.
    async fn wait_for_settled(&self, session: &str, query: &str) -> serde_json::Value {
        for _ in 0..200 {
            let state = self.state(session).await;
            if state["debounced_text"] == query && state["status"] != "loading" {
                return state;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("query '{query}' never settled");
    }
}

/// Pulls the session id out of the results panel's long-poll URL.
fn session_id(html: &str) -> String {
    let start = html.find("session=").expect("page carries a session") + "session=".len();
    html[start..]
        .chars()
        .take_while(|c| *c != '&')
        .collect()
}

fn heat() -> Vec<MovieSummary> {
    vec![MovieSummary {
        vote_average: Some(7.93),
        release_date: Some("1995-12-15".to_string()),
        ..MovieSummary::new(949, "Heat")
    }]
}

#[tokio::test]
async fn test_search_page_renders_box_and_results_panel() {
    let fixture = ServerFixture::start(
        ScriptedProvider::new().with_response("", Ok(vec![MovieSummary::new(1, "Popular")])),
    )
    .await;

    let response = fixture.client.get(fixture.url("/")).send().await.unwrap();
    assert_eq!(response.status(), 200);

    let html = response.text().await.unwrap();
    assert!(html.contains(r#"hx-post="/htmx/search""#));
    assert!(html.contains(r#"id="results""#));
    assert!(html.contains("Popular Movies"));

    let session = session_id(&html);
    fixture.wait_for_settled(&session, "").await;
    let fragment = fixture
        .client
        .get(fixture.url(&format!("/htmx/results?session={session}")))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(fragment.contains(">Popular</h3>"));
}

#[tokio::test]
async fn test_keystrokes_drive_debounced_search() {
    let fixture =
        ServerFixture::start(ScriptedProvider::new().with_response("heat", Ok(heat()))).await;
    let (_, session) = fixture.open_page().await;
    fixture.wait_for_settled(&session, "").await;

    for text in ["h", "he", "hea", "heat"] {
        fixture.type_text(&session, text).await;
    }

    let state = fixture.wait_for_settled(&session, "heat").await;
    assert_eq!(state["status"], "success");
    assert_eq!(state["search_text"], "heat");
    assert_eq!(state["movies"][0]["title"], "Heat");

    let fragment = fixture
        .client
        .get(fixture.url(&format!("/htmx/results?session={session}")))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(fragment.contains(r#"<span class="text-white">7.9</span>"#));
    assert!(fragment.contains(r#"<span class="year">1995</span>"#));
    assert!(fragment.contains(r#"src="/static/no-movie.svg""#));
}

#[tokio::test]
async fn test_separate_pages_keep_separate_searches() {
    let fixture = ServerFixture::start(
        ScriptedProvider::new()
            .with_response("", Ok(vec![MovieSummary::new(1, "Popular")]))
            .with_response("dune", Ok(vec![MovieSummary::new(438631, "Dune")])),
    )
    .await;

    let (_, alice) = fixture.open_page().await;
    fixture.type_text(&alice, "dune").await;
    fixture.wait_for_settled(&alice, "dune").await;

    let (bob_html, bob) = fixture.open_page().await;
    assert_ne!(alice, bob);
    assert!(!bob_html.contains(r#"value="dune""#));
    assert!(!bob_html.contains(">Dune</h3>"));
    assert!(bob_html.contains("Popular Movies"));

    let bob_state = fixture.wait_for_settled(&bob, "").await;
    assert_eq!(bob_state["search_text"], "");
    assert_eq!(bob_state["movies"][0]["title"], "Popular");

    let alice_state = fixture.state(&alice).await;
    assert_eq!(alice_state["search_text"], "dune");
}

#[tokio::test]
async fn test_unknown_session_triggers_page_reload() {
    let fixture = ServerFixture::start(ScriptedProvider::new()).await;

    let response = fixture
        .client
        .post(fixture.url("/htmx/search"))
        .form(&[
            ("session", "00000000-0000-0000-0000-000000000000"),
            ("query", "late"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 410);
    assert_eq!(response.headers()["hx-refresh"], "true");
}

#[tokio::test]
async fn test_movies_api_and_static_assets() {
    let fixture =
        ServerFixture::start(ScriptedProvider::new().with_response("heat", Ok(heat()))).await;

    let body: serde_json::Value = fixture
        .client
        .get(fixture.url("/api/movies?query=heat"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["results"][0]["id"], 949);

    let poster = fixture
        .client
        .get(fixture.url("/static/no-movie.svg"))
        .send()
        .await
        .unwrap();
    assert_eq!(poster.status(), 200);

    let health: serde_json::Value = fixture
        .client
        .get(fixture.url("/api/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["search_sessions"], 0);
}
