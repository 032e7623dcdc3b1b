//! Search page - the search box above the live results panel

use axum::extract::State;
use axum::response::Html;

use crate::components::{layout, results, search_box};
use crate::server::AppState;

/// Renders the search page over a fresh search session.
///
/// Opening the session starts the popular listing fetch, so the page first
/// shows the loading state and the results panel picks up the outcome.
pub async fn search_page(State(state): State<AppState>) -> Html<String> {
    let (session, handle) = state.sessions.open();
    let snapshot = handle.snapshot();

    let refresh_attrs =
        format!(r#"hx-post="/htmx/refresh" hx-swap="none" hx-vals='{{"session": "{session}"}}'"#);
    let refresh = layout::button("Refresh", "secondary", Some(&refresh_attrs));

    let content = format!(
        r#"{}
        {}
        <div class="flex justify-end mb-4">{}</div>
        {}"#,
        layout::page_header(
            "Find Movies You'll Enjoy Without the Hassle",
            Some("Popular picks until you start typing"),
        ),
        search_box::search_box(&snapshot.search_text, session),
        refresh,
        results::results_panel(&snapshot, session, state.posters()),
    );

    render_page("Search", &content)
}

/// Wraps page content in the base HTML document.
pub fn render_page(title: &str, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{} - Cinescope</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script src="https://unpkg.com/htmx.org@1.9.10"></script>
            <script>
                tailwind.config = {{
                    darkMode: 'class',
                    theme: {{
                        extend: {{
                            colors: {{
                                'cinescope': {{
                                    400: '#d6c7ff',
                                    500: '#ab8bff',
                                    600: '#8f6bf0',
                                    900: '#030014'
                                }}
                            }}
                        }}
                    }}
                }}
            </script>
        </head>
        <body class="bg-cinescope-900 text-white min-h-screen font-sans">
            <main class="max-w-7xl mx-auto px-4 py-10">
                {}
            </main>
        </body>
        </html>"#,
        title, content
    );

    Html(html)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use cinescope_core::CinescopeConfig;
    use cinescope_search::providers::ScriptedProvider;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_each_page_load_mounts_its_own_session() {
        let provider = Arc::new(ScriptedProvider::new());
        let state = AppState::new(CinescopeConfig::for_testing(), provider.clone());

        let Html(first) = search_page(State(state.clone())).await;
        let Html(second) = search_page(State(state.clone())).await;

        assert_eq!(state.sessions.len(), 2);
        assert!(first.contains(r#"value="""#));
        assert!(first.contains("Popular Movies"));
        assert_ne!(first, second);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(provider.calls(), vec!["", ""]);
    }

    #[test]
    fn test_render_page_wraps_content() {
        let Html(html) = render_page("Search", "<p>hello</p>");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Search - Cinescope</title>"));
        assert!(html.contains("htmx.org"));
        assert!(html.contains("<p>hello</p>"));
    }
}
