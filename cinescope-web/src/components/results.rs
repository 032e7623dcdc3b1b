//! Results panel: spinner, error, empty state or the grid of cards.

use cinescope_search::{RequestStatus, SearchSnapshot};
use uuid::Uuid;

use super::layout;
use super::movie_card::movie_card;
use super::spinner::spinner;
use super::{PosterSource, escape_html};

/// Renders the results for one snapshot, without the polling wrapper.
pub fn results_content(snapshot: &SearchSnapshot, posters: PosterSource<'_>) -> String {
    let heading = if snapshot.debounced_text.trim().is_empty() {
        "Popular Movies".to_string()
    } else {
        format!("Results for “{}”", escape_html(&snapshot.debounced_text))
    };

    let updated = snapshot
        .settled_at
        .map(|at| format!("Updated {}", at.format("%H:%M:%S UTC")));

    let body = match &snapshot.status {
        RequestStatus::Loading => spinner(),
        RequestStatus::Error { message } => format!(
            r#"<p class="error text-red-500 text-center py-12">{}</p>"#,
            escape_html(message)
        ),
        RequestStatus::Success if snapshot.movies.is_empty() => {
            r#"<p class="empty text-gray-400 text-center py-12">No movies found.</p>"#.to_string()
        }
        RequestStatus::Success => {
            let cards: String = snapshot
                .movies
                .iter()
                .map(|movie| movie_card(movie, posters))
                .collect();
            layout::grid("grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4", &cards)
        }
    };

    layout::section(&heading, updated.as_deref(), &body)
}

/// Renders the results panel wrapped in a long-poll element.
///
/// The wrapper asks for the session's next revision as soon as it is swapped
/// in, so the panel follows the coordinator without a fixed polling interval.
pub fn results_panel(
    snapshot: &SearchSnapshot,
    session: Uuid,
    posters: PosterSource<'_>,
) -> String {
    format!(
        r#"<div id="results" hx-get="/htmx/results?session={session}&since={revision}" hx-trigger="load" hx-swap="outerHTML">
            {content}
        </div>"#,
        revision = snapshot.revision,
        content = results_content(snapshot, posters),
    )
}
