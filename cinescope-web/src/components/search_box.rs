//! Search box bound to the raw search text.

use uuid::Uuid;

use super::escape_html;

/// Renders the search box showing `search_text` for one page's session.
///
/// Every `input` event posts the current value straight to the server. No
/// debouncing happens here; `hx-sync` only makes sure the newest keystroke
/// wins if posts overlap.
pub fn search_box(search_text: &str, session: Uuid) -> String {
    let value = escape_html(search_text);

    format!(
        r#"<form class="search max-w-2xl mx-auto mb-10" onsubmit="return false">
            <label class="flex items-center gap-3 w-full px-4 py-3 bg-gray-800 border border-gray-700 rounded-lg focus-within:ring-2 focus-within:ring-cinescope-500">
                <span aria-hidden="true">🔍</span>
                <input type="search" name="query" value="{value}"
                       placeholder="Search through thousands of movies"
                       autocomplete="off" autofocus
                       class="flex-1 bg-transparent text-white placeholder-gray-400 focus:outline-none"
                       hx-post="/htmx/search" hx-trigger="input" hx-swap="none" hx-sync="this:replace"
                       hx-vals='{{"session": "{session}"}}' />
            </label>
        </form>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_box_posts_every_keystroke() {
        let session = Uuid::new_v4();
        let html = search_box("dune", session);

        assert!(html.contains(r#"value="dune""#));
        assert!(html.contains(&format!(r#"hx-vals='{{"session": "{session}"}}'"#)));
        assert!(html.contains(r#"hx-post="/htmx/search""#));
        assert!(html.contains(r#"hx-trigger="input""#));
        assert!(!html.contains("delay:"));
    }

    #[test]
    fn test_search_box_escapes_value() {
        let html = search_box(r#""><script>"#, Uuid::nil());
        assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
    }
}
