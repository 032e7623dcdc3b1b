//! Reusable UI components for server-side rendering
//!
//! Components are plain functions from data to HTML strings. None of them
//! own state; everything they show is passed in.

pub mod layout;
pub mod movie_card;
pub mod results;
pub mod search_box;
pub mod spinner;

/// Where poster images come from.
#[derive(Debug, Clone, Copy)]
pub struct PosterSource<'a> {
    /// Prefix joined with each movie's poster path
    pub image_base_url: &'a str,
    /// Image used when a movie has no poster
    pub placeholder: &'a str,
}

/// Escapes text for use in HTML content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Amélie"), "Amélie");
    }
}
