//! Layout components - headers, cards, grids

/// Renders a page header with title and optional subtitle.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{s}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<header class="text-center mb-10">
            <h1 class="text-4xl font-bold text-white">{title}</h1>
            {subtitle_html}
        </header>"#
    )
}

/// Renders a section with a heading and an optional note beside it.
pub fn section(title: &str, note: Option<&str>, content: &str) -> String {
    let note_html = note
        .map(|n| format!(r#"<span class="text-sm text-gray-500">{n}</span>"#))
        .unwrap_or_default();

    format!(
        r#"<section class="space-y-6">
            <div class="flex items-baseline justify-between">
                <h2 class="text-2xl font-semibold text-white">{title}</h2>
                {note_html}
            </div>
            {content}
        </section>"#
    )
}

/// Renders a grid container for responsive layouts.
///
/// Use Tailwind grid column classes like "grid-cols-2 md:grid-cols-4".
pub fn grid(columns: &str, content: &str) -> String {
    format!(r#"<ul class="grid {columns} gap-6">{content}</ul>"#)
}

/// Renders a button with Tailwind styling.
///
/// Variants: "primary", "secondary"; anything else renders neutral.
pub fn button(text: &str, variant: &str, attributes: Option<&str>) -> String {
    let base_classes = "px-4 py-2 rounded-lg font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-gray-900";

    let variant_classes = match variant {
        "primary" => "bg-cinescope-500 hover:bg-cinescope-600 text-white focus:ring-cinescope-500",
        "secondary" => "bg-gray-700 hover:bg-gray-600 text-white focus:ring-gray-500",
        _ => "bg-gray-600 hover:bg-gray-700 text-white focus:ring-gray-500",
    };

    let attrs = attributes.unwrap_or("");

    format!(r#"<button class="{base_classes} {variant_classes}" {attrs}>{text}</button>"#)
}
