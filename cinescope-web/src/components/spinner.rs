//! Loading spinner

/// Renders the loading spinner. Purely visual.
pub fn spinner() -> String {
    r#"<div class="flex justify-center py-12" role="status" aria-label="Loading">
            <div class="spinner w-10 h-10 border-4 border-gray-700 border-t-cinescope-500 rounded-full animate-spin"></div>
        </div>"#
        .to_string()
}
