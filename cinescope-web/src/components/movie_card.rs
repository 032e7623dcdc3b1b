//! Result card for a single movie.

use cinescope_core::MovieSummary;

use super::{PosterSource, escape_html};

/// Renders a movie card: poster, title, rating, language and release year.
pub fn movie_card(movie: &MovieSummary, posters: PosterSource<'_>) -> String {
    let title = escape_html(&movie.title);
    let poster = escape_html(&movie.poster_src(posters.image_base_url, posters.placeholder));
    let rating = movie.rating_label();
    let language = escape_html(movie.language_label());
    let year = escape_html(movie.release_year_label());

    format!(
        r#"<li class="movie-card bg-gray-800 rounded-2xl p-4 shadow-inner" data-movie-id="{id}">
            <img src="{poster}" alt="{title}" loading="lazy" class="rounded-lg w-full aspect-[2/3] object-cover" />
            <div class="mt-4">
                <h3 class="text-white font-bold text-base line-clamp-1">{title}</h3>
                <div class="flex items-center gap-2 mt-2 text-sm text-gray-400">
                    <span class="rating flex items-center gap-1"><span aria-hidden="true">⭐</span><span class="text-white">{rating}</span></span>
                    <span>•</span>
                    <span class="lang uppercase">{language}</span>
                    <span>•</span>
                    <span class="year">{year}</span>
                </div>
            </div>
        </li>"#,
        id = movie.id,
    )
}
