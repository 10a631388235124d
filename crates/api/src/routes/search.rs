//! Search Form Route

use axum::response::Html;

use crate::pages;

/// Render the search form; no predictor involvement.
pub async fn get_search() -> Html<String> {
    Html(pages::search_page())
}
