//! Results Route

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use std::sync::Arc;
use tracing::error;

use crate::{pages, AppState};
use predictor::VehicleQuery;

/// Handle the form submission: predict a price and render the results
/// page. Any prediction failure is logged and surfaced to the client as a
/// generic server error with no structured message.
pub async fn post_results(
    State(state): State<Arc<AppState>>,
    Form(query): Form<VehicleQuery>,
) -> Response {
    match state.predictor.predict(&query) {
        Ok(price) => Html(pages::results_page(&query, price)).into_response(),
        Err(err) => {
            error!("Prediction failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, Html(pages::error_page())).into_response()
        }
    }
}
