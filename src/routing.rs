//! Application router configuration for the readings pages and the JSON API.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;

use crate::{
    AppState,
    calculation::{
        create_calculation_endpoint, delete_calculation_endpoint, list_calculations_endpoint,
    },
    endpoints,
    not_found::get_404_not_found,
    readings::{
        calculate_endpoint, delete_calculation_from_table, get_calculations_page,
        get_readings_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_readings_page))
        .route(endpoints::CALCULATE, post(calculate_endpoint))
        .route(endpoints::CALCULATIONS_VIEW, get(get_calculations_page))
        .route(endpoints::CALCULATION_VIEW, delete(delete_calculation_from_table));

    let api_routes = Router::new()
        .route(
            endpoints::CALCULATIONS_API,
            get(list_calculations_endpoint).post(create_calculation_endpoint),
        )
        .route(endpoints::CALCULATION_API, delete(delete_calculation_endpoint))
        .layer(CorsLayer::permissive());

    page_routes
        .merge(api_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}
