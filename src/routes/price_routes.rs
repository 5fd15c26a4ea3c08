use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

use crate::dto::price_dto::PriceQuery;
use crate::models::price::Price;
use crate::state::PricingState;
use crate::utils::errors::AppError;

pub fn create_price_router() -> Router<PricingState> {
    Router::new().route("/services/price", get(get_price))
}

async fn get_price(
    State(state): State<PricingState>,
    query: Result<Query<PriceQuery>, QueryRejection>,
) -> Result<Json<Price>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let price = state
        .price_controller
        .get_by_vehicle_id(query.vehicle_id)
        .await?;
    Ok(Json(price))
}
