use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::dto::car_dto::{CarCollectionResponse, CarRequest, CarResponse, CARS_PATH};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::{IdPath, ValidatedJson};

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route(CARS_PATH, get(list_cars).post(create_car))
        .route(
            &format!("{}/:id", CARS_PATH),
            get(get_car).put(update_car).delete(delete_car),
        )
}

async fn list_cars(
    State(state): State<AppState>,
) -> Result<Json<CarCollectionResponse>, AppError> {
    let response = state.car_controller.list().await?;
    Ok(Json(response))
}

async fn get_car(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<CarResponse>, AppError> {
    let response = state.car_controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_car(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CarRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.car_controller.create(request).await?;
    let location = CarResponse::resource_path(response.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(response)))
}

async fn update_car(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<CarRequest>,
) -> Result<Json<CarResponse>, AppError> {
    let response = state.car_controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_car(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    state.car_controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
