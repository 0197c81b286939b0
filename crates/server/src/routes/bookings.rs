use axum::{
    extract::{Path, State},
    Extension, Json,
};

use service::auth::AuthClaims;
use service::bookings::{Booking, DeleteAck, InsertAck, NewBooking, StatusUpdate, UpdateAck};
use service::query::BookingQuery;

use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::state::ServerState;

#[utoipa::path(
    post, path = "/bookings", tag = "bookings",
    request_body = crate::openapi::NewBookingRequest,
    responses((status = 200, description = "Insert ack"), (status = 400, description = "Invalid body"))
)]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(new): ApiJson<NewBooking>,
) -> Result<Json<InsertAck>, ApiError> {
    Ok(Json(state.bookings.create(new).await?))
}

#[utoipa::path(
    get, path = "/bookings", tag = "bookings",
    params(("email" = Option<String>, Query, description = "Must equal the token's email when present")),
    responses(
        (status = 200, description = "Bookings"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Email does not match token")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Extension(claims): Extension<AuthClaims>,
    ApiQuery(query): ApiQuery<BookingQuery>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    Ok(Json(state.bookings.list(&claims, &query).await?))
}

#[utoipa::path(
    delete, path = "/booking/{id}", tag = "bookings",
    params(("id" = String, Path, description = "Booking id")),
    responses((status = 200, description = "Delete ack"), (status = 400, description = "Malformed id"))
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, ApiError> {
    Ok(Json(state.bookings.delete(&id).await?))
}

#[utoipa::path(
    patch, path = "/booking/{id}", tag = "bookings",
    params(("id" = String, Path, description = "Booking id")),
    request_body = crate::openapi::StatusUpdateRequest,
    responses((status = 200, description = "Update ack"), (status = 400, description = "Malformed id or body"))
)]
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ApiJson(update): ApiJson<StatusUpdate>,
) -> Result<Json<UpdateAck>, ApiError> {
    Ok(Json(state.bookings.update_status(&id, update).await?))
}
