use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use service::listings::ServiceListing;
use service::query::ListingQuery;

use crate::errors::ApiError;
use crate::extract::ApiQuery;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/services", tag = "services",
    params(
        ("searchText" = Option<String>, Query, description = "Case-insensitive title substring"),
        ("sort" = Option<String>, Query, description = "`asc` for ascending price, anything else descending")
    ),
    responses((status = 200, description = "Listings ordered by price"))
)]
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<ListingQuery>,
) -> Result<Json<Vec<ServiceListing>>, ApiError> {
    let listings = state.listings.list(&query).await?;
    info!(count = listings.len(), "list services");
    Ok(Json(listings))
}

/// Unknown ids answer `null`, not 404.
#[utoipa::path(
    get, path = "/services/{id}", tag = "services",
    params(("id" = String, Path, description = "Listing id")),
    responses((status = 200, description = "Listing or null"), (status = 400, description = "Malformed id"))
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Option<ServiceListing>>, ApiError> {
    Ok(Json(state.listings.get(&id).await?))
}
