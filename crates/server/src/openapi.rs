use utoipa::OpenApi;
use utoipa::ToSchema;

/// Token request. Any other fields are signed along with `email`.
#[derive(ToSchema)]
pub struct ClaimsRequest { pub email: Option<String> }

/// Booking body. Fields beyond `email`/`status` are stored as sent.
#[derive(ToSchema)]
pub struct NewBookingRequest { pub email: String, pub status: Option<String> }

#[derive(ToSchema)]
pub struct StatusUpdateRequest { pub status: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::auth::issue_token,
        crate::routes::services::list,
        crate::routes::services::get,
        crate::routes::bookings::create,
        crate::routes::bookings::list,
        crate::routes::bookings::delete,
        crate::routes::bookings::update_status,
    ),
    components(
        schemas(
            ClaimsRequest,
            NewBookingRequest,
            StatusUpdateRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "services"),
        (name = "bookings")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for p in ["/", "/health", "/jwt", "/services", "/services/{id}", "/bookings", "/booking/{id}"] {
            assert!(paths.contains(&p), "missing {p}");
        }
    }
}
