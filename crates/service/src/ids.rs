//! Document identifiers.

use uuid::Uuid;

use crate::errors::ServiceError;

/// Parse a path segment into a document id. Anything that is not a UUID is
/// rejected up front instead of reaching the driver.
pub fn parse_id(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw).map_err(|_| ServiceError::InvalidArgument(format!("malformed identifier: {raw:?}")))
}

/// Assign a fresh opaque key.
pub fn new_id() -> Uuid {
    Uuid::new_v4()
}
