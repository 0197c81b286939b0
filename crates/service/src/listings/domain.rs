use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Wire names owned by the fixed fields; never taken from `details`.
const RESERVED_FIELDS: [&str; 3] = ["_id", "title", "price"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceListing {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub price: f64,
    /// Descriptive fields maintained out-of-band (image, description, ...).
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl ServiceListing {
    pub fn new(id: Uuid, title: impl Into<String>, price: f64) -> Self {
        Self { id, title: title.into(), price, details: Map::new() }
    }
}

impl From<models::service_listing::Model> for ServiceListing {
    fn from(m: models::service_listing::Model) -> Self {
        let mut details = match m.details {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for key in RESERVED_FIELDS {
            details.remove(key);
        }
        Self { id: m.id, title: m.title, price: m.price, details }
    }
}
