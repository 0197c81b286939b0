use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Status given to bookings created without one.
pub const DEFAULT_STATUS: &str = "pending";

/// Wire names owned by the fixed fields; never taken from `extra`.
const RESERVED_FIELDS: [&str; 3] = ["_id", "email", "status"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub status: String,
    /// Caller-supplied fields persisted opaquely.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /bookings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub email: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

impl NewBooking {
    /// Drop keys that would shadow the fixed fields, a client `_id` included.
    pub fn sanitized(mut self) -> Self {
        strip_reserved(&mut self.extra);
        self
    }

    pub fn into_booking(self, id: Uuid) -> Booking {
        let new = self.sanitized();
        Booking { id, email: new.email, status: new.status, extra: new.extra }
    }
}

/// Body of `PATCH /booking/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: Uuid,
}

impl InsertAck {
    pub fn new(inserted_id: Uuid) -> Self {
        Self { acknowledged: true, inserted_id }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteAck {
    pub fn new(deleted_count: u64) -> Self {
        Self { acknowledged: true, deleted_count }
    }
}

/// `modified_count` is 0 when the status already had the requested value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateAck {
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self { acknowledged: true, matched_count, modified_count }
    }
}

fn strip_reserved(map: &mut Map<String, Value>) {
    for key in RESERVED_FIELDS {
        map.remove(key);
    }
}

impl From<models::booking::Model> for Booking {
    fn from(m: models::booking::Model) -> Self {
        let mut extra = match m.extra {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        strip_reserved(&mut extra);
        Self { id: m.id, email: m.email, status: m.status, extra }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_booking_keeps_extra_fields_and_defaults_status() {
        let new: NewBooking = serde_json::from_value(json!({
            "email": "a@x.com",
            "service": "Oil Change",
            "price": 30,
            "date": "2024-06-01"
        }))
        .unwrap();
        assert_eq!(new.status, DEFAULT_STATUS);
        assert_eq!(new.extra.get("service"), Some(&json!("Oil Change")));
        assert!(!new.extra.contains_key("email"));
    }

    #[test]
    fn new_booking_requires_email() {
        assert!(serde_json::from_value::<NewBooking>(json!({"status": "pending"})).is_err());
    }

    #[test]
    fn client_id_is_discarded() {
        let new: NewBooking = serde_json::from_value(json!({"email": "a@x.com", "_id": "mine"})).unwrap();
        let id = Uuid::new_v4();
        let booking = new.into_booking(id);
        assert_eq!(booking.id, id);
        assert!(booking.extra.is_empty());
    }

    #[test]
    fn booking_serializes_flat_with_underscore_id() {
        let id = Uuid::new_v4();
        let mut extra = Map::new();
        extra.insert("service".into(), json!("Oil Change"));
        let b = Booking { id, email: "a@x.com".into(), status: "pending".into(), extra };
        assert_eq!(
            serde_json::to_value(&b).unwrap(),
            json!({"_id": id, "email": "a@x.com", "status": "pending", "service": "Oil Change"})
        );
    }

    #[test]
    fn acks_use_driver_field_names() {
        let id = Uuid::new_v4();
        assert_eq!(serde_json::to_value(InsertAck::new(id)).unwrap(), json!({"acknowledged": true, "insertedId": id}));
        assert_eq!(serde_json::to_value(DeleteAck::new(0)).unwrap(), json!({"acknowledged": true, "deletedCount": 0}));
        assert_eq!(
            serde_json::to_value(UpdateAck::new(1, 1)).unwrap(),
            json!({"acknowledged": true, "matchedCount": 1, "modifiedCount": 1})
        );
    }
}
