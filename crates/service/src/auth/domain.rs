use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claim names written by the issuer; never part of the caller's payload.
pub const RESERVED_CLAIMS: [&str; 2] = ["iat", "exp"];

/// Payload recovered from a verified token. Lives for one request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthClaims {
    payload: Map<String, Value>,
}

impl AuthClaims {
    pub fn new(mut payload: Map<String, Value>) -> Self {
        for key in RESERVED_CLAIMS {
            payload.remove(key);
        }
        Self { payload }
    }

    /// The self-asserted caller email, if the payload carried a string one.
    pub fn email(&self) -> Option<&str> {
        self.payload.get("email").and_then(Value::as_str)
    }

    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }
}

/// Body of `POST /jwt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
}
