use serde::Serialize;

/// Plain-text body returned by `GET /`.
pub const LIVENESS_MESSAGE: &str = "Car Doctor Server is Running";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
