use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use super::domain::AuthClaims;
use super::errors::AuthError;

/// HS256 token issuer/verifier bound to one secret and one lifetime.
///
/// # Examples
/// ```
/// use service::auth::TokenService;
/// let tokens = TokenService::new("secret", chrono::Duration::hours(1));
/// let mut payload = serde_json::Map::new();
/// payload.insert("email".into(), "a@x.com".into());
/// let token = tokens.issue(payload).unwrap();
/// let claims = tokens.verify(&token).unwrap();
/// assert_eq!(claims.email(), Some("a@x.com"));
/// ```
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign `payload` as-is, stamped with `iat` = now and `exp` = now + ttl.
    pub fn issue(&self, payload: Map<String, Value>) -> Result<String, AuthError> {
        self.issue_at(payload, Utc::now())
    }

    /// Sign with an explicit issuance instant. Caller-supplied `iat`/`exp`
    /// are overwritten.
    #[instrument(skip(self, payload), fields(email = payload.get("email").and_then(serde_json::Value::as_str).unwrap_or("")))]
    pub fn issue_at(&self, mut payload: Map<String, Value>, issued_at: DateTime<Utc>) -> Result<String, AuthError> {
        let iat = issued_at.timestamp();
        let exp = (issued_at + self.ttl).timestamp();
        payload.insert("iat".into(), Value::from(iat));
        payload.insert("exp".into(), Value::from(exp));
        let token = encode(&JwtHeader::new(Algorithm::HS256), &payload, &self.encoding_key)
            .map_err(|e| AuthError::TokenError(e.to_string()))?;
        debug!(exp, "token_issued");
        Ok(token)
    }

    /// Check signature and expiry (no leeway) and hand back the payload.
    pub fn verify(&self, token: &str) -> Result<AuthClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        // Registered claims other than `exp` are caller payload, not policy.
        validation.validate_aud = false;
        validation.validate_nbf = false;
        validation.set_required_spec_claims(&["exp"]);

        let data = decode::<Map<String, Value>>(token, &self.decoding_key, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        Ok(AuthClaims::new(data.claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("object expected"),
        }
    }

    fn tokens() -> TokenService {
        TokenService::new("test-secret", Duration::hours(1))
    }

    #[test]
    fn verify_returns_the_issued_payload() {
        let p = payload(json!({"email": "a@x.com", "name": "Alice", "nested": {"k": [1, 2]}}));
        let token = tokens().issue(p.clone()).unwrap();
        let claims = tokens().verify(&token).unwrap();
        assert_eq!(claims.payload(), &p);
        assert_eq!(claims.email(), Some("a@x.com"));

        let registered = payload(json!({
            "email": "a@x.com",
            "aud": "car-doctor",
            "iss": "someone",
            "sub": "user-1",
            "nbf": (Utc::now() + Duration::minutes(30)).timestamp()
        }));
        let token = tokens().issue(registered.clone()).unwrap();
        let claims = tokens().verify(&token).unwrap();
        assert_eq!(claims.payload(), &registered);

        let audiences = payload(json!({"email": "a@x.com", "aud": ["a", "b"]}));
        let token = tokens().issue(audiences.clone()).unwrap();
        assert_eq!(tokens().verify(&token).unwrap().payload(), &audiences);
    }

    #[test]
    fn empty_payload_is_accepted() {
        let token = tokens().issue(Map::new()).unwrap();
        let claims = tokens().verify(&token).unwrap();
        assert!(claims.payload().is_empty());
        assert_eq!(claims.email(), None);
    }

    #[test]
    fn caller_supplied_exp_is_overwritten() {
        let p = payload(json!({"email": "a@x.com", "exp": 1}));
        let token = tokens().issue(p).unwrap();
        let claims = tokens().verify(&token).unwrap();
        assert_eq!(claims.email(), Some("a@x.com"));
        assert!(!claims.payload().contains_key("exp"));
    }

    #[test]
    fn expired_token_is_rejected() {
        let issued = Utc::now() - Duration::hours(2);
        let token = tokens().issue_at(payload(json!({"email": "a@x.com"})), issued).unwrap();
        assert!(matches!(tokens().verify(&token), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn token_is_valid_until_ttl_elapses() {
        let issued = Utc::now() - Duration::minutes(59);
        let token = tokens().issue_at(payload(json!({"email": "a@x.com"})), issued).unwrap();
        assert!(tokens().verify(&token).is_ok());
    }

    #[test]
    fn other_secret_is_rejected() {
        let token = TokenService::new("other-secret", Duration::hours(1))
            .issue(payload(json!({"email": "a@x.com"})))
            .unwrap();
        let err = tokens().verify(&token).unwrap_err();
        assert_eq!(err.code(), 1005);
    }

    #[test]
    fn garbage_is_rejected() {
        for raw in ["", "abc", "a.b.c"] {
            assert!(matches!(tokens().verify(raw), Err(AuthError::InvalidToken(_))), "{raw}");
        }
    }

    #[test]
    fn token_without_exp_is_rejected() {
        let token = encode(
            &JwtHeader::new(Algorithm::HS256),
            &json!({"email": "a@x.com"}),
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert!(tokens().verify(&token).is_err());
    }
}
