//! Translation of untrusted query parameters into store filters.
//!
//! Nothing here touches the database; repositories consume the resulting
//! filter values.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::auth::AuthClaims;
use crate::errors::ServiceError;

/// Query string of `GET /services`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(rename = "searchText")]
    pub search_text: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceOrder {
    Ascending,
    #[default]
    Descending,
}

impl PriceOrder {
    /// Only the literal `asc` sorts ascending.
    pub fn from_param(sort: Option<&str>) -> Self {
        match sort {
            Some("asc") => PriceOrder::Ascending,
            _ => PriceOrder::Descending,
        }
    }

    pub fn compare(self, a: f64, b: f64) -> Ordering {
        let ord = a.total_cmp(&b);
        match self {
            PriceOrder::Ascending => ord,
            PriceOrder::Descending => ord.reverse(),
        }
    }
}

/// Case-insensitive title substring match plus price ordering.
///
/// `matches_title` folds case with Unicode `to_lowercase`; the SQL path uses
/// Postgres `lower()`, which folds by the database collation. They agree on
/// ASCII titles and may differ on others (a `C` collation leaves `É` alone).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingFilter {
    /// Lowercased needle; `None` matches every title.
    title_needle: Option<String>,
    pub order: PriceOrder,
}

impl ListingFilter {
    pub fn new(search_text: Option<&str>, order: PriceOrder) -> Self {
        let title_needle = search_text.filter(|s| !s.is_empty()).map(str::to_lowercase);
        Self { title_needle, order }
    }

    pub fn title_needle(&self) -> Option<&str> {
        self.title_needle.as_deref()
    }

    pub fn matches_title(&self, title: &str) -> bool {
        match &self.title_needle {
            Some(needle) => title.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }

    /// `LIKE` pattern for the lowercased title, wildcards escaped with `\`.
    pub fn like_pattern(&self) -> Option<String> {
        self.title_needle.as_deref().map(|needle| {
            let mut pattern = String::with_capacity(needle.len() + 2);
            pattern.push('%');
            for ch in needle.chars() {
                if matches!(ch, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(ch);
            }
            pattern.push('%');
            pattern
        })
    }
}

pub fn translate_listing_query(query: &ListingQuery) -> ListingFilter {
    ListingFilter::new(query.search_text.as_deref(), PriceOrder::from_param(query.sort.as_deref()))
}

/// Query string of `GET /bookings`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingQuery {
    pub email: Option<String>,
}

/// Owner restriction on bookings; `email: None` matches all of them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingFilter {
    pub email: Option<String>,
}

impl BookingFilter {
    pub fn matches(&self, email: &str) -> bool {
        self.email.as_deref().map_or(true, |wanted| wanted == email)
    }
}

/// Ownership rule: a requested `email` must equal the token's email exactly.
///
/// An absent `email` is let through unrestricted. That mirrors the deployed
/// behaviour and is a known gap, kept until product decides otherwise.
pub fn translate_booking_query(claims: &AuthClaims, query: &BookingQuery) -> Result<BookingFilter, ServiceError> {
    match query.email.as_deref() {
        Some(requested) if claims.email() != Some(requested) => {
            Err(ServiceError::Forbidden("token email does not match requested email".into()))
        }
        Some(requested) => Ok(BookingFilter { email: Some(requested.to_string()) }),
        None => Ok(BookingFilter::default()),
    }
}
