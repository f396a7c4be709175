use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Documented author fields; see [`crate::model::book::BookDto`] for why this is
/// description-only.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub name: String,
    pub email: String,
    /// ISO-8601 date, e.g. `1920-01-20`.
    pub birth_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 0)]
    pub birth_year: Option<i64>,
}
