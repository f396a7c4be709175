//! Book payload shape.
//!
//! Books are stored schema-less, so this type only describes the documented fields for
//! the OpenAPI output. Handlers work on raw JSON objects and never deserialize into it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub title: String,
    pub author: String,
    /// Price in the store's currency.
    pub price: f64,
    pub genre: String,
    /// ISO-8601 date, e.g. `1965-08-01`.
    pub publish_date: String,
    #[serde(rename = "ISBN")]
    pub isbn: String,
    #[schema(minimum = 1)]
    pub pages: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}
