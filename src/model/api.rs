use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// A single failed validation rule.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FieldErrorDto {
    /// Name of the offending body field.
    pub field: String,
    /// Human readable reason the field was rejected.
    pub message: String,
}

/// Body returned when one or more validation rules fail.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub errors: Vec<FieldErrorDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct InsertedDto {
    #[serde(rename = "insertedId")]
    pub inserted_id: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
