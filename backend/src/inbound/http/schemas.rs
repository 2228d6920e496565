//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of `ToSchema`; these wrappers mirror their wire
//! shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    #[schema(rename = "unauthorized")]
    Unauthorized,
    #[schema(rename = "store_error")]
    StoreError,
    #[schema(rename = "provider_error")]
    ProviderError,
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Always `false`.
    success: bool,
    /// Human-readable message shown to the visitor.
    #[schema(example = "Please provide a valid email address")]
    error: String,
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Structured details, e.g. the failing field.
    details: Option<serde_json::Value>,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::RegistrationForm`].
#[derive(ToSchema)]
#[schema(as = crate::domain::RegistrationForm)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RegistrationFormSchema {
    #[schema(example = "Awa")]
    first_name: String,
    #[schema(example = "Koné")]
    last_name: String,
    #[schema(example = "awa@example.ci")]
    email: String,
    #[schema(example = "+225 07 47 28 66 39")]
    phone: String,
    #[schema(example = "1510")]
    event_id: String,
    #[schema(example = "2020")]
    ticket_class_id: String,
}
