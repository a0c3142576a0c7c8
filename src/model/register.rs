use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Signup payload forwarded to the panel.
///
/// `email` and `password` default to empty so that a missing field is reported as
/// invalid input rather than a deserialization failure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponseDto {
    pub success: bool,
    pub pterodactyl_id: i64,
    pub message: String,
}
