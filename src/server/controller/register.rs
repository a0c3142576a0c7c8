use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        register::{RegisterDto, RegisterResponseDto},
    },
    server::{
        error::AppError, model::profile::RegisterParam,
        service::registration::RegistrationService, state::AppState,
    },
};

/// Tag for grouping registration endpoints in OpenAPI documentation
pub static REGISTER_TAG: &str = "register";

/// Register a panel account for a new user.
///
/// Creates the user on the panel first and only then records the signup and links
/// an existing local profile with the same email. If the panel refuses the account
/// nothing is written locally.
///
/// # Arguments
/// - `state` - Application state containing the database connection and panel client
/// - `payload` - Email, password and optional names
///
/// # Returns
/// - `200 OK` - Panel account created, with its panel id
/// - `400 Bad Request` - Email or password missing
/// - `500 Internal Server Error` - Panel refused the account (panel errors in `details`)
#[utoipa::path(
    post,
    path = "/api/register",
    tag = REGISTER_TAG,
    request_body = RegisterDto,
    responses(
        (status = 200, description = "Panel account created", body = RegisterResponseDto),
        (status = 400, description = "Email and password are required", body = ErrorDto),
        (status = 500, description = "Registration failed", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterParam {
        email: payload.email,
        password: payload.password,
        first_name: payload.first_name,
        last_name: payload.last_name,
    };

    let pterodactyl_id = RegistrationService::new(&state.db, state.panel.as_ref())
        .register_and_link(param)
        .await?;

    Ok((
        StatusCode::OK,
        Json(RegisterResponseDto {
            success: true,
            pterodactyl_id,
            message: "User registered successfully".to_string(),
        }),
    ))
}
