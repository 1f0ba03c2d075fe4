//! Registration, login and logout handlers.
//!
//! Hashing and strength-checking go through crm-auth; these handlers never
//! touch plaintext comparison or token minting themselves.

use crate::api::validate;
use crate::{
    ApiError, ApiResult, AppState, LoginRequest, LogoutResponse, RegisterRequest, SessionResponse,
};
use crate::api::extractors::session_identity::bearer_token;

use crm_auth::{check_strength, password};
use crm_core::{Customer, Gender, MaritalStatus};
use crm_db::CustomerRepository;

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::State,
    http::HeaderMap,
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/auth/register
///
/// Create a customer with credentials and sign them in.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<SessionResponse>> {
    // 1. Normalize and validate fields
    let email = crm_core::validation::normalize_email(&req.email);
    validate::ensure_valid_email(&email)?;
    validate::ensure_nonempty("first_name", &req.first_name)?;
    validate::ensure_nonempty("last_name", &req.last_name)?;
    validate::ensure_valid_phone("phone_number", &req.phone_number)?;

    let gender = match req.gender.as_deref() {
        Some(value) => Gender::from_str(value)?,
        None => Gender::default(),
    };
    let marital_status = match req.marital_status.as_deref() {
        Some(value) => MaritalStatus::from_str(value)?,
        None => MaritalStatus::default(),
    };

    // 2. Password policy
    if req.password != req.password_confirm {
        return Err(ApiError::PasswordPolicy {
            message: "Password confirmation does not match".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    let email_local_part = email.split('@').next().unwrap_or_default();
    check_strength(
        &req.password,
        &[email_local_part, req.first_name.as_str(), req.last_name.as_str()],
    )?;

    // 3. Uniqueness probes before any write
    let repo = CustomerRepository::new(state.pool.clone());
    if repo.email_exists(&email, None).await? {
        return Err(ApiError::Duplicate {
            message: format!("Email {} is already registered", email),
            field: Some("email".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if repo.phone_exists(&req.phone_number, None).await? {
        return Err(ApiError::Duplicate {
            message: "Phone number is already registered".to_string(),
            field: Some("phone_number".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // 4. Hash the password off the async runtime
    let plaintext = req.password;
    let password_hash = tokio::task::spawn_blocking(move || password::hash(&plaintext))
        .await
        .map_err(|e| ApiError::Internal {
            message: format!("Hashing task failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })??;

    // 5. Build and persist the customer
    let mut customer = Customer::new(email, req.first_name, req.last_name);
    customer.password_hash = Some(password_hash);
    customer.phone_number = Some(req.phone_number);
    customer.date_of_birth = req.date_of_birth;
    customer.gender = gender;
    customer.marital_status = marital_status;
    customer.address = req.address;
    repo.create(&customer).await?;

    // 6. Auto-login after registration
    let token = state.sessions.start_session(customer.id).await;

    log::info!("Registered customer {}", customer.id);

    Ok(Json(SessionResponse {
        token: token.to_string(),
        record: customer.into(),
    }))
}

/// POST /api/v1/auth/login
///
/// Verify credentials and start a session.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<SessionResponse>> {
    // 1. Look up by normalized email
    let email = crm_core::validation::normalize_email(&req.email);
    let repo = CustomerRepository::new(state.pool.clone());
    let customer = repo.find_by_email(&email).await?;

    // 2. Verify against the stored hash. A missing record, a record without
    //    credentials and a wrong password all fail identically.
    let Some(customer) = customer else {
        return Err(invalid_credentials());
    };
    let Some(stored_hash) = customer.password_hash.clone() else {
        return Err(invalid_credentials());
    };

    let plaintext = req.password;
    let verified =
        tokio::task::spawn_blocking(move || password::verify(&plaintext, &stored_hash))
            .await
            .map_err(|e| ApiError::Internal {
                message: format!("Verification task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })??;

    if !verified {
        return Err(invalid_credentials());
    }

    // 3. Start the session
    let token = state.sessions.start_session(customer.id).await;

    log::info!("Customer {} logged in", customer.id);

    Ok(Json(SessionResponse {
        token: token.to_string(),
        record: customer.into(),
    }))
}

/// POST /api/v1/auth/logout
///
/// End the caller's session. Logging out without a live session is a
/// no-op, not an error, so repeated logouts always succeed.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<LogoutResponse>> {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.end_session(&token).await;
        log::debug!("Session ended");
    }

    Ok(Json(LogoutResponse { logged_out: true }))
}

#[track_caller]
fn invalid_credentials() -> ApiError {
    ApiError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    }
}
