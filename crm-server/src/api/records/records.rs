//! Customer record REST API handlers.
//!
//! Listing is public; single-record retrieval, add, update and delete all
//! require a live session. Authorization and field validation run before
//! any persistence write, so a rejected request leaves no partial state.

use crate::api::validate;
use crate::{
    ApiError, ApiResult, AppState, CreateRecordRequest, DeleteResponse, RecordDto,
    RecordListResponse, RecordResponse, SessionIdentity, UpdateRecordRequest,
};

use crm_core::Customer;
use crm_core::validation::normalize_email;
use crm_db::CustomerRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use error_location::ErrorLocation;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/records
///
/// List all customer records, unpaginated. No session required; the
/// listing backs the public home view.
pub async fn list_records(State(state): State<AppState>) -> ApiResult<Json<RecordListResponse>> {
    let repo = CustomerRepository::new(state.pool.clone());
    let customers = repo.find_all().await?;

    Ok(Json(RecordListResponse {
        records: customers.into_iter().map(RecordDto::from).collect(),
    }))
}

/// GET /api/v1/records/{id}
///
/// Get a single customer record by ID. Requires a session.
pub async fn get_record(
    State(state): State<AppState>,
    SessionIdentity(_viewer): SessionIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<RecordResponse>> {
    let record_id = Uuid::parse_str(&id)?;

    let repo = CustomerRepository::new(state.pool.clone());
    let customer = repo
        .find_by_id(record_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Record {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(RecordResponse {
        record: customer.into(),
    }))
}

/// POST /api/v1/records
///
/// Add a customer record without credentials. Requires a session.
pub async fn create_record(
    State(state): State<AppState>,
    SessionIdentity(creator): SessionIdentity,
    Json(req): Json<CreateRecordRequest>,
) -> ApiResult<Json<RecordResponse>> {
    // 1. Normalize and validate fields
    let email = normalize_email(&req.email);
    validate::ensure_valid_email(&email)?;
    validate::ensure_nonempty("first_name", &req.first_name)?;
    validate::ensure_nonempty("last_name", &req.last_name)?;
    validate::ensure_valid_phone("phone_number", &req.phone_number)?;

    // 2. Uniqueness probes before any write
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

    // 3. Build and persist. No password hash: this record cannot sign in.
    let mut customer = Customer::new(email, req.first_name, req.last_name);
    customer.phone_number = Some(req.phone_number);
    customer.address = Some(req.address);
    customer.city = Some(req.city);
    customer.state = Some(req.state);
    customer.zipcode = Some(req.zipcode);
    repo.create(&customer).await?;

    log::info!("Customer {} added record {}", creator, customer.id);

    Ok(Json(RecordResponse {
        record: customer.into(),
    }))
}

/// PUT /api/v1/records/{id}
///
/// Partially update a customer record. Requires a session. Omitted fields
/// keep their stored values; id and created_at are never touched.
pub async fn update_record(
    State(state): State<AppState>,
    SessionIdentity(editor): SessionIdentity,
    Path(id): Path<String>,
    Json(req): Json<UpdateRecordRequest>,
) -> ApiResult<Json<RecordResponse>> {
    let record_id = Uuid::parse_str(&id)?;

    // 1. Load the current record
    let repo = CustomerRepository::new(state.pool.clone());
    let mut customer = repo
        .find_by_id(record_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Record {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    // 2. Validate the submitted fields against the creation rules,
    //    excluding the record itself from uniqueness comparisons
    if let Some(ref email) = req.email {
        let email = normalize_email(email);
        validate::ensure_valid_email(&email)?;
        if repo.email_exists(&email, Some(record_id)).await? {
            return Err(ApiError::Duplicate {
                message: format!("Email {} is already registered", email),
                field: Some("email".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        customer.email = email;
    }
    if let Some(ref phone) = req.phone_number {
        validate::ensure_valid_phone("phone_number", phone)?;
        if repo.phone_exists(phone, Some(record_id)).await? {
            return Err(ApiError::Duplicate {
                message: "Phone number is already registered".to_string(),
                field: Some("phone_number".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        customer.phone_number = Some(phone.clone());
    }
    if let Some(first_name) = req.first_name {
        validate::ensure_nonempty("first_name", &first_name)?;
        customer.first_name = first_name;
    }
    if let Some(last_name) = req.last_name {
        validate::ensure_nonempty("last_name", &last_name)?;
        customer.last_name = last_name;
    }
    if let Some(address) = req.address {
        customer.address = Some(address);
    }
    if let Some(city) = req.city {
        customer.city = Some(city);
    }
    if let Some(state_field) = req.state {
        customer.state = Some(state_field);
    }
    if let Some(zipcode) = req.zipcode {
        customer.zipcode = Some(zipcode);
    }

    // 3. Persist with a fresh update timestamp. Last write wins: there is
    //    no version counter on customer records.
    customer.updated_at = Utc::now();
    if !repo.update(&customer).await? {
        // Deleted between the read and the write
        return Err(ApiError::NotFound {
            message: format!("Record {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Customer {} updated record {}", editor, record_id);

    Ok(Json(RecordResponse {
        record: customer.into(),
    }))
}

/// DELETE /api/v1/records/{id}
///
/// Hard-delete a customer record. Requires a session. Deleting an unknown
/// or already-deleted id fails with 404 rather than silently succeeding.
pub async fn delete_record(
    State(state): State<AppState>,
    SessionIdentity(editor): SessionIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let record_id = Uuid::parse_str(&id)?;

    let repo = CustomerRepository::new(state.pool.clone());
    if !repo.delete(record_id).await? {
        return Err(ApiError::NotFound {
            message: format!("Record {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Customer {} deleted record {}", editor, record_id);

    Ok(Json(DeleteResponse {
        deleted: true,
        id: record_id.to_string(),
    }))
}
