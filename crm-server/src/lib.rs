pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    auth::{
        auth::{login, logout, register},
        login_request::LoginRequest,
        logout_response::LogoutResponse,
        register_request::RegisterRequest,
        session_response::SessionResponse,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::session_identity::SessionIdentity,
    records::{
        create_record_request::CreateRecordRequest,
        record_dto::RecordDto,
        record_list_response::RecordListResponse,
        record_response::RecordResponse,
        records::{create_record, delete_record, get_record, list_records, update_record},
        update_record_request::UpdateRecordRequest,
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
