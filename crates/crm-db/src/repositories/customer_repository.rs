//! Customer repository for CRUD operations on customer records.
//!
//! Uniqueness of email, phone number and activation key is enforced twice:
//! handlers probe with `email_exists`/`phone_exists` before writing so the
//! caller gets a field-specific error, and the schema's UNIQUE constraints
//! backstop races between concurrent writers (surfaced as
//! [`DbError::UniqueViolation`]).

use crate::{DbError, Result as DbErrorResult};

use crm_core::{Customer, Gender, MaritalStatus};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const CUSTOMER_COLUMNS: &str = "id, email, first_name, last_name, password_hash, phone_number, \
     date_of_birth, gender, marital_status, address, city, state, zipcode, \
     next_of_kin_name, next_of_kin_phone, profile_picture, activation_key, \
     confirmed_email, otp_code, is_staff, is_superuser, is_active, \
     bank_info_id, created_at, updated_at";

pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, customer: &Customer) -> DbErrorResult<()> {
        let id = customer.id.to_string();
        let activation_key = customer.activation_key.to_string();
        let date_of_birth = customer.date_of_birth.map(|d| d.to_string());
        let otp_code = customer.otp_code.map(i64::from);
        let bank_info_id = customer.bank_info_id.map(|b| b.to_string());
        let created_at = customer.created_at.timestamp();
        let updated_at = customer.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO customers (
                    id, email, first_name, last_name, password_hash, phone_number,
                    date_of_birth, gender, marital_status, address, city, state, zipcode,
                    next_of_kin_name, next_of_kin_phone, profile_picture, activation_key,
                    confirmed_email, otp_code, is_staff, is_superuser, is_active,
                    bank_info_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&customer.email)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.password_hash)
        .bind(&customer.phone_number)
        .bind(date_of_birth)
        .bind(customer.gender.as_str())
        .bind(customer.marital_status.as_str())
        .bind(&customer.address)
        .bind(&customer.city)
        .bind(&customer.state)
        .bind(&customer.zipcode)
        .bind(&customer.next_of_kin_name)
        .bind(&customer.next_of_kin_phone)
        .bind(&customer.profile_picture)
        .bind(activation_key)
        .bind(customer.confirmed_email)
        .bind(otp_code)
        .bind(customer.is_staff)
        .bind(customer.is_superuser)
        .bind(customer.is_active)
        .bind(bank_info_id)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Customer>> {
        let id_str = id.to_string();

        let row = sqlx::query(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = ?"
        ))
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| customer_from_row(&r)).transpose()
    }

    /// Lookup by login identifier. The caller normalizes the email first.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Customer>> {
        let row = sqlx::query(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| customer_from_row(&r)).transpose()
    }

    /// Every customer record, unpaginated.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Customer>> {
        let rows = sqlx::query(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers ORDER BY last_name, first_name"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(customer_from_row).collect()
    }

    /// Persist every mutable field of an existing customer.
    /// `id`, `activation_key` and `created_at` are never rewritten.
    /// Returns false when the id does not exist.
    pub async fn update(&self, customer: &Customer) -> DbErrorResult<bool> {
        let id = customer.id.to_string();
        let date_of_birth = customer.date_of_birth.map(|d| d.to_string());
        let otp_code = customer.otp_code.map(i64::from);
        let bank_info_id = customer.bank_info_id.map(|b| b.to_string());
        let updated_at = customer.updated_at.timestamp();

        let result = sqlx::query(
            r#"
                UPDATE customers
                SET email = ?, first_name = ?, last_name = ?, password_hash = ?,
                    phone_number = ?, date_of_birth = ?, gender = ?, marital_status = ?,
                    address = ?, city = ?, state = ?, zipcode = ?,
                    next_of_kin_name = ?, next_of_kin_phone = ?, profile_picture = ?,
                    confirmed_email = ?, otp_code = ?, is_staff = ?, is_superuser = ?,
                    is_active = ?, bank_info_id = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&customer.email)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.password_hash)
        .bind(&customer.phone_number)
        .bind(date_of_birth)
        .bind(customer.gender.as_str())
        .bind(customer.marital_status.as_str())
        .bind(&customer.address)
        .bind(&customer.city)
        .bind(&customer.state)
        .bind(&customer.zipcode)
        .bind(&customer.next_of_kin_name)
        .bind(&customer.next_of_kin_phone)
        .bind(&customer.profile_picture)
        .bind(customer.confirmed_email)
        .bind(otp_code)
        .bind(customer.is_staff)
        .bind(customer.is_superuser)
        .bind(customer.is_active)
        .bind(bank_info_id)
        .bind(updated_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Returns false when the id does not exist, so a repeated
    /// delete surfaces as not-found instead of silently succeeding.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let id_str = id.to_string();

        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id_str)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Uniqueness probe for email. `exclude` skips the row being updated
    /// so a record is not compared against itself.
    pub async fn email_exists(&self, email: &str, exclude: Option<Uuid>) -> DbErrorResult<bool> {
        let count: i64 = match exclude {
            Some(id) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM customers WHERE email = ? AND id <> ?")
                    .bind(email)
                    .bind(id.to_string())
                    .fetch_one(&self.pool)
                    .await?
            }
            None => sqlx::query_scalar("SELECT COUNT(*) FROM customers WHERE email = ?")
                .bind(email)
                .fetch_one(&self.pool)
                .await?,
        };

        Ok(count > 0)
    }

    /// Uniqueness probe for phone number, same exclusion rule as email.
    pub async fn phone_exists(&self, phone: &str, exclude: Option<Uuid>) -> DbErrorResult<bool> {
        let count: i64 = match exclude {
            Some(id) => sqlx::query_scalar(
                "SELECT COUNT(*) FROM customers WHERE phone_number = ? AND id <> ?",
            )
            .bind(phone)
            .bind(id.to_string())
            .fetch_one(&self.pool)
            .await?,
            None => sqlx::query_scalar("SELECT COUNT(*) FROM customers WHERE phone_number = ?")
                .bind(phone)
                .fetch_one(&self.pool)
                .await?,
        };

        Ok(count > 0)
    }
}

fn customer_from_row(row: &SqliteRow) -> DbErrorResult<Customer> {
    let id: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id).map_err(|e| DbError::Decode {
        message: format!("Invalid UUID in customer.id: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let activation_key: String = row.try_get("activation_key")?;
    let activation_key = Uuid::parse_str(&activation_key).map_err(|e| DbError::Decode {
        message: format!("Invalid UUID in customer.activation_key: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let date_of_birth: Option<String> = row.try_get("date_of_birth")?;
    let date_of_birth = date_of_birth
        .map(|d| {
            d.parse::<NaiveDate>().map_err(|e| DbError::Decode {
                message: format!("Invalid date in customer.date_of_birth: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()?;

    let gender: String = row.try_get("gender")?;
    let gender = Gender::from_str(&gender).map_err(|e| DbError::Decode {
        message: format!("Invalid value in customer.gender: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let marital_status: String = row.try_get("marital_status")?;
    let marital_status = MaritalStatus::from_str(&marital_status).map_err(|e| DbError::Decode {
        message: format!("Invalid value in customer.marital_status: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let otp_code: Option<i64> = row.try_get("otp_code")?;
    let otp_code = otp_code
        .map(|o| {
            u32::try_from(o).map_err(|_| DbError::Decode {
                message: format!("Out-of-range value in customer.otp_code: {}", o),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()?;

    let bank_info_id: Option<String> = row.try_get("bank_info_id")?;
    let bank_info_id = bank_info_id
        .map(|b| {
            Uuid::parse_str(&b).map_err(|e| DbError::Decode {
                message: format!("Invalid UUID in customer.bank_info_id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()?;

    let created_at: i64 = row.try_get("created_at")?;
    let created_at = DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::Decode {
        message: "Invalid timestamp in customer.created_at".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let updated_at: i64 = row.try_get("updated_at")?;
    let updated_at = DateTime::from_timestamp(updated_at, 0).ok_or_else(|| DbError::Decode {
        message: "Invalid timestamp in customer.updated_at".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(Customer {
        id,
        email: row.try_get("email")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        password_hash: row.try_get("password_hash")?,
        phone_number: row.try_get("phone_number")?,
        date_of_birth,
        gender,
        marital_status,
        address: row.try_get("address")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        zipcode: row.try_get("zipcode")?,
        next_of_kin_name: row.try_get("next_of_kin_name")?,
        next_of_kin_phone: row.try_get("next_of_kin_phone")?,
        profile_picture: row.try_get("profile_picture")?,
        activation_key,
        confirmed_email: row.try_get("confirmed_email")?,
        otp_code,
        is_staff: row.try_get("is_staff")?,
        is_superuser: row.try_get("is_superuser")?,
        is_active: row.try_get("is_active")?,
        bank_info_id,
        created_at,
        updated_at,
    })
}
