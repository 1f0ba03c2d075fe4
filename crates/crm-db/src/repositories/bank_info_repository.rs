//! BankInfo repository.
//!
//! The `customers.bank_info_id` column carries ON DELETE SET NULL, so
//! removing a BankInfo row detaches it from any referencing customer
//! without touching the customer itself.

use crate::{DbError, Result as DbErrorResult};

use crm_core::BankInfo;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct BankInfoRepository {
    pool: SqlitePool,
}

impl BankInfoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, bank_info: &BankInfo) -> DbErrorResult<()> {
        let id = bank_info.id.to_string();

        sqlx::query(
            r#"
                INSERT INTO bank_info (id, bank_name, account_number, routing_code)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&bank_info.bank_name)
        .bind(&bank_info.account_number)
        .bind(&bank_info.routing_code)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<BankInfo>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            "SELECT id, bank_name, account_number, routing_code FROM bank_info WHERE id = ?",
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| bank_info_from_row(&r)).transpose()
    }

    /// Returns false when the id does not exist.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let id_str = id.to_string();

        let result = sqlx::query("DELETE FROM bank_info WHERE id = ?")
            .bind(id_str)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn bank_info_from_row(row: &SqliteRow) -> DbErrorResult<BankInfo> {
    let id: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id).map_err(|e| DbError::Decode {
        message: format!("Invalid UUID in bank_info.id: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(BankInfo {
        id,
        bank_name: row.try_get("bank_name")?,
        account_number: row.try_get("account_number")?,
        routing_code: row.try_get("routing_code")?,
    })
}
