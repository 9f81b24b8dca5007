// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

use crate::error::DbError;

/// Create a SqlitePool over the CRM's SQLite database.
///
/// The database file belongs to the CRM application; this layer only reads
/// it, so a URL pointing at a file that does not exist is an error rather
/// than a prompt to create an empty one. The busy timeout covers the
/// application writing to the same file.
///
/// # Arguments
/// * `database_url` - SQLite connection string (e.g., "sqlite:./lathe.db")
///
/// # Errors
/// Returns `DbError::Internal` if the URL is invalid; connection failures
/// surface as `DbError::Sqlx`.
#[tracing::instrument(skip(database_url))]
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, DbError> {
	let options = SqliteConnectOptions::from_str(database_url)
		.map_err(|e| DbError::Internal(format!("Invalid database URL: {e}")))?
		.journal_mode(SqliteJournalMode::Wal)
		.synchronous(SqliteSynchronous::Normal)
		.busy_timeout(Duration::from_secs(5));

	let pool = SqlitePool::connect_with(options).await?;

	tracing::debug!("database pool created");
	Ok(pool)
}
