// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use lathe_authz_core::EmployeeNumber;
use lathe_server_authz::{Account, AccountStore, StoreError};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use crate::error::DbError;

/// Repository for login account lookups.
///
/// Accounts are keyed by username; the row links the login to the employee
/// record that carries role and office data.
#[derive(Clone)]
pub struct AccountRepository {
	pool: SqlitePool,
}

impl AccountRepository {
	/// Create a new repository with the given pool.
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Look up a login account by username.
	///
	/// # Returns
	/// `None` if no account exists with this username.
	#[tracing::instrument(skip(self), fields(username = %username))]
	pub async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DbError> {
		let row = sqlx::query(
			r#"
			SELECT user_name, employee_number
			FROM users
			WHERE user_name = ?
			"#,
		)
		.bind(username)
		.fetch_optional(&self.pool)
		.await?;

		row.map(|r| row_to_account(&r)).transpose()
	}
}

fn row_to_account(row: &SqliteRow) -> Result<Account, DbError> {
	let username: String = row.get("user_name");
	let employee_number: i64 = row.get("employee_number");

	let employee_number = u32::try_from(employee_number)
		.map_err(|_| DbError::Internal(format!("employee number out of range: {employee_number}")))?;

	Ok(Account {
		username,
		employee_number: EmployeeNumber::new(employee_number),
	})
}

#[async_trait]
impl AccountStore for AccountRepository {
	async fn find_by_username(&self, username: &str) -> Result<Option<Account>, StoreError> {
		self.find_by_username(username).await.map_err(Into::into)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{create_test_pool, create_users_table, insert_test_account};

	async fn make_repo() -> (AccountRepository, SqlitePool) {
		let pool = create_test_pool().await;
		create_users_table(&pool).await;
		(AccountRepository::new(pool.clone()), pool)
	}

	#[tokio::test]
	async fn test_find_account_by_username() {
		let (repo, pool) = make_repo().await;
		insert_test_account(&pool, "diane", 1002).await;

		let account = repo.find_by_username("diane").await.unwrap().unwrap();

		assert_eq!(account.username, "diane");
		assert_eq!(account.employee_number, EmployeeNumber::new(1002));
	}

	#[tokio::test]
	async fn test_missing_account_is_none() {
		let (repo, _pool) = make_repo().await;

		let account = repo.find_by_username("nobody").await.unwrap();

		assert!(account.is_none());
	}

	#[tokio::test]
	async fn test_trait_impl_maps_db_failures_to_backend() {
		// No users table in this pool, so the query itself fails.
		let pool = create_test_pool().await;
		let repo = AccountRepository::new(pool);
		let store: &dyn AccountStore = &repo;

		let err = store.find_by_username("diane").await.unwrap_err();

		assert!(matches!(err, StoreError::Backend(_)));
	}

	#[tokio::test]
	async fn test_trait_impl_preserves_misses() {
		let (repo, pool) = make_repo().await;
		insert_test_account(&pool, "diane", 1002).await;
		let store: &dyn AccountStore = &repo;

		assert!(store.find_by_username("nobody").await.unwrap().is_none());
		assert!(store.find_by_username("diane").await.unwrap().is_some());
	}
}
