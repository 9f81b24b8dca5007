// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use lathe_authz_core::{EmployeeNumber, OfficeCode};
use lathe_server_authz::{EmployeeRecord, EmployeeStore, StoreError};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use crate::error::DbError;

/// Repository for employee role record lookups.
///
/// Serves both identity resolution (the account's own record) and scope
/// evaluation (the managing employee behind a customer).
#[derive(Clone)]
pub struct EmployeeRepository {
	pool: SqlitePool,
}

impl EmployeeRepository {
	/// Create a new repository with the given pool.
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Look up an employee's role record by employee number.
	///
	/// # Returns
	/// `None` if no employee exists with this number.
	#[tracing::instrument(skip(self), fields(employee_number = %employee_number))]
	pub async fn find_by_number(
		&self,
		employee_number: EmployeeNumber,
	) -> Result<Option<EmployeeRecord>, DbError> {
		let row = sqlx::query(
			r#"
			SELECT employee_number, office_code, job_title
			FROM employees
			WHERE employee_number = ?
			"#,
		)
		.bind(i64::from(employee_number.into_inner()))
		.fetch_optional(&self.pool)
		.await?;

		row.map(|r| row_to_employee(&r)).transpose()
	}
}

fn row_to_employee(row: &SqliteRow) -> Result<EmployeeRecord, DbError> {
	let employee_number: i64 = row.get("employee_number");
	let office_code: String = row.get("office_code");
	let job_title: String = row.get("job_title");

	let employee_number = u32::try_from(employee_number)
		.map_err(|_| DbError::Internal(format!("employee number out of range: {employee_number}")))?;

	Ok(EmployeeRecord {
		employee_number: EmployeeNumber::new(employee_number),
		office_code: OfficeCode::new(office_code),
		job_title,
	})
}

#[async_trait]
impl EmployeeStore for EmployeeRepository {
	async fn find_by_number(
		&self,
		employee_number: EmployeeNumber,
	) -> Result<Option<EmployeeRecord>, StoreError> {
		self.find_by_number(employee_number).await.map_err(Into::into)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{create_employees_table, create_test_pool, insert_test_employee};

	async fn make_repo() -> (EmployeeRepository, SqlitePool) {
		let pool = create_test_pool().await;
		create_employees_table(&pool).await;
		(EmployeeRepository::new(pool.clone()), pool)
	}

	#[tokio::test]
	async fn test_find_employee_by_number() {
		let (repo, pool) = make_repo().await;
		insert_test_employee(&pool, 1165, "1", "Staff").await;

		let record = repo
			.find_by_number(EmployeeNumber::new(1165))
			.await
			.unwrap()
			.unwrap();

		assert_eq!(record.employee_number, EmployeeNumber::new(1165));
		assert_eq!(record.office_code, OfficeCode::new("1"));
		assert_eq!(record.job_title, "Staff");
	}

	#[tokio::test]
	async fn test_missing_employee_is_none() {
		let (repo, _pool) = make_repo().await;

		let record = repo.find_by_number(EmployeeNumber::new(4242)).await.unwrap();

		assert!(record.is_none());
	}

	#[tokio::test]
	async fn test_negative_stored_number_fails_decode() {
		// Rows written outside this crate can hold values the domain
		// types cannot represent; decoding must fail, not wrap around.
		let (_repo, pool) = make_repo().await;
		sqlx::query("INSERT INTO employees (employee_number, office_code, job_title) VALUES (?, ?, ?)")
			.bind(-5_i64)
			.bind("1")
			.bind("Staff")
			.execute(&pool)
			.await
			.unwrap();

		let row = sqlx::query("SELECT employee_number, office_code, job_title FROM employees")
			.fetch_one(&pool)
			.await
			.unwrap();

		let err = row_to_employee(&row).unwrap_err();
		assert!(matches!(err, DbError::Internal(_)));
	}

	#[tokio::test]
	async fn test_trait_impl_round_trips() {
		let (repo, pool) = make_repo().await;
		insert_test_employee(&pool, 1088, "2", "Leader").await;
		let store: &dyn EmployeeStore = &repo;

		let record = store
			.find_by_number(EmployeeNumber::new(1088))
			.await
			.unwrap()
			.unwrap();

		assert_eq!(record.office_code, OfficeCode::new("2"));
	}
}
