// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use lathe_authz_core::{CustomerNumber, EmployeeNumber};
use lathe_server_authz::{CustomerOwner, CustomerStore, StoreError};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use crate::error::DbError;

/// Repository for customer ownership lookups.
///
/// Authorization only needs to know who manages a customer; the rest of
/// the customer row never leaves the database here.
#[derive(Clone)]
pub struct CustomerRepository {
	pool: SqlitePool,
}

impl CustomerRepository {
	/// Create a new repository with the given pool.
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Look up the ownership facts for a customer.
	///
	/// # Returns
	/// `None` if no customer exists with this number.
	#[tracing::instrument(skip(self), fields(customer_number = %customer_number))]
	pub async fn find_owner(
		&self,
		customer_number: CustomerNumber,
	) -> Result<Option<CustomerOwner>, DbError> {
		let row = sqlx::query(
			r#"
			SELECT customer_number, sales_rep_employee_number
			FROM customers
			WHERE customer_number = ?
			"#,
		)
		.bind(i64::from(customer_number.into_inner()))
		.fetch_optional(&self.pool)
		.await?;

		row.map(|r| row_to_owner(&r)).transpose()
	}
}

fn row_to_owner(row: &SqliteRow) -> Result<CustomerOwner, DbError> {
	let customer_number: i64 = row.get("customer_number");
	let sales_rep: i64 = row.get("sales_rep_employee_number");

	let customer_number = u32::try_from(customer_number)
		.map_err(|_| DbError::Internal(format!("customer number out of range: {customer_number}")))?;
	let sales_rep = u32::try_from(sales_rep)
		.map_err(|_| DbError::Internal(format!("employee number out of range: {sales_rep}")))?;

	Ok(CustomerOwner {
		customer_number: CustomerNumber::new(customer_number),
		sales_rep: EmployeeNumber::new(sales_rep),
	})
}

#[async_trait]
impl CustomerStore for CustomerRepository {
	async fn find_owner(
		&self,
		customer_number: CustomerNumber,
	) -> Result<Option<CustomerOwner>, StoreError> {
		self.find_owner(customer_number).await.map_err(Into::into)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{create_customers_table, create_test_pool, insert_test_customer};

	async fn make_repo() -> (CustomerRepository, SqlitePool) {
		let pool = create_test_pool().await;
		create_customers_table(&pool).await;
		(CustomerRepository::new(pool.clone()), pool)
	}

	#[tokio::test]
	async fn test_find_owner() {
		let (repo, pool) = make_repo().await;
		insert_test_customer(&pool, 103, 1165).await;

		let owner = repo
			.find_owner(CustomerNumber::new(103))
			.await
			.unwrap()
			.unwrap();

		assert_eq!(owner.customer_number, CustomerNumber::new(103));
		assert_eq!(owner.sales_rep, EmployeeNumber::new(1165));
	}

	#[tokio::test]
	async fn test_missing_customer_is_none() {
		let (repo, _pool) = make_repo().await;

		let owner = repo.find_owner(CustomerNumber::new(999)).await.unwrap();

		assert!(owner.is_none());
	}

	#[tokio::test]
	async fn test_owner_can_reference_a_missing_employee() {
		// Referential integrity is not enforced here; a dangling rep is
		// returned as-is and judged by the authorization layer.
		let (repo, pool) = make_repo().await;
		insert_test_customer(&pool, 119, 9999).await;

		let owner = repo
			.find_owner(CustomerNumber::new(119))
			.await
			.unwrap()
			.unwrap();

		assert_eq!(owner.sales_rep, EmployeeNumber::new(9999));
	}

	#[tokio::test]
	async fn test_trait_impl_maps_db_failures_to_backend() {
		let pool = create_test_pool().await;
		let repo = CustomerRepository::new(pool);
		let store: &dyn CustomerStore = &repo;

		let err = store.find_owner(CustomerNumber::new(103)).await.unwrap_err();

		assert!(matches!(err, StoreError::Backend(_)));
	}
}
