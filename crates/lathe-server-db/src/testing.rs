// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use sqlx::sqlite::SqlitePool;

pub async fn create_test_pool() -> SqlitePool {
	SqlitePool::connect(":memory:").await.unwrap()
}

pub async fn create_users_table(pool: &SqlitePool) {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS users (
			user_name TEXT PRIMARY KEY,
			employee_number INTEGER NOT NULL
		)
		"#,
	)
	.execute(pool)
	.await
	.unwrap();
}

pub async fn create_employees_table(pool: &SqlitePool) {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS employees (
			employee_number INTEGER PRIMARY KEY,
			office_code TEXT NOT NULL,
			job_title TEXT NOT NULL
		)
		"#,
	)
	.execute(pool)
	.await
	.unwrap();
}

pub async fn create_customers_table(pool: &SqlitePool) {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS customers (
			customer_number INTEGER PRIMARY KEY,
			sales_rep_employee_number INTEGER NOT NULL
		)
		"#,
	)
	.execute(pool)
	.await
	.unwrap();
}

pub async fn create_authz_test_pool() -> SqlitePool {
	let pool = create_test_pool().await;
	create_users_table(&pool).await;
	create_employees_table(&pool).await;
	create_customers_table(&pool).await;
	pool
}

pub async fn insert_test_account(pool: &SqlitePool, username: &str, employee_number: u32) {
	sqlx::query("INSERT INTO users (user_name, employee_number) VALUES (?, ?)")
		.bind(username)
		.bind(i64::from(employee_number))
		.execute(pool)
		.await
		.unwrap();
}

pub async fn insert_test_employee(
	pool: &SqlitePool,
	employee_number: u32,
	office_code: &str,
	job_title: &str,
) {
	sqlx::query("INSERT INTO employees (employee_number, office_code, job_title) VALUES (?, ?, ?)")
		.bind(i64::from(employee_number))
		.bind(office_code)
		.bind(job_title)
		.execute(pool)
		.await
		.unwrap();
}

pub async fn insert_test_customer(pool: &SqlitePool, customer_number: u32, sales_rep: u32) {
	sqlx::query(
		"INSERT INTO customers (customer_number, sales_rep_employee_number) VALUES (?, ?)",
	)
	.bind(i64::from(customer_number))
	.bind(i64::from(sales_rep))
	.execute(pool)
	.await
	.unwrap();
}
