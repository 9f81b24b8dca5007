// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Integration tests for the authorization pipeline over SQLite stores.
//!
//! Tests cover:
//! - Identity resolution through the users and employees tables
//! - Ownership scoping against customer rows
//! - Office scoping through the managing employee's record
//! - Not-found versus forbidden outcomes over real lookups
//! - Visibility windows for collection reads
//!
//! Key invariant: the engine's decisions over SQLite match its decisions
//! over the in-memory stores; nothing in the database layer widens scope.

use std::sync::Arc;

use chrono::{Duration, Utc};
use lathe_server_authz::{
	Action, AuthzEngine, AuthzError, CredentialError, CredentialVerifier, CustomerNumber,
	DenyReason, EmployeeNumber, IdentityResolver, PermissionMatrix, ResourceKind, Target,
	TokenClaims, VisibilityWindow,
};
use lathe_server_db::testing::{
	create_authz_test_pool, insert_test_account, insert_test_customer, insert_test_employee,
};
use lathe_server_db::{AccountRepository, CustomerRepository, EmployeeRepository};

/// Verifier that treats the raw token as the username.
///
/// These tests exercise store-backed decisions; token cryptography has its
/// own coverage in the authorization crate.
struct StaticVerifier;

impl CredentialVerifier for StaticVerifier {
	fn verify(&self, token: &str) -> Result<TokenClaims, CredentialError> {
		Ok(TokenClaims {
			username: token.to_string(),
			expires_at: Utc::now() + Duration::minutes(5),
		})
	}
}

async fn setup_engine() -> AuthzEngine {
	let pool = create_authz_test_pool().await;

	insert_test_account(&pool, "diane", 1002).await;
	insert_test_account(&pool, "anthony", 1088).await;
	insert_test_account(&pool, "leslie", 1165).await;
	insert_test_employee(&pool, 1002, "1", "President").await;
	insert_test_employee(&pool, 1088, "1", "Leader").await;
	insert_test_employee(&pool, 1165, "1", "Staff").await;
	insert_test_employee(&pool, 1166, "2", "Staff").await;
	insert_test_customer(&pool, 103, 1165).await;
	insert_test_customer(&pool, 112, 1166).await;
	insert_test_customer(&pool, 119, 4242).await;

	let accounts = Arc::new(AccountRepository::new(pool.clone()));
	let employees = Arc::new(EmployeeRepository::new(pool.clone()));
	let customers = Arc::new(CustomerRepository::new(pool));

	let resolver = IdentityResolver::new(Arc::new(StaticVerifier), accounts, employees.clone());
	AuthzEngine::new(
		resolver,
		Arc::new(PermissionMatrix::default()),
		employees,
		customers,
	)
}

#[tokio::test]
async fn staff_reads_their_own_customer() {
	let engine = setup_engine().await;

	let identity = engine
		.authorize(
			Some("leslie"),
			Action::Read,
			Target::Customer(CustomerNumber::new(103)),
		)
		.await
		.unwrap();

	assert_eq!(identity.username, "leslie");
	assert_eq!(identity.employee_number, EmployeeNumber::new(1165));
}

#[tokio::test]
async fn staff_cannot_read_another_reps_customer() {
	let engine = setup_engine().await;

	let err = engine
		.authorize(
			Some("leslie"),
			Action::Read,
			Target::Customer(CustomerNumber::new(112)),
		)
		.await
		.unwrap_err();

	assert!(matches!(
		err,
		AuthzError::Forbidden(DenyReason::NotManagingOwner)
	));
}

#[tokio::test]
async fn leader_updates_customer_whose_rep_shares_their_office() {
	let engine = setup_engine().await;

	let identity = engine
		.authorize(
			Some("anthony"),
			Action::Update,
			Target::Customer(CustomerNumber::new(103)),
		)
		.await
		.unwrap();

	assert_eq!(identity.username, "anthony");
}

#[tokio::test]
async fn leader_cannot_update_customer_from_another_office() {
	let engine = setup_engine().await;

	let err = engine
		.authorize(
			Some("anthony"),
			Action::Update,
			Target::Customer(CustomerNumber::new(112)),
		)
		.await
		.unwrap_err();

	assert!(matches!(
		err,
		AuthzError::Forbidden(DenyReason::OfficeMismatch)
	));
}

#[tokio::test]
async fn leader_is_denied_when_the_managing_employee_row_is_gone() {
	let engine = setup_engine().await;

	let err = engine
		.authorize(
			Some("anthony"),
			Action::Update,
			Target::Customer(CustomerNumber::new(119)),
		)
		.await
		.unwrap_err();

	assert!(matches!(
		err,
		AuthzError::Forbidden(DenyReason::ManagingEmployeeNotFound)
	));
}

#[tokio::test]
async fn missing_customer_row_is_not_found() {
	let engine = setup_engine().await;

	let err = engine
		.authorize(
			Some("diane"),
			Action::Read,
			Target::Customer(CustomerNumber::new(999)),
		)
		.await
		.unwrap_err();

	assert!(matches!(err, AuthzError::NotFound));
}

#[tokio::test]
async fn unknown_login_is_unauthenticated() {
	let engine = setup_engine().await;

	let err = engine
		.authorize(
			Some("ghost"),
			Action::Read,
			Target::Customer(CustomerNumber::new(103)),
		)
		.await
		.unwrap_err();

	assert!(matches!(err, AuthzError::Unauthenticated(_)));
}

#[tokio::test]
async fn president_can_delete_any_employee_record() {
	let engine = setup_engine().await;

	let identity = engine
		.authorize(
			Some("diane"),
			Action::Delete,
			Target::Employee(EmployeeNumber::new(1166)),
		)
		.await
		.unwrap();

	assert_eq!(identity.username, "diane");
}

#[tokio::test]
async fn customer_listing_windows_follow_the_tier() {
	let engine = setup_engine().await;

	let (_, window) = engine
		.authorize_list(Some("leslie"), ResourceKind::Customer)
		.await
		.unwrap();
	assert_eq!(window, VisibilityWindow::ManagedBy(EmployeeNumber::new(1165)));

	let (_, window) = engine
		.authorize_list(Some("anthony"), ResourceKind::Customer)
		.await
		.unwrap();
	assert!(matches!(window, VisibilityWindow::Office(_)));

	let (_, window) = engine
		.authorize_list(Some("diane"), ResourceKind::Customer)
		.await
		.unwrap();
	assert_eq!(window, VisibilityWindow::All);
}
