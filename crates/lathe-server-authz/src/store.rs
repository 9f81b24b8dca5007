// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Store traits the authorization engine reads from.
//!
//! This module provides:
//! - [`Account`], [`EmployeeRecord`], [`CustomerOwner`] - the minimal record
//!   shapes authorization needs
//! - [`AccountStore`], [`EmployeeStore`], [`CustomerStore`] - lookup seams
//!   implemented by the database layer and by the in-memory fixtures
//!
//! Every lookup distinguishes a miss (`Ok(None)`) from a fault
//! (`Err(StoreError)`). The engine relies on that split: a miss becomes a
//! not-found or a deny depending on where it happens, while a fault always
//! surfaces as an infrastructure error.

use async_trait::async_trait;
use lathe_authz_core::{CustomerNumber, EmployeeNumber, OfficeCode};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Login account, keyed by username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
	/// Username the credential was issued to.
	pub username: String,
	/// Employee this account belongs to.
	pub employee_number: EmployeeNumber,
}

/// Organizational role record for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
	/// Employee number, unique across the company.
	pub employee_number: EmployeeNumber,
	/// Office the employee works out of.
	pub office_code: OfficeCode,
	/// Free-form job title; mapped onto a role tier during resolution.
	pub job_title: String,
}

/// Ownership facts for one customer.
///
/// Customers always have a managing sales rep; the rep's own record may
/// still be missing (a dangling reference), which scope evaluation treats
/// as an explicit deny rather than a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerOwner {
	/// Customer number, unique across the company.
	pub customer_number: CustomerNumber,
	/// Employee number of the managing sales rep.
	pub sales_rep: EmployeeNumber,
}

/// Lookup of login accounts by username.
#[async_trait]
pub trait AccountStore: Send + Sync {
	async fn find_by_username(&self, username: &str) -> Result<Option<Account>, StoreError>;
}

/// Lookup of employee role records by employee number.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
	async fn find_by_number(
		&self,
		employee_number: EmployeeNumber,
	) -> Result<Option<EmployeeRecord>, StoreError>;
}

/// Lookup of customer ownership facts by customer number.
#[async_trait]
pub trait CustomerStore: Send + Sync {
	async fn find_owner(
		&self,
		customer_number: CustomerNumber,
	) -> Result<Option<CustomerOwner>, StoreError>;
}
