// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory store implementations.
//!
//! These back the engine in tests and in storeless deployments (demos,
//! local tooling). Each store is a locked map plus two testing affordances:
//!
//! - an outage switch, so fault paths can be exercised deterministically
//! - a lookup counter, so tests can assert which stores a decision touched
//!
//! Lock poisoning is recovered rather than propagated; the maps hold plain
//! data and a panicking writer cannot leave them logically inconsistent.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use lathe_authz_core::{CustomerNumber, EmployeeNumber};

use crate::error::StoreError;
use crate::store::{
	Account, AccountStore, CustomerOwner, CustomerStore, EmployeeRecord, EmployeeStore,
};

macro_rules! memory_store_common {
	() => {
		/// Make every subsequent lookup fail with [`StoreError::Unavailable`].
		pub fn set_outage(&self, reason: &str) {
			*self.outage.write().unwrap_or_else(|e| e.into_inner()) = Some(reason.to_string());
		}

		/// Restore normal lookups after [`Self::set_outage`].
		pub fn clear_outage(&self) {
			*self.outage.write().unwrap_or_else(|e| e.into_inner()) = None;
		}

		/// Number of lookups served so far, failed ones included.
		pub fn lookup_count(&self) -> usize {
			self.lookups.load(Ordering::SeqCst)
		}

		fn record_lookup(&self) -> Result<(), StoreError> {
			self.lookups.fetch_add(1, Ordering::SeqCst);
			match &*self.outage.read().unwrap_or_else(|e| e.into_inner()) {
				Some(reason) => Err(StoreError::Unavailable(reason.clone())),
				None => Ok(()),
			}
		}
	};
}

/// In-memory [`AccountStore`] keyed by username.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
	records: RwLock<HashMap<String, Account>>,
	outage: RwLock<Option<String>>,
	lookups: AtomicUsize,
}

impl MemoryAccountStore {
	/// Create an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert an account, replacing any existing one with the same username.
	pub fn insert(&self, account: Account) {
		self.records
			.write()
			.unwrap_or_else(|e| e.into_inner())
			.insert(account.username.clone(), account);
	}

	memory_store_common!();
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
	async fn find_by_username(&self, username: &str) -> Result<Option<Account>, StoreError> {
		self.record_lookup()?;
		Ok(self
			.records
			.read()
			.unwrap_or_else(|e| e.into_inner())
			.get(username)
			.cloned())
	}
}

/// In-memory [`EmployeeStore`] keyed by employee number.
#[derive(Debug, Default)]
pub struct MemoryEmployeeStore {
	records: RwLock<HashMap<EmployeeNumber, EmployeeRecord>>,
	outage: RwLock<Option<String>>,
	lookups: AtomicUsize,
}

impl MemoryEmployeeStore {
	/// Create an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a record, replacing any existing one with the same number.
	pub fn insert(&self, record: EmployeeRecord) {
		self.records
			.write()
			.unwrap_or_else(|e| e.into_inner())
			.insert(record.employee_number, record);
	}

	memory_store_common!();
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
	async fn find_by_number(
		&self,
		employee_number: EmployeeNumber,
	) -> Result<Option<EmployeeRecord>, StoreError> {
		self.record_lookup()?;
		Ok(self
			.records
			.read()
			.unwrap_or_else(|e| e.into_inner())
			.get(&employee_number)
			.cloned())
	}
}

/// In-memory [`CustomerStore`] keyed by customer number.
#[derive(Debug, Default)]
pub struct MemoryCustomerStore {
	records: RwLock<HashMap<CustomerNumber, CustomerOwner>>,
	outage: RwLock<Option<String>>,
	lookups: AtomicUsize,
}

impl MemoryCustomerStore {
	/// Create an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert ownership facts, replacing any existing entry for the customer.
	pub fn insert(&self, owner: CustomerOwner) {
		self.records
			.write()
			.unwrap_or_else(|e| e.into_inner())
			.insert(owner.customer_number, owner);
	}

	memory_store_common!();
}

#[async_trait]
impl CustomerStore for MemoryCustomerStore {
	async fn find_owner(
		&self,
		customer_number: CustomerNumber,
	) -> Result<Option<CustomerOwner>, StoreError> {
		self.record_lookup()?;
		Ok(self
			.records
			.read()
			.unwrap_or_else(|e| e.into_inner())
			.get(&customer_number)
			.cloned())
	}
}
