// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Identity resolution: bearer credential in, organizational identity out.
//!
//! Resolution chains three lookups:
//!
//! 1. The [`CredentialVerifier`] checks the token offline and yields claims.
//! 2. The [`AccountStore`] maps the claimed username to an account.
//! 3. The [`EmployeeStore`] loads the role record the account points at.
//!
//! Every link must hold. An account whose employee record is missing does
//! not resolve to a partial identity; it fails with
//! [`ResolveError::EmployeeUnknown`], because an identity without an office
//! and tier cannot be scoped and must not be allowed to act.

use std::sync::Arc;

use lathe_authz_core::{Identity, RoleTier};
use thiserror::Error;
use tracing::instrument;

use crate::credential::{CredentialError, CredentialVerifier};
use crate::error::StoreError;
use crate::store::{AccountStore, EmployeeStore};

/// Errors produced while resolving a credential into an identity.
///
/// The first three variants are authentication failures; only
/// [`ResolveError::Store`] reflects a fault in the backing stores.
#[derive(Debug, Error)]
pub enum ResolveError {
	/// The verifier rejected the credential
	#[error("credential rejected: {0}")]
	Credential(#[from] CredentialError),

	/// No account matches the credential's username
	#[error("account record not found")]
	AccountUnknown,

	/// The account points at an employee record that does not exist
	#[error("employee record not found")]
	EmployeeUnknown,

	/// A backing store failed during resolution
	#[error("store error: {0}")]
	Store(#[from] StoreError),
}

/// Resolves bearer credentials into full organizational identities.
#[derive(Clone)]
pub struct IdentityResolver {
	verifier: Arc<dyn CredentialVerifier>,
	accounts: Arc<dyn AccountStore>,
	employees: Arc<dyn EmployeeStore>,
}

impl IdentityResolver {
	/// Create a resolver over the given verifier and stores.
	pub fn new(
		verifier: Arc<dyn CredentialVerifier>,
		accounts: Arc<dyn AccountStore>,
		employees: Arc<dyn EmployeeStore>,
	) -> Self {
		Self {
			verifier,
			accounts,
			employees,
		}
	}

	/// Resolve an optional bearer token into an [`Identity`].
	///
	/// `None` means no credential was presented and resolves to
	/// [`CredentialError::Missing`]. Store lookups run only after the
	/// credential itself has been verified, so unauthenticated requests
	/// never touch the stores.
	#[instrument(level = "debug", skip_all)]
	pub async fn resolve(&self, bearer: Option<&str>) -> Result<Identity, ResolveError> {
		let token = bearer.ok_or(CredentialError::Missing)?;
		let claims = self.verifier.verify(token)?;

		let account = self
			.accounts
			.find_by_username(&claims.username)
			.await?
			.ok_or(ResolveError::AccountUnknown)?;

		let employee = self
			.employees
			.find_by_number(account.employee_number)
			.await?
			.ok_or(ResolveError::EmployeeUnknown)?;

		let tier = RoleTier::from_job_title(&employee.job_title);
		tracing::debug!(
			username = %account.username,
			employee_number = %employee.employee_number,
			office_code = %employee.office_code,
			%tier,
			"resolved identity"
		);

		Ok(Identity::new(
			account.username,
			employee.employee_number,
			employee.office_code,
			tier,
		))
	}
}

impl std::fmt::Debug for IdentityResolver {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("IdentityResolver").finish_non_exhaustive()
	}
}
