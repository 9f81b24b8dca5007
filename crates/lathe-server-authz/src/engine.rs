// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization engine: one call from raw credential to final outcome.
//!
//! [`AuthzEngine::authorize`] runs the full pipeline for a single request:
//!
//! ```text
//! bearer token
//!     │
//!     ├── resolve identity        → Unauthenticated on any broken link
//!     ├── permission matrix       → Forbidden(RoleNotPermitted)
//!     ├── load target ownership   → NotFound on a missing record
//!     ├── resolve owner's office  → only when the actor's rule compares offices
//!     └── scope evaluation        → Ok(identity) or Forbidden(reason)
//! ```
//!
//! Phases short-circuit in that order, so a request that fails the matrix
//! never loads the target, and an unauthenticated request never touches a
//! store at all. The engine holds no per-request state and caches nothing;
//! every call re-runs the pipeline against the live stores.
//!
//! Collection reads go through [`AuthzEngine::authorize_list`], which skips
//! per-record ownership and instead hands back the [`VisibilityWindow`] the
//! caller must filter by.

use std::sync::Arc;

use lathe_authz_core::{
	scope, visibility_window, Action, CustomerNumber, DenyReason, EmployeeNumber, Identity,
	OwnerRef, PermissionMatrix, ResourceKind, RoleTier, ScopeDecision, VisibilityWindow,
};
use tracing::instrument;

use crate::error::{AuthzError, Result};
use crate::resolver::{IdentityResolver, ResolveError};
use crate::store::{CustomerStore, EmployeeStore};

/// The record (or proposed record) a request acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
	/// An existing employee record.
	Employee(EmployeeNumber),
	/// An existing customer record.
	Customer(CustomerNumber),
	/// An employee creation payload.
	NewEmployee,
	/// A customer creation payload carrying its proposed managing rep.
	NewCustomer { sales_rep: Option<EmployeeNumber> },
}

impl Target {
	/// Resource kind this target belongs to.
	pub fn kind(self) -> ResourceKind {
		match self {
			Target::Employee(_) | Target::NewEmployee => ResourceKind::Employee,
			Target::Customer(_) | Target::NewCustomer { .. } => ResourceKind::Customer,
		}
	}
}

/// Evaluates authorization decisions over the configured stores.
#[derive(Clone)]
pub struct AuthzEngine {
	resolver: IdentityResolver,
	matrix: Arc<PermissionMatrix>,
	employees: Arc<dyn EmployeeStore>,
	customers: Arc<dyn CustomerStore>,
}

impl AuthzEngine {
	/// Create an engine over the given resolver, matrix, and stores.
	pub fn new(
		resolver: IdentityResolver,
		matrix: Arc<PermissionMatrix>,
		employees: Arc<dyn EmployeeStore>,
		customers: Arc<dyn CustomerStore>,
	) -> Self {
		Self {
			resolver,
			matrix,
			employees,
			customers,
		}
	}

	/// Authorize one action against one target.
	///
	/// Returns the resolved [`Identity`] on success so callers can attribute
	/// the action without resolving twice.
	#[instrument(level = "debug", skip(self, bearer), fields(action = %action, kind = %target.kind()))]
	pub async fn authorize(
		&self,
		bearer: Option<&str>,
		action: Action,
		target: Target,
	) -> Result<Identity> {
		let identity = self.resolve(bearer).await?;

		if !self.matrix.allows(identity.tier, target.kind(), action) {
			tracing::debug!(tier = %identity.tier, "matrix denied action for tier");
			return Err(AuthzError::Forbidden(DenyReason::RoleNotPermitted));
		}

		let owner_ref = self.load_owner_ref(target).await?;
		let owner_ref = self.resolve_owner_office(&identity, owner_ref).await?;

		match scope::evaluate(&identity, action, &owner_ref) {
			ScopeDecision::Granted => {
				tracing::debug!(username = %identity.username, "request authorized");
				Ok(identity)
			}
			ScopeDecision::Denied(reason) => {
				tracing::debug!(username = %identity.username, %reason, "scope denied request");
				Err(AuthzError::Forbidden(reason))
			}
		}
	}

	/// Authorize a collection read and return the window to filter it by.
	///
	/// Per-record scope rules do not apply to listings; the caller narrows
	/// the result set to the returned [`VisibilityWindow`] instead.
	#[instrument(level = "debug", skip(self, bearer), fields(kind = %kind))]
	pub async fn authorize_list(
		&self,
		bearer: Option<&str>,
		kind: ResourceKind,
	) -> Result<(Identity, VisibilityWindow)> {
		let identity = self.resolve(bearer).await?;

		if !self.matrix.allows(identity.tier, kind, Action::Read) {
			tracing::debug!(tier = %identity.tier, "matrix denied listing for tier");
			return Err(AuthzError::Forbidden(DenyReason::RoleNotPermitted));
		}

		let window = visibility_window(&identity, kind);
		tracing::debug!(username = %identity.username, window = ?window, "listing authorized");
		Ok((identity, window))
	}

	/// Resolve the credential, splitting store faults from everything else.
	async fn resolve(&self, bearer: Option<&str>) -> Result<Identity> {
		self.resolver.resolve(bearer).await.map_err(|err| match err {
			ResolveError::Store(store_err) => AuthzError::Infrastructure(store_err),
			other => AuthzError::Unauthenticated(other.to_string()),
		})
	}

	/// Load the ownership projection for `target`.
	///
	/// Existing records are fetched from their store; a miss is a
	/// [`AuthzError::NotFound`], never a deny. Creation payloads become
	/// proposals without touching any store.
	async fn load_owner_ref(&self, target: Target) -> Result<OwnerRef> {
		let owner_ref = match target {
			Target::Employee(number) => {
				let record = self
					.employees
					.find_by_number(number)
					.await?
					.ok_or(AuthzError::NotFound)?;
				OwnerRef::employee(number).with_owner_office(record.office_code)
			}
			Target::Customer(number) => {
				let owner = self
					.customers
					.find_owner(number)
					.await?
					.ok_or(AuthzError::NotFound)?;
				OwnerRef::customer(owner.sales_rep)
			}
			Target::NewEmployee => OwnerRef::employee_proposal(),
			Target::NewCustomer { sales_rep } => OwnerRef::customer_proposal(sales_rep),
		};
		Ok(owner_ref)
	}

	/// Resolve the managing employee's office when the actor's rule needs it.
	///
	/// Only leaders compare offices, so only leaders pay for the extra
	/// lookup. A managing employee that cannot be found leaves the office
	/// unresolved; the scope evaluator turns that into an explicit deny. A
	/// store fault propagates as infrastructure, never as a deny.
	async fn resolve_owner_office(
		&self,
		identity: &Identity,
		owner_ref: OwnerRef,
	) -> Result<OwnerRef> {
		if identity.tier != RoleTier::Leader
			|| owner_ref.kind != ResourceKind::Customer
			|| owner_ref.owner_office.is_some()
		{
			return Ok(owner_ref);
		}
		let Some(owner) = owner_ref.owner else {
			return Ok(owner_ref);
		};

		match self.employees.find_by_number(owner).await? {
			Some(record) => Ok(owner_ref.with_owner_office(record.office_code)),
			None => Ok(owner_ref),
		}
	}
}

impl std::fmt::Debug for AuthzEngine {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AuthzEngine").finish_non_exhaustive()
	}
}
