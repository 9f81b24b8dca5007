// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core type definitions for authorization decisions.
//!
//! This module defines the foundational types used throughout the authorization
//! system:
//!
//! - **ID newtypes**: Type-safe wrappers for business identifiers
//!   ([`EmployeeNumber`], [`CustomerNumber`], [`OfficeCode`]) preventing
//!   accidental mixing
//! - **Role tiers**: The flat role vocabulary derived from job titles
//!   ([`RoleTier`])
//! - **Resource kinds and actions**: What is being accessed ([`ResourceKind`])
//!   and how ([`Action`])
//! - **Identity**: The per-request snapshot of the authenticated actor
//!   ([`Identity`])
//! - **Owner references**: The minimal ownership projection of a target record
//!   ([`OwnerRef`])
//!
//! Numeric ID types implement transparent serde serialization and provide
//! conversion to/from the underlying integer.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ID Newtypes
// =============================================================================

macro_rules! define_number_type {
	($name:ident, $doc:expr) => {
		#[doc = $doc]
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(u32);

		impl $name {
			/// Create a new ID from a raw number.
			pub fn new(number: u32) -> Self {
				Self(number)
			}

			/// Get the inner number.
			pub fn into_inner(self) -> u32 {
				self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, "{}", self.0)
			}
		}

		impl From<u32> for $name {
			fn from(number: u32) -> Self {
				Self(number)
			}
		}

		impl From<$name> for u32 {
			fn from(id: $name) -> Self {
				id.0
			}
		}
	};
}

define_number_type!(EmployeeNumber, "Unique identifier for an employee.");
define_number_type!(CustomerNumber, "Unique identifier for a customer.");

/// Identifier of the office an employee works out of.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfficeCode(String);

impl OfficeCode {
	/// Create a new office code.
	pub fn new(code: impl Into<String>) -> Self {
		Self(code.into())
	}

	/// Get the code as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for OfficeCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<&str> for OfficeCode {
	fn from(code: &str) -> Self {
		Self(code.to_string())
	}
}

impl From<String> for OfficeCode {
	fn from(code: String) -> Self {
		Self(code)
	}
}

// =============================================================================
// Role Tiers
// =============================================================================

/// Flat role vocabulary for authorization decisions.
///
/// Derived from the employee record's job title; see [`RoleTier::from_job_title`].
/// Tiers gate actions through the permission matrix, but the scoping rules are
/// not hierarchical: staff and leaders see disjoint slices of the customer base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleTier {
	/// Company president, unrestricted within the matrix.
	President,
	/// General manager, unrestricted within the matrix.
	Manager,
	/// Office leader; customer access is limited to their office.
	Leader,
	/// Sales staff; customer access is limited to records they manage.
	Staff,
	/// Any job title outside the recognized set. Granted nothing by default.
	Other,
}

impl RoleTier {
	/// Derive a tier from a raw job title.
	///
	/// Matching is case-insensitive and total: a title outside the recognized
	/// set maps to [`RoleTier::Other`], never an error.
	pub fn from_job_title(job_title: &str) -> Self {
		match job_title.trim().to_lowercase().as_str() {
			"president" => RoleTier::President,
			"manager" => RoleTier::Manager,
			"leader" => RoleTier::Leader,
			"staff" => RoleTier::Staff,
			_ => RoleTier::Other,
		}
	}

	/// Returns all role tiers.
	pub fn all() -> &'static [RoleTier] {
		&[
			RoleTier::President,
			RoleTier::Manager,
			RoleTier::Leader,
			RoleTier::Staff,
			RoleTier::Other,
		]
	}

	/// Returns true if this tier ranks at or above the given tier.
	///
	/// Seniority is for reporting only; authorization never substitutes a
	/// senior tier's scoping rules for a junior one's.
	pub fn has_seniority_of(&self, other: &RoleTier) -> bool {
		matches!(
			(self, other),
			(RoleTier::President, _)
				| (
					RoleTier::Manager,
					RoleTier::Manager | RoleTier::Leader | RoleTier::Staff | RoleTier::Other
				)
				| (
					RoleTier::Leader,
					RoleTier::Leader | RoleTier::Staff | RoleTier::Other
				)
				| (RoleTier::Staff, RoleTier::Staff | RoleTier::Other)
				| (RoleTier::Other, RoleTier::Other)
		)
	}
}

impl fmt::Display for RoleTier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RoleTier::President => write!(f, "president"),
			RoleTier::Manager => write!(f, "manager"),
			RoleTier::Leader => write!(f, "leader"),
			RoleTier::Staff => write!(f, "staff"),
			RoleTier::Other => write!(f, "other"),
		}
	}
}

// =============================================================================
// Resource Kinds and Actions
// =============================================================================

/// Kinds of business records protected by the authorization system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
	Employee,
	Customer,
}

impl ResourceKind {
	/// Returns all resource kinds.
	pub fn all() -> &'static [ResourceKind] {
		&[ResourceKind::Employee, ResourceKind::Customer]
	}
}

impl fmt::Display for ResourceKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ResourceKind::Employee => write!(f, "employee"),
			ResourceKind::Customer => write!(f, "customer"),
		}
	}
}

/// Actions that can be performed on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
	Read,
	Create,
	Update,
	Delete,
}

impl Action {
	/// Returns all actions.
	pub fn all() -> &'static [Action] {
		&[Action::Read, Action::Create, Action::Update, Action::Delete]
	}
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Action::Read => write!(f, "read"),
			Action::Create => write!(f, "create"),
			Action::Update => write!(f, "update"),
			Action::Delete => write!(f, "delete"),
		}
	}
}

// =============================================================================
// Identity
// =============================================================================

/// The authenticated actor for a single request.
///
/// Built fresh per request by the identity resolver and dropped with it;
/// never cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
	/// Login name of the account the credential was issued to.
	pub username: String,
	/// The employee the account is linked to.
	pub employee_number: EmployeeNumber,
	/// Office the employee works out of.
	pub office_code: OfficeCode,
	/// Tier derived from the employee's job title.
	pub tier: RoleTier,
}

impl Identity {
	/// Create a new identity snapshot.
	pub fn new(
		username: impl Into<String>,
		employee_number: EmployeeNumber,
		office_code: OfficeCode,
		tier: RoleTier,
	) -> Self {
		Self {
			username: username.into(),
			employee_number,
			office_code,
			tier,
		}
	}

	/// Returns true if this actor is the managing employee for the given owner.
	pub fn manages(&self, owner: EmployeeNumber) -> bool {
		self.employee_number == owner
	}

	/// Returns true if this actor works out of the given office.
	pub fn in_office(&self, office: &OfficeCode) -> bool {
		&self.office_code == office
	}
}

// =============================================================================
// Owner References
// =============================================================================

/// Minimal ownership projection of the record an action targets.
///
/// Scope policies evaluate over this snapshot; all fields are loaded before
/// evaluation and policy code performs no lookups of its own. For a customer
/// the owner is the managing sales employee; for an employee it is the record
/// itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerRef {
	pub kind: ResourceKind,
	/// Managing employee. `None` only for creation payloads that omit one.
	pub owner: Option<EmployeeNumber>,
	/// Office of the managing employee, when it has been resolved.
	pub owner_office: Option<OfficeCode>,
}

impl OwnerRef {
	/// Owner reference for an existing customer record.
	pub fn customer(sales_rep: EmployeeNumber) -> Self {
		Self {
			kind: ResourceKind::Customer,
			owner: Some(sales_rep),
			owner_office: None,
		}
	}

	/// Owner reference for a customer creation payload.
	pub fn customer_proposal(sales_rep: Option<EmployeeNumber>) -> Self {
		Self {
			kind: ResourceKind::Customer,
			owner: sales_rep,
			owner_office: None,
		}
	}

	/// Owner reference for an existing employee record.
	pub fn employee(employee_number: EmployeeNumber) -> Self {
		Self {
			kind: ResourceKind::Employee,
			owner: Some(employee_number),
			owner_office: None,
		}
	}

	/// Owner reference for an employee creation payload.
	pub fn employee_proposal() -> Self {
		Self {
			kind: ResourceKind::Employee,
			owner: None,
			owner_office: None,
		}
	}

	/// Builder: set the resolved office of the managing employee.
	pub fn with_owner_office(mut self, office: OfficeCode) -> Self {
		self.owner_office = Some(office);
		self
	}
}
