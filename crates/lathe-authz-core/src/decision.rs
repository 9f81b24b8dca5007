// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Decision vocabulary for scope evaluation.
//!
//! A scope evaluation either grants or denies; a denial always carries a
//! [`DenyReason`] so callers can log and surface why. Denials are decisions,
//! not errors: infrastructure faults never appear here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of evaluating scope rules for one actor against one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeDecision {
	/// The actor's scope covers the record.
	Granted,
	/// The actor's scope excludes the record.
	Denied(DenyReason),
}

impl ScopeDecision {
	/// Returns true if the decision grants access.
	pub fn is_granted(&self) -> bool {
		matches!(self, ScopeDecision::Granted)
	}

	/// Returns the deny reason, if the decision is a denial.
	pub fn deny_reason(&self) -> Option<DenyReason> {
		match self {
			ScopeDecision::Granted => None,
			ScopeDecision::Denied(reason) => Some(*reason),
		}
	}
}

/// Why an actor was denied access to a record they asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
	/// The role tier is not granted this action in the permission matrix.
	RoleNotPermitted,
	/// A staff actor asked about a customer another employee manages.
	NotManagingOwner,
	/// The record's managing employee could not be found.
	ManagingEmployeeNotFound,
	/// The record's managing employee works out of a different office.
	OfficeMismatch,
	/// A creation payload named no managing employee.
	MissingProposedOwner,
}

impl fmt::Display for DenyReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DenyReason::RoleNotPermitted => write!(f, "role not permitted for action"),
			DenyReason::NotManagingOwner => write!(f, "not the managing owner"),
			DenyReason::ManagingEmployeeNotFound => write!(f, "managing employee not found"),
			DenyReason::OfficeMismatch => write!(f, "managing employee is outside your office"),
			DenyReason::MissingProposedOwner => {
				write!(f, "no managing employee on the proposed record")
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn granted_reports_no_reason() {
		assert!(ScopeDecision::Granted.is_granted());
		assert_eq!(ScopeDecision::Granted.deny_reason(), None);
	}

	#[test]
	fn denied_carries_its_reason() {
		let decision = ScopeDecision::Denied(DenyReason::NotManagingOwner);
		assert!(!decision.is_granted());
		assert_eq!(decision.deny_reason(), Some(DenyReason::NotManagingOwner));
	}

	#[test]
	fn reasons_have_stable_display_strings() {
		assert_eq!(
			DenyReason::RoleNotPermitted.to_string(),
			"role not permitted for action"
		);
		assert_eq!(
			DenyReason::ManagingEmployeeNotFound.to_string(),
			"managing employee not found"
		);
		assert_eq!(
			DenyReason::NotManagingOwner.to_string(),
			"not the managing owner"
		);
	}

	#[test]
	fn reasons_serialize_snake_case() {
		let json = serde_json::to_string(&DenyReason::OfficeMismatch).unwrap();
		assert_eq!(json, "\"office_mismatch\"");
	}
}
