// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Employee scope policies.
//!
//! Employee records carry no ownership narrowing: the permission matrix alone
//! decides who may touch them. Any tier that reaches this policy already holds
//! a coarse grant and passes.

use crate::decision::ScopeDecision;
use crate::types::{Action, Identity, OwnerRef};

/// Evaluates employee scope for an actor that passed the coarse matrix check.
pub fn evaluate(_identity: &Identity, _action: Action, _resource: &OwnerRef) -> ScopeDecision {
	ScopeDecision::Granted
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::{EmployeeNumber, OfficeCode, RoleTier};

	#[test]
	fn leader_reads_employees_in_any_office() {
		let actor = Identity::new(
			"anthony",
			EmployeeNumber::new(1088),
			OfficeCode::new("1"),
			RoleTier::Leader,
		);
		let resource = OwnerRef::employee(EmployeeNumber::new(1621));
		assert!(evaluate(&actor, Action::Read, &resource).is_granted());
	}

	#[test]
	fn every_tier_and_action_passes() {
		for tier in RoleTier::all() {
			let actor = Identity::new(
				"mary",
				EmployeeNumber::new(1056),
				OfficeCode::new("4"),
				*tier,
			);
			for action in Action::all() {
				let resource = OwnerRef::employee(EmployeeNumber::new(1702));
				assert!(evaluate(&actor, *action, &resource).is_granted());
			}
		}
	}
}
