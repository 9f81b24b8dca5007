// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Customer scope policies.
//!
//! Customer records are owned by the sales employee who manages the account:
//!
//! - **Staff** may act only on customers they manage themselves
//! - **Leaders** may act on customers whose managing employee shares their
//!   office
//! - **Presidents and managers** pass unscoped; the matrix is their only gate
//!
//! The same narrowing applies to every action, including creation, where the
//! owner is the proposed managing employee from the payload.

use crate::decision::{DenyReason, ScopeDecision};
use crate::types::{Action, Identity, OwnerRef, RoleTier};

/// Evaluates customer scope for an actor that passed the coarse matrix check.
pub fn evaluate(identity: &Identity, _action: Action, resource: &OwnerRef) -> ScopeDecision {
	match identity.tier {
		RoleTier::Staff => evaluate_staff(identity, resource),
		RoleTier::Leader => evaluate_leader(identity, resource),
		RoleTier::President | RoleTier::Manager | RoleTier::Other => ScopeDecision::Granted,
	}
}

/// Staff: the managing employee must be the actor.
fn evaluate_staff(identity: &Identity, resource: &OwnerRef) -> ScopeDecision {
	let Some(owner) = resource.owner else {
		return ScopeDecision::Denied(DenyReason::MissingProposedOwner);
	};

	if identity.manages(owner) {
		ScopeDecision::Granted
	} else {
		ScopeDecision::Denied(DenyReason::NotManagingOwner)
	}
}

/// Leaders: the managing employee's office must match the actor's.
///
/// An unresolved office denies; a record whose manager cannot be found is
/// outside everyone's office.
fn evaluate_leader(identity: &Identity, resource: &OwnerRef) -> ScopeDecision {
	if resource.owner.is_none() {
		return ScopeDecision::Denied(DenyReason::MissingProposedOwner);
	}

	let Some(office) = &resource.owner_office else {
		return ScopeDecision::Denied(DenyReason::ManagingEmployeeNotFound);
	};

	if identity.in_office(office) {
		ScopeDecision::Granted
	} else {
		ScopeDecision::Denied(DenyReason::OfficeMismatch)
	}
}
