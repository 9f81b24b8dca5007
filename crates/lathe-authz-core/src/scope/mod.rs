// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Instance-level scope evaluation.
//!
//! The second phase of every decision: given an actor that already passed the
//! coarse permission matrix, decide whether this particular record falls
//! inside their organizational scope. Evaluation dispatches to a policy module
//! per resource kind.
//!
//! # Design Principles
//!
//! 1. **Pure evaluation**: policy functions touch no stores; everything they
//!    need is pre-loaded into the [`OwnerRef`]
//! 2. **Explicit denials**: every refusal names a [`DenyReason`]
//! 3. **No silent widening**: missing ownership data evaluates to a denial,
//!    never a grant

pub mod customer;
pub mod employee;

use crate::decision::ScopeDecision;
use crate::types::{Action, Identity, OwnerRef, ResourceKind};

/// Evaluates whether the actor's scope covers the given record.
///
/// Call only after the permission matrix has granted the (tier, kind, action)
/// combination; scope rules narrow a coarse grant, they never widen one.
pub fn evaluate(identity: &Identity, action: Action, resource: &OwnerRef) -> ScopeDecision {
	match resource.kind {
		ResourceKind::Customer => customer::evaluate(identity, action, resource),
		ResourceKind::Employee => employee::evaluate(identity, action, resource),
	}
}
