// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core decision logic for the Lathe authorization system.
//!
//! This crate holds the pure half of every authorization decision: the role
//! and resource vocabulary, the static permission matrix, and the scope
//! policies that narrow a coarse grant to the records an actor actually
//! manages. It performs no I/O; the server crate (`lathe-server-authz`)
//! resolves identities, loads ownership data, and feeds both into these
//! functions.
//!
//! # Overview
//!
//! A decision runs in two phases:
//!
//! 1. **Matrix**: may this role tier perform this action on this kind of
//!    record at all? See [`PermissionMatrix`].
//! 2. **Scope**: does this particular record fall inside the actor's
//!    organizational scope? See [`scope::evaluate`].
//!
//! Collection reads use [`visibility_window`] instead of per-record scope
//! checks.
//!
//! # Example
//!
//! ```
//! use lathe_authz_core::{
//!     scope, Action, EmployeeNumber, Identity, OfficeCode, OwnerRef,
//!     PermissionMatrix, ResourceKind, RoleTier,
//! };
//!
//! let matrix = PermissionMatrix::default();
//! let actor = Identity::new(
//!     "leslie",
//!     EmployeeNumber::new(1165),
//!     OfficeCode::new("1"),
//!     RoleTier::Staff,
//! );
//!
//! assert!(matrix.allows(actor.tier, ResourceKind::Customer, Action::Read));
//! assert!(!matrix.allows(actor.tier, ResourceKind::Employee, Action::Read));
//!
//! let own_customer = OwnerRef::customer(EmployeeNumber::new(1165));
//! assert!(scope::evaluate(&actor, Action::Read, &own_customer).is_granted());
//!
//! let foreign_customer = OwnerRef::customer(EmployeeNumber::new(1166));
//! assert!(!scope::evaluate(&actor, Action::Read, &foreign_customer).is_granted());
//! ```

pub mod decision;
pub mod matrix;
pub mod scope;
pub mod types;
pub mod visibility;

pub use decision::{DenyReason, ScopeDecision};
pub use matrix::{KindGrants, MatrixConfig, PermissionMatrix};
pub use types::{
	Action, CustomerNumber, EmployeeNumber, Identity, OfficeCode, OwnerRef, ResourceKind, RoleTier,
};
pub use visibility::{visibility_window, VisibilityWindow};
