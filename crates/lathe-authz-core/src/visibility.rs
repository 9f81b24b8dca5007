// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Visibility windows for collection reads.
//!
//! Listing endpoints do not evaluate records one by one; instead the actor's
//! tier yields a [`VisibilityWindow`] the caller compiles into its query.
//! Staff list only the customers they manage, leaders the customers managed
//! out of their office, and everyone else the full collection. Employee
//! listings are unfiltered for every tier the matrix lets in.

use crate::types::{EmployeeNumber, Identity, OfficeCode, ResourceKind, RoleTier};
use serde::{Deserialize, Serialize};

/// The slice of a collection an actor may see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityWindow {
	/// The full collection.
	All,
	/// Records whose managing employee is the given one.
	ManagedBy(EmployeeNumber),
	/// Records whose managing employee works out of the given office.
	Office(OfficeCode),
}

impl VisibilityWindow {
	/// Returns true if the window is the unrestricted one.
	pub fn is_all(&self) -> bool {
		matches!(self, VisibilityWindow::All)
	}
}

/// Computes the actor's visibility window over a kind of collection.
///
/// Pure and total; meaningful only after the matrix has granted a read on the
/// same kind.
pub fn visibility_window(identity: &Identity, kind: ResourceKind) -> VisibilityWindow {
	match kind {
		ResourceKind::Employee => VisibilityWindow::All,
		ResourceKind::Customer => match identity.tier {
			RoleTier::Staff => VisibilityWindow::ManagedBy(identity.employee_number),
			RoleTier::Leader => VisibilityWindow::Office(identity.office_code.clone()),
			RoleTier::President | RoleTier::Manager | RoleTier::Other => VisibilityWindow::All,
		},
	}
}
