// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static role-action permission matrix.
//!
//! The matrix is the coarse phase of every decision: it answers whether a role
//! tier may perform an action on a kind of record at all, before any instance
//! data is consulted. It is built once at startup ([`PermissionMatrix::default`]
//! or [`PermissionMatrix::from_config`]) and read-only afterwards.
//!
//! A combination with no entry denies every tier; [`RoleTier::Other`] appears
//! in no default cell and is only ever granted through configuration.

use crate::types::{Action, ResourceKind, RoleTier};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Immutable map from (resource kind, action) to the tiers allowed to act.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionMatrix {
	grants: HashMap<(ResourceKind, Action), HashSet<RoleTier>>,
}

impl PermissionMatrix {
	/// Build a matrix from a configured grant table.
	pub fn from_config(config: &MatrixConfig) -> Self {
		let mut grants = HashMap::new();
		for (kind, cells) in [
			(ResourceKind::Employee, &config.employee),
			(ResourceKind::Customer, &config.customer),
		] {
			for (action, tiers) in [
				(Action::Read, &cells.read),
				(Action::Create, &cells.create),
				(Action::Update, &cells.update),
				(Action::Delete, &cells.delete),
			] {
				grants.insert((kind, action), tiers.iter().copied().collect());
			}
		}
		Self { grants }
	}

	/// Returns true if the tier may perform the action on the given kind.
	///
	/// Total over all inputs; a combination absent from the table denies.
	pub fn allows(&self, tier: RoleTier, kind: ResourceKind, action: Action) -> bool {
		self
			.grants
			.get(&(kind, action))
			.is_some_and(|tiers| tiers.contains(&tier))
	}
}

impl Default for PermissionMatrix {
	/// The standard business grant table.
	fn default() -> Self {
		Self::from_config(&MatrixConfig::business())
	}
}

/// Configurable grant table, one list of tiers per resource kind and action.
///
/// Deserializes from the deployment config; an omitted list grants nothing.
/// The derived `Default` is the empty (deny-all) table; the standard business
/// rules are [`MatrixConfig::business`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
	pub employee: KindGrants,
	pub customer: KindGrants,
}

/// Tiers granted each action on a single resource kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindGrants {
	pub read: Vec<RoleTier>,
	pub create: Vec<RoleTier>,
	pub update: Vec<RoleTier>,
	pub delete: Vec<RoleTier>,
}

impl MatrixConfig {
	/// The standard business grant table.
	pub fn business() -> Self {
		use RoleTier::{Leader, Manager, President, Staff};
		Self {
			employee: KindGrants {
				read: vec![President, Manager, Leader],
				create: vec![President, Manager],
				update: vec![President, Manager],
				delete: vec![President],
			},
			customer: KindGrants {
				read: vec![President, Manager, Leader, Staff],
				create: vec![President, Manager, Leader, Staff],
				update: vec![President, Manager, Leader],
				delete: vec![President, Manager, Leader],
			},
		}
	}
}
