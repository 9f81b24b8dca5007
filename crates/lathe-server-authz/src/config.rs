// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the authorization engine.
//!
//! The permission matrix is the only tunable. A config with no `[matrix]`
//! table runs the built-in business table; a config that declares one
//! replaces it wholesale, and any cell left undeclared denies every tier.
//! Grants are therefore always spelled out, never inherited. The matrix
//! is built once at startup and shared read-only from then on; nothing
//! here is reloadable.
//!
//! ```toml
//! [matrix.employee]
//! read = ["president", "manager", "leader"]
//! create = ["president", "manager"]
//! update = ["president", "manager"]
//! delete = ["president"]
//!
//! [matrix.customer]
//! read = ["president", "manager", "leader", "staff"]
//! create = ["president", "manager", "leader", "staff"]
//! update = ["president", "manager", "leader"]
//! delete = ["president", "manager", "leader"]
//! ```

use std::path::{Path, PathBuf};

use lathe_authz_core::MatrixConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The TOML source could not be parsed
	#[error("config parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// The config file exists but could not be read
	#[error("failed to read config file {path}: {source}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Top-level authorization configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthzConfig {
	/// Permission matrix cells; absent entirely, the business table applies.
	#[serde(default = "MatrixConfig::business")]
	pub matrix: MatrixConfig,
}

impl Default for AuthzConfig {
	fn default() -> Self {
		Self {
			matrix: MatrixConfig::business(),
		}
	}
}

impl AuthzConfig {
	/// Parse configuration from TOML text.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}

	/// Load configuration from a TOML file.
	///
	/// A missing file is not an error; it yields the defaults so fresh
	/// deployments run on the business table without any config present.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		if !path.exists() {
			debug!(path = %path.display(), "config file not found, using defaults");
			return Ok(Self::default());
		}

		debug!(path = %path.display(), "loading config file");
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
			path: path.to_path_buf(),
			source: e,
		})?;
		Self::from_toml_str(&content)
	}

	/// Conventional system-wide config path.
	pub fn system_path() -> PathBuf {
		PathBuf::from("/etc/lathe/authz.toml")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use lathe_authz_core::{Action, PermissionMatrix, ResourceKind, RoleTier};

	#[test]
	fn default_config_builds_the_business_table() {
		let matrix = PermissionMatrix::from_config(&AuthzConfig::default().matrix);

		assert!(matrix.allows(RoleTier::Staff, ResourceKind::Customer, Action::Read));
		assert!(!matrix.allows(RoleTier::Staff, ResourceKind::Customer, Action::Delete));
		assert!(!matrix.allows(RoleTier::Leader, ResourceKind::Employee, Action::Create));
	}

	#[test]
	fn empty_toml_keeps_the_business_table() {
		let config = AuthzConfig::from_toml_str("").unwrap();
		let matrix = PermissionMatrix::from_config(&config.matrix);

		assert!(matrix.allows(RoleTier::President, ResourceKind::Employee, Action::Delete));
		assert!(!matrix.allows(RoleTier::Other, ResourceKind::Customer, Action::Read));
	}

	#[test]
	fn declared_cells_grant_exactly_what_they_list() {
		let config = AuthzConfig::from_toml_str(
			r#"
			[matrix.customer]
			read = ["president", "staff"]
			delete = ["president", "manager", "leader", "staff"]
			"#,
		)
		.unwrap();
		let matrix = PermissionMatrix::from_config(&config.matrix);

		assert!(matrix.allows(RoleTier::Staff, ResourceKind::Customer, Action::Delete));
		assert!(matrix.allows(RoleTier::Staff, ResourceKind::Customer, Action::Read));
		assert!(!matrix.allows(RoleTier::Leader, ResourceKind::Customer, Action::Read));
	}

	#[test]
	fn declaring_a_matrix_replaces_the_business_table() {
		// Undeclared cells deny every tier; the business table does not
		// leak through a declared matrix.
		let config = AuthzConfig::from_toml_str(
			r#"
			[matrix.customer]
			read = ["staff"]
			"#,
		)
		.unwrap();
		let matrix = PermissionMatrix::from_config(&config.matrix);

		assert!(matrix.allows(RoleTier::Staff, ResourceKind::Customer, Action::Read));
		assert!(!matrix.allows(RoleTier::President, ResourceKind::Customer, Action::Read));
		assert!(!matrix.allows(RoleTier::Staff, ResourceKind::Customer, Action::Create));
		assert!(!matrix.allows(RoleTier::President, ResourceKind::Employee, Action::Read));
	}

	#[test]
	fn unknown_tier_names_are_rejected() {
		let err = AuthzConfig::from_toml_str(
			r#"
			[matrix.customer]
			read = ["intern"]
			"#,
		)
		.unwrap_err();

		assert!(matches!(err, ConfigError::Parse(_)));
	}

	#[test]
	fn missing_file_falls_back_to_defaults() {
		let config = AuthzConfig::load(Path::new("/nonexistent/lathe/authz.toml")).unwrap();
		let matrix = PermissionMatrix::from_config(&config.matrix);

		assert!(matrix.allows(RoleTier::Manager, ResourceKind::Employee, Action::Update));
	}
}
