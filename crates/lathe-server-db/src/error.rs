// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use lathe_server_authz::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
	#[error("Database error: {0}")]
	Sqlx(#[from] sqlx::Error),

	#[error("Internal: {0}")]
	Internal(String),
}

pub type Result<T> = std::result::Result<T, DbError>;

// Connection-level failures are outages; everything else reached the
// database and failed there.
impl From<DbError> for StoreError {
	fn from(err: DbError) -> Self {
		match &err {
			DbError::Sqlx(
				sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_),
			) => StoreError::Unavailable(err.to_string()),
			_ => StoreError::Backend(err.to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn pool_timeout_maps_to_unavailable() {
		let err = DbError::Sqlx(sqlx::Error::PoolTimedOut);
		assert!(matches!(StoreError::from(err), StoreError::Unavailable(_)));
	}

	#[test]
	fn row_decode_maps_to_backend() {
		let err = DbError::Internal("employee number out of range".to_string());
		assert!(matches!(StoreError::from(err), StoreError::Backend(_)));
	}

	proptest! {
		#[test]
		fn internal_errors_never_map_to_unavailable(message in ".{0,64}") {
			let mapped = StoreError::from(DbError::Internal(message.clone()));
			match mapped {
				StoreError::Backend(text) => prop_assert!(text.contains(&message)),
				StoreError::Unavailable(_) => prop_assert!(false, "decode faults are not outages"),
			}
		}
	}
}
