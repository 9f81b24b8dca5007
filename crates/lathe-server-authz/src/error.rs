// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the authorization server.
//!
//! The taxonomy keeps the four caller-facing outcomes distinct:
//!
//! - [`AuthzError::Unauthenticated`] — the credential or the identity
//!   behind it could not be established.
//! - [`AuthzError::Forbidden`] — the identity is sound but the request
//!   falls outside its permissions or scope.
//! - [`AuthzError::NotFound`] — the target record does not exist; never
//!   collapsed into `Forbidden` because the remediation differs.
//! - [`AuthzError::Infrastructure`] — a backing store failed; never
//!   converted into an allow or a deny.

use lathe_authz_core::DenyReason;
use thiserror::Error;

/// Errors raised by the backing stores.
///
/// Store implementations map their native failures into these two
/// shapes so the engine can report faults without knowing which store
/// technology sits behind a trait object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
	/// The store could not be reached at all
	#[error("store unavailable: {0}")]
	Unavailable(String),

	/// The store was reached but the operation failed
	#[error("store backend error: {0}")]
	Backend(String),
}

/// Errors that can occur while authorizing a request.
#[derive(Debug, Error)]
pub enum AuthzError {
	/// No usable identity could be established from the credential
	#[error("unauthenticated: {0}")]
	Unauthenticated(String),

	/// The identity is valid but the request is outside its permissions
	#[error("forbidden: {0}")]
	Forbidden(DenyReason),

	/// The target record does not exist
	#[error("not found")]
	NotFound,

	/// A backing store failed while the decision was being computed
	#[error("infrastructure: {0}")]
	Infrastructure(#[from] StoreError),
}

/// Result type for authorization operations.
pub type Result<T> = std::result::Result<T, AuthzError>;
