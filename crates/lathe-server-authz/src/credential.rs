// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Credential verification for incoming requests.
//!
//! This module provides:
//! - [`TokenClaims`] - the authenticated payload carried by a bearer token
//! - [`CredentialVerifier`] - the seam between token formats and the resolver
//! - [`HmacTokenVerifier`] - the built-in HMAC-SHA256 token format
//! - [`extract_bearer_token`] for pulling the raw token out of request headers
//!
//! # Verification Flow
//!
//! ```text
//! Authorization: Bearer <payload-hex>.<signature-hex>
//!         │
//!         ├── split on '.'        → Malformed if absent
//!         ├── verify HMAC-SHA256  → BadSignature on mismatch
//!         ├── parse claims JSON   → Malformed if undecodable
//!         └── check expiry        → Expired once past expires_at
//! ```
//!
//! # Security Notes
//!
//! - Token values are never logged; instrumentation skips them.
//! - The signature is checked before the payload is parsed, so claims are
//!   only ever decoded from authenticated bytes.
//! - Verification is offline: no store access, no clock beyond `Utc::now()`.
//!   A rejection here is always an authentication failure, never an
//!   infrastructure fault.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use http::header::AUTHORIZATION;
use http::HeaderMap;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use tracing::instrument;

type HmacSha256 = Hmac<Sha256>;

/// Claims carried by a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
	/// Account username the token was issued to.
	pub username: String,
	/// Instant after which the token is no longer accepted.
	pub expires_at: DateTime<Utc>,
}

/// Errors that can occur while verifying a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
	/// No credential was presented at all
	#[error("no credential presented")]
	Missing,

	/// The credential is structurally invalid
	#[error("malformed credential")]
	Malformed,

	/// The signature does not match the payload
	#[error("credential signature mismatch")]
	BadSignature,

	/// The credential is past its expiry instant
	#[error("credential expired")]
	Expired,
}

/// Verifies a raw credential and returns the claims it carries.
///
/// Implementations must not touch backing stores: verification is an
/// offline check, and a failure here is an authentication failure rather
/// than an infrastructure fault.
pub trait CredentialVerifier: Send + Sync {
	/// Verify `token` and return its claims.
	fn verify(&self, token: &str) -> Result<TokenClaims, CredentialError>;
}

/// Extract bearer token from the Authorization header.
///
/// Expects the format: `Authorization: Bearer <token>`
///
/// # Returns
///
/// The bearer token value if found, or `None` if not present or malformed.
///
/// # Security
///
/// The returned token should be treated as a secret; instrumentation here
/// skips all values so tokens never reach the logs.
#[instrument(level = "trace", skip_all)]
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
	let auth_header = headers.get(AUTHORIZATION)?;
	let auth_str = auth_header.to_str().ok()?;
	auth_str
		.strip_prefix("Bearer ")
		.map(|token| token.to_string())
}

/// Verifier for the built-in `<payload-hex>.<signature-hex>` token format.
///
/// The payload is the JSON encoding of [`TokenClaims`]; the signature is
/// HMAC-SHA256 over the raw payload bytes. Issuance lives outside this
/// crate, so the verifier only ever checks tokens, it never signs them
/// outside of tests.
pub struct HmacTokenVerifier {
	key: Vec<u8>,
}

impl HmacTokenVerifier {
	/// Create a verifier for tokens signed with `key`.
	pub fn new(key: impl Into<Vec<u8>>) -> Self {
		Self { key: key.into() }
	}

	/// Sign `claims` into a token this verifier accepts.
	#[cfg(test)]
	pub(crate) fn mint(&self, claims: &TokenClaims) -> String {
		let payload = serde_json::to_vec(claims).expect("claims serialize to JSON");
		let mut mac =
			HmacSha256::new_from_slice(&self.key).expect("HMAC can take key of any size");
		mac.update(&payload);
		let signature = mac.finalize().into_bytes();
		format!("{}.{}", hex::encode(payload), hex::encode(signature))
	}
}

impl CredentialVerifier for HmacTokenVerifier {
	fn verify(&self, token: &str) -> Result<TokenClaims, CredentialError> {
		let (payload_hex, signature_hex) =
			token.split_once('.').ok_or(CredentialError::Malformed)?;
		let payload = hex::decode(payload_hex).map_err(|_| CredentialError::Malformed)?;
		let signature = hex::decode(signature_hex).map_err(|_| CredentialError::Malformed)?;

		let mut mac =
			HmacSha256::new_from_slice(&self.key).expect("HMAC can take key of any size");
		mac.update(&payload);
		mac.verify_slice(&signature)
			.map_err(|_| CredentialError::BadSignature)?;

		let claims: TokenClaims =
			serde_json::from_slice(&payload).map_err(|_| CredentialError::Malformed)?;

		if claims.expires_at < Utc::now() {
			return Err(CredentialError::Expired);
		}

		Ok(claims)
	}
}

impl std::fmt::Debug for HmacTokenVerifier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("HmacTokenVerifier")
			.field("key", &"[REDACTED]")
			.finish()
	}
}
