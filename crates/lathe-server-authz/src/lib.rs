// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Scoped authorization for the Lathe server.
//!
//! This crate turns a raw bearer credential plus an intended action into a
//! single authorization outcome: allow (with the resolved identity), or a
//! precise refusal. It wires the pure decision logic from
//! `lathe-authz-core` to credential verification and the record stores.
//!
//! # Architecture
//!
//! - `credential` - bearer token extraction and offline verification
//! - `resolver` - credential claims to full organizational identity
//! - `engine` - the authorize pipeline: resolve, matrix, ownership, scope
//! - `store` - lookup traits implemented by the database layer
//! - `memory` - in-memory stores for tests and storeless deployments
//! - `config` - TOML-configurable permission matrix
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use lathe_server_authz::{
//!     Action, AuthzConfig, AuthzEngine, CustomerNumber, HmacTokenVerifier, IdentityResolver,
//!     PermissionMatrix, Target,
//! };
//!
//! let config = AuthzConfig::load(&AuthzConfig::system_path())?;
//! let matrix = Arc::new(PermissionMatrix::from_config(&config.matrix));
//! let verifier = Arc::new(HmacTokenVerifier::new(signing_key));
//!
//! let resolver = IdentityResolver::new(verifier, accounts.clone(), employees.clone());
//! let engine = AuthzEngine::new(resolver, matrix, employees, customers);
//!
//! let identity = engine
//!     .authorize(bearer.as_deref(), Action::Update, Target::Customer(CustomerNumber::new(103)))
//!     .await?;
//! ```

pub mod config;
pub mod credential;
pub mod engine;
pub mod error;
pub mod memory;
pub mod resolver;
pub mod store;

pub use config::{AuthzConfig, ConfigError};
pub use credential::{
	extract_bearer_token, CredentialError, CredentialVerifier, HmacTokenVerifier, TokenClaims,
};
pub use engine::{AuthzEngine, Target};
pub use error::{AuthzError, Result, StoreError};
pub use memory::{MemoryAccountStore, MemoryCustomerStore, MemoryEmployeeStore};
pub use resolver::{IdentityResolver, ResolveError};
pub use store::{
	Account, AccountStore, CustomerOwner, CustomerStore, EmployeeRecord, EmployeeStore,
};

// Re-export core types for convenience
pub use lathe_authz_core::*;
