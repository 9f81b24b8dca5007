// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! SQLite-backed stores for the Lathe authorization system.
//!
//! This crate implements the lookup traits from `lathe-server-authz` over
//! SQLite. Each repository reads exactly the columns authorization needs;
//! nothing here writes business records or owns their schema.
//!
//! # Architecture
//!
//! - `account` - login accounts, keyed by username
//! - `employee` - employee role records, keyed by employee number
//! - `customer` - customer ownership facts, keyed by customer number
//! - `pool` - SQLite pool construction with WAL mode
//! - `testing` - in-memory pools, reduced DDL, and seed helpers for tests
//!
//! # Example
//!
//! ```ignore
//! use lathe_server_db::{create_pool, AccountRepository, CustomerRepository, EmployeeRepository};
//!
//! let pool = create_pool("sqlite:./lathe.db").await?;
//! let accounts = Arc::new(AccountRepository::new(pool.clone()));
//! let employees = Arc::new(EmployeeRepository::new(pool.clone()));
//! let customers = Arc::new(CustomerRepository::new(pool));
//! ```

pub mod account;
pub mod customer;
pub mod employee;
pub mod error;
pub mod pool;
pub mod testing;

pub use account::AccountRepository;
pub use customer::CustomerRepository;
pub use employee::EmployeeRepository;
pub use error::{DbError, Result};
pub use pool::create_pool;
