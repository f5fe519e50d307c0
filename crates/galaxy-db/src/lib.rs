//! `SQLite` storage for the galaxy collection gateway.
//!
//! Implements the `NamespaceRepository` and `ImportRepository` ports from
//! `galaxy-core`. The pool never leaves this crate: callers get a [`Repos`]
//! bundle from [`StoreFactory::build_repos`].
//!
//! [`Repos`]: galaxy_core::Repos

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

pub use factory::StoreFactory;

#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use repositories::{SqliteImportRepository, SqliteNamespaceRepository};

pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
