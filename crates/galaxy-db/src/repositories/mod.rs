//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL. The `SqlitePool` is confined to
//! this module and never appears in a port signature.

mod row_mappers;
mod sqlite_import_repository;
mod sqlite_namespace_repository;

pub use sqlite_import_repository::SqliteImportRepository;
pub use sqlite_namespace_repository::SqliteNamespaceRepository;
