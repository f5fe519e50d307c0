//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, package store transport, HTTP).
//!
//! # Structure
//!
//! - `collection` - Collection version records and enriched views
//! - `namespace` - Locally owned namespace records
//! - `import` - Import ownership records and remote task state
//! - `caller` - The identity a request runs as
//! - `page` - Client-facing pagination

mod caller;
mod collection;
mod import;
mod namespace;
mod page;

pub use caller::{Caller, CurrentUser};
pub use collection::{
    ArtifactRef, Certification, CertificationUpdate, CollectionDetail, CollectionMetadata, CollectionRecord,
    CollectionSummary, ContentItem, VersionSummary,
};
pub use import::{
    CollectionImport, ImportError, ImportFilter, ImportMessage, ImportScope, ImportSort,
    ImportState, ImportTaskDetail, ImportTaskState, ImportTaskSummary, NewCollectionImport,
};
pub use namespace::{Namespace, NamespaceSummary, NewNamespace};
pub use page::{Page, PageRequest};
