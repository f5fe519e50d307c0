//! `ApiCore` - the primary service facade.
//!
//! This is the composition root for core services. The HTTP adapter receives
//! an `ApiCore` instance and uses it to access all functionality.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::domain::{Caller, CurrentUser};
use crate::ports::{Authorizer, CoreError, PackageStorePort, Repos};

use super::{CollectionQueryGateway, ImportTaskService, PagingBridge, RoleGate};

/// The core service facade.
///
/// Constructed at the adapter's composition root with concrete repositories,
/// a package store client and an authorizer.
///
/// ```ignore
/// let core = ApiCore::new(repos, pulp_client, authorizer, &GatewayConfig::default());
/// let page = core.collections().list_collections(&params).await?;
/// ```
pub struct ApiCore {
    collections: CollectionQueryGateway,
    imports: ImportTaskService,
    role_gate: RoleGate,
    paging: PagingBridge,
}

impl ApiCore {
    pub fn new(
        repos: Repos,
        store: Arc<dyn PackageStorePort>,
        authorizer: Arc<dyn Authorizer>,
        config: &GatewayConfig,
    ) -> Self {
        let role_gate = RoleGate::new(authorizer);
        let paging = PagingBridge::from_config(config);
        Self {
            collections: CollectionQueryGateway::new(
                Arc::clone(&store),
                repos.namespaces,
                role_gate.clone(),
                paging,
            ),
            imports: ImportTaskService::new(
                repos.imports,
                store,
                role_gate.clone(),
                config.import_fanout,
            ),
            role_gate,
            paging,
        }
    }

    /// Access the collection gateway.
    pub const fn collections(&self) -> &CollectionQueryGateway {
        &self.collections
    }

    /// Access the import task service.
    pub const fn imports(&self) -> &ImportTaskService {
        &self.imports
    }

    pub const fn role_gate(&self) -> &RoleGate {
        &self.role_gate
    }

    /// Page limits shared by every listing.
    pub const fn paging(&self) -> &PagingBridge {
        &self.paging
    }

    /// Describe the caller, including their role.
    pub async fn current_user(&self, caller: &Caller) -> Result<CurrentUser, CoreError> {
        let is_partner_engineer = self.role_gate.is_privileged(caller).await?;
        Ok(CurrentUser {
            username: caller.username.clone(),
            groups: caller.groups.clone(),
            is_partner_engineer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::GroupAuthorizer;
    use crate::services::test_support::{
        FakePackageStore, MockImportRepo, MockNamespaceRepo, privileged_caller, regular_caller,
        repos,
    };

    fn core() -> ApiCore {
        ApiCore::new(
            repos(
                Arc::new(MockNamespaceRepo::default()),
                Arc::new(MockImportRepo::default()),
            ),
            Arc::new(FakePackageStore::default()),
            Arc::new(GroupAuthorizer::default()),
            &GatewayConfig::default().with_page_limits(25, 50),
        )
    }

    #[tokio::test]
    async fn test_current_user() {
        let core = core();

        let me = core.current_user(&privileged_caller()).await.unwrap();
        assert!(me.is_partner_engineer);
        assert_eq!(me.username, "pat");

        let me = core.current_user(&regular_caller()).await.unwrap();
        assert!(!me.is_partner_engineer);
        assert_eq!(me.groups, vec!["acme-owners".to_string()]);
    }

    #[test]
    fn test_paging_follows_config() {
        let core = core();
        let page = core.paging().page_request(None, Some("80")).unwrap();
        assert_eq!(page.limit, 50);
        assert_eq!(core.paging().page_request(None, None).unwrap().limit, 25);
    }
}
