//! Import task status.

use crate::error::PulpResult;
use crate::http::HttpBackend;
use crate::models::PulpImportTask;
use crate::url::build_import_url;

use super::PulpClient;

impl<B: HttpBackend> PulpClient<B> {
    /// Fetch the state of one import task.
    pub(crate) async fn get_import(&self, task_id: &str) -> PulpResult<PulpImportTask> {
        let url = build_import_url(&self.config, task_id);
        tracing::debug!(%url, "Fetching import task");
        self.backend.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::fake_client;
    use crate::error::PulpError;
    use crate::http::testing::FakeBackend;
    use tokio_test::assert_err;

    #[tokio::test]
    async fn test_timeout_surfaces() {
        let client = fake_client(FakeBackend::new().with_timeout_on("imports/collections"));
        let result = client.get_import("t-1").await;
        assert!(matches!(assert_err!(result), PulpError::Timeout { .. }));
    }
}
