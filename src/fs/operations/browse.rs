//! Folder listing.

use serde_json::json;
use tracing::debug;

use crate::api::ListResponse;
use crate::api::types::log_service_failure;
use crate::config::ROOT_DIRECTORY_ID;
use crate::error::Result;
use crate::fs::entry::FileEntry;
use crate::session::CloudClient;

const LIST_ENDPOINT: &str = "file/list/query";

/// Entries requested per listing call; only the first page is fetched.
const PAGE_SIZE: u32 = 100;

impl CloudClient {
    /// List the contents of a folder.
    ///
    /// Requests the first page of up to 100 entries, newest first. Larger
    /// folders are truncated to that page.
    ///
    /// # Arguments
    /// * `token` - Session token from [`CloudClient::login`]
    /// * `directory_id` - Folder to list; `None` lists the root folder
    ///
    /// # Returns
    /// Entries in server order, or `None` if the service returned no list
    /// (for example because the token was rejected).
    pub async fn list_folder(
        &self,
        token: &str,
        directory_id: Option<&str>,
    ) -> Result<Option<Vec<FileEntry>>> {
        let directory_id = directory_id.unwrap_or(ROOT_DIRECTORY_ID);

        let response = self
            .api()
            .post(
                LIST_ENDPOINT,
                &json!({
                    "directoryId": directory_id,
                    "pageNo": 1,
                    "pageSize": PAGE_SIZE,
                    "order": "time",
                    "sequence": "desc",
                }),
                Some(token),
                &[],
            )
            .await?;

        let parsed: ListResponse = serde_json::from_value(response.clone())?;
        match &parsed.user_file_vo_list {
            Some(entries) => debug!(directory_id, count = entries.len(), "listed folder"),
            None => log_service_failure(LIST_ENDPOINT, &response),
        }
        Ok(parsed.user_file_vo_list)
    }

    /// Find an entry by name in a folder.
    ///
    /// Only the first listing page is searched.
    ///
    /// # Example
    /// ```no_run
    /// # use supernote_cloud::CloudClient;
    /// # async fn example(client: &CloudClient, token: &str) -> supernote_cloud::Result<()> {
    /// if let Some(folder) = client.find_entry(token, None, "Document").await? {
    ///     client.upload_file(token, "report.pdf", Some(&folder.id)).await?;
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn find_entry(
        &self,
        token: &str,
        directory_id: Option<&str>,
        name: &str,
    ) -> Result<Option<FileEntry>> {
        let entries = self.list_folder(token, directory_id).await?;
        Ok(entries
            .unwrap_or_default()
            .into_iter()
            .find(|entry| entry.file_name == name))
    }
}
