//! Upload operations.

use std::path::Path;

use tracing::{debug, warn};

use crate::api::types::log_service_failure;
use crate::api::{ApplyResponse, FinishResponse};
use crate::config::ROOT_DIRECTORY_ID;
use crate::error::{CloudError, Result};
use crate::fs::upload_descriptor::UploadDescriptor;
use crate::session::CloudClient;

const APPLY_ENDPOINT: &str = "file/upload/apply";
const FINISH_ENDPOINT: &str = "file/upload/finish";

impl CloudClient {
    /// Upload a local file to a folder.
    ///
    /// The whole file is read into memory before the first request, then
    /// handed to [`CloudClient::upload_bytes`].
    ///
    /// # Arguments
    /// * `token` - Session token from [`CloudClient::login`]
    /// * `local_path` - Path to the local file to upload
    /// * `directory_id` - Destination folder; `None` uploads to the root folder
    ///
    /// # Returns
    /// The success flag of the finish step.
    pub async fn upload_file<P: AsRef<Path>>(
        &self,
        token: &str,
        local_path: P,
        directory_id: Option<&str>,
    ) -> Result<bool> {
        let path = local_path.as_ref();
        let file_name = path
            .file_name()
            .ok_or_else(|| CloudError::InvalidPath(path.display().to_string()))?
            .to_string_lossy()
            .to_string();

        let data = tokio::fs::read(path).await?;

        self.upload_bytes(token, data, &file_name, directory_id).await
    }

    /// Upload in-memory data as a file named `file_name`.
    ///
    /// Runs the three-step protocol:
    ///
    /// 1. **apply** for a signed storage slot, sending the MD5 digest and size
    ///    with `nonce`/`timestamp` signing headers;
    /// 2. **transfer** the bytes with a PUT to the signed URL, only if apply
    ///    succeeded;
    /// 3. **finish** the upload, which is sent even when apply failed.
    ///
    /// Finish is not short-circuited when apply fails: it is still sent, with
    /// whatever inner name apply's URL yields (empty if there is none), and
    /// its success flag reports the outcome.
    ///
    /// # Example
    /// ```no_run
    /// # use supernote_cloud::CloudClient;
    /// # async fn example(client: &CloudClient, token: &str) -> supernote_cloud::Result<()> {
    /// let ok = client
    ///     .upload_bytes(token, b"Hello, Supernote!".to_vec(), "hello.txt", None)
    ///     .await?;
    /// println!("uploaded: {}", ok);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn upload_bytes(
        &self,
        token: &str,
        data: Vec<u8>,
        file_name: &str,
        directory_id: Option<&str>,
    ) -> Result<bool> {
        let directory_id = directory_id.unwrap_or(ROOT_DIRECTORY_ID);
        let mut descriptor = UploadDescriptor::new(file_name, &data, directory_id);
        debug!(
            file_name,
            directory_id,
            size = descriptor.file_size,
            md5 = %descriptor.md5,
            "starting upload"
        );

        // 1. Apply
        let response = self
            .api()
            .post(
                APPLY_ENDPOINT,
                &descriptor.apply_payload(),
                Some(token),
                &descriptor.signing_headers(),
            )
            .await?;
        let apply: ApplyResponse = serde_json::from_value(response.clone())?;
        if !apply.success {
            log_service_failure(APPLY_ENDPOINT, &response);
        }
        descriptor.record_apply(&apply);

        // 2. Transfer
        match &descriptor.target {
            Some(target) => {
                let status = self
                    .api()
                    .http()
                    .put_bytes(&target.url, &target.transfer_headers(), data)
                    .await?;
                if status.is_success() {
                    debug!(inner_name = %descriptor.inner_name, "transfer complete");
                } else {
                    warn!(status = status.as_u16(), "storage transfer rejected");
                }
            }
            None if apply.success => warn!("apply succeeded without an upload URL"),
            None => debug!("apply failed, skipping transfer"),
        }

        // 3. Finish
        let response = self
            .api()
            .post(FINISH_ENDPOINT, &descriptor.finish_payload(), Some(token), &[])
            .await?;
        let finish: FinishResponse = serde_json::from_value(response.clone())?;
        if !finish.success {
            log_service_failure(FINISH_ENDPOINT, &response);
        }

        Ok(finish.success)
    }
}
