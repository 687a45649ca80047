//! File endpoint wrappers.

use serde::Deserialize;
use skiff_models::File;

use crate::client::ApiClient;
use crate::error::ApiResult;

#[derive(Deserialize)]
struct FileEnvelope {
    file: File,
}

#[derive(Deserialize)]
struct FolderEnvelope {
    #[serde(default)]
    files: Vec<File>,
    #[serde(default)]
    parent: Option<File>,
}

/// Contents of one folder: the entries plus the folder itself.
#[derive(Debug, Clone)]
pub struct FolderListing {
    /// The listed folder; absent only for legacy root listings.
    pub parent: Option<File>,
    /// Entries directly inside the folder.
    pub files: Vec<File>,
}

impl ApiClient {
    /// List the contents of a folder. `0` addresses the root directory.
    pub async fn list_files(&self, parent_id: i64) -> ApiResult<FolderListing> {
        let envelope: FolderEnvelope = self
            .get_json(&format!("files/list?parent_id={parent_id}"))
            .await?;
        Ok(FolderListing {
            parent: envelope.parent,
            files: envelope.files,
        })
    }

    /// Fetch one file or folder by identifier.
    pub async fn file(&self, id: i64) -> ApiResult<File> {
        let envelope: FileEnvelope = self.get_json(&format!("files/{id}")).await?;
        Ok(envelope.file)
    }

    /// Create a folder inside `parent_id`.
    pub async fn create_folder(&self, name: &str, parent_id: i64) -> ApiResult<File> {
        let envelope: FileEnvelope = self
            .post_json(
                "files/create-folder",
                &serde_json::json!({"name": name, "parent_id": parent_id}),
            )
            .await?;
        Ok(envelope.file)
    }

    /// Rename a file or folder.
    pub async fn rename_file(&self, id: i64, name: &str) -> ApiResult<()> {
        self.post_form("files/rename", &[("file_id", id.to_string()), ("name", name.to_string())])
            .await
    }

    /// Move files into another folder.
    pub async fn move_files(&self, ids: &[i64], parent_id: i64) -> ApiResult<()> {
        self.post_form(
            "files/move",
            &[
                ("file_ids", join_ids(ids)),
                ("parent_id", parent_id.to_string()),
            ],
        )
        .await
    }

    /// Delete files and folders. Folders are removed recursively.
    pub async fn delete_files(&self, ids: &[i64]) -> ApiResult<()> {
        self.post_form("files/delete", &[("file_ids", join_ids(ids))])
            .await
    }
}

pub(crate) fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;
    use httpmock::MockServer;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn list_files_decodes_parent_and_entries() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/files/list")
                .query_param("parent_id", "0");
            then.status(200).json_body(serde_json::json!({
                "parent": {"id": 0, "name": "Your Files", "content_type": "application/x-directory"},
                "files": [
                    {"id": 10, "name": "Incoming", "content_type": "application/x-directory"},
                    {"id": 11, "name": "movie.mkv", "content_type": "video/x-matroska", "size": 5}
                ]
            }));
        });

        let client = test_client(&server);
        let listing = client.list_files(0).await.expect("list files");
        assert_eq!(listing.files.len(), 2);
        assert!(listing.files[0].is_folder());
        assert_eq!(listing.parent.expect("parent").name, "Your Files");
        mock.assert();
    }

    #[tokio::test]
    async fn create_folder_returns_the_new_entry() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST)
                .path("/files/create-folder")
                .json_body(serde_json::json!({"name": "tv", "parent_id": 10}));
            then.status(200).json_body(serde_json::json!({
                "file": {"id": 12, "name": "tv", "parent_id": 10,
                         "content_type": "application/x-directory"}
            }));
        });

        let client = test_client(&server);
        let folder = client.create_folder("tv", 10).await.expect("create folder");
        assert_eq!(folder.id, 12);
        assert!(folder.is_folder());
    }

    #[tokio::test]
    async fn delete_files_sends_comma_separated_identifiers() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/files/delete")
                .body("file_ids=10%2C11");
            then.status(200).json_body(serde_json::json!({"status": "OK"}));
        });

        let client = test_client(&server);
        client.delete_files(&[10, 11]).await.expect("delete");
        mock.assert();
    }
}
