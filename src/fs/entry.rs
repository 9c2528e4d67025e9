//! Folder entries as returned by the listing endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::types::{lenient_u64, opt_lenient_i64, opt_string_or_number, string_or_number};

/// A file or folder in the Supernote cloud.
///
/// Known fields are typed; anything else the server sends is kept in
/// `extra`, so the entry still carries the full server record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileEntry {
    /// Entry identifier; pass it as a folder identifier for folders.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Identifier of the containing folder.
    #[serde(deserialize_with = "string_or_number")]
    pub directory_id: String,
    /// Display name.
    #[serde(deserialize_with = "string_or_number")]
    pub file_name: String,
    /// Size in bytes (0 for folders).
    #[serde(deserialize_with = "lenient_u64")]
    pub size: u64,
    /// MD5 hex digest of the content, for files.
    #[serde(deserialize_with = "opt_string_or_number")]
    pub md5: Option<String>,
    /// Storage-side name of the content, for files.
    #[serde(deserialize_with = "opt_string_or_number")]
    pub inner_name: Option<String>,
    /// `"Y"` for folders, `"N"` for files.
    #[serde(rename = "isFolder", deserialize_with = "string_or_number")]
    pub folder_flag: String,
    /// Creation time (Unix epoch, milliseconds).
    #[serde(deserialize_with = "opt_lenient_i64")]
    pub create_time: Option<i64>,
    /// Last update time (Unix epoch, milliseconds).
    #[serde(deserialize_with = "opt_lenient_i64")]
    pub update_time: Option<i64>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FileEntry {
    /// Check if this entry is a folder.
    pub fn is_folder(&self) -> bool {
        self.folder_flag.eq_ignore_ascii_case("Y")
    }

    /// Check if this entry is a file.
    pub fn is_file(&self) -> bool {
        !self.is_folder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_folder_entry() {
        let entry: FileEntry = serde_json::from_value(json!({
            "id": "778507258086080512",
            "directoryId": "0",
            "fileName": "Document",
            "size": 0,
            "md5": "",
            "innerName": null,
            "isFolder": "Y",
            "createTime": 1667000000000i64,
            "updateTime": 1667000000000i64
        }))
        .unwrap();

        assert_eq!(entry.id, "778507258086080512");
        assert_eq!(entry.file_name, "Document");
        assert!(entry.is_folder());
        assert!(!entry.is_file());
        assert!(entry.extra.is_empty());
    }

    #[test]
    fn test_numeric_id_and_unknown_fields() {
        let entry: FileEntry = serde_json::from_value(json!({
            "id": 42,
            "fileName": "notes.note",
            "size": 2048,
            "isFolder": "N",
            "userId": 1001
        }))
        .unwrap();

        assert_eq!(entry.id, "42");
        assert_eq!(entry.directory_id, "");
        assert!(entry.is_file());
        assert_eq!(entry.size, 2048);
        assert_eq!(entry.extra.get("userId"), Some(&json!(1001)));
    }

    #[test]
    fn test_null_and_stringified_fields() {
        let entry: FileEntry = serde_json::from_value(json!({
            "id": "1",
            "fileName": null,
            "isFolder": null,
            "size": null,
            "md5": null,
            "createTime": "1667000000000",
            "updateTime": "not a time"
        }))
        .unwrap();

        assert_eq!(entry.id, "1");
        assert_eq!(entry.file_name, "");
        assert_eq!(entry.size, 0);
        assert!(entry.md5.is_none());
        assert!(entry.is_file());
        assert_eq!(entry.create_time, Some(1667000000000));
        assert!(entry.update_time.is_none());

        let sized: FileEntry =
            serde_json::from_value(json!({"id": 2, "size": "4096", "isFolder": "y"})).unwrap();
        assert_eq!(sized.size, 4096);
        assert!(sized.is_folder());
    }
}
