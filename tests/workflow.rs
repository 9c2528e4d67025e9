//! End-to-end client workflow against a mock Supernote service.

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use supernote_cloud::crypto::md5_hex;
use supernote_cloud::{ClientConfig, CloudClient};

fn client_for(server: &ServerGuard) -> CloudClient {
    let config = ClientConfig::default().with_base_url(format!("{}/api", server.url()));
    CloudClient::with_config(config).unwrap()
}

#[tokio::test]
async fn login_list_and_upload_into_document_folder() {
    let mut server = Server::new_async().await;
    let content = b"%PDF-1.4 example document body".to_vec();
    let digest = md5_hex(&content);
    let storage_url = format!("{}/supernote-bucket/1001/5e1c2d.pdf", server.url());

    let random_code = server
        .mock("POST", "/api/official/user/query/random/code")
        .with_body(r#"{"success":true,"randomCode":"123456","timestamp":1700000000000}"#)
        .create_async()
        .await;
    let login = server
        .mock("POST", "/api/official/user/account/login/new")
        .match_body(Matcher::PartialJson(json!({
            "account": "user@example.com",
            "password": "756016da9afe2e4b4c9ac2495c13c67dca5129f636365d1e652c10938b7275f3"
        })))
        .with_body(r#"{"success":true,"token":"tok-e2e"}"#)
        .create_async()
        .await;
    let list = server
        .mock("POST", "/api/file/list/query")
        .match_header("x-access-token", "tok-e2e")
        .match_body(Matcher::PartialJson(json!({"directoryId": "0"})))
        .with_body(
            r#"{"success":true,"userFileVOList":[
                {"id":"11","directoryId":"0","fileName":"Note","isFolder":"Y","size":0},
                {"id":"12","directoryId":"0","fileName":"Document","isFolder":"Y","size":0}
            ]}"#,
        )
        .create_async()
        .await;
    let apply = server
        .mock("POST", "/api/file/upload/apply")
        .match_header("x-access-token", "tok-e2e")
        .match_body(Matcher::Json(json!({
            "directoryId": "12",
            "fileName": "example.pdf",
            "md5": digest,
            "size": content.len()
        })))
        .with_body(
            json!({
                "success": true,
                "url": storage_url,
                "s3Authorization": "AWS4-HMAC-SHA256 Credential=e2e",
                "xamzDate": "20240101T000000Z"
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let transfer = server
        .mock("PUT", "/supernote-bucket/1001/5e1c2d.pdf")
        .match_header("authorization", "AWS4-HMAC-SHA256 Credential=e2e")
        .match_header("x-amz-date", "20240101T000000Z")
        .match_body("%PDF-1.4 example document body")
        .expect(1)
        .create_async()
        .await;
    let finish = server
        .mock("POST", "/api/file/upload/finish")
        .match_body(Matcher::Json(json!({
            "directoryId": "12",
            "fileName": "example.pdf",
            "fileSize": content.len(),
            "innerName": "5e1c2d.pdf",
            "md5": digest
        })))
        .with_body(r#"{"success":true}"#)
        .expect(1)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("example.pdf");
    std::fs::write(&path, &content).unwrap();

    let client = client_for(&server);
    let token = client
        .login("user@example.com", "password")
        .await
        .unwrap()
        .expect("token");
    let folder = client
        .find_entry(&token, None, "Document")
        .await
        .unwrap()
        .expect("Document folder");
    assert!(folder.is_folder());

    let ok = client
        .upload_file(&token, &path, Some(&folder.id))
        .await
        .unwrap();
    assert!(ok);

    random_code.assert_async().await;
    login.assert_async().await;
    list.assert_async().await;
    apply.assert_async().await;
    transfer.assert_async().await;
    finish.assert_async().await;
}

#[tokio::test]
async fn concurrent_uploads_share_one_client() {
    let mut server = Server::new_async().await;
    let _apply = server
        .mock("POST", "/api/file/upload/apply")
        .with_body(r#"{"success":false}"#)
        .expect(2)
        .create_async()
        .await;
    let finish = server
        .mock("POST", "/api/file/upload/finish")
        .with_body(r#"{"success":false}"#)
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let (a, b) = tokio::join!(
        client.upload_bytes("tok-a", b"a".to_vec(), "a.txt", None),
        client.upload_bytes("tok-b", b"b".to_vec(), "b.txt", None),
    );

    assert!(!a.unwrap());
    assert!(!b.unwrap());
    finish.assert_async().await;
}
