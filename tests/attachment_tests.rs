//! End-to-end tests for the attachment upload protocol.

use serde_json::json;
use sharepoint_api::{AttachmentOutcome, ListClient, SharePointConfig, SiteUrl};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DIGEST: &str = "0xATTACH,30 Aug 2026 12:00:00 -0000";

fn config_for(server: &MockServer) -> SharePointConfig {
    SharePointConfig::builder()
        .site_url(SiteUrl::new(server.uri()).unwrap())
        .default_list("Tasks")
        .build()
        .unwrap()
}

async fn mount_contextinfo(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/_api/contextinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "d": { "GetContextWebInformation": { "FormDigestValue": DIGEST } }
        })))
        .mount(server)
        .await;
}

const PROBE_PATH: &str = "/_api/web/lists/getbytitle('Tasks')/items(4)/AttachmentFiles('report.pdf')";
const ADD_PATH: &str =
    "/_api/web/lists/getbytitle('Tasks')/items(4)/AttachmentFiles/add(FileName='report.pdf')";

#[tokio::test]
async fn test_upload_when_attachment_does_not_exist() {
    let mock_server = MockServer::start().await;
    mount_contextinfo(&mock_server).await;

    // Probe answers 404: nothing to delete
    Mock::given(method("GET"))
        .and(path(PROBE_PATH))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(ADD_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "d": { "FileName": "report.pdf" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ListClient::new(config_for(&mock_server));
    let outcome = client
        .add_attachment(4, "report.pdf", b"content".to_vec(), false, None)
        .await
        .unwrap();

    assert!(outcome.was_uploaded());
    match outcome {
        AttachmentOutcome::Uploaded(d) => assert_eq!(d["FileName"], "report.pdf"),
        AttachmentOutcome::SkippedExisting => panic!("upload should not have been skipped"),
    }
}

#[tokio::test]
async fn test_existing_attachment_without_overwrite_is_skipped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PROBE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "d": { "FileName": "report.pdf" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Neither a delete nor an add may be issued
    Mock::given(method("DELETE"))
        .and(path(PROBE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path(ADD_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = ListClient::new(config_for(&mock_server));
    let outcome = client
        .add_attachment(4, "report.pdf", b"content".to_vec(), false, None)
        .await
        .unwrap();

    assert_eq!(outcome, AttachmentOutcome::SkippedExisting);
}

#[tokio::test]
async fn test_overwrite_deletes_before_adding() {
    let mock_server = MockServer::start().await;
    mount_contextinfo(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(PROBE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "d": { "FileName": "report.pdf" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(PROBE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(ADD_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "d": { "FileName": "report.pdf" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ListClient::new(config_for(&mock_server));
    let outcome = client
        .add_attachment(4, "report.pdf", b"new content".to_vec(), true, None)
        .await
        .unwrap();

    assert!(outcome.was_uploaded());

    // The delete must be fully acknowledged before the add goes out
    let requests = mock_server.received_requests().await.unwrap();
    let delete_position = requests
        .iter()
        .position(|r| r.method.to_string() == "DELETE")
        .expect("delete request not recorded");
    let add_position = requests
        .iter()
        .position(|r| r.url.path().ends_with("/AttachmentFiles/add(FileName='report.pdf')"))
        .expect("add request not recorded");
    assert!(delete_position < add_position);
}

#[tokio::test]
async fn test_remove_attachment_sends_native_delete_with_if_match() {
    let mock_server = MockServer::start().await;
    mount_contextinfo(&mock_server).await;

    Mock::given(method("DELETE"))
        .and(path(PROBE_PATH))
        .and(wiremock::matchers::header("IF-MATCH", "*"))
        // wiremock splits received header values on commas, so the
        // expectation must be split the same way.
        .and(wiremock::matchers::headers(
            "X-RequestDigest",
            DIGEST.split(',').map(str::trim).collect(),
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ListClient::new(config_for(&mock_server));
    client.remove_attachment(4, "report.pdf", None).await.unwrap();
}

#[tokio::test]
async fn test_add_attachment_to_folder() {
    let mock_server = MockServer::start().await;
    mount_contextinfo(&mock_server).await;

    Mock::given(method("POST"))
        .and(path(
            "/_api/web/GetFolderByServerRelativeUrl('/sites/dev/Documents')/Files/add(url='a.txt',overwrite=true)",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "d": { "Name": "a.txt" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ListClient::new(config_for(&mock_server));
    let uploaded = client
        .add_attachment_to_folder("/sites/dev/Documents", "a.txt", b"hello".to_vec())
        .await
        .unwrap();

    assert_eq!(uploaded["Name"], "a.txt");
}

#[tokio::test]
async fn test_failed_add_surfaces_as_error_not_outcome() {
    let mock_server = MockServer::start().await;
    mount_contextinfo(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(PROBE_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(ADD_PATH))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": { "message": { "value": "The file is locked for editing." } }
        })))
        .mount(&mock_server)
        .await;

    let client = ListClient::new(config_for(&mock_server));
    let error = client
        .add_attachment(4, "report.pdf", b"content".to_vec(), false, None)
        .await
        .unwrap_err();

    assert!(error.to_string().contains("locked for editing"));
}
