//! Tests for the outbound mail client against a mocked transactional API.

use histai_functions::email::{MailError, Mailer};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mailer_for(server: &MockServer) -> Mailer {
    Mailer::new(
        format!("{}/v3/mail/send", server.uri()),
        "test-api-key".to_string(),
        "noreply@histai.org".to_string(),
    )
    .expect("mailer builds")
}

#[tokio::test]
async fn sends_an_authenticated_html_mail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/mail/send"))
        .and(header("authorization", "Bearer test-api-key"))
        .and(body_partial_json(serde_json::json!({
            "from": { "email": "noreply@histai.org" },
            "subject": "New HistBench Submissions",
            "personalizations": [{ "to": [{ "email": "curator@histai.org" }] }],
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let mailer = mailer_for(&server);
    mailer
        .send_html(
            "curator@histai.org",
            "New HistBench Submissions",
            "<html><body>digest</body></html>",
        )
        .await
        .expect("mail accepted");
}

#[tokio::test]
async fn surfaces_api_rejections_with_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/mail/send"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad api key"))
        .mount(&server)
        .await;

    let mailer = mailer_for(&server);
    let err = mailer
        .send_html("curator@histai.org", "subject", "<html></html>")
        .await
        .expect_err("rejection surfaces");

    match err {
        MailError::Api { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "bad api key");
        }
        MailError::Transport(_) => panic!("expected an API error"),
    }
}
