mod common;

use serde_json::json;

use common::{post, response_body, response_status, test_gateway};
use hippo_gateway::api::handler::route_request;

fn full_submission() -> serde_json::Value {
    json!({
        "firstName": "Priya",
        "lastName": "Nair",
        "email": "priya@example.com",
        "phoneNumber": "9347862547",
        "countryCode": "+91",
        "message": "Interested in the Full Stack program.",
    })
}

#[tokio::test]
async fn valid_submission_is_forwarded_as_markdown() {
    let (gateway, _, notifier) = test_gateway();

    let response = route_request(&post("/submit-contact", &full_submission()), &gateway).await;
    assert_eq!(response_status(&response), 200);
    assert_eq!(
        response_body(&response)["message"],
        json!("Submission successful")
    );

    let markdown = notifier.markdown.lock().unwrap();
    assert_eq!(markdown.len(), 1);
    assert!(markdown[0].contains("*New Contact Form Submission*"));
    assert!(markdown[0].contains("Priya Nair"));
    assert!(markdown[0].contains("*Phone:*"));
    // Reserved MarkdownV2 characters in the payload arrive escaped.
    assert!(markdown[0].contains("priya@example\\.com"));
    assert!(markdown[0].contains("Interested in the Full Stack program\\."));
}

#[tokio::test]
async fn empty_message_is_rejected_before_any_network_call() {
    let (gateway, _, notifier) = test_gateway();

    let mut submission = full_submission();
    submission["message"] = json!("");

    let response = route_request(&post("/submit-contact", &submission), &gateway).await;
    assert_eq!(response_status(&response), 400);
    assert_eq!(
        response_body(&response)["error"],
        json!("Missing required fields (firstName, email, message).")
    );
    assert_eq!(notifier.total_sent(), 0);
}

#[tokio::test]
async fn missing_required_fields_are_rejected() {
    let (gateway, _, notifier) = test_gateway();

    for field in ["firstName", "email"] {
        let mut submission = full_submission();
        submission.as_object_mut().unwrap().remove(field);

        let response = route_request(&post("/submit-contact", &submission), &gateway).await;
        assert_eq!(response_status(&response), 400);
    }

    assert_eq!(notifier.total_sent(), 0);
}

#[tokio::test]
async fn phone_line_is_omitted_when_not_provided() {
    let (gateway, _, notifier) = test_gateway();

    let mut submission = full_submission();
    submission.as_object_mut().unwrap().remove("phoneNumber");
    submission.as_object_mut().unwrap().remove("countryCode");

    let response = route_request(&post("/submit-contact", &submission), &gateway).await;
    assert_eq!(response_status(&response), 200);

    let markdown = notifier.markdown.lock().unwrap();
    assert!(!markdown[0].contains("*Phone:*"));
}
