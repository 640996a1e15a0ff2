//! Submit/result lifecycle against a mock API server

mod common;

use common::{go_to_panel, press, type_text, INTEGER, ULID, WORD};
use crossterm::event::KeyCode;
use rndline::console::view_models::RequestState;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn received_query(server: &MockServer) -> Vec<Option<String>> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.url.query().map(str::to_string))
        .collect()
}

#[tokio::test]
async fn integer_should_send_min_and_max_in_declaration_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/int"))
        .and(query_param("min", "5"))
        .and(query_param("max", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string("7"))
        .expect(1)
        .mount(&server)
        .await;
    let mut controller = common::controller(&server.uri());

    // Fill max before min
    press(&mut controller, KeyCode::Tab);
    type_text(&mut controller, "10");
    press(&mut controller, KeyCode::BackTab);
    type_text(&mut controller, "5");
    press(&mut controller, KeyCode::Enter);

    assert!(controller.view_model().panel(INTEGER).unwrap().is_pending());
    assert!(controller.wait_for_completion().await.unwrap());

    let panel = controller.view_model().panel(INTEGER).unwrap();
    assert_eq!(panel.result().body(), "7");
    assert_eq!(panel.result().status_code(), Some(200));
    assert_eq!(panel.request_state(), RequestState::Idle);
    assert_eq!(
        received_query(&server).await,
        vec![Some("min=5&max=10".to_string())]
    );
    assert!(common::screen_text(&controller).contains('7'));
}

#[tokio::test]
async fn word_should_send_only_the_set_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/word"))
        .respond_with(ResponseTemplate::new(200).set_body_string("apple pear plum"))
        .mount(&server)
        .await;
    let mut controller = common::controller(&server.uri());

    go_to_panel(&mut controller, WORD);
    press(&mut controller, KeyCode::Tab);
    type_text(&mut controller, "3");
    press(&mut controller, KeyCode::Enter);
    assert!(controller.wait_for_completion().await.unwrap());

    assert_eq!(received_query(&server).await, vec![Some("count=3".to_string())]);
    assert_eq!(
        controller.view_model().panel(WORD).unwrap().result().body(),
        "apple pear plum"
    );
}

#[tokio::test]
async fn endpoint_without_values_should_send_no_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/ulid"))
        .respond_with(ResponseTemplate::new(200).set_body_string("01J9Z3"))
        .mount(&server)
        .await;
    let mut controller = common::controller(&server.uri());

    go_to_panel(&mut controller, ULID);
    press(&mut controller, KeyCode::Enter);
    assert!(controller.wait_for_completion().await.unwrap());

    assert_eq!(received_query(&server).await, vec![None]);
}

#[tokio::test]
async fn error_status_body_should_be_shown_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/int"))
        .respond_with(ResponseTemplate::new(400).set_body_string("min must be less than max"))
        .mount(&server)
        .await;
    let mut controller = common::controller(&server.uri());

    type_text(&mut controller, "9");
    press(&mut controller, KeyCode::Enter);
    assert!(controller.wait_for_completion().await.unwrap());

    let result = controller.view_model().panel(INTEGER).unwrap().result();
    assert_eq!(result.body(), "min must be less than max");
    assert_eq!(result.status_code(), Some(400));
    assert!(!result.is_success());
}

#[tokio::test]
async fn last_completed_response_should_win() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/int"))
        .and(query_param("min", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("first")
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/int"))
        .and(query_param("min", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("second"))
        .mount(&server)
        .await;
    let mut controller = common::controller(&server.uri());

    type_text(&mut controller, "1");
    press(&mut controller, KeyCode::Enter);
    press(&mut controller, KeyCode::Backspace);
    type_text(&mut controller, "2");
    press(&mut controller, KeyCode::Enter);
    assert_eq!(
        controller.view_model().panel(INTEGER).unwrap().request_state(),
        RequestState::Pending { in_flight: 2 }
    );

    assert!(controller.wait_for_completion().await.unwrap());
    assert_eq!(
        controller.view_model().panel(INTEGER).unwrap().result().body(),
        "second"
    );

    assert!(controller.wait_for_completion().await.unwrap());
    let panel = controller.view_model().panel(INTEGER).unwrap();
    assert_eq!(panel.result().body(), "first");
    assert_eq!(panel.requests().last_applied_sequence(), Some(2));
    assert!(!panel.is_pending());
}

#[tokio::test]
async fn submit_should_leave_other_panels_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("42"))
        .mount(&server)
        .await;
    let mut controller = common::controller(&server.uri());

    press(&mut controller, KeyCode::Enter);
    assert!(controller.wait_for_completion().await.unwrap());

    let view_model = controller.view_model();
    assert_eq!(view_model.panel(INTEGER).unwrap().result().body(), "42");
    for panel in view_model.panels().iter().skip(1) {
        assert!(panel.result().is_empty());
        assert!(!panel.is_pending());
        assert!(panel.parameters().iter().all(|p| !p.is_set()));
    }
}

#[tokio::test]
async fn transport_failure_should_keep_result_and_report_status() {
    // Nothing listens on the discard port
    let mut controller = common::controller("http://127.0.0.1:9");

    press(&mut controller, KeyCode::Enter);
    assert!(controller.wait_for_completion().await.unwrap());

    let view_model = controller.view_model();
    let panel = view_model.panel(INTEGER).unwrap();
    assert!(panel.result().is_empty());
    assert!(!panel.is_pending());
    assert!(view_model
        .status_line()
        .status_message()
        .is_some_and(|message| message.starts_with("Request failed:")));
}

#[tokio::test]
async fn long_result_should_page_with_page_keys() {
    let server = MockServer::start().await;
    let body = (1..=40)
        .map(|n| format!("value{n}"))
        .collect::<Vec<_>>()
        .join("\r\n");
    Mock::given(method("GET"))
        .and(path("/v1/int"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
        .mount(&server)
        .await;
    let mut controller = common::controller(&server.uri());

    press(&mut controller, KeyCode::Enter);
    assert!(controller.wait_for_completion().await.unwrap());
    assert!(common::screen_text(&controller).contains("lines 1-15 of 40"));

    press(&mut controller, KeyCode::PageDown);
    let panel = controller.view_model().panel(INTEGER).unwrap();
    assert_eq!(panel.output_scroll(), 15);
    assert_eq!(panel.result().body(), body);
    assert!(common::screen_text(&controller).contains("lines 16-30 of 40"));
    assert!(!common::screen_text(&controller).contains('\r'));

    press(&mut controller, KeyCode::PageUp);
    assert_eq!(
        controller.view_model().panel(INTEGER).unwrap().output_scroll(),
        0
    );
}
