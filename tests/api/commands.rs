use invoflow_cli::enums::commands::Commands;
use invoflow_cli::enums::duration_filter::DurationFilter;
use invoflow_cli::workers::command_runner::CommandRunner;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{paginated, request_json, spawn_server};

fn runner_for(server: &MockServer) -> CommandRunner {
    CommandRunner::with_base_urls(vec![server.uri()])
}

#[tokio::test]
async fn pending_command_succeeds_when_the_backend_answers() {
    let server = spawn_server().await;
    Mock::given(method("GET"))
        .and(path("/requests/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(paginated(vec![request_json(1, "Pending")], 1, 50, 1)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut runner = runner_for(&server);
    let result = runner
        .run_command(Commands::Pending {
            duration: DurationFilter::All,
            category_id: None,
        })
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn pending_command_exits_nonzero_when_the_fetch_fails() {
    let server = spawn_server().await;
    Mock::given(method("GET"))
        .and(path("/requests/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let mut runner = runner_for(&server);
    let error = runner
        .run_command(Commands::Pending {
            duration: DurationFilter::All,
            category_id: None,
        })
        .await
        .unwrap_err();
    assert_eq!(error.status_code(), Some(500));
}

#[tokio::test]
async fn categories_command_exits_nonzero_when_the_fetch_fails() {
    let server = spawn_server().await;
    Mock::given(method("GET"))
        .and(path("/categories/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let mut runner = runner_for(&server);
    let error = runner
        .run_command(Commands::Categories {
            page: 1,
            page_size: 100,
        })
        .await
        .unwrap_err();
    assert_eq!(error.status_code(), Some(503));
}

#[tokio::test]
async fn dashboard_command_exits_nonzero_when_only_insights_fail() {
    let server = spawn_server().await;
    Mock::given(method("GET"))
        .and(path("/requests/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated(vec![], 1, 20, 0)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/requests/insights/summary"))
        .respond_with(ResponseTemplate::new(500).set_body_string("aggregation failed"))
        .mount(&server)
        .await;

    let mut runner = runner_for(&server);
    let error = runner
        .run_command(Commands::Dashboard {
            duration: DurationFilter::All,
            status: None,
        })
        .await
        .unwrap_err();
    assert_eq!(error.status_code(), Some(500));
}

#[tokio::test]
async fn dashboard_command_succeeds_end_to_end() {
    let server = spawn_server().await;
    Mock::given(method("GET"))
        .and(path("/requests/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(paginated(vec![request_json(1, "Approved")], 1, 20, 1)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/requests/insights/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1, "approved": 1, "rejected": 0, "pending": 0
        })))
        .mount(&server)
        .await;

    let mut runner = runner_for(&server);
    let result = runner
        .run_command(Commands::Dashboard {
            duration: DurationFilter::All,
            status: None,
        })
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn request_detail_errors_keep_their_status_and_recoverability() {
    let server = spawn_server().await;
    Mock::given(method("GET"))
        .and(path("/requests/42"))
        .respond_with(ResponseTemplate::new(404).set_body_string("request not found"))
        .expect(1)
        .mount(&server)
        .await;

    let mut runner = runner_for(&server);
    let error = runner.run_command(Commands::Request { id: 42 }).await.unwrap_err();
    assert_eq!(error.status_code(), Some(404));
    assert!(error.is_recoverable());
}

#[tokio::test]
async fn category_detail_errors_keep_their_status_code() {
    let server = spawn_server().await;
    Mock::given(method("GET"))
        .and(path("/categories/9"))
        .respond_with(ResponseTemplate::new(404).set_body_string("category not found"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/categories/9/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let mut runner = runner_for(&server);
    let error = runner.run_command(Commands::Category { id: 9 }).await.unwrap_err();
    assert_eq!(error.status_code(), Some(404));
}
