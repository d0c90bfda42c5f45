use chrono::NaiveDate;
use invoflow_cli::enums::request_status::RequestStatus;
use invoflow_cli::errors::InvoflowError;
use invoflow_cli::services::request_service::RequestService;
use invoflow_cli::state::insights_store::InsightsStore;
use invoflow_cli::state::request_store::RequestListStore;
use invoflow_cli::structs::date_range::DateRange;
use invoflow_cli::structs::request_filters::RequestFilters;
use invoflow_cli::structs::status_update::StatusUpdateInput;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{client_for, paginated, request_json, spawn_server};

#[tokio::test]
async fn list_sends_pagination_and_filter_query_params() {
    let server = spawn_server().await;
    Mock::given(method("GET"))
        .and(path("/requests/"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "50"))
        .and(query_param("status", "Pending"))
        .and(query_param("start", "2024-06-09"))
        .and(query_param("end", "2024-06-12"))
        .and(query_param("category_id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated(vec![], 2, 50, 0)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let service = RequestService::new(&client);
    let range = DateRange {
        start: NaiveDate::from_ymd_opt(2024, 6, 9),
        end: NaiveDate::from_ymd_opt(2024, 6, 12),
    };

    let result = service.list_pending(2, 50, range, Some(3)).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn pagination_is_taken_verbatim_from_the_response() {
    let server = spawn_server().await;
    let items = vec![request_json(1, "Pending"), request_json(2, "Approved")];
    Mock::given(method("GET"))
        .and(path("/requests/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated(items, 3, 20, 147)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let service = RequestService::new(&client);

    let page = service.list(3, 20, &RequestFilters::default()).await.unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.page, 3);
    assert_eq!(page.page_size, 20);
    assert_eq!(page.total, 147);
}

#[tokio::test]
async fn insights_decodes_the_summary_counters() {
    let server = spawn_server().await;
    Mock::given(method("GET"))
        .and(path("/requests/insights/summary"))
        .and(query_param("start", "2024-06-01"))
        .and(query_param("end", "2024-06-30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 5,
            "approved": 2,
            "rejected": 1,
            "pending": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let service = RequestService::new(&client);
    let range = DateRange {
        start: NaiveDate::from_ymd_opt(2024, 6, 1),
        end: NaiveDate::from_ymd_opt(2024, 6, 30),
    };

    let insights = service.insights(range).await.unwrap();
    assert_eq!(insights.total, 5);
    assert_eq!(insights.approved, 2);
    assert_eq!(insights.rejected, 1);
    assert_eq!(insights.pending, 2);
}

#[tokio::test]
async fn insights_counts_agree_with_the_request_list_for_the_same_window() {
    let server = spawn_server().await;
    let items = vec![
        request_json(1, "Approved"),
        request_json(2, "Approved"),
        request_json(3, "Rejected"),
        request_json(4, "Pending"),
        request_json(5, "Pending"),
    ];
    Mock::given(method("GET"))
        .and(path("/requests/"))
        .and(query_param("start", "2024-06-01"))
        .and(query_param("end", "2024-06-30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated(items, 1, 20, 5)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/requests/insights/summary"))
        .and(query_param("start", "2024-06-01"))
        .and(query_param("end", "2024-06-30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 5,
            "approved": 2,
            "rejected": 1,
            "pending": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let range = DateRange {
        start: NaiveDate::from_ymd_opt(2024, 6, 1),
        end: NaiveDate::from_ymd_opt(2024, 6, 30),
    };
    let filters = RequestFilters::default().with_range(range);

    // Same window, loaded concurrently the way the dashboard does.
    let mut requests = RequestListStore::new(&client);
    let mut insights = InsightsStore::new(&client);
    futures::join!(
        requests.load(None, None, Some(filters)),
        insights.load(Some(range)),
    );

    let summary = insights.insights().unwrap();
    let count = |status: RequestStatus| {
        requests
            .items()
            .iter()
            .filter(|r| RequestStatus::parse(&r.current_status) == Some(status))
            .count() as u64
    };
    assert_eq!(summary.total, requests.items().len() as u64);
    assert_eq!(summary.approved, count(RequestStatus::Approved));
    assert_eq!(summary.rejected, count(RequestStatus::Rejected));
    assert_eq!(summary.pending, count(RequestStatus::Pending));
}

#[tokio::test]
async fn unbounded_insights_omits_both_date_params() {
    let server = spawn_server().await;
    Mock::given(method("GET"))
        .and(path("/requests/insights/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 0, "approved": 0, "rejected": 0, "pending": 0
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let service = RequestService::new(&client);

    assert!(service.insights(DateRange::unbounded()).await.is_ok());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().unwrap_or("").is_empty());
}

#[tokio::test]
async fn update_status_normalizes_casing_and_stamps_updated_by() {
    let server = spawn_server().await;
    Mock::given(method("PATCH"))
        .and(path("/requests/7/status"))
        .and(body_json(json!({
            "status": "Approved",
            "comments": "within budget",
            "updated_by": "ADMIN"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(request_json(7, "Approved")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let service = RequestService::new(&client);
    let input = StatusUpdateInput {
        status: "APPROVED".to_string(),
        comments: "within budget".to_string(),
        approved_amount: None,
    };

    let updated = service.update_status(7, &input).await.unwrap();
    assert_eq!(updated.current_status, "Approved");
}

#[tokio::test]
async fn update_status_carries_approved_amount_when_set() {
    let server = spawn_server().await;
    Mock::given(method("PATCH"))
        .and(path("/requests/9/status"))
        .and(body_json(json!({
            "status": "Approved",
            "comments": "partial approval",
            "approved_amount": 80.0,
            "updated_by": "ADMIN"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(request_json(9, "Approved")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let service = RequestService::new(&client);
    let input = StatusUpdateInput {
        status: "approved".to_string(),
        comments: "partial approval".to_string(),
        approved_amount: Some(80.0),
    };

    assert!(service.update_status(9, &input).await.is_ok());
}

#[tokio::test]
async fn invalid_status_update_never_reaches_the_network() {
    let server = spawn_server().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let service = RequestService::new(&client);
    let input = StatusUpdateInput {
        status: "done".to_string(),
        comments: "".to_string(),
        approved_amount: None,
    };

    let error = service.update_status(7, &input).await.unwrap_err();
    assert!(matches!(error, InvoflowError::ValidationError { .. }));
}

#[tokio::test]
async fn server_error_bodies_surface_verbatim() {
    let server = spawn_server().await;
    Mock::given(method("GET"))
        .and(path("/requests/42"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let service = RequestService::new(&client);

    let error = service.get(42).await.unwrap_err();
    assert_eq!(error.status_code(), Some(500));
    assert!(error.user_message().contains("database unavailable"));
}

#[tokio::test]
async fn export_downloads_raw_bytes() {
    let server = spawn_server().await;
    let body = b"PK\x03\x04fake-xlsx".to_vec();
    Mock::given(method("GET"))
        .and(path("/requests/export"))
        .and(query_param("status", "Approved"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let service = RequestService::new(&client);
    let filters = RequestFilters::default().with_status(Some(RequestStatus::Approved));

    let bytes = service.export(&filters).await.unwrap();
    assert_eq!(bytes, body);
}
