use invoflow_cli::services::api_client::ApiClient;
use serde_json::{json, Value};
use wiremock::MockServer;

pub async fn spawn_server() -> MockServer {
    MockServer::start().await
}

pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::with_base_urls(vec![server.uri()], None).unwrap()
}

pub fn request_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "user_id": "u-42",
        "total_amount": 120.5,
        "invoice_number": "INV-9",
        "category_name": "TRAVEL",
        "current_status": status,
        "approvaltype": "MANUAL",
        "created_on": "2024-06-01T10:00:00",
        "updated_on": "2024-06-01T10:00:00",
        "created_by": "u-42",
        "updated_by": "u-42"
    })
}

pub fn paginated(items: Vec<Value>, page: u32, page_size: u32, total: u64) -> Value {
    json!({
        "items": items,
        "page": page,
        "page_size": page_size,
        "total": total
    })
}
