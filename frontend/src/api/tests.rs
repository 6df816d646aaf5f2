#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use crate::state::session::SessionContext;
use crate::test_support::helpers::memory_session;
use serde_json::json;

fn api_client(server: &MockServer, session: &SessionContext) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"), session.clone())
}

fn expense_json(id: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "amount": 120500.0,
        "category": "Food",
        "description": "Grocery shopping",
        "date": "2025-04-12T00:00:00.000Z"
    })
}

#[tokio::test]
async fn authenticated_request_carries_bearer_token() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/expenses");
        then.status(200).json_body(json!([expense_json("e1")]));
    });
    let (session, _storage, _nav) = memory_session(Some("abc"));
    let api = api_client(&server, &session);

    let entries = api.list_entries(Ledger::Expenses).await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "e1");
    let request = server.last_request().unwrap();
    assert_eq!(request.authorization.as_deref(), Some("Bearer abc"));
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn request_without_token_sends_no_authorization_header() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/income");
        then.status(200).json_body(json!({ "data": [] }));
    });
    let (session, _storage, _nav) = memory_session(None);
    let api = api_client(&server, &session);

    api.list_entries(Ledger::Income).await.unwrap();

    assert!(server.last_request().unwrap().authorization.is_none());
}

#[tokio::test]
async fn unauthenticated_request_skips_header_even_with_token() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/register");
        then.status(201).json_body(json!({ "message": "created" }));
    });
    let (session, _storage, _nav) = memory_session(Some("abc"));
    let api = api_client(&server, &session);

    api.register(&RegisterRequest {
        name: "Sari".into(),
        email: "sari@example.com".into(),
        password: "secret1".into(),
        phone_number: None,
    })
    .await
    .unwrap();

    let request = server.last_request().unwrap();
    assert!(request.authorization.is_none());
    assert_eq!(
        request.body,
        Some(json!({ "name": "Sari", "email": "sari@example.com", "password": "secret1" }))
    );
}

#[tokio::test]
async fn login_stores_token_in_session() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(200).json_body(json!({ "data": { "token": "abc" } }));
    });
    let (session, _storage, _nav) = memory_session(None);
    let api = api_client(&server, &session);

    let response = api
        .login(&LoginRequest {
            email: "sari@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.data.token, "abc");
    assert_eq!(session.token().as_deref(), Some("abc"));
}

#[tokio::test]
async fn login_failure_surfaces_api_message_and_keeps_session_empty() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(400)
            .json_body(json!({ "message": "Email atau password salah" }));
    });
    let (session, _storage, _nav) = memory_session(None);
    let api = api_client(&server, &session);

    let err = api
        .login(&LoginRequest {
            email: "sari@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Http {
            status: 400,
            message: "Email atau password salah".into()
        }
    );
    assert!(session.token().is_none());
}

#[tokio::test]
async fn session_expired_response_clears_session_and_redirects() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/expenses/recent");
        then.status(401).json_body(json!({ "message": "Session expired" }));
    });
    let (session, storage, nav) = memory_session(Some("abc"));
    let api = api_client(&server, &session);

    let err = api.recent_expenses().await.unwrap_err();

    assert_eq!(err, ApiError::SessionExpired);
    assert!(storage.is_empty());
    assert_eq!(nav.redirects(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn plain_unauthorized_keeps_session() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/users");
        then.status(403).json_body(json!({ "message": "Admin only" }));
    });
    let (session, _storage, nav) = memory_session(Some("abc"));
    let api = api_client(&server, &session);

    let err = api.list_users().await.unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert!(session.has_token());
    assert!(nav.redirects().is_empty());
}

#[tokio::test]
async fn error_without_json_body_falls_back_to_reason_phrase() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/income/categories");
        then.status(500).empty_body();
    });
    let (session, _storage, _nav) = memory_session(Some("abc"));
    let api = api_client(&server, &session);

    let err = api.list_categories(Ledger::Income).await.unwrap_err();

    assert_eq!(err.to_string(), "Internal Server Error");
}

#[tokio::test]
async fn empty_success_body_is_accepted() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(DELETE).path("/api/expenses/e1");
        then.status(204).empty_body();
    });
    let (session, _storage, _nav) = memory_session(Some("abc"));
    let api = api_client(&server, &session);

    api.delete_entry(Ledger::Expenses, "e1").await.unwrap();
    assert_eq!(server.hits(DELETE, "/api/expenses/e1"), 1);
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/subscription/status");
        then.status(200).json_body(json!(42));
    });
    let (session, _storage, _nav) = memory_session(Some("abc"));
    let api = api_client(&server, &session);

    let err = api.fetch_subscription_status().await.unwrap_err();
    assert_eq!(err.code(), "DECODE_ERROR");
}

#[tokio::test]
async fn profile_with_null_data_is_none() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/profile");
        then.status(200).json_body(json!({ "data": null }));
    });
    let (session, _storage, _nav) = memory_session(Some("abc"));
    let api = api_client(&server, &session);

    assert!(api.fetch_profile().await.unwrap().is_none());
}

#[tokio::test]
async fn ledger_endpoints_use_expected_paths_and_bodies() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/income");
        then.status(201).json_body(json!({ "data": expense_json("i1") }));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/income/i1");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/expenses/categories");
        then.status(200)
            .json_body(json!({ "data": [{ "name": "Food" }, "Rent"] }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/expenses/report/last6months");
        then.status(200)
            .json_body(json!([{ "_id": "2025-03", "total": 1200.0 }]));
    });
    let (session, _storage, _nav) = memory_session(Some("abc"));
    let api = api_client(&server, &session);
    let input = TransactionInput {
        amount: 2500000.0,
        category: "Salary".into(),
        description: "Monthly salary".into(),
        date: "2025-04-10".into(),
    };

    api.create_entry(Ledger::Income, &input).await.unwrap();
    assert_eq!(
        server.last_request().unwrap().body,
        Some(json!({
            "amount": 2500000.0,
            "category": "Salary",
            "description": "Monthly salary",
            "date": "2025-04-10"
        }))
    );
    api.update_entry(Ledger::Income, "i1", &input).await.unwrap();

    let categories = api.list_categories(Ledger::Expenses).await.unwrap();
    assert_eq!(categories, vec!["Food".to_string(), "Rent".to_string()]);

    let report = api
        .expense_report(ReportPeriod::LastSixMonths)
        .await
        .unwrap();
    assert_eq!(report[0].label_text(), "2025-03");
}

#[tokio::test]
async fn payment_and_support_queries_are_encoded() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/payments");
        then.status(200).json_body(json!({
            "success": true,
            "data": [{ "_id": "p1", "status": "pending", "amount": 99000 }],
            "totalPages": 3
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/support/mine");
        then.status(200)
            .json_body(json!({ "success": true, "data": [], "totalPages": 1 }));
    });
    let (session, _storage, _nav) = memory_session(Some("abc"));
    let api = api_client(&server, &session);

    let page = api.list_my_payments(2, 25, Some("pending")).await.unwrap();
    assert_eq!(page.page_count(), 3);
    assert!(page.data[0].is_pending());
    assert_eq!(
        server.last_request().unwrap().query.as_deref(),
        Some("page=2&limit=25&status=pending")
    );

    api.list_my_support_tickets(1, 25, None).await.unwrap();
    assert_eq!(
        server.last_request().unwrap().query.as_deref(),
        Some("page=1&limit=25")
    );

    let pending = api.pending_payments().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(
        server.last_request().unwrap().query.as_deref(),
        Some("status=pending")
    );
}

#[tokio::test]
async fn admin_endpoints_send_expected_payloads() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(PATCH).path("/api/auth/users/u1/role");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/payments/verify");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(PATCH).path("/api/support/t1");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/settings/subscription-duration");
        then.status(200).json_body(json!({ "value": 30 }));
    });
    let (session, _storage, _nav) = memory_session(Some("admin-token"));
    let api = api_client(&server, &session);

    api.update_user_role("u1", "pro").await.unwrap();
    assert_eq!(server.last_request().unwrap().body, Some(json!({ "role": "pro" })));

    api.verify_payment("p1", PaymentDecision::Rejected)
        .await
        .unwrap();
    assert_eq!(
        server.last_request().unwrap().body,
        Some(json!({ "paymentId": "p1", "status": "rejected" }))
    );

    api.update_support_ticket(
        "t1",
        &UpdateSupportTicket {
            status: "resolved".into(),
            response: Some("Done".into()),
        },
    )
    .await
    .unwrap();

    assert_eq!(api.subscription_duration().await.unwrap().value, 30);
    let err = api.set_subscription_duration(0).await.unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn upload_does_not_force_json_content_type() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/payments/upload");
        then.status(201).json_body(json!({ "success": true }));
    });
    let (session, _storage, _nav) = memory_session(Some("abc"));
    let api = api_client(&server, &session);

    let form =
        payments::payment_proof_form("transfer BCA", "proof.png", "image/png", vec![1, 2, 3])
            .unwrap();
    api.upload_payment_proof(form).await.unwrap();

    let request = server.last_request().unwrap();
    assert_eq!(request.authorization.as_deref(), Some("Bearer abc"));
    let content_type = request.content_type.unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));
}

#[tokio::test]
async fn pending_payments_accept_timestamped_documents() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/payments");
        then.status(200).json_body(json!({
            "data": [{
                "_id": "p1",
                "status": "pending",
                "paymentDate": "2025-04-12T08:00:00Z",
                "createdAt": "2025-04-12T08:00:01Z",
                "updatedAt": "2025-04-12T08:00:01Z"
            }]
        }));
    });
    let (session, _storage, _nav) = memory_session(Some("abc"));
    let api = api_client(&server, &session);

    let pending = api.pending_payments().await.unwrap();

    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, "p1");
    assert_eq!(pending[0].shown_date(), Some("2025-04-12T08:00:00Z"));
}
