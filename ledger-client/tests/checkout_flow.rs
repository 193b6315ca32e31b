// ledger-client/tests/checkout_flow.rs
// End-to-end checkout against a fake park backend.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use ledger_client::{
    Actor, Browsing, Checkout, ClientConfig, LedgerError, PaymentMethod, Submission, Ticket,
};
use shared::client::{RejectionBody, TicketPurchaseReceipt, TicketPurchaseRequest, TicketType};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Recorded {
    purchases: Arc<Mutex<Vec<TicketPurchaseRequest>>>,
}

async fn ticket_types() -> Json<Vec<TicketType>> {
    Json(vec![
        TicketType {
            ticket_type_id: 1,
            type_name: "Day Pass".to_string(),
            price: 59.99,
        },
        TicketType {
            ticket_type_id: 2,
            type_name: "Season Pass".to_string(),
            price: 199.0,
        },
    ])
}

async fn record_purchase(
    State(state): State<Recorded>,
    Json(body): Json<TicketPurchaseRequest>,
) -> Json<TicketPurchaseReceipt> {
    state.purchases.lock().unwrap().push(body);
    Json(TicketPurchaseReceipt {
        message: "Purchased".to_string(),
        ticket_id: 42,
    })
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn backend() -> (String, Recorded) {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/ticket/types", get(ticket_types))
        .route("/ticket/purchase", post(record_purchase))
        .with_state(recorded.clone());
    (serve(app).await, recorded)
}

#[tokio::test]
async fn select_pay_submit_confirms_with_backend_id() {
    let (base_url, recorded) = backend().await;
    let client = ClientConfig::new(&base_url).build();

    let browsing = Checkout::<Ticket, Browsing>::begin(&client).await.unwrap();
    assert_eq!(browsing.catalog().len(), 2);

    let mut selected = browsing.select(1).unwrap();
    selected.choose_payment(PaymentMethod::Cash).unwrap();

    match selected.submit(&client, &Actor::customer(7)).await {
        Submission::Confirmed { confirmation, next } => {
            assert!(confirmation.message.contains("#42"));
            assert_eq!(confirmation.transaction_id, 42);
            // back to browsing on the same snapshot
            assert_eq!(next.catalog().len(), 2);
        }
        Submission::Failed { error, .. } => panic!("unexpected failure: {error}"),
    }

    let purchases = recorded.purchases.lock().unwrap();
    assert_eq!(purchases.len(), 1);
    assert_eq!(purchases[0].customer_id, 7);
    assert_eq!(purchases[0].ticket_type_id, 1);
    assert_eq!(purchases[0].total_price, 59.99);
    assert_eq!(purchases[0].payment_method, "cash");
}

#[tokio::test]
async fn submitted_price_comes_from_catalog_snapshot() {
    let (base_url, recorded) = backend().await;
    let client = ClientConfig::new(&base_url).build();

    let selected = Checkout::<Ticket, Browsing>::begin(&client)
        .await
        .unwrap()
        .select(2)
        .unwrap();
    // nothing between selection and submission can change the price
    assert_eq!(selected.intent().unit_price(), 199.0);

    selected.submit(&client, &Actor::customer(3)).await;
    assert_eq!(recorded.purchases.lock().unwrap()[0].total_price, 199.0);
}

#[tokio::test]
async fn rejection_surfaces_backend_message_and_keeps_intent() {
    async fn reject() -> (StatusCode, Json<RejectionBody>) {
        (
            StatusCode::BAD_REQUEST,
            Json(RejectionBody {
                message: Some("Sold out".to_string()),
            }),
        )
    }
    let app = Router::new()
        .route("/ticket/types", get(ticket_types))
        .route("/ticket/purchase", post(reject));
    let base_url = serve(app).await;
    let client = ClientConfig::new(&base_url).build();

    let selected = Checkout::<Ticket, Browsing>::begin(&client)
        .await
        .unwrap()
        .select(1)
        .unwrap();
    match selected.submit(&client, &Actor::customer(7)).await {
        Submission::Failed { error, retry } => {
            // verbatim backend message
            assert_eq!(error.to_string(), "Sold out");
            assert!(matches!(error, LedgerError::SubmissionRejected(_)));
            // retry without reselecting
            assert_eq!(retry.intent().item_id(), 1);
            assert_eq!(retry.intent().unit_price(), 59.99);
        }
        Submission::Confirmed { .. } => panic!("backend rejected, must not confirm"),
    }
}

#[tokio::test]
async fn transport_failure_is_a_generic_retry_error() {
    let (base_url, _) = backend().await;
    let client = ClientConfig::new(&base_url).build();
    let selected = Checkout::<Ticket, Browsing>::begin(&client)
        .await
        .unwrap()
        .select(1)
        .unwrap();

    // submit against a dead port
    let dead = ClientConfig::new("http://127.0.0.1:1")
        .with_timeout(2)
        .build();
    match selected.submit(&dead, &Actor::customer(7)).await {
        Submission::Failed { error, retry } => {
            assert!(matches!(error, LedgerError::SubmissionNetworkError(_)));
            assert_eq!(retry.intent().item_id(), 1);
        }
        Submission::Confirmed { .. } => panic!("no backend to confirm against"),
    }
}

#[tokio::test]
async fn unauthenticated_submit_never_reaches_backend() {
    let (base_url, recorded) = backend().await;
    let client = ClientConfig::new(&base_url).build();

    let selected = Checkout::<Ticket, Browsing>::begin(&client)
        .await
        .unwrap()
        .select(1)
        .unwrap();
    match selected.submit(&client, &Actor::guest()).await {
        Submission::Failed { error, .. } => {
            assert!(matches!(error, LedgerError::NotAuthenticated))
        }
        Submission::Confirmed { .. } => panic!("guest must not purchase"),
    }
    assert!(recorded.purchases.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_catalog_disables_checkout() {
    async fn broken() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
    let app = Router::new().route("/ticket/types", get(broken));
    let base_url = serve(app).await;
    let client = ClientConfig::new(&base_url).build();

    let err = Checkout::<Ticket, Browsing>::begin(&client)
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::CatalogUnavailable(_)));
}
