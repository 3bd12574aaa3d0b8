use entregas_catalog::{NewProduct, ProductPatch};
use entregas_core::repository::{CourierRepository, DeliveryRepository, OrderRepository, ProductRepository};
use entregas_core::{CoreError, TokenVerifier};
use entregas_order::DeliveryStatus;
use entregas_shared::{Masked, RecordId, TimeWindow};
use entregas_store::app_config::SupabaseConfig;
use entregas_store::{
    StoreCourierRepository, StoreDeliveryRepository, StoreOrderRepository, StoreProductRepository, StoreTokenVerifier,
    SupabaseClient,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SupabaseClient {
    SupabaseClient::new(&SupabaseConfig {
        url: server.uri(),
        key: Masked("test-key".to_string()),
        timeout_seconds: 5,
    })
    .unwrap()
}

fn day() -> TimeWindow {
    TimeWindow::day(chrono_date(2024, 3, 15))
}

fn chrono_date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_courier_deliveries_joined_and_sorted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/entregas"))
        .and(header("apikey", "test-key"))
        .and(header("authorization", "Bearer test-key"))
        .and(query_param("select", "*,pedidos(*,produtos(*),clientes(*))"))
        .and(query_param("entregador_id", "eq.7"))
        .and(query_param("order", "data_criacao.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "status": "pendente", "pedidos": {"id": 10, "produtos": {"nome": "Caneca"}}},
            {"id": 1, "status": "entregue", "pedidos": null}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let repo = StoreDeliveryRepository::new(client_for(&server));
    let rows = repo.list_for_courier("7").await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["pedidos"]["produtos"]["nome"], "Caneca");
}

#[tokio::test]
async fn test_courier_window_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/entregas"))
        .and(query_param("entregador_id", "eq.7"))
        .and(query_param("data_criacao", "gte.2024-03-15T00:00:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "entregador_id": 7, "status": "entregue", "data_criacao": "2024-03-15T09:00:00"},
            {"id": 2, "entregador_id": 7, "status": "em_transito", "data_criacao": "2024-03-15T11:00:00"}
        ])))
        .mount(&server)
        .await;

    let repo = StoreDeliveryRepository::new(client_for(&server));
    let deliveries = repo.list_for_courier_between("7", &day()).await.unwrap();

    assert_eq!(deliveries.len(), 2);
    assert!(deliveries[0].is_delivered());
    assert_eq!(deliveries[1].courier_id, Some(RecordId::Int(7)));
}

#[tokio::test]
async fn test_delivered_update_stamps_completion() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/entregas"))
        .and(query_param("id", "eq.31"))
        .and(header("prefer", "return=representation"))
        .and(body_partial_json(json!({"status": "entregue", "data_entrega": "2024-03-15T18:30:00"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 31, "status": "entregue", "data_entrega": "2024-03-15T18:30:00"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let repo = StoreDeliveryRepository::new(client_for(&server));
    let updated = repo
        .update_status("31", DeliveryStatus::Entregue, Some("2024-03-15T18:30:00".to_string()))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated["status"], "entregue");
}

#[tokio::test]
async fn test_plain_update_sends_status_only() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/entregas"))
        .and(body_json(json!({"status": "coletado"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let repo = StoreDeliveryRepository::new(client_for(&server));
    let updated = repo.update_status("404", DeliveryStatus::Coletado, None).await.unwrap();
    assert!(updated.is_none());
}

#[tokio::test]
async fn test_counts_read_content_range() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/entregas"))
        .and(query_param("status", "eq.pendente"))
        .and(header("prefer", "count=exact"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Range", "0-0/42")
                .set_body_json(json!([{"id": 1}])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/entregas"))
        .and(query_param("data_criacao", "gte.2024-03-15T00:00:00"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Range", "*/0")
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let repo = StoreDeliveryRepository::new(client_for(&server));
    assert_eq!(repo.count_with_status(DeliveryStatus::Pendente).await.unwrap(), 42);
    assert_eq!(repo.count_created_between(&day()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_backend_error_becomes_backend_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/pedidos"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "42703",
            "message": "column pedidos.valor does not exist"
        })))
        .mount(&server)
        .await;

    let repo = StoreOrderRepository::new(client_for(&server));
    let err = repo.list_all_for_seller("3").await.unwrap_err();

    match err {
        CoreError::BackendError(msg) => assert!(msg.contains("column pedidos.valor does not exist"), "{msg}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_seller_orders_parse_missing_values() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/pedidos"))
        .and(query_param("vendedor_id", "eq.3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "vendedor_id": 3, "valor_total": 10.0, "status": "entregue"},
            {"id": 2, "vendedor_id": 3, "status": "pendente"}
        ])))
        .mount(&server)
        .await;

    let repo = StoreOrderRepository::new(client_for(&server));
    let orders = repo.list_all_for_seller("3").await.unwrap();
    let total: f64 = orders.iter().map(|o| o.value()).sum();
    assert_eq!(total, 10.0);
}

#[tokio::test]
async fn test_product_insert_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/produtos"))
        .and(body_json(json!({
            "vendedor_id": 3,
            "nome": "Caneca",
            "descricao": "",
            "preco": 24.9,
            "peso": 0.0,
            "estoque": 0
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            {"id": 50, "vendedor_id": 3, "nome": "Caneca", "descricao": "", "preco": 24.9, "peso": 0, "estoque": 0}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/produtos"))
        .and(query_param("id", "eq.50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 50, "nome": "Caneca", "preco": 24.9}])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/produtos"))
        .and(query_param("id", "eq.51"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let repo = StoreProductRepository::new(client_for(&server));
    let product = NewProduct::from_json(&json!({"vendedor_id": 3, "nome": "Caneca", "preco": 24.9})).unwrap();
    let created = repo.create_product(&product).await.unwrap();
    assert_eq!(created.id, RecordId::Int(50));

    assert!(repo.delete_product("50").await.unwrap());
    assert!(!repo.delete_product("51").await.unwrap());
}

#[tokio::test]
async fn test_product_update_unknown_id() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/produtos"))
        .and(body_json(json!({"estoque": 4})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let repo = StoreProductRepository::new(client_for(&server));
    let patch = ProductPatch::from_json(&json!({"estoque": 4})).unwrap();
    assert!(repo.update_product("999", &patch).await.unwrap().is_none());
}

#[tokio::test]
async fn test_active_couriers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/entregadores"))
        .and(query_param("status", "eq.ativo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "nome": "Ana", "status": "ativo", "veiculo": "moto"}
        ])))
        .mount(&server)
        .await;

    let repo = StoreCourierRepository::new(client_for(&server));
    let couriers = repo.list_active().await.unwrap();
    assert_eq!(couriers.len(), 1);
    assert_eq!(couriers[0].name, "Ana");
}

#[tokio::test]
async fn test_courier_with_null_name_still_listed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/entregadores"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "nome": null, "status": "ativo"},
            {"id": 2, "nome": "Bia", "telefone": null, "status": "ativo"}
        ])))
        .mount(&server)
        .await;

    let repo = StoreCourierRepository::new(client_for(&server));
    let couriers = repo.list_active().await.unwrap();

    assert_eq!(couriers.len(), 2);
    assert_eq!(couriers[0].name, "");
    assert_eq!(
        serde_json::to_value(&couriers[1]).unwrap(),
        json!({"id": 2, "nome": "Bia", "telefone": null, "status": "ativo"})
    );
}

#[tokio::test]
async fn test_product_rows_keep_backend_columns() {
    let server = MockServer::start().await;
    let row = json!({
        "id": 1,
        "vendedor_id": 3,
        "nome": "Caneca",
        "preco": 2.0,
        "imagem_url": "x.png",
        "categoria": "casa"
    });
    Mock::given(method("GET"))
        .and(path("/rest/v1/produtos"))
        .and(query_param("vendedor_id", "eq.3"))
        .and(query_param("order", "nome.asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([row.clone()])))
        .mount(&server)
        .await;

    let repo = StoreProductRepository::new(client_for(&server));
    let products = repo.list_for_seller("3").await.unwrap();

    assert_eq!(serde_json::to_value(&products[0]).unwrap(), row);
}

#[tokio::test]
async fn test_token_verified_with_auth_service() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("apikey", "test-key"))
        .and(header("authorization", "Bearer user-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "5e0c",
            "email": "ana@example.com",
            "role": "authenticated"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", "Bearer expired"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"msg": "invalid JWT"})))
        .mount(&server)
        .await;

    let verifier = StoreTokenVerifier::new(client_for(&server));

    let user = verifier.verify_token("user-token").await.unwrap().unwrap();
    assert_eq!(user.id, "5e0c");
    assert_eq!(user.email.unwrap().expose(), "ana@example.com");

    assert!(verifier.verify_token("expired").await.unwrap().is_none());
}

#[tokio::test]
async fn test_auth_service_outage_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let verifier = StoreTokenVerifier::new(client_for(&server));
    let err = verifier.verify_token("user-token").await.unwrap_err();
    assert!(matches!(err, CoreError::BackendError(_)));
}
