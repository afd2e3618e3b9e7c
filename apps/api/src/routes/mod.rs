//! # HTTP Routes
//!
//! Maps requests to service calls and results to status codes.
//!
//! | Method | Path               | Success        |
//! |--------|--------------------|----------------|
//! | POST   | /categorias        | 201 + category |
//! | GET    | /categorias        | 200 + list     |
//! | GET    | /categorias/{id}   | 200 + category |
//! | PUT    | /categorias/{id}   | 200 + category |
//! | DELETE | /categorias/{id}   | 204            |
//! | POST   | /itens             | 201 + item     |
//! | GET    | /itens             | 200 + list     |
//! | GET    | /itens/{id}        | 200 + item     |
//! | PUT    | /itens/{id}        | 200 + item     |
//! | DELETE | /itens/{id}        | 204            |
//! | GET    | /health            | 200 / 503      |

pub mod categories;
pub mod health;
pub mod items;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Assembles every route with request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/categorias",
            get(categories::list).post(categories::create),
        )
        .route(
            "/categorias/{id}",
            get(categories::get)
                .put(categories::update)
                .delete(categories::delete),
        )
        .route("/itens", get(items::list).post(items::create))
        .route(
            "/itens/{id}",
            get(items::get).put(items::update).delete(items::delete),
        )
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Router Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tarefas_db::{Database, DbConfig};
    use tower::ServiceExt;

    const UNUSED_ID: &str = "3f1e5c2a-9b7d-4e8f-a1c3-5d6e7f8a9b0c";

    async fn test_app() -> Router {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        router(AppState::new(db))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, value)
    }

    #[tokio::test]
    async fn test_category_and_item_lifecycle() {
        let app = test_app().await;

        let (status, category) =
            send(&app, Method::POST, "/categorias", Some(json!({ "nome": "Trabalho" }))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(category["nome"], "Trabalho");
        let category_id = category["id"].as_str().unwrap().to_string();

        let (status, error) =
            send(&app, Method::POST, "/categorias", Some(json!({ "nome": "Trabalho" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["status"], 400);
        assert_eq!(error["error"], "Erro de Categoria");

        let (status, item) = send(
            &app,
            Method::POST,
            "/itens",
            Some(json!({ "descricao": "Enviar relatório", "categoriaId": category_id })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(item["concluido"], false);
        assert_eq!(item["categoriaId"], category_id.as_str());
        let item_id = item["id"].as_str().unwrap().to_string();

        let uri = format!("/categorias/{category_id}");
        let (status, error) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error["message"].as_str().unwrap().contains(&category_id));

        let (status, body) = send(&app, Method::DELETE, &format!("/itens/{item_id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let app = test_app().await;

        let (status, error) = send(&app, Method::GET, &format!("/itens/{UNUSED_ID}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error["error"], "Erro de Item");

        let (status, error) =
            send(&app, Method::GET, &format!("/categorias/{UNUSED_ID}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error["error"], "Erro de Categoria");
    }

    #[tokio::test]
    async fn test_malformed_id_is_bad_request() {
        let app = test_app().await;

        let (status, error) = send(&app, Method::GET, "/itens/42", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["error"], "Erro de Validação");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test_app().await;

        let request = Request::builder()
            .method(Method::POST)
            .uri("/categorias")
            .header("content-type", "application/json")
            .body(Body::from("{ nome: "))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let error: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error["error"], "Erro de Validação");
    }

    #[tokio::test]
    async fn test_item_validation_and_missing_category() {
        let app = test_app().await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/itens",
            Some(json!({ "descricao": "Sem categoria" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            Method::POST,
            "/itens",
            Some(json!({ "descricao": "Órfão", "categoriaId": UNUSED_ID })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_items_by_category() {
        let app = test_app().await;

        let (_, work) =
            send(&app, Method::POST, "/categorias", Some(json!({ "nome": "Trabalho" }))).await;
        let (_, home) =
            send(&app, Method::POST, "/categorias", Some(json!({ "nome": "Casa" }))).await;

        for (descricao, category) in [("A", &work), ("B", &home), ("C", &work)] {
            let (status, _) = send(
                &app,
                Method::POST,
                "/itens",
                Some(json!({ "descricao": descricao, "categoriaId": category["id"] })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let uri = format!("/itens?idCategoria={}", work["id"].as_str().unwrap());
        let (status, items) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let descriptions: Vec<_> = items
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["descricao"].as_str().unwrap())
            .collect();
        assert_eq!(descriptions, vec!["A", "C"]);

        let (status, all) = send(&app, Method::GET, "/itens", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all.as_array().unwrap().len(), 3);

        let (status, _) =
            send(&app, Method::GET, &format!("/itens?idCategoria={UNUSED_ID}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_endpoints() {
        let app = test_app().await;

        let (_, category) =
            send(&app, Method::POST, "/categorias", Some(json!({ "nome": "Casa" }))).await;
        let category_uri = format!("/categorias/{}", category["id"].as_str().unwrap());

        let (status, renamed) =
            send(&app, Method::PUT, &category_uri, Some(json!({ "nome": "Lar" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(renamed["nome"], "Lar");

        let (_, item) = send(
            &app,
            Method::POST,
            "/itens",
            Some(json!({
                "descricao": "Lavar louça",
                "dataLimite": "20/03/2025 21:00",
                "categoriaId": category["id"]
            })),
        )
        .await;
        let item_uri = format!("/itens/{}", item["id"].as_str().unwrap());

        let (status, updated) =
            send(&app, Method::PUT, &item_uri, Some(json!({ "concluido": true }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["concluido"], true);
        assert_eq!(updated["descricao"], "Lavar louça");
        assert_eq!(updated["dataLimite"], "20/03/2025 21:00");
        assert_eq!(updated["dataCriacao"], item["dataCriacao"]);
        assert!(updated["dataAtualizacao"].is_string());

        let (status, _) =
            send(&app, Method::PUT, &category_uri, Some(json!({ "nome": "Outro" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
