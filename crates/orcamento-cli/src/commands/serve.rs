//! Serve command - expose the budget endpoints over HTTP.

use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use clap::Args;
use console::style;
use serde::Serialize;
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use orcamento_core::api::{self, ApiError, ErrorResponse};
use orcamento_core::models::config::OrcamentoConfig;

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind (default: from config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (default: from config)
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

pub async fn run(args: ServeArgs, config: &OrcamentoConfig) -> anyhow::Result<()> {
    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Budget endpoints listening on {}", addr);
    println!(
        "{} Server running at http://{}",
        style("✓").green(),
        listener.local_addr()?
    );

    axum::serve(listener, router()).await?;

    Ok(())
}

/// Router with both budget endpoints.
pub fn router() -> Router {
    Router::new()
        .route(
            "/api/processar-orcamento",
            post(processar_orcamento).fallback(method_not_allowed),
        )
        .route(
            "/api/gerar-codigo",
            post(gerar_codigo).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

async fn processar_orcamento(body: Bytes) -> Response {
    respond(decode_body(&body).and_then(|value| api::process_budget(&value)))
}

async fn gerar_codigo(body: Bytes) -> Response {
    respond(decode_body(&body).and_then(|value| api::generate_codes(&value)))
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Método não permitido")),
    )
        .into_response()
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Rota não encontrada")),
    )
        .into_response()
}

fn decode_body(body: &[u8]) -> Result<Value, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!("Rejecting request body: {}", e);
        ApiError::InvalidInput
    })
}

fn respond<T: Serialize>(result: Result<T, ApiError>) -> Response {
    match result {
        Ok(body) => Json(body).into_response(),
        Err(err) => {
            let status = StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            if status.is_server_error() {
                error!("Request failed: {}", err);
            } else {
                debug!("Request rejected: {}", err);
            }
            (status, Json(err.body())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    const CART: &str = "35697 HYLO GEL LUB OCUL 10ML\n1\n127,32 0,0\n127,32\n127,32";

    async fn call(method: Method, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_processar_orcamento() {
        let body = json!({ "entrada": CART }).to_string();
        let (status, json) = call(Method::POST, "/api/processar-orcamento", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["medicamentos"][0]["codigo"], "35697");
        assert_eq!(json["medicamentos"][0]["valor_total"], 127.32);
        assert!(json["relatorio"]
            .as_str()
            .unwrap()
            .contains("Valor Total: R$ 127.32\n"));
    }

    #[tokio::test]
    async fn test_gerar_codigo() {
        let body = json!({ "entrada": CART }).to_string();
        let (status, json) = call(Method::POST, "/api/gerar-codigo", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({ "success": true, "codigos": "35697", "quantidade": 1 })
        );
    }

    #[tokio::test]
    async fn test_invalid_entrada() {
        let body = json!({ "entrada": 10 }).to_string();
        let (status, json) = call(Method::POST, "/api/gerar-codigo", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            json!({ "success": false, "message": "Dados de entrada inválidos!" })
        );
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let (status, json) = call(Method::POST, "/api/processar-orcamento", "{entrada").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Dados de entrada inválidos!");
    }

    #[tokio::test]
    async fn test_no_items() {
        let body = json!({ "entrada": "nada aqui" }).to_string();
        let (status, json) = call(Method::POST, "/api/processar-orcamento", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Nenhum medicamento encontrado nos dados!");
    }

    #[tokio::test]
    async fn test_method_not_allowed() {
        let (status, json) = call(Method::GET, "/api/processar-orcamento", Body::empty()).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            json,
            json!({ "success": false, "message": "Método não permitido" })
        );
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, json) = call(Method::POST, "/api/desconhecida", Body::empty()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Rota não encontrada");
    }
}
