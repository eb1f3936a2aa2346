use axum::{middleware, routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::shared::config::Config;
use crate::shared::logger::request_logger;

/// Конфигурация всех роутов приложения
///
/// Всё, кроме `/health`, отдаётся из собранного фронтенда. Неизвестные пути
/// получают `index.html`, чтобы клиентский роутер разобрал `/app` и 404 сам.
pub fn configure_routes(config: &Config) -> Router {
    let spa = ServeDir::new(config.static_files.dist_path())
        .fallback(ServeFile::new(config.static_files.index_path()));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(spa)
        .layer(middleware::from_fn(request_logger))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::{LoggingConfig, ServerConfig, StaticFilesConfig};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    const INDEX_HTML: &str = "<!DOCTYPE html><html><body>shoplist</body></html>";

    fn test_app(dist: &std::path::Path) -> Router {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            static_files: StaticFilesConfig {
                dist_dir: dist.to_string_lossy().into_owned(),
            },
            logging: LoggingConfig::default(),
        };
        configure_routes(&config)
    }

    fn dist_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
        std::fs::write(dir.path().join("frontend.js"), "export default 1;").unwrap();
        dir
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let dist = dist_dir();
        let (status, body) = get_body(test_app(dist.path()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dist = dist_dir();
        let (status, body) = get_body(test_app(dist.path()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX_HTML);
    }

    #[tokio::test]
    async fn test_static_asset() {
        let dist = dist_dir();
        let (status, body) = get_body(test_app(dist.path()), "/frontend.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "export default 1;");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dist = dist_dir();
        for uri in ["/app", "/does/not/exist"] {
            let (status, body) = get_body(test_app(dist.path()), uri).await;
            assert_eq!(status, StatusCode::OK, "uri {}", uri);
            assert_eq!(body, INDEX_HTML);
        }
    }
}
