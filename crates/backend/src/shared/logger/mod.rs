use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::shared::config::LoggingConfig;

/// Инициализация tracing: stdout + файл `backend.log` в каталоге логов.
///
/// `RUST_LOG` имеет приоритет над `logging.filter` из конфига.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let log_dir = Path::new(&config.dir);
    std::fs::create_dir_all(log_dir)?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.filter.clone());

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

/// Простой middleware для логирования запросов
///
/// Размер берётся из Content-Length: тело статики не буферизуется.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());
    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis();

    if response.status().is_success() || response.status().is_redirection() {
        tracing::info!(
            "{:>5}ms | {:>12} | {} {:>6} {}",
            elapsed_ms,
            format_size(size),
            status,
            method,
            path
        );
    } else {
        tracing::warn!(
            "{:>5}ms | {:>12} | {} {:>6} {}",
            elapsed_ms,
            format_size(size),
            status,
            method,
            path
        );
    }

    response
}

/// Размер ответа с разделителями тысяч (точками), "-" если неизвестен
fn format_size(size: Option<u64>) -> String {
    let Some(n) = size else {
        return "-".to_string();
    };
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
