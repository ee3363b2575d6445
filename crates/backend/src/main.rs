pub mod handlers;
pub mod routes;
pub mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::{ServeDir, ServeFile};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Создаем директорию для логов
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Простой middleware для логирования запросов
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        use chrono::Local;

        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let size = response
            .headers()
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-")
            .to_string();
        let status = response.status().as_u16();
        let duration = start.elapsed();

        // Голубой для 2xx, коричневый для остальных
        let color_code = if (200..300).contains(&status) { "36" } else { "33" };

        println!(
            "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>10} | {} {:>6} {}",
            color_code,
            Local::now().format("%H:%M:%S"),
            duration.as_millis(),
            size,
            status,
            method,
            uri.path()
        );
        tracing::debug!(%method, path = uri.path(), status, "request handled");

        response
    }

    let config = shared::config::load_config()?;

    let catalog_path = shared::config::resolve_path(&config.catalog.path);
    let catalog = shared::catalog::Catalog::load(&catalog_path)?;
    tracing::info!(
        "Catalog loaded from {}: {} products, {} certificates, {} gallery images",
        catalog_path.display(),
        catalog.products().len(),
        catalog.certificates().len(),
        catalog.gallery().len()
    );

    let dist_dir = shared::config::resolve_path(&config.static_files.dist_dir);
    let media_dir = shared::config::resolve_path(&config.static_files.media_dir);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    // Неизвестные пути отдаём index.html: маршрутизацией занимается фронтенд
    let frontend = ServeDir::new(&dist_dir).not_found_service(ServeFile::new(dist_dir.join("index.html")));

    let app = routes::configure_routes(handlers::AppState::new(catalog))
        .nest_service("/media", ServeDir::new(&media_dir))
        .fallback_service(frontend)
        .layer(cors)
        .layer(middleware::from_fn(request_logger));

    let addr = config.socket_addr()?;
    tracing::info!("Listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
