//! Landing page, API docs viewer and embedded static assets.

use actix_web::{HttpResponse, web};

const INDEX_HTML: &str = include_str!("web/index.html");
const DOCS_HTML: &str = include_str!("web/docs.html");

/// Files served under `/static/`: name, content type, body.
const ASSETS: &[(&str, &str, &str)] = &[
    (
        "main.js",
        "application/javascript; charset=utf-8",
        include_str!("web/main.js"),
    ),
    (
        "styles.css",
        "text/css; charset=utf-8",
        include_str!("web/styles.css"),
    ),
    (
        "masterblog.json",
        "application/json",
        include_str!("web/masterblog.json"),
    ),
];

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index_page))
        .route("/api/docs", web::get().to(docs_page))
        .route("/api/docs/", web::get().to(docs_page))
        .route("/static/{file}", web::get().to(static_asset));
}

/// GET /
async fn index_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

/// GET /api/docs - Swagger UI over `/static/masterblog.json`
async fn docs_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(DOCS_HTML)
}

/// GET /static/{file}
async fn static_asset(file: web::Path<String>) -> HttpResponse {
    let file = file.into_inner();

    match ASSETS.iter().find(|(name, _, _)| *name == file) {
        Some((_, content_type, body)) => HttpResponse::Ok().content_type(*content_type).body(*body),
        None => {
            tracing::debug!(file = %file, "Unknown static asset");
            HttpResponse::NotFound().finish()
        }
    }
}
