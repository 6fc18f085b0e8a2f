//! Single binary web server: landing page from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), DATA_FILE (ranking document path).

use actix_files::Files;
use actix_web::{
    get, post,
    web::{self, Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::sync::RwLock;
use team_ranking_web::{apply_match, FileStore, MatchInput, StoreError};

/// Shared state: the document store behind a single-writer lock. Mutating
/// handlers hold the write lock across the whole load-mutate-save sequence;
/// read handlers share the read lock.
type AppState = Data<RwLock<FileStore>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Import body: the uploaded document under a `data` key.
#[derive(Deserialize)]
struct ImportBody {
    data: serde_json::Value,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "team-ranking-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Map a store failure to a response: a bad import payload is the client's
/// fault, everything else is a server-side problem.
fn store_error_response(e: &StoreError) -> HttpResponse {
    match e {
        StoreError::InvalidImport(_) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
        StoreError::Corrupt(_) | StoreError::Storage(_) => {
            log::error!("store failure: {}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// Full ranking document: all players and the match log.
#[get("/api/data")]
async fn api_get_data(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.load() {
        Ok(doc) => HttpResponse::Ok().json(doc),
        Err(e) => store_error_response(&e),
    }
}

/// Record a match: update player stats and prepend the record to the log.
/// Returns the new record; an invalid roster leaves the document unchanged.
#[post("/api/match")]
async fn api_submit_match(state: AppState, body: Json<MatchInput>) -> HttpResponse {
    let g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut doc = match g.load() {
        Ok(doc) => doc,
        Err(e) => return store_error_response(&e),
    };
    let record = match apply_match(&mut doc, &body) {
        Ok(record) => record,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    };
    if let Err(e) = g.save(&doc) {
        return store_error_response(&e);
    }
    HttpResponse::Ok().json(serde_json::json!({ "ok": true, "match": record }))
}

/// Download the ranking document as a JSON file (exact persisted bytes).
#[get("/api/export")]
async fn api_export(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.export_raw() {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/json")
            .insert_header(("Content-Disposition", "attachment; filename=\"data.json\""))
            .body(bytes),
        Err(e) => store_error_response(&e),
    }
}

/// Replace the whole document with an uploaded one (no merge).
#[post("/api/import")]
async fn api_import(state: AppState, body: Json<ImportBody>) -> HttpResponse {
    let g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.import_raw(body.into_inner().data) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
        Err(e) => store_error_response(&e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_file() -> String {
    "data.json".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_file = std::env::var("DATA_FILE").unwrap_or_else(|_| default_data_file());
    let bind = (host.as_str(), port);

    // Open (or initialize) the document up front: a corrupt file should stop
    // the server at startup, not surface on the first request.
    let store = FileStore::new(&data_file);
    match store.load() {
        Ok(doc) => log::info!(
            "Ranking document at {} ({} players, {} matches)",
            data_file,
            doc.players.len(),
            doc.matches.len()
        ),
        Err(e) => {
            log::error!("Cannot open ranking document {}: {}", data_file, e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                e.to_string(),
            ));
        }
    }
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(store));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_data)
            .service(api_submit_match)
            .service(api_export)
            .service(api_import)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
