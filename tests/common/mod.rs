#![allow(dead_code)]

use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use reelrank::{AppState, build_router, config::Config, db, seed, store::MovieStore};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

pub struct TestApp {
    pub router: Router,
    pub store: MovieStore,
    pub config: Arc<Config>,
    db_path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{suffix}", self.db_path.display()));
        }
    }
}

fn temp_path(prefix: &str, ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    let n = NEXT_DB.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("{prefix}-{}-{nanos}-{n}{ext}", std::process::id()))
}

/// A fresh database seeded with the sample movies, plus a router over it.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_static(PathBuf::from("static")).await
}

pub async fn spawn_app_with_static(static_dir: PathBuf) -> TestApp {
    let db_path = temp_path("reelrank-test", ".sqlite");
    let database_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let db = db::connect_and_migrate(&database_url, 1).await.expect("failed to open test database");
    seed::bootstrap(&db, true).await.expect("failed to seed test database");

    let config = Arc::new(Config {
        addr: "127.0.0.1:0".parse().expect("bad test addr"),
        database_url,
        db_max_connections: 1,
        static_dir,
        reset_on_start: true,
    });
    let store = MovieStore::new(db);
    let state = Arc::new(AppState { config: config.clone(), store: store.clone() });

    TestApp { router: build_router(state), store, config, db_path }
}

pub fn temp_dir(prefix: &str) -> PathBuf {
    let dir = temp_path(prefix, "");
    std::fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).expect("failed to build request")
}

pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("failed to build request")
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}
