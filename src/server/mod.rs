//! Blog server - JSON post API plus static assets

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use thiserror::Error;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::content::{Post, PostLoader};
use crate::Blog;

/// Server state shared by route handlers
struct ServerState {
    blog: Blog,
}

/// Start the blog server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState { blog: blog.clone() });

    // Anything that is not the API is served from the public directory
    // (the client bundle and post images live there)
    let app = Router::new()
        .route("/api/posts", get(list_posts))
        .fallback_service(
            ServeDir::new(&blog.public_dir).append_index_html_on_directories(true),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `GET /api/posts` - every post, recomputed from disk on each request
///
/// No query parameters, no pagination, no caching between requests. The
/// posts directory being unreadable fails the whole request; there are no
/// partial results.
async fn list_posts(State(state): State<Arc<ServerState>>) -> Result<Json<Vec<Post>>, ApiError> {
    let loader = PostLoader::new(&state.blog);
    let posts = loader.load_posts().await?;
    Ok(Json(posts))
}

/// Error surfaced by API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to load posts: {0}")]
    Ingest(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        let body = serde_json::json!({ "error": self.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
