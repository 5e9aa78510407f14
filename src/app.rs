// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use anywho::Error;
use axum::{
    Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use rust_embed::RustEmbed;
use serde::Deserialize;
use tokio::signal;
use tower_http::trace::TraceLayer;

use crate::core::{
    api::PokemonFetcher,
    query::{LookupOutcome, QueryHandler},
    sinks::PageRegions,
};

mod page;

/// Stylesheet and any other static files of the page
#[derive(RustEmbed)]
#[folder = "res/web/"]
struct WebAssets;

#[derive(Clone)]
pub struct AppState {
    fetcher: Arc<dyn PokemonFetcher>,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn PokemonFetcher>) -> Self {
        Self { fetcher }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/search", get(search))
        .route("/static/{file}", get(static_file))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serves the search page until ctrl-c or SIGTERM
pub async fn serve(bind_address: &str, state: AppState) -> Result<(), Error> {
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(%local_addr, "search page listening");
    println!("StarrySearch running on http://{local_addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("search page stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

fn page_response(rendered: askama::Result<String>) -> Response {
    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(%err, "could not render the search page");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

/// GET / - Empty search page
async fn index() -> Response {
    page_response(page::render_page("", &PageRegions::default()))
}

/// GET /search?q= - Runs one lookup and renders the page with its outcome
async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let regions = Arc::new(PageRegions::default());
    let handler = QueryHandler::new(state.fetcher.clone(), regions.clone(), regions.clone());

    if let LookupOutcome::Failed(error) = handler.submit(&params.q).await {
        tracing::debug!(%error, "search page shows an error");
    }

    page_response(page::render_page(&params.q, &regions))
}

/// GET /static/:file - Embedded web assets
async fn static_file(Path(file): Path<String>) -> Response {
    match WebAssets::get(&file) {
        Some(asset) => (
            [(header::CONTENT_TYPE, asset.metadata.mimetype())],
            asset.data.into_owned(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
