use super::load_site;
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{
        Html, IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use chrono::Local;
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use seo_site_core::{Site, parse_site_toml};
use seo_site_generator::html::{html_escape, index_html, not_found_html, page_html};
use seo_site_generator::sitemap::{robots_txt, sitemap_xml};
use seo_site_generator::{path_metadata, render_all, render_request};
use std::{net::SocketAddr, path::PathBuf};
use tokio::sync::broadcast;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

#[derive(Clone)]
struct AppState {
    site_path: PathBuf,
    reload_tx: broadcast::Sender<()>,
}

/// Start preview server with hot reload for local development.
///
/// This command:
/// - Validates and loads site.toml
/// - Resolves every request path at request time (404 page when it does not)
/// - Serves `public/` under `/assets`
/// - Watches for file changes and triggers hot reload
///
/// site.toml is re-read on every request so edits show up without a restart.
///
/// # Arguments
///
/// * `path` - Path to site directory containing site.toml
/// * `port` - Port to serve on (default: 8080)
pub async fn run(path: PathBuf, port: u16) -> Result<()> {
    println!("🌐 Starting preview server...");
    println!("   Site: {}", path.display());

    let site = load_site(&path)?;

    println!("   ✓ Loaded: {}", site.settings.name);
    println!("   ✓ Locations: {}", site.catalog.locations.published().count());
    println!("   ✓ Services: {}", site.catalog.services.published().count());

    // Create broadcast channel for reload events
    let (reload_tx, _) = broadcast::channel::<()>(100);

    let state = AppState {
        site_path: path.clone(),
        reload_tx: reload_tx.clone(),
    };
    let app = router(state);

    // Start file watcher
    let watcher_path = path.clone();
    let watcher_tx = reload_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = watch_files(watcher_path, watcher_tx).await {
            eprintln!("File watcher error: {}", e);
        }
    });

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Try: http://localhost:{}/seo-services/london", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/robots.txt", get(robots_handler))
        .route("/_reload", get(sse_handler))
        .nest_service("/assets", ServeDir::new(state.site_path.join("public")))
        .fallback(page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Watch for file changes and trigger reload
async fn watch_files(path: PathBuf, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    // Watch site directory recursively
    watcher.watch(&path, RecursiveMode::Recursive)?;

    while let Some(event) = rx.recv().await {
        match event.kind {
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) => {
                // Filter out temporary files and hidden files
                if event.paths.iter().any(|p| {
                    let filename = p.file_name().unwrap_or_default().to_string_lossy();
                    !filename.starts_with('.') && !filename.ends_with('~')
                }) {
                    println!("   📝 File changed, reloading...");
                    let _ = reload_tx.send(());
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// SSE endpoint for hot reload
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let mut rx = state.reload_tx.subscribe();

    let stream = async_stream::stream! {
        loop {
            if rx.recv().await.is_ok() {
                yield Ok(Event::default().data("reload"));
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Reload site.toml, or render the parse error as the response
fn current_site(state: &AppState) -> Result<Site, Response> {
    parse_site_toml(state.site_path.join("site.toml")).map_err(|e| {
        warn!(error = %e, "site.toml failed to load");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!(
                r#"<!DOCTYPE html>
<html><head><title>Error</title></head><body>
<h1>Configuration Error</h1>
<pre>{}</pre>
</body></html>"#,
                html_escape(&e.to_string())
            )),
        )
            .into_response()
    })
}

/// Directory page linking every pre-rendered route
async fn index_handler(State(state): State<AppState>) -> Response {
    let site = match current_site(&state) {
        Ok(site) => site,
        Err(response) => return response,
    };

    match render_all(&site) {
        Ok(pages) => Html(index_html(&site, &pages, true)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// Every other path: resolve against the catalog, 404 page on failure
async fn page_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let site = match current_site(&state) {
        Ok(site) => site,
        Err(response) => return response,
    };

    let path = uri.path();
    match render_request(&site, path) {
        Ok(page) => Html(page_html(&site, &page, true)).into_response(),
        Err(e) => {
            debug!(path, error = %e, "no page for path");
            let metadata = path_metadata(&site, path);
            (
                StatusCode::NOT_FOUND,
                Html(not_found_html(&site, &metadata, true)),
            )
                .into_response()
        }
    }
}

async fn sitemap_handler(State(state): State<AppState>) -> Response {
    let site = match current_site(&state) {
        Ok(site) => site,
        Err(response) => return response,
    };

    match render_all(&site) {
        Ok(pages) => {
            let xml = sitemap_xml(
                &site,
                pages.iter().map(|p| p.path.as_str()),
                Local::now().date_naive(),
            );
            ([(header::CONTENT_TYPE, "application/xml")], xml).into_response()
        }
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

async fn robots_handler(State(state): State<AppState>) -> Response {
    match current_site(&state) {
        Ok(site) => robots_txt(&site).into_response(),
        Err(response) => response,
    }
}
