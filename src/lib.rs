//! # Idle Tycoon
//!
//! An incremental-game economy engine with a server-side save and
//! leaderboard API.
//!
//! ## Overview
//!
//! The `game` module is the in-process simulation: click/combo earnings,
//! passive production, timed frenzy and golden-bonus modifiers, challenge
//! and achievement progression, and the prestige reset. The `server`
//! module is the trust boundary: it validates incoming save payloads
//! against the previously stored record before persisting them, and ranks
//! the persisted records into a leaderboard.
//!
//! ## Architecture
//!
//! The HTTP API is built on the Rocket web framework with OpenAPI
//! documentation support. The save store is managed through a thread-safe
//! `Arc<Mutex<T>>` wrapper so concurrent saves for the same player
//! serialize against each other.

#[macro_use]
extern crate rocket;

use rocket_okapi::openapi_get_routes;
use rocket_okapi::swagger_ui::{make_swagger_ui, SwaggerUIConfig};

pub mod config;
pub mod game;
pub mod identity;
pub mod server;
pub mod status_messages;
pub mod time_events;

// Re-exports for tests and embedding callers.
pub use game::GameSession;
pub use server::SaveStore;

/// Initializes and configures the Rocket web server with all routes and
/// OpenAPI documentation.
///
/// # Example
///
/// ```no_run
/// use idle_tycoon::rocket_initialize;
///
/// #[rocket::main]
/// async fn main() {
///     rocket_initialize().launch().await.expect("Failed to launch rocket");
/// }
/// ```
pub fn rocket_initialize() -> rocket::Rocket<rocket::Build> {
    use crate::server::endpoints::okapi_add_operation_for_delete_save_;
    use crate::server::endpoints::okapi_add_operation_for_get_leaderboard_;
    use crate::server::endpoints::okapi_add_operation_for_load_game_;
    use crate::server::endpoints::okapi_add_operation_for_save_game_;
    use crate::server::endpoints::{delete_save, get_leaderboard, load_game, save_game};

    let _ = env_logger::try_init();

    use rocket::fairing::AdHoc;

    let review = match std::env::var("REVIEW_LOG_FILE") {
        Ok(path) => {
            match server::review_log::ReviewFileWriter::new(std::path::PathBuf::from(&path)) {
                Ok(writer) => server::review_log::ReviewLog::with_writer(writer),
                Err(e) => {
                    log::error!("failed to open review log {path:?}: {e}");
                    server::review_log::ReviewLog::new()
                }
            }
        }
        Err(_) => server::review_log::ReviewLog::new(),
    };
    let store = std::sync::Arc::new(rocket::futures::lock::Mutex::new(SaveStore::with_config(
        config::ValidatorConfig::default(),
        review,
    )));

    rocket::build()
        .mount(
            "/",
            openapi_get_routes![save_game, load_game, get_leaderboard, delete_save],
        )
        .mount("/swagger", make_swagger_ui(&get_docs()))
        .manage(store.clone())
        .attach(AdHoc::on_liftoff("reviewlog-shutdown", |rocket| {
            Box::pin(async move {
                // When the process receives SIGINT/SIGTERM (or ctrl-c), flush
                // the review log writer.
                if let Some(store_state) = rocket
                    .state::<std::sync::Arc<rocket::futures::lock::Mutex<SaveStore>>>()
                    .cloned()
                {
                    rocket::tokio::spawn(async move {
                        #[cfg(unix)]
                        {
                            use rocket::tokio::signal::unix::{signal, SignalKind};
                            let mut sigterm = signal(SignalKind::terminate())
                                .expect("failed to set SIGTERM handler");
                            let mut sigint = signal(SignalKind::interrupt())
                                .expect("failed to set SIGINT handler");
                            rocket::tokio::select! {
                                _ = sigterm.recv() => {},
                                _ = sigint.recv() => {},
                            }
                        }
                        #[cfg(not(unix))]
                        {
                            let _ = rocket::tokio::signal::ctrl_c().await;
                        }

                        let store = store_state.lock().await;
                        store.shutdown();
                    });
                }
            })
        }))
}

fn get_docs() -> SwaggerUIConfig {
    SwaggerUIConfig {
        url: "/openapi.json".to_string(),
        ..Default::default()
    }
}
