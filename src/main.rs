use dotenvy::dotenv;

use geolab::logging::init_tracing;
use geolab::router::init_router;
use geolab::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let state = match init_app_state() {
        Ok(state) => state,
        Err(err) => {
            // Weak key material must never reach a running server
            tracing::error!(error = %err, "Refusing to start");
            eprintln!("Fatal: {}", err);
            std::process::exit(1);
        }
    };

    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("Failed to bind 0.0.0.0:3000");
    println!("🚀 Server running on http://localhost:3000");
    axum::serve(listener, app).await.expect("Server error");
}
