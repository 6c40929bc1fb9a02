use artist_gateway::server::{
    config::Config, error::Error, model::app::AppState, router, startup, upstream::UpstreamFeed,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match startup::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_tracing(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let upstream = startup::build_upstream_client(&config)?;
    let listener = startup::bind_listener(&config).await?;

    tracing::info!(
        artist_feed = upstream.feed_url(UpstreamFeed::Artists),
        events_feed = upstream.feed_url(UpstreamFeed::Events),
        "Starting server"
    );

    let app = router::routes().with_state(AppState { upstream });

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
