//! Result dashboard server
//!
//! Serves the filter/sort engine over REST:
//! - Records filtered by search text and category
//! - Table sorting, statistics and topper ranking
//! - Chat relay and subject report links
//!
//! Usage: `cargo run --example dashboard -- [config.yaml]`

use leadger::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("leadger=info,tower_http=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => LeadgerConfig::from_yaml_file(&path)?,
        None => LeadgerConfig::default_config(),
    };

    let settings = DashboardSettings::load(&config.settings.path)?;
    tracing::info!(
        theme = ?settings.theme,
        sidebar_collapsed = settings.sidebar_collapsed,
        "Loaded dashboard settings"
    );

    let bind = config.server.bind.clone();

    println!("🎓 Leadger result dashboard");
    println!("\n🌐 Server running on http://{}", bind);
    println!("\n📚 Routes:");
    println!("    GET    /records?q=&category=&seats=   - Filter records");
    println!("    PUT    /records                       - Replace the ledger");
    println!("    GET    /records/{{id}}                  - Get a record");
    println!("    POST   /table/sort                    - Sort table rows");
    println!("    GET    /stats                         - Result statistics");
    println!("    POST   /chat                          - Ask the assistant");
    println!("    GET    /subjects                      - Subject codes");
    println!("    GET    /subjects/{{code}}/analysis      - Subject analysis");
    println!("    GET    /subjects/{{code}}/report-link   - Subject report URL");
    println!("    GET    /health                        - Health check");

    ServerBuilder::from_config(config)?.serve(&bind).await
}
