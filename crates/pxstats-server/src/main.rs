//! PXstats — single-binary notice-classification and stats server.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod import;
mod routes;
mod snapshotter;
mod state;

use state::AppState;

fn resolve_data_dir() -> PathBuf {
    std::env::var("PXSTATS_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "--import" | "import" => {
                if args.len() < 3 {
                    eprintln!("Usage: pxstats import <legacy-events.json> [data-dir]");
                    std::process::exit(1);
                }
                let source = PathBuf::from(&args[2]);
                let target = if args.len() > 3 {
                    PathBuf::from(&args[3])
                } else {
                    resolve_data_dir()
                };
                match import::run_import(&source, &target) {
                    Ok(report) => {
                        import::print_report(&report);
                        return Ok(());
                    }
                    Err(e) => {
                        eprintln!("Import failed: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            "--help" | "-h" | "help" => {
                println!("PXstats — notice classification and stats server");
                println!();
                println!("Usage: pxstats [command]");
                println!();
                println!("Commands:");
                println!("  (none)                   Start the server");
                println!("  import <src> [data-dir]  Import a legacy events.json log");
                println!("  help                     Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'pxstats help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let config = pxstats_core::PxStatsConfig::from_env(&data_dir)?;
    let port = config.port;

    // Lookup table and event snapshot
    let dex = pxstats_resolve::Dex::load(&config.data_paths.dex_file);
    let store = pxstats_store::load(&config.data_paths.events_file, config.ring_capacity)
        .map_err(|e| anyhow::anyhow!("Failed to load snapshot: {}", e))?;
    info!("Loaded {} events from snapshot", store.len());

    let engine = pxstats_runtime::ClassifierEngine::new(store, dex, &config);

    // Build application state
    let state = Arc::new(AppState::new(config, engine));

    // Start background snapshot task
    snapshotter::start_snapshot_worker(state.clone());

    // Build router
    let app = routes::build_router(state.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("PXstats server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
