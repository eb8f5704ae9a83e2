use std::{
    fs::{File, OpenOptions},
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use registro_rs::{
    AppState, RecordStore, build_router, get_local_offset, graceful_shutdown, load_seed_csv,
    logging_middleware,
};

/// The web server for the Registro financial record tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The IP address to listen on.
    #[arg(short, long, default_value = "127.0.0.1")]
    address: IpAddr,

    /// The canonical name of the local timezone, e.g. "Europe/Madrid".
    ///
    /// Used to pick the default date for new records.
    #[arg(short, long, default_value = "Etc/UTC")]
    timezone: String,

    /// A CSV file with the header `date,concept,amount,method,type,period` to load instead of
    /// the built-in example records.
    #[arg(long, conflicts_with = "empty")]
    seed_csv: Option<PathBuf>,

    /// Start with no records at all.
    #[arg(long)]
    empty: bool,

    /// The file to write debug logs to.
    #[arg(long, default_value = "debug.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = setup_logging(&args.log_file) {
        eprintln!(
            "Could not open log file {}: {error}",
            args.log_file.display()
        );
        return ExitCode::FAILURE;
    }

    if get_local_offset(&args.timezone).is_none() {
        tracing::error!(
            "Invalid timezone \"{}\", expected a canonical timezone name such as \"Europe/Madrid\"",
            args.timezone
        );
        return ExitCode::FAILURE;
    }

    let record_store = match load_record_store(&args) {
        Ok(record_store) => record_store,
        Err(error) => {
            tracing::error!("Could not load the records: {error}");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(record_store, &args.timezone);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(
        build_router(state).layer(middleware::from_fn(logging_middleware)),
    );

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    let addr = SocketAddr::new(args.address, args.port);
    tracing::info!("HTTP server listening on http://{}", addr);

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn load_record_store(args: &Args) -> Result<RecordStore, Box<dyn std::error::Error>> {
    if args.empty {
        tracing::info!("Starting with an empty record store");
        return Ok(RecordStore::default());
    }

    match &args.seed_csv {
        Some(path) => {
            tracing::info!("Loading records from {}", path.display());
            let file = File::open(path)?;
            Ok(load_seed_csv(file)?)
        }
        None => Ok(RecordStore::seeded()),
    }
}

fn setup_logging(log_file: &Path) -> std::io::Result<()> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new().create(true).append(true).open(log_file)?;

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();

    Ok(())
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
