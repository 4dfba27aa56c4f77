use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use warp::Filter;

use crate::config::{ServerParams, SERVER_PARAMS};
use crate::routes::static_routes;

mod config;
mod routes;

#[tokio::main(worker_threads = 2)]
async fn main() {
    let with_ansi = cfg!(target_os = "macos");

    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_ansi(with_ansi)
        .with_max_level(Level::INFO)
        .with_thread_ids(true)
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("tracing: {err}");
    }

    let params = match ServerParams::from_json(SERVER_PARAMS) {
        Ok(params) => params,
        Err(err) => {
            tracing::error!("env.json: {:?}", err);
            return;
        }
    };
    tracing::info!("serving {} on {}", params.static_dir.display(), params.addr());

    warp::serve(static_routes(&params.static_dir).with(warp::trace::request()))
        .run(params.addr())
        .await;
}
