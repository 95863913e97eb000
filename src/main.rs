use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};

use investor_brief::server::{BriefServer, BriefService};
use investor_brief::{
    BriefError, BriefResult, JsonFileProjectStore, ProjectStore, RestProjectStore, ServerConfig,
    StoreSource,
};

fn open_store(config: &ServerConfig) -> BriefResult<Arc<dyn ProjectStore>> {
    match config.store_source()? {
        StoreSource::Rest { url, api_key } => {
            info!("Reading projects from {}", url);
            Ok(Arc::new(RestProjectStore::new(url, api_key, config.timeout())?))
        }
        StoreSource::File(path) => {
            let store = JsonFileProjectStore::load(&path)?;
            info!("Loaded {} project(s) from {}", store.len(), path.display());
            Ok(Arc::new(store))
        }
    }
}

fn run(config: ServerConfig) -> BriefResult<()> {
    let store = open_store(&config)?;
    let service = BriefService::new(store, config.brief_options());
    let server = BriefServer::bind(&config.bind, service, config.worker_count())?;

    let shutdown = server.shutdown_handle();
    ctrlc::set_handler(move || {
        info!("Shutting down");
        shutdown.shutdown();
    })
    .map_err(|err| BriefError::Config(format!("cannot install Ctrl-C handler: {}", err)))?;

    server.run()
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(ServerConfig::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
