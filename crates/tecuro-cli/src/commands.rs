use anyhow::Result;
use std::future::Future;
use tecuro_runtime::{Config, DataSource};
use tracing::debug;

use super::args::{Cli, Commands};
use super::handlers;
use super::handlers::browse::BrowseRequest;
use crate::logging;
use crate::presentation::ConsoleRenderer;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(data_root) = cli.data_root {
        config = config.with_data_root(data_root);
    }
    debug!(data_root = %config.data_root, "configuration loaded");

    let renderer = ConsoleRenderer::new(cli.format);

    match cli.command {
        Commands::Browse {
            path,
            query,
            concerns,
            traits,
            sort,
            markup,
        } => {
            let source = DataSource::from_root(&config.data_root)?;
            let request = BrowseRequest {
                path,
                query,
                concerns,
                traits,
                sort,
                markup,
            };
            block_on(handlers::browse::handle(
                &source, &config, request, &renderer,
            ))
        }

        Commands::Featured { kind, limit } => {
            let source = DataSource::from_root(&config.data_root)?;
            block_on(handlers::featured::handle(
                &source, &config, kind, limit, &renderer,
            ))
        }

        Commands::Glossary { query } => {
            let source = DataSource::from_root(&config.data_root)?;
            block_on(handlers::glossary::handle(
                &source, &config, query, &renderer,
            ))
        }

        Commands::Subscribe { email, consent } => {
            handlers::subscribe::handle(email, consent, &renderer)
        }
    }
}

fn block_on<F>(future: F) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}
