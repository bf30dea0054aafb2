use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use spdlog::{info, warn};

use headless_blog::cms::client::ContentClient;
use headless_blog::content::normalizer::static_paths;
use headless_blog::logger::configure_logger;
use headless_blog::server::server_run;

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "headless-blog.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Print the route of every post with a slug, one per line
    Paths,
}

/// Article routes for every post with a slug. Empty when the content server cannot be reached.
async fn article_paths(client: &ContentClient) -> Vec<String> {
    static_paths(&client.fetch_all().await).into_iter()
        .map(|slug| format!("/blog/{}", slug))
        .collect()
}

#[ntex::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config_path.map(PathBuf::from);

    let config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Please run headless-blog --help");
            return Err(err);
        }
    };

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            info!("Starting headless-blog =-=-=-=-=-=-=-=-=-=-=-=-=-=-=-");
            info!("Listening on {}:{}", config.server.address, config.server.port);
            server_run(config).await?;
        }
        Command::Paths => {
            let client = ContentClient::new(&config.content);
            for path in article_paths(&client).await {
                println!("{}", path);
            }
        }
    }

    Ok(())
}
