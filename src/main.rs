use crate::logging::app_config;
use anyhow::Result;
use clap::Parser;
use cli::Cli;
use cli::Command;
use config::Settings;
use instatus::Client;
use instatus::MetricSample;

mod cli;
mod config;
mod instatus;
mod logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // initialize the logger
    log4rs::init_config(app_config("instamet.log", cli.loglevel)?)?;
    log::info!("Starting the application!");

    dotenvy::dotenv().ok();
    let Ok(key) = std::env::var("INSTATUS_KEY") else {
        println!("INSTATUS_KEY, PAGE, or SUBSTRATE_URI is not set");
        std::process::exit(1);
    };

    let settings = Settings::load(&cli.config)?;
    let client = Client::new(&settings.page, &key);

    match cli.command() {
        Command::List { ids } => {
            log::info!("Reading metrics for page: {}", settings.page);
            let metrics = client.get_metrics()?;
            if ids {
                for id in instatus::metric_ids(&metrics) {
                    println!("{id}");
                }
            } else {
                println!("{}", serde_json::to_string_pretty(&metrics)?);
            }
        }
        Command::Push {
            metric,
            value,
            timestamp,
        } => {
            log::info!("Pushing a sample to metric {} on page: {}", metric, settings.page);
            let sample = match timestamp {
                Some(timestamp) => MetricSample { timestamp, value },
                None => MetricSample::now(value),
            };
            client.add_sample(&metric, &sample)?;
        }
    }

    Ok(())
}
