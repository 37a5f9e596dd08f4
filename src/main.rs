use clap::Parser;
use hooktuah::adapter::inbound::cli::command::{Cli, ColorChoice};
use hooktuah::adapter::inbound::cli::output::{self, OutputConfig};
use hooktuah::adapter::inbound::cli::dispatch;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match cli.color {
        ColorChoice::Auto => owo_colors::unset_override(),
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    tokio::select! {
        result = dispatch::execute(&cli) => {
            if let Err(e) = result {
                output::error(&e.to_string());
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Interrupted");
            output::warning("Interrupted");
            std::process::exit(130);
        }
    }
}
