use anyhow::Result;
use clap::Parser;
use tracing::error;

use i18n_translate::cli::commands::translate::{MissingCredential, TranslateOptions};
use i18n_translate::cli::commands::{load_config, load_translate_config, status, translate};
use i18n_translate::cli::{Args, Command};
use i18n_translate::output::{self, OutputConfig, Verbosity};
use i18n_translate::translation::print_languages;
use i18n_translate::ui::Style;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        verbosity: Verbosity::from_flags(args.verbose, args.quiet),
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
    });

    let result = run(args).await;

    if let Err(err) = &result
        && let Some(missing) = err.downcast_ref::<MissingCredential>()
    {
        error!("{missing}");
        let label = if output::stderr_color() {
            Style::error("Error:")
        } else {
            "Error:".to_string()
        };
        eprintln!("{label} {missing}");
        std::process::exit(exitcode::CONFIG);
    }

    result
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Status) => {
            let config = load_config(&args)?;
            status::print_status(&config)?;
        }
        None => {
            let (config, api_key) = load_translate_config(&args)?;
            let options = TranslateOptions {
                config,
                api_key,
                force: args.force,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
