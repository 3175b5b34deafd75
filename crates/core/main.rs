#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{process, time::Duration};

mod commands;

use commands::Commands;

use biblioteca::Catalog;

use clap::{Args, Parser};
use eyre::WrapErr;
use log::{error, trace};

fn main() {
    if let Err(err) = try_main() {
        error!("{:#}", err);
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    let Cli {
        command,
        global_opts:
            GlobalOpts {
                base_url,
                timeout,
                json,
                verbosity,
                quiet,
            },
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    // an unset base url is left for the library to report before any request is made
    let base_url = base_url.unwrap_or_default();
    trace!("Using base url '{base_url}'");

    let catalog = Catalog::with_timeout(base_url, timeout.map(Duration::from_secs))
        .wrap_err("Could not set up the HTTP client")?;

    let output = command.execute(&catalog, json)?;
    println!("{output}");
    Ok(())
}

fn setup_errlog(verbosity: usize, quiet: bool) -> eyre::Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 0 } else { verbosity + 1 };

    stderrlog::new()
        .verbosity(verbosity)
        .init()
        .wrap_err("Could not initialise logging")
}

#[derive(Parser)]
#[clap(name = "biblioteca")]
#[clap(about = "Browse the books registered in a Biblioteca API from the terminal")]
#[clap(version, author)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(flatten)]
    global_opts: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// Base URL of the books API, e.g. http://localhost:8000
    #[clap(long, env = "LINKAPI", value_name = "URL", global = true)]
    base_url: Option<String>,

    /// Abort a request after this many seconds, by default requests never time out
    #[clap(long, value_name = "SECS", global = true)]
    timeout: Option<u64>,

    /// Print the books as JSON instead of cards
    #[clap(long, global = true)]
    json: bool,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbosity: u8,

    /// Only log errors, the books are still printed to stdout.
    #[clap(short, long, global = true)]
    quiet: bool,
}
