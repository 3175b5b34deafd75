use biblioteca::{
    display::{Card, Shelf},
    Catalog, Client, ErrorKind,
};

use clap::Subcommand;
use eyre::WrapErr;
use log::{info, trace};

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// List every book registered in the catalog
    List,

    /// Show a single book using its id
    #[clap(arg_required_else_help = true)]
    Show {
        /// The id of the book to show
        id: String,
    },
}

impl Commands {
    pub fn execute<C: Client>(self, catalog: &Catalog<C>, json: bool) -> eyre::Result<String> {
        match self {
            Commands::List => {
                let books = catalog.books().map_err(explain)?;
                info!("Loaded {} books", books.len());

                if json {
                    serde_json::to_string_pretty(&books).wrap_err("Could not write books as JSON")
                } else {
                    Ok(Shelf::new(&books).to_string())
                }
            }
            Commands::Show { id } => {
                trace!("show subcommand called with the id of '{id}'");
                let book = catalog.book(&id).map_err(explain)?;

                if json {
                    serde_json::to_string_pretty(&book).wrap_err("Could not write book as JSON")
                } else {
                    Ok(Card::new(&book).to_string())
                }
            }
        }
    }
}

fn explain(err: biblioteca::Error) -> eyre::Report {
    let context = match err.kind() {
        ErrorKind::Config => {
            "Missing configuration, pass --base-url or set the LINKAPI environment variable"
        }
        ErrorKind::Backend => "The books API did not accept the request",
        ErrorKind::Parse => "The books API answered with something other than books",
        ErrorKind::Io => "Could not reach the books API",
    };
    eyre::Report::new(err).wrap_err(context)
}
