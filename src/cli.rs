use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "toi-starlist")]
#[command(version, about = "Build Keck/Palomar starlists from the TESS TOI catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive starlist editing session
    Session {
        /// Override the TOI catalog CSV URL (mainly for testing)
        #[arg(long)]
        catalog_url: Option<String>,
    },

    /// Look up a single target in the TOI catalog and the TIC
    Lookup {
        /// TOI number (e.g. 101.01)
        #[arg(long, conflicts_with = "tic")]
        toi: Option<f64>,

        /// TIC ID (e.g. 231663901)
        #[arg(long)]
        tic: Option<u64>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
