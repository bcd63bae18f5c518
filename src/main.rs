use anyhow::{bail, Result};
use toi_starlist::{
    catalog::ExofopClient,
    cli::{Cli, Commands},
    lookup::MastClient,
    render::render,
    session::run_session,
    starlist::Starlist,
};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Session { catalog_url } => run_session(catalog_url)?,

        Commands::Lookup { toi, tic } => {
            if toi.is_none() && tic.is_none() {
                bail!("Provide either TOI or TIC.");
            }

            let catalog = ExofopClient::new()?.fetch_toi_catalog()?;
            let lookup = MastClient::new()?;

            let mut list = Starlist::new();
            list.add_from_catalog(&catalog, &lookup, toi, tic, None)?;

            for line in render(&list).to_lines() {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
