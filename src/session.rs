//! Interactive editing session: one live target table, edited through
//! line commands until the user quits.

use anyhow::Result;

use crate::catalog::{ExofopClient, ToiCatalog};
use crate::lookup::{MastClient, ObjectLookup};
use crate::prompt::{Prompt, StdinPrompt};
use crate::render::{make_starlist, render};
use crate::starlist::Starlist;

/// Load the TOI catalog, then hand control to the command loop with the
/// real MAST lookup and stdin prompts.
pub fn run_session(catalog_url: Option<String>) -> Result<()> {
    let client = match catalog_url {
        Some(url) => ExofopClient::with_url(url)?,
        None => ExofopClient::new()?,
    };
    let catalog = client.fetch_toi_catalog()?;
    let lookup = MastClient::new()?;
    let mut prompt = StdinPrompt::new();

    let list = run_loop(&catalog, &lookup, &mut prompt)?;
    if !list.is_empty() {
        println!("Session ended with {} target(s) in the list.", list.len());
    }
    Ok(())
}

/// The command loop. Operation failures are printed and the table stays
/// alive; only prompt I/O failure ends the session early. Returns the
/// final table so callers can inspect it.
pub fn run_loop(
    catalog: &ToiCatalog,
    lookup: &dyn ObjectLookup,
    prompt: &mut dyn Prompt,
) -> Result<Starlist> {
    let mut list = Starlist::new();
    println!("{} TOIs loaded. Type 'help' for commands.", catalog.len());

    loop {
        let line = prompt.ask(">")?;
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(word) => word,
            None => continue,
        };
        let rest: Vec<&str> = parts.collect();

        match command {
            "help" => print_help(),

            "add" => report(list.add_manual(prompt)),

            "add-toi" => match parse_id::<f64>(&rest, "TOI") {
                Ok((toi, comment)) => {
                    report(list.add_from_catalog(catalog, lookup, Some(toi), None, comment))
                }
                Err(message) => println!("{}", message),
            },

            "add-tic" => match parse_id::<u64>(&rest, "TIC") {
                Ok((tic, comment)) => {
                    report(list.add_from_catalog(catalog, lookup, None, Some(tic), comment))
                }
                Err(message) => println!("{}", message),
            },

            "remove" => match rest.first() {
                Some(toi) => list.remove(toi),
                None => println!("Provide the name of target to remove."),
            },

            "comment" => match rest.first() {
                Some(toi) => {
                    let toi = toi.to_string();
                    report(list.add_comment(&toi, prompt));
                }
                None => println!("Provide the name of target to comment."),
            },

            "show" => {
                for line in render(&list).to_lines() {
                    println!("{}", line);
                }
            }

            "save" => match rest.first() {
                Some(obs_date) => match make_starlist(&list, obs_date, true) {
                    Ok(_) => println!("Wrote starlist_{}.tbl", obs_date),
                    Err(err) => println!("{:#}", err),
                },
                None => println!("Provide an observation date, e.g. save 2026-08-29"),
            },

            "quit" | "exit" => break,

            other => println!("Unknown command '{}'. Type 'help' for commands.", other),
        }
    }

    Ok(list)
}

fn report(result: Result<()>) {
    if let Err(err) = result {
        println!("{:#}", err);
    }
}

/// First word is the identifier, the rest (if any) is the comment.
fn parse_id<T: std::str::FromStr>(
    rest: &[&str],
    label: &str,
) -> std::result::Result<(T, Option<String>), String> {
    let raw = rest
        .first()
        .ok_or_else(|| format!("Provide a {} number.", label))?;
    let id = raw
        .parse::<T>()
        .map_err(|_| format!("'{}' is not a valid {}.", raw, label))?;

    let comment = if rest.len() > 1 {
        Some(rest[1..].join(" "))
    } else {
        None
    };

    Ok((id, comment))
}

fn print_help() {
    println!("Commands:");
    println!("  add                      add a target by hand (prompted)");
    println!("  add-toi <toi> [comment]  add a TOI from the catalog");
    println!("  add-tic <tic> [comment]  add a TIC from the catalog");
    println!("  remove <toi>             remove all rows for a TOI");
    println!("  comment <toi>            replace a TOI's comment (prompted)");
    println!("  show                     print the rendered starlist");
    println!("  save <obs_date>          write starlist_<obs_date>.tbl");
    println!("  quit                     end the session");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_splits_identifier_and_comment() {
        let (toi, comment) = parse_id::<f64>(&["101.01", "high", "priority"], "TOI").unwrap();
        assert_eq!(toi, 101.01);
        assert_eq!(comment.as_deref(), Some("high priority"));

        let (tic, comment) = parse_id::<u64>(&["231663901"], "TIC").unwrap();
        assert_eq!(tic, 231663901);
        assert_eq!(comment, None);
    }

    #[test]
    fn parse_id_rejects_missing_or_bad_input() {
        assert_eq!(
            parse_id::<f64>(&[], "TOI").unwrap_err(),
            "Provide a TOI number."
        );
        assert_eq!(
            parse_id::<u64>(&["abc"], "TIC").unwrap_err(),
            "'abc' is not a valid TIC."
        );
    }
}
