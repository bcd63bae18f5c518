//! Starlist rendering in the Keck/Palomar fixed-width form.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::starlist::{Starlist, Target};

/// Trailing padding after every display name; the scheduling software
/// expects the name field to be blank-filled.
const NAME_PAD: &str = "          ";

const EQUINOX: &str = "2000.0";

/// One line of the rendered starlist.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub target: String,
    pub ra: String,
    pub dec: String,
    pub equinox: String,
    pub comment: String,
}

/// The rendered table, ready to print or write out.
#[derive(Debug)]
pub struct RenderedTable {
    rows: Vec<RenderedRow>,
}

impl RenderedTable {
    pub fn rows(&self) -> &[RenderedRow] {
        &self.rows
    }

    /// One string per starlist line, fields joined by two spaces.
    pub fn to_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| {
                format!(
                    "{}  {}  {}  {}  {}",
                    r.target, r.ra, r.dec, r.equinox, r.comment
                )
            })
            .collect()
    }

    /// Write `starlist_<obs_date>.tbl` into `dir`, overwriting any
    /// existing file. No header row.
    pub fn save_in(&self, dir: &Path, obs_date: &str) -> Result<PathBuf> {
        let path = dir.join(format!("starlist_{}.tbl", obs_date));
        let mut file = File::create(&path)
            .with_context(|| format!("Failed to create starlist file: {:?}", path))?;

        for line in self.to_lines() {
            writeln!(file, "{}", line).context("Failed to write starlist file")?;
        }

        Ok(path)
    }

    pub fn save(&self, obs_date: &str) -> Result<PathBuf> {
        self.save_in(Path::new("."), obs_date)
    }
}

/// Render the target table, optionally saving it under the observation
/// date. The caller's table is left untouched.
pub fn make_starlist(list: &Starlist, obs_date: &str, save: bool) -> Result<RenderedTable> {
    let table = render(list);
    if save {
        table.save(obs_date)?;
    }
    Ok(table)
}

/// Pure single-pass transform of the target table into starlist rows:
/// TOI-named targets first, TIC-only targets appended after, each
/// partition keeping its original order.
pub fn render(list: &Starlist) -> RenderedTable {
    let (toi_named, tic_only): (Vec<&Target>, Vec<&Target>) =
        list.targets().iter().partition(|t| t.toi.is_some());

    let rows = toi_named
        .into_iter()
        .chain(tic_only)
        .map(render_row)
        .collect();

    RenderedTable { rows }
}

fn render_row(target: &Target) -> RenderedRow {
    RenderedRow {
        target: display_name(target),
        ra: target.ra.replace(':', " "),
        dec: target.dec.replace(':', " "),
        equinox: EQUINOX.to_string(),
        comment: composite_comment(target),
    }
}

/// "TOI<integer part>" for TOI-named rows (the planet suffix is not
/// part of the star's name), "TIC<id>" for TIC-only rows.
fn display_name(target: &Target) -> String {
    let name = match (&target.toi, &target.tic) {
        (Some(toi), _) => {
            let host = toi.split('.').next().unwrap_or(toi);
            format!("TOI{}", host)
        }
        (None, Some(tic)) => format!("TIC{}", tic),
        (None, None) => String::new(),
    };
    format!("{}{}", name, NAME_PAD)
}

fn composite_comment(target: &Target) -> String {
    format!(
        "vmag={} kmag={} lgs=0 SG3={} rp={} steff={} {}",
        target.vmag,
        target.kmag,
        format_plain(target.sg3),
        format_radius(target.planet_radius),
        format_teff(target.teff),
        target.comment
    )
}

fn format_plain(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "nan".to_string(),
    }
}

/// Planet radius to one decimal place.
fn format_radius(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "nan".to_string(),
    }
}

/// Effective temperature, zero decimals, right-aligned to width 5.
fn format_teff(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:5.0}", v),
        None => format!("{:>5}", "nan"),
    }
}

/// Round-trip loading of a previously rendered starlist. Declared for
/// symmetry with `make_starlist`; not yet built.
pub fn load_starlist(_path: &Path) -> Result<Starlist> {
    bail!("loading starlists is not implemented")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(toi: Option<&str>, tic: Option<&str>) -> Target {
        Target {
            toi: toi.map(String::from),
            tic: tic.map(String::from),
            ra: "12:34:56.7".into(),
            dec: "-01:23:45.6".into(),
            vmag: "10.5".into(),
            kmag: "9.2".into(),
            sg3: Some(2.0),
            planet_radius: Some(3.456),
            teff: Some(5778.0),
            comment: "test".into(),
        }
    }

    #[test]
    fn toi_display_name_drops_planet_suffix() {
        let list = Starlist::from_targets(vec![target(Some("101.01"), Some("231663901"))]);
        let rendered = render(&list);
        assert!(rendered.rows()[0].target.starts_with("TOI101"));
    }

    #[test]
    fn tic_only_display_name() {
        let list = Starlist::from_targets(vec![target(None, Some("12345"))]);
        let rendered = render(&list);
        assert!(rendered.rows()[0].target.starts_with("TIC12345"));
    }

    #[test]
    fn colons_become_spaces_in_both_coordinates() {
        let list = Starlist::from_targets(vec![target(Some("101.01"), None)]);
        let rendered = render(&list);
        let row = &rendered.rows()[0];
        assert_eq!(row.ra, "12 34 56.7");
        assert_eq!(row.dec, "-01 23 45.6");
    }

    #[test]
    fn equinox_is_constant() {
        let list = Starlist::from_targets(vec![target(Some("101.01"), None)]);
        assert_eq!(render(&list).rows()[0].equinox, "2000.0");
    }

    #[test]
    fn composite_comment_exact_format() {
        let row = render_row(&target(Some("101.01"), None));
        assert_eq!(
            row.comment,
            "vmag=10.5 kmag=9.2 lgs=0 SG3=2 rp=3.5 steff= 5778 test"
        );
    }

    #[test]
    fn missing_vetting_fields_render_nan() {
        let mut t = target(Some("103.01"), None);
        t.sg3 = None;
        t.planet_radius = None;
        t.teff = None;
        let row = render_row(&t);
        assert_eq!(
            row.comment,
            "vmag=10.5 kmag=9.2 lgs=0 SG3=nan rp=nan steff=  nan test"
        );
    }

    #[test]
    fn toi_named_rows_precede_tic_only_rows() {
        let list = Starlist::from_targets(vec![
            target(None, Some("111")),
            target(Some("101.01"), Some("222")),
            target(None, Some("333")),
            target(Some("102.01"), Some("444")),
        ]);
        let names: Vec<String> = render(&list)
            .rows()
            .iter()
            .map(|r| r.target.trim_end().to_string())
            .collect();
        assert_eq!(names, vec!["TOI101", "TOI102", "TIC111", "TIC333"]);
    }

    #[test]
    fn manual_name_keeps_toi_prefix() {
        let row = render_row(&target(Some("HD209458"), Some("HD209458")));
        assert!(row.target.starts_with("TOIHD209458"));
    }

    #[test]
    fn lines_are_two_space_delimited() {
        let list = Starlist::from_targets(vec![target(Some("101.01"), None)]);
        let lines = render(&list).to_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("  12 34 56.7  -01 23 45.6  2000.0  vmag="));
    }

    #[test]
    fn load_starlist_is_unimplemented() {
        let err = load_starlist(Path::new("starlist_2026-08-29.tbl")).unwrap_err();
        assert!(err.to_string().contains("not implemented"));
    }
}
