// src/csv.rs
use std::io::{self, Write};

use crate::config::{consts::EXPORT_HEADERS, options::Quoting};
use crate::model::Certificate;

pub const SEP: char = ',';

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
/// With `Quoting::Never` cells are joined verbatim, so a cell holding the
/// separator (every formatted date does) shifts the columns for CSV readers.
pub fn write_row<W: Write, S: AsRef<str>>(
    mut w: W,
    row: &[S],
    sep: char,
    quoting: Quoting,
) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if quoting == Quoting::Needed && needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header line plus one line per certificate, dates pre-formatted.
/// Callers pass the full record set; export never looks at the search term.
pub fn write_certificates<W: Write>(
    mut w: W,
    certs: &[Certificate],
    quoting: Quoting,
) -> io::Result<()> {
    write_row(&mut w, &EXPORT_HEADERS, SEP, quoting)?;
    for c in certs {
        write_row(&mut w, &c.to_row(), SEP, quoting)?;
    }
    Ok(())
}

/// Full export text for `student_certificates.csv`.
pub fn to_export_string(certs: &[Certificate], quoting: Quoting) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_certificates(&mut buf, certs, quoting);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
