//! Renderers for result tables

use crate::output::table::ResultTable;
use std::io::{self, Write};

/// Writes each row on its own line, cells separated by a space
pub fn write_plain<W: Write>(mut w: W, table: &ResultTable) -> io::Result<()> {
    for row in table.rows() {
        writeln!(w, "{}", row.join(" "))?;
    }
    Ok(())
}

/// Writes a boxed, left-aligned table with the header on top
pub fn write_pretty<W: Write>(mut w: W, table: &ResultTable) -> io::Result<()> {
    let columns = table.rows().iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in table.rows() {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let write_row = |w: &mut W, row: &[String]| -> io::Result<()> {
        write!(w, "|")?;
        for (i, width) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let pad = width - cell.chars().count();
            write!(w, " {}{} |", cell, " ".repeat(pad))?;
        }
        writeln!(w)
    };

    writeln!(w, "{}", border)?;
    write_row(&mut w, table.header())?;
    writeln!(w, "{}", border)?;
    for row in table.body() {
        write_row(&mut w, row)?;
    }
    writeln!(w, "{}", border)
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Writes one CSV row, quoting fields only when needed
pub fn write_csv_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, "{}", sep)?;
        } else {
            first = false;
        }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Writes the whole table as CSV, header first
pub fn write_csv<W: Write>(mut w: W, table: &ResultTable) -> io::Result<()> {
    for row in table.rows() {
        write_csv_row(&mut w, row, ',')?;
    }
    Ok(())
}
