//! Grid tables and the security listing.

use crate::domain::ReportRow;
use crate::domain::catalog::CATALOG;

const HEADERS: [&str; 4] = ["Record Date", "Security Type", "Security Description", "Rate"];

/// Render result rows as a grid table.
///
/// Columns are sized to their content; the header is separated with `=`,
/// data rows with `-`.
pub fn format_rates_table(rows: &[ReportRow]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|r| {
            [
                r.record_date.format("%Y-%m-%d").to_string(),
                r.category.display_name().to_string(),
                r.security_desc.clone(),
                r.rate.clone(),
            ]
        })
        .collect();

    let mut widths: [usize; 4] = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_border(&mut out, &widths, '-');
    push_row(&mut out, &widths, &HEADERS.map(str::to_string));
    push_border(&mut out, &widths, '=');
    for row in &cells {
        push_row(&mut out, &widths, row);
        push_border(&mut out, &widths, '-');
    }
    out
}

fn push_border(out: &mut String, widths: &[usize; 4], fill: char) {
    for width in widths {
        out.push('+');
        for _ in 0..width + 2 {
            out.push(fill);
        }
    }
    out.push_str("+\n");
}

fn push_row(out: &mut String, widths: &[usize; 4], cells: &[String; 4]) {
    for (width, cell) in widths.iter().zip(cells) {
        out.push_str(&format!("| {cell:<w$} ", w = *width));
    }
    out.push_str("|\n");
}

/// Render the `list-securities` output.
///
/// Pure and network-free; categories print in catalog order.
pub fn format_security_listing() -> String {
    let mut out = String::new();
    out.push_str("\nAvailable Treasury Securities:\n");
    out.push_str(&"-".repeat(30));
    out.push('\n');
    for (category, descs) in CATALOG {
        out.push_str(&format!("\nType: {}\n", category.display_name()));
        for desc in *descs {
            out.push_str(&format!("  - \"{desc}\"\n"));
        }
    }
    out.push_str("\nUse the exact description (quoted if it has spaces) with the lookup/range commands.\n");
    out
}
