// src/pdf/mod.rs
//
// "Student Certificates" PDF: title, generation stamp, then a striped table
// (ID, First Name, Last Name, From Date, To Date, Created At) flowing over
// as many A4 pages as needed. The header row is repeated on every page.
// Cells wider than their column wrap onto extra lines and the row grows.

pub mod metrics;

use std::ops::Range;

use chrono::NaiveDateTime;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect, Rgb,
};

use crate::config::consts::*;
use crate::dates::format_timestamp;
use crate::error::ExportError;
use crate::model::Certificate;
use metrics::{Face, wrap_text};

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN_X: f32 = 14.0;
const MARGIN_BOTTOM: f32 = 14.0;
const TITLE_Y: f32 = PAGE_H - 15.0;
const STAMP_Y: f32 = PAGE_H - 22.0;
const FIRST_TABLE_TOP: f32 = PAGE_H - 30.0;
const TABLE_TOP: f32 = PAGE_H - 14.0;
/// Height of a single-line row.
const ROW_H: f32 = 7.0;
/// Extra height per wrapped line.
const LINE_H: f32 = 3.5;
const CELL_PAD: f32 = 2.0;

/// Column widths in mm; they add up to the page width minus both margins.
const COL_W: [f32; 6] = [14.0, 34.0, 34.0, 33.0, 33.0, 34.0];

/// Space left for body rows below a header row starting at `top`.
fn body_capacity(top: f32) -> f32 {
    top - MARGIN_BOTTOM - ROW_H
}

/// Split body rows of the given heights into per-page ranges, filling each
/// page greedily. The first page has less room because the title and stamp
/// sit above the table. A page always takes at least one row, and zero rows
/// still yields one (empty) page.
pub fn paginate_heights(heights: &[f32]) -> Vec<Range<usize>> {
    let mut pages = Vec::new();
    let mut capacity = body_capacity(FIRST_TABLE_TOP);
    let mut start = 0;
    let mut used = 0.0_f32;

    for (i, &h) in heights.iter().enumerate() {
        if i > start && used + h > capacity + 1e-3 {
            pages.push(start..i);
            start = i;
            used = 0.0;
            capacity = body_capacity(TABLE_TOP);
        }
        used += h;
    }
    pages.push(start..heights.len());
    pages
}

/// Pagination for `n_rows` single-line rows.
pub fn paginate(n_rows: usize) -> Vec<Range<usize>> {
    paginate_heights(&vec![ROW_H; n_rows])
}

/// A table row broken into lines per cell, with the height it needs.
struct RowLayout {
    cells: Vec<Vec<String>>,
    height: f32,
}

fn layout_row<S: AsRef<str>>(cells: &[S], face: Face) -> RowLayout {
    let cells: Vec<Vec<String>> = cells
        .iter()
        .zip(COL_W)
        .map(|(cell, w)| wrap_text(cell.as_ref(), w - 2.0 * CELL_PAD, PDF_TABLE_FONT_SIZE, face))
        .collect();
    let lines = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
    RowLayout { cells, height: ROW_H + (lines - 1) as f32 * LINE_H }
}

fn layout_rows(certs: &[Certificate]) -> Vec<RowLayout> {
    certs.iter().map(|c| layout_row(&c.to_row(), Face::Regular)).collect()
}

/// Rendered height of each certificate's table row, in mm.
pub fn row_heights(certs: &[Certificate]) -> Vec<f32> {
    layout_rows(certs).iter().map(|r| r.height).collect()
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, None))
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn fill_row(layer: &PdfLayerReference, top: f32, height: f32, fill: (u8, u8, u8)) {
    layer.set_fill_color(rgb(fill));
    layer.add_rect(Rect::new(
        Mm(MARGIN_X),
        Mm(top - height),
        Mm(PAGE_W - MARGIN_X),
        Mm(top),
    ));
}

fn draw_cells(layer: &PdfLayerReference, row: &RowLayout, top: f32, font: &IndirectFontRef) {
    let first_baseline = top - ROW_H + CELL_PAD + 0.5;
    let mut x = MARGIN_X;
    for (lines, w) in row.cells.iter().zip(COL_W) {
        for (k, line) in lines.iter().enumerate() {
            let baseline = first_baseline - k as f32 * LINE_H;
            layer.use_text(line.as_str(), PDF_TABLE_FONT_SIZE, Mm(x + CELL_PAD), Mm(baseline), font);
        }
        x += w;
    }
}

fn draw_table(layer: &PdfLayerReference, fonts: &Fonts, header: &RowLayout, rows: &[RowLayout], top: f32) {
    // header
    fill_row(layer, top, header.height, PDF_HEAD_FILL);
    layer.set_fill_color(rgb((255, 255, 255)));
    draw_cells(layer, header, top, &fonts.bold);

    // body
    let mut y = top - header.height;
    for (i, row) in rows.iter().enumerate() {
        if i % 2 == 1 {
            fill_row(layer, y, row.height, PDF_STRIPE_FILL);
        }
        layer.set_fill_color(rgb((0, 0, 0)));
        draw_cells(layer, row, y, &fonts.regular);
        y -= row.height;
    }
}

/// Render the export document and return the PDF bytes.
pub fn render(certs: &[Certificate], generated_at: NaiveDateTime) -> Result<Vec<u8>, ExportError> {
    let (doc, page1, layer1) = PdfDocument::new(PDF_TITLE, Mm(PAGE_W), Mm(PAGE_H), "Table");
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
    };

    let header = layout_row(&EXPORT_HEADERS, Face::Bold);
    let rows = layout_rows(certs);
    let heights: Vec<f32> = rows.iter().map(|r| r.height).collect();
    let pages = paginate_heights(&heights);

    for (n, range) in pages.into_iter().enumerate() {
        let layer = if n == 0 {
            doc.get_page(page1).get_layer(layer1)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Table");
            doc.get_page(page).get_layer(layer)
        };

        let top = if n == 0 {
            layer.set_fill_color(rgb((0, 0, 0)));
            layer.use_text(PDF_TITLE, PDF_TITLE_SIZE, Mm(MARGIN_X), Mm(TITLE_Y), &fonts.bold);
            let stamp = format!("Generated on: {}", format_timestamp(generated_at));
            layer.use_text(stamp, PDF_SUBTITLE_SIZE, Mm(MARGIN_X), Mm(STAMP_Y), &fonts.regular);
            FIRST_TABLE_TOP
        } else {
            TABLE_TOP
        };

        draw_table(&layer, &fonts, &header, &rows[range], top);
    }

    Ok(doc.save_to_bytes()?)
}
