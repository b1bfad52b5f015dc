//! Plain-text layout of a content tree.
//!
//! Deterministic and dependency-free; hosts without a visual renderer use it
//! for previews, and it is the easiest way to assert on composed output.

use super::types::{Align, Block, Document, Paragraph, ParagraphStyle, Table};

const INDENT: &str = "    ";

pub fn to_plain_text(document: &Document) -> String {
    let mut out = Vec::new();
    for block in &document.blocks {
        write_block(block, &mut out);
    }
    out.join("\n")
}

fn write_block(block: &Block, out: &mut Vec<String>) {
    match block {
        Block::Letterhead { lines } => out.extend(lines.iter().map(Paragraph::to_text)),
        Block::Heading { text } => {
            out.push(String::new());
            out.push(text.clone());
        }
        Block::DocNumber { text } => out.push(text.clone()),
        Block::Paragraph(paragraph) => out.push(paragraph_line(paragraph)),
        Block::Party(party) => {
            out.push(party.label.clone());
            out.extend(party.lines.iter().map(paragraph_line));
        }
        Block::Article(article) => {
            if let Some(heading) = article.heading() {
                out.push(heading);
            }
            for inner in &article.body {
                write_block(inner, out);
            }
        }
        Block::Table(table) => write_table(table, out),
        Block::Signatures { signatures } => {
            out.push(String::new());
            for signature in signatures {
                out.push(format!(
                    "{} {} {}",
                    signature.title, signature.note, signature.name
                )
                .trim_end()
                .to_string());
            }
        }
        Block::LegalFooter(footer) => {
            out.push(String::new());
            out.push(footer.heading.clone());
            out.extend(
                footer
                    .citations
                    .iter()
                    .map(|citation| format!("• {}", citation.to_text())),
            );
            out.push(footer.disclaimer.clone());
        }
    }
}

fn paragraph_line(paragraph: &Paragraph) -> String {
    match paragraph.style {
        ParagraphStyle::Indented => format!("{}{}", INDENT, paragraph.to_text()),
        ParagraphStyle::Normal | ParagraphStyle::Note => paragraph.to_text(),
    }
}

fn write_table(table: &Table, out: &mut Vec<String>) {
    let columns = table.columns.len();
    let mut widths: Vec<usize> = table
        .columns
        .iter()
        .map(|column| column.label.chars().count())
        .collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let header: Vec<String> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| pad(&column.label, widths[i], Align::Left))
        .collect();
    out.push(header.join(" | "));

    for row in &table.rows {
        let cells: Vec<String> = table
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                pad(cell, widths[i], column.align)
            })
            .collect();
        out.push(cells.join(" | "));
    }

    for total in &table.totals {
        out.push(format!("{} {}", total.label, total.value));
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let len = text.chars().count();
    let fill = width.saturating_sub(len);
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(fill)),
        Align::Right => format!("{}{}", " ".repeat(fill), text),
        Align::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(fill - left))
        }
    }
}
