//! Block parser: a full document into an ordered block sequence.
//!
//! Lines are classified in a fixed precedence order (blank, code fence,
//! table row, heading with deepest prefix first, bulleted item, numbered
//! item, paragraph) with a single forward cursor and no backtracking.
//! Multi-line constructs (fences, table runs) consume their whole run;
//! every other construct is one line.
//!
//! Malformed input never fails: unterminated fences run to end of input,
//! table runs keep whatever rows they collected, and anything else
//! degrades to a paragraph. Empty fences and table runs without data rows
//! are dropped without a trace.

use std::borrow::Cow;

use crate::ast::{
    Block, CodeBlock, Document, Heading, HeadingLevel, ListItem, Paragraph, Table, TableRow,
    TextSpan,
};
use crate::inline;
use crate::lang;
use crate::lexer::Lexer;

/// Parse a document into its block sequence.
///
/// Pure and deterministic: the same input always yields a structurally
/// identical [`Document`]. Blocks appear in the source order of their
/// first line.
pub fn parse(input: &str) -> Document<'_> {
    let mut lexer = Lexer::new(input);
    let mut blocks = Vec::with_capacity(16);

    while let Some(line) = lexer.peek_line() {
        if line.is_blank() {
            lexer.next_line();
            continue;
        }

        let trimmed = line.trimmed();
        let block = if trimmed.starts_with("```") {
            parse_code_block(&mut lexer, input)
        } else if is_table_row(trimmed) {
            parse_table(&mut lexer)
        } else {
            parse_text_line(&mut lexer)
        };

        if let Some(block) = block {
            blocks.push(block);
        }
    }

    Document { blocks }
}

/// Collect a fenced code block.
///
/// The language tag is whatever follows the opening backticks, trimmed
/// and resolved through [`lang::normalize`]. Content lines are taken
/// verbatim (untrimmed) until a line whose trimmed content is exactly
/// three backticks or input ends; the closing fence is consumed but not
/// included.
#[inline]
fn parse_code_block<'a>(lexer: &mut Lexer<'a>, input: &'a str) -> Option<Block<'a>> {
    let open = lexer.next_line()?;
    let tag = open.trimmed().strip_prefix("```").unwrap_or("").trim();
    let language = lang::normalize(tag);

    let mut content_start: Option<usize> = None;
    let mut content_end = 0;

    while let Some(line) = lexer.peek_line() {
        if line.trimmed() == "```" {
            lexer.next_line();
            break;
        }
        if content_start.is_none() {
            content_start = Some(line.start);
        }
        content_end = line.end;
        lexer.next_line();
    }

    // Borrow the verbatim content range straight from the input.
    let content = match content_start {
        Some(start) => &input[start..content_end],
        None => "",
    };

    // A fence with no content emits nothing.
    if content.is_empty() {
        return None;
    }

    Some(Block::Code(CodeBlock {
        language,
        content: Cow::Borrowed(content),
    }))
}

#[inline(always)]
fn is_table_row(trimmed: &str) -> bool {
    trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Split a table row into trimmed cells, dropping the outer empty
/// segments before the first and after the last pipe.
#[inline]
fn split_cells(row: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = row.split('|').map(str::trim).collect();
    cells.remove(0);
    cells.pop();
    cells
}

/// A separator row is all dash/colon filler (`|---|:---:|`).
#[inline]
fn is_separator(cells: &[&str]) -> bool {
    cells
        .iter()
        .all(|cell| cell.chars().all(|c| matches!(c, '-' | ':')))
}

/// Collect a contiguous run of `|…|` lines into one table.
///
/// Separator rows are discarded. The remaining rows are padded on the
/// right with empty cells to the widest row's cell count; the first data
/// row is the column header. A run with no data rows emits nothing.
#[inline]
fn parse_table<'a>(lexer: &mut Lexer<'a>) -> Option<Block<'a>> {
    let mut raw_rows: Vec<Vec<&'a str>> = Vec::with_capacity(8);

    while let Some(line) = lexer.peek_line() {
        let trimmed = line.trimmed();
        if !is_table_row(trimmed) {
            break;
        }
        lexer.next_line();

        let cells = split_cells(trimmed);
        if is_separator(&cells) {
            continue;
        }
        raw_rows.push(cells);
    }

    if raw_rows.is_empty() {
        return None;
    }

    let width = raw_rows.iter().map(Vec::len).max().unwrap_or(0);
    let rows = raw_rows
        .into_iter()
        .map(|cells| {
            let mut padded: Vec<Vec<TextSpan<'a>>> =
                cells.into_iter().map(inline::format).collect();
            while padded.len() < width {
                padded.push(vec![TextSpan::plain("")]);
            }
            TableRow { cells: padded }
        })
        .collect();

    Some(Block::Table(Table {
        rows,
        has_header: true,
    }))
}

/// Classify a single-line construct: heading, list item, or paragraph.
#[inline]
fn parse_text_line<'a>(lexer: &mut Lexer<'a>) -> Option<Block<'a>> {
    let line = lexer.next_line()?;
    let stripped = line.trimmed();

    if let Some(rest) = stripped.strip_prefix("### ") {
        return Some(heading(HeadingLevel::H3, rest));
    }
    if let Some(rest) = stripped.strip_prefix("## ") {
        return Some(heading(HeadingLevel::H2, rest));
    }
    if let Some(rest) = stripped.strip_prefix("# ") {
        return Some(heading(HeadingLevel::H1, rest));
    }

    if let Some(rest) = stripped
        .strip_prefix("- ")
        .or_else(|| stripped.strip_prefix("* "))
    {
        return Some(Block::BulletedItem(ListItem {
            spans: inline::format(rest),
        }));
    }

    if let Some(text) = numbered_item_text(stripped) {
        return Some(Block::NumberedItem(ListItem {
            spans: inline::format(text),
        }));
    }

    Some(Block::Paragraph(Paragraph {
        spans: inline::format(stripped),
    }))
}

#[inline(always)]
fn heading(level: HeadingLevel, rest: &str) -> Block<'_> {
    Block::Heading(Heading {
        level,
        spans: inline::format(rest),
    })
}

/// A numbered item is a single leading ASCII digit, a dot, and at least
/// one further character. The item text is everything after the first
/// `". "` token; a marker without one falls back to the whole trimmed
/// line, digit and dot included.
#[inline]
fn numbered_item_text(stripped: &str) -> Option<&str> {
    let bytes = stripped.as_bytes();
    if bytes.len() > 2 && bytes[0].is_ascii_digit() && bytes[1] == b'.' {
        Some(match stripped.split_once(". ") {
            Some((_, rest)) => rest,
            None => stripped,
        })
    } else {
        None
    }
}
