//! # NotePress Core
//!
//! A single-pass translator from a constrained Markdown subset into the
//! typed block tree a document-database API accepts.
//!
//! The parser is line-oriented and deterministic: headings (levels 1-3),
//! bulleted and numbered list items, fenced code blocks, pipe tables and
//! paragraphs become one block record each, in source order. Text content
//! is decomposed into styled spans (`**bold**`, `*italic*`, `` `code` ``,
//! `~~strikethrough~~`).
//!
//! ## Quick Start
//!
//! ```rust
//! use notepress_core::{parse, Block};
//!
//! let doc = parse("# Title\n\nSome **bold** text");
//!
//! assert_eq!(doc.len(), 2);
//! assert!(matches!(doc.blocks[0], Block::Heading(_)));
//! ```
//!
//! ## Graceful degradation
//!
//! Malformed input never fails. Unterminated code fences run to end of
//! input, unbalanced inline delimiters stay literal, and table runs keep
//! the rows they collected:
//!
//! ```rust
//! use notepress_core::{parse, Block};
//!
//! let doc = parse("```rust\nfn main() {}");
//! assert!(matches!(doc.blocks[0], Block::Code(_)));
//! ```
//!
//! Parsing is a pure function of its input: no configuration, no shared
//! state, no error type.

pub mod ast;
pub mod inline;
pub mod lang;
pub mod lexer;
pub mod parser;

pub use ast::{
    Block, CodeBlock, Document, Heading, HeadingLevel, ListItem, Paragraph, Style, Table,
    TableRow, TextSpan,
};
pub use parser::parse;
