//! Block tree types produced by the parser.
//!
//! The tree mirrors the Notion block model one-to-one:
//!
//! - **Zero-copy**: Uses `Cow<'a, str>` to borrow from input when possible
//! - **Flat**: Inline styling is a sequence of non-overlapping spans,
//!   never nested
//! - **Position-free**: Blocks carry no source offsets; their order is the
//!   source order

/// Borrowed or owned string type for zero-copy parsing.
pub type CowStr<'a> = std::borrow::Cow<'a, str>;

/// Inline style carried by a [`TextSpan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Unstyled text.
    Plain,
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `` `inline code` ``
    Code,
    /// `~~strikethrough~~`
    Strikethrough,
}

/// A contiguous run of text carrying exactly one style.
///
/// A formatted line decomposes into an ordered sequence of spans whose
/// concatenated content reconstructs the line with the style delimiters
/// removed. Spans never overlap and are never empty, with one exception:
/// an empty input line yields a single empty plain span.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan<'a> {
    /// The text content, delimiters consumed.
    pub content: CowStr<'a>,
    /// The style applied to the whole span.
    pub style: Style,
}

impl<'a> TextSpan<'a> {
    /// Create a span with the given style.
    #[inline]
    pub fn new(content: impl Into<CowStr<'a>>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    /// Create an unstyled span.
    #[inline]
    pub fn plain(content: impl Into<CowStr<'a>>) -> Self {
        Self::new(content, Style::Plain)
    }

    /// Create a bold span.
    #[inline]
    pub fn bold(content: impl Into<CowStr<'a>>) -> Self {
        Self::new(content, Style::Bold)
    }

    /// Create an italic span.
    #[inline]
    pub fn italic(content: impl Into<CowStr<'a>>) -> Self {
        Self::new(content, Style::Italic)
    }

    /// Create an inline-code span.
    #[inline]
    pub fn code(content: impl Into<CowStr<'a>>) -> Self {
        Self::new(content, Style::Code)
    }

    /// Create a strikethrough span.
    #[inline]
    pub fn strikethrough(content: impl Into<CowStr<'a>>) -> Self {
        Self::new(content, Style::Strikethrough)
    }
}

/// Heading depth. Only levels 1-3 exist in the block model; deeper
/// prefixes fall through to paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

/// Block-level nodes.
///
/// Each variant corresponds to one wire-level block object kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Block<'a> {
    /// Section heading (levels 1-3).
    Heading(Heading<'a>),
    /// One `- ` / `* ` list item.
    BulletedItem(ListItem<'a>),
    /// One `1. ` list item.
    NumberedItem(ListItem<'a>),
    /// Plain text line with inline formatting.
    Paragraph(Paragraph<'a>),
    /// Fenced code block.
    Code(CodeBlock<'a>),
    /// Pipe table.
    Table(Table<'a>),
}

/// Section heading with level and styled content.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading<'a> {
    /// Heading level (1-3).
    pub level: HeadingLevel,
    /// Styled text content.
    pub spans: Vec<TextSpan<'a>>,
}

/// A single list item. Items are emitted one block per source line;
/// nesting is out of scope.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem<'a> {
    /// Styled text content.
    pub spans: Vec<TextSpan<'a>>,
}

/// Plain paragraph, one source line each.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph<'a> {
    /// Styled text content.
    pub spans: Vec<TextSpan<'a>>,
}

/// Fenced code block.
///
/// Content is the verbatim text between the fences, untrimmed; it is never
/// scanned for inline styles.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock<'a> {
    /// Canonical language name from the supported set (see [`crate::lang`]).
    pub language: &'static str,
    /// Raw code content between the fences.
    pub content: CowStr<'a>,
}

/// Pipe table.
///
/// All rows carry the same cell count; short source rows are padded on the
/// right with empty cells. Separator rows (`|---|---|`) are discarded
/// during parsing and never appear here.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<'a> {
    /// Data rows in source order.
    pub rows: Vec<TableRow<'a>>,
    /// The first row is the column header. Always true for emitted tables.
    pub has_header: bool,
}

impl Table<'_> {
    /// Cell count shared by every row.
    #[inline]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.cells.len())
    }
}

/// A single table row; each cell is a styled span sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow<'a> {
    /// Cells in column order.
    pub cells: Vec<Vec<TextSpan<'a>>>,
}

/// A parsed document: the ordered block sequence.
///
/// Created fresh per parse call; blocks appear in the source order of their
/// first line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document<'a> {
    /// Content blocks in source order.
    pub blocks: Vec<Block<'a>>,
}

impl<'a> Document<'a> {
    /// Number of blocks.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True if no blocks were recognized.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the blocks in source order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Block<'a>> {
        self.blocks.iter()
    }
}
