//! Block tree to Notion wire JSON.
//!
//! Every block kind maps 1:1 to a block object: `object: "block"`, the
//! kind name as the `type` discriminator and as the key of the payload
//! object. Styled spans become `rich_text` items whose `annotations`
//! member is present only when a style applies. These shapes are the
//! `pages.create` contract and must not drift.

use notepress_core::ast::{Block, Document, HeadingLevel, Style, TextSpan};
use serde_json::{json, Value};

/// Convert a document into the `children` array of a page-creation call.
pub fn children(doc: &Document) -> Vec<Value> {
    doc.iter().map(block).collect()
}

/// Convert one block into its wire object.
pub fn block(block: &Block) -> Value {
    match block {
        Block::Heading(h) => {
            let kind = match h.level {
                HeadingLevel::H1 => "heading_1",
                HeadingLevel::H2 => "heading_2",
                HeadingLevel::H3 => "heading_3",
            };
            text_block(kind, &h.spans)
        }
        Block::BulletedItem(item) => text_block("bulleted_list_item", &item.spans),
        Block::NumberedItem(item) => text_block("numbered_list_item", &item.spans),
        Block::Paragraph(p) => text_block("paragraph", &p.spans),
        Block::Code(code) => json!({
            "object": "block",
            "type": "code",
            "code": {
                "rich_text": [{
                    "type": "text",
                    "text": {"content": code.content.as_ref()},
                }],
                "language": code.language,
            },
        }),
        Block::Table(table) => {
            let rows: Vec<Value> = table
                .rows
                .iter()
                .map(|row| {
                    let cells: Vec<Vec<Value>> =
                        row.cells.iter().map(|cell| rich_text(cell)).collect();
                    json!({
                        "object": "block",
                        "type": "table_row",
                        "table_row": {"cells": cells},
                    })
                })
                .collect();
            json!({
                "object": "block",
                "type": "table",
                "table": {
                    "table_width": table.width(),
                    "has_column_header": table.has_header,
                    "has_row_header": false,
                    "children": rows,
                },
            })
        }
    }
}

#[inline]
fn text_block(kind: &str, spans: &[TextSpan]) -> Value {
    json!({
        "object": "block",
        "type": kind,
        (kind): {"rich_text": rich_text(spans)},
    })
}

/// Convert a span sequence into a `rich_text` array.
pub fn rich_text(spans: &[TextSpan]) -> Vec<Value> {
    spans
        .iter()
        .map(|span| {
            let mut item = json!({
                "type": "text",
                "text": {"content": span.content.as_ref()},
            });
            if let Some(key) = annotation_key(span.style) {
                item["annotations"] = json!({(key): true});
            }
            item
        })
        .collect()
}

#[inline]
fn annotation_key(style: Style) -> Option<&'static str> {
    match style {
        Style::Plain => None,
        Style::Bold => Some("bold"),
        Style::Italic => Some("italic"),
        Style::Code => Some("code"),
        Style::Strikethrough => Some("strikethrough"),
    }
}

/// Optional database properties for a page payload.
#[derive(Debug, Default)]
pub struct PageOptions {
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub status: Option<String>,
}

/// Build the complete `pages.create` payload: database parent, page
/// properties, and the document body as `children`.
pub fn page_payload(
    database_id: &str,
    title: &str,
    doc: &Document,
    opts: &PageOptions,
) -> Value {
    let mut properties = json!({
        "Name": {
            "title": [{"text": {"content": title}}],
        },
    });

    if let Some(status) = &opts.status {
        properties["Status"] = json!({"status": {"name": status}});
    }
    if let Some(category) = &opts.category {
        properties["Category"] = json!({"select": {"name": category}});
    }
    if !opts.tags.is_empty() {
        let tags: Vec<Value> = opts.tags.iter().map(|tag| json!({"name": tag})).collect();
        properties["Tags"] = json!({"multi_select": tags});
    }

    json!({
        "parent": {"database_id": database_id},
        "properties": properties,
        "children": children(doc),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use notepress_core::parse;

    #[test]
    fn heading_block_shape() {
        let doc = parse("## Section");
        let blocks = children(&doc);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0]["object"], "block");
        assert_eq!(blocks[0]["type"], "heading_2");
        assert_eq!(
            blocks[0]["heading_2"]["rich_text"][0]["text"]["content"],
            "Section"
        );
    }

    #[test]
    fn plain_spans_carry_no_annotations() {
        let doc = parse("just text");
        let blocks = children(&doc);

        let item = &blocks[0]["paragraph"]["rich_text"][0];
        assert_eq!(item["type"], "text");
        assert!(item.get("annotations").is_none());
    }

    #[test]
    fn styled_spans_carry_one_annotation() {
        let doc = parse("**bold** and ~~gone~~");
        let blocks = children(&doc);

        let rich = &blocks[0]["paragraph"]["rich_text"];
        assert_eq!(rich[0]["annotations"]["bold"], true);
        assert!(rich[1].get("annotations").is_none());
        assert_eq!(rich[2]["annotations"]["strikethrough"], true);
    }

    #[test]
    fn list_item_blocks() {
        let doc = parse("- bullet\n1. numbered");
        let blocks = children(&doc);

        assert_eq!(blocks[0]["type"], "bulleted_list_item");
        assert_eq!(
            blocks[0]["bulleted_list_item"]["rich_text"][0]["text"]["content"],
            "bullet"
        );
        assert_eq!(blocks[1]["type"], "numbered_list_item");
    }

    #[test]
    fn code_block_shape() {
        let doc = parse("```py\nx = 1\n```");
        let blocks = children(&doc);

        assert_eq!(blocks[0]["type"], "code");
        assert_eq!(blocks[0]["code"]["language"], "python");
        assert_eq!(
            blocks[0]["code"]["rich_text"][0]["text"]["content"],
            "x = 1"
        );
    }

    #[test]
    fn table_block_shape() {
        let doc = parse("| a | b |\n|---|---|\n| 1 |");
        let blocks = children(&doc);

        let table = &blocks[0]["table"];
        assert_eq!(table["table_width"], 2);
        assert_eq!(table["has_column_header"], true);
        assert_eq!(table["has_row_header"], false);

        let rows = table["children"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["type"], "table_row");
        // The short second row was padded to the table width.
        let cells = rows[1]["table_row"]["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[1][0]["text"]["content"], "");
    }

    #[test]
    fn page_payload_minimal() {
        let doc = parse("body");
        let payload = page_payload("db-123", "My Page", &doc, &PageOptions::default());

        assert_eq!(payload["parent"]["database_id"], "db-123");
        assert_eq!(
            payload["properties"]["Name"]["title"][0]["text"]["content"],
            "My Page"
        );
        assert!(payload["properties"].get("Status").is_none());
        assert!(payload["properties"].get("Category").is_none());
        assert!(payload["properties"].get("Tags").is_none());
        assert_eq!(payload["children"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn page_payload_with_properties() {
        let doc = parse("body");
        let opts = PageOptions {
            category: Some("Backend".to_string()),
            tags: vec!["rust".to_string(), "notion".to_string()],
            status: Some("In Progress".to_string()),
        };
        let payload = page_payload("db-123", "My Page", &doc, &opts);

        assert_eq!(payload["properties"]["Status"]["status"]["name"], "In Progress");
        assert_eq!(
            payload["properties"]["Category"]["select"]["name"],
            "Backend"
        );
        let tags = payload["properties"]["Tags"]["multi_select"]
            .as_array()
            .unwrap();
        assert_eq!(tags[0]["name"], "rust");
        assert_eq!(tags[1]["name"], "notion");
    }
}
