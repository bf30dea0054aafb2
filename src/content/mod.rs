use chrono::{DateTime, FixedOffset};
use serde_json::Value;

pub mod normalizer;
pub mod read_time;
pub mod text_formatter;

const PARAGRAPH: &str = "paragraph";
const TEXT: &str = "text";

/// Body of a post: a markup string, or the CMS rich-text block list.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Plain(String),
    Blocks(Vec<Block>),
    Unsupported,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: String,
    pub children: Vec<Inline>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Inline {
    pub kind: String,
    pub text: String,
}

impl Content {
    pub fn from_value(value: Option<&Value>) -> Content {
        match value {
            Some(Value::String(text)) => Content::Plain(text.clone()),
            Some(Value::Array(blocks)) => Content::Blocks(blocks.iter().map(Block::from_value).collect()),
            _ => Content::Unsupported,
        }
    }

    /// Concatenated text of every paragraph, one entry per paragraph block.
    pub fn paragraphs(blocks: &[Block]) -> impl Iterator<Item=String> + '_ {
        blocks.iter().filter_map(Block::paragraph_text)
    }
}

impl Block {
    fn from_value(value: &Value) -> Block {
        let kind = value.get("type").and_then(Value::as_str).unwrap_or_default().to_string();
        let children = value.get("children")
            .and_then(Value::as_array)
            .map(|children| children.iter().map(Inline::from_value).collect())
            .unwrap_or_default();
        Block { kind, children }
    }

    pub fn paragraph(texts: &[&str]) -> Block {
        Block {
            kind: PARAGRAPH.to_string(),
            children: texts.iter().map(|t| Inline { kind: TEXT.to_string(), text: t.to_string() }).collect(),
        }
    }

    pub fn is_paragraph(&self) -> bool {
        self.kind == PARAGRAPH
    }

    pub fn text_children(&self) -> impl Iterator<Item=&str> + '_ {
        self.children.iter()
            .filter(|child| child.kind == TEXT)
            .map(|child| child.text.as_str())
    }

    /// `None` for anything that is not a paragraph. Non-text children are skipped.
    pub fn paragraph_text(&self) -> Option<String> {
        if !self.is_paragraph() {
            return None;
        }
        Some(self.text_children().collect())
    }
}

impl Inline {
    fn from_value(value: &Value) -> Inline {
        let kind = value.get("type").and_then(Value::as_str).unwrap_or_default().to_string();
        let text = value.get("text").and_then(Value::as_str).unwrap_or_default().to_string();
        Inline { kind, text }
    }
}

/// Post body after formatting, ready to be placed in a page.
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedBody {
    Markup(String),
    Paragraphs(Vec<String>),
    Unsupported,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Canonical, shape-independent view of a post. Built per render and then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct PostView {
    pub slug: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub published_at: Option<DateTime<FixedOffset>>,
    pub image_url: Option<String>,
    pub author: Option<Author>,
    pub body: FormattedBody,
    pub read_time: u32,
}
