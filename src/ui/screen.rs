//! A rendered page as a list of blocks. Pages build these as plain data;
//! printing to the terminal is a separate step.

use crate::cli_style::{
    print_empty_list, print_key_value, print_key_value_highlight, print_list_item,
    print_reward_banner, print_section_footer, print_section_header, print_text, print_warning,
    TableBuilder,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text(String),
    /// Non-blocking inline warning, e.g. the sample data notice.
    Notice(String),
    /// Call to action, e.g. the daily reward.
    Banner(String),
    KeyValue {
        key: String,
        value: String,
        highlight: bool,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    List(Vec<String>),
    Empty {
        message: String,
        hint: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    title: String,
    blocks: Vec<Block>,
}

impl Screen {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Text(text.into()));
        self
    }

    pub fn notice(&mut self, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Notice(text.into()));
        self
    }

    pub fn banner(&mut self, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Banner(text.into()));
        self
    }

    pub fn key_value(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::KeyValue {
            key: key.into(),
            value: value.into(),
            highlight: false,
        });
        self
    }

    pub fn key_value_highlight(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.blocks.push(Block::KeyValue {
            key: key.into(),
            value: value.into(),
            highlight: true,
        });
        self
    }

    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> &mut Self {
        self.blocks.push(Block::Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        });
        self
    }

    pub fn list(&mut self, items: Vec<String>) -> &mut Self {
        self.blocks.push(Block::List(items));
        self
    }

    pub fn empty(&mut self, message: impl Into<String>, hint: Option<&str>) -> &mut Self {
        self.blocks.push(Block::Empty {
            message: message.into(),
            hint: hint.map(String::from),
        });
        self
    }

    /// Uncolored text rendition, one entry per visible line.
    pub fn plain_lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone()];
        for block in &self.blocks {
            match block {
                Block::Text(text) | Block::Notice(text) | Block::Banner(text) => {
                    lines.push(text.clone())
                }
                Block::KeyValue { key, value, .. } => lines.push(format!("{}: {}", key, value)),
                Block::Table { headers, rows } => {
                    lines.push(headers.join(" | "));
                    lines.extend(rows.iter().map(|row| row.join(" | ")));
                }
                Block::List(items) => lines.extend(items.iter().cloned()),
                Block::Empty { message, hint } => {
                    lines.push(message.clone());
                    if let Some(hint) = hint {
                        lines.push(hint.clone());
                    }
                }
            }
        }
        lines
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.plain_lines().iter().any(|line| line.contains(needle))
    }

    pub fn print(&self) {
        print_section_header(&self.title);
        for block in &self.blocks {
            match block {
                Block::Text(text) => print_text(text),
                Block::Notice(text) => print_warning(text),
                Block::Banner(text) => print_reward_banner(text),
                Block::KeyValue {
                    key,
                    value,
                    highlight: false,
                } => print_key_value(key, value),
                Block::KeyValue {
                    key,
                    value,
                    highlight: true,
                } => print_key_value_highlight(key, value),
                Block::Table { headers, rows } => {
                    let mut table = TableBuilder::new(headers);
                    for row in rows {
                        table.add_row(row);
                    }
                    table.print();
                }
                Block::List(items) => {
                    for item in items {
                        print_list_item(item, 1);
                    }
                }
                Block::Empty { message, hint } => {
                    print_empty_list(message);
                    if let Some(hint) = hint {
                        print_list_item(hint, 2);
                    }
                }
            }
        }
        print_section_footer();
    }
}
