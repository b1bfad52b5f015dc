//! Core content-tree types produced by the composer.

use serde::{Deserialize, Serialize};

/// A fully composed document, ready for layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub template_id: String,
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Document {
    /// All articles in document order, nested ones excluded.
    pub fn articles(&self) -> impl Iterator<Item = &Article> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Article(article) => Some(article),
            _ => None,
        })
    }

    /// All tables, including those nested inside articles.
    pub fn tables(&self) -> Vec<&Table> {
        fn collect<'a>(blocks: &'a [Block], out: &mut Vec<&'a Table>) {
            for block in blocks {
                match block {
                    Block::Table(table) => out.push(table),
                    Block::Article(article) => collect(&article.body, out),
                    _ => {}
                }
            }
        }
        let mut tables = Vec::new();
        collect(&self.blocks, &mut tables);
        tables
    }

    pub fn legal_footer(&self) -> Option<&LegalFooter> {
        self.blocks.iter().find_map(|block| match block {
            Block::LegalFooter(footer) => Some(footer),
            _ => None,
        })
    }
}

/// Top-level building block of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Centered header lines above the title.
    Letterhead { lines: Vec<Paragraph> },
    Heading { text: String },
    /// Document number and date line under the heading.
    DocNumber { text: String },
    Paragraph(Paragraph),
    Party(Party),
    Article(Article),
    Table(Table),
    Signatures { signatures: Vec<Signature> },
    LegalFooter(LegalFooter),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphStyle {
    #[default]
    Normal,
    /// First-line indent, used for the legal basis lines.
    Indented,
    /// Small, muted text.
    Note,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
}

/// A run of text spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub spans: Vec<Span>,
    #[serde(default)]
    pub style: ParagraphStyle,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().text(text)
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self::new().bold(text)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.spans.push(Span {
            text: text.into(),
            bold: false,
        });
        self
    }

    pub fn bold(mut self, text: impl Into<String>) -> Self {
        self.spans.push(Span {
            text: text.into(),
            bold: true,
        });
        self
    }

    pub fn indented(mut self) -> Self {
        self.style = ParagraphStyle::Indented;
        self
    }

    pub fn note(mut self) -> Self {
        self.style = ParagraphStyle::Note;
        self
    }

    /// Concatenated span text without markup.
    pub fn to_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// Identification block of one contracting party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub label: String,
    pub lines: Vec<Paragraph>,
}

/// A numbered or titled section of the document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub body: Vec<Block>,
}

impl Article {
    /// "Điều N. Title"
    pub fn numbered(number: u32, title: impl Into<String>) -> Self {
        Self {
            number: Some(number),
            title: Some(title.into()),
            body: Vec::new(),
        }
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            number: None,
            title: Some(title.into()),
            body: Vec::new(),
        }
    }

    pub fn untitled() -> Self {
        Self {
            number: None,
            title: None,
            body: Vec::new(),
        }
    }

    pub fn line(mut self, paragraph: Paragraph) -> Self {
        self.body.push(Block::Paragraph(paragraph));
        self
    }

    pub fn line_if(self, paragraph: Option<Paragraph>) -> Self {
        match paragraph {
            Some(paragraph) => self.line(paragraph),
            None => self,
        }
    }

    pub fn table(mut self, table: Table) -> Self {
        self.body.push(Block::Table(table));
        self
    }

    /// The rendered heading line, if any.
    pub fn heading(&self) -> Option<String> {
        match (self.number, &self.title) {
            (Some(number), Some(title)) => Some(format!("Điều {}. {}", number, title)),
            (Some(number), None) => Some(format!("Điều {}", number)),
            (None, Some(title)) => Some(title.clone()),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub label: String,
    pub align: Align,
}

impl Column {
    pub fn new(label: impl Into<String>, align: Align) -> Self {
        Self {
            label: label.into(),
            align,
        }
    }
}

/// Summary row under a table body, spanning every column but the last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalRow {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub emphasized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub totals: Vec<TotalRow>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            totals: Vec::new(),
        }
    }

    pub fn row(mut self, cells: Vec<String>) -> Self {
        self.rows.push(cells);
        self
    }

    pub fn total(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.totals.push(TotalRow {
            label: label.into(),
            value: value.into(),
            emphasized: false,
        });
        self
    }

    pub fn grand_total(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.totals.push(TotalRow {
            label: label.into(),
            value: value.into(),
            emphasized: true,
        });
        self
    }
}

/// One signature column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub title: String,
    pub note: String,
    pub name: String,
}

/// A resolved legal-source citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub name: String,
    pub number: String,
    pub promulgation_date: String,
    pub issuer: String,
    pub url: String,
}

impl Citation {
    /// "<name> (<number>), <issuer> ban hành ngày <date>. Nguồn: <url>"
    pub fn to_text(&self) -> String {
        format!(
            "{} ({}), {} ban hành ngày {}. Nguồn: {}",
            self.name, self.number, self.issuer, self.promulgation_date, self.url
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalFooter {
    pub heading: String,
    pub citations: Vec<Citation>,
    pub disclaimer: String,
}
