//! Builder pattern for constructing documents.

use super::types::{Article, Block, Document, Paragraph, Party, Signature, Table};

/// Builder for constructing a Document with fluent API.
#[derive(Debug)]
pub struct DocumentBuilder {
    template_id: String,
    title: String,
    blocks: Vec<Block>,
}

impl DocumentBuilder {
    /// Create a new builder.
    pub fn new(template_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn blocks(mut self, blocks: impl IntoIterator<Item = Block>) -> Self {
        self.blocks.extend(blocks);
        self
    }

    pub fn letterhead(self, lines: Vec<Paragraph>) -> Self {
        self.block(Block::Letterhead { lines })
    }

    /// National motto header used by every contract and record.
    pub fn republic_letterhead(self) -> Self {
        self.letterhead(vec![
            Paragraph::strong("CỘNG HÒA XÃ HỘI CHỦ NGHĨA VIỆT NAM"),
            Paragraph::strong("Độc lập - Tự do - Hạnh phúc"),
            Paragraph::plain("———————"),
        ])
    }

    pub fn heading(self, text: impl Into<String>) -> Self {
        self.block(Block::Heading { text: text.into() })
    }

    pub fn doc_number(self, text: impl Into<String>) -> Self {
        self.block(Block::DocNumber { text: text.into() })
    }

    pub fn paragraph(self, paragraph: Paragraph) -> Self {
        self.block(Block::Paragraph(paragraph))
    }

    /// Add a paragraph only when there is one.
    pub fn paragraph_if(self, paragraph: Option<Paragraph>) -> Self {
        match paragraph {
            Some(paragraph) => self.paragraph(paragraph),
            None => self,
        }
    }

    /// Add a plain paragraph.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.paragraph(Paragraph::plain(text))
    }

    /// Add an indented legal-basis line.
    pub fn basis(self, text: impl Into<String>) -> Self {
        self.paragraph(Paragraph::plain(text).indented())
    }

    pub fn party(self, party: Party) -> Self {
        self.block(Block::Party(party))
    }

    pub fn article(self, article: Article) -> Self {
        self.block(Block::Article(article))
    }

    pub fn table(self, table: Table) -> Self {
        self.block(Block::Table(table))
    }

    pub fn signatures(self, signatures: Vec<Signature>) -> Self {
        self.block(Block::Signatures { signatures })
    }

    /// Build the final Document.
    pub fn build(self) -> Document {
        Document {
            template_id: self.template_id,
            title: self.title,
            blocks: self.blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_block_order() {
        let doc = DocumentBuilder::new("receipt", "Giấy Biên Nhận")
            .heading("GIẤY BIÊN NHẬN")
            .doc_number("Ngày 1/2/2026")
            .text("Tôi tên: A")
            .build();

        assert_eq!(doc.template_id, "receipt");
        assert_eq!(doc.blocks.len(), 3);
        assert_eq!(
            doc.blocks[0],
            Block::Heading {
                text: "GIẤY BIÊN NHẬN".to_string()
            }
        );
    }

    #[test]
    fn test_paragraph_if_skips_none() {
        let doc = DocumentBuilder::new("x", "X")
            .paragraph_if(None)
            .paragraph_if(Some(Paragraph::plain("a")))
            .build();
        assert_eq!(doc.blocks.len(), 1);
    }

    #[test]
    fn test_republic_letterhead() {
        let doc = DocumentBuilder::new("x", "X").republic_letterhead().build();
        match &doc.blocks[0] {
            Block::Letterhead { lines } => {
                assert_eq!(lines.len(), 3);
                assert_eq!(lines[0].to_text(), "CỘNG HÒA XÃ HỘI CHỦ NGHĨA VIỆT NAM");
            }
            other => panic!("unexpected block {:?}", other),
        }
    }

    #[test]
    fn test_article_heading() {
        assert_eq!(
            Article::numbered(8, "Điều khoản chung").heading().as_deref(),
            Some("Điều 8. Điều khoản chung")
        );
        assert_eq!(
            Article::titled("NỘI DUNG ỦY QUYỀN").heading().as_deref(),
            Some("NỘI DUNG ỦY QUYỀN")
        );
        assert_eq!(Article::untitled().heading(), None);
    }
}
