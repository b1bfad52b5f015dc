//! Registry of the legal sources templates cite.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::content::Citation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalSource {
    pub name: &'static str,
    pub number: &'static str,
    pub promulgation_date: &'static str,
    pub issuer: &'static str,
    pub url: &'static str,
}

impl LegalSource {
    pub fn citation(&self) -> Citation {
        Citation {
            name: self.name.to_string(),
            number: self.number.to_string(),
            promulgation_date: self.promulgation_date.to_string(),
            issuer: self.issuer.to_string(),
            url: self.url.to_string(),
        }
    }
}

lazy_static! {
    static ref SOURCES: HashMap<&'static str, LegalSource> = {
        let mut sources = HashMap::new();
        sources.insert(
            "blds2015",
            LegalSource {
                name: "Bộ luật Dân sự 2015",
                number: "91/2015/QH13",
                promulgation_date: "24/11/2015",
                issuer: "Quốc hội khóa XIII",
                url: "https://vanban.chinhphu.vn/default.aspx?pageid=27160&docid=183188",
            },
        );
        sources.insert(
            "blld2019",
            LegalSource {
                name: "Bộ luật Lao động 2019",
                number: "45/2019/QH14",
                promulgation_date: "20/11/2019",
                issuer: "Quốc hội khóa XIV",
                url: "https://vanban.chinhphu.vn/default.aspx?pageid=27160&docid=198486",
            },
        );
        sources.insert(
            "ltm2005",
            LegalSource {
                name: "Luật Thương mại 2005",
                number: "36/2005/QH11",
                promulgation_date: "14/06/2005",
                issuer: "Quốc hội khóa XI",
                url: "https://vanban.chinhphu.vn/default.aspx?pageid=27160&docid=15587",
            },
        );
        sources.insert(
            "lno2023",
            LegalSource {
                name: "Luật Nhà ở 2023",
                number: "27/2023/QH15",
                promulgation_date: "27/11/2023",
                issuer: "Quốc hội khóa XV",
                url: "https://vanban.chinhphu.vn/default.aspx?pageid=27160&docid=209274",
            },
        );
        sources.insert(
            "nd123",
            LegalSource {
                name: "Nghị định 123/2020/NĐ-CP",
                number: "123/2020/NĐ-CP",
                promulgation_date: "19/10/2020",
                issuer: "Chính phủ",
                url: "https://vanban.chinhphu.vn/default.aspx?pageid=27160&docid=201455",
            },
        );
        sources
    };
}

pub fn lookup(key: &str) -> Option<&'static LegalSource> {
    SOURCES.get(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_source() {
        let source = lookup("lno2023").unwrap();
        assert_eq!(source.number, "27/2023/QH15");
        assert_eq!(source.issuer, "Quốc hội khóa XV");
    }

    #[test]
    fn test_lookup_unknown_source() {
        assert!(lookup("bogus").is_none());
    }

    #[test]
    fn test_citation_text() {
        let citation = lookup("nd123").unwrap().citation();
        assert_eq!(
            citation.to_text(),
            "Nghị định 123/2020/NĐ-CP (123/2020/NĐ-CP), Chính phủ ban hành ngày 19/10/2020. Nguồn: https://vanban.chinhphu.vn/default.aspx?pageid=27160&docid=201455"
        );
    }
}
