//! Downloadable export documents.
//!
//! The web layer offers the current result set as a tab-separated download;
//! this module builds the document (filename + MIME type + body) and the two
//! delivery forms: a `data:` URL for the browser anchor trick and a plain
//! file write for native tooling.

use std::io;
use std::path::{Path, PathBuf};

use model::Space;

pub const TSV_CONTENT_TYPE: &str = "text/tsv";

const TSV_HEADER: &[&str] = &[
    "id",
    "x",
    "y",
    "word",
    "ko",
    "product",
    "gene_name",
    "functional_category",
    "predicted_class",
    "confidence",
];

/// A caller-named export with caller-supplied text content.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub filename: String,
    pub content_type: String,
    pub content: String,
}

impl Document {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            content: content.into(),
        }
    }

    pub fn tsv(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(filename, TSV_CONTENT_TYPE, content)
    }

    /// `data:{type};charset=utf-8,{encoded}` form served to a download anchor.
    pub fn data_url(&self) -> String {
        format!(
            "data:{};charset=utf-8,{}",
            self.content_type,
            urlencoding::encode(&self.content)
        )
    }

    /// Writes the document under `dir` and returns the written path.
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.content)?;
        Ok(path)
    }
}

/// Tab-separated rendering of a result set, header row first.
///
/// Hypothetical records leave the annotation columns empty rather than
/// echoing values the gating invariant says are meaningless; non-hypothetical
/// records leave the prediction columns empty.
pub fn spaces_to_tsv(spaces: &[Space]) -> String {
    let mut out = String::new();
    out.push_str(&TSV_HEADER.join("\t"));
    out.push('\n');

    for space in spaces {
        let v = &space.value;
        let opt = |field: &Option<String>| field.clone().unwrap_or_default();
        let (ko, product, gene_name, category, predicted, confidence) = if v.hypothetical {
            let confidence = if v.significant { "high" } else { "low" };
            (
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                opt(&v.predicted_class),
                confidence.to_string(),
            )
        } else {
            (
                opt(&v.ko),
                opt(&v.product),
                opt(&v.gene_name),
                opt(&v.label),
                String::new(),
                String::new(),
            )
        };

        let row = [
            space.id.clone(),
            space.x.to_string(),
            space.y.to_string(),
            opt(&v.word),
            ko,
            product,
            gene_name,
            category,
            predicted,
            confidence,
        ];
        out.push_str(&row.join("\t"));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{Document, TSV_CONTENT_TYPE, spaces_to_tsv};
    use model::{Space, SpaceValue};
    use pretty_assertions::assert_eq;

    #[test]
    fn tsv_document_defaults_content_type() {
        let doc = Document::tsv("spaces.tsv", "id\tx\n");
        assert_eq!(doc.content_type, TSV_CONTENT_TYPE);
    }

    #[test]
    fn data_url_encodes_content() {
        let doc = Document::tsv("out.tsv", "a\tb");
        assert_eq!(doc.data_url(), "data:text/tsv;charset=utf-8,a%09b");
    }

    #[test]
    fn export_gates_hypothetical_rows() {
        let annotated = Space::new(
            "s1",
            1.0,
            2.0,
            SpaceValue {
                word: Some("K00001".to_string()),
                ko: Some("K00001".to_string()),
                product: Some("dehydrogenase".to_string()),
                ..SpaceValue::default()
            },
        );
        let hypothetical = Space::new(
            "s2",
            3.0,
            4.0,
            SpaceValue {
                word: Some("Cluster_9".to_string()),
                ko: Some("stale".to_string()),
                hypothetical: true,
                significant: true,
                predicted_class: Some("transporter".to_string()),
                ..SpaceValue::default()
            },
        );

        let tsv = spaces_to_tsv(&[annotated, hypothetical]);
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines.len(), 3);

        let annotated_row: Vec<&str> = lines[1].split('\t').collect();
        assert_eq!(annotated_row[4], "K00001");

        let hypothetical_row: Vec<&str> = lines[2].split('\t').collect();
        assert_eq!(hypothetical_row[4], "", "ko must stay empty");
        assert_eq!(hypothetical_row[8], "transporter");
        assert_eq!(hypothetical_row[9], "high");
    }

    #[test]
    fn write_to_places_file_under_dir() {
        let dir = std::env::temp_dir();
        let doc = Document::tsv("genespace_export_test.tsv", "id\n1\n");
        let path = doc.write_to(&dir).expect("write");
        assert_eq!(
            std::fs::read_to_string(&path).expect("read back"),
            "id\n1\n"
        );
        let _ = std::fs::remove_file(path);
    }
}
