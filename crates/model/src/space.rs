//! Domain records ("spaces"): one embedded gene/protein data point with its
//! planar coordinates and an annotation bag.
//!
//! The annotation bag went through several incompatible shapes over the life
//! of the backend, so every mode-specific field is optional with a serde
//! default and unknown fields are kept verbatim in `extra`. Consumers decide
//! what to surface; missing fields are skipped, never an error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One data point in projection space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub value: SpaceValue,
}

impl Space {
    pub fn new(id: impl Into<String>, x: f64, y: f64, value: SpaceValue) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            value,
        }
    }
}

/// Annotation bag attached to a space.
///
/// Invariant: `hypothetical == true` means `ko`, `product`, `gene_name` and
/// `label` carry no meaning for this record and must not be surfaced, even
/// when the backend echoes stale values for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceValue {
    /// Display label (the embedded model word).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    /// Fill color as a hex string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Similarity/rank indicator for neighbor queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ko: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene_name: Option<String>,
    /// Functional category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ncbi_nr: Option<String>,

    /// Prediction confidence gate for hypothetical records.
    #[serde(default)]
    pub significant: bool,
    #[serde(default)]
    pub hypothetical: bool,

    /// Gene family count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u64>,

    /// Per-taxon observation counts, when the backend includes them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_distribution: Option<Vec<(String, u64)>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_ratio: Option<f64>,

    /// Fields this schema does not know about yet; round-tripped untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SpaceValue {
    /// Display pairs for the info panel, in render order.
    ///
    /// Hypothetical records surface only the word, predicted class,
    /// prediction confidence and NCBI NR description; everything
    /// annotation-backed is withheld. Absent fields are skipped.
    pub fn info_fields(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut push = |key: &str, value: Option<String>| {
            if let Some(v) = value {
                pairs.push((key.to_string(), v));
            }
        };

        push("Word", self.word.clone());
        if self.hypothetical {
            push("Predicted class", self.predicted_class.clone());
            let confidence = if self.significant { "high" } else { "low" };
            push("Prediction confidence", Some(confidence.to_string()));
            push("NCBI NR description", self.ncbi_nr.clone());
        } else {
            push("KO", self.ko.clone());
            push("Product", self.product.clone());
            push("Gene name", self.gene_name.clone());
            push("Functional category", self.label.clone());
            push("Gene family count", self.word_count.map(|c| c.to_string()));
        }
        push("Distance", self.distance.map(|d| d.to_string()));
        push("Taxa ratio", self.tax_ratio.map(|r| r.to_string()));

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::{Space, SpaceValue};
    use pretty_assertions::assert_eq;

    fn annotated() -> SpaceValue {
        SpaceValue {
            word: Some("K00001".to_string()),
            color: Some("#ff0000".to_string()),
            ko: Some("K00001".to_string()),
            product: Some("alcohol dehydrogenase".to_string()),
            gene_name: Some("adh".to_string()),
            label: Some("Carbohydrate metabolism".to_string()),
            word_count: Some(42),
            ..SpaceValue::default()
        }
    }

    #[test]
    fn info_fields_for_annotated_record() {
        let got = annotated().info_fields();
        let keys: Vec<&str> = got.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "Word",
                "KO",
                "Product",
                "Gene name",
                "Functional category",
                "Gene family count"
            ]
        );
    }

    #[test]
    fn hypothetical_record_withholds_annotations() {
        let value = SpaceValue {
            hypothetical: true,
            significant: true,
            predicted_class: Some("transporter".to_string()),
            ncbi_nr: Some("hypothetical protein".to_string()),
            ..annotated()
        };
        let got = value.info_fields();
        for (key, _) in &got {
            assert!(
                !matches!(
                    key.as_str(),
                    "KO" | "Product" | "Gene name" | "Functional category"
                ),
                "annotation field {key} leaked into hypothetical info"
            );
        }
        assert!(
            got.contains(&("Prediction confidence".to_string(), "high".to_string())),
            "missing confidence pair: {got:?}"
        );
    }

    #[test]
    fn missing_fields_are_skipped_not_rendered() {
        let got = SpaceValue::default().info_fields();
        // Only the constant confidence pair could apply, and this record is
        // not hypothetical, so nothing renders at all.
        assert!(got.is_empty(), "expected no pairs, got {got:?}");
    }

    #[test]
    fn unknown_wire_fields_round_trip() {
        let raw = r#"{
            "id": "s1",
            "x": 1.5,
            "y": -2.0,
            "value": {"word": "K00001", "cluster": "7", "umap_dim": 3}
        }"#;
        let space: Space = serde_json::from_str(raw).expect("parse");
        assert_eq!(space.value.extra.get("cluster"), Some(&"7".into()));

        let back = serde_json::to_value(&space).expect("serialize");
        assert_eq!(back["value"]["umap_dim"], 3);
    }
}
