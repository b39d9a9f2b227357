use std::fmt;
use std::str::FromStr;

/// Dimension along which the backend is queried.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// Kegg ortholog id.
    Space,
    /// Functional category.
    Label,
    /// Gene description.
    GeneProduct,
    /// Gene name.
    Gene,
    /// Nearest neighbors of a model word (takes a `k` parameter).
    Neighbors,
    /// Model word, the only mode accepting multiple terms.
    Word,
}

impl SearchMode {
    pub const ALL: [SearchMode; 6] = [
        SearchMode::Space,
        SearchMode::Label,
        SearchMode::GeneProduct,
        SearchMode::Gene,
        SearchMode::Neighbors,
        SearchMode::Word,
    ];

    /// Path segment on the wire.
    pub fn as_path(self) -> &'static str {
        match self {
            SearchMode::Space => "space",
            SearchMode::Label => "label",
            SearchMode::GeneProduct => "gene_product",
            SearchMode::Gene => "gene",
            SearchMode::Neighbors => "neighbors",
            SearchMode::Word => "word",
        }
    }

    /// Label shown in the search-mode picker.
    pub fn display_label(self) -> &'static str {
        match self {
            SearchMode::Space => "Kegg ortholog",
            SearchMode::Label => "Functional category",
            SearchMode::GeneProduct => "Gene description",
            SearchMode::Gene => "Gene name",
            SearchMode::Neighbors => "Neighbors",
            SearchMode::Word => "Model word",
        }
    }

    /// Whether the mode accepts a multi-term query.
    pub fn is_multi_term(self) -> bool {
        matches!(self, SearchMode::Word)
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchMode::ALL
            .into_iter()
            .find(|m| m.as_path() == s)
            .ok_or_else(|| format!("unknown search mode: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::SearchMode;

    #[test]
    fn paths_round_trip() {
        for mode in SearchMode::ALL {
            assert_eq!(mode.as_path().parse::<SearchMode>(), Ok(mode));
        }
        assert!("umap".parse::<SearchMode>().is_err());
    }

    #[test]
    fn only_word_mode_is_multi_term() {
        let multi: Vec<SearchMode> = SearchMode::ALL
            .into_iter()
            .filter(|m| m.is_multi_term())
            .collect();
        assert_eq!(multi, vec![SearchMode::Word]);
    }
}
