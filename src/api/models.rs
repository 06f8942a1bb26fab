use serde::{Deserialize, Serialize};

/// Request body for the recommend-sequence endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SearchQuery {
    pub sequence: String,
    pub top_k: u32,
}

/// One ranked match from the similarity-search service
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchMatch {
    /// UniProt accession
    pub id: String,
    /// Link to the UniProt entry page
    pub id_link: String,
    /// Cosine similarity between embeddings, in [-1, 1]
    pub similarity: f64,
    /// Sequence identity percentage, in [0, 100]
    pub identity: f64,
    /// Pfam domain names
    pub pfam: Vec<String>,
    /// Pfam entry links, parallel to `pfam`
    pub pfam_links: Vec<String>,
}

/// A match positioned in the result table
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// Zero-based position in the response's `results` array
    pub row_id: usize,
    pub entry: SearchMatch,
}

impl ResultRow {
    pub fn from_match(row_id: usize, entry: SearchMatch) -> Self {
        Self { row_id, entry }
    }
}
