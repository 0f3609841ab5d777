use crate::utils::error::{EtlError, ErrorSeverity};

/// 頂層 JSON 物件，鍵的順序依輸入保留（serde_json `preserve_order`）
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Result of reading the input document.
///
/// A broken input never aborts the run: it is recorded as `Recovered` and the
/// rest of the pipeline sees an empty document. Keeping the reason around lets
/// callers tell "the file was `{}`" apart from "the file could not be read".
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Document),
    Recovered { reason: EtlError },
}

impl LoadOutcome {
    pub fn is_recovered(&self) -> bool {
        matches!(self, LoadOutcome::Recovered { .. })
    }

    /// 降級處理的讀取失敗一律是 `Low`，不論原因
    pub fn severity(&self) -> Option<ErrorSeverity> {
        match self {
            LoadOutcome::Loaded(_) => None,
            LoadOutcome::Recovered { .. } => Some(ErrorSeverity::Low),
        }
    }

    pub fn into_document(self) -> Document {
        match self {
            LoadOutcome::Loaded(document) => document,
            LoadOutcome::Recovered { .. } => Document::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub timestamps_rewritten: usize,
    pub strings_reversed: usize,
    pub lists_deduplicated: usize,
    pub passed_through: usize,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub document: Document,
    pub stats: TransformStats,
}
