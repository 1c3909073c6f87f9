use super::RecordType;
use std::sync::Arc;

/// A single lookup request as the caller phrased it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    /// Domain before normalization.
    pub domain: Arc<str>,
    pub record_type: RecordType,
    /// Record type spelled the way the caller typed it.
    pub record_type_label: Arc<str>,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            record_type_label: record_type.as_str().into(),
        }
    }

    pub fn with_label(
        domain: impl Into<Arc<str>>,
        record_type: RecordType,
        record_type_label: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            record_type_label: record_type_label.into(),
        }
    }
}
