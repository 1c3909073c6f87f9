use std::time::Duration;

const ELAPSED_FOOTER_PREFIX: &str = "Got answer in";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub label: String,

    pub value: String,

    /// Display hint: render next to other inline entries instead of on its own row.
    pub inline: bool,
}

impl ReportEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            inline,
        }
    }
}

/// Display-ready outcome of one lookup.
///
/// Holds either a single status entry (`success == false`) or one entry per
/// answer record (`success == true`), never a mix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupReport {
    pub entries: Vec<ReportEntry>,
    pub footer: Option<String>,
    pub success: bool,
    pub elapsed: Option<Duration>,
}

impl LookupReport {
    /// Report for a lookup that stopped before producing answers.
    pub fn status(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            entries: vec![ReportEntry::new(label, value, true)],
            footer: None,
            success: false,
            elapsed: None,
        }
    }

    /// Report listing the answer section, one entry per record.
    pub fn answers(entries: Vec<ReportEntry>, elapsed: Duration) -> Self {
        debug_assert!(!entries.is_empty(), "answer report without answers");
        Self {
            entries,
            footer: Some(format_elapsed(elapsed)),
            success: true,
            elapsed: Some(elapsed),
        }
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{} {:?}.", ELAPSED_FOOTER_PREFIX, elapsed)
}
