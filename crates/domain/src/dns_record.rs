mod record_type;

pub use record_type::RecordType;

/// One resource record from the answer section, reduced to what a caller
/// renders: the owner name and the zone-file presentation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub owner: String,

    pub text: String,
}

impl AnswerRecord {
    pub fn new(owner: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            text: text.into(),
        }
    }
}
