use super::RecordType;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DnsClass {
    #[default]
    Internet,
}

impl DnsClass {
    pub fn to_u16(&self) -> u16 {
        match self {
            DnsClass::Internet => 1,
        }
    }
}

/// The question section of an outgoing query.
///
/// Built from an already normalized domain, so construction cannot fail: the
/// name only gains its trailing root label here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireQuestion {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub class: DnsClass,
    pub recursion_desired: bool,
}

impl WireQuestion {
    pub fn new(canonical_domain: &str, record_type: RecordType) -> Self {
        Self {
            name: fully_qualify(canonical_domain).into(),
            record_type,
            class: DnsClass::Internet,
            recursion_desired: true,
        }
    }
}

fn fully_qualify(domain: &str) -> String {
    if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{}.", domain)
    }
}
