use dotlookup_domain::NormalizationError;
use hickory_proto::rr::Name;
use tracing::debug;

/// Turns user input into the ASCII-compatible (Punycode) form used on the wire.
pub struct DomainNormalizer;

impl DomainNormalizer {
    /// Applies IDNA to-ASCII to every label. Also rejects labels over 63
    /// octets and names over 255 octets.
    pub fn normalize(raw: &str) -> Result<String, NormalizationError> {
        let name = Name::from_utf8(raw).map_err(|e| NormalizationError::new(raw, e.to_string()))?;
        let canonical = name.to_ascii();

        if canonical != raw {
            debug!(raw = %raw, canonical = %canonical, "Domain normalized");
        }

        Ok(canonical)
    }
}
