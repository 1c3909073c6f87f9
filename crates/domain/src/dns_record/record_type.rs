use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Question types a lookup can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    PTR,

    SRV,
    SOA,
    NS,
    NAPTR,
    SVCB,
    HTTPS,
    DNAME,

    DS,
    DNSKEY,
    RRSIG,
    NSEC,
    NSEC3,
    NSEC3PARAM,
    CDS,
    CDNSKEY,

    CAA,
    TLSA,
    SSHFP,
    OPENPGPKEY,

    HINFO,

    ANY,
}

impl RecordType {
    pub const ALL: [RecordType; 27] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::CNAME,
        RecordType::MX,
        RecordType::TXT,
        RecordType::PTR,
        RecordType::SRV,
        RecordType::SOA,
        RecordType::NS,
        RecordType::NAPTR,
        RecordType::SVCB,
        RecordType::HTTPS,
        RecordType::DNAME,
        RecordType::DS,
        RecordType::DNSKEY,
        RecordType::RRSIG,
        RecordType::NSEC,
        RecordType::NSEC3,
        RecordType::NSEC3PARAM,
        RecordType::CDS,
        RecordType::CDNSKEY,
        RecordType::CAA,
        RecordType::TLSA,
        RecordType::SSHFP,
        RecordType::OPENPGPKEY,
        RecordType::HINFO,
        RecordType::ANY,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::PTR => "PTR",
            RecordType::SRV => "SRV",
            RecordType::SOA => "SOA",
            RecordType::NS => "NS",
            RecordType::NAPTR => "NAPTR",
            RecordType::SVCB => "SVCB",
            RecordType::HTTPS => "HTTPS",
            RecordType::DNAME => "DNAME",
            RecordType::DS => "DS",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::RRSIG => "RRSIG",
            RecordType::NSEC => "NSEC",
            RecordType::NSEC3 => "NSEC3",
            RecordType::NSEC3PARAM => "NSEC3PARAM",
            RecordType::CDS => "CDS",
            RecordType::CDNSKEY => "CDNSKEY",
            RecordType::CAA => "CAA",
            RecordType::TLSA => "TLSA",
            RecordType::SSHFP => "SSHFP",
            RecordType::OPENPGPKEY => "OPENPGPKEY",
            RecordType::HINFO => "HINFO",
            RecordType::ANY => "ANY",
        }
    }

    /// Wire code (RFC 1035 TYPE / QTYPE value).
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::HINFO => 13,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::SRV => 33,
            RecordType::NAPTR => 35,
            RecordType::DNAME => 39,
            RecordType::DS => 43,
            RecordType::SSHFP => 44,
            RecordType::RRSIG => 46,
            RecordType::NSEC => 47,
            RecordType::DNSKEY => 48,
            RecordType::NSEC3 => 50,
            RecordType::NSEC3PARAM => 51,
            RecordType::TLSA => 52,
            RecordType::CDS => 59,
            RecordType::CDNSKEY => 60,
            RecordType::OPENPGPKEY => 61,
            RecordType::SVCB => 64,
            RecordType::HTTPS => 65,
            RecordType::ANY => 255,
            RecordType::CAA => 257,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|rt| rt.to_u16() == code)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|rt| rt.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownRecordType(s.to_string()))
    }
}
