//! Mapping between `dotlookup_domain::RecordType` and `hickory_proto::rr::RecordType`.
//!
//! Goes through the numeric TYPE code so that types hickory models only as
//! `Unknown(code)` (DNAME, for one) still encode correctly.

use dotlookup_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }
}
