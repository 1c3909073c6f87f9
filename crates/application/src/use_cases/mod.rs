pub mod dns;

pub use dns::{
    ExecuteLookupUseCase, ENCODING_ERROR_LABEL, NOT_FOUND_LABEL, REQUEST_ERROR_LABEL,
    RESPONSE_CODE_LABEL,
};
