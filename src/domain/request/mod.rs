pub mod entity;
pub mod invariants;

pub use entity::{
    infer_mime_type, DocumentUpload, InputSource, TranslationOutcome, TranslationRequest,
    ACCEPTED_MIME_TYPES, MAX_DOCUMENT_BYTES,
};
pub use invariants::validate_document;
