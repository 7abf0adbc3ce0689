pub mod acronym_detector;
pub mod discovery;
pub mod document;
pub mod reader;
pub mod substitution;

// Re-export main types for convenient access
pub use acronym_detector::{
    default_extractor,
    extract,
    AcronymExtractor,
    AcronymMatch,
    ExtractorRules,
};

// Re-export document-level helpers
pub use document::{collect_definitions, Document};
pub use substitution::{has_acronym, sub_acronym};
