// Résumé text analysis engine.
// Implements: section segmentation, per-section field extraction, skill/language detection.
// Everything except `handlers` is pure and synchronous; file decoding lives in `extraction`.

pub mod bullets;
pub mod contact;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod parser;
pub mod patterns;
pub mod projects;
pub mod sections;
pub mod skills;
pub mod vocab;

// Re-export the entry point consumed by handlers.
pub use parser::{parse_resume, ParseOptions};
