//! Assessment submission: multipart intake, resume text extraction, and the
//! pipeline that runs the analyzers and persists the verdict.

pub mod extract;
pub mod handlers;
pub mod pipeline;
