//! Namespace extraction from parsed JavaScript.
//!
//! Recognizes the two Closure Library dependency calls:
//!
//! | Qualified callee | Effect                                      |
//! |------------------|---------------------------------------------|
//! | `goog.provide`   | first string argument added to `provides`   |
//! | `goog.require`   | first string argument added to `requires`   |
//!
//! Everything else is ignored.

pub mod dependency_extractor;
pub mod qualified_name;


pub use dependency_extractor::{
    DependencyExtractor, DependencyKind, ExtractionResult, PROVIDE_CALLEE, REQUIRE_CALLEE,
    classify_call,
};
pub use qualified_name::qualified_name;
