//! Canonical annotation types for the conversion pipeline.
//!
//! This module defines the unit of work flowing through the converter: a
//! pixel-space [`AnnotationRecord`] parsed from either a raw VisDrone line
//! or an already-normalized YOLO line, the typed bounding boxes it carries,
//! and the [`ClassPolicy`] deciding which records survive conversion.
//!
//! # Design Principles
//!
//! 1. **Type Safety**: coordinate spaces are marker types, so a normalized
//!    box cannot be passed where a pixel box is expected.
//!
//! 2. **Permissive Construction**: "invalid" geometry (negative or
//!    overflowing coordinates) is representable and passes through
//!    conversion unclamped; this converter reproduces its input rather
//!    than judging it.
//!
//! 3. **Best-Effort Parsing**: unrecognized lines are skipped, never
//!    errors. Annotation files in the wild are partially corrupt, and one
//!    bad row must not abort the rest of the file.

mod bbox;
mod policy;
mod record;
mod space;

// Re-export core types for convenient access
pub use bbox::BBoxXYWH;
pub use policy::{class_name, ClassPolicy, VISDRONE_CLASS_NAMES};
pub use record::AnnotationRecord;
pub use space::{Normalized, Pixel};

#[cfg(feature = "fuzzing")]
pub use record::fuzz_parse_line;
