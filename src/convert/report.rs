//! Per-split summary reporting.
//!
//! Mirrors the layout of the converted tree back to the user: how many
//! annotation files were scanned, how many label files were written, how
//! many images were copied when subsetting.

use serde::Serialize;
use std::fmt;

/// Counters accumulated while materializing one split.
///
/// Counters only ever grow while the split is processed; the summary is
/// reported once the split completes. Partial summaries (e.g. from workers
/// that each processed a slice of the files) combine with [`merge`].
///
/// [`merge`]: SplitSummary::merge
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    /// Name of the split this summary describes (`train`, `val`, ...).
    pub split: String,

    /// Annotation files considered, including ones later skipped.
    pub files_scanned: usize,

    /// Label files actually written (files with at least one kept record).
    pub labels_written: usize,

    /// Paired images copied to the subset output, when subsetting.
    pub images_copied: usize,
}

impl SplitSummary {
    /// Creates an empty summary for the named split.
    pub fn new(split: impl Into<String>) -> Self {
        Self {
            split: split.into(),
            ..Default::default()
        }
    }

    /// Adds another summary's counters into this one.
    pub fn merge(&mut self, other: &SplitSummary) {
        self.files_scanned += other.files_scanned;
        self.labels_written += other.labels_written;
        self.images_copied += other.images_copied;
    }
}

impl fmt::Display for SplitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  {} annotation file(s) scanned, {} label file(s) written",
            self.files_scanned, self.labels_written
        )?;
        if self.images_copied > 0 {
            writeln!(f, "  {} image(s) copied", self.images_copied)?;
        }
        Ok(())
    }
}
