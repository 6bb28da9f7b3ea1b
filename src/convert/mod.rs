//! The per-file conversion job.
//!
//! [`convert_annotation_lines`] is a pure function over the text of one
//! annotation file: it runs every line through parse → policy → normalize
//! and collects the formatted YOLO output lines. All I/O (pairing the
//! image, writing the label file) belongs to the split materializer in
//! [`crate::dataset`], which is what keeps this component independently
//! testable.

pub mod report;

pub use report::SplitSummary;

use crate::anno::{AnnotationRecord, ClassPolicy};

/// The outcome of converting one annotation file.
///
/// Created fresh per file and consumed immediately by the materializer;
/// holds the ordered output lines.
#[derive(Clone, Debug, Default)]
pub struct FileConversion {
    /// Formatted YOLO label lines, in input order.
    pub lines: Vec<String>,
}

impl FileConversion {
    /// True if at least one record survived parsing and policy.
    ///
    /// Files where this is false produce no output label at all; the
    /// absence of the label file is the filtering signal.
    pub fn has_kept_records(&self) -> bool {
        !self.lines.is_empty()
    }

    /// Joins the output lines into file contents (no trailing newline).
    pub fn into_contents(self) -> String {
        self.lines.join("\n")
    }
}

/// Converts the contents of one annotation file to YOLO label lines.
///
/// Every line is processed independently: unparsable lines and records
/// dropped by the policy are skipped, kept records are normalized against
/// the supplied image dimensions and formatted at six decimal places.
///
/// The caller must guarantee non-zero image dimensions; the materializer
/// treats a zero dimension as a per-file decode failure and never invokes
/// the job for such a file.
pub fn convert_annotation_lines(
    content: &str,
    image_width: u32,
    image_height: u32,
    policy: &ClassPolicy,
) -> FileConversion {
    let mut conversion = FileConversion::default();

    for line in content.lines() {
        let Some(record) = AnnotationRecord::parse_line(line, image_width, image_height) else {
            continue;
        };
        let Some(class_id) = policy.decide(record.class_id) else {
            continue;
        };

        let normalized = record
            .bbox
            .to_normalized(f64::from(image_width), f64::from(image_height));
        let (cx, cy, w, h) = normalized.to_cxcywh();

        conversion
            .lines
            .push(format!("{} {:.6} {:.6} {:.6} {:.6}", class_id, cx, cy, w, h));
    }

    conversion
}
