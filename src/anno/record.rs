//! VisDrone annotation record parsing.
//!
//! A raw VisDrone annotation line is comma-separated with at least eight
//! fields:
//!
//! ```text
//! x,y,w,h,score,class_id,truncation,occlusion[,...]
//! ```
//!
//! where `x,y` is the top-left pixel coordinate and a `score` field of `0`
//! marks an "ignored region" that is never exported, whatever its class.
//!
//! The parser also accepts already-normalized YOLO label lines
//! (`class_id x_center y_center width height`) so that previously converted
//! files can be re-processed in the same run. Lines matching neither shape
//! are skipped silently; a partially corrupt annotation file must not abort
//! conversion of its remaining lines.

use super::bbox::BBoxXYWH;
use super::space::{Normalized, Pixel};

/// One detection record in pixel space.
///
/// A record is meaningful only together with the dimensions of the image it
/// was measured against; it carries no reference to that image and must be
/// paired explicitly by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnotationRecord {
    /// Bounding box, top-left origin plus extent, in pixels.
    pub bbox: BBoxXYWH<Pixel>,

    /// Source class identifier (VisDrone: 0 = ignored region, 1..=10 real).
    pub class_id: i64,

    /// Detection score field, when the raw record carries one.
    pub score: Option<i64>,

    /// Truncation flag, when the raw record carries one.
    pub truncation: Option<i64>,

    /// Occlusion flag, when the raw record carries one.
    pub occlusion: Option<i64>,
}

/// Outcome of the raw-format parse attempt.
enum RawLine {
    /// The line does not look like a raw detection record; the normalized
    /// format may still apply.
    Mismatch,
    /// A well-formed raw record explicitly marked as an ignored region.
    /// The line is dead regardless of class id and must not fall through.
    IgnoredRegion,
    Record(AnnotationRecord),
}

impl AnnotationRecord {
    /// Parses one line of annotation text into a pixel-space record.
    ///
    /// Attempts the raw VisDrone format first, then the normalized YOLO
    /// format (converted back to pixel space with the supplied image
    /// dimensions). Returns `None` for ignored regions and for lines
    /// matching neither shape.
    pub fn parse_line(line: &str, image_width: u32, image_height: u32) -> Option<Self> {
        match Self::parse_raw(line) {
            RawLine::Record(record) => Some(record),
            RawLine::IgnoredRegion => None,
            RawLine::Mismatch => Self::parse_normalized(line, image_width, image_height),
        }
    }

    fn parse_raw(line: &str) -> RawLine {
        let tokens: Vec<&str> = line
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect();

        if tokens.len() < 8 {
            return RawLine::Mismatch;
        }

        let Ok(x) = tokens[0].parse::<i64>() else {
            return RawLine::Mismatch;
        };
        let Ok(y) = tokens[1].parse::<i64>() else {
            return RawLine::Mismatch;
        };
        let Ok(w) = tokens[2].parse::<i64>() else {
            return RawLine::Mismatch;
        };
        let Ok(h) = tokens[3].parse::<i64>() else {
            return RawLine::Mismatch;
        };

        if tokens[4] == "0" {
            return RawLine::IgnoredRegion;
        }

        let Ok(class_id) = tokens[5].parse::<i64>() else {
            return RawLine::Mismatch;
        };

        RawLine::Record(AnnotationRecord {
            bbox: BBoxXYWH::from_xywh(x as f64, y as f64, w as f64, h as f64),
            class_id,
            score: tokens[4].parse().ok(),
            truncation: tokens[6].parse().ok(),
            occlusion: tokens[7].parse().ok(),
        })
    }

    fn parse_normalized(line: &str, image_width: u32, image_height: u32) -> Option<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 5 {
            return None;
        }

        // Truncating float parse so both "3" and "3.0" are accepted.
        let class_id = tokens[0].parse::<f64>().ok()? as i64;
        let cx = tokens[1].parse::<f64>().ok()?;
        let cy = tokens[2].parse::<f64>().ok()?;
        let w = tokens[3].parse::<f64>().ok()?;
        let h = tokens[4].parse::<f64>().ok()?;

        let bbox = BBoxXYWH::<Normalized>::from_cxcywh(cx, cy, w, h)
            .to_pixel(f64::from(image_width), f64::from(image_height));

        Some(AnnotationRecord {
            bbox,
            class_id,
            score: None,
            truncation: None,
            occlusion: None,
        })
    }
}

/// Fuzz-only entrypoint for single-line record parsing.
#[cfg(feature = "fuzzing")]
pub fn fuzz_parse_line(input: &str) {
    let _ = AnnotationRecord::parse_line(input, 1920, 1080);
}
