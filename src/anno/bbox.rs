//! Bounding box type in canonical XYWH format.
//!
//! VisDrone annotation records store boxes as a top-left pixel coordinate
//! plus an extent, so XYWH is the canonical layout here. YOLO label lines
//! use a center coordinate plus extent; [`BBoxXYWH::from_cxcywh`] and
//! [`BBoxXYWH::to_cxcywh`] convert between the two layouts without leaving
//! the coordinate space.

use std::marker::PhantomData;

use super::space::{Normalized, Pixel};

/// An axis-aligned bounding box stored as top-left origin plus extent.
///
/// The `TSpace` parameter should be either [`Pixel`] or [`Normalized`],
/// ensuring that boxes from different coordinate spaces cannot be
/// accidentally mixed.
///
/// Note: this type does NOT enforce non-negative or in-bounds values.
/// Malformed boxes (negative extents, boxes past the image edge) are
/// representable on purpose; they pass through conversion unclamped.
#[derive(Clone, Copy, PartialEq)]
pub struct BBoxXYWH<TSpace> {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    _space: PhantomData<TSpace>,
}

impl<TSpace> BBoxXYWH<TSpace> {
    /// Creates a bounding box from a top-left coordinate and extent.
    #[inline]
    pub fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x,
            y,
            w,
            h,
            _space: PhantomData,
        }
    }

    /// Creates a bounding box from a center coordinate and extent.
    #[inline]
    pub fn from_cxcywh(cx: f64, cy: f64, w: f64, h: f64) -> Self {
        Self::from_xywh(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    /// Returns the box as `(x_center, y_center, width, height)`.
    #[inline]
    pub fn to_cxcywh(&self) -> (f64, f64, f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0, self.w, self.h)
    }

    /// Returns the area of the bounding box.
    ///
    /// May be negative if the box is malformed (negative extent).
    #[inline]
    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// Returns true if all fields are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }
}

impl BBoxXYWH<Pixel> {
    /// Converts pixel coordinates to normalized coordinates.
    ///
    /// The caller must guarantee non-zero image dimensions; see the split
    /// materializer, which treats a zero dimension as a per-file failure.
    pub fn to_normalized(&self, image_width: f64, image_height: f64) -> BBoxXYWH<Normalized> {
        BBoxXYWH::from_xywh(
            self.x / image_width,
            self.y / image_height,
            self.w / image_width,
            self.h / image_height,
        )
    }
}

impl BBoxXYWH<Normalized> {
    /// Converts normalized coordinates back to pixel coordinates.
    ///
    /// Exact algebraic inverse of [`BBoxXYWH::to_normalized`].
    pub fn to_pixel(&self, image_width: f64, image_height: f64) -> BBoxXYWH<Pixel> {
        BBoxXYWH::from_xywh(
            self.x * image_width,
            self.y * image_height,
            self.w * image_width,
            self.h * image_height,
        )
    }
}

impl<TSpace> std::fmt::Debug for BBoxXYWH<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BBoxXYWH")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("w", &self.w)
            .field("h", &self.h)
            .finish()
    }
}

impl<TSpace> Default for BBoxXYWH<TSpace> {
    fn default() -> Self {
        Self::from_xywh(0.0, 0.0, 0.0, 0.0)
    }
}
