//! Intrinsic content measurement.
//!
//! The flow layout only consumes item sizes. This module provides the
//! backend-agnostic seam through which a host reports the intrinsic size of
//! text content, so the core never depends on a text engine. Backends like
//! `tagflow-text` implement [`ContentMeasurer`].

use crate::primitives::Size;

/// Request to measure the intrinsic size of a piece of text.
#[derive(Debug, Clone, Copy)]
pub struct MeasureTextRequest<'a> {
    pub text: &'a str,
    pub font_size: f32,
    /// Optional font family name (backend-defined meaning)
    pub family: Option<&'a str>,
    /// Line height as a multiplier of font size
    pub line_height_multiplier: f32,
    /// Maximum width constraint for wrapping (None = single line)
    pub max_width: Option<f32>,
}

impl<'a> MeasureTextRequest<'a> {
    pub fn new(text: &'a str, font_size: f32) -> Self {
        Self {
            text,
            font_size,
            family: None,
            line_height_multiplier: 1.2,
            max_width: None,
        }
    }

    pub fn with_family(mut self, family: &'a str) -> Self {
        self.family = Some(family);
        self
    }

    pub fn with_line_height_multiplier(mut self, multiplier: f32) -> Self {
        self.line_height_multiplier = multiplier;
        self
    }

    pub fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn line_height(&self) -> f32 {
        self.font_size * self.line_height_multiplier
    }
}

/// Backend-agnostic content measurement.
pub trait ContentMeasurer {
    /// Measure the minimum bounding box of the shaped text, excluding padding.
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> Size;
}

/// Measures every character as a fixed fraction of the font size, on one line.
///
/// Deterministic, so it suits tests and headless hosts with no font database.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasurer {
    /// Advance per character as a multiple of font size
    pub advance: f32,
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self { advance: 0.5 }
    }
}

impl FixedAdvanceMeasurer {
    pub const fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl ContentMeasurer for FixedAdvanceMeasurer {
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> Size {
        if request.text.is_empty() {
            return Size::zero();
        }
        let chars = request.text.chars().count() as f32;
        Size::new(chars * self.advance * request.font_size, request.line_height())
    }
}
