//! # tagflow-text
//!
//! [`ContentMeasurer`] backed by `cosmic-text` shaping, so tag chips are sized
//! from real font metrics instead of estimates.

use cosmic_text::{fontdb, Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use tagflow::{ContentMeasurer, MeasureTextRequest, Size};

/// Family name of the bundled font.
pub const BUNDLED_FAMILY: &str = "DejaVu Sans";

// DejaVu Sans, Bitstream Vera license (see assets/fonts/LICENSE-DejaVu.txt)
const BUNDLED_FONT: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

/// Measures text by shaping it with a `cosmic-text` [`FontSystem`].
///
/// Creating a font system scans the system font database, so build one
/// measurer and reuse it across layouts.
pub struct CosmicMeasurer {
    font_system: FontSystem,
}

impl CosmicMeasurer {
    pub fn new() -> Self {
        let font_system = FontSystem::new();
        log::debug!(
            "cosmic measurer: loaded {} font faces",
            font_system.db().faces().count()
        );
        Self { font_system }
    }

    /// Use an existing font system (e.g. one with bundled fonts loaded).
    pub fn with_font_system(font_system: FontSystem) -> Self {
        Self { font_system }
    }

    /// Measure with the bundled font only, independent of system fonts.
    pub fn bundled() -> Self {
        Self::with_font_system(bundled_font_system())
    }

    pub fn font_system_mut(&mut self) -> &mut FontSystem {
        &mut self.font_system
    }
}

/// Font system holding only the bundled font, also set as the sans-serif default.
pub fn bundled_font_system() -> FontSystem {
    let mut db = fontdb::Database::new();
    db.load_font_data(BUNDLED_FONT.to_vec());
    db.set_sans_serif_family(BUNDLED_FAMILY);
    log::debug!("bundled font system: {} font faces", db.len());
    FontSystem::new_with_locale_and_db("en-US".to_string(), db)
}

impl Default for CosmicMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentMeasurer for CosmicMeasurer {
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> Size {
        if request.text.is_empty() {
            return Size::zero();
        }

        let line_height = request.line_height();
        let metrics = Metrics::new(request.font_size, line_height);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(
            &mut self.font_system,
            Some(request.max_width.unwrap_or(f32::MAX)),
            Some(f32::MAX),
        );

        let attrs = match request.family {
            Some(name) => Attrs::new().family(Family::Name(name)),
            None => Attrs::new(),
        };
        buffer.set_text(&mut self.font_system, request.text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut width = 0.0f32;
        let mut lines = 0usize;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            lines += 1;
        }

        // Round up so chips never clip their last glyph
        let size = Size::new(width.ceil(), lines.max(1) as f32 * line_height);
        log::trace!(
            "measured {:?} at {}px: {}x{}",
            request.text,
            request.font_size,
            size.width,
            size.height
        );
        size
    }
}
