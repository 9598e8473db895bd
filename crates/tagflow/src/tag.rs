//! Tag chips laid out with [`FlowLayout`].
//!
//! A tag is a text label inside a padded chip. Its layout item size is the
//! measured label plus padding; the chips are then flowed in input order.

use crate::error::FlowError;
use crate::flow::FlowLayout;
use crate::measure::{ContentMeasurer, MeasureTextRequest};
use crate::primitives::{Position, Rect, Size, Spacing};

/// Chip padding and font settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TagStyle {
    pub padding: Spacing,
    pub font_size: f32,
    pub line_height_multiplier: f32,
}

impl TagStyle {
    /// Course chip shown on profiles and search results
    pub const fn course() -> Self {
        Self {
            padding: Spacing::symmetric(10.0, 4.0),
            font_size: 14.0,
            line_height_multiplier: 1.2,
        }
    }

    /// Subject filter chip on the search screen
    pub const fn search() -> Self {
        Self {
            padding: Spacing::symmetric(16.0, 9.0),
            font_size: 15.0,
            line_height_multiplier: 1.2,
        }
    }

    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}

impl Default for TagStyle {
    fn default() -> Self {
        Self::course()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tag {
    label: String,
    style: TagStyle,
}

impl Tag {
    pub fn new(label: impl Into<String>, style: TagStyle) -> Self {
        Self {
            label: label.into(),
            style,
        }
    }

    pub fn course(label: impl Into<String>) -> Self {
        Self::new(label, TagStyle::course())
    }

    pub fn search(label: impl Into<String>) -> Self {
        Self::new(label, TagStyle::search())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style(&self) -> &TagStyle {
        &self.style
    }

    /// Chip size: measured label plus padding.
    pub fn measure(&self, measurer: &mut dyn ContentMeasurer) -> Size {
        let request = MeasureTextRequest::new(&self.label, self.style.font_size)
            .with_line_height_multiplier(self.style.line_height_multiplier);
        let text = measurer.measure_text(request);
        Size::new(
            text.width + self.style.padding.get_horizontal(),
            text.height + self.style.padding.get_vertical(),
        )
    }
}

/// Per-tag rectangles, in input order, plus the bounding size
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagCloudLayout {
    pub rects: Vec<Rect>,
    pub size: Size,
    pub row_count: usize,
}

impl TagCloudLayout {
    /// Move every rect by the container origin.
    pub fn offset(mut self, origin: Position) -> Self {
        for rect in &mut self.rects {
            *rect = Rect::from_position_size(rect.position().offset(origin), rect.size());
        }
        self
    }

    /// Index of the tag under `point`, for routing taps to a chip.
    pub fn hit_test(&self, point: Position) -> Option<usize> {
        self.rects.iter().position(|rect| rect.contains(point))
    }
}

/// An ordered set of tags flowed into the available width
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagCloud {
    tags: Vec<Tag>,
    layout: FlowLayout,
}

impl TagCloud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cloud of same-styled tags from labels.
    pub fn from_labels<I, S>(labels: I, style: TagStyle) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: labels
                .into_iter()
                .map(|label| Tag::new(label, style))
                .collect(),
            layout: FlowLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: FlowLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Measure every tag, then flow them into `max_width`.
    pub fn layout(
        &self,
        max_width: f32,
        measurer: &mut dyn ContentMeasurer,
    ) -> Result<TagCloudLayout, FlowError> {
        let sizes: Vec<Size> = self.tags.iter().map(|tag| tag.measure(measurer)).collect();
        let arrangement = self.layout.arrange(max_width, &sizes)?;
        Ok(TagCloudLayout {
            rects: arrangement.rects(&sizes),
            size: arrangement.size,
            row_count: arrangement.row_count(),
        })
    }

    /// Index of the tag whose label equals the search text exactly.
    pub fn selected(&self, search_text: &str) -> Option<usize> {
        self.tags.iter().position(|tag| tag.label == search_text)
    }

    /// Tags whose label contains `query`, ignoring case. Order is kept.
    ///
    /// Only the empty query keeps every tag; whitespace is matched as typed.
    pub fn filter(&self, query: &str) -> Self {
        if query.is_empty() {
            return self.clone();
        }
        let query = query.to_lowercase();
        Self {
            tags: self
                .tags
                .iter()
                .filter(|tag| tag.label.to_lowercase().contains(&query))
                .cloned()
                .collect(),
            layout: self.layout,
        }
    }
}
