//! Flow-wrap layout.
//!
//! Items are laid out left to right until the next one would overflow the
//! available width, then wrap to a new row. Items keep their input order and
//! are never split. A row always holds at least one item, so an item wider
//! than the available width simply occupies a row of its own.

use crate::error::FlowError;
use crate::primitives::{non_negative, Position, Rect, Size};

/// Default gap between tags, in logical pixels.
pub const DEFAULT_SPACING: f32 = 8.0;

/// Summary of one row of an [`Arrangement`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowSpan {
    /// Index of the first item in this row
    pub start: usize,
    /// Number of items in this row (always at least one)
    pub len: usize,
    /// Top edge of the row
    pub y: f32,
    /// Rendered width, excluding trailing spacing
    pub width: f32,
    /// Height of the tallest item in the row
    pub height: f32,
}

/// Result of a single flow pass: per-item positions, rows and bounding size
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arrangement {
    pub positions: Vec<Position>,
    pub rows: Vec<RowSpan>,
    pub size: Size,
}

impl Arrangement {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Combine positions with the item sizes they were computed from.
    pub fn rects(&self, items: &[Size]) -> Vec<Rect> {
        self.positions
            .iter()
            .zip(items)
            .map(|(position, size)| Rect::from_position_size(*position, *size))
            .collect()
    }
}

/// Bounding size of `items` flowed into `max_width`.
///
/// `max_width` may be `f32::INFINITY`, in which case nothing wraps.
pub fn measure(max_width: f32, items: &[Size], spacing: f32) -> Result<Size, FlowError> {
    Ok(arrange(max_width, items, spacing)?.size)
}

/// Top-left position of each item, in input order.
///
/// Uses the same wrapping decisions as [`measure`].
pub fn place(max_width: f32, items: &[Size], spacing: f32) -> Result<Vec<Position>, FlowError> {
    Ok(arrange(max_width, items, spacing)?.positions)
}

/// Positions, rows and bounding size in one pass.
pub fn arrange(max_width: f32, items: &[Size], spacing: f32) -> Result<Arrangement, FlowError> {
    arrange_with_line_spacing(max_width, items, spacing, spacing)
}

fn arrange_with_line_spacing(
    max_width: f32,
    items: &[Size],
    spacing: f32,
    line_spacing: f32,
) -> Result<Arrangement, FlowError> {
    non_negative(max_width, || "max_width".to_string())?;
    non_negative(spacing, || "spacing".to_string())?;
    non_negative(line_spacing, || "line_spacing".to_string())?;
    for (index, item) in items.iter().enumerate() {
        item.validate(&format!("item {index}"))?;
    }

    let mut positions = Vec::with_capacity(items.len());
    let mut rows = Vec::new();

    let mut cursor_x = 0.0f32;
    let mut cursor_y = 0.0f32;
    let mut row_height = 0.0f32;
    let mut max_row_width = 0.0f32;
    let mut row = RowSpan::default();

    for (index, item) in items.iter().enumerate() {
        // Strict guard: the first item of a row never wraps
        if cursor_x > 0.0 && cursor_x + item.width > max_width {
            rows.push(row);
            cursor_y += row_height + line_spacing;
            cursor_x = 0.0;
            row_height = 0.0;
            row = RowSpan {
                start: index,
                y: cursor_y,
                ..RowSpan::default()
            };
            log::trace!("flow: item {index} wraps to row {} at y={cursor_y}", rows.len());
        }

        positions.push(Position::new(cursor_x, cursor_y));

        let right = cursor_x + item.width;
        row_height = row_height.max(item.height);
        max_row_width = max_row_width.max(right);
        cursor_x = right + spacing;

        row.len += 1;
        row.width = right;
        row.height = row_height;
    }

    if row.len > 0 {
        rows.push(row);
    }

    let size = Size::new(max_row_width, cursor_y + row_height);
    log::debug!(
        "flow: {} items in {} rows, bounds {}x{} (max_width={max_width})",
        items.len(),
        rows.len(),
        size.width,
        size.height
    );

    Ok(Arrangement {
        positions,
        rows,
        size,
    })
}

/// Flow layout configuration
///
/// ```
/// # use tagflow::{FlowLayout, Size};
/// let flow = FlowLayout::new().with_spacing(8.0);
/// let size = flow.measure(200.0, &[Size::new(50.0, 20.0); 4]).unwrap();
/// assert_eq!(size, Size::new(166.0, 48.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowLayout {
    /// Gap between items in a row
    spacing: f32,
    /// Gap between rows. `None` uses `spacing`.
    line_spacing: Option<f32>,
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            line_spacing: None,
        }
    }
}

impl FlowLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the uniform gap between items and between rows
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Override the gap between rows
    pub fn with_line_spacing(mut self, line_spacing: f32) -> Self {
        self.line_spacing = Some(line_spacing);
        self
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn line_spacing(&self) -> f32 {
        self.line_spacing.unwrap_or(self.spacing)
    }

    pub fn measure(&self, max_width: f32, items: &[Size]) -> Result<Size, FlowError> {
        Ok(self.arrange(max_width, items)?.size)
    }

    pub fn place(&self, max_width: f32, items: &[Size]) -> Result<Vec<Position>, FlowError> {
        Ok(self.arrange(max_width, items)?.positions)
    }

    pub fn arrange(&self, max_width: f32, items: &[Size]) -> Result<Arrangement, FlowError> {
        arrange_with_line_spacing(max_width, items, self.spacing, self.line_spacing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_items(rng: &mut StdRng, count: usize) -> Vec<Size> {
        (0..count)
            .map(|_| {
                Size::new(
                    rng.random_range(0.0f32..250.0).round(),
                    rng.random_range(0.0f32..60.0).round(),
                )
            })
            .collect()
    }

    #[test]
    fn test_four_items_wrap_after_three() {
        let items = [Size::new(50.0, 20.0); 4];
        let positions = place(200.0, &items, 8.0).unwrap();
        assert_eq!(
            positions,
            vec![
                Position::new(0.0, 0.0),
                Position::new(58.0, 0.0),
                Position::new(116.0, 0.0),
                Position::new(0.0, 28.0),
            ]
        );
        assert_eq!(measure(200.0, &items, 8.0).unwrap(), Size::new(166.0, 48.0));
    }

    #[test]
    fn test_oversized_item_keeps_first_row() {
        let items = [Size::new(300.0, 40.0)];
        assert_eq!(place(200.0, &items, 8.0).unwrap(), vec![Position::zero()]);
        assert_eq!(measure(200.0, &items, 8.0).unwrap(), Size::new(300.0, 40.0));
    }

    #[test]
    fn test_oversized_item_after_others_gets_own_row() {
        let items = [
            Size::new(50.0, 20.0),
            Size::new(300.0, 40.0),
            Size::new(50.0, 20.0),
        ];
        let arrangement = arrange(200.0, &items, 8.0).unwrap();
        assert_eq!(
            arrangement.positions,
            vec![
                Position::new(0.0, 0.0),
                Position::new(0.0, 28.0),
                Position::new(0.0, 76.0),
            ]
        );
        assert_eq!(arrangement.row_count(), 3);
        assert_eq!(arrangement.size, Size::new(300.0, 96.0));
    }

    #[test]
    fn test_empty_items() {
        assert_eq!(place(200.0, &[], 8.0).unwrap(), Vec::<Position>::new());
        assert_eq!(measure(200.0, &[], 8.0).unwrap(), Size::zero());
        assert!(arrange(200.0, &[], 8.0).unwrap().rows.is_empty());
    }

    #[test]
    fn test_infinite_width_never_wraps() {
        let items = vec![Size::new(120.0, 30.0); 50];
        let arrangement = arrange(f32::INFINITY, &items, 8.0).unwrap();
        assert!(arrangement.positions.iter().all(|p| p.y == 0.0));
        assert_eq!(arrangement.row_count(), 1);
        assert_eq!(arrangement.size, Size::new(50.0 * 120.0 + 49.0 * 8.0, 30.0));
    }

    #[test]
    fn test_exact_fit_does_not_wrap() {
        // 3 * 60 + 2 * 10 == 200
        let items = [Size::new(60.0, 10.0); 3];
        let arrangement = arrange(200.0, &items, 10.0).unwrap();
        assert_eq!(arrangement.row_count(), 1);
        assert_eq!(arrangement.size.width, 200.0);
    }

    #[test]
    fn test_row_height_is_tallest_item() {
        let items = [
            Size::new(50.0, 10.0),
            Size::new(50.0, 30.0),
            Size::new(150.0, 12.0),
        ];
        let arrangement = arrange(120.0, &items, 4.0).unwrap();
        assert_eq!(arrangement.rows[0].height, 30.0);
        assert_eq!(arrangement.positions[2], Position::new(0.0, 34.0));
        assert_eq!(arrangement.size, Size::new(150.0, 46.0));
    }

    #[test]
    fn test_rows_summary() {
        let items = [Size::new(50.0, 20.0); 4];
        let arrangement = arrange(200.0, &items, 8.0).unwrap();
        assert_eq!(
            arrangement.rows,
            vec![
                RowSpan {
                    start: 0,
                    len: 3,
                    y: 0.0,
                    width: 166.0,
                    height: 20.0,
                },
                RowSpan {
                    start: 3,
                    len: 1,
                    y: 28.0,
                    width: 50.0,
                    height: 20.0,
                },
            ]
        );
    }

    #[test]
    fn test_negative_spacing_rejected() {
        let err = measure(200.0, &[Size::new(1.0, 1.0)], -1.0).unwrap_err();
        assert_eq!(
            err,
            FlowError::InvalidArgument {
                what: "spacing".to_string(),
                value: -1.0,
            }
        );
    }

    #[test]
    fn test_negative_max_width_rejected() {
        let err = place(-10.0, &[], 8.0).unwrap_err();
        assert!(matches!(err, FlowError::InvalidArgument { ref what, .. } if what == "max_width"));
    }

    #[test]
    fn test_negative_item_rejected() {
        let items = [Size::new(10.0, 10.0), Size::new(10.0, -2.0)];
        let err = arrange(200.0, &items, 8.0).unwrap_err();
        assert!(matches!(err, FlowError::InvalidArgument { ref what, .. } if what == "item 1 height"));
    }

    #[test]
    fn test_nan_rejected_by_arrange() {
        let items = [Size::new(10.0, 10.0)];
        let err = arrange(f32::NAN, &items, 8.0).unwrap_err();
        assert!(matches!(err, FlowError::InvalidArgument { ref what, .. } if what == "max_width"));

        let err = arrange(200.0, &items, f32::NAN).unwrap_err();
        assert!(matches!(err, FlowError::InvalidArgument { ref what, .. } if what == "spacing"));

        let items = [Size::new(10.0, 10.0), Size::new(f32::NAN, 10.0)];
        let err = arrange(200.0, &items, 8.0).unwrap_err();
        assert!(matches!(err, FlowError::InvalidArgument { ref what, .. } if what == "item 1 width"));
    }

    #[test]
    fn test_zero_max_width_stacks_items() {
        let items = [Size::new(10.0, 10.0); 3];
        let positions = place(0.0, &items, 2.0).unwrap();
        assert_eq!(
            positions,
            vec![
                Position::new(0.0, 0.0),
                Position::new(0.0, 12.0),
                Position::new(0.0, 24.0),
            ]
        );
    }

    #[test]
    fn test_line_spacing_override() {
        let flow = FlowLayout::new().with_spacing(8.0).with_line_spacing(2.0);
        let positions = flow.place(200.0, &[Size::new(50.0, 20.0); 4]).unwrap();
        assert_eq!(positions[1], Position::new(58.0, 0.0));
        assert_eq!(positions[3], Position::new(0.0, 22.0));
        assert_eq!(flow.line_spacing(), 2.0);
    }

    #[test]
    fn test_default_flow_layout_uses_default_spacing() {
        let flow = FlowLayout::default();
        assert_eq!(flow.spacing(), DEFAULT_SPACING);
        assert_eq!(flow.line_spacing(), DEFAULT_SPACING);
    }

    #[test]
    fn test_order_and_no_overflow_properties() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let count = rng.random_range(0..40);
            let items = random_items(&mut rng, count);
            let max_width = rng.random_range(0.0f32..400.0).round();
            let spacing = rng.random_range(0.0f32..16.0).round();

            let arrangement = arrange(max_width, &items, spacing).unwrap();
            assert_eq!(arrangement.positions.len(), items.len());
            assert_eq!(
                arrangement.rows.iter().map(|r| r.len).sum::<usize>(),
                items.len()
            );

            for (position, item) in arrangement.positions.iter().zip(&items) {
                if item.width <= max_width {
                    assert!(position.x + item.width <= max_width);
                } else {
                    assert_eq!(position.x, 0.0);
                }
            }
        }
    }

    #[test]
    fn test_no_overlap_within_row() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let items = random_items(&mut rng, 30);
            let spacing = rng.random_range(0.0f32..16.0).round();
            let arrangement = arrange(300.0, &items, spacing).unwrap();

            for row in &arrangement.rows {
                for i in row.start + 1..row.start + row.len {
                    let previous_right = arrangement.positions[i - 1].x + items[i - 1].width;
                    assert_eq!(arrangement.positions[i].y, arrangement.positions[i - 1].y);
                    assert!(arrangement.positions[i].x - previous_right >= spacing);
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let mut rng = StdRng::seed_from_u64(3);
        let items = random_items(&mut rng, 25);
        assert_eq!(
            arrange(180.0, &items, 6.0).unwrap(),
            arrange(180.0, &items, 6.0).unwrap()
        );
    }

    #[test]
    fn test_height_monotonic_when_appending() {
        let mut rng = StdRng::seed_from_u64(5);
        let items = random_items(&mut rng, 60);
        let mut previous = 0.0f32;
        for len in 0..=items.len() {
            let height = measure(220.0, &items[..len], 8.0).unwrap().height;
            assert!(height >= previous);
            previous = height;
        }
    }

    #[test]
    fn test_measure_matches_rects_bounds() {
        let mut rng = StdRng::seed_from_u64(13);
        let items = random_items(&mut rng, 20);
        let arrangement = arrange(260.0, &items, 8.0).unwrap();
        let rects = arrangement.rects(&items);
        let right = rects.iter().fold(0.0f32, |acc, r| acc.max(r.max[0]));
        let bottom = rects.iter().fold(0.0f32, |acc, r| acc.max(r.max[1]));
        assert_eq!(arrangement.size, Size::new(right, bottom));
    }
}
