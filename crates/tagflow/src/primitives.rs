use glam::Vec2;

use crate::error::FlowError;

/// Intrinsic size of a layout item, or the bounding size of an arrangement
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size
    ///
    /// ```
    /// # use tagflow::Size;
    /// let size = Size::new(50.0, 20.0);
    /// assert_eq!(size.width, 50.0);
    /// assert_eq!(size.height, 20.0);
    /// ```
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Reject negative or NaN components.
    ///
    /// `what` names the value in the returned error (e.g. `"item 3"`).
    pub fn validate(&self, what: &str) -> Result<(), FlowError> {
        non_negative(self.width, || format!("{what} width"))?;
        non_negative(self.height, || format!("{what} height"))
    }
}

impl From<[f32; 2]> for Size {
    fn from(arr: [f32; 2]) -> Self {
        Self {
            width: arr[0],
            height: arr[1],
        }
    }
}

impl From<Size> for [f32; 2] {
    fn from(size: Size) -> Self {
        [size.width, size.height]
    }
}

impl From<Vec2> for Size {
    fn from(v: Vec2) -> Self {
        Self {
            width: v.x,
            height: v.y,
        }
    }
}

impl From<Size> for Vec2 {
    fn from(size: Size) -> Self {
        Vec2::new(size.width, size.height)
    }
}

/// Top-left corner of a placed item, relative to the container origin
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Create a new position
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a position at the origin (0, 0)
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Shift by a container origin, for hosts that place the flow inside a parent
    pub fn offset(self, origin: Position) -> Self {
        Self {
            x: self.x + origin.x,
            y: self.y + origin.y,
        }
    }
}

impl From<[f32; 2]> for Position {
    fn from(arr: [f32; 2]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
        }
    }
}

impl From<Position> for [f32; 2] {
    fn from(position: Position) -> Self {
        [position.x, position.y]
    }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Position> for Vec2 {
    fn from(position: Position) -> Self {
        Vec2::new(position.x, position.y)
    }
}

/// Axis-aligned rectangle defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub const fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    pub fn from_position_size(position: Position, size: Size) -> Self {
        Self {
            min: [position.x, position.y],
            max: [position.x + size.width, position.y + size.height],
        }
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    pub fn position(&self) -> Position {
        Position::new(self.min[0], self.min[1])
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.min[0]
            && point.x <= self.max[0]
            && point.y >= self.min[1]
            && point.y <= self.max[1]
    }

    /// True when the interiors overlap (shared edges do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min[0] < other.max[0]
            && other.min[0] < self.max[0]
            && self.min[1] < other.max[1]
            && other.min[1] < self.max[1]
    }
}

/// Padding around content
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spacing {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Spacing {
    /// Create spacing with all sides equal
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Create spacing with symmetric horizontal and vertical values (CSS-style)
    ///
    /// ```
    /// # use tagflow::Spacing;
    /// let spacing = Spacing::symmetric(10.0, 4.0);
    /// assert_eq!(spacing.left, 10.0);
    /// assert_eq!(spacing.right, 10.0);
    /// assert_eq!(spacing.top, 4.0);
    /// assert_eq!(spacing.bottom, 4.0);
    /// ```
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub const fn get_vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub const fn get_horizontal(&self) -> f32 {
        self.right + self.left
    }
}

/// Fails with `InvalidArgument` for negative or NaN values.
pub(crate) fn non_negative(value: f32, what: impl FnOnce() -> String) -> Result<(), FlowError> {
    if value.is_nan() || value < 0.0 {
        return Err(FlowError::InvalidArgument {
            what: what(),
            value,
        });
    }
    Ok(())
}
