#![forbid(unsafe_code)]

//! Geometric primitives and gesture directions.

/// A rectangle in widget coordinates, used for swipe-area hit testing.
///
/// Origin at top-left; the left and top edges are inclusive, the right and
/// bottom edges exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if the rectangle has no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink the rectangle to the given edge band along `orientation`.
    ///
    /// Widgets that only accept swipes starting near an edge (an overlay flap,
    /// for instance) use this to carve their swipe area out of their bounds.
    /// `from_end` selects the right/bottom edge instead of the left/top one.
    #[must_use]
    pub fn edge_band(&self, orientation: Orientation, size: f64, from_end: bool) -> Rect {
        let size = size.max(0.0);
        match orientation {
            Orientation::Horizontal => {
                let width = size.min(self.width);
                let x = if from_end { self.right() - width } else { self.x };
                Rect::new(x, self.y, width, self.height)
            }
            Orientation::Vertical => {
                let height = size.min(self.height);
                let y = if from_end { self.bottom() - height } else { self.y };
                Rect::new(self.x, y, self.width, height)
            }
        }
    }
}

/// The axis a swipe tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Pick the component along this axis from an `(x, y)` pair.
    #[inline]
    #[must_use]
    pub const fn along(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Horizontal => x,
            Self::Vertical => y,
        }
    }

    /// Pick the component perpendicular to this axis from an `(x, y)` pair.
    #[inline]
    #[must_use]
    pub const fn across(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Horizontal => y,
            Self::Vertical => x,
        }
    }
}

/// Which way a swipe moves through the swipeable's snap points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationDirection {
    /// Toward lower progress values.
    Back,
    /// Toward higher progress values.
    Forward,
}

impl NavigationDirection {
    /// Direction implied by a signed progress delta. Zero counts as forward.
    #[must_use]
    pub fn from_delta(delta: f64) -> Self {
        if delta < 0.0 { Self::Back } else { Self::Forward }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Back => Self::Forward,
            Self::Forward => Self::Back,
        }
    }
}
