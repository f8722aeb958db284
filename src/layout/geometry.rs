//! Point-space geometry primitives

/// A position in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Size {
    /// Create a size
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The same size with width and height exchanged
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// An axis-aligned rectangle in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    /// Top-left corner
    pub origin: Point,
    /// Extent
    pub size: Size,
}

impl Region {
    /// Create a region from its top-left corner and extent
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Left edge
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.origin.x
    }

    /// Top edge
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.origin.y
    }

    /// Width
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.size.width
    }

    /// Height
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.size.height
    }

    /// Right edge
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Bottom edge
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Geometric center
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Whether `point` lies inside (right and bottom edges excluded)
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x() && point.x < self.max_x() && point.y >= self.y() && point.y < self.max_y()
    }

    /// Translate by `dx`, `dy`
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x() + dx, self.y() + dy, self.width(), self.height())
    }

    /// Scale about `anchor` by `factor`
    #[must_use]
    pub fn scaled_about(self, anchor: Point, factor: f64) -> Self {
        Self::new(
            anchor.x + (self.x() - anchor.x) * factor,
            anchor.y + (self.y() - anchor.y) * factor,
            self.width() * factor,
            self.height() * factor,
        )
    }
}

/// Interface orientation reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Upright portrait
    #[default]
    Portrait,
    /// Portrait, upside down
    PortraitUpsideDown,
    /// Landscape, rotated left
    LandscapeLeft,
    /// Landscape, rotated right
    LandscapeRight,
}

impl Orientation {
    /// Whether the orientation is one of the landscape variants
    #[must_use]
    pub const fn is_landscape(self) -> bool {
        matches!(self, Self::LandscapeLeft | Self::LandscapeRight)
    }
}

/// The surface an alert is laid out on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    size: Size,
    orientation: Orientation,
    swaps_on_rotation: bool,
}

impl Screen {
    /// A screen whose reported bounds already follow the orientation
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            orientation: Orientation::Portrait,
            swaps_on_rotation: true,
        }
    }

    /// A screen that always reports its portrait bounds, whatever the orientation
    #[must_use]
    pub const fn fixed_bounds(size: Size, orientation: Orientation) -> Self {
        Self {
            size,
            orientation,
            swaps_on_rotation: false,
        }
    }

    /// Set the current orientation
    #[must_use]
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Current orientation
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Bounds the overlay should cover
    #[must_use]
    pub const fn overlay_size(&self) -> Size {
        if !self.swaps_on_rotation && self.orientation.is_landscape() {
            self.size.swapped()
        } else {
            self.size
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_edges_and_center() {
        let region = Region::new(10.0, 20.0, 100.0, 50.0);
        assert!((region.max_x() - 110.0).abs() < f64::EPSILON);
        assert!((region.max_y() - 70.0).abs() < f64::EPSILON);
        assert_eq!(region.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn test_region_contains_excludes_far_edges() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0);
        assert!(region.contains(Point::new(0.0, 0.0)));
        assert!(region.contains(Point::new(9.9, 9.9)));
        assert!(!region.contains(Point::new(10.0, 5.0)));
        assert!(!region.contains(Point::new(5.0, -0.1)));
    }

    #[test]
    fn test_scaled_about_center_keeps_center() {
        let region = Region::new(0.0, 0.0, 100.0, 40.0);
        let scaled = region.scaled_about(region.center(), 0.5);
        assert_eq!(scaled, Region::new(25.0, 10.0, 50.0, 20.0));
        assert_eq!(scaled.center(), region.center());
    }

    #[test]
    fn test_rotating_screen_keeps_reported_bounds() {
        let screen = Screen::new(Size::new(568.0, 320.0)).with_orientation(Orientation::LandscapeLeft);
        assert_eq!(screen.overlay_size(), Size::new(568.0, 320.0));
    }

    #[test]
    fn test_fixed_bounds_screen_swaps_in_landscape() {
        let portrait = Screen::fixed_bounds(Size::new(320.0, 568.0), Orientation::Portrait);
        assert_eq!(portrait.overlay_size(), Size::new(320.0, 568.0));

        let landscape = portrait.with_orientation(Orientation::LandscapeRight);
        assert_eq!(landscape.overlay_size(), Size::new(568.0, 320.0));

        let upside_down = portrait.with_orientation(Orientation::PortraitUpsideDown);
        assert_eq!(upside_down.overlay_size(), Size::new(320.0, 568.0));
    }
}
