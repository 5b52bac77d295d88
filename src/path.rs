//! Sampling a compiled expression into the pixel path of a shot.
//!
//! Collision geometry belongs to the caller; this module only maps between
//! world and pixel coordinates and decides when stepping stops.

use crate::expr::Expr;

/// World units covered by the full plot width
pub const X_EXTENT: f64 = 15.0;
/// World units covered by the full plot height
pub const Y_EXTENT: f64 = 10.0;

/// A point in pixel coordinates, `y` growing downwards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Pixel column
    pub x: f64,
    /// Pixel row
    pub y: f64,
}

impl Point {
    /// The point at column `x`, row `y`
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The plotting area and the world extent mapped onto it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRegion {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
    /// World units across `width`
    pub x_extent: f64,
    /// World units across `height`
    pub y_extent: f64,
}

impl PlotRegion {
    /// A region of the given pixel size over the default world extents
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            x_extent: X_EXTENT,
            y_extent: Y_EXTENT,
        }
    }

    /// World distance covered by `pixels` horizontal pixels
    pub fn world_x(&self, pixels: f64) -> f64 {
        pixels * self.x_extent / self.width
    }

    /// Pixel distance covered by `units` world units vertically
    pub fn pixel_y(&self, units: f64) -> f64 {
        units * self.height / self.y_extent
    }

    fn contains_y(&self, y: f64) -> bool {
        y > 0.0 && y < self.height
    }
}

/// What the caller found at a sampled point
#[derive(Debug, Clone, PartialEq)]
pub enum Contact<T> {
    /// Nothing there
    Clear,
    /// Something is hit, the path continues through it
    Hit(T),
    /// Something is hit and the path ends on it
    Blocked(T),
}

/// Result of [`trace`]
#[derive(Debug, Clone, PartialEq)]
pub struct Path<T> {
    /// Every sampled point, the last one included
    pub points: Vec<Point>,
    /// Every point with a contact, in path order
    pub hits: Vec<(Point, T)>,
}

/// Sample `expr` one pixel column at a time, starting at `origin`.
///
/// The curve is shifted so that it starts at `origin`: the value at `x = 0`
/// is subtracted from every sample. Stepping stops on a
/// [`Contact::Blocked`], at the right edge, or as soon as a point leaves the
/// region vertically. A non-finite sample always counts as leaving.
///
/// ```
/// # use plotfn::{path, Expr};
/// # use plotfn::path::{Contact, PlotRegion, Point};
/// let expr = Expr::parse("x + 5").unwrap();
/// let region = PlotRegion::new(150.0, 100.0);
/// let path = path::trace(&expr, Point::new(0.0, 50.0), &region, |_| Contact::<()>::Clear);
/// // one world unit of x is ten pixels, one world unit of y is ten pixels
/// assert_eq!(path.points[10], Point::new(10.0, 40.0));
/// // the line leaves through the top after 50 columns
/// assert_eq!(path.points.len(), 51);
/// ```
pub fn trace<T, F>(expr: &Expr, origin: Point, region: &PlotRegion, mut collide: F) -> Path<T>
where
    F: FnMut(Point) -> Contact<T>,
{
    let offset = expr.call(0.0);
    let mut points = Vec::new();
    let mut hits = Vec::new();

    let mut column = origin.x;
    while column < region.width {
        let x = region.world_x(column - origin.x);
        let y = expr.call(x) - offset;
        let point = Point::new(column, origin.y - region.pixel_y(y));
        points.push(point);

        match collide(point) {
            Contact::Clear => {}
            Contact::Hit(target) => hits.push((point, target)),
            Contact::Blocked(target) => {
                hits.push((point, target));
                break;
            }
        }
        if !region.contains_y(point.y) {
            break;
        }
        column += 1.0;
    }

    debug!(
        "traced {:?}: {} points, {} hits",
        expr.source(),
        points.len(),
        hits.len()
    );
    Path { points, hits }
}
