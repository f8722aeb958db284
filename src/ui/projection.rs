//! Mapping between layout points and terminal cells

use ratatui::layout::Rect;

use crate::layout::{Point, Region, Screen, Size};

/// How many layout points one terminal cell covers.
///
/// The defaults match [`crate::layout::MonospaceMeasurer`] for a 15 point
/// message font: one column per character advance and one row per line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellScale {
    /// Points per terminal column
    pub points_per_column: f64,
    /// Points per terminal row
    pub points_per_row: f64,
}

impl Default for CellScale {
    fn default() -> Self {
        Self {
            points_per_column: 9.0,
            points_per_row: 18.0,
        }
    }
}

impl CellScale {
    /// The screen an alert sees when it is drawn into `area`
    #[must_use]
    pub fn screen_for(&self, area: Rect) -> Screen {
        Screen::new(Size::new(
            f64::from(area.width) * self.points_per_column,
            f64::from(area.height) * self.points_per_row,
        ))
    }

    /// Cells covered by `region`, with `area` as the overlay's origin.
    ///
    /// Both edges are rounded to the nearest cell boundary, so regions that
    /// do not overlap in points never share a cell. The result is clipped to
    /// `area`.
    #[must_use]
    pub fn project(&self, region: Region, area: Rect) -> Rect {
        let left = to_cells(region.x(), self.points_per_column);
        let right = to_cells(region.max_x(), self.points_per_column);
        let top = to_cells(region.y(), self.points_per_row);
        let bottom = to_cells(region.max_y(), self.points_per_row);

        let projected = Rect::new(
            area.x.saturating_add(left),
            area.y.saturating_add(top),
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        );
        projected.intersection(area)
    }

    /// The point at the center of the cell at (`column`, `row`)
    #[must_use]
    pub fn point_for_cell(&self, column: u16, row: u16, area: Rect) -> Point {
        let column = f64::from(column.saturating_sub(area.x)) + 0.5;
        let row = f64::from(row.saturating_sub(area.y)) + 0.5;
        Point::new(column * self.points_per_column, row * self.points_per_row)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "rounded and clamped into u16 range first"
)]
fn to_cells(points: f64, per_cell: f64) -> u16 {
    if per_cell <= 0.0 {
        return 0;
    }
    (points / per_cell).round().clamp(0.0, f64::from(u16::MAX)) as u16
}
