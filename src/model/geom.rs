// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Elbow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Elbow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Canvas geometry: points, axis-aligned rectangles and grid snapping.

use serde::{Deserialize, Serialize};

/// Default grid spacing (`G`) in canvas units.
pub const GRID_SIZE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// Axis-aligned rectangle `{x, y, w, h}` with `(x, y)` at the top-left corner.
///
/// Negative sizes are not validated; geometry on such rectangles is unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn expand(&self, margin: f64) -> Self {
        Self::new(self.x - margin, self.y - margin, self.w + margin * 2.0, self.h + margin * 2.0)
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Self {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = self.right().max(other.right());
        let max_y = self.bottom().max(other.bottom());
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

/// Grid spacing used for snapping and for the router's move step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    spacing: f64,
}

impl Default for Grid {
    fn default() -> Self {
        Self { spacing: GRID_SIZE }
    }
}

impl Grid {
    /// Non-finite or non-positive spacings fall back to [`GRID_SIZE`].
    pub fn new(spacing: f64) -> Self {
        if spacing.is_finite() && spacing > 0.0 {
            Self { spacing }
        } else {
            Self::default()
        }
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Rounds to the nearest grid line; halves round towards positive infinity.
    pub fn snap(&self, value: f64) -> f64 {
        (value / self.spacing + 0.5).floor() * self.spacing
    }

    pub fn snap_point(&self, point: Point) -> Point {
        Point::new(self.snap(point.x), self.snap(point.y))
    }
}

pub fn snap_to_grid(value: f64) -> f64 {
    Grid::default().snap(value)
}

pub fn snap_point_to_grid(point: Point) -> Point {
    Grid::default().snap_point(point)
}

/// Returns `true` unless the rectangles are separated on some axis.
///
/// Rectangles that only share an edge do not overlap.
pub fn boxes_overlap(a: &Rect, b: &Rect) -> bool {
    !(a.right() <= b.x || b.right() <= a.x || a.bottom() <= b.y || b.bottom() <= a.y)
}

/// Normalized rectangle spanning two corner points.
pub fn box_from_points(p1: Point, p2: Point) -> Rect {
    let x = p1.x.min(p2.x);
    let y = p1.y.min(p2.y);
    Rect::new(x, y, (p1.x - p2.x).abs(), (p1.y - p2.y).abs())
}

/// Inclusive containment test: points on the border are inside.
pub fn point_in_box(point: Point, rect: &Rect) -> bool {
    point.x >= rect.x && point.x <= rect.right() && point.y >= rect.y && point.y <= rect.bottom()
}

pub fn point_in_any_box(point: Point, rects: &[Rect]) -> bool {
    rects.iter().any(|rect| point_in_box(point, rect))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(4.9, 0.0)]
    #[case(5.0, 10.0)]
    #[case(14.0, 10.0)]
    #[case(-4.0, 0.0)]
    #[case(-15.0, -10.0)]
    #[case(-16.0, -20.0)]
    fn snaps_to_nearest_grid_line(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(snap_to_grid(value), expected);
    }

    #[test]
    fn snaps_points_per_axis() {
        assert_eq!(snap_point_to_grid(Point::new(23.0, 37.0)), Point::new(20.0, 40.0));
        assert_eq!(Grid::new(25.0).snap_point(Point::new(30.0, 40.0)), Point::new(25.0, 50.0));
    }

    #[test]
    fn invalid_grid_spacing_falls_back_to_default() {
        assert_eq!(Grid::new(0.0).spacing(), GRID_SIZE);
        assert_eq!(Grid::new(-5.0).spacing(), GRID_SIZE);
        assert_eq!(Grid::new(f64::NAN).spacing(), GRID_SIZE);
    }

    #[rstest]
    #[case(Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(5.0, 5.0, 10.0, 10.0), true)]
    #[case(Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(10.0, 0.0, 10.0, 10.0), false)]
    #[case(Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(0.0, 10.0, 10.0, 10.0), false)]
    #[case(Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(20.0, 20.0, 5.0, 5.0), false)]
    #[case(Rect::new(0.0, 0.0, 30.0, 30.0), Rect::new(10.0, 10.0, 5.0, 5.0), true)]
    fn overlap_treats_touching_edges_as_separate(
        #[case] a: Rect,
        #[case] b: Rect,
        #[case] expected: bool,
    ) {
        assert_eq!(boxes_overlap(&a, &b), expected);
        assert_eq!(boxes_overlap(&b, &a), expected);
    }

    #[test]
    fn box_from_points_normalizes_corners() {
        let rect = box_from_points(Point::new(40.0, 10.0), Point::new(10.0, 30.0));
        assert_eq!(rect, Rect::new(10.0, 10.0, 30.0, 20.0));
    }

    #[test]
    fn point_in_box_is_inclusive() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(point_in_box(Point::new(0.0, 0.0), &rect));
        assert!(point_in_box(Point::new(10.0, 10.0), &rect));
        assert!(point_in_box(Point::new(5.0, 10.0), &rect));
        assert!(!point_in_box(Point::new(10.1, 5.0), &rect));

        let others = [Rect::new(100.0, 100.0, 5.0, 5.0), rect];
        assert!(point_in_any_box(Point::new(3.0, 3.0), &others));
        assert!(!point_in_any_box(Point::new(50.0, 50.0), &others));
        assert!(!point_in_any_box(Point::new(3.0, 3.0), &[]));
    }

    #[test]
    fn union_and_expand_cover_both_rectangles() {
        let a = Rect::new(40.0, 40.0, 120.0, 60.0);
        let b = Rect::new(240.0, 300.0, 120.0, 60.0);
        let padded = a.union(&b).expand(GRID_SIZE);
        assert_eq!(padded, Rect::new(30.0, 30.0, 340.0, 340.0));
    }
}
