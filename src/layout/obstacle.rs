// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Elbow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Elbow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Grid, Point, Rect};

/// Synthesizes a `2G x 2G` footprint for an endpoint that has no box of its own.
///
/// The square sits flush against `anchor` on the side facing away from `other`, along the
/// dominant travel axis (horizontal when `|dx| >= |dy|`). It is centered on `anchor` across
/// the other axis.
pub fn synthesize_footprint(anchor: Point, other: Point, grid: Grid) -> Rect {
    let side = grid.spacing() * 2.0;
    let half = side / 2.0;
    let dx = (anchor.x - other.x).abs();
    let dy = (anchor.y - other.y).abs();

    if dx >= dy {
        let x = if other.x > anchor.x { anchor.x - side } else { anchor.x };
        Rect::new(x, anchor.y - half, side, side)
    } else {
        let y = if other.y > anchor.y { anchor.y - side } else { anchor.y };
        Rect::new(anchor.x - half, y, side, side)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    // Other endpoint to the right: footprint extends left.
    #[case(Point::new(100.0, 100.0), Point::new(300.0, 150.0), Rect::new(80.0, 90.0, 20.0, 20.0))]
    // Other endpoint to the left: footprint extends right.
    #[case(Point::new(100.0, 100.0), Point::new(0.0, 120.0), Rect::new(100.0, 90.0, 20.0, 20.0))]
    // Other endpoint below: footprint extends up.
    #[case(Point::new(100.0, 100.0), Point::new(110.0, 300.0), Rect::new(90.0, 80.0, 20.0, 20.0))]
    // Other endpoint above: footprint extends down.
    #[case(Point::new(100.0, 100.0), Point::new(90.0, 0.0), Rect::new(90.0, 100.0, 20.0, 20.0))]
    // Equal deltas count as horizontal.
    #[case(Point::new(0.0, 0.0), Point::new(50.0, 50.0), Rect::new(-20.0, -10.0, 20.0, 20.0))]
    fn footprint_faces_away_from_other_endpoint(
        #[case] anchor: Point,
        #[case] other: Point,
        #[case] expected: Rect,
    ) {
        assert_eq!(synthesize_footprint(anchor, other, Grid::default()), expected);
    }

    #[test]
    fn footprint_scales_with_grid_spacing() {
        let rect = synthesize_footprint(Point::new(0.0, 0.0), Point::new(100.0, 0.0), Grid::new(25.0));
        assert_eq!(rect, Rect::new(-50.0, -25.0, 50.0, 50.0));
    }
}
