// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Elbow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Elbow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Cleanup passes applied to raw planner output.

use smallvec::SmallVec;

use crate::model::{Point, Rect};

/// Drops interior points that sit on a straight run (collinear with both neighbours on the
/// same axis). Corners and both endpoints are always kept.
pub fn simplify(path: &[Point]) -> Vec<Point> {
    let mut simplified = Vec::with_capacity(path.len());
    for (idx, p) in path.iter().enumerate() {
        if idx == 0 || idx + 1 == path.len() {
            simplified.push(*p);
            continue;
        }
        let prev = path[idx - 1];
        let next = path[idx + 1];
        let vertical_run = prev.x == p.x && p.x == next.x;
        let horizontal_run = prev.y == p.y && p.y == next.y;
        if vertical_run || horizontal_run {
            continue;
        }
        simplified.push(*p);
    }
    simplified
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn of(self, p: &Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }

    fn set(self, p: &mut Point, value: f64) {
        match self {
            Self::X => p.x = value,
            Self::Y => p.y = value,
        }
    }
}

/// Open interval between two boxes separated along `axis`, if any.
fn gap_between(a: &Rect, b: &Rect, axis: Axis) -> Option<(f64, f64)> {
    let (a_lo, a_hi, b_lo, b_hi) = match axis {
        Axis::X => (a.x, a.right(), b.x, b.right()),
        Axis::Y => (a.y, a.bottom(), b.y, b.bottom()),
    };
    if a_hi <= b_lo {
        Some((a_hi, b_lo))
    } else if b_hi <= a_lo {
        Some((b_hi, a_lo))
    } else {
        None
    }
}

/// Recenters a single jog inside the gap along `axis`. Returns whether the path changed.
fn center_jog(path: &mut [Point], gap: (f64, f64), axis: Axis) -> bool {
    let (lo, hi) = gap;
    let interior_end = path.len().saturating_sub(1);
    let inside = (1..interior_end)
        .filter(|&idx| {
            let v = axis.of(&path[idx]);
            v > lo && v < hi
        })
        .collect::<SmallVec<[usize; 2]>>();

    let [first, second] = inside.as_slice() else {
        return false;
    };
    let (first, second) = (*first, *second);
    if second != first + 1 || axis.of(&path[first]) != axis.of(&path[second]) {
        return false;
    }

    let mid = lo + (hi - lo) / 2.0;
    axis.set(&mut path[first], mid);
    axis.set(&mut path[second], mid);
    true
}

/// Centers the connecting jog of a simplified path in the gap between the two endpoint boxes.
///
/// Applies only when the boxes are separated by a gap and exactly two interior points fall
/// strictly inside it, forming one segment that crosses the gap perpendicular to its axis.
/// The horizontal gap is tried first; the vertical gap only when the horizontal rule did not
/// apply. Multi-jog paths are left as they are.
pub fn balance(mut path: Vec<Point>, a: &Rect, b: &Rect) -> Vec<Point> {
    if let Some(gap) = gap_between(a, b, Axis::X) {
        if center_jog(&mut path, gap, Axis::X) {
            return path;
        }
    }
    if let Some(gap) = gap_between(a, b, Axis::Y) {
        center_jog(&mut path, gap, Axis::Y);
    }
    path
}
