// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Elbow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Elbow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Grid-restricted orthogonal path search.
//!
//! The search moves in `G`-sized steps on the lattice spanned by the padded bounds and orders
//! its frontier by `(path length, turn count)`. Ties are broken by insertion order, so the heap
//! pops nodes in exactly the order a stable sort-then-shift queue would.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::model::{point_in_any_box, Grid, Point, Rect};

/// Upper bound on lattice cells a single search may allocate state for.
///
/// Larger requests are reported as unreachable so the caller falls back to a direct elbow.
pub const MAX_SEARCH_CELLS: usize = 1 << 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPoint {
    x: i32,
    y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { x: self.x + dx, y: self.y + dy }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Expansion order; part of the tie-break contract.
    const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct LatticeBounds {
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
}

impl LatticeBounds {
    /// Lattice points that lie inside `rect` (inclusive).
    fn from_rect(rect: &Rect, grid: Grid) -> Option<Self> {
        let g = grid.spacing();
        let min_x = (rect.x / g).ceil();
        let max_x = (rect.right() / g).floor();
        let min_y = (rect.y / g).ceil();
        let max_y = (rect.bottom() / g).floor();
        if !(min_x <= max_x && min_y <= max_y) {
            return None;
        }
        let limit = f64::from(i32::MAX);
        if [min_x, max_x, min_y, max_y].iter().any(|v| v.abs() >= limit) {
            return None;
        }
        Some(Self {
            min_x: min_x as i32,
            max_x: max_x as i32,
            min_y: min_y as i32,
            max_y: max_y as i32,
        })
    }

    fn contains(&self, p: GridPoint) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    fn width(&self) -> usize {
        (i64::from(self.max_x) - i64::from(self.min_x) + 1) as usize
    }

    fn height(&self) -> usize {
        (i64::from(self.max_y) - i64::from(self.min_y) + 1) as usize
    }

    fn cell_count(&self) -> Option<usize> {
        self.width().checked_mul(self.height())
    }

    fn idx_of(&self, p: GridPoint) -> usize {
        let dx = (i64::from(p.x) - i64::from(self.min_x)) as usize;
        let dy = (i64::from(p.y) - i64::from(self.min_y)) as usize;
        dy * self.width() + dx
    }
}

/// Transient search state; `parent` links into the node arena stand in for the path so far.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    point: GridPoint,
    direction: Option<Direction>,
    turns: u32,
    len: u32,
    parent: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
struct Visit {
    len: u32,
    turns: u32,
}

fn to_lattice(point: Point, grid: Grid) -> Option<GridPoint> {
    let g = grid.spacing();
    let x = (point.x / g).round();
    let y = (point.y / g).round();
    let limit = f64::from(i32::MAX);
    if !x.is_finite() || !y.is_finite() || x.abs() >= limit || y.abs() >= limit {
        return None;
    }
    Some(GridPoint::new(x as i32, y as i32))
}

fn to_world(point: GridPoint, grid: Grid) -> Point {
    let g = grid.spacing();
    Point::new(f64::from(point.x) * g, f64::from(point.y) * g)
}

/// Finds the shortest orthogonal route from `start` to `end`, preferring fewer turns among
/// routes of equal length.
///
/// Both endpoints are snapped to `grid` first. Every move stays within `bounds` and never
/// enters an obstacle, except for the final move onto the destination itself. Returns an
/// empty path when the destination cannot be reached; returns `[start]` without searching
/// when both endpoints snap to the same point.
pub fn find_path(bounds: &Rect, start: Point, end: Point, obstacles: &[Rect], grid: Grid) -> Vec<Point> {
    let (Some(start), Some(goal)) =
        (to_lattice(grid.snap_point(start), grid), to_lattice(grid.snap_point(end), grid))
    else {
        debug!("[planner] endpoints outside the representable lattice");
        return Vec::new();
    };

    trace!(
        "[planner] find_path: start=({},{}) goal=({},{}) obstacles={}",
        start.x,
        start.y,
        goal.x,
        goal.y,
        obstacles.len()
    );

    if start == goal {
        return vec![to_world(start, grid)];
    }

    let Some(lattice) = LatticeBounds::from_rect(bounds, grid) else {
        debug!("[planner] search bounds contain no grid points");
        return Vec::new();
    };
    if !lattice.contains(goal) {
        debug!("[planner] goal ({},{}) lies outside the search bounds", goal.x, goal.y);
        return Vec::new();
    }
    let Some(cells) = lattice.cell_count().filter(|cells| *cells <= MAX_SEARCH_CELLS) else {
        debug!(
            "[planner] search area {}x{} exceeds {MAX_SEARCH_CELLS} cells",
            lattice.width(),
            lattice.height()
        );
        return Vec::new();
    };

    let mut visited: Vec<Option<Visit>> = vec![None; cells];
    if lattice.contains(start) {
        visited[lattice.idx_of(start)] = Some(Visit { len: 1, turns: 0 });
    }

    let mut arena = vec![SearchNode { point: start, direction: None, turns: 0, len: 1, parent: None }];
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((1u32, 0u32, 0usize)));
    let mut expanded = 0usize;

    while let Some(Reverse((_, _, node_idx))) = frontier.pop() {
        expanded += 1;
        let current = arena[node_idx];

        if current.point == goal {
            debug!(
                "[planner] reached goal: len={} turns={} expanded={expanded}",
                current.len, current.turns
            );
            return reconstruct_path(&arena, node_idx, grid);
        }

        for direction in Direction::ALL {
            let next = current.point.step(direction);
            if !lattice.contains(next) {
                continue;
            }
            if next != goal && point_in_any_box(to_world(next, grid), obstacles) {
                continue;
            }

            let turns = match current.direction {
                Some(previous) if previous != direction => current.turns + 1,
                _ => current.turns,
            };
            let len = current.len + 1;

            let slot = &mut visited[lattice.idx_of(next)];
            let admit = match slot {
                None => true,
                Some(best) => len <= best.len && turns < best.turns,
            };
            if !admit {
                continue;
            }
            *slot = Some(Visit { len, turns });

            arena.push(SearchNode {
                point: next,
                direction: Some(direction),
                turns,
                len,
                parent: Some(node_idx),
            });
            frontier.push(Reverse((len, turns, arena.len() - 1)));
        }
    }

    debug!("[planner] frontier exhausted without reaching goal: expanded={expanded}");
    Vec::new()
}

fn reconstruct_path(arena: &[SearchNode], mut idx: usize, grid: Grid) -> Vec<Point> {
    let mut path = Vec::with_capacity(arena[idx].len as usize);
    loop {
        let node = &arena[idx];
        path.push(to_world(node.point, grid));
        match node.parent {
            Some(parent) => idx = parent,
            None => break,
        }
    }
    path.reverse();
    path
}
