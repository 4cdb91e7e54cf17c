// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Elbow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Elbow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use log::debug;
use serde::{Deserialize, Serialize};

use super::obstacle::synthesize_footprint;
use super::planner::find_path;
use super::postprocess::{balance, simplify};
use crate::model::{box_from_points, boxes_overlap, Grid, Point, Rect, GRID_SIZE};

/// Router settings; every field has a default so partial JSON configs are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub grid_size: f64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self { grid_size: GRID_SIZE }
    }
}

impl RouterConfig {
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_size)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElbowRouter {
    grid: Grid,
}

impl ElbowRouter {
    pub fn new(config: RouterConfig) -> Self {
        Self { grid: config.grid() }
    }

    pub fn with_grid(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Routes an elbow connector from `p1` to `p2`, avoiding the endpoint boxes.
    ///
    /// Never fails: whenever no search is warranted or the search finds no route, the direct
    /// two-bend elbow is returned instead.
    pub fn route(&self, p1: Point, p2: Point, box1: Option<Rect>, box2: Option<Rect>) -> Vec<Point> {
        let (box1, box2) = match (box1, box2) {
            (None, None) => return direct_elbow(p1, p2),
            (Some(box1), Some(box2)) => (box1, box2),
            (Some(box1), None) => {
                let synthesized = synthesize_footprint(p2, p1, self.grid);
                if !boxes_overlap(&synthesized, &box_from_points(p1, p2)) {
                    return direct_elbow(p1, p2);
                }
                (box1, synthesized)
            }
            (None, Some(box2)) => {
                let synthesized = synthesize_footprint(p1, p2, self.grid);
                if !boxes_overlap(&synthesized, &box_from_points(p1, p2)) {
                    return direct_elbow(p1, p2);
                }
                (synthesized, box2)
            }
        };

        let bounds = box1.union(&box2).expand(self.grid.spacing());
        let path = find_path(&bounds, p1, p2, &[box1, box2], self.grid);
        if path.is_empty() {
            debug!(
                "[elbow] no grid route from ({},{}) to ({},{}); using direct elbow",
                p1.x, p1.y, p2.x, p2.y
            );
            return direct_elbow(p1, p2);
        }

        balance(simplify(&path), &box1, &box2)
    }

    /// Routes between two node footprints, anchoring each end at the midpoint of the side
    /// facing the other footprint.
    pub fn route_between(&self, from: &Rect, to: &Rect) -> Vec<Point> {
        let (p1, p2) = facing_anchors(from, to);
        self.route(p1, p2, Some(*from), Some(*to))
    }
}

/// Routes with the default grid. See [`ElbowRouter::route`].
pub fn create_elbow_connector(
    p1: Point,
    p2: Point,
    box1: Option<Rect>,
    box2: Option<Rect>,
) -> Vec<Point> {
    ElbowRouter::default().route(p1, p2, box1, box2)
}

/// Two-bend elbow between `p1` and `p2`, bending at the midpoint of the dominant axis.
///
/// Always four points, even for coincident endpoints.
pub fn direct_elbow(p1: Point, p2: Point) -> Vec<Point> {
    let dx = (p2.x - p1.x).abs();
    let dy = (p2.y - p1.y).abs();
    if dx >= dy {
        let mid_x = (p1.x + p2.x) / 2.0;
        vec![p1, Point::new(mid_x, p1.y), Point::new(mid_x, p2.y), p2]
    } else {
        let mid_y = (p1.y + p2.y) / 2.0;
        vec![p1, Point::new(p1.x, mid_y), Point::new(p2.x, mid_y), p2]
    }
}

/// Midpoints of the sides of `from` and `to` that face each other along the dominant axis of
/// their center delta.
pub fn facing_anchors(from: &Rect, to: &Rect) -> (Point, Point) {
    let a = from.center();
    let b = to.center();
    if (b.x - a.x).abs() >= (b.y - a.y).abs() {
        if b.x >= a.x {
            (Point::new(from.right(), a.y), Point::new(to.x, b.y))
        } else {
            (Point::new(from.x, a.y), Point::new(to.right(), b.y))
        }
    } else if b.y >= a.y {
        (Point::new(a.x, from.bottom()), Point::new(b.x, to.y))
    } else {
        (Point::new(a.x, from.y), Point::new(b.x, to.bottom()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::model::point_in_box;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn assert_orthogonal(path: &[Point]) {
        for pair in path.windows(2) {
            let same_x = pair[0].x == pair[1].x;
            let same_y = pair[0].y == pair[1].y;
            assert!(same_x || same_y, "diagonal segment {:?} -> {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn boxless_connector_bends_at_horizontal_midpoint() {
        assert_eq!(
            create_elbow_connector(pt(20.0, 20.0), pt(40.0, 30.0), None, None),
            vec![pt(20.0, 20.0), pt(30.0, 20.0), pt(30.0, 30.0), pt(40.0, 30.0)]
        );
    }

    #[rstest]
    #[case(pt(0.0, 0.0), pt(100.0, 30.0))]
    #[case(pt(0.0, 0.0), pt(30.0, 100.0))]
    #[case(pt(55.0, -12.0), pt(-3.0, 41.0))]
    #[case(pt(7.0, 7.0), pt(7.0, 7.0))]
    #[case(pt(0.0, 0.0), pt(50.0, -50.0))]
    fn boxless_connector_is_a_four_point_elbow(#[case] p1: Point, #[case] p2: Point) {
        let path = create_elbow_connector(p1, p2, None, None);

        assert_eq!(path.len(), 4);
        assert_eq!(path[0], p1);
        assert_eq!(path[3], p2);
        assert_orthogonal(&path);

        if (p2.x - p1.x).abs() >= (p2.y - p1.y).abs() {
            let mid = (p1.x + p2.x) / 2.0;
            assert_eq!(path[1], pt(mid, p1.y));
            assert_eq!(path[2], pt(mid, p2.y));
        } else {
            let mid = (p1.y + p2.y) / 2.0;
            assert_eq!(path[1], pt(p1.x, mid));
            assert_eq!(path[2], pt(p2.x, mid));
        }
    }

    #[test]
    fn boxed_connector_routes_and_balances_between_boxes() {
        let path = create_elbow_connector(
            pt(100.0, 100.0),
            pt(300.0, 300.0),
            Some(Rect::new(40.0, 40.0, 120.0, 60.0)),
            Some(Rect::new(240.0, 300.0, 120.0, 60.0)),
        );

        assert_eq!(
            path,
            vec![pt(100.0, 100.0), pt(100.0, 200.0), pt(300.0, 200.0), pt(300.0, 300.0)]
        );
    }

    #[test]
    fn boxed_connector_side_by_side_centers_jog() {
        let from = Rect::new(0.0, 0.0, 100.0, 60.0);
        let to = Rect::new(300.0, 100.0, 100.0, 60.0);
        let path = create_elbow_connector(pt(100.0, 30.0), pt(300.0, 130.0), Some(from), Some(to));

        assert_eq!(path.first(), Some(&pt(100.0, 30.0)));
        assert_eq!(path.last(), Some(&pt(300.0, 130.0)));
        assert_eq!(path.len(), 4, "{path:?}");
        assert_eq!(path[1].x, 200.0);
        assert_eq!(path[2].x, 200.0);
        assert_orthogonal(&path);
    }

    #[test]
    fn unreachable_route_falls_back_to_direct_elbow() {
        // The start sits deep inside its own box, so every first move is blocked.
        let from = Rect::new(0.0, 0.0, 100.0, 100.0);
        let to = Rect::new(300.0, 0.0, 100.0, 100.0);
        let p1 = pt(50.0, 50.0);
        let p2 = pt(300.0, 50.0);

        assert_eq!(create_elbow_connector(p1, p2, Some(from), Some(to)), direct_elbow(p1, p2));
    }

    #[test]
    fn single_box_with_facing_away_footprint_uses_direct_elbow() {
        let box1 = Rect::new(0.0, 0.0, 100.0, 60.0);
        let p1 = pt(100.0, 30.0);
        let p2 = pt(300.0, 90.0);

        assert_eq!(create_elbow_connector(p1, p2, Some(box1), None), direct_elbow(p1, p2));
        assert_eq!(create_elbow_connector(p2, p1, None, Some(box1)), direct_elbow(p2, p1));
    }

    #[test]
    fn coincident_boxed_endpoints_yield_trivial_path() {
        let rect = Rect::new(0.0, 0.0, 40.0, 40.0);
        let path = create_elbow_connector(pt(40.0, 20.0), pt(40.0, 20.0), Some(rect), Some(rect));
        assert_eq!(path, vec![pt(40.0, 20.0)]);
    }

    #[test]
    fn routed_points_stay_out_of_obstacles() {
        let from = Rect::new(0.0, 0.0, 80.0, 80.0);
        let to = Rect::new(40.0, 200.0, 80.0, 80.0);
        let (p1, p2) = facing_anchors(&from, &to);
        let path = create_elbow_connector(p1, p2, Some(from), Some(to));

        assert_orthogonal(&path);
        assert_eq!(path.last(), Some(&p2));
        for p in path.iter().skip(1).take(path.len().saturating_sub(2)) {
            let strictly_inside = |r: &Rect| p.x > r.x && p.x < r.right() && p.y > r.y && p.y < r.bottom();
            assert!(!strictly_inside(&from) && !strictly_inside(&to), "{p:?} inside obstacle");
        }
        assert!(point_in_box(path[0], &from));
    }

    #[rstest]
    #[case(Rect::new(0.0, 0.0, 100.0, 60.0), Rect::new(300.0, 0.0, 100.0, 60.0), pt(100.0, 30.0), pt(300.0, 30.0))]
    #[case(Rect::new(300.0, 0.0, 100.0, 60.0), Rect::new(0.0, 0.0, 100.0, 60.0), pt(300.0, 30.0), pt(100.0, 30.0))]
    #[case(Rect::new(0.0, 0.0, 100.0, 60.0), Rect::new(0.0, 200.0, 100.0, 60.0), pt(50.0, 60.0), pt(50.0, 200.0))]
    #[case(Rect::new(0.0, 200.0, 100.0, 60.0), Rect::new(0.0, 0.0, 100.0, 60.0), pt(50.0, 200.0), pt(50.0, 60.0))]
    fn anchors_face_each_other(
        #[case] from: Rect,
        #[case] to: Rect,
        #[case] expected_from: Point,
        #[case] expected_to: Point,
    ) {
        assert_eq!(facing_anchors(&from, &to), (expected_from, expected_to));
    }

    #[test]
    fn router_config_defaults_missing_fields() {
        let config: RouterConfig = serde_json::from_str("{}").expect("config");
        assert_eq!(config, RouterConfig::default());

        let config: RouterConfig = serde_json::from_str(r#"{"grid_size": 20.0}"#).expect("config");
        assert_eq!(ElbowRouter::new(config).grid().spacing(), 20.0);
    }
}
