// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Elbow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Elbow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::geom::{Grid, Point, Rect};
use super::ids::{EdgeId, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(100.0, 80.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    position: Point,
    size: Size,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl Node {
    pub fn new(position: Point, size: Size) -> Self {
        Self { position, size, label: None }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label<T: Into<String>>(&mut self, label: Option<T>) {
        self.label = label.map(Into::into);
    }

    /// The node footprint, used as the router's obstacle for connected edges.
    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.w, self.size.h)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    from_node_id: NodeId,
    to_node_id: NodeId,
    /// Derived route; recomputed whenever an endpoint's geometry changes.
    #[serde(default)]
    points: Vec<Point>,
}

impl Edge {
    pub fn new(from_node_id: NodeId, to_node_id: NodeId) -> Self {
        Self { from_node_id, to_node_id, points: Vec::new() }
    }

    pub fn from_node_id(&self) -> &NodeId {
        &self.from_node_id
    }

    pub fn to_node_id(&self) -> &NodeId {
        &self.to_node_id
    }

    pub fn touches(&self, node_id: &NodeId) -> bool {
        &self.from_node_id == node_id || &self.to_node_id == node_id
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn set_points(&mut self, points: Vec<Point>) {
        self.points = points;
    }
}

/// The editable document: nodes, the edges between them, and the grid they live on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Canvas {
    #[serde(default)]
    grid: Grid,
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeMap<EdgeId, Edge>,
}

impl Canvas {
    pub fn new(grid: Grid) -> Self {
        Self { grid, nodes: BTreeMap::new(), edges: BTreeMap::new() }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut BTreeMap<NodeId, Node> {
        &mut self.nodes
    }

    pub fn edges(&self) -> &BTreeMap<EdgeId, Edge> {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut BTreeMap<EdgeId, Edge> {
        &mut self.edges
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    pub fn edge(&self, edge_id: &EdgeId) -> Option<&Edge> {
        self.edges.get(edge_id)
    }

    /// Ids of all edges with `node_id` as either endpoint, in id order.
    pub fn edge_ids_for_node(&self, node_id: &NodeId) -> Vec<EdgeId> {
        self.edges
            .iter()
            .filter(|(_, edge)| edge.touches(node_id))
            .map(|(edge_id, _)| edge_id.clone())
            .collect()
    }
}
