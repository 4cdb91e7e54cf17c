// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Elbow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Elbow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Undoable canvas mutations.
//!
//! Every command carries full before/after snapshots of what it touches, so applying or
//! reversing it never depends on state captured by reference. Commands that move, resize, or
//! restore nodes re-route every edge connected to those nodes from scratch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layout::ElbowRouter;
use crate::model::{Canvas, Edge, EdgeId, IdError, Node, NodeId, Point, Size};

pub mod history;

pub use history::{History, Reversible};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CanvasOp {
    CreateNode {
        node_id: NodeId,
        node: Node,
    },
    DeleteNode {
        node_id: NodeId,
        node: Node,
        edges: Vec<(EdgeId, Edge)>,
    },
    MoveNode {
        node_id: NodeId,
        from: Point,
        to: Point,
    },
    MoveNodes {
        moves: Vec<NodeMove>,
    },
    ResizeNode {
        node_id: NodeId,
        from: Size,
        to: Size,
    },
    SetNodeLabel {
        node_id: NodeId,
        from: Option<String>,
        to: Option<String>,
    },
    CreateEdge {
        edge_id: EdgeId,
        from_node_id: NodeId,
        to_node_id: NodeId,
    },
    DeleteEdge {
        edge_id: EdgeId,
        edge: Edge,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeMove {
    pub node_id: NodeId,
    pub from: Point,
    pub to: Point,
}

impl CanvasOp {
    /// Snapshots `node_id` and every edge touching it.
    pub fn delete_node(canvas: &Canvas, node_id: &NodeId) -> Result<Self, OpError> {
        let node = canvas.node(node_id).ok_or_else(|| node_not_found(node_id))?.clone();
        let edges = canvas
            .edges()
            .iter()
            .filter(|(_, edge)| edge.touches(node_id))
            .map(|(edge_id, edge)| (edge_id.clone(), edge.clone()))
            .collect();
        Ok(Self::DeleteNode { node_id: node_id.clone(), node, edges })
    }

    pub fn move_node(canvas: &Canvas, node_id: &NodeId, to: Point) -> Result<Self, OpError> {
        let node = canvas.node(node_id).ok_or_else(|| node_not_found(node_id))?;
        Ok(Self::MoveNode { node_id: node_id.clone(), from: node.position(), to })
    }

    /// Translates every listed node by `(dx, dy)`. Duplicate ids are moved once.
    pub fn move_nodes(canvas: &Canvas, node_ids: &[NodeId], dx: f64, dy: f64) -> Result<Self, OpError> {
        let mut moves: Vec<NodeMove> = Vec::with_capacity(node_ids.len());
        for node_id in node_ids {
            if moves.iter().any(|m| &m.node_id == node_id) {
                continue;
            }
            let node = canvas.node(node_id).ok_or_else(|| node_not_found(node_id))?;
            let from = node.position();
            moves.push(NodeMove { node_id: node_id.clone(), from, to: from.offset(dx, dy) });
        }
        Ok(Self::MoveNodes { moves })
    }

    pub fn resize_node(canvas: &Canvas, node_id: &NodeId, to: Size) -> Result<Self, OpError> {
        let node = canvas.node(node_id).ok_or_else(|| node_not_found(node_id))?;
        Ok(Self::ResizeNode { node_id: node_id.clone(), from: node.size(), to })
    }

    pub fn set_node_label(
        canvas: &Canvas,
        node_id: &NodeId,
        to: Option<String>,
    ) -> Result<Self, OpError> {
        let node = canvas.node(node_id).ok_or_else(|| node_not_found(node_id))?;
        Ok(Self::SetNodeLabel {
            node_id: node_id.clone(),
            from: node.label().map(str::to_owned),
            to,
        })
    }

    pub fn delete_edge(canvas: &Canvas, edge_id: &EdgeId) -> Result<Self, OpError> {
        let edge = canvas.edge(edge_id).ok_or_else(|| edge_not_found(edge_id))?.clone();
        Ok(Self::DeleteEdge { edge_id: edge_id.clone(), edge })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Node,
    Edge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    AlreadyExists { kind: ObjectKind, object_id: String },
    NotFound { kind: ObjectKind, object_id: String },
    MissingNode { node_id: NodeId },
    NodeInUse { node_id: NodeId, edge_id: EdgeId },
    InvalidId { reason: IdError },
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyExists { kind, object_id } => {
                write!(f, "object already exists ({kind:?}, id={object_id})")
            }
            Self::NotFound { kind, object_id } => {
                write!(f, "object not found ({kind:?}, id={object_id})")
            }
            Self::MissingNode { node_id } => write!(f, "edge endpoint node not found (id={node_id})"),
            Self::NodeInUse { node_id, edge_id } => {
                write!(f, "node {node_id} is still connected by edge {edge_id}")
            }
            Self::InvalidId { reason } => write!(f, "invalid id: {reason}"),
        }
    }
}

impl std::error::Error for OpError {}

impl From<IdError> for OpError {
    fn from(reason: IdError) -> Self {
        Self::InvalidId { reason }
    }
}

fn node_not_found(node_id: &NodeId) -> OpError {
    OpError::NotFound { kind: ObjectKind::Node, object_id: node_id.to_string() }
}

fn edge_not_found(edge_id: &EdgeId) -> OpError {
    OpError::NotFound { kind: ObjectKind::Edge, object_id: edge_id.to_string() }
}

// Command application against the canvas.
include!("ops_impl.rs");
