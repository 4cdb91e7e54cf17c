// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Elbow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Elbow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Editing session over a canvas.
//!
//! Every mutation goes through an undoable [`CanvasOp`], so the canvas and its history can never
//! drift apart.

use log::debug;

use crate::layout::{ElbowRouter, RouterConfig};
use crate::model::{Canvas, EdgeId, Node, NodeId, Point, Size};
use crate::ops::{CanvasOp, History, OpError};

#[derive(Debug, Clone, Default)]
pub struct Editor {
    canvas: Canvas,
    history: History<CanvasOp>,
    next_node_seq: u64,
    next_edge_seq: u64,
}

impl Editor {
    pub fn new(canvas: Canvas) -> Self {
        Self { canvas, history: History::new(), next_node_seq: 0, next_edge_seq: 0 }
    }

    pub fn with_config(config: RouterConfig) -> Self {
        Self::new(Canvas::new(config.grid()))
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn history(&self) -> &History<CanvasOp> {
        &self.history
    }

    pub fn router(&self) -> ElbowRouter {
        ElbowRouter::with_grid(self.canvas.grid())
    }

    pub fn create_node(
        &mut self,
        position: Point,
        size: Size,
        label: Option<String>,
    ) -> Result<NodeId, OpError> {
        let node_id = self.next_node_id()?;
        let mut node = Node::new(position, size);
        node.set_label(label);
        self.push(CanvasOp::CreateNode { node_id: node_id.clone(), node })?;
        Ok(node_id)
    }

    pub fn move_node(&mut self, node_id: &NodeId, to: Point) -> Result<(), OpError> {
        let op = CanvasOp::move_node(&self.canvas, node_id, to)?;
        self.push(op)
    }

    pub fn move_nodes(&mut self, node_ids: &[NodeId], dx: f64, dy: f64) -> Result<(), OpError> {
        let op = CanvasOp::move_nodes(&self.canvas, node_ids, dx, dy)?;
        self.push(op)
    }

    pub fn resize_node(&mut self, node_id: &NodeId, size: Size) -> Result<(), OpError> {
        let op = CanvasOp::resize_node(&self.canvas, node_id, size)?;
        self.push(op)
    }

    pub fn set_node_label(&mut self, node_id: &NodeId, label: Option<String>) -> Result<(), OpError> {
        let op = CanvasOp::set_node_label(&self.canvas, node_id, label)?;
        self.push(op)
    }

    /// Deletes a node together with every edge attached to it.
    pub fn delete_node(&mut self, node_id: &NodeId) -> Result<(), OpError> {
        let op = CanvasOp::delete_node(&self.canvas, node_id)?;
        self.push(op)
    }

    pub fn create_edge(&mut self, from: &NodeId, to: &NodeId) -> Result<EdgeId, OpError> {
        let edge_id = self.next_edge_id()?;
        self.push(CanvasOp::CreateEdge {
            edge_id: edge_id.clone(),
            from_node_id: from.clone(),
            to_node_id: to.clone(),
        })?;
        Ok(edge_id)
    }

    pub fn delete_edge(&mut self, edge_id: &EdgeId) -> Result<(), OpError> {
        let op = CanvasOp::delete_edge(&self.canvas, edge_id)?;
        self.push(op)
    }

    /// Returns `Ok(false)` when there was nothing to undo.
    pub fn undo(&mut self) -> Result<bool, OpError> {
        self.history.undo(&mut self.canvas)
    }

    /// Returns `Ok(false)` when there was nothing to redo.
    pub fn redo(&mut self) -> Result<bool, OpError> {
        self.history.redo(&mut self.canvas)
    }

    pub fn undo_available(&self) -> bool {
        self.history.undo_available()
    }

    pub fn redo_available(&self) -> bool {
        self.history.redo_available()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn push(&mut self, op: CanvasOp) -> Result<(), OpError> {
        self.history.push(&mut self.canvas, op).map_err(|err| {
            debug!("[editor] command rejected: {err}");
            err
        })
    }

    // Ids are never reused within a session, even after the object is undone away.
    fn next_node_id(&mut self) -> Result<NodeId, OpError> {
        loop {
            self.next_node_seq += 1;
            let node_id = NodeId::new(format!("node-{}", self.next_node_seq))?;
            if self.canvas.node(&node_id).is_none() {
                return Ok(node_id);
            }
        }
    }

    fn next_edge_id(&mut self) -> Result<EdgeId, OpError> {
        loop {
            self.next_edge_seq += 1;
            let edge_id = EdgeId::new(format!("edge-{}", self.next_edge_seq))?;
            if self.canvas.edge(&edge_id).is_none() {
                return Ok(edge_id);
            }
        }
    }
}
