// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Elbow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Elbow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Forward/backward application of `CanvasOp` against a `Canvas`.
/// Every branch validates before it mutates, so a failed command leaves the canvas untouched.
impl Reversible for CanvasOp {
    type Target = Canvas;
    type Error = OpError;

    fn apply(&self, canvas: &mut Canvas) -> Result<(), OpError> {
        match self {
            Self::CreateNode { node_id, node } => insert_node(canvas, node_id, node),
            Self::DeleteNode { node_id, .. } => {
                if canvas.nodes_mut().remove(node_id).is_none() {
                    return Err(node_not_found(node_id));
                }
                for edge_id in canvas.edge_ids_for_node(node_id) {
                    canvas.edges_mut().remove(&edge_id);
                }
                Ok(())
            }
            Self::MoveNode { node_id, to, .. } => set_position(canvas, node_id, *to),
            Self::MoveNodes { moves } => {
                set_positions(canvas, moves.iter().map(|m| (&m.node_id, m.to)))
            }
            Self::ResizeNode { node_id, to, .. } => set_size(canvas, node_id, *to),
            Self::SetNodeLabel { node_id, to, .. } => set_label(canvas, node_id, to.clone()),
            Self::CreateEdge { edge_id, from_node_id, to_node_id } => {
                insert_edge(canvas, edge_id, Edge::new(from_node_id.clone(), to_node_id.clone()))
            }
            Self::DeleteEdge { edge_id, .. } => remove_edge(canvas, edge_id),
        }
    }

    fn reverse(&self, canvas: &mut Canvas) -> Result<(), OpError> {
        match self {
            Self::CreateNode { node_id, .. } => {
                if let Some(edge_id) = canvas.edge_ids_for_node(node_id).into_iter().next() {
                    return Err(OpError::NodeInUse { node_id: node_id.clone(), edge_id });
                }
                if canvas.nodes_mut().remove(node_id).is_none() {
                    return Err(node_not_found(node_id));
                }
                Ok(())
            }
            Self::DeleteNode { node_id, node, edges } => restore_node(canvas, node_id, node, edges),
            Self::MoveNode { node_id, from, .. } => set_position(canvas, node_id, *from),
            Self::MoveNodes { moves } => {
                set_positions(canvas, moves.iter().map(|m| (&m.node_id, m.from)))
            }
            Self::ResizeNode { node_id, from, .. } => set_size(canvas, node_id, *from),
            Self::SetNodeLabel { node_id, from, .. } => set_label(canvas, node_id, from.clone()),
            Self::CreateEdge { edge_id, .. } => remove_edge(canvas, edge_id),
            Self::DeleteEdge { edge_id, edge } => insert_edge(canvas, edge_id, edge.clone()),
        }
    }
}

fn insert_node(canvas: &mut Canvas, node_id: &NodeId, node: &Node) -> Result<(), OpError> {
    if canvas.node(node_id).is_some() {
        return Err(OpError::AlreadyExists {
            kind: ObjectKind::Node,
            object_id: node_id.to_string(),
        });
    }
    canvas.nodes_mut().insert(node_id.clone(), node.clone());
    Ok(())
}

fn restore_node(
    canvas: &mut Canvas,
    node_id: &NodeId,
    node: &Node,
    edges: &[(EdgeId, Edge)],
) -> Result<(), OpError> {
    if canvas.node(node_id).is_some() {
        return Err(OpError::AlreadyExists {
            kind: ObjectKind::Node,
            object_id: node_id.to_string(),
        });
    }
    for (edge_id, edge) in edges {
        if canvas.edge(edge_id).is_some() {
            return Err(OpError::AlreadyExists {
                kind: ObjectKind::Edge,
                object_id: edge_id.to_string(),
            });
        }
        for endpoint in [edge.from_node_id(), edge.to_node_id()] {
            if endpoint != node_id && canvas.node(endpoint).is_none() {
                return Err(OpError::MissingNode { node_id: endpoint.clone() });
            }
        }
    }

    canvas.nodes_mut().insert(node_id.clone(), node.clone());
    for (edge_id, edge) in edges {
        canvas.edges_mut().insert(edge_id.clone(), edge.clone());
    }
    reroute_edges_touching(canvas, &[node_id]);
    Ok(())
}

fn set_position(canvas: &mut Canvas, node_id: &NodeId, position: Point) -> Result<(), OpError> {
    let node = canvas.nodes_mut().get_mut(node_id).ok_or_else(|| node_not_found(node_id))?;
    node.set_position(position);
    reroute_edges_touching(canvas, &[node_id]);
    Ok(())
}

fn set_positions<'a>(
    canvas: &mut Canvas,
    targets: impl Iterator<Item = (&'a NodeId, Point)> + Clone,
) -> Result<(), OpError> {
    if let Some((missing, _)) = targets.clone().find(|(node_id, _)| canvas.node(node_id).is_none()) {
        return Err(node_not_found(missing));
    }

    let mut moved = Vec::new();
    for (node_id, position) in targets {
        if let Some(node) = canvas.nodes_mut().get_mut(node_id) {
            node.set_position(position);
            moved.push(node_id);
        }
    }
    reroute_edges_touching(canvas, &moved);
    Ok(())
}

fn set_size(canvas: &mut Canvas, node_id: &NodeId, size: Size) -> Result<(), OpError> {
    let node = canvas.nodes_mut().get_mut(node_id).ok_or_else(|| node_not_found(node_id))?;
    node.set_size(size);
    reroute_edges_touching(canvas, &[node_id]);
    Ok(())
}

fn set_label(canvas: &mut Canvas, node_id: &NodeId, label: Option<String>) -> Result<(), OpError> {
    let node = canvas.nodes_mut().get_mut(node_id).ok_or_else(|| node_not_found(node_id))?;
    node.set_label(label);
    Ok(())
}

fn insert_edge(canvas: &mut Canvas, edge_id: &EdgeId, edge: Edge) -> Result<(), OpError> {
    if canvas.edge(edge_id).is_some() {
        return Err(OpError::AlreadyExists {
            kind: ObjectKind::Edge,
            object_id: edge_id.to_string(),
        });
    }
    for endpoint in [edge.from_node_id(), edge.to_node_id()] {
        if canvas.node(endpoint).is_none() {
            return Err(OpError::MissingNode { node_id: endpoint.clone() });
        }
    }

    canvas.edges_mut().insert(edge_id.clone(), edge);
    route_edge(canvas, edge_id);
    Ok(())
}

fn remove_edge(canvas: &mut Canvas, edge_id: &EdgeId) -> Result<(), OpError> {
    canvas.edges_mut().remove(edge_id).map(|_| ()).ok_or_else(|| edge_not_found(edge_id))
}

fn reroute_edges_touching(canvas: &mut Canvas, node_ids: &[&NodeId]) {
    let edge_ids = canvas
        .edges()
        .iter()
        .filter(|(_, edge)| node_ids.iter().any(|node_id| edge.touches(node_id)))
        .map(|(edge_id, _)| edge_id.clone())
        .collect::<Vec<_>>();
    for edge_id in &edge_ids {
        route_edge(canvas, edge_id);
    }
}

/// Recomputes the points of `edge_id` from the current footprints of its endpoint nodes.
fn route_edge(canvas: &mut Canvas, edge_id: &EdgeId) {
    let Some(edge) = canvas.edge(edge_id) else {
        return;
    };
    let from = canvas.node(edge.from_node_id()).map(Node::rect);
    let to = canvas.node(edge.to_node_id()).map(Node::rect);
    let points = match (from, to) {
        (Some(from), Some(to)) => ElbowRouter::with_grid(canvas.grid()).route_between(&from, &to),
        _ => Vec::new(),
    };
    if let Some(edge) = canvas.edges_mut().get_mut(edge_id) {
        edge.set_points(points);
    }
}
