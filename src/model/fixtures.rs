// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Elbow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Elbow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::canvas::{Canvas, Edge, Node, Size};
use super::geom::Point;
use super::ids::{EdgeId, NodeId};

pub(crate) fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

pub(crate) fn eid(value: &str) -> EdgeId {
    EdgeId::new(value).expect("edge id")
}

/// Two 120x60 nodes placed diagonally with one edge `e:ab` between them (not yet routed).
pub(crate) fn canvas_two_nodes() -> Canvas {
    let mut canvas = Canvas::default();
    canvas
        .nodes_mut()
        .insert(nid("n:a"), Node::new(Point::new(40.0, 40.0), Size::new(120.0, 60.0)).with_label("A"));
    canvas.nodes_mut().insert(
        nid("n:b"),
        Node::new(Point::new(240.0, 300.0), Size::new(120.0, 60.0)).with_label("B"),
    );
    canvas.edges_mut().insert(eid("e:ab"), Edge::new(nid("n:a"), nid("n:b")));
    canvas
}

/// Three nodes in a row with edges `e:ab` and `e:bc`.
pub(crate) fn canvas_chain() -> Canvas {
    let mut canvas = Canvas::default();
    for (id, x) in [("n:a", 0.0), ("n:b", 200.0), ("n:c", 400.0)] {
        canvas.nodes_mut().insert(nid(id), Node::new(Point::new(x, 0.0), Size::new(100.0, 60.0)));
    }
    canvas.edges_mut().insert(eid("e:ab"), Edge::new(nid("n:a"), nid("n:b")));
    canvas.edges_mut().insert(eid("e:bc"), Edge::new(nid("n:b"), nid("n:c")));
    canvas
}
