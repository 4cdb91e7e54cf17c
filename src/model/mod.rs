// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Elbow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Elbow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: grid geometry plus the canvas of nodes and edges.

pub mod canvas;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod geom;
pub mod ids;

pub use canvas::{Canvas, Edge, Node, Size};
pub use geom::{
    box_from_points, boxes_overlap, point_in_any_box, point_in_box, snap_point_to_grid,
    snap_to_grid, Grid, Point, Rect, GRID_SIZE,
};
pub use ids::{EdgeId, EdgeIdTag, Id, IdError, NodeId, NodeIdTag};
