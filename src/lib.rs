// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Elbow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Elbow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Elbow: orthogonal connector routing on a snapping grid, plus an undoable canvas editor.
//!
//! The router ([`layout`]) turns two endpoints and their optional boxes into an axis-aligned
//! polyline. The editor ([`editor`]) keeps a canvas of nodes and edges whose routes follow the
//! nodes through every undoable [`ops::CanvasOp`].

pub mod editor;
pub mod layout;
pub mod model;
pub mod ops;

pub use editor::Editor;
pub use layout::{create_elbow_connector, svg_path_data, ElbowRouter, RouterConfig};
pub use model::{boxes_overlap, snap_point_to_grid, snap_to_grid, Point, Rect, GRID_SIZE};
pub use ops::{CanvasOp, History, OpError, Reversible};
