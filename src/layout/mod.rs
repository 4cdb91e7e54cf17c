// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Elbow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Elbow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Elbow connector routing.
//!
//! Routing runs in stages: derive missing endpoint footprints, search the grid for the
//! shortest/straightest orthogonal route, then simplify and balance the result.

pub mod elbow;
pub mod obstacle;
pub mod planner;
pub mod postprocess;
pub mod svg;

pub use elbow::{
    create_elbow_connector, direct_elbow, facing_anchors, ElbowRouter, RouterConfig,
};
pub use obstacle::synthesize_footprint;
pub use planner::{find_path, GridPoint};
pub use postprocess::{balance, simplify};
pub use svg::svg_path_data;
