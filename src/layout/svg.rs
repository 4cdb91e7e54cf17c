// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Elbow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Elbow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use crate::model::Point;

/// Renders a polyline as SVG path data (`M x y L x y ...`). Empty input yields an empty string.
pub fn svg_path_data(points: &[Point]) -> String {
    let mut out = String::new();
    for (idx, p) in points.iter().enumerate() {
        let command = if idx == 0 { 'M' } else { 'L' };
        if idx > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{command} {} {}", p.x, p.y);
    }
    out
}
