// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Elbow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Elbow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Elbow CLI entrypoint.
//!
//! Routes a single connector and prints it as JSON points or as SVG path data.
//! Set `RUST_LOG=debug` (or `trace`) to see what the planner is doing.

use std::error::Error;

use elbow::{svg_path_data, ElbowRouter, Point, Rect, RouterConfig};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} route <x1,y1> <x2,y2> [--from-box x,y,w,h] [--to-box x,y,w,h] [--grid <size>] [--config <file.json>] [--svg]\n\nPrints the routed points as JSON, or SVG path data with --svg.\n--grid overrides the grid size from --config (default 10)."
    );
}

#[derive(Debug, Default, Clone, PartialEq)]
struct CliOptions {
    from: Option<Point>,
    to: Option<Point>,
    from_box: Option<Rect>,
    to_box: Option<Rect>,
    grid: Option<f64>,
    config_path: Option<String>,
    svg: bool,
}

fn parse_numbers<const N: usize>(raw: &str) -> Result<[f64; N], ()> {
    let mut out = [0.0; N];
    let mut parts = raw.split(',');
    for slot in &mut out {
        let value: f64 = parts.next().ok_or(())?.trim().parse().map_err(|_| ())?;
        if !value.is_finite() {
            return Err(());
        }
        *slot = value;
    }
    if parts.next().is_some() {
        return Err(());
    }
    Ok(out)
}

fn parse_point(raw: &str) -> Result<Point, ()> {
    let [x, y] = parse_numbers::<2>(raw)?;
    Ok(Point::new(x, y))
}

fn parse_rect(raw: &str) -> Result<Rect, ()> {
    let [x, y, w, h] = parse_numbers::<4>(raw)?;
    Ok(Rect::new(x, y, w, h))
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    if args.next().as_deref() != Some("route") {
        return Err(());
    }

    let mut options = CliOptions::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--from-box" => {
                if options.from_box.is_some() {
                    return Err(());
                }
                options.from_box = Some(parse_rect(&args.next().ok_or(())?)?);
            }
            "--to-box" => {
                if options.to_box.is_some() {
                    return Err(());
                }
                options.to_box = Some(parse_rect(&args.next().ok_or(())?)?);
            }
            "--grid" => {
                if options.grid.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let size: f64 = raw.parse().map_err(|_| ())?;
                if !size.is_finite() || size <= 0.0 {
                    return Err(());
                }
                options.grid = Some(size);
            }
            "--config" => {
                if options.config_path.is_some() {
                    return Err(());
                }
                options.config_path = Some(args.next().ok_or(())?);
            }
            "--svg" => {
                if options.svg {
                    return Err(());
                }
                options.svg = true;
            }
            _ if arg.starts_with("--") => return Err(()),
            _ => {
                let point = parse_point(&arg)?;
                if options.from.is_none() {
                    options.from = Some(point);
                } else if options.to.is_none() {
                    options.to = Some(point);
                } else {
                    return Err(());
                }
            }
        }
    }

    if options.from.is_none() || options.to.is_none() {
        return Err(());
    }
    Ok(options)
}

fn load_config(options: &CliOptions) -> Result<RouterConfig, Box<dyn Error>> {
    let mut config = match &options.config_path {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => RouterConfig::default(),
    };
    if let Some(grid) = options.grid {
        config.grid_size = grid;
    }
    Ok(config)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "elbow".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };
        let (Some(from), Some(to)) = (options.from, options.to) else {
            print_usage(&program);
            std::process::exit(2);
        };

        let router = ElbowRouter::new(load_config(&options)?);
        let points = router.route(from, to, options.from_box, options.to_box);

        if options.svg {
            println!("{}", svg_path_data(&points));
        } else {
            println!("{}", serde_json::to_string(&points)?);
        }
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
