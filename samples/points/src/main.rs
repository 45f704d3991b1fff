//! Points sample application entry point.
//!
//! Usage:
//!   points --point 1.0,2.0 --label origin --shift 0.5

use anyhow::ensure;
use clap::Parser;
use points::walk::walk;
use points::{Marker, Point};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "points")]
#[command(about = "Walks a labelled point through composed accessors")]
struct Cli {
    /// Point as `x,y` (flat) or `x,y,z` (solid)
    #[arg(long, default_value = "1.0,2.0")]
    point: Point,

    /// Marker label
    #[arg(long, default_value = "origin")]
    label: String,

    /// Distance to move the marker along the x axis
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    shift: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,points=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    ensure!(cli.shift.is_finite(), "--shift must be a finite number, got {}", cli.shift);

    let marker = Marker::new(cli.label, cli.point);
    tracing::info!(?marker, "starting walk");

    let walk = walk(&marker, cli.shift);

    match walk.flat {
        Some(point) => tracing::info!(x = point.x, y = point.y, "marker is flat"),
        None => tracing::info!("marker is not flat"),
    }
    match walk.solid {
        Some(point) => tracing::info!(x = point.x, y = point.y, z = point.z, "marker is solid"),
        None => tracing::info!("marker is not solid"),
    }
    tracing::info!(marker = ?walk.shifted, "after shift");
    tracing::info!(marker = ?walk.raised, "after raise");

    Ok(())
}
