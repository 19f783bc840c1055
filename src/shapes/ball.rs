//! Balls, worked from pole to pole.

use super::{parse_args, positive_length};
use crate::Result;
use crate::commands::{GlobalOptions, Host, RuntimeContext};
use crate::pattern::{Pattern, Shaping, Start, rows_for, smooth, write_pattern};
use clap::Parser;
use core::f64::consts::PI;

const LOG_TARGET: &str = "    ball";

#[derive(Parser, Debug)]
#[command(name = "ball", about = "Generate a pattern for a ball", allow_negative_numbers = true)]
struct BallArgs {
    /// Radius of the ball, in stitches
    #[arg(short, long, value_parser = positive_length)]
    radius: f64,
}

pub fn main<H: Host>(host: &mut H, ctx: &RuntimeContext<'_>, args: &[String], options: &GlobalOptions) -> Result<()> {
    let Some(args) = parse_args::<BallArgs, H>(host, ctx.translator(), "ball", args)? else {
        return Ok(());
    };

    log::info!(target: LOG_TARGET, "Ball of radius {}", args.radius);

    let mut counts = row_counts(args.radius, Shaping::from_options(options));
    let adjusted = smooth(&mut counts);
    if adjusted > 0 {
        log::debug!(target: LOG_TARGET, "Limited the shaping of {adjusted} rounds");
    }
    log::info!(target: LOG_TARGET, "{} rounds, {} stitches at the equator", counts.len(), counts.iter().max().unwrap_or(&0));

    let tr = ctx.translator();
    let pattern = Pattern::new(
        tr.format("Ball (radius {radius})", &[("radius", &args.radius)]),
        Start::MagicRing,
        counts,
        tr.tr("Stuff the ball, then decrease the remaining stitches closed and fasten off.")
            .to_string(),
    );

    write_pattern(host, ctx, options, &pattern)
}

/// Stitch count of each round of a ball of `radius`, before smoothing
fn row_counts(radius: f64, shaping: Shaping) -> Vec<u32> {
    let rows = rows_for(PI * radius, 2);

    (1..=rows)
        .map(|row| {
            // rounds mirrored about the equator share their geometry exactly
            let from_pole = row.min(rows + 1 - row);
            let angle = PI * (f64::from(from_pole) - 0.5) / f64::from(rows);
            let circumference = 2.0 * PI * radius * angle.sin();
            log::debug!(target: LOG_TARGET, "Round {row}: circumference {circumference:.2}");
            shaping.stitches(circumference)
        })
        .collect()
}
