//! Donuts (tori), worked as a tube starting and ending at the inner equator.

use super::{parse_args, positive_length};
use crate::Result;
use crate::commands::{GlobalOptions, Host, RuntimeContext};
use crate::pattern::{Pattern, Shaping, Start, rows_for, smooth, write_pattern};
use clap::Parser;
use core::f64::consts::{PI, TAU};
use ohno::bail;

const LOG_TARGET: &str = "   donut";

#[derive(Parser, Debug)]
#[command(name = "donut", about = "Generate a pattern for a donut", allow_negative_numbers = true)]
struct DonutArgs {
    /// Distance from the center of the donut to the center of the tube, in stitches
    #[arg(short = 'R', long, value_parser = positive_length)]
    ring_radius: f64,

    /// Radius of the tube, in stitches
    #[arg(short = 'r', long, value_parser = positive_length)]
    tube_radius: f64,
}

pub fn main<H: Host>(host: &mut H, ctx: &RuntimeContext<'_>, args: &[String], options: &GlobalOptions) -> Result<()> {
    let Some(args) = parse_args::<DonutArgs, H>(host, ctx.translator(), "donut", args)? else {
        return Ok(());
    };

    let tr = ctx.translator();
    if args.ring_radius <= args.tube_radius {
        bail!(
            "{}",
            tr.format(
                "the ring radius ({ring}) must be larger than the tube radius ({tube})",
                &[("ring", &args.ring_radius), ("tube", &args.tube_radius)]
            )
        );
    }

    log::info!(target: LOG_TARGET, "Donut with ring radius {} and tube radius {}", args.ring_radius, args.tube_radius);

    let mut counts = row_counts(args.ring_radius, args.tube_radius, Shaping::from_options(options));
    let adjusted = smooth(&mut counts);
    if adjusted > 0 {
        log::debug!(target: LOG_TARGET, "Limited the shaping of {adjusted} rounds");
    }
    log::info!(target: LOG_TARGET, "{} rounds", counts.len());

    let pattern = Pattern::new(
        tr.format(
            "Donut (ring radius {ring}, tube radius {tube})",
            &[("ring", &args.ring_radius), ("tube", &args.tube_radius)],
        ),
        Start::ChainRing,
        counts,
        tr.tr("Sew the last round to the first, stuffing as you go.").to_string(),
    );

    write_pattern(host, ctx, options, &pattern)
}

/// Stitch count of each round around the tube, starting at the inner equator, before smoothing
fn row_counts(ring_radius: f64, tube_radius: f64, shaping: Shaping) -> Vec<u32> {
    let rows = rows_for(TAU * tube_radius, 3);

    (0..rows)
        .map(|row| {
            // the tube is symmetric about the outer equator
            let from_inside = row.min(rows - 1 - row);
            let angle = TAU * (f64::from(from_inside) + 0.5) / f64::from(rows);
            let radius = tube_radius.mul_add(-angle.cos(), ring_radius);
            log::debug!(target: LOG_TARGET, "Round {}: {:.0} degrees, radius {radius:.2}", row + 1, angle.to_degrees());
            shaping.stitches(2.0 * PI * radius)
        })
        .collect()
}
