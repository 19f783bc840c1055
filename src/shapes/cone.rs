//! Cones and truncated cones, worked from the tip down to the base.

use super::{non_negative_length, parse_args, positive_length};
use crate::Result;
use crate::commands::{GlobalOptions, Host, RuntimeContext};
use crate::pattern::{Pattern, Shaping, Start, rows_for, smooth, write_pattern};
use clap::Parser;
use core::f64::consts::PI;
use ohno::bail;

const LOG_TARGET: &str = "    cone";

#[derive(Parser, Debug)]
#[command(name = "cone", about = "Generate a pattern for a cone", allow_negative_numbers = true)]
struct ConeArgs {
    /// Height of the cone, in stitches
    #[arg(short = 'H', long, value_parser = positive_length)]
    height: f64,

    /// Radius of the base, in stitches
    #[arg(short, long, value_parser = positive_length)]
    radius: f64,

    /// Radius of the top, in stitches, for a truncated cone
    #[arg(short, long, default_value_t = 0.0, value_parser = non_negative_length)]
    top_radius: f64,

    /// Close the base with a flat disc
    #[arg(short, long)]
    closed: bool,
}

/// The dimensions of a cone
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cone {
    height: f64,
    radius: f64,
    top_radius: f64,
    closed: bool,
}

impl Cone {
    /// Stitch count of each round, tip first, before smoothing
    fn row_counts(&self, shaping: Shaping) -> Vec<u32> {
        let flare = self.radius - self.top_radius;
        let rows = rows_for(self.height.hypot(flare), 1);

        let mut counts: Vec<u32> = (1..=rows)
            .map(|row| {
                let radius = self.top_radius + flare * (f64::from(row) - 0.5) / f64::from(rows);
                log::debug!(target: LOG_TARGET, "Round {row}: radius {radius:.2}");
                shaping.stitches(2.0 * PI * radius)
            })
            .collect();

        if self.closed {
            let base_rows = rows_for(self.radius, 1) - 1;
            counts.extend((1..=base_rows).map(|row| {
                let radius = self.radius - f64::from(row);
                log::debug!(target: LOG_TARGET, "Base round {row}: radius {radius:.2}");
                shaping.stitches(2.0 * PI * radius)
            }));
        }

        counts
    }

    const fn start(&self) -> Start {
        if self.top_radius > 0.0 { Start::ChainRing } else { Start::MagicRing }
    }
}

pub fn main<H: Host>(host: &mut H, ctx: &RuntimeContext<'_>, args: &[String], options: &GlobalOptions) -> Result<()> {
    let Some(args) = parse_args::<ConeArgs, H>(host, ctx.translator(), "cone", args)? else {
        return Ok(());
    };

    let tr = ctx.translator();
    if args.top_radius >= args.radius {
        bail!(
            "{}",
            tr.format(
                "the top radius ({top}) must be smaller than the base radius ({base})",
                &[("top", &args.top_radius), ("base", &args.radius)]
            )
        );
    }

    let cone = Cone {
        height: args.height,
        radius: args.radius,
        top_radius: args.top_radius,
        closed: args.closed,
    };
    log::info!(target: LOG_TARGET, "{cone:?}");

    let mut counts = cone.row_counts(Shaping::from_options(options));
    let adjusted = smooth(&mut counts);
    if adjusted > 0 {
        log::debug!(target: LOG_TARGET, "Limited the shaping of {adjusted} rounds");
    }
    log::info!(target: LOG_TARGET, "{} rounds", counts.len());

    let title = if cone.top_radius > 0.0 {
        tr.format(
            "Truncated cone (height {height}, base radius {base}, top radius {top})",
            &[("height", &cone.height), ("base", &cone.radius), ("top", &cone.top_radius)],
        )
    } else {
        tr.format(
            "Cone (height {height}, base radius {base})",
            &[("height", &cone.height), ("base", &cone.radius)],
        )
    };

    let pattern = Pattern::new(title, cone.start(), counts, tr.tr("Fasten off.").to_string());
    write_pattern(host, ctx, options, &pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::TestHost;
    use crate::i18n::Translator;
    use log::LevelFilter;

    fn cone(height: f64, radius: f64, top_radius: f64, closed: bool) -> Cone {
        Cone {
            height,
            radius,
            top_radius,
            closed,
        }
    }

    fn run_cone(args: &[&str]) -> Result<String> {
        let translator = Translator::identity();
        let ctx = RuntimeContext::new(&translator, LevelFilter::Warn);
        let mut host = TestHost::new();
        let args: Vec<String> = args.iter().map(ToString::to_string).collect();

        main(&mut host, &ctx, &args, &GlobalOptions::default())?;
        Ok(host.output_str())
    }

    #[test]
    fn test_even_counts() {
        assert_eq!(cone(6.0, 3.0, 0.0, false).row_counts(Shaping::Even), [6, 6, 6, 12, 12, 12, 18]);
    }

    #[test]
    fn test_closed_base() {
        assert_eq!(
            cone(6.0, 3.0, 0.0, true).row_counts(Shaping::Even),
            [6, 6, 6, 12, 12, 12, 18, 12, 6]
        );

        // a base narrower than a stitch adds no rounds
        assert_eq!(cone(2.0, 0.4, 0.0, true).row_counts(Shaping::Even), [6, 6]);
    }

    #[test]
    fn test_counts_never_shrink_along_the_side() {
        let counts = cone(10.0, 5.0, 1.0, false).row_counts(Shaping::Accurate);
        for pair in counts.windows(2) {
            assert!(pair[0] <= pair[1], "{counts:?}");
        }
    }

    #[test]
    fn test_start() {
        assert_eq!(cone(4.0, 2.0, 0.0, false).start(), Start::MagicRing);
        assert_eq!(cone(4.0, 2.0, 1.0, false).start(), Start::ChainRing);
    }

    #[test]
    fn test_smoothed_counts_are_workable() {
        let mut counts = cone(6.0, 3.0, 0.0, true).row_counts(Shaping::Accurate);
        let _ = smooth(&mut counts);
        for pair in counts.windows(2) {
            assert!(pair[1] <= pair[0] * 2 && pair[0] <= pair[1] * 2, "{counts:?}");
        }
    }

    #[test]
    fn test_narrative() {
        let text = run_cone(&["-H", "6", "-r", "3"]).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Cone (height 6, base radius 3)");
        assert_eq!(lines[1], "7 rows");
        assert_eq!(lines[3], "Row 1 (6 stitches): 6 sc into a magic ring");
        assert_eq!(lines[6], "Row 4 (12 stitches): (inc) x 6");
        assert_eq!(lines.last(), Some(&"Fasten off."));
    }

    #[test]
    fn test_truncated_narrative() {
        let text = run_cone(&["--height", "3", "--radius", "4", "--top-radius", "2"]).unwrap();
        assert!(text.starts_with("Truncated cone (height 3, base radius 4, top radius 2)"), "pattern was: {text}");
        assert!(text.contains("join into a ring"), "pattern was: {text}");
    }

    #[test]
    fn test_top_must_be_smaller_than_base() {
        let message = run_cone(&["-H", "5", "-r", "2", "-t", "2"]).unwrap_err().to_string();
        assert!(message.contains("must be smaller than the base radius"), "error was: {message}");

        assert!(run_cone(&["-H", "5", "-r", "2", "-t", "-1"]).is_err());
        assert!(run_cone(&["-r", "2"]).is_err());
        assert!(run_cone(&["-H", "1", "-r", "1e9", "-t", "999999999"]).is_err());
    }
}
