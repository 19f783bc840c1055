use super::{Pattern, Repeat, Start, Stitch, row_instruction};
use crate::Result;
use crate::commands::{GlobalOptions, Host, RuntimeContext};
use crate::i18n::Translator;
use ohno::IntoAppError;
use std::io::Write;

/// Write `pattern` to the host's output, as instructions or as bare row counts
pub fn write_pattern<H: Host>(host: &mut H, ctx: &RuntimeContext<'_>, options: &GlobalOptions, pattern: &Pattern) -> Result<()> {
    let mut out = host.output();

    if options.inhuman {
        for count in pattern.rows() {
            writeln!(out, "{count}").into_app_err("unable to write the pattern")?;
        }
        return Ok(());
    }

    let tr = ctx.translator();
    let row_total = pattern.rows().len();

    writeln!(out, "{}", pattern.title()).into_app_err("unable to write the pattern")?;
    writeln!(
        out,
        "{}",
        tr.format_n("{rows} row", "{rows} rows", row_total as u64, &[("rows", &row_total)])
    )
    .into_app_err("unable to write the pattern")?;
    writeln!(out).into_app_err("unable to write the pattern")?;

    let mut prev: Option<u32> = None;
    for (index, &count) in pattern.rows().iter().enumerate() {
        let instruction = match prev {
            None => describe_start(tr, pattern.start(), count),
            Some(p) => describe_row(tr, &row_instruction(p, count)),
        };

        let line = tr.format_n(
            "Row {row} ({count} stitch): {instruction}",
            "Row {row} ({count} stitches): {instruction}",
            u64::from(count),
            &[("row", &(index + 1)), ("count", &count), ("instruction", &instruction)],
        );
        writeln!(out, "{line}").into_app_err("unable to write the pattern")?;

        prev = Some(count);
    }

    writeln!(out).into_app_err("unable to write the pattern")?;
    writeln!(out, "{}", pattern.finish()).into_app_err("unable to write the pattern")?;
    Ok(())
}

fn describe_start(tr: &Translator, start: Start, count: u32) -> String {
    match start {
        Start::MagicRing => tr.format("{count} sc into a magic ring", &[("count", &count)]),
        Start::ChainRing => tr.format(
            "chain {count} and join into a ring, then sc in each chain",
            &[("count", &count)],
        ),
    }
}

/// Human-readable instructions for one round, such as `(sc 2, inc) x 6`
#[must_use]
pub fn describe_row(tr: &Translator, repeats: &[Repeat]) -> String {
    repeats
        .iter()
        .map(|repeat| {
            let mut parts = Vec::with_capacity(2);
            if repeat.plain > 0 {
                parts.push(tr.format("sc {count}", &[("count", &repeat.plain)]));
            }
            match repeat.shaping {
                Some(Stitch::Increase) => parts.push(tr.tr("inc").to_string()),
                Some(Stitch::Decrease) => parts.push(tr.tr("dec").to_string()),
                None => {}
            }

            let body = parts.join(", ");
            if repeat.times > 1 {
                format!("({body}) x {}", repeat.times)
            } else {
                body
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
