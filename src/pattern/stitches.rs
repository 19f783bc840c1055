/// A shaping stitch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stitch {
    /// Two single crochets worked into one stitch
    Increase,

    /// One single crochet worked across two stitches
    Decrease,
}

/// `plain` single crochets followed by an optional shaping stitch, worked `times` times in a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repeat {
    pub plain: u32,
    pub shaping: Option<Stitch>,
    pub times: u32,
}

impl Repeat {
    const fn once(plain: u32, shaping: Option<Stitch>) -> Self {
        Self { plain, shaping, times: 1 }
    }

    /// Stitches consumed from the previous round
    #[must_use]
    pub const fn worked(&self) -> u32 {
        let shaping = match self.shaping {
            None => 0,
            Some(Stitch::Increase) => 1,
            Some(Stitch::Decrease) => 2,
        };
        (self.plain + shaping) * self.times
    }

    /// Stitches produced for the new round
    #[must_use]
    pub const fn made(&self) -> u32 {
        let shaping = match self.shaping {
            None => 0,
            Some(Stitch::Increase) => 2,
            Some(Stitch::Decrease) => 1,
        };
        (self.plain + shaping) * self.times
    }
}

/// The stitches that turn a round of `prev` stitches into one of `next` stitches.
///
/// Increases and decreases are spread as evenly as possible around the round. The change must be
/// workable: `next` is at most twice and at least half of `prev`.
#[must_use]
pub fn row_instruction(prev: u32, next: u32) -> Vec<Repeat> {
    debug_assert!(
        u64::from(next) <= u64::from(prev) * 2 && u64::from(prev) <= u64::from(next) * 2,
        "cannot work {next} stitches from {prev}"
    );

    let (units, special, stitch) = match next.cmp(&prev) {
        core::cmp::Ordering::Equal => return vec![Repeat::once(prev, None)],
        core::cmp::Ordering::Greater => (prev, next - prev, Stitch::Increase),
        core::cmp::Ordering::Less => (next, prev - next, Stitch::Decrease),
    };
    let special = special.min(units);

    let mut repeats = Vec::new();
    let mut plain = 0;

    for i in 0..units {
        let before = u64::from(i) * u64::from(special) / u64::from(units);
        let after = (u64::from(i) + 1) * u64::from(special) / u64::from(units);

        if after > before {
            push(&mut repeats, Repeat::once(plain, Some(stitch)));
            plain = 0;
        } else {
            plain += 1;
        }
    }

    if plain > 0 {
        push(&mut repeats, Repeat::once(plain, None));
    }

    repeats
}

fn push(repeats: &mut Vec<Repeat>, repeat: Repeat) {
    if let Some(last) = repeats.last_mut()
        && last.plain == repeat.plain
        && last.shaping == repeat.shaping
    {
        last.times += repeat.times;
    } else {
        repeats.push(repeat);
    }
}
