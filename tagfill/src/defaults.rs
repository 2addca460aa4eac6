//! The `default` rule set: literal defaults read from `#[fill(default = "...")]`.

use std::time::Duration;

use crate::filler::Filler;
use crate::rules::{composite, scalar};
use crate::template::{self, Clock};
use crate::types::Kind;

/// Annotation key read by the defaults filler.
pub const DEFAULT_TAG: &str = "default";

/// Defaults filler using the local wall clock for `{{date:..}}` and `{{time:..}}`.
pub fn new_default_filler() -> Filler {
    new_default_filler_with_clock(template::system_clock())
}

pub fn new_default_filler_with_clock(clock: Clock) -> Filler {
    Filler::builder(DEFAULT_TAG)
        .by_kind(Kind::Bool, scalar::boolean)
        .by_kinds(Kind::INTEGERS, scalar::int)
        .by_kinds(Kind::UNSIGNED, scalar::uint)
        .by_kinds(Kind::FLOATS, scalar::float)
        .by_kind(Kind::String, move |_, field| scalar::string(field, &clock))
        .by_type::<Duration, _>(scalar::duration)
        .by_kind(Kind::Slice, composite::slice)
        .by_kind(Kind::Struct, composite::structure)
        .by_kind(Kind::Pointer, composite::pointer)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_default_key() {
        let filler = new_default_filler();
        assert_eq!(filler.tag(), DEFAULT_TAG);
    }

    #[derive(crate::Record, Default)]
    struct Timeouts {
        #[fill(default = "1m")]
        read: Duration,
        #[fill(default = "250ms")]
        write: Option<Duration>,
        #[fill(default = "5s")]
        idle: Duration,
    }

    #[test]
    fn durations_parse_go_style_literals() {
        let mut timeouts = Timeouts {
            idle: Duration::from_secs(30),
            ..Default::default()
        };
        new_default_filler().fill(&mut timeouts);
        assert_eq!(timeouts.read, Duration::from_secs(60));
        assert_eq!(timeouts.write, Some(Duration::from_millis(250)));
        assert_eq!(timeouts.idle, Duration::from_secs(30));
    }
}
