//! Human-readable byte quantities.
//!
//! Decimal (SI) formatting: `1 Byte`, `999 Bytes`, then one decimal
//! place once a prefix kicks in (`1.0 kB`, `40.0 kB`, `2.5 MB`).

/// Decimal unit prefixes, in ascending order.
const UNITS: [&str; 8] = ["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count as a human-readable decimal quantity.
pub fn human_bytes(bytes: usize) -> String {
    if bytes == 1 {
        return "1 Byte".to_string();
    }
    if bytes < 1000 {
        return format!("{} Bytes", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = UNITS[0];
    for u in UNITS {
        value /= 1000.0;
        unit = u;
        if value < 1000.0 {
            break;
        }
    }
    format!("{:.1} {}", value, unit)
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    /// (unit rank, displayed value) — ordering these pairs orders the
    /// quantities the strings describe.
    fn displayed(s: &str) -> (usize, f64) {
        let (value, unit) = s.split_once(' ').unwrap();
        let rank = match unit {
            "Byte" | "Bytes" => 0,
            other => 1 + UNITS.iter().position(|u| *u == other).unwrap(),
        };
        (rank, value.parse().unwrap())
    }

    proptest! {
        #[test]
        fn formatting_is_monotone(
            a in 0usize..=10_usize.pow(16),
            b in 0usize..=10_usize.pow(16),
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let (lo_rank, lo_value) = displayed(&human_bytes(lo));
            let (hi_rank, hi_value) = displayed(&human_bytes(hi));
            prop_assert!(
                lo_rank < hi_rank || (lo_rank == hi_rank && lo_value <= hi_value),
                "{} -> {:?} but {} -> {:?}",
                lo,
                human_bytes(lo),
                hi,
                human_bytes(hi)
            );
        }
    }
}
