use rust_decimal::{Decimal, RoundingStrategy};

/// Fraction digits used when amounts and percentages leave the service
pub const DISPLAY_SCALE: u32 = 2;

/// Convert a stored percentage (e.g. `23` for 23%) into a ratio (`0.23`)
///
/// A missing rate counts as zero. Values outside 0-100 are converted as-is.
pub fn percent_to_ratio(percent: Option<Decimal>) -> Decimal {
    match percent {
        Some(p) => p / Decimal::ONE_HUNDRED,
        None => Decimal::ZERO,
    }
}

/// Round half away from zero to the display scale
pub fn round_for_display(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_SCALE);
    rounded
}

/// Decimal string with exactly two fraction digits, e.g. `"900.00"`
pub fn format_amount(amount: Decimal) -> String {
    round_for_display(amount).to_string()
}
