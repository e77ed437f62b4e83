/// Change calculator for cash payment.
///
/// Pure arithmetic over the order total and whatever the operator typed into
/// the amount box. Nothing here ever rejects input: an amount that does not
/// parse counts as zero, and insufficient cash is reported as a negative
/// change amount for the view to color, not an error.

/// Outcome of a change calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Change {
    /// Cash received, after coercing unparsable input to zero
    pub received: f64,
    /// `received - total`; negative when the cash does not cover the bill
    pub change: f64,
    /// Whether the received amount covers the total. Display-only.
    pub sufficient: bool,
}

/// Parse the cash-received text box. Blank or unparsable input is zero.
pub fn parse_received(input: &str) -> f64 {
    input.trim().parse().unwrap_or(0.0)
}

/// Compute the change due on `total` given the raw cash-received text
pub fn compute_change(total: f64, cash_received: &str) -> Change {
    let received = parse_received(cash_received);

    Change {
        received,
        change: received - total,
        sufficient: received >= total,
    }
}
