/// Round a monetary amount to cent precision.
///
/// Half-away-from-zero (`f64::round` semantics). Every balance-affecting
/// computation in this crate goes through this one primitive so the allocator
/// and the mutators can never disagree on cent boundaries.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
