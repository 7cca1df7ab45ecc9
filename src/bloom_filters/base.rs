use std::f64::consts::LN_2;

/// Membership operations shared by the filters in this crate.
///
/// Mutation takes `&mut self`; sharing a filter between threads that add keys
/// needs external synchronization.
pub trait Filter {
    fn add(&mut self, key: &[u8]);
    fn contains(&self, key: &[u8]) -> bool;
    /// Number of completed `add` calls, duplicates included.
    fn count(&self) -> usize;
    /// Number of addressable bits.
    fn size(&self) -> usize;
}

/// m = -(n lnε/(ln2)^2) where ε is desired false positive probability,
/// in our case it is indicated by the letter f
pub fn calculate_m(f: f64, n: usize) -> usize {
    (-(n as f64) * f.ln() / LN_2.powi(2)).ceil() as usize
}

/// k = m/n * ln2
pub fn calculate_k(m: usize, n: usize) -> usize {
    ((m as f64 / n as f64) * LN_2).ceil().max(1.0) as usize
}

/// FPR = (1 - e^(-kn/m))^k
pub fn estimate_false_positive_rate(m: usize, n: usize, k: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let exponent = -(k as f64) * n as f64 / m as f64;
    (1.0 - exponent.exp()).powi(k as i32)
}
