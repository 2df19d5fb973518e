/// Rounds `x` to `decimals` places, halves away from zero.
#[inline]
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = libm::pow(10.0, decimals as f64);
    libm::round(x * scale) / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(342.93750049, 6), 342.9375);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(12.0, 6), 12.0);
    }
}
