/// Backend quota units per display-currency unit.
pub const QUOTA_PER_UNIT: f64 = 500_000.0;

/// Render a raw quota amount as currency.
pub fn format_quota(quota: i64) -> String {
    format!("${:.2}", quota as f64 / QUOTA_PER_UNIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quota() {
        assert_eq!(format_quota(0), "$0.00");
        assert_eq!(format_quota(500_000), "$1.00");
        assert_eq!(format_quota(1_250_000), "$2.50");
        assert_eq!(format_quota(1234), "$0.00");
    }
}
