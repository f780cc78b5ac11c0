use super::entities::Extra;

/// Storefront settings. Compiled in; there is no config file or env override.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreConfig {
    pub brand: &'static str,
    /// Prefix printed in front of every amount.
    pub currency_label: &'static str,
    /// Tax and fees on the subtotal, in basis points (1200 = 12%).
    pub tax_rate_bps: i64,
    /// Optional extras with their price per rental day.
    pub extras: [(Extra, i64); 4],
    pub support_phone: &'static str,
    pub support_email: &'static str,
    pub address: &'static str,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            brand: "DriveEasy",
            currency_label: "Rs.",
            tax_rate_bps: 1200,
            extras: [
                (Extra::GpsNavigation, 5),
                (Extra::ChildSeat, 8),
                (Extra::AdditionalDriver, 10),
                (Extra::FullInsurance, 15),
            ],
            support_phone: "+1 (555) 123-4567",
            support_email: "support@driveeasy.com",
            address: "123 Main Street, Cuddalore, Tamil Nadu 607003",
        }
    }
}

impl StoreConfig {
    /// Per-day price of an optional extra; extras missing from the table are free.
    pub fn extra_price_per_day(&self, extra: Extra) -> i64 {
        self.extras
            .iter()
            .find(|(candidate, _)| *candidate == extra)
            .map_or(0, |(_, price)| *price)
    }

    pub fn format_amount(&self, amount: i64) -> String {
        format!("{}{amount}", self.currency_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_extras_prices() {
        let config = StoreConfig::default();
        let prices = Extra::ALL.map(|extra| config.extra_price_per_day(extra));
        assert_eq!(prices, [5, 8, 10, 15]);
    }

    #[test]
    fn extras_prices_come_from_the_table() {
        let mut config = StoreConfig::default();
        config.extras[1] = (Extra::ChildSeat, 12);
        assert_eq!(config.extra_price_per_day(Extra::ChildSeat), 12);
        assert_eq!(config.extra_price_per_day(Extra::GpsNavigation), 5);
    }

    #[test]
    fn amounts_carry_currency_label() {
        assert_eq!(StoreConfig::default().format_amount(336), "Rs.336");
    }
}
