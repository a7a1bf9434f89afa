//! Price conversion and display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::currency::Currency;
use crate::rate::{ExchangeRate, RateReader};

/// Largest amount that still renders with two fractional digits.
const MAX_AMOUNT: Decimal = Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, false, 2);

/// Convert a USD price into `currency`.
pub fn convert(price: Decimal, currency: Currency, rate: ExchangeRate) -> Decimal {
    if currency.is_usd() {
        price
    } else {
        price.checked_mul(rate.as_decimal()).unwrap_or(Decimal::MAX)
    }
}

/// Convert, round half away from zero and render with exactly two decimals.
///
/// Input contract: `price` is non-negative (the catalog never yields
/// negative prices).
pub fn format(price: Decimal, currency: Currency, rate: ExchangeRate) -> String {
    let mut amount = convert(price, currency, rate)
        .min(MAX_AMOUNT)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    amount.rescale(2);
    format!("{}{}", currency.prefix(), amount)
}

/// Formatter bound to the live rate store and the shopper's currency.
#[derive(Debug, Clone)]
pub struct PriceFormatter {
    rates: RateReader,
    currency: Currency,
}

impl PriceFormatter {
    pub fn new(rates: RateReader, currency: Currency) -> Self {
        Self { rates, currency }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    pub fn convert(&self, price: Decimal) -> Decimal {
        convert(price, self.currency, self.rates.current())
    }

    pub fn format(&self, price: Decimal) -> String {
        format(price, self.currency, self.rates.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate::rate_store;
    use core::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn usd_is_never_converted() {
        let rate = ExchangeRate::from_f64(32.5).unwrap();
        assert_eq!(convert(dec("19.99"), Currency::Usd, rate), dec("19.99"));
    }

    #[test]
    fn other_currencies_multiply_by_rate() {
        let rate = ExchangeRate::from_decimal(dec("32.5")).unwrap();
        assert_eq!(convert(dec("2"), Currency::Try, rate), dec("65.0"));
    }

    #[test]
    fn formats_whole_numbers_with_two_decimals() {
        assert_eq!(format(dec("9"), Currency::Usd, ExchangeRate::IDENTITY), "$9.00");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format(dec("1.005"), Currency::Usd, ExchangeRate::IDENTITY), "$1.01");
        assert_eq!(format(dec("1.004"), Currency::Usd, ExchangeRate::IDENTITY), "$1.00");
    }

    #[test]
    fn non_usd_uses_local_prefix() {
        let rate = ExchangeRate::from_decimal(dec("0.9")).unwrap();
        assert_eq!(format(dec("10"), Currency::Eur, rate), "€9.00");
        assert_eq!(format(dec("0"), Currency::Try, rate), "₺0.00");
    }

    #[test]
    fn overflowing_conversion_keeps_two_decimals() {
        let rate = ExchangeRate::from_decimal(dec("2")).unwrap();
        let out = format(Decimal::MAX, Currency::Eur, rate);
        assert_eq!(out, format!("€{MAX_AMOUNT}"));
        assert_eq!(out.split('.').nth(1).map(str::len), Some(2));
    }

    #[test]
    fn price_formatter_tracks_published_rate() {
        let (publisher, reader) = rate_store();
        let formatter = PriceFormatter::new(reader, Currency::Try);

        assert_eq!(formatter.format(dec("10")), "₺10.00");

        publisher.publish(ExchangeRate::from_decimal(dec("33.1")).unwrap());
        assert_eq!(formatter.format(dec("10")), "₺331.00");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: output always carries exactly two fractional digits.
            #[test]
            fn always_two_decimals(cents in 0i64..10_000_000_000, scale in 0u32..6, rate in 0.01f64..1000.0) {
                let price = Decimal::new(cents, scale);
                let rate = ExchangeRate::from_f64(rate).unwrap();
                for currency in Currency::ALL {
                    let out = format(price, currency, rate);
                    let body = out.strip_prefix(currency.prefix()).unwrap();
                    let (_, frac) = body.split_once('.').unwrap();
                    prop_assert_eq!(frac.len(), 2);
                }
            }

            /// Property: USD conversion is the identity; others scale by the rate.
            #[test]
            fn convert_matches_definition(cents in 0i64..1_000_000_000, rate in 0.01f64..1000.0) {
                let price = Decimal::new(cents, 2);
                let rate = ExchangeRate::from_f64(rate).unwrap();
                prop_assert_eq!(convert(price, Currency::Usd, rate), price);
                prop_assert_eq!(convert(price, Currency::Eur, rate), price * rate.as_decimal());
            }
        }
    }
}
