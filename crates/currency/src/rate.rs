//! Live exchange-rate state.
//!
//! Single writer, many readers, last value wins. Backed by a
//! `tokio::sync::watch` channel so readers never block the writer and always
//! see the most recent value (no history, no queueing).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use tokio::sync::watch;

use storefront_core::ValueObject;

/// Local currency units per 1 USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeRate(Decimal);

impl ValueObject for ExchangeRate {}

impl Default for ExchangeRate {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ExchangeRate {
    /// Neutral rate used until the feed delivers its first value.
    pub const IDENTITY: ExchangeRate = ExchangeRate(Decimal::ONE);

    /// Accepts finite rates that are strictly positive once held as a `Decimal`.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Decimal::from_f64(value).and_then(Self::from_decimal)
    }

    pub fn from_decimal(value: Decimal) -> Option<Self> {
        (value > Decimal::ZERO).then_some(Self(value))
    }

    /// Parse a raw feed payload. `None` means "ignore, keep the previous rate".
    pub fn parse(payload: &str) -> Option<Self> {
        payload.trim().parse::<f64>().ok().and_then(Self::from_f64)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0.to_f64().unwrap_or(1.0)
    }
}

impl core::fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// The rate plus when it arrived. `received_at` is `None` for the startup default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RateSnapshot {
    pub rate: ExchangeRate,
    pub received_at: Option<DateTime<Utc>>,
}

impl RateSnapshot {
    pub fn is_default(&self) -> bool {
        self.received_at.is_none()
    }
}

/// Create a rate store initialised to [`ExchangeRate::IDENTITY`].
pub fn rate_store() -> (RatePublisher, RateReader) {
    let (tx, rx) = watch::channel(RateSnapshot::default());
    (RatePublisher { tx }, RateReader { rx })
}

/// Write half of the rate store. Owned by the feed listener.
#[derive(Debug)]
pub struct RatePublisher {
    tx: watch::Sender<RateSnapshot>,
}

impl RatePublisher {
    /// Replace the current rate.
    pub fn publish(&self, rate: ExchangeRate) {
        // send_replace updates the value even when no reader is alive yet.
        self.tx.send_replace(RateSnapshot {
            rate,
            received_at: Some(Utc::now()),
        });
        tracing::debug!(%rate, "exchange rate updated");
    }

    /// Parse a feed payload and publish it if numeric.
    ///
    /// Returns `false` when the payload was discarded; the previous rate stays.
    pub fn publish_payload(&self, payload: &str) -> bool {
        match ExchangeRate::parse(payload) {
            Some(rate) => {
                self.publish(rate);
                true
            }
            None => {
                tracing::debug!(payload, "ignoring non-numeric exchange rate payload");
                false
            }
        }
    }

    pub fn subscribe(&self) -> RateReader {
        RateReader {
            rx: self.tx.subscribe(),
        }
    }

    pub fn current(&self) -> ExchangeRate {
        self.tx.borrow().rate
    }
}

/// Read half of the rate store. Cheap to clone; one per consuming view.
#[derive(Debug, Clone)]
pub struct RateReader {
    rx: watch::Receiver<RateSnapshot>,
}

impl RateReader {
    pub fn current(&self) -> ExchangeRate {
        self.rx.borrow().rate
    }

    pub fn snapshot(&self) -> RateSnapshot {
        *self.rx.borrow()
    }

    /// Wait for the next published rate.
    ///
    /// Returns `None` once the publisher is gone; the last value stays readable
    /// through [`RateReader::current`].
    pub async fn changed(&mut self) -> Option<ExchangeRate> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn starts_at_identity() {
        let (_publisher, reader) = rate_store();
        assert_eq!(reader.current(), ExchangeRate::IDENTITY);
        assert!(reader.snapshot().is_default());
    }

    #[test]
    fn parse_accepts_padded_numbers() {
        let rate = ExchangeRate::parse(" 32.75\n").unwrap();
        assert_eq!(rate.as_decimal(), Decimal::from_str("32.75").unwrap());
    }

    #[test]
    fn parse_rejects_garbage_and_non_positive() {
        assert!(ExchangeRate::parse("abc").is_none());
        assert!(ExchangeRate::parse("").is_none());
        assert!(ExchangeRate::parse("NaN").is_none());
        assert!(ExchangeRate::parse("inf").is_none());
        assert!(ExchangeRate::parse("0").is_none());
        assert!(ExchangeRate::parse("-3").is_none());
        assert!(ExchangeRate::parse("1e-30").is_none());
        assert!(ExchangeRate::parse("1e30").is_none());
    }

    #[test]
    fn malformed_payload_keeps_previous_rate() {
        let (publisher, reader) = rate_store();
        assert!(publisher.publish_payload("1.08"));
        let before = reader.snapshot();

        assert!(!publisher.publish_payload("not-a-number"));
        assert_eq!(reader.snapshot(), before);
        assert_eq!(reader.current().as_decimal(), Decimal::from_str("1.08").unwrap());
    }

    #[test]
    fn last_write_wins_for_every_reader() {
        let (publisher, reader_a) = rate_store();
        let reader_b = reader_a.clone();
        let reader_c = publisher.subscribe();

        publisher.publish(ExchangeRate::from_f64(30.0).unwrap());
        publisher.publish(ExchangeRate::from_f64(31.5).unwrap());

        for reader in [&reader_a, &reader_b, &reader_c] {
            assert_eq!(reader.current(), ExchangeRate::from_f64(31.5).unwrap());
        }
    }

    #[test]
    fn publishing_without_readers_still_updates() {
        let (publisher, reader) = rate_store();
        drop(reader);
        publisher.publish(ExchangeRate::from_f64(2.0).unwrap());
        assert_eq!(publisher.current().as_f64(), 2.0);
    }

    #[tokio::test]
    async fn changed_yields_new_rate_then_none_after_publisher_drop() {
        let (publisher, mut reader) = rate_store();
        publisher.publish(ExchangeRate::from_f64(0.92).unwrap());

        let rate = reader.changed().await.unwrap();
        assert_eq!(rate, ExchangeRate::from_f64(0.92).unwrap());

        drop(publisher);
        assert!(reader.changed().await.is_none());
        assert_eq!(reader.current(), ExchangeRate::from_f64(0.92).unwrap());
    }
}
