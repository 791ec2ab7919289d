use std::{ops::Sub, time::Duration};

/// Wall-clock timestamp usable in both wasm and native builds.
/// Wraps the duration since the Unix Epoch.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant(pub Duration);

impl Instant {
    /// Current time as a Unix timestamp.
    pub fn now() -> Self {
        cfg_if::cfg_if! {
            if #[cfg(any(feature = "hydrate", feature = "csr"))] {
                let millis = js_sys::Date::now();
                Instant(Duration::from_millis(millis as u64))
            } else {
                // A clock set before 1970 is reported as the epoch itself.
                let since_epoch = std::time::SystemTime::now()
                    .duration_since(std::time::SystemTime::UNIX_EPOCH)
                    .unwrap_or_default();
                Instant(since_epoch)
            }
        }
    }

    /// Time passed since this instant. Zero if the instant lies in the future.
    pub fn elapsed(&self) -> Duration {
        Instant::now().0.saturating_sub(self.0)
    }

    /// Milliseconds since the Unix Epoch.
    pub fn as_millis(&self) -> u128 {
        self.0.as_millis()
    }
}

impl Sub<Instant> for Instant {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Instant) -> Self::Output {
        self.0.saturating_sub(rhs.0)
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.as_millis())
    }
}

impl std::fmt::Debug for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Instant").field(&self.0.as_millis()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtraction_saturates() {
        let earlier = Instant(Duration::from_millis(1_000));
        let later = Instant(Duration::from_millis(1_500));

        assert_eq!(later - earlier, Duration::from_millis(500));
        assert_eq!(earlier - later, Duration::ZERO);
    }

    #[test]
    fn future_instant_has_no_elapsed_time() {
        let future = Instant(Instant::now().0 + Duration::from_secs(60));
        assert_eq!(future.elapsed(), Duration::ZERO);
    }
}
