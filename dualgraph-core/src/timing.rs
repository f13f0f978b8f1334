//! Wall-clock measurement of algorithm bodies.

use std::time::{Duration, Instant};

/// A value paired with the time taken to compute it.
#[derive(Clone, Debug, PartialEq)]
pub struct Timed<T> {
    value: T,
    elapsed: Duration,
}

impl<T> Timed<T> {
    /// Returns the computed value.
    #[must_use]
    #[rustfmt::skip]
    pub fn value(&self) -> &T { &self.value }

    /// Returns the measured duration.
    #[must_use]
    #[rustfmt::skip]
    pub fn elapsed(&self) -> Duration { self.elapsed }

    /// Splits into the value and the duration.
    #[must_use]
    pub fn into_parts(self) -> (T, Duration) {
        (self.value, self.elapsed)
    }

    /// Applies `f` to the value, keeping the measured duration.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Timed<U> {
        Timed {
            value: f(self.value),
            elapsed: self.elapsed,
        }
    }
}

impl<T, E> Timed<Result<T, E>> {
    /// Moves a fallible measurement's error outwards.
    ///
    /// # Errors
    /// Returns the error produced by the measured body.
    pub fn transpose(self) -> Result<Timed<T>, E> {
        let elapsed = self.elapsed;
        self.value.map(|value| Timed { value, elapsed })
    }
}

/// Runs `body` and measures it with a monotonic clock.
///
/// # Examples
/// ```
/// use dualgraph_core::timed;
///
/// let run = timed(|| (1..=10).sum::<u32>());
/// assert_eq!(*run.value(), 55);
/// ```
pub fn timed<T>(body: impl FnOnce() -> T) -> Timed<T> {
    let started = Instant::now();
    let value = body();
    Timed {
        value,
        elapsed: started.elapsed(),
    }
}
