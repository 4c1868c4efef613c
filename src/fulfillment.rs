//! Fulfillment assertion over fallible futures.
//!
//! A naive test helper that awaits a future and only looks at the `Ok` arm
//! can let a failing future slip through: no callback fires, no assertion
//! runs, and the test passes vacuously. [`should_fulfill`] closes that gap —
//! the failure channel is always re-raised into the returned future, so a
//! failing computation fails the registering test instead of disappearing.

use std::future::Future;

use tracing::trace;

/// Wrap a fallible future in a fulfillment assertion.
///
/// The returned [`ShouldFulfill`] exposes exactly one operation,
/// [`on_fulfilled`](ShouldFulfill::on_fulfilled). There is deliberately no
/// rejection-side convenience: a failure must bubble out as an `Err` the
/// caller's harness can see.
///
/// ```
/// # use fulfill::should_fulfill;
/// # async fn demo() -> Result<(), &'static str> {
/// let answer = async { Ok::<_, &str>(42) };
/// should_fulfill(answer)
///     .on_fulfilled(|value| {
///         assert_eq!(value, 42);
///         Ok(())
///     })
///     .await
/// # }
/// ```
#[must_use = "wrapping a future asserts nothing until `on_fulfilled` is awaited"]
pub fn should_fulfill<F, T, E>(future: F) -> ShouldFulfill<F>
where
    F: Future<Output = Result<T, E>>,
{
    ShouldFulfill { future }
}

/// A pending fulfillment assertion produced by [`should_fulfill`].
///
/// Holds the wrapped future by value; consumed by the single
/// [`on_fulfilled`](Self::on_fulfilled) call.
#[must_use = "a fulfillment assertion asserts nothing until `on_fulfilled` is awaited"]
pub struct ShouldFulfill<F> {
    future: F,
}

impl<F, T, E> ShouldFulfill<F>
where
    F: Future<Output = Result<T, E>>,
{
    /// Run `callback` with the fulfilled value; re-raise a failure untouched.
    ///
    /// Returns immediately with a future that settles once the wrapped
    /// future does:
    ///
    /// - wrapped `Ok(value)`: resolves/fails with `callback(value)`,
    /// - wrapped `Err(reason)`: fails with `reason` and never runs
    ///   `callback`.
    ///
    /// A callback that panics unwinds through the awaiting test, so that
    /// path is never swallowed either. `callback` is `FnOnce` and the
    /// wrapper is consumed here, which rules out a second invocation.
    pub async fn on_fulfilled<C, U>(self, callback: C) -> Result<U, E>
    where
        C: FnOnce(T) -> Result<U, E>,
    {
        match self.future.await {
            Ok(value) => callback(value),
            Err(reason) => {
                trace!("wrapped future failed; propagating without invoking callback");
                Err(reason)
            }
        }
    }
}
