//! Fulfillment assertions for fallible futures in tests.
//!
//! One helper, one guarantee: a wrapped future that fails makes the test
//! fail, visibly, instead of silently skipping the success callback.
//!
//! - **`fulfillment`**: [`should_fulfill`] and the [`ShouldFulfill`] wrapper

pub mod fulfillment;

pub use fulfillment::{ShouldFulfill, should_fulfill};
