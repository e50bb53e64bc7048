use core::fmt::Debug;

use crate::generator::Generator;
use crate::pull::Pull::Sentinel;
use crate::pull::Pull::Value;

/// Extension trait providing assertion methods for testing generators.
///
/// This trait is separate from [`Generator`] to keep the core trait focused
/// on essential operations. Both methods hand the generator back, so tests
/// read as the exact drive sequence they perform, including asserting
/// exhaustion more than once to witness that it is idempotent:
///
/// ```rust
/// use pullchain::{range, Generator, GeneratorAssertions};
///
/// range(1, 3)
///     .assert_pulls(1)
///     .assert_pulls(2)
///     .assert_exhausted()
///     .assert_exhausted();
/// ```
pub trait GeneratorAssertions: Generator {
    /// Pulls once and asserts that the generator produced `expected`.
    /// Panics if the generator was exhausted or produced a different value.
    fn assert_pulls(&mut self, expected: Self::Item) -> &mut Self
    where
        Self::Item: PartialEq + Debug,
    {
        match self.pull() {
            Value(actual) => {
                assert_eq!(
                    actual, expected,
                    "expected Value({expected:?}), got Value({actual:?})"
                );
            }
            Sentinel => {
                panic!("expected Value({expected:?}), got Sentinel")
            }
        }
        self
    }

    /// Pulls once and asserts that the generator is exhausted. Panics if it
    /// produced a value instead.
    fn assert_exhausted(&mut self) -> &mut Self
    where
        Self::Item: Debug,
    {
        match self.pull() {
            Value(actual) => {
                panic!("expected Sentinel, got Value({actual:?})")
            }
            Sentinel => {}
        }
        self
    }
}

impl<G> GeneratorAssertions for G where G: Generator + ?Sized {}
