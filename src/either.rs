use either::Either;
use either::Either::Left;
use either::Either::Right;

use crate::generator::Generator;
use crate::pull::Pull;

/// Implement the `Generator` trait for the `Either` type when both variants
/// themselves are generators with the same item type, so a caller can pick
/// between two generator shapes at runtime and still hand out one type.
///
/// ```rust
/// use either::Either;
/// use pullchain::{element, range, Generator, GeneratorAssertions};
///
/// let tens = [10, 20];
/// let forward = true;
/// let mut g = if forward {
///     Either::Left(range(0, 2))
/// } else {
///     Either::Right(element(&tens))
/// };
/// g.assert_pulls(0).assert_pulls(1).assert_exhausted();
/// ```
impl<A, B> Generator for Either<A, B>
where
    A: Generator,
    B: Generator<Item = A::Item>,
{
    type Item = A::Item;
    fn pull(&mut self) -> Pull<A::Item> {
        match self {
            Left(a) => a.pull(),
            Right(b) => b.pull(),
        }
    }
}
