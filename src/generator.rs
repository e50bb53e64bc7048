use alloc::vec::Vec;

use Pull::Value;

use crate::collect::Collect;
use crate::concat::Concat;
use crate::filter::Filter;
use crate::map::Map;
use crate::pull::Pull;

/// A stateful source of values, driven one [`pull`](Generator::pull) at a
/// time, that signals exhaustion with [`Sentinel`](crate::Sentinel).
///
/// A generator owns its state exclusively: nothing outside the generator can
/// observe or mutate it, and only `pull` advances it. Combinators that wrap a
/// generator take it by value, so the wrapped source cannot be driven
/// independently once wrapped: the move makes the ownership rule structural
/// rather than documentary.
///
/// # Exhaustion
///
/// Exhaustion is a steady state, not a failure. Every generator in this crate
/// upholds the fused contract: once `pull` returns `Sentinel`, every later
/// `pull` returns `Sentinel` too, and pulling past exhaustion is always safe.
/// `Iterator` documents the same expectation but leaves it to convention
/// (hence `Iterator::fuse()`); here the adapters are written so the contract
/// holds by construction, and the property tests drive every combinator past
/// exhaustion to witness it.
///
/// # Relation to `Iterator`
///
/// The shape is deliberately close (`pull(&mut self)` is `next(&mut self)`
/// with a domain-named result), and the two bridge freely via
/// [`into_iter`](Generator::into_iter) and [`IntoGen`](crate::IntoGen). The
/// protocol is kept separate because its contract is stricter (fused
/// exhaustion is mandatory, not advisory) and because the sentinel is a
/// marker kind of its own: a generator of `Option<T>` values stays
/// unambiguous.
pub trait Generator {
    /// The type of value this generator produces.
    type Item;

    /// Advances the generator, producing either the next value of the
    /// sequence or `Sentinel` once the sequence is exhausted.
    fn pull(&mut self) -> Pull<Self::Item>;

    /// Creates a generator producing only the values of this generator that
    /// satisfy `predicate`, in order.
    ///
    /// Each pull on the filtered generator pulls from the source until a
    /// value passes the predicate (produced) or the source is exhausted
    /// (forwarded). One passing-or-sentinel pull run per call, never a pull
    /// beyond the first success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullchain::{range, Generator, GeneratorAssertions};
    ///
    /// range(0, 7)
    ///     .filter(|n| n % 2 == 0)
    ///     .assert_pulls(0)
    ///     .assert_pulls(2)
    ///     .assert_pulls(4)
    ///     .assert_pulls(6)
    ///     .assert_exhausted();
    /// ```
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Creates a generator producing everything this generator produces,
    /// followed by everything `second` produces.
    ///
    /// The switch to `second` happens the first time this generator is
    /// exhausted, and it is one-directional: after the switch the first
    /// source is never pulled again, so the combined generator stays
    /// exhausted once `second` is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullchain::{range, Generator, GeneratorAssertions};
    ///
    /// range(1, 3)
    ///     .concat(range(0, 2))
    ///     .assert_pulls(1)
    ///     .assert_pulls(2)
    ///     .assert_pulls(0)
    ///     .assert_pulls(1)
    ///     .assert_exhausted()
    ///     .assert_exhausted();
    /// ```
    fn concat<G>(self, second: G) -> Concat<Self, G>
    where
        Self: Sized,
        G: Generator<Item = Self::Item>,
    {
        Concat::new(self, second)
    }

    /// Creates a generator that records every value it produces by appending
    /// it to `sink`, in generation order, before handing it to the caller.
    ///
    /// The sink stays owned by the caller, but the exclusive borrow means the
    /// caller cannot touch it while the collecting generator is alive. The
    /// borrow ends when the wrapper is dropped (or consumed by a driver like
    /// [`for_each`](Generator::for_each)), and only then is the sink readable
    /// again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullchain::{range, Generator};
    ///
    /// let mut sink = Vec::new();
    /// range(1, 3).collect_into(&mut sink).for_each(|_| {});
    /// assert_eq!(sink, [1, 2]);
    /// ```
    fn collect_into<'a>(self, sink: &'a mut Vec<Self::Item>) -> Collect<'a, Self>
    where
        Self: Sized,
    {
        Collect::new(self, sink)
    }

    /// Creates a generator producing `f` applied to each value this
    /// generator produces. The sentinel is forwarded unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullchain::{range, Generator, GeneratorAssertions};
    ///
    /// range(1, 4)
    ///     .map(|n| n * 10)
    ///     .assert_pulls(10)
    ///     .assert_pulls(20)
    ///     .assert_pulls(30)
    ///     .assert_exhausted();
    /// ```
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// Drives this generator to exhaustion, invoking `f` on each produced
    /// value.
    ///
    /// This never returns if the generator never exhausts!
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullchain::{range, Generator};
    ///
    /// let mut seen = Vec::new();
    /// range(1, 4).for_each(|n| seen.push(n));
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    fn for_each<F>(mut self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        while let Value(v) = self.pull() {
            f(v);
        }
    }

    /// Creates a lazy iterator over the values this generator produces,
    /// mapping `Sentinel` to `None`.
    ///
    /// Because generators here are fused, the iterator keeps returning `None`
    /// after the first `None`, which is the strongest contract `Iterator`
    /// callers can hope for.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullchain::{fib, Generator};
    ///
    /// let prefix: Vec<i64> = fib(0, 1).into_iter().take(7).collect();
    /// assert_eq!(prefix, [0, 1, 1, 2, 3, 5, 8]);
    /// ```
    fn into_iter(self) -> impl Iterator<Item = Self::Item>
    where
        Self: Sized,
    {
        let mut source = self;
        core::iter::from_fn(move || source.pull().into_value())
    }
}

/// Generators can be driven through an exclusive reference, the way
/// iterators can, so a caller may pull a prefix by reference and keep the
/// generator afterwards.
impl<G> Generator for &mut G
where
    G: Generator + ?Sized,
{
    type Item = G::Item;
    fn pull(&mut self) -> Pull<G::Item> {
        (**self).pull()
    }
}
