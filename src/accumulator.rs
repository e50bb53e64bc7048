/// A fold over an unbounded, caller-driven run of inputs, finalized
/// explicitly.
///
/// An accumulator chain is driven one input per call: each
/// [`push`](Accumulator::push) folds a value into the chain's private state
/// and hands back the same chain, so calls compose into a chain of pushes
/// ending in a [`finish`](Accumulator::finish):
///
/// ```rust
/// use pullchain::{collect_chain, Accumulator};
///
/// let done = collect_chain(Some(3)).push(4).push(5).finish();
/// assert_eq!(done, [3, 4, 5]);
/// ```
///
/// The two operations are deliberately distinct methods. A dynamically-typed
/// rendition of this protocol would overload one callable (an argument
/// means "fold this in", no argument means "give me the result") and then
/// has to be careful never to confuse an *absent* argument with a zero-ish
/// one. Splitting the capability into `push` and `finish` removes that
/// hazard wholesale: `0` and `""` are ordinary inputs, and absence is not a
/// value at all. Where a chain needs a present/absent distinction in its
/// state or output, it carries an explicit `Option`.
///
/// # After `finish`
///
/// `finish` takes the accumulated result out through `&mut self`, leaving
/// the chain in its unseeded/empty state; a finished chain therefore behaves
/// exactly like a freshly created one. Callers that care about the
/// distinction should simply stop using the chain after finalizing it.
pub trait Accumulator {
    /// The type of value folded in by each push.
    type Input;

    /// The type of the finished result.
    type Output;

    /// Folds one value into the chain, returning the same chain for further
    /// pushes.
    fn push(&mut self, value: Self::Input) -> &mut Self;

    /// Takes the accumulated result out of the chain.
    fn finish(&mut self) -> Self::Output;
}
