use Pull::Sentinel;
use Pull::Value;

use crate::generator::Generator;
use crate::pull::Pull;

pub struct Concat<A, B> {
    first: A,
    second: B,
    // Latched on the first sentinel out of `first`; `first` is never pulled
    // again afterwards, even if it would misbehave and produce more values.
    switched: bool,
}

impl<A, B> Concat<A, B> {
    pub fn new<T>(first: A, second: B) -> Self
    where
        A: Generator<Item = T>,
        B: Generator<Item = T>,
    {
        Concat {
            first,
            second,
            switched: false,
        }
    }
}

impl<A, B> Generator for Concat<A, B>
where
    A: Generator,
    B: Generator<Item = A::Item>,
{
    type Item = A::Item;
    fn pull(&mut self) -> Pull<A::Item> {
        if !self.switched {
            match self.first.pull() {
                Value(v) => return Value(v),
                Sentinel => self.switched = true,
            }
        }
        self.second.pull()
    }
}
