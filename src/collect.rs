use alloc::vec::Vec;

use Pull::Value;

use crate::generator::Generator;
use crate::pull::Pull;

pub struct Collect<'a, G: Generator> {
    source: G,
    sink: &'a mut Vec<G::Item>,
}

impl<'a, G: Generator> Collect<'a, G> {
    pub fn new(source: G, sink: &'a mut Vec<G::Item>) -> Self {
        Collect { source, sink }
    }
}

impl<G> Generator for Collect<'_, G>
where
    G: Generator,
    G::Item: Clone,
{
    type Item = G::Item;
    fn pull(&mut self) -> Pull<G::Item> {
        let pull = self.source.pull();
        if let Value(v) = &pull {
            self.sink.push(v.clone());
        }
        pull
    }
}
