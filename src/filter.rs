use Pull::Sentinel;
use Pull::Value;

use crate::generator::Generator;
use crate::pull::Pull;

pub struct Filter<G, P> {
    source: G,
    predicate: P,
}

impl<G, P> Filter<G, P> {
    pub fn new(source: G, predicate: P) -> Self
    where
        G: Generator,
        P: FnMut(&G::Item) -> bool,
    {
        Filter { source, predicate }
    }
}

impl<G, P> Generator for Filter<G, P>
where
    G: Generator,
    P: FnMut(&G::Item) -> bool,
{
    type Item = G::Item;
    fn pull(&mut self) -> Pull<G::Item> {
        loop {
            match self.source.pull() {
                Value(v) => {
                    if (self.predicate)(&v) {
                        return Value(v);
                    }
                }
                Sentinel => return Sentinel,
            }
        }
    }
}
