//! Outcast detection: the noun least related to the others in a list.

use crate::error::{HypernymError, Result};
use crate::wordnet::WordNet;

/// Finds the outcast of a noun list.
///
/// The outcast is the noun whose summed semantic distance to every noun in
/// the list (itself included, contributing zero) is maximal. Ties go to the
/// earliest noun in the list.
#[derive(Debug)]
pub struct Outcast<'a> {
    wordnet: &'a WordNet,
}

impl<'a> Outcast<'a> {
    /// Create a detector over a dictionary.
    pub fn new(wordnet: &'a WordNet) -> Self {
        Outcast { wordnet }
    }

    /// The outcast of `nouns`.
    ///
    /// Fails with `InvalidArgument` when fewer than two nouns are given or
    /// when any noun is not in the dictionary.
    pub fn outcast<'n>(&self, nouns: &[&'n str]) -> Result<&'n str> {
        if nouns.len() < 2 {
            return Err(HypernymError::invalid_argument(
                "outcast needs at least two nouns",
            ));
        }

        let mut totals = Vec::with_capacity(nouns.len());
        for &candidate in nouns {
            let mut total: u64 = 0;
            for &other in nouns {
                total += self.wordnet.distance(candidate, other)? as u64;
            }
            totals.push(total);
        }

        let mut best = 0;
        for (index, &total) in totals.iter().enumerate() {
            if total > totals[best] {
                best = index;
            }
        }

        Ok(nouns[best])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SYNSETS: &str = "\
0,cat,a small domesticated carnivore
1,dog,a domesticated carnivore
2,wolf,a wild canine
3,fern,a flowerless plant
4,carnivore,a meat eater
5,plant,a living thing without locomotion
6,entity,that which exists
";
    const HYPERNYMS: &str = "\
0,4
1,4
2,4
3,5
4,6
5,6
";

    fn wordnet() -> WordNet {
        WordNet::from_readers(Cursor::new(SYNSETS), Cursor::new(HYPERNYMS)).unwrap()
    }

    #[test]
    fn test_outcast_picks_the_unrelated_noun() {
        let wn = wordnet();
        let outcast = Outcast::new(&wn);

        // cat/dog/wolf are all carnivores two apart; fern is four away from each
        assert_eq!(outcast.outcast(&["cat", "dog", "fern", "wolf"]).unwrap(), "fern");
    }

    #[test]
    fn test_outcast_tie_goes_to_first() {
        let wn = wordnet();
        let outcast = Outcast::new(&wn);

        // All pairwise distances are equal, so the first noun wins
        assert_eq!(outcast.outcast(&["cat", "dog", "wolf"]).unwrap(), "cat");
    }

    #[test]
    fn test_outcast_needs_two_nouns() {
        let wn = wordnet();
        let outcast = Outcast::new(&wn);

        assert!(matches!(
            outcast.outcast(&["cat"]),
            Err(HypernymError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_outcast_rejects_unknown_noun() {
        let wn = wordnet();
        let outcast = Outcast::new(&wn);

        assert!(matches!(
            outcast.outcast(&["cat", "rock"]),
            Err(HypernymError::InvalidArgument(_))
        ));
    }
}
