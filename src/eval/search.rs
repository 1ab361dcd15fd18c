//! Exhaustive body/tail search over every rank assignment.

use log::trace;

use crate::card::{CandidateValues, Card};
use crate::hand::{HAND_SIZE, Hand};
use crate::result::Category;

use super::tail;

/// Number of ways to pick a three-card body out of five cards.
const DECOMPOSITION_COUNT: usize = 10;

/// A body (three positions) and its complementary tail (two positions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Decomposition {
    pub body: [usize; 3],
    pub tail: [usize; 2],
}

/// All decompositions, bodies in lexicographic order of positions.
pub(crate) const DECOMPOSITIONS: [Decomposition; DECOMPOSITION_COUNT] = decompositions();

const fn decompositions() -> [Decomposition; DECOMPOSITION_COUNT] {
    let mut out = [Decomposition {
        body: [0; 3],
        tail: [0; 2],
    }; DECOMPOSITION_COUNT];
    let mut n = 0;

    let mut a = 0;
    while a < HAND_SIZE {
        let mut b = a + 1;
        while b < HAND_SIZE {
            let mut c = b + 1;
            while c < HAND_SIZE {
                let mut tail = [0; 2];
                let mut t = 0;
                let mut i = 0;
                while i < HAND_SIZE {
                    if i != a && i != b && i != c {
                        tail[t] = i;
                        t += 1;
                    }
                    i += 1;
                }
                out[n] = Decomposition {
                    body: [a, b, c],
                    tail,
                };
                n += 1;
                c += 1;
            }
            b += 1;
        }
        a += 1;
    }
    out
}

/// Iterator over every choice of one value per card.
///
/// Yields the Cartesian product of the cards' candidate values with the
/// last card varying fastest.
pub(crate) struct Assignments {
    candidates: [CandidateValues; HAND_SIZE],
    next: usize,
    total: usize,
}

impl Assignments {
    pub(crate) fn new(hand: &Hand) -> Self {
        let candidates = hand.cards().each_ref().map(Card::values);
        let total = candidates.iter().map(CandidateValues::len).product();
        Self {
            candidates,
            next: 0,
            total,
        }
    }
}

impl Iterator for Assignments {
    type Item = [u8; HAND_SIZE];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }

        let mut rest = self.next;
        let mut values = [0; HAND_SIZE];
        for (slot, candidates) in values.iter_mut().zip(&self.candidates).rev() {
            let options = candidates.as_slice();
            *slot = options[rest % options.len()];
            rest /= options.len();
        }

        self.next += 1;
        Some(values)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.next;
        (left, Some(left))
    }
}

/// A scored decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Outcome {
    pub score: i16,
    pub category: Category,
    pub decomposition: Decomposition,
}

/// Finds the best-scoring valid decomposition of the hand.
///
/// Only a strictly greater score replaces the current best, so ties go to
/// the first decomposition found. Returns `None` if no three cards sum to a
/// multiple of ten under any assignment.
pub(crate) fn best_outcome(hand: &Hand) -> Option<Outcome> {
    let cards = hand.cards();
    let mut best: Option<Outcome> = None;

    for values in Assignments::new(hand) {
        for decomposition in DECOMPOSITIONS {
            let body_sum: u16 = decomposition
                .body
                .iter()
                .map(|&i| u16::from(values[i]))
                .sum();
            if body_sum % 10 != 0 {
                continue;
            }

            let [x, y] = decomposition.tail;
            let category = tail::classify([&cards[x], &cards[y]], [values[x], values[y]]);
            let score = tail::score(category);
            trace!("values {values:?} body {:?} -> {category} ({score})", decomposition.body);

            if best.is_none_or(|current| score > current.score) {
                best = Some(Outcome {
                    score,
                    category,
                    decomposition,
                });
            }
        }
    }

    best
}
