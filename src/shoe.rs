//! The shoe cards are dealt from, and the cut-card placement.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::ops::Range;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered pool of cards. The front of the shoe is the next card dealt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Shoe {
    cards: VecDeque<Card>,
}

impl Shoe {
    /// Builds a shoe of `decks` full decks and shuffles it.
    ///
    /// The shuffle is a Fisher–Yates permutation, so the result is fully
    /// determined by the state of `rng`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::Shoe;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let shoe = Shoe::shuffled(6, &mut rng);
    /// assert_eq!(shoe.len(), 6 * 52);
    /// ```
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        cards.shuffle(rng);
        Self {
            cards: cards.into(),
        }
    }

    /// Creates a stacked shoe. Cards are dealt in iteration order.
    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Removes and returns the card at the front of the shoe.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Places a card at the back of the shoe.
    pub fn put_back(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates the remaining cards in dealing order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// Picks how many cards may be dealt from a fresh shoe of `len` cards before
/// it is replaced.
///
/// A fraction is drawn uniformly from `held_back` and that share of the shoe
/// (rounded down) sits behind the cut card.
///
/// # Panics
///
/// Panics if `held_back` is empty. [`GameOptions::validate`] rejects such
/// ranges.
///
/// [`GameOptions::validate`]: crate::GameOptions::validate
pub fn cut_position<R: Rng + ?Sized>(len: usize, held_back: Range<f64>, rng: &mut R) -> usize {
    let fraction = rng.random_range(held_back);
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    let behind = (len as f64 * fraction) as usize;
    len - behind.min(len)
}
