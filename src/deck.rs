//! Deck construction, shuffling, drawing, and sorting.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::catalog::{RANK_LABELS, SUITS};

/// A mutable ordered sequence of remaining cards.
///
/// The deck owns its cards and its random number generator exclusively; it
/// is meant to have a single logical owner and carries no internal locking.
/// Drawing removes cards from the front permanently, so the length only
/// ever decreases.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, front of the deck first.
    cards: Vec<Card>,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full 52-card deck shuffled with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DECK_SIZE, Deck};
    ///
    /// let mut deck = Deck::new(42);
    /// assert_eq!(deck.len(), DECK_SIZE);
    ///
    /// let hand = deck.draw(5);
    /// assert_eq!(hand.len(), 5);
    /// assert_eq!(deck.len(), 47);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self::ordered(seed);
        deck.shuffle();
        deck
    }

    /// Creates a full 52-card deck in catalog order: suits S, H, D, C,
    /// ranks ascending within each suit, ids 0..51 in fill order.
    ///
    /// The seed only arms later [`shuffle`](Self::shuffle) calls.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let deck = Deck::ordered(42);
    /// let first = deck.cards()[0];
    /// assert_eq!((first.id, first.value, first.suit.value), (0, "2", 'S'));
    /// ```
    #[must_use]
    pub fn ordered(seed: u64) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in SUITS {
            for (index, &value) in RANK_LABELS.iter().enumerate() {
                cards.push(Card {
                    id: cards.len() as u32,
                    value,
                    rank: index as u8 + 1,
                    suit,
                });
            }
        }

        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Applies a uniform random permutation to the remaining cards.
    ///
    /// The length and the multiset of cards are unchanged.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Draws `amount` cards from the front of the deck, removing them
    /// permanently.
    ///
    /// The draw only succeeds if it leaves strictly more cards in the deck
    /// than it removes (`amount >= 1` and `2 * amount` less than the
    /// remaining length). Otherwise this is a silent no-op: the deck is
    /// untouched and an empty `Vec` is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let mut deck = Deck::new(7);
    /// assert!(deck.draw(26).is_empty()); // would leave 26 vs 26 drawn
    /// assert_eq!(deck.draw(25).len(), 25);
    /// assert_eq!(deck.len(), 27);
    /// ```
    pub fn draw(&mut self, amount: usize) -> Vec<Card> {
        if amount == 0 || self.cards.len().saturating_sub(amount) <= amount {
            return Vec::new();
        }
        self.cards.drain(..amount).collect()
    }

    /// Returns the remaining cards, front of the deck first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no remaining cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Sorts a sequence of cards by descending rank, highest rank first.
///
/// The sort is stable: cards of equal rank keep their relative input order.
/// This works on any supplied slice and never touches a live deck.
///
/// # Example
///
/// ```
/// use deckrs::{parse, sort_descending};
///
/// let mut cards = parse(["0#4H", "1#2C", "2#AS", "3#8D"]).unwrap();
/// sort_descending(&mut cards);
///
/// let ranks: Vec<u8> = cards.iter().map(|card| card.rank).collect();
/// assert_eq!(ranks, [13, 7, 3, 1]);
/// ```
pub fn sort_descending(cards: &mut [Card]) {
    cards.sort_by(|a, b| b.rank.cmp(&a.rank));
}
