//! Card and suit types, plus the partial representation used for
//! untrusted input.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::catalog;
use crate::error::ParseError;

/// Suit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Spades and clubs.
    Black,
    /// Hearts and diamonds.
    Red,
}

/// A suit record: letter code, color, and display glyph.
///
/// `Suit` is `Copy`, so every card owns an independent copy of its suit
/// data. Mutating a local `Suit` can never affect the catalog or other
/// cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Suit {
    /// Letter code, one of `'S'`, `'H'`, `'D'`, `'C'`.
    pub value: char,
    /// Suit color.
    pub color: Color,
    /// Display glyph, one of `♠`, `♥`, `♦`, `♣`.
    pub symbol: char,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Identifier, unique within the owning deck, assigned in fill order.
    pub id: u32,
    /// Rank label, one of `"2"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`.
    pub value: &'static str,
    /// Rank, 1 (`"2"`, lowest) through 13 (`"A"`, highest).
    pub rank: u8,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a card from a rank label, deriving `rank` from the label's
    /// position in the rank catalog.
    ///
    /// Returns `None` if `value` is not a known rank label.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, catalog};
    ///
    /// let suit = catalog::suit_of('S').unwrap();
    /// let card = Card::new(23, "A", suit).unwrap();
    /// assert_eq!(card.rank, 13);
    /// assert!(Card::new(0, "11", suit).is_none());
    /// ```
    #[must_use]
    pub fn new(id: u32, value: &str, suit: Suit) -> Option<Self> {
        let rank = catalog::rank_of(value)?;
        Some(Self {
            id,
            value: catalog::RANK_LABELS[rank as usize - 1],
            rank,
            suit,
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit.symbol)
    }
}

/// A possibly incomplete card, as assembled from untrusted input.
///
/// Lenient token parsing produces this type: fields that could not be
/// resolved are left `None` instead of failing the whole card. Use
/// [`Card::try_from`] to promote a complete `PartialCard` into a [`Card`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialCard {
    /// Identifier, if the token carried a well-formed decimal id.
    pub id: Option<u32>,
    /// Raw rank label. Unknown labels are preserved as-is.
    pub value: Option<String>,
    /// Rank derived from `value`, if the label is in the rank catalog.
    pub rank: Option<u8>,
    /// Suit, if the letter code matched the suit catalog.
    pub suit: Option<Suit>,
}

impl PartialCard {
    /// Returns whether all four fields are present.
    ///
    /// This is deliberately a shallow shape check: it does not verify that
    /// `value` is a real rank label or that `rank` matches `value`.
    /// Downstream code relies on this leniency.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, PartialCard};
    ///
    /// let card = PartialCard::from(Deck::new(1).draw(2)[0]);
    /// assert!(card.validate());
    /// assert!(!PartialCard::default().validate());
    /// ```
    #[must_use]
    pub const fn validate(&self) -> bool {
        self.id.is_some() && self.value.is_some() && self.rank.is_some() && self.suit.is_some()
    }

    /// Returns the display word for the card's rank label (`"K"` → `"King"`).
    ///
    /// Returns `""` if [`validate`](Self::validate) fails or the label is not
    /// in the rank catalog.
    #[must_use]
    pub fn card_text(&self) -> &'static str {
        if !self.validate() {
            return "";
        }
        self.value
            .as_deref()
            .and_then(catalog::rank_word)
            .unwrap_or("")
    }

    /// Returns the display word for the card's suit (`'H'` → `"Hearts"`).
    ///
    /// Returns `""` if [`validate`](Self::validate) fails or the suit letter
    /// is not in the suit catalog.
    #[must_use]
    pub fn suit_text(&self) -> &'static str {
        if !self.validate() {
            return "";
        }
        self.suit
            .map(|suit| suit.value)
            .and_then(catalog::suit_word)
            .unwrap_or("")
    }

    /// Returns a full description such as `"King of Hearts"`, or `""` if
    /// [`validate`](Self::validate) fails.
    #[must_use]
    pub fn describe(&self) -> String {
        if !self.validate() {
            return String::new();
        }
        format!("{} of {}", self.card_text(), self.suit_text())
    }
}

impl From<Card> for PartialCard {
    fn from(card: Card) -> Self {
        Self {
            id: Some(card.id),
            value: Some(String::from(card.value)),
            rank: Some(card.rank),
            suit: Some(card.suit),
        }
    }
}

impl TryFrom<PartialCard> for Card {
    type Error = ParseError;

    /// Promotes a complete `PartialCard` into a `Card`, re-deriving `rank`
    /// from the rank label.
    fn try_from(partial: PartialCard) -> Result<Self, ParseError> {
        let id = partial.id.ok_or(ParseError::IncompleteCard)?;
        let value = partial.value.ok_or(ParseError::IncompleteCard)?;
        let suit = partial.suit.ok_or(ParseError::IncompleteCard)?;
        Self::new(id, &value, suit).ok_or(ParseError::UnknownValue)
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;
