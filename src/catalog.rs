//! Static rank and suit catalogs.
//!
//! Everything here is either a `const` of a `Copy` type or a pure lookup,
//! so callers always receive an independent value and can never mutate
//! shared catalog state through it.

use crate::card::{Color, Suit};

/// Rank labels in ascending rank order. Index plus one is the rank.
pub const RANK_LABELS: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

/// The four suits in catalog order: Spades, Hearts, Diamonds, Clubs.
pub const SUITS: [Suit; 4] = [
    Suit {
        value: 'S',
        color: Color::Black,
        symbol: '♠',
    },
    Suit {
        value: 'H',
        color: Color::Red,
        symbol: '♥',
    },
    Suit {
        value: 'D',
        color: Color::Red,
        symbol: '♦',
    },
    Suit {
        value: 'C',
        color: Color::Black,
        symbol: '♣',
    },
];

/// Glyph for rendering an empty or face-down card slot.
pub const BLANK_CARD: char = '★';

/// Returns the rank (1..=13) for a rank label, or `None` if the label is
/// not in [`RANK_LABELS`].
///
/// # Example
///
/// ```
/// use deckrs::catalog::rank_of;
///
/// assert_eq!(rank_of("2"), Some(1));
/// assert_eq!(rank_of("A"), Some(13));
/// assert_eq!(rank_of("1"), None);
/// ```
#[must_use]
pub fn rank_of(label: &str) -> Option<u8> {
    RANK_LABELS
        .iter()
        .position(|&candidate| candidate == label)
        .map(|index| index as u8 + 1)
}

/// Returns the display word for a rank label (`"2"` → `"Two"`).
#[must_use]
pub fn rank_word(label: &str) -> Option<&'static str> {
    let word = match label {
        "2" => "Two",
        "3" => "Three",
        "4" => "Four",
        "5" => "Five",
        "6" => "Six",
        "7" => "Seven",
        "8" => "Eight",
        "9" => "Nine",
        "10" => "Ten",
        "J" => "Jack",
        "Q" => "Queen",
        "K" => "King",
        "A" => "Ace",
        _ => return None,
    };
    Some(word)
}

/// Returns the suit record for a letter code, or `None` if the letter is
/// not in [`SUITS`].
#[must_use]
pub fn suit_of(value: char) -> Option<Suit> {
    SUITS.into_iter().find(|suit| suit.value == value)
}

/// Returns the display word for a suit letter (`'S'` → `"Spades"`).
#[must_use]
pub const fn suit_word(value: char) -> Option<&'static str> {
    let word = match value {
        'S' => "Spades",
        'H' => "Hearts",
        'D' => "Diamonds",
        'C' => "Clubs",
        _ => return None,
    };
    Some(word)
}
