//! Compact card token encoding and decoding.
//!
//! The token format is `"{id}#{value}{suit}"`: a decimal id with no leading
//! zeros, a rank label, and a suit letter, e.g. `"23#AS"` or `"7#10H"`.
//! This is the crate's only interchange format; round-trip fidelity is part
//! of the contract.
//!
//! Two decoding surfaces are provided. The strict one ([`parse`],
//! [`Card::from_token`]) rejects malformed tokens with a
//! [`ParseError`]. The lenient one ([`parse_lenient`]) mirrors the
//! tolerance legacy consumers expect: unresolvable fields are left `None`
//! in a [`PartialCard`] instead of failing the token.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, PartialCard};
use crate::catalog;
use crate::error::ParseError;

impl Card {
    /// Encodes the card as a `"{id}#{value}{suit}"` token.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, catalog};
    ///
    /// let suit = catalog::suit_of('S').unwrap();
    /// let card = Card::new(23, "A", suit).unwrap();
    /// assert_eq!(card.token(), "23#AS");
    /// ```
    #[must_use]
    pub fn token(&self) -> String {
        format!("{}#{}{}", self.id, self.value, self.suit.value)
    }

    /// Decodes a token, rejecting anything malformed.
    ///
    /// A card part of length 3 is the rank `"10"` plus a suit letter;
    /// length 2 is a one-character rank label plus a suit letter.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingSeparator`] if the token has no `#`,
    /// [`ParseError::InvalidId`] if the id part is not a decimal integer,
    /// [`ParseError::UnknownValue`] if the value is not a rank label, and
    /// [`ParseError::UnknownSuit`] if the suit letter is not in the suit
    /// catalog.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, ParseError};
    ///
    /// let card = Card::from_token("7#10H").unwrap();
    /// assert_eq!((card.id, card.value, card.rank), (7, "10", 9));
    ///
    /// assert_eq!(Card::from_token("7#10X"), Err(ParseError::UnknownSuit));
    /// ```
    pub fn from_token(token: &str) -> Result<Self, ParseError> {
        let (id_part, card_part) = token.split_once('#').ok_or(ParseError::MissingSeparator)?;
        let id = id_part.parse().map_err(|_| ParseError::InvalidId)?;
        let (value, suit_value) = split_card_part(card_part).ok_or(ParseError::UnknownValue)?;
        let suit = catalog::suit_of(suit_value).ok_or(ParseError::UnknownSuit)?;
        Self::new(id, value, suit).ok_or(ParseError::UnknownValue)
    }
}

/// Splits a card part into its rank label and suit letter: everything up
/// to the final character is the label, so `"AS"` yields `("A", 'S')` and
/// `"10S"` yields `("10", 'S')`.
fn split_card_part(part: &str) -> Option<(&str, char)> {
    let mut chars = part.chars();
    let suit_value = chars.next_back()?;
    let value = chars.as_str();
    if value.is_empty() {
        return None;
    }
    Some((value, suit_value))
}

/// Encodes each card as a token, preserving order.
#[must_use]
pub fn stringify(cards: &[Card]) -> Vec<String> {
    cards.iter().map(Card::token).collect()
}

/// Decodes a sequence of tokens, failing on the first malformed one.
///
/// # Errors
///
/// Returns the same errors as [`Card::from_token`].
pub fn parse<I>(tokens: I) -> Result<Vec<Card>, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| Card::from_token(token.as_ref()))
        .collect()
}

/// Decodes a sequence of tokens without failing.
///
/// Fields that cannot be resolved are left `None`: a malformed id clears
/// `id`, an unknown suit letter clears `suit`, and an unknown rank label is
/// preserved verbatim in `value` with `rank` cleared. A token with no `#`
/// yields an all-`None` card.
///
/// # Example
///
/// ```
/// use deckrs::parse_lenient;
///
/// let cards = parse_lenient(["23#AX"]);
/// assert_eq!(cards[0].id, Some(23));
/// assert_eq!(cards[0].rank, Some(13));
/// assert_eq!(cards[0].suit, None);
/// ```
pub fn parse_lenient<I>(tokens: I) -> Vec<PartialCard>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| lenient_token(token.as_ref()))
        .collect()
}

fn lenient_token(token: &str) -> PartialCard {
    let Some((id_part, card_part)) = token.split_once('#') else {
        return PartialCard::default();
    };

    let id = id_part.parse().ok();
    let (value, suit) = match split_card_part(card_part) {
        Some((value, suit_value)) => (Some(String::from(value)), catalog::suit_of(suit_value)),
        None => (None, None),
    };
    let rank = value.as_deref().and_then(catalog::rank_of);

    PartialCard {
        id,
        value,
        rank,
        suit,
    }
}
