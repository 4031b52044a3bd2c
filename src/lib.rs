//! A standard 52-card deck library with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type covering construction, shuffling,
//! drawing, and sorting, together with a compact `"{id}#{value}{suit}"`
//! token format for (de)serializing cards. Game rules are out of scope;
//! this is the deck abstraction a game engine builds on.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, parse, stringify};
//!
//! let mut deck = Deck::new(42);
//! let hand = deck.draw(5);
//!
//! let tokens = stringify(&hand);
//! assert_eq!(parse(&tokens).unwrap(), hand);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod catalog;
pub mod deck;
pub mod error;
pub mod token;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, PartialCard, Suit};
pub use catalog::{BLANK_CARD, RANK_LABELS, SUITS};
pub use deck::{Deck, sort_descending};
pub use error::ParseError;
pub use token::{parse, parse_lenient, stringify};
