//! Deck and token integration tests.

use std::collections::HashSet;

use deckrs::{
    Card, DECK_SIZE, Deck, ParseError, PartialCard, RANK_LABELS, SUITS, catalog, parse,
    parse_lenient, sort_descending, stringify,
};

fn card(id: u32, value: &str, suit_value: char) -> Card {
    let suit = catalog::suit_of(suit_value).unwrap();
    Card::new(id, value, suit).unwrap()
}

#[test]
fn construction_yields_52_unique_cards() {
    for deck in [Deck::new(42), Deck::ordered(42)] {
        assert_eq!(deck.len(), DECK_SIZE);

        let pairs: HashSet<(&str, char)> = deck
            .cards()
            .iter()
            .map(|card| (card.value, card.suit.value))
            .collect();
        assert_eq!(pairs.len(), DECK_SIZE);

        let ids: HashSet<u32> = deck.cards().iter().map(|card| card.id).collect();
        assert_eq!(ids, (0..52).collect::<HashSet<u32>>());
    }
}

#[test]
fn ordered_deck_follows_catalog_order() {
    let deck = Deck::ordered(0);

    for (index, card) in deck.cards().iter().enumerate() {
        assert_eq!(card.id as usize, index);
        assert_eq!(card.suit, SUITS[index / 13]);
        assert_eq!(card.value, RANK_LABELS[index % 13]);
    }
}

#[test]
fn rank_is_consistent_with_value() {
    for card in Deck::new(7).cards() {
        let position = RANK_LABELS.iter().position(|&l| l == card.value).unwrap();
        assert_eq!(card.rank as usize, position + 1);
    }
}

#[test]
fn shuffle_preserves_the_multiset_of_cards() {
    let mut deck = Deck::ordered(3);
    let before: HashSet<Card> = deck.cards().iter().copied().collect();

    deck.shuffle();

    assert_eq!(deck.len(), DECK_SIZE);
    let after: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(before, after);
    assert_ne!(deck.cards(), Deck::ordered(3).cards());
}

#[test]
fn same_seed_shuffles_identically() {
    assert_eq!(Deck::new(99).cards(), Deck::new(99).cards());
}

#[test]
fn draw_boundary_on_a_full_deck() {
    let mut deck = Deck::new(1);

    // 26 drawn would not leave strictly more than drawn.
    assert!(deck.draw(26).is_empty());
    assert_eq!(deck.len(), 52);

    assert!(deck.draw(0).is_empty());
    assert_eq!(deck.len(), 52);

    let hand = deck.draw(25);
    assert_eq!(hand.len(), 25);
    assert_eq!(deck.len(), 27);
}

#[test]
fn draw_removes_from_the_front_in_order() {
    let mut deck = Deck::ordered(1);
    let expected: Vec<Card> = deck.cards()[..3].to_vec();
    let remaining_front = deck.cards()[3];

    let hand = deck.draw(3);

    assert_eq!(hand, expected);
    assert_eq!(deck.cards()[0], remaining_front);
    assert_eq!(deck.len(), 49);
}

#[test]
fn drawn_cards_are_never_reintroduced() {
    let mut deck = Deck::new(5);
    let hand: HashSet<Card> = deck.draw(10).into_iter().collect();

    deck.shuffle();
    for card in deck.cards() {
        assert!(!hand.contains(card));
    }
}

#[test]
fn sort_orders_by_descending_rank_stably() {
    let mut cards = vec![
        card(0, "4", 'H'),
        card(1, "2", 'C'),
        card(2, "A", 'S'),
        card(3, "8", 'D'),
        card(4, "8", 'S'),
    ];

    sort_descending(&mut cards);

    let ranks: Vec<u8> = cards.iter().map(|card| card.rank).collect();
    assert_eq!(ranks, [13, 7, 7, 3, 1]);
    // Stable: the diamond 8 preceded the spade 8 in the input.
    assert_eq!(cards[1].suit.value, 'D');
    assert_eq!(cards[2].suit.value, 'S');
}

#[test]
fn tokens_round_trip_for_both_card_part_lengths() {
    let cards = vec![card(23, "A", 'S'), card(7, "10", 'H'), card(0, "2", 'C')];

    let tokens = stringify(&cards);
    assert_eq!(tokens, ["23#AS", "7#10H", "0#2C"]);

    let parsed = parse(&tokens).unwrap();
    assert_eq!(parsed, cards);
    assert_eq!(parsed[0].rank, 13);
    assert_eq!(parsed[1].rank, 9);
}

#[test]
fn a_full_deck_round_trips() {
    let mut deck = Deck::new(11);
    let hand = deck.draw(20);
    assert_eq!(parse(&stringify(&hand)).unwrap(), hand);
}

#[test]
fn strict_parse_rejects_malformed_tokens() {
    assert_eq!(
        Card::from_token("23AS").unwrap_err(),
        ParseError::MissingSeparator
    );
    assert_eq!(Card::from_token("x#AS").unwrap_err(), ParseError::InvalidId);
    assert_eq!(Card::from_token("#AS").unwrap_err(), ParseError::InvalidId);
    assert_eq!(
        Card::from_token("23#ZS").unwrap_err(),
        ParseError::UnknownValue
    );
    assert_eq!(
        Card::from_token("23#S").unwrap_err(),
        ParseError::UnknownValue
    );
    assert_eq!(
        Card::from_token("23#AX").unwrap_err(),
        ParseError::UnknownSuit
    );

    assert_eq!(parse(["23#AS", "24#AX"]).unwrap_err(), ParseError::UnknownSuit);
}

#[test]
fn lenient_parse_leaves_unresolved_fields_empty() {
    let cards = parse_lenient(["23#AS", "23#AX", "x#ZH", "garbage"]);

    assert_eq!(
        cards[0],
        PartialCard {
            id: Some(23),
            value: Some("A".into()),
            rank: Some(13),
            suit: catalog::suit_of('S'),
        }
    );

    // Unknown suit keeps everything else.
    assert_eq!(cards[1].id, Some(23));
    assert_eq!(cards[1].rank, Some(13));
    assert_eq!(cards[1].suit, None);
    assert!(!cards[1].validate());

    // Bad id and unknown label, suit still resolves.
    assert_eq!(cards[2].id, None);
    assert_eq!(cards[2].value.as_deref(), Some("Z"));
    assert_eq!(cards[2].rank, None);
    assert_eq!(cards[2].suit, catalog::suit_of('H'));

    assert_eq!(cards[3], PartialCard::default());
}

#[test]
fn promoting_a_partial_card_rederives_rank() {
    let mut partial = PartialCard::from(card(23, "A", 'S'));
    partial.rank = Some(1);

    let promoted = Card::try_from(partial.clone()).unwrap();
    assert_eq!(promoted, card(23, "A", 'S'));
    assert_eq!(promoted.rank, 13);

    partial.suit = None;
    assert_eq!(
        Card::try_from(partial).unwrap_err(),
        ParseError::IncompleteCard
    );
}

#[test]
fn validate_is_a_shallow_shape_check() {
    let mut bogus = PartialCard {
        id: Some(1),
        value: Some("Z".into()),
        rank: Some(99),
        suit: catalog::suit_of('S'),
    };
    assert!(bogus.validate());

    for clear in [
        (|c: &mut PartialCard| c.id = None) as fn(&mut PartialCard),
        |c| c.value = None,
        |c| c.rank = None,
        |c| c.suit = None,
    ] {
        let mut missing = bogus.clone();
        clear(&mut missing);
        assert!(!missing.validate());
    }

    // Bogus but complete cards describe as far as the lookups go.
    assert_eq!(bogus.card_text(), "");
    assert_eq!(bogus.suit_text(), "Spades");
    bogus.id = None;
    assert_eq!(bogus.suit_text(), "");
}

#[test]
fn describes_a_king_of_hearts() {
    let king = PartialCard::from(card(30, "K", 'H'));
    assert_eq!(king.card_text(), "King");
    assert_eq!(king.suit_text(), "Hearts");
    assert_eq!(king.describe(), "King of Hearts");

    assert_eq!(PartialCard::default().describe(), "");
}

#[test]
fn display_renders_label_and_glyph() {
    assert_eq!(card(23, "A", 'S').to_string(), "A♠");
    assert_eq!(card(7, "10", 'H').to_string(), "10♥");
    assert_eq!(catalog::suit_of('D').unwrap().to_string(), "♦");
}
