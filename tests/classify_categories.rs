use poker_hand::cards::{Card, Rank, Suit};
use poker_hand::evaluator::{classify, Category};
use poker_hand::hand::Hand;

fn classify_str(s: &str) -> (&'static str, u8) {
    let hand: Hand = s.parse().expect("valid hand");
    classify(&hand).as_pair()
}

#[test]
fn category_royal_flush() {
    assert_eq!(classify_str("A♥ K♥ Q♥ J♥ 10♥"), ("Royal Flush", 10));
}

#[test]
fn category_straight_flush() {
    assert_eq!(classify_str("9♠ 8♠ 7♠ 6♠ 5♠"), ("Straight Flush", 9));
}

#[test]
fn category_four_of_a_kind() {
    assert_eq!(classify_str("7♥ 7♦ 7♠ 7♣ 9♥"), ("Four of a Kind", 8));
}

#[test]
fn category_full_house() {
    assert_eq!(classify_str("10♥ 10♦ 10♠ 4♣ 4♥"), ("Full House", 7));
}

#[test]
fn category_flush() {
    assert_eq!(classify_str("A♣ 10♣ 7♣ 6♣ 2♣"), ("Flush", 6));
}

#[test]
fn category_straight() {
    assert_eq!(classify_str("9♥ 8♣ 7♠ 6♦ 5♥"), ("Straight", 5));
}

#[test]
fn category_straight_ace_low() {
    assert_eq!(classify_str("A♠ 2♥ 3♦ 4♣ 5♠"), ("Straight", 5));
}

#[test]
fn no_wrap_around_straight() {
    assert_eq!(classify_str("K♠ A♥ 2♦ 3♣ 4♠"), ("High Card", 1));
}

#[test]
fn category_three_of_a_kind() {
    assert_eq!(classify_str("8♥ 8♦ 8♠ K♣ 3♦"), ("Three of a Kind", 4));
}

#[test]
fn category_two_pair() {
    assert_eq!(classify_str("J♥ J♣ 4♠ 4♥ A♦"), ("Two Pair", 3));
}

#[test]
fn category_one_pair() {
    assert_eq!(classify_str("10♥ 10♣ K♠ 4♥ 3♦"), ("One Pair", 2));
}

#[test]
fn category_high_card() {
    assert_eq!(classify_str("2♥ 5♦ 7♣ 9♣ J♥"), ("High Card", 1));
}

#[test]
fn card_order_does_not_matter() {
    assert_eq!(classify_str("4♥ J♣ A♦ 4♠ J♥"), ("Two Pair", 3));
    assert_eq!(classify_str("10♥ J♥ A♥ Q♥ K♥"), ("Royal Flush", 10));
    assert_eq!(classify_str("5♠ 4♣ 3♦ 2♥ A♠"), ("Straight", 5));
}

#[test]
fn hand_classify_matches_free_function() {
    let hand = Hand::new([
        Card::new(Rank::Queen, Suit::Hearts),
        Card::new(Rank::Queen, Suit::Diamonds),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::Two, Suit::Clubs),
        Card::new(Rank::Two, Suit::Hearts),
    ]);
    assert_eq!(hand.classify(), classify(&hand));
    assert_eq!(hand.classify().category, Category::FullHouse);
    assert_eq!(hand.classify().to_string(), "Full House (7)");
}
