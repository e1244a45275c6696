//! Card, hand and bankroll tests.

use bjround::{
    Card, DealerHand, Hand, HandOutcome, HandStatus, Player, Rank, StandOnly, Suit, min_score,
    score,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new(1);
    for &card in cards {
        hand.add_card(card);
    }
    hand
}

fn seated(cash: usize) -> Player {
    Player::new("Tester", cash, Box::new(StandOnly::new(1)))
}

#[test]
fn card_display_and_points() {
    let card = card(Rank::Ace, Suit::Club);
    assert_eq!(card.to_string(), "Ace of Clubs");
    assert!(card.is_ace());

    assert_eq!(Rank::King.points(), 10);
    assert_eq!(Rank::Ten.points(), 10);
    assert_eq!(Rank::Seven.points(), 7);
    assert_eq!(Rank::Ace.points(), 1);
    assert_eq!(Rank::Queen.ordinal(), 12);
}

#[test]
fn ace_and_king_is_a_blackjack() {
    let hand = hand_of(&[card(Rank::Ace, Suit::Heart), card(Rank::King, Suit::Spade)]);
    assert_eq!(hand.score(), 21);
    assert_eq!(hand.len(), 2);
    assert_eq!(hand.status(), HandStatus::Blackjack);
    assert!(hand.is_soft());
}

#[test]
fn only_one_ace_is_promoted() {
    let cards = [
        card(Rank::Ace, Suit::Heart),
        card(Rank::Ace, Suit::Club),
        card(Rank::Nine, Suit::Spade),
    ];
    assert_eq!(min_score(&cards), 11);
    assert_eq!(score(&cards), 21);

    let hand = hand_of(&cards);
    assert_eq!(hand.status(), HandStatus::Active);
}

#[test]
fn score_stays_within_ten_of_min_score() {
    let ranks = [
        Rank::Ace,
        Rank::Two,
        Rank::Five,
        Rank::Seven,
        Rank::Ten,
        Rank::Queen,
    ];
    for first in ranks {
        for second in ranks {
            for third in ranks {
                let cards = [
                    card(first, Suit::Club),
                    card(second, Suit::Diamond),
                    card(third, Suit::Heart),
                ];
                let min = min_score(&cards);
                let value = score(&cards);
                assert!(value >= min && value <= min + 10);
                if value > 21 {
                    assert_eq!(value, min, "a bust hand counts every ace as one");
                }
            }
        }
    }
}

#[test]
fn twenty_one_built_later_is_not_a_blackjack() {
    let hand = hand_of(&[
        card(Rank::Five, Suit::Heart),
        card(Rank::Six, Suit::Heart),
        card(Rank::Ten, Suit::Club),
    ]);
    assert_eq!(hand.score(), 21);
    assert_eq!(hand.status(), HandStatus::Active);
}

#[test]
fn hand_busts_over_twenty_one() {
    let hand = hand_of(&[
        card(Rank::Ten, Suit::Heart),
        card(Rank::Nine, Suit::Spade),
        card(Rank::Three, Suit::Diamond),
    ]);
    assert_eq!(hand.score(), 22);
    assert_eq!(hand.status(), HandStatus::Bust);
    assert!(hand.status().is_terminal());
}

#[test]
fn split_hand_with_two_card_twenty_one_is_blackjack() {
    let mut hand = Hand::from_split(2, card(Rank::Ace, Suit::Heart), 5);
    hand.add_card(card(Rank::King, Suit::Club));
    assert_eq!(hand.score(), 21);
    assert_eq!(hand.status(), HandStatus::Blackjack);
    assert_eq!(hand.bet(), 5);
    assert!(hand.is_from_split());
}

#[test]
fn pair_needs_exactly_two_cards_of_one_rank() {
    let pair = hand_of(&[card(Rank::Six, Suit::Heart), card(Rank::Six, Suit::Club)]);
    assert!(pair.is_pair());
    assert_eq!(pair.pair_rank(), Some(Rank::Six));

    let faces = hand_of(&[card(Rank::Jack, Suit::Heart), card(Rank::King, Suit::Club)]);
    assert!(!faces.is_pair());

    let three = hand_of(&[
        card(Rank::Two, Suit::Heart),
        card(Rank::Two, Suit::Club),
        card(Rank::Two, Suit::Spade),
    ]);
    assert!(!three.is_pair());
}

#[test]
fn take_split_card_only_splits_pairs() {
    let mut pair = hand_of(&[card(Rank::Six, Suit::Heart), card(Rank::Six, Suit::Club)]);
    assert_eq!(pair.take_split_card(), Some(card(Rank::Six, Suit::Club)));
    assert_eq!(pair.cards(), &[card(Rank::Six, Suit::Heart)]);
    assert!(pair.is_from_split());

    let mut mixed = hand_of(&[card(Rank::Six, Suit::Heart), card(Rank::Seven, Suit::Club)]);
    assert_eq!(mixed.take_split_card(), None);
    assert_eq!(mixed.len(), 2);
}

#[test]
fn dealer_hole_card_is_first() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Rank::Nine, Suit::Heart));
    dealer.add_card(card(Rank::Ace, Suit::Club));

    assert_eq!(dealer.hole_card(), Some(&card(Rank::Nine, Suit::Heart)));
    assert_eq!(dealer.up_card(), Some(&card(Rank::Ace, Suit::Club)));
    assert!(!dealer.is_hole_revealed());
    dealer.reveal_hole();
    assert!(dealer.is_hole_revealed());

    dealer.clear();
    assert!(dealer.is_empty());
    assert!(!dealer.is_hole_revealed());
}

#[test]
fn dealer_draws_on_soft_seventeen_and_stands_on_hard() {
    let mut soft = DealerHand::new();
    soft.add_card(card(Rank::Ace, Suit::Heart));
    soft.add_card(card(Rank::Six, Suit::Club));
    assert_eq!(soft.score(), 17);
    assert_eq!(soft.min_score(), 7);
    assert!(soft.must_draw());

    let mut hard = DealerHand::new();
    hard.add_card(card(Rank::Ten, Suit::Heart));
    hard.add_card(card(Rank::Seven, Suit::Club));
    assert_eq!(hard.min_score(), 17);
    assert!(!hard.must_draw());

    let mut sixteen = DealerHand::new();
    sixteen.add_card(card(Rank::Ten, Suit::Heart));
    sixteen.add_card(card(Rank::Six, Suit::Club));
    assert!(sixteen.must_draw());

    let mut soft_eighteen = DealerHand::new();
    soft_eighteen.add_card(card(Rank::Ace, Suit::Heart));
    soft_eighteen.add_card(card(Rank::Seven, Suit::Club));
    assert!(!soft_eighteen.must_draw());
}

#[test]
fn bet_leaves_the_bankroll_at_once() {
    let mut player = seated(100);
    assert!(player.place_bet(1));
    assert_eq!(player.cash(), 99);
    assert_eq!(player.hands()[0].bet(), 1);
    assert_eq!(player.last_bet(), 1);

    assert!(!seated(5).place_bet(6));
    assert!(!seated(5).place_bet(0));
}

#[test]
fn payouts_by_outcome() {
    let cases = [
        (HandOutcome::Win, 101, 1),
        (HandOutcome::Lose, 99, -1),
        (HandOutcome::Tie, 100, 0),
        (HandOutcome::Blackjack, 102, 2),
        (HandOutcome::Bust, 99, -1),
    ];

    for (outcome, cash, net) in cases {
        let mut player = seated(100);
        assert!(player.place_bet(1));
        assert_eq!(player.cash(), 99);

        player.settle_hands(|_| outcome);
        assert_eq!(player.cash(), cash, "{outcome}");
        assert_eq!(player.net(), net, "{outcome}");
        assert_eq!(player.hands()[0].outcome(), Some(outcome));
        assert_eq!(player.hands()[0].bet(), 0);
    }
}

#[test]
fn record_counts_blackjack_as_a_win() {
    let mut player = seated(100);
    for outcome in [
        HandOutcome::Blackjack,
        HandOutcome::Win,
        HandOutcome::Bust,
        HandOutcome::Tie,
    ] {
        player.reset_hands();
        assert!(player.place_bet(1));
        player.settle_hands(|_| outcome);
    }

    let record = player.record();
    assert_eq!(record.win, 2);
    assert_eq!(record.lose, 1);
    assert_eq!(record.tie, 1);
    assert_eq!(record.hands_played, 4);
    assert_eq!(
        record.to_string(),
        "************** Player Win-Lose-Tie Report **************\n\
         Player won: 2, lost: 1 and tied: 1"
    );
}

#[test]
fn broke_player_is_flagged_to_leave() {
    let mut player = seated(1);
    assert!(player.place_bet(1));
    player.settle_hands(|_| HandOutcome::Lose);
    assert_eq!(player.cash(), 0);
    assert!(player.has_quit());
}
