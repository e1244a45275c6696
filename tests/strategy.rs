//! Basic-strategy advisor, dialog and computer seat tests.

use bjround::{
    Action, AiKind, BasicStrategy, BetDecision, BetView, Card, CardCounter, ConfigError,
    DecisionStrategy, Dialog, Hand, Rank, StandOnly, Suit, TableView, advise, advise_offered,
    dealer_up_card_value, parse_rounds,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hand(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new(1);
    hand.add_bet(1);
    for (index, &rank) in ranks.iter().enumerate() {
        let suit = Suit::ALL[index % Suit::ALL.len()];
        hand.add_card(card(rank, suit));
    }
    hand
}

fn up(rank: Rank) -> Card {
    card(rank, Suit::Spade)
}

fn bet_view(bankroll: usize) -> BetView<'static> {
    BetView {
        player: "AiPlayer1",
        bankroll,
        last_bet: 1,
        default_bet: 1,
        counter: CardCounter::new(),
    }
}

#[test]
fn dealer_up_card_counts_ace_high() {
    assert_eq!(dealer_up_card_value(&up(Rank::Ace)), 11);
    assert_eq!(dealer_up_card_value(&up(Rank::King)), 10);
    assert_eq!(dealer_up_card_value(&up(Rank::Six)), 6);
}

#[test]
fn always_split_aces_and_eights() {
    for dealer in [Rank::Two, Rank::Seven, Rank::Ten, Rank::Ace] {
        assert_eq!(advise(&hand(&[Rank::Ace, Rank::Ace]), &up(dealer), 10, 1), Action::Split);
        assert_eq!(advise(&hand(&[Rank::Eight, Rank::Eight]), &up(dealer), 10, 1), Action::Split);
    }
}

#[test]
fn small_pairs_split_against_weak_dealer() {
    assert_eq!(advise(&hand(&[Rank::Six, Rank::Six]), &up(Rank::Five), 10, 1), Action::Split);
    assert_eq!(advise(&hand(&[Rank::Nine, Rank::Nine]), &up(Rank::Six), 10, 1), Action::Split);
    assert_eq!(advise(&hand(&[Rank::Two, Rank::Two]), &up(Rank::Two), 10, 1), Action::Split);

    // fours and fives play as totals
    assert_eq!(advise(&hand(&[Rank::Five, Rank::Five]), &up(Rank::Six), 10, 1), Action::DoubleDown);
    assert_eq!(advise(&hand(&[Rank::Four, Rank::Four]), &up(Rank::Six), 10, 1), Action::Hit);

    // tens never split
    assert_eq!(advise(&hand(&[Rank::Ten, Rank::King]), &up(Rank::Six), 10, 1), Action::Stand);

    // strong dealer: play the total
    assert_eq!(advise(&hand(&[Rank::Six, Rank::Six]), &up(Rank::Ten), 10, 1), Action::Hit);
}

#[test]
fn doubles_on_ten_and_eleven_below_the_dealer() {
    assert_eq!(advise(&hand(&[Rank::Six, Rank::Five]), &up(Rank::Ten), 10, 1), Action::DoubleDown);
    assert_eq!(advise(&hand(&[Rank::Six, Rank::Four]), &up(Rank::Nine), 10, 1), Action::DoubleDown);
    assert_eq!(advise(&hand(&[Rank::Six, Rank::Four]), &up(Rank::Ten), 10, 1), Action::Hit);
    assert_eq!(advise(&hand(&[Rank::Six, Rank::Five]), &up(Rank::Ace), 10, 1), Action::Hit);

    // cannot cover the double
    assert_eq!(advise(&hand(&[Rank::Six, Rank::Five]), &up(Rank::Five), 1, 1), Action::Hit);
}

#[test]
fn doubles_nine_against_three_to_six() {
    for dealer in [Rank::Three, Rank::Four, Rank::Five, Rank::Six] {
        assert_eq!(advise(&hand(&[Rank::Five, Rank::Four]), &up(dealer), 10, 1), Action::DoubleDown);
    }
    assert_eq!(advise(&hand(&[Rank::Five, Rank::Four]), &up(Rank::Two), 10, 1), Action::Hit);
    assert_eq!(advise(&hand(&[Rank::Five, Rank::Four]), &up(Rank::Seven), 10, 1), Action::Hit);
}

#[test]
fn low_totals_hit() {
    assert_eq!(advise(&hand(&[Rank::Three, Rank::Five]), &up(Rank::Six), 10, 1), Action::Hit);
}

#[test]
fn soft_hands() {
    // soft 13 to 15 hit
    assert_eq!(advise(&hand(&[Rank::Ace, Rank::Four]), &up(Rank::Five), 10, 1), Action::Hit);
    // soft 19 and up stand
    assert_eq!(advise(&hand(&[Rank::Ace, Rank::Eight]), &up(Rank::Ten), 10, 1), Action::Stand);
    // soft 16 to 18 against a strong dealer hit
    assert_eq!(advise(&hand(&[Rank::Ace, Rank::Seven]), &up(Rank::Nine), 10, 1), Action::Hit);
    // soft 16 to 18 against a weak dealer double when covered
    assert_eq!(advise(&hand(&[Rank::Ace, Rank::Six]), &up(Rank::Four), 10, 1), Action::DoubleDown);
    assert_eq!(advise(&hand(&[Rank::Ace, Rank::Six]), &up(Rank::Four), 1, 1), Action::Hit);
}

#[test]
fn hard_totals() {
    assert_eq!(advise(&hand(&[Rank::Ten, Rank::Seven]), &up(Rank::Ace), 10, 1), Action::Stand);
    assert_eq!(advise(&hand(&[Rank::Ten, Rank::Two]), &up(Rank::Three), 10, 1), Action::Hit);
    assert_eq!(advise(&hand(&[Rank::Ten, Rank::Two]), &up(Rank::Four), 10, 1), Action::Stand);
    assert_eq!(advise(&hand(&[Rank::Ten, Rank::Six]), &up(Rank::Six), 10, 1), Action::Stand);
    assert_eq!(advise(&hand(&[Rank::Ten, Rank::Six]), &up(Rank::Seven), 10, 1), Action::Hit);

    // a three-card soft total is played as hard
    assert_eq!(
        advise(&hand(&[Rank::Ace, Rank::Two, Rank::Three]), &up(Rank::Nine), 10, 1),
        Action::Hit
    );
}

#[test]
fn dialog_for_hand() {
    let pair = hand(&[Rank::Eight, Rank::Eight]);
    assert_eq!(Dialog::for_hand(&pair, 10), Dialog::HitSplitDoubleStand);
    assert_eq!(Dialog::for_hand(&pair, 0), Dialog::HitOrStand);

    let plain = hand(&[Rank::Eight, Rank::Three]);
    assert_eq!(Dialog::for_hand(&plain, 10), Dialog::HitDoubleStand);

    let three = hand(&[Rank::Two, Rank::Three, Rank::Four]);
    assert_eq!(Dialog::for_hand(&three, 10), Dialog::HitOrStand);

    assert!(Dialog::HitOrStand.offers(Action::Hit));
    assert!(!Dialog::HitOrStand.offers(Action::DoubleDown));
    assert!(!Dialog::HitDoubleStand.offers(Action::Split));
    assert!(Dialog::HitSplitDoubleStand.offers(Action::Split));
    assert!(!Dialog::BetOrQuit.offers(Action::Stand));
}

#[test]
fn advice_respects_the_dialog() {
    let eights = hand(&[Rank::Eight, Rank::Eight]);
    let view = TableView {
        player: "AiPlayer1",
        hand: &eights,
        dealer_up_card: up(Rank::Ten),
        bankroll: 0,
        counter: CardCounter::new(),
        dialog: Dialog::for_hand(&eights, 0),
    };
    // no split on offer: 16 against a ten hits
    assert_eq!(advise_offered(&view), Action::Hit);

    let eleven = hand(&[Rank::Six, Rank::Five]);
    let view = TableView {
        hand: &eleven,
        dialog: Dialog::HitOrStand,
        bankroll: 10,
        ..view
    };
    assert_eq!(advise_offered(&view), Action::Hit);
}

#[test]
fn computer_seats_bet_the_default_for_their_rounds() {
    let mut basic = BasicStrategy::new(2);
    assert_eq!(basic.place_bet(&bet_view(100)), Ok(BetDecision::Bet(1)));
    assert_eq!(basic.place_bet(&bet_view(100)), Ok(BetDecision::Bet(1)));
    assert_eq!(basic.place_bet(&bet_view(100)), Ok(BetDecision::Quit));

    let mut broke = StandOnly::new(10);
    assert_eq!(broke.place_bet(&bet_view(0)), Ok(BetDecision::Quit));
}

#[test]
fn stand_only_always_stands() {
    let pair = hand(&[Rank::Two, Rank::Two]);
    let view = TableView {
        player: "AiPlayer1",
        hand: &pair,
        dealer_up_card: up(Rank::Six),
        bankroll: 10,
        counter: CardCounter::new(),
        dialog: Dialog::HitSplitDoubleStand,
    };
    assert_eq!(StandOnly::new(1).choose_action(&view), Ok(Action::Stand));
    assert_eq!(BasicStrategy::new(1).choose_action(&view), Ok(Action::Split));
}

#[test]
fn ai_kind_parses_console_letters() {
    assert_eq!("b".parse(), Ok(AiKind::Basic));
    assert_eq!("".parse(), Ok(AiKind::Basic));
    assert_eq!("S".parse(), Ok(AiKind::StandOnly));
    assert_eq!("x".parse(), Ok(AiKind::Custom));
    assert_eq!(
        "z".parse::<AiKind>(),
        Err(ConfigError::UnknownAiKind("z".into()))
    );
}

#[test]
fn rounds_must_be_numeric() {
    assert_eq!(parse_rounds("12"), Ok(12));
    assert_eq!(
        parse_rounds("many"),
        Err(ConfigError::InvalidRounds("many".into()))
    );
    assert!(parse_rounds("-3").is_err());
}
