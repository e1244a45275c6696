//! Console seat, printing and setup tests.

use bjround::console::{ConsoleSink, Human, SetupError, read_ai_seat, read_human_seat};
use bjround::{
    Action, AiKind, BetDecision, BetView, Card, CardCounter, ConfigError, DecisionError,
    DecisionStrategy, Dialog, Event, EventSink, Hand, HandOutcome, HandView, Rank, Record,
    SeatConfig, Stage, Suit, TableView,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn human(input: &'static str) -> Human<&'static [u8], Vec<u8>> {
    Human::new(input.as_bytes(), Vec::new())
}

fn written(seat: &Human<&'static [u8], Vec<u8>>) -> String {
    String::from_utf8_lossy(seat.output()).into_owned()
}

fn bet_view() -> BetView<'static> {
    BetView {
        player: "Ann",
        bankroll: 20,
        last_bet: 5,
        default_bet: 1,
        counter: CardCounter::with_running_count(3),
    }
}

fn hand(cards: &[Card]) -> Hand {
    let mut hand = Hand::new(1);
    hand.add_bet(1);
    for &card in cards {
        hand.add_card(card);
    }
    hand
}

#[test]
fn empty_answers_repeat_the_last_bet() {
    let mut seat = human("\n\n");
    assert_eq!(seat.place_bet(&bet_view()), Ok(BetDecision::Bet(5)));
    let output = written(&seat);
    assert!(output.contains("Ann has $20 enter (B)et or (Q)uit [b]: "));
    assert!(output.contains("Ann has $20 place your bet ($1 to $20 [$5]): $"));
}

#[test]
fn bets_out_of_range_are_asked_again() {
    let mut seat = human("B\n0\n21\nlots\n12\n");
    assert_eq!(seat.place_bet(&bet_view()), Ok(BetDecision::Bet(12)));
    let output = written(&seat);
    assert_eq!(output.matches("Bet must be a whole number from 1 to 20").count(), 3);
}

#[test]
fn quit_and_count() {
    let mut seat = human("c\nq\n");
    assert_eq!(seat.place_bet(&bet_view()), Ok(BetDecision::Quit));
    assert!(written(&seat).contains("Count: 3, True Count: 0"));
}

#[test]
fn closed_input_is_reported() {
    let mut seat = human("b\n");
    assert_eq!(seat.place_bet(&bet_view()), Err(DecisionError::InputClosed));
}

#[test]
fn actions_must_be_offered() {
    let played = hand(&[card(Rank::Ten, Suit::Club), card(Rank::Six, Suit::Heart)]);
    let view = TableView {
        player: "Ann",
        hand: &played,
        dealer_up_card: card(Rank::Ten, Suit::Spade),
        bankroll: 20,
        counter: CardCounter::new(),
        dialog: Dialog::HitOrStand,
    };

    let mut seat = human("d\np\nx\nS\n");
    assert_eq!(seat.choose_action(&view), Ok(Action::Stand));
    let output = written(&seat);
    assert_eq!(
        output
            .matches("Ann please choose (H)it, (S)tand or (?)Hint: ")
            .count(),
        4
    );
}

#[test]
fn hint_shows_the_advice_without_acting() {
    let played = hand(&[card(Rank::Eight, Suit::Club), card(Rank::Eight, Suit::Heart)]);
    let view = TableView {
        player: "Ann",
        hand: &played,
        dealer_up_card: card(Rank::Ten, Suit::Spade),
        bankroll: 20,
        counter: CardCounter::new(),
        dialog: Dialog::HitSplitDoubleStand,
    };

    let mut seat = human("?\nh\n");
    assert_eq!(seat.choose_action(&view), Ok(Action::Hit));
    assert!(written(&seat).contains("The suggested action is to Split"));
}

#[test]
fn sink_prints_banners_and_hands() {
    let mut sink = ConsoleSink::new(Vec::new());
    sink.emit(Event::Stage(Stage::Betting));
    sink.emit(Event::PlayerTurn {
        name: "Ann".into(),
    });
    sink.emit(Event::Hand(HandView {
        name: "Ann".into(),
        hand_id: Some(2),
        cards: vec![card(Rank::Ace, Suit::Heart), card(Rank::Nine, Suit::Club)],
        score: 20,
        hide_last: false,
    }));
    sink.emit(Event::Hand(HandView {
        name: "Bob".into(),
        hand_id: None,
        cards: vec![
            card(Rank::Five, Suit::Heart),
            card(Rank::Five, Suit::Club),
            card(Rank::Two, Suit::Club),
        ],
        score: 12,
        hide_last: true,
    }));
    sink.emit(Event::Settled {
        name: "Ann".into(),
        outcome: HandOutcome::Win,
        payout: 1,
        cash: 101,
    });
    sink.emit(Event::Settled {
        name: "Bob".into(),
        outcome: HandOutcome::Tie,
        payout: 0,
        cash: 100,
    });
    sink.emit(Event::Left {
        name: "Bob".into(),
        record: Record {
            win: 0,
            lose: 2,
            tie: 1,
            hands_played: 3,
        },
    });
    sink.emit(Event::TableEmpty);

    let output = String::from_utf8(sink.into_inner()).unwrap();
    assert!(output.contains("********************\n* PLACE YOUR BETS! *\n********************"));
    assert!(output.contains("* ANN MAKE YOUR CHOICE *"));
    assert!(output.contains("Ann hand #2 has 20: [Ace of Hearts][Nine of Clubs]"));
    assert!(output.contains("Bob has ???: [Five of Hearts][Five of Clubs][???]"));
    assert!(output.contains("***** Player wins! *****\nAnn won $1.  Cash available: $101"));
    assert!(output.contains("Bob push.  Cash available: $100"));
    assert!(output.contains("Player won: 0, lost: 2 and tied: 1"));
    assert!(output.ends_with("No players left in game.  Exiting...\n"));
}

#[test]
fn human_seat_defaults_its_name() {
    let mut input: &[u8] = b"\nZoe\n";
    let mut output = Vec::new();
    assert_eq!(
        read_human_seat(&mut input, &mut output, 0).unwrap(),
        SeatConfig::Human {
            name: "Player1".into()
        }
    );
    assert_eq!(
        read_human_seat(&mut input, &mut output, 1).unwrap(),
        SeatConfig::Human { name: "Zoe".into() }
    );
    assert!(String::from_utf8_lossy(&output).contains("Player1 enter your name [Player1]: "));
}

#[test]
fn ai_seat_asks_kind_again_until_known() {
    let mut input: &[u8] = b"\nq\ns\n7\n";
    let mut output = Vec::new();
    let seat = read_ai_seat(&mut input, &mut output, 0).unwrap();
    assert_eq!(
        seat,
        SeatConfig::Ai {
            name: "AiPlayer1".into(),
            kind: AiKind::StandOnly,
            rounds: 7,
        }
    );
    assert!(seat.ai_strategy().is_some());
    assert!(String::from_utf8_lossy(&output).contains("unknown AI type: \"q\""));
}

#[test]
fn ai_seat_with_bad_rounds_is_skipped() {
    let mut input: &[u8] = b"Robo\nb\nten\n";
    let mut output = Vec::new();
    let err = read_ai_seat(&mut input, &mut output, 0).unwrap_err();
    assert!(matches!(
        err,
        SetupError::Config(ConfigError::InvalidRounds(ref rounds)) if rounds == "ten"
    ));
}
