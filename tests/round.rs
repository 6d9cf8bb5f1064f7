//! Round driver integration tests.

use bjadvisor::{
    Action, DealerStand, Hand, Outcome, PlayerBustRule, Rank, Round, RoundError, RoundState,
    TableOptions, parse_hand,
};

fn start(player: &str, up: Rank, options: TableOptions) -> Round {
    let hand: Hand = parse_hand(player).unwrap().into();
    Round::new(hand, up, options).unwrap()
}

fn card(symbol: &str) -> Rank {
    symbol.parse().unwrap()
}

#[test]
fn new_round_requires_two_cards() {
    let hand: Hand = parse_hand("K").unwrap().into();
    assert_eq!(
        Round::new(hand, Rank::Six, TableOptions::default()).unwrap_err(),
        RoundError::IncompleteHand
    );
}

#[test]
fn stand_then_dealer_draws_to_seventeen() {
    let mut round = start("K 9", Rank::Two, TableOptions::default());
    assert_eq!(round.state(), RoundState::PlayerTurn);

    assert_eq!(round.advise().unwrap(), Action::Stand);
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert!(round.dealer_needs_card());

    assert_eq!(round.dealer_draw(card("10")).unwrap(), 12);
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert_eq!(round.dealer_draw(card("5")).unwrap(), 17);
    assert_eq!(round.state(), RoundState::RoundOver);

    let result = round.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(result.player_value, 19);
    assert_eq!(result.dealer_value, 17);
    assert!(!result.dealer_bust);
}

#[test]
fn dealer_standing_on_eighteen_draws_on_seventeen() {
    let options = TableOptions::default().with_dealer_stand(DealerStand::On18);
    let mut round = start("10 8", Rank::Ace, options);

    assert_eq!(round.advise().unwrap(), Action::Stand);
    assert_eq!(round.dealer_draw(card("6")).unwrap(), 17);
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert_eq!(round.dealer_draw(card("K")).unwrap(), 17);
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert_eq!(round.dealer_draw(card("A")).unwrap(), 18);
    assert_eq!(round.state(), RoundState::RoundOver);

    assert_eq!(round.showdown().unwrap().outcome, Outcome::Tie);
}

#[test]
fn hit_until_stand() {
    let mut round = start("10 2", Rank::Nine, TableOptions::default());

    assert_eq!(round.advise().unwrap(), Action::Hit);
    assert_eq!(round.state(), RoundState::PlayerDraw);
    assert_eq!(round.player_draw(card("3")).unwrap(), 15);
    assert_eq!(round.state(), RoundState::PlayerTurn);

    assert_eq!(round.advise().unwrap(), Action::Hit);
    assert_eq!(round.player_draw(card("4")).unwrap(), 19);
    assert_eq!(round.advise().unwrap(), Action::Stand);
    assert_eq!(round.decisions(), 3);
    assert_eq!(round.state(), RoundState::DealerTurn);

    round.dealer_draw(card("A")).unwrap();
    let result = round.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.dealer_value, 20);
}

#[test]
fn busted_player_still_faces_dealer_completion() {
    let mut round = start("10 6", Rank::Ten, TableOptions::default());

    assert_eq!(round.advise().unwrap(), Action::Hit);
    assert_eq!(round.player_draw(card("9")).unwrap(), 25);
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert_eq!(round.dealer_draw(card("8")).unwrap(), 18);
    assert_eq!(round.state(), RoundState::RoundOver);

    let result = round.showdown().unwrap();
    assert!(result.player_bust);
    assert_eq!(result.player_value, 25);
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.outcome, Outcome::PlayerWins);
}

#[test]
fn busted_player_beats_busted_dealer_by_comparison() {
    let mut round = start("10 6", Rank::Ten, TableOptions::default());

    round.advise().unwrap();
    round.player_draw(card("K")).unwrap();
    round.dealer_draw(card("6")).unwrap();
    assert_eq!(round.dealer_draw(card("Q")).unwrap(), 26);

    let result = round.showdown().unwrap();
    assert!(result.player_bust && result.dealer_bust);
    assert_eq!(result.outcome, Outcome::PlayerWins);
}

#[test]
fn busted_player_loses_at_once_when_configured() {
    let options = TableOptions::default().with_player_bust(PlayerBustRule::Loses);
    let mut round = start("10 6", Rank::Ten, options);

    assert_eq!(round.advise().unwrap(), Action::Hit);
    assert_eq!(round.player_draw(card("K")).unwrap(), 26);
    assert_eq!(round.state(), RoundState::RoundOver);
    assert_eq!(
        round.dealer_draw(card("5")).unwrap_err(),
        RoundError::InvalidState
    );

    let result = round.showdown().unwrap();
    assert!(result.player_bust);
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(round.dealer_hand().len(), 1);
}

#[test]
fn double_down_takes_exactly_one_card() {
    let mut round = start("5 6", Rank::Four, TableOptions::default());

    assert!(round.can_double());
    assert_eq!(round.advise().unwrap(), Action::DoubleDown);
    assert_eq!(round.state(), RoundState::DoubleDraw);
    assert!(round.state().awaits_player_card());

    assert_eq!(round.player_draw(card("2")).unwrap(), 13);
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert!(round.is_doubled());

    round.dealer_draw(card("10")).unwrap();
    round.dealer_draw(card("9")).unwrap();
    let result = round.showdown().unwrap();
    assert!(result.doubled);
    assert!(result.dealer_bust);
    assert_eq!(result.outcome, Outcome::PlayerWins);
}

#[test]
fn doubling_is_only_offered_on_first_decision() {
    let mut round = start("2 3", Rank::Five, TableOptions::default());

    assert_eq!(round.advise().unwrap(), Action::Hit);
    round.player_draw(card("4")).unwrap();
    assert!(!round.can_double());
    // 2 3 4 is a hard 9; two-card rules are out of reach anyway.
    assert_eq!(round.peek_advice().unwrap(), Action::Hit);
}

#[test]
fn table_without_double_never_doubles() {
    let options = TableOptions::default().with_double(false);
    let mut round = start("5 6", Rank::Four, options);

    assert!(!round.can_double());
    assert_eq!(round.advise().unwrap(), Action::Hit);
}

#[test]
fn split_is_announced_and_settled_as_one_hand() {
    let mut round = start("8 8", Rank::Ten, TableOptions::default());

    assert_eq!(round.advise().unwrap(), Action::Split);
    assert!(round.is_split());
    assert_eq!(round.state(), RoundState::DealerTurn);

    round.dealer_draw(card("7")).unwrap();
    let result = round.showdown().unwrap();
    assert!(result.split);
    assert_eq!(result.player_value, 16);
    assert_eq!(result.outcome, Outcome::DealerWins);
}

#[test]
fn wrong_state_calls_are_rejected() {
    let mut round = start("K 9", Rank::Two, TableOptions::default());

    assert_eq!(
        round.player_draw(card("2")).unwrap_err(),
        RoundError::InvalidState
    );
    assert_eq!(
        round.dealer_draw(card("2")).unwrap_err(),
        RoundError::InvalidState
    );
    assert_eq!(round.showdown().unwrap_err(), RoundError::InvalidState);

    round.advise().unwrap();
    assert_eq!(round.advise().unwrap_err(), RoundError::InvalidState);
    assert_eq!(round.peek_advice().unwrap_err(), RoundError::InvalidState);
}

#[test]
fn outcome_resolution() {
    let compare = PlayerBustRule::CompareTotals;
    assert_eq!(Outcome::resolve(18, 22, compare), Outcome::PlayerWins);
    assert_eq!(Outcome::resolve(20, 19, compare), Outcome::PlayerWins);
    assert_eq!(Outcome::resolve(17, 19, compare), Outcome::DealerWins);
    assert_eq!(Outcome::resolve(25, 18, compare), Outcome::PlayerWins);
    assert_eq!(Outcome::resolve(22, 26, compare), Outcome::PlayerWins);
    assert_eq!(Outcome::resolve(21, 21, compare), Outcome::Tie);

    let loses = PlayerBustRule::Loses;
    assert_eq!(Outcome::resolve(25, 18, loses), Outcome::DealerWins);
    assert_eq!(Outcome::resolve(22, 26, loses), Outcome::DealerWins);
    assert_eq!(Outcome::resolve(18, 22, loses), Outcome::PlayerWins);
    assert_eq!(Outcome::Tie.to_string(), "It's a tie!");
}
