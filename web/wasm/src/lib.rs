use bjadvisor::{
    Action, DealerStand, Hand, NineSplitRule, Outcome, PlayerBustRule, Rank, Round, RoundResult,
    RoundState, TableOptions, parse_hand,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Returns the best total of a whitespace-separated hand such as `"K A"`.
#[wasm_bindgen]
pub fn evaluate(hand: &str) -> Result<u32, JsValue> {
    let cards = parse_hand(&hand.to_uppercase()).map_err(js_err)?;
    Ok(bjadvisor::evaluate(&cards))
}

/// Returns the recommended action label for a hand against a dealer card.
#[wasm_bindgen]
pub fn advise(hand: &str, dealer: &str, allow_double: bool) -> Result<String, JsValue> {
    let cards = parse_hand(&hand.to_uppercase()).map_err(js_err)?;
    let up = parse_card(dealer)?;
    Ok(bjadvisor::advise(&cards, up, allow_double).to_string())
}

#[wasm_bindgen]
pub struct WasmRound {
    round: Round,
}

#[wasm_bindgen]
impl WasmRound {
    /// Starts a round. `stands_on` is 17 or 18.
    #[wasm_bindgen(constructor)]
    pub fn new(
        hand: &str,
        dealer: &str,
        stands_on: u8,
        double: bool,
        strict_nines: bool,
        bust_loses: bool,
    ) -> Result<WasmRound, JsValue> {
        let cards: Hand = parse_hand(&hand.to_uppercase()).map_err(js_err)?.into();
        let up = parse_card(dealer)?;
        let options = TableOptions::default()
            .with_dealer_stand(if stands_on == 18 {
                DealerStand::On18
            } else {
                DealerStand::On17
            })
            .with_double(double)
            .with_nine_split(if strict_nines {
                NineSplitRule::StandAgainstAce
            } else {
                NineSplitRule::Observed
            })
            .with_player_bust(if bust_loses {
                PlayerBustRule::Loses
            } else {
                PlayerBustRule::CompareTotals
            });

        let round = Round::new(cards, up, options).map_err(js_err)?;
        Ok(Self { round })
    }

    pub fn advise(&mut self) -> Result<String, JsValue> {
        self.round
            .advise()
            .map(|action| action.to_string())
            .map_err(js_err)
    }

    pub fn player_draw(&mut self, card: &str) -> Result<u32, JsValue> {
        let card = parse_card(card)?;
        self.round.player_draw(card).map_err(js_err)
    }

    pub fn dealer_draw(&mut self, card: &str) -> Result<u32, JsValue> {
        let card = parse_card(card)?;
        self.round.dealer_draw(card).map_err(js_err)
    }

    pub fn showdown(&self) -> Result<JsValue, JsValue> {
        let result = self.round.showdown().map_err(js_err)?;
        to_js_value(&JsRoundResult::from(result))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let next_advice = self.round.peek_advice().ok().map(action_to_str);

        let snapshot = Snapshot {
            state: state_to_str(self.round.state()),
            player: JsHand::from(self.round.player_hand()),
            dealer: JsHand::from(self.round.dealer_hand()),
            dealer_up: self.round.dealer_up().symbol(),
            decisions: self.round.decisions() as u32,
            can_double: self.round.can_double(),
            next_advice,
            doubled: self.round.is_doubled(),
            split: self.round.is_split(),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    player: JsHand,
    dealer: JsHand,
    dealer_up: &'static str,
    decisions: u32,
    can_double: bool,
    next_advice: Option<&'static str>,
    doubled: bool,
    split: bool,
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<&'static str>,
    value: u32,
    is_soft: bool,
    is_bust: bool,
}

impl From<&Hand> for JsHand {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().iter().map(|card| card.symbol()).collect(),
            value: hand.value(),
            is_soft: hand.is_soft(),
            is_bust: hand.is_bust(),
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    player_value: u32,
    dealer_value: u32,
    player_bust: bool,
    dealer_bust: bool,
    doubled: bool,
    split: bool,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            player_value: result.player_value,
            dealer_value: result.dealer_value,
            player_bust: result.player_bust,
            dealer_bust: result.dealer_bust,
            doubled: result.doubled,
            split: result.split,
        }
    }
}

fn parse_card(symbol: &str) -> Result<Rank, JsValue> {
    symbol.trim().to_uppercase().parse().map_err(js_err)
}

fn action_to_str(action: Action) -> &'static str {
    action.label()
}

fn state_to_str(state: RoundState) -> &'static str {
    match state {
        RoundState::PlayerTurn => "PlayerTurn",
        RoundState::PlayerDraw => "PlayerDraw",
        RoundState::DoubleDraw => "DoubleDraw",
        RoundState::DealerTurn => "DealerTurn",
        RoundState::RoundOver => "RoundOver",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWins => "PlayerWins",
        Outcome::DealerWins => "DealerWins",
        Outcome::Tie => "Tie",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
