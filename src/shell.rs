//! Text front end for a manual table.
//!
//! The shell reads cards typed by the user and prints the advisor's
//! suggestions. It works over any reader and writer so sessions can be
//! scripted.

use std::io::{BufRead, Write};

use crate::card::{Rank, parse_hand};
use crate::error::ShellError;
use crate::hand::Hand;
use crate::options::{DealerStand, TableOptions};
use crate::round::{Round, RoundState};
use crate::strategy::Action;

const RULE_PROMPT: &str = "Should the dealer stand on soft 17 (yes) or only on 18 (no)?: ";
const ROUND_PROMPT: &str = "Type 'exit' or 'quit' to stop, or press Enter to play a new round: ";
const HAND_PROMPT: &str = "Enter your initial hand (e.g., 'K A'): ";
const UP_CARD_PROMPT: &str = "Enter the dealer's visible card (e.g., '10'): ";
const PLAYER_CARD_PROMPT: &str = "Enter the card you drew: ";
const DEALER_CARD_PROMPT: &str = "Enter the card the dealer drew: ";

/// Interactive session over a reader and a writer.
pub struct Shell<R, W> {
    input: R,
    output: W,
    options: TableOptions,
    ask_dealer_rule: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell that asks for the dealer stand rule on start.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            options: TableOptions::default(),
            ask_dealer_rule: true,
        }
    }

    /// Creates a shell with fixed table options; the dealer rule is not asked.
    pub const fn with_options(input: R, output: W, options: TableOptions) -> Self {
        Self {
            input,
            output,
            options,
            ask_dealer_rule: false,
        }
    }

    /// Asks for the dealer stand rule on start, keeping the other options.
    #[must_use]
    pub const fn asking_dealer_rule(mut self) -> Self {
        self.ask_dealer_rule = true;
        self
    }

    /// Returns the table options in effect.
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Consumes the shell and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs rounds until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn run(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "Welcome to Blackjack!")?;

        if self.ask_dealer_rule {
            let Some(stand) = self.read_dealer_rule()? else {
                return Ok(());
            };
            self.options = self.options.with_dealer_stand(stand);
        }
        log::info!("dealer stands on {:?}", self.options.dealer_stand);

        while self.play_round()? {}

        writeln!(self.output, "Thank you for playing!")?;
        Ok(())
    }

    fn read_dealer_rule(&mut self) -> Result<Option<DealerStand>, ShellError> {
        loop {
            let Some(answer) = self.prompt(RULE_PROMPT)? else {
                return Ok(None);
            };
            match answer.to_lowercase().as_str() {
                "yes" => return Ok(Some(DealerStand::On17)),
                "no" => return Ok(Some(DealerStand::On18)),
                _ => writeln!(self.output, "Please enter 'yes' or 'no'.")?,
            }
        }
    }

    /// Plays one round. Returns `false` when the session should end.
    fn play_round(&mut self) -> Result<bool, ShellError> {
        writeln!(self.output, "\n--------------------\n")?;

        let Some(command) = self.prompt(ROUND_PROMPT)? else {
            return Ok(false);
        };
        if matches!(command.to_lowercase().as_str(), "exit" | "quit") {
            return Ok(false);
        }

        let Some(hand) = self.read_hand()? else {
            return Ok(false);
        };
        let Some(up) = self.read_card(UP_CARD_PROMPT)? else {
            return Ok(false);
        };

        let mut round = Round::new(hand, up, self.options)?;
        writeln!(
            self.output,
            "Your hand: {}, Total: {}",
            format_hand(round.player_hand()),
            round.player_hand().value()
        )?;
        writeln!(self.output, "Dealer shows: {up}")?;

        while round.state() == RoundState::PlayerTurn {
            let action = round.advise()?;
            writeln!(self.output, "Strategy suggests: {action}")?;

            match action {
                Action::Bust => writeln!(self.output, "You bust!")?,
                Action::Stand => writeln!(self.output, "You stand. Waiting for dealer...")?,
                Action::Split => {
                    writeln!(self.output, "Splitting hand! Play each hand separately.")?;
                }
                Action::DoubleDown => {
                    writeln!(self.output, "Double Down! Draw one card.")?;
                    if !self.player_draw(&mut round)? {
                        return Ok(false);
                    }
                }
                Action::Hit => {
                    if !self.player_draw(&mut round)? {
                        return Ok(false);
                    }
                    if round.player_hand().is_bust() {
                        writeln!(self.output, "You bust!")?;
                    }
                }
            }
        }

        while round.state() == RoundState::DealerTurn {
            let Some(card) = self.read_card(DEALER_CARD_PROMPT)? else {
                return Ok(false);
            };
            let total = round.dealer_draw(card)?;
            writeln!(
                self.output,
                "Dealer's hand: {}, Total: {total}",
                format_hand(round.dealer_hand())
            )?;
            if total > 21 {
                writeln!(self.output, "Dealer busts!")?;
            }
        }

        let result = round.showdown()?;
        writeln!(self.output, "{}", result.outcome)?;
        Ok(true)
    }

    fn player_draw(&mut self, round: &mut Round) -> Result<bool, ShellError> {
        let Some(card) = self.read_card(PLAYER_CARD_PROMPT)? else {
            return Ok(false);
        };
        let total = round.player_draw(card)?;
        writeln!(
            self.output,
            "Your new hand: {}, Total: {total}",
            format_hand(round.player_hand())
        )?;
        Ok(true)
    }

    fn read_hand(&mut self) -> Result<Option<Hand>, ShellError> {
        loop {
            let Some(line) = self.prompt(HAND_PROMPT)? else {
                return Ok(None);
            };
            match parse_hand(&line.to_uppercase()) {
                Ok(cards) if cards.len() >= 2 => return Ok(Some(Hand::from(cards))),
                Ok(_) => writeln!(self.output, "Enter at least two cards.")?,
                Err(err) => writeln!(self.output, "{}. Try again.", capitalize(&err.to_string()))?,
            }
        }
    }

    fn read_card(&mut self, prompt: &str) -> Result<Option<Rank>, ShellError> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match line.to_uppercase().parse::<Rank>() {
                Ok(card) => return Ok(Some(card)),
                Err(err) => writeln!(self.output, "{}. Try again.", capitalize(&err.to_string()))?,
            }
        }
    }

    /// Prints `prompt` and reads one trimmed line. Returns `None` at end of
    /// input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn format_hand(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(|card| card.symbol())
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
