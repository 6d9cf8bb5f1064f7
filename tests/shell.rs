//! Console shell integration tests.

use bjadvisor::{DealerStand, PlayerBustRule, Shell, TableOptions};

fn run(input: &str) -> String {
    let mut shell = Shell::new(input.as_bytes(), Vec::new());
    shell.run().unwrap();
    String::from_utf8(shell.into_output()).unwrap()
}

fn run_with(input: &str, options: TableOptions) -> String {
    let mut shell = Shell::with_options(input.as_bytes(), Vec::new(), options);
    shell.run().unwrap();
    String::from_utf8(shell.into_output()).unwrap()
}

#[test]
fn asks_dealer_rule_until_answered() {
    let mut shell = Shell::new("maybe\nNo\nquit\n".as_bytes(), Vec::new());
    shell.run().unwrap();
    assert_eq!(shell.options().dealer_stand, DealerStand::On18);

    let output = String::from_utf8(shell.into_output()).unwrap();
    assert!(output.starts_with("Welcome to Blackjack!"));
    assert_eq!(output.matches("Please enter 'yes' or 'no'.").count(), 1);
    assert!(output.ends_with("Thank you for playing!\n"));
}

#[test]
fn natural_stands_and_dealer_completes() {
    let output = run("yes\n\nk a\n9\n8\n");

    assert!(output.contains("Your hand: K A, Total: 21"));
    assert!(output.contains("Dealer shows: 9"));
    assert!(output.contains("Strategy suggests: Stand"));
    assert!(output.contains("You stand. Waiting for dealer..."));
    assert!(output.contains("Dealer's hand: 9 8, Total: 17"));
    assert!(output.contains("You win!"));
}

#[test]
fn unknown_cards_are_reported_and_prompted_again() {
    let output = run("yes\n\nK X\nK 9\n11\n2\n10\n5\n");

    assert!(output.contains("Unknown card: X. Try again."));
    assert!(output.contains("Unknown card: 11. Try again."));
    assert!(output.contains("Your hand: K 9, Total: 19"));
    assert!(output.contains("Dealer's hand: 2 10 5, Total: 17"));
    assert!(output.contains("You win!"));
}

#[test]
fn short_initial_hand_is_prompted_again() {
    let output = run_with("\nK\nK 7\n10\n8\nexit\n", TableOptions::default());

    assert!(output.contains("Enter at least two cards."));
    assert!(output.contains("Dealer's hand: 10 8, Total: 18"));
    assert!(output.contains("Dealer wins!"));
}

#[test]
fn hit_until_bust_then_dealer_completes() {
    let output = run_with("\n10 6\n10\nK\n8\nquit\n", TableOptions::default());

    assert!(output.contains("Strategy suggests: Hit"));
    assert!(output.contains("Your new hand: 10 6 K, Total: 26"));
    assert!(output.contains("You bust!"));
    assert!(output.contains("Dealer's hand: 10 8, Total: 18"));
    assert!(output.contains("You win!"));
}

#[test]
fn hit_until_bust_loses_at_once() {
    let options = TableOptions::default().with_player_bust(PlayerBustRule::Loses);
    let output = run_with("\n10 6\n10\nK\nquit\n", options);

    assert!(output.contains("You bust!"));
    assert!(!output.contains("Enter the card the dealer drew"));
    assert!(output.contains("Dealer wins!"));
}

#[test]
fn double_down_draws_one_card() {
    let output = run_with("\n5 6\n4\n9\n10\n7\n", TableOptions::default());

    assert!(output.contains("Strategy suggests: Double Down"));
    assert!(output.contains("Double Down! Draw one card."));
    assert!(output.contains("Your new hand: 5 6 9, Total: 20"));
    assert_eq!(output.matches("Strategy suggests").count(), 1);
    assert!(output.contains("Dealer's hand: 4 10 7, Total: 21"));
    assert!(output.contains("Dealer wins!"));
}

#[test]
fn split_is_announced_only() {
    let output = run_with("\n8 8\n6\n10\n6\n", TableOptions::default());

    assert!(output.contains("Strategy suggests: Split"));
    assert!(output.contains("Splitting hand! Play each hand separately."));
    assert!(output.contains("Dealer's hand: 6 10 6, Total: 22"));
    assert!(output.contains("Dealer busts!"));
    assert!(output.contains("You win!"));
}

#[test]
fn dealer_on_eighteen_keeps_drawing_on_seventeen() {
    let options = TableOptions::default().with_dealer_stand(DealerStand::On18);
    let output = run_with("\nK 8\n10\n7\nA\nquit\n", options);

    assert!(output.contains("Dealer's hand: 10 7, Total: 17"));
    assert!(output.contains("Dealer's hand: 10 7 A, Total: 18"));
    assert!(output.contains("It's a tie!"));
}

#[test]
fn end_of_input_ends_session() {
    let output = run_with("\nK 9\n", TableOptions::default());
    assert!(output.ends_with("Thank you for playing!\n"));

    let output = run("");
    assert_eq!(
        output,
        "Welcome to Blackjack!\n\
         Should the dealer stand on soft 17 (yes) or only on 18 (no)?: "
    );
}
