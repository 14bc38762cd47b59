//! Bot decisions: mulligans, house choice, playing out a house.

mod common;

use common::{card, test_deck, COWARDS_END};
use keyforge_sim::cards::{Card, CardType};
use keyforge_sim::core::{GameRng, MissingCardPolicy};
use keyforge_sim::players::{Bot, HeuristicStrategy, Strategy};
use keyforge_sim::zones::pile;

fn bot_holding(hand: Vec<Card>) -> Bot {
    let mut bot = Bot::new("Bot");
    bot.player_mut().hand = hand;
    bot
}

#[test]
fn test_keeps_three_creatures_across_three_houses() {
    let bot = bot_holding(vec![
        card("1", "Brobnar", CardType::Creature, 0),
        card("2", "Dis", CardType::Creature, 0),
        card("3", "Logos", CardType::Creature, 0),
        card("4", "Logos", CardType::Action, 0),
        card("5", "Dis", CardType::Action, 0),
        card("6", "Dis", CardType::Artifact, 0),
    ]);
    assert!(!bot.decide_mulligan());
}

#[test]
fn test_keeps_two_creatures_across_two_houses() {
    let bot = bot_holding(vec![
        card("1", "Brobnar", CardType::Creature, 0),
        card("2", "Dis", CardType::Creature, 0),
        card("3", "Dis", CardType::Action, 0),
        card("4", "Dis", CardType::Action, 0),
        card("5", "Brobnar", CardType::Action, 0),
        card("6", "Brobnar", CardType::Upgrade, 0),
    ]);
    assert!(!bot.decide_mulligan());
}

#[test]
fn test_mulligans_two_creatures_across_three_houses() {
    let bot = bot_holding(vec![
        card("1", "Brobnar", CardType::Creature, 0),
        card("2", "Dis", CardType::Creature, 0),
        card("3", "Logos", CardType::Action, 0),
        card("4", "Dis", CardType::Action, 0),
        card("5", "Brobnar", CardType::Action, 1),
        card("6", "Brobnar", CardType::Action, 1),
    ]);
    assert!(bot.decide_mulligan());
}

#[test]
fn test_keeps_first_turn_hand_across_two_houses() {
    let bot = bot_holding(vec![
        card("1", "Brobnar", CardType::Creature, 1),
        card("2", "Brobnar", CardType::Action, 0),
        card("3", "Brobnar", CardType::Action, 0),
        card("4", "Dis", CardType::Action, 0),
        card("5", "Dis", CardType::Action, 0),
        card("6", "Dis", CardType::Artifact, 0),
        card("7", "Dis", CardType::Action, 0),
    ]);
    assert!(!bot.decide_mulligan());
}

#[test]
fn test_mulligans_weak_single_house_hand() {
    let bot = bot_holding(vec![
        card("1", "Logos", CardType::Creature, 0),
        card("2", "Logos", CardType::Action, 0),
        card("3", "Logos", CardType::Action, 0),
        card("4", "Logos", CardType::Action, 0),
        card("5", "Logos", CardType::Artifact, 0),
        card("6", "Logos", CardType::Action, 0),
    ]);
    assert!(bot.decide_mulligan());
}

#[test]
fn test_keeps_amber_heavy_hand() {
    let bot = bot_holding(vec![
        card("1", "Logos", CardType::Action, 1),
        card("2", "Dis", CardType::Action, 1),
        card("3", "Brobnar", CardType::Action, 1),
        card("4", "Logos", CardType::Action, 0),
        card("5", "Dis", CardType::Action, 0),
        card("6", "Brobnar", CardType::Action, 0),
    ]);
    assert!(!bot.decide_mulligan());
}

#[test]
fn test_mulligan_draws_fresh_hand() {
    let deck = test_deck();
    let mut rng = GameRng::new(21);
    let mut bot = Bot::new("Redraw");
    bot.player_mut().assign_deck(&deck);
    bot.player_mut().draw_cards(6, &mut rng).unwrap();

    assert_eq!(bot.mulligan(&deck, 5, &mut rng), 5);

    let player = bot.player();
    assert_eq!(player.hand.len(), 5);
    assert_eq!(player.draw_pile.len(), 31);
    assert_eq!(player.card_count(), 36);
}

#[test]
fn test_choose_active_house_picks_majority() {
    let bot = bot_holding(vec![
        card("1", "Dis", CardType::Action, 0),
        card("2", "Logos", CardType::Action, 0),
        card("3", "Logos", CardType::Creature, 0),
    ]);
    assert_eq!(bot.choose_active_house().as_deref(), Some("Logos"));
    assert_eq!(Bot::new("Empty").choose_active_house(), None);
}

#[test]
fn test_play_both_copies_sharing_an_id() {
    let deck = test_deck();
    let copies: Vec<Card> = pile::find_all_by_id(&deck.cards, COWARDS_END)
        .unwrap()
        .into_iter()
        .cloned()
        .collect();
    let per_copy = copies[0].amber;
    let mut hand = copies;
    hand.push(card("x", "Dis", CardType::Action, 1));
    let mut bot = bot_holding(hand);

    let gained = bot
        .play_all_cards_in_house("Brobnar", MissingCardPolicy::Fail)
        .unwrap();

    assert_eq!(gained, per_copy * 2);
    assert_eq!(bot.player().amber, per_copy * 2);
    assert_eq!(bot.player().hand.len(), 1);
    assert_eq!(bot.player().discard_pile.len(), 2);
}

#[test]
fn test_play_house_not_in_hand_is_noop() {
    let mut bot = bot_holding(vec![card("1", "Dis", CardType::Action, 1)]);
    let gained = bot
        .play_all_cards_in_house("Sanctum", MissingCardPolicy::Fail)
        .unwrap();
    assert_eq!(gained, 0);
    assert_eq!(bot.player().hand.len(), 1);
}

/// Always throws the hand back and declares a fixed house.
#[derive(Clone, Copy, Debug, Default)]
struct Stubborn;

impl Strategy for Stubborn {
    fn wants_mulligan(&self, _hand: &[Card]) -> bool {
        true
    }

    fn choose_house(&self, _hand: &[Card]) -> Option<String> {
        Some("Dis".to_string())
    }
}

#[test]
fn test_custom_strategy_drives_bot() {
    let mut bot = Bot::with_strategy("Stubborn", Stubborn);
    bot.player_mut().hand = vec![
        card("1", "Brobnar", CardType::Creature, 0),
        card("2", "Brobnar", CardType::Creature, 0),
        card("3", "Brobnar", CardType::Creature, 0),
    ];

    assert!(bot.decide_mulligan());
    assert!(!HeuristicStrategy.wants_mulligan(&bot.player().hand));
    assert_eq!(bot.choose_active_house().as_deref(), Some("Dis"));
}
