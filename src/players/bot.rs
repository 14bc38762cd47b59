//! Bots: a `Player` driven by a `Strategy`.
//!
//! The bot owns its player state and delegates every decision to the
//! strategy, so a scripted or human-backed participant only needs a
//! different `Strategy` impl.

use crate::cards::{Card, Deck};
use crate::core::config::MissingCardPolicy;
use crate::core::error::PlayerError;
use crate::core::rng::GameRng;
use crate::zones::pile;

use super::player::Player;
use super::strategy::{HeuristicStrategy, Strategy};

/// A self-playing participant.
#[derive(Clone, Debug, Default)]
pub struct Bot<S: Strategy = HeuristicStrategy> {
    player: Player,
    strategy: S,
}

impl Bot<HeuristicStrategy> {
    /// Create a bot using the stock heuristics.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_strategy(name, HeuristicStrategy)
    }
}

impl<S: Strategy> Bot<S> {
    #[must_use]
    pub fn with_strategy(name: impl Into<String>, strategy: S) -> Self {
        Self {
            player: Player::new(name),
            strategy,
        }
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.player.name
    }

    /// Whether the current hand should be thrown back.
    #[must_use]
    pub fn decide_mulligan(&self) -> bool {
        log::info!(
            "{}: houses in hand: {}",
            self.player.name,
            pile::houses(&self.player.hand).join(", ")
        );
        self.strategy.wants_mulligan(&self.player.hand)
    }

    /// Take a mulligan: rebuild the draw pile from `deck`, shuffle, and
    /// draw `fresh_hand` cards.
    ///
    /// A deck smaller than `fresh_hand` yields a smaller hand. Returns the
    /// number of cards drawn.
    pub fn mulligan(&mut self, deck: &Deck, fresh_hand: usize, rng: &mut GameRng) -> usize {
        log::info!("{} chose to mulligan", self.player.name);
        self.player.assign_deck(deck);
        self.player.shuffle_draw_pile(rng);
        self.player.draw_up_to(fresh_hand, rng)
    }

    /// House to declare this turn.
    #[must_use]
    pub fn choose_active_house(&self) -> Option<String> {
        self.strategy.choose_house(&self.player.hand)
    }

    /// Play every card of `house` in hand order.
    ///
    /// No cards of that house is not an error. A card that vanishes from
    /// hand mid-loop is skipped or fails the call according to `policy`.
    /// Returns amber gained.
    pub fn play_all_cards_in_house(
        &mut self,
        house: &str,
        policy: MissingCardPolicy,
    ) -> Result<u32, PlayerError> {
        let cards: Vec<Card> = match pile::find_all_by_house(&self.player.hand, house) {
            Ok(found) => found.into_iter().cloned().collect(),
            Err(err) => {
                log::debug!("{}: {}", self.player.name, err);
                return Ok(0);
            }
        };

        let mut gained = 0;
        for card in &cards {
            match self.player.play(card) {
                Ok(amber) => gained += amber,
                Err(err) if policy == MissingCardPolicy::SkipAndLog => {
                    log::warn!("{}: skipping play: {}", self.player.name, err);
                }
                Err(err) => return Err(err),
            }
        }
        Ok(gained)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    fn hand_bot(cards: Vec<Card>) -> Bot {
        let mut bot = Bot::new("Bot");
        bot.player_mut().hand = cards;
        bot
    }

    #[test]
    fn test_play_all_cards_in_house() {
        let mut bot = hand_bot(vec![
            Card::new("1", "Punch", "Brobnar", CardType::Action).with_amber(1),
            Card::new("2", "Hand of Dis", "Dis", CardType::Action).with_amber(1),
            Card::new("3", "Anger", "Brobnar", CardType::Action).with_amber(1),
            Card::new("4", "Troll", "Brobnar", CardType::Creature),
        ]);

        let gained = bot
            .play_all_cards_in_house("Brobnar", MissingCardPolicy::SkipAndLog)
            .unwrap();

        assert_eq!(gained, 2);
        assert_eq!(bot.player().amber, 2);
        assert_eq!(bot.player().hand_titles(), vec!["Hand of Dis"]);
        let played: Vec<_> = bot.player().discard_pile.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(played, vec!["1", "3", "4"]);
    }

    #[test]
    fn test_mulligan_with_short_deck_keeps_what_it_can() {
        let deck = Deck::new("Tiny", vec![Card::new("1", "Anger", "Brobnar", CardType::Action)]);
        let mut bot = Bot::new("Bot");

        assert_eq!(bot.mulligan(&deck, 6, &mut GameRng::new(2)), 1);
        assert_eq!(bot.player().hand.len(), 1);
    }

    #[test]
    fn test_play_house_not_in_hand_is_noop() {
        let mut bot = hand_bot(vec![Card::new("1", "Punch", "Brobnar", CardType::Action)]);
        let gained = bot
            .play_all_cards_in_house("Sanctum", MissingCardPolicy::Fail)
            .unwrap();
        assert_eq!(gained, 0);
        assert_eq!(bot.player().hand.len(), 1);
    }

    #[test]
    fn test_mulligan_redraws_fresh_hand() {
        let cards = (0..12)
            .map(|i| Card::new(format!("{i}"), format!("C{i}"), "Mars", CardType::Action))
            .collect();
        let deck = Deck::new("D", cards);
        let mut rng = GameRng::new(9);
        let mut bot = Bot::new("Bot");
        bot.player_mut().assign_deck(&deck);
        bot.player_mut().draw_cards(6, &mut rng).unwrap();

        assert_eq!(bot.mulligan(&deck, 5, &mut rng), 5);

        assert_eq!(bot.player().hand.len(), 5);
        assert_eq!(bot.player().draw_pile.len(), 7);
        assert_eq!(bot.player().card_count(), 12);
    }
}
