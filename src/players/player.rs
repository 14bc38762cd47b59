//! Per-match player state.
//!
//! A `Player` owns five piles (draw, hand, discard, archive, purge), a
//! battle line of creatures, a row of artifacts, and three counters:
//! amber, keys, chains.
//!
//! ## Card lifecycle
//!
//! ```text
//! deck -> draw -> hand -> discard | archive | purge | battlefield
//!          ^                 |
//!          +--- reshuffle ---+
//! ```
//!
//! Cards are only ever moved. `card_count()` stays equal to the deck size
//! from `assign_deck` onward.

use crate::cards::{Card, Deck};
use crate::core::error::{PileError, PlayerError};
use crate::core::rng::GameRng;
use crate::rules::{self, FORGE_THRESHOLD, KEY_COST};
use crate::zones::{pile, Flank};

/// One participant's piles and counters.
#[derive(Clone, Debug, Default)]
pub struct Player {
    pub name: String,
    pub deck: Deck,

    pub hand: Vec<Card>,
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub archive_pile: Vec<Card>,
    pub purge_pile: Vec<Card>,

    pub creatures: Vec<Card>,
    pub artifacts: Vec<Card>,

    /// Won the coin flip.
    pub first_turn: bool,
    pub amber: u32,
    pub keys: u32,
    pub chains: u32,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Replace all piles with the deck's cards, in deck order, as the draw
    /// pile. Chains are copied from the deck.
    ///
    /// The draw pile is not shuffled; call `shuffle_draw_pile` afterward.
    pub fn assign_deck(&mut self, deck: &Deck) {
        self.deck = deck.clone();
        self.draw_pile = deck.cards.clone();
        self.hand.clear();
        self.discard_pile.clear();
        self.archive_pile.clear();
        self.purge_pile.clear();
        self.creatures.clear();
        self.artifacts.clear();
        self.chains = deck.chains;
    }

    pub fn shuffle_draw_pile(&mut self, rng: &mut GameRng) {
        pile::shuffle(&mut self.draw_pile, rng);
    }

    /// Move every discarded card into the draw pile and shuffle it.
    pub fn reshuffle_discard_into_draw(&mut self, rng: &mut GameRng) {
        log::debug!(
            "{}: draw pile empty, shuffling {} discarded cards back in",
            self.name,
            self.discard_pile.len()
        );
        self.draw_pile.append(&mut self.discard_pile);
        self.shuffle_draw_pile(rng);
    }

    /// Draw the top card into hand, recycling the discard pile first if the
    /// draw pile is empty.
    ///
    /// Fails with `PileError::Empty` only when both piles are empty.
    pub fn draw_one(&mut self, rng: &mut GameRng) -> Result<(), PileError> {
        if self.draw_pile.is_empty() {
            self.reshuffle_discard_into_draw(rng);
        }
        pile::draw(&mut self.draw_pile, &mut self.hand)
    }

    /// Draw `count` cards, stopping at the first failure.
    pub fn draw_cards(&mut self, count: usize, rng: &mut GameRng) -> Result<(), PileError> {
        for _ in 0..count {
            self.draw_one(rng)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn chain_handicap(&self) -> usize {
        rules::chain_handicap(self.chains)
    }

    #[must_use]
    pub fn hand_size_target(&self) -> usize {
        rules::hand_size_target(self.chains)
    }

    /// Draw until the hand reaches its chain-adjusted size.
    ///
    /// Returns the number of cards drawn. Running out of cards ends the
    /// draw early rather than failing.
    pub fn draw_up_to_hand_size(&mut self, rng: &mut GameRng) -> usize {
        self.draw_up_to(self.hand_size_target(), rng)
    }

    /// Draw until the hand holds `target` cards, or both the draw and
    /// discard piles are exhausted.
    ///
    /// Returns the number of cards drawn.
    pub fn draw_up_to(&mut self, target: usize, rng: &mut GameRng) -> usize {
        let wanted = target.saturating_sub(self.hand.len());
        log::debug!(
            "{}: {} cards in hand, drawing {}",
            self.name,
            self.hand.len(),
            wanted
        );

        let mut drawn = 0;
        while self.hand.len() < target {
            if let Err(err) = self.draw_one(rng) {
                log::warn!("{}: stopped drawing after {} cards: {}", self.name, drawn, err);
                break;
            }
            drawn += 1;
        }
        drawn
    }

    /// Move a card from hand to the discard pile.
    pub fn discard(&mut self, card: &Card) -> Result<(), PlayerError> {
        let card = self.take_from_hand(card)?;
        self.discard_pile.push(card);
        Ok(())
    }

    /// Move a card from hand to the archive.
    pub fn archive(&mut self, card: &Card) -> Result<(), PlayerError> {
        let card = self.take_from_hand(card)?;
        self.archive_pile.push(card);
        Ok(())
    }

    /// Move a card from hand to the purge pile.
    pub fn purge(&mut self, card: &Card) -> Result<(), PlayerError> {
        let card = self.take_from_hand(card)?;
        self.purge_pile.push(card);
        Ok(())
    }

    /// Play a card from hand and bank its amber bonus.
    ///
    /// Every played card goes to the discard pile, creatures and artifacts
    /// included; the battlefield is not simulated. Returns amber gained.
    pub fn play(&mut self, card: &Card) -> Result<u32, PlayerError> {
        let card = self.take_from_hand(card)?;
        let gained = card.amber;
        log::info!("{} played {}", self.name, card.card_title);
        self.discard_pile.push(card);

        if gained > 0 {
            log::info!("{} gains {} amber", self.name, gained);
            self.amber += gained;
        }
        Ok(gained)
    }

    /// Forge a key if amber is strictly above the threshold.
    ///
    /// Exactly six amber is not enough.
    pub fn forge_key(&mut self) -> bool {
        if self.amber > FORGE_THRESHOLD {
            self.keys += 1;
            self.amber -= KEY_COST;
            log::info!("{} forges a key! ({} forged)", self.name, self.keys);
            return true;
        }
        false
    }

    /// Put a creature into play. Same as the right flank.
    pub fn deploy_creature(&mut self, card: Card) {
        self.deploy_right_flank(card);
    }

    pub fn deploy_left_flank(&mut self, card: Card) {
        pile::place(&mut self.creatures, card, Flank::Left);
    }

    pub fn deploy_right_flank(&mut self, card: Card) {
        pile::place(&mut self.creatures, card, Flank::Right);
    }

    pub fn deploy_artifact(&mut self, card: Card) {
        pile::add(&mut self.artifacts, card);
    }

    /// Every card this player holds anywhere.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len()
            + self.draw_pile.len()
            + self.discard_pile.len()
            + self.archive_pile.len()
            + self.purge_pile.len()
            + self.creatures.len()
            + self.artifacts.len()
    }

    /// Card titles in hand, for narration.
    #[must_use]
    pub fn hand_titles(&self) -> Vec<&str> {
        self.hand.iter().map(|c| c.card_title.as_str()).collect()
    }

    fn take_from_hand(&mut self, card: &Card) -> Result<Card, PlayerError> {
        pile::remove(&mut self.hand, card).map_err(|_| PlayerError::CardNotInHand {
            id: card.id.clone(),
            title: card.card_title.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    fn deck(size: usize) -> Deck {
        let cards = (0..size)
            .map(|i| {
                Card::new(format!("card-{i}"), format!("Card {i}"), "Logos", CardType::Action)
                    .with_amber((i % 2) as u32)
            })
            .collect();
        Deck::new("Test", cards)
    }

    #[test]
    fn test_assign_deck_keeps_order_and_chains() {
        let deck = deck(10).with_chains(4);
        let mut player = Player::new("P");
        player.hand.push(Card::new("stray", "Stray", "Dis", CardType::Action));

        player.assign_deck(&deck);

        assert_eq!(player.draw_pile, deck.cards);
        assert!(player.hand.is_empty());
        assert_eq!(player.chains, 4);
        assert_eq!(player.card_count(), 10);
    }

    #[test]
    fn test_draw_one_takes_top_of_draw_pile() {
        let deck = deck(3);
        let mut player = Player::new("P");
        player.assign_deck(&deck);

        player.draw_one(&mut GameRng::new(1)).unwrap();
        assert_eq!(player.hand[0].id, "card-2");
        assert_eq!(player.draw_pile.len(), 2);
    }

    #[test]
    fn test_draw_one_fails_when_everything_is_empty() {
        let mut player = Player::new("P");
        assert_eq!(player.draw_one(&mut GameRng::new(1)), Err(PileError::Empty));
    }

    #[test]
    fn test_draw_up_to_stops_on_short_deck() {
        let mut player = Player::new("P");
        player.assign_deck(&deck(3));

        assert_eq!(player.draw_up_to(7, &mut GameRng::new(1)), 3);
        assert_eq!(player.hand.len(), 3);
        assert!(player.draw_pile.is_empty());
    }

    #[test]
    fn test_forge_key_threshold() {
        let mut player = Player::new("P");
        player.amber = 6;
        assert!(!player.forge_key());
        assert_eq!(player.amber, 6);
        assert_eq!(player.keys, 0);

        player.amber = 7;
        assert!(player.forge_key());
        assert_eq!(player.amber, 1);
        assert_eq!(player.keys, 1);
    }

    #[test]
    fn test_play_banks_amber() {
        let mut player = Player::new("P");
        player.assign_deck(&deck(4));
        player.draw_cards(4, &mut GameRng::new(1)).unwrap();

        let one_amber = player.hand.iter().find(|c| c.amber == 1).cloned().unwrap();
        assert_eq!(player.play(&one_amber), Ok(1));
        assert_eq!(player.amber, 1);
        assert_eq!(player.discard_pile.len(), 1);
        assert_eq!(player.hand.len(), 3);
    }

    #[test]
    fn test_play_missing_card_changes_nothing() {
        let mut player = Player::new("P");
        player.assign_deck(&deck(4));
        player.draw_cards(2, &mut GameRng::new(1)).unwrap();
        let ghost = Card::new("ghost", "Ghost", "Dis", CardType::Action).with_amber(4);

        let err = player.play(&ghost).unwrap_err();
        assert!(matches!(err, PlayerError::CardNotInHand { ref id, .. } if id == "ghost"));
        assert_eq!(player.amber, 0);
        assert_eq!(player.hand.len(), 2);
        assert!(player.discard_pile.is_empty());
    }

    #[test]
    fn test_archive_and_purge() {
        let mut player = Player::new("P");
        player.assign_deck(&deck(4));
        player.draw_cards(2, &mut GameRng::new(1)).unwrap();
        let first = player.hand[0].clone();
        let second = player.hand[1].clone();

        player.archive(&first).unwrap();
        player.purge(&second).unwrap();

        assert_eq!(player.archive_pile, vec![first]);
        assert_eq!(player.purge_pile, vec![second.clone()]);
        assert!(player.purge(&second).is_err());
        assert_eq!(player.card_count(), 4);
    }

    #[test]
    fn test_deploy_flanks() {
        let mut player = Player::new("P");
        player.deploy_creature(Card::new("m", "Middle", "Mars", CardType::Creature));
        player.deploy_left_flank(Card::new("l", "Left", "Mars", CardType::Creature));
        player.deploy_right_flank(Card::new("r", "Right", "Mars", CardType::Creature));
        player.deploy_artifact(Card::new("a", "Orb", "Mars", CardType::Artifact));

        let ids: Vec<_> = player.creatures.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["l", "m", "r"]);
        assert_eq!(player.artifacts.len(), 1);
    }
}
