//! The match orchestrator.

use crate::cards::{Deck, DeckSource};
use crate::core::config::MatchConfig;
use crate::core::error::GameError;
use crate::core::player::{PlayerId, PlayerMap, SEATS};
use crate::core::rng::GameRng;
use crate::players::{Bot, HeuristicStrategy, Strategy};
use crate::rules::{
    GameResult, MatchSummary, SeatSummary, FIRST_TURN_BONUS, FORGE_THRESHOLD, KEYS_TO_WIN,
    MULLIGAN_HAND_SIZE,
};

use super::phase::MatchPhase;

/// A two-bot match played with one deck on both sides.
///
/// ## Example
///
/// ```
/// use keyforge_sim::cards::{Card, CardType, Deck};
/// use keyforge_sim::core::MatchConfig;
/// use keyforge_sim::game::Game;
///
/// let cards = (0..36)
///     .map(|i| {
///         let house = ["Brobnar", "Dis", "Logos"][i % 3];
///         Card::new(format!("{i}"), format!("Card {i}"), house, CardType::Action).with_amber(1)
///     })
///     .collect();
///
/// let mut game = Game::new(Deck::new("Demo", cards), MatchConfig::default().with_seed(42));
/// let summary = game.run().unwrap();
///
/// assert!(summary.result.winner().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct Game<S: Strategy + Clone = HeuristicStrategy> {
    config: MatchConfig,
    deck: Deck,
    rng: GameRng,
    phase: MatchPhase,
    bots: PlayerMap<Bot<S>>,
    first_player: Option<PlayerId>,
    /// Half-turns taken.
    turn: u32,
    /// Completed pairs of turns.
    rounds: u32,
    result: Option<GameResult>,
}

impl Game<HeuristicStrategy> {
    /// Create a match where both bots use the stock heuristics.
    #[must_use]
    pub fn new(deck: Deck, config: MatchConfig) -> Self {
        Self::with_strategy(deck, config, HeuristicStrategy)
    }

    /// Load the deck from `source` and create a match.
    ///
    /// A load failure aborts before any setup happens.
    pub fn from_source(
        source: &impl DeckSource,
        location: &str,
        config: MatchConfig,
    ) -> Result<Self, GameError> {
        let deck = source.load(location)?;
        Ok(Self::new(deck, config))
    }
}

impl<S: Strategy + Clone> Game<S> {
    /// Create a match where both bots use `strategy`.
    #[must_use]
    pub fn with_strategy(deck: Deck, config: MatchConfig, strategy: S) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let bots = PlayerMap::new(|seat| {
            Bot::with_strategy(config.player_names[seat.index()].clone(), strategy.clone())
        });

        Self {
            config,
            deck,
            rng,
            phase: MatchPhase::NotStarted,
            bots,
            first_player: None,
            turn: 0,
            rounds: 0,
            result: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Seed that reproduces this match.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn bot(&self, seat: PlayerId) -> &Bot<S> {
        &self.bots[seat]
    }

    pub fn bot_mut(&mut self, seat: PlayerId) -> &mut Bot<S> {
        &mut self.bots[seat]
    }

    #[must_use]
    pub fn bots(&self) -> &PlayerMap<Bot<S>> {
        &self.bots
    }

    /// Seat that won the coin flip, once setup has run.
    #[must_use]
    pub fn first_player(&self) -> Option<PlayerId> {
        self.first_player
    }

    /// Half-turns taken so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Completed rounds (one turn for each seat).
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Deal the deck to both bots, shuffle, and flip for first turn.
    pub fn setup(&mut self) -> Result<PlayerId, GameError> {
        self.expect_phase(MatchPhase::NotStarted)?;
        self.advance();

        for seat in PlayerId::all() {
            let player = self.bots[seat].player_mut();
            player.assign_deck(&self.deck);
            player.shuffle_draw_pile(&mut self.rng);
        }

        let first = self.determine_first_player();
        self.advance();
        Ok(first)
    }

    fn determine_first_player(&mut self) -> PlayerId {
        let seat = PlayerId::new(self.rng.gen_range_usize(0..SEATS) as u8);
        self.bots[seat].player_mut().first_turn = true;
        self.first_player = Some(seat);
        log::info!("{} won the toss!", self.bots[seat].name());
        seat
    }

    /// Draw opening hands and let each bot decide whether to mulligan.
    ///
    /// The coin-flip winner draws one extra card, before deciding and again
    /// after a mulligan. A deck too small for a full hand deals what it has.
    pub fn resolve_mulligans(&mut self) -> Result<(), GameError> {
        self.expect_phase(MatchPhase::Mulligan)?;

        for seat in PlayerId::all() {
            let bot = &mut self.bots[seat];
            let bonus = if bot.player().first_turn { FIRST_TURN_BONUS } else { 0 };

            let player = bot.player_mut();
            player.draw_up_to_hand_size(&mut self.rng);
            if bonus > 0 {
                log::info!("{} draws an additional card for winning the toss", player.name);
                let target = player.hand.len() + bonus;
                player.draw_up_to(target, &mut self.rng);
            }

            if bot.decide_mulligan() {
                bot.mulligan(&self.deck, MULLIGAN_HAND_SIZE + bonus, &mut self.rng);
            }
        }

        for (_, bot) in self.bots.iter() {
            log::info!(
                "Opening hand for {}: {}",
                bot.name(),
                bot.player().hand_titles().join(", ")
            );
        }

        self.advance();
        Ok(())
    }

    /// Play one seat's turn.
    ///
    /// Forges a key if possible, then checks for a win before the seat
    /// declares a house, plays it out and refills its hand. Returns the
    /// result if this turn ended the match.
    pub fn execute_turn(&mut self, seat: PlayerId) -> Result<Option<GameResult>, GameError> {
        self.expect_phase(MatchPhase::TurnLoop)?;
        let policy = self.config.missing_card;
        let bot = &mut self.bots[seat];

        if bot.player().amber > FORGE_THRESHOLD {
            bot.player_mut().forge_key();
        }

        if bot.player().keys >= KEYS_TO_WIN {
            log::info!("{} WINS THE GAME!", bot.name());
            return Ok(Some(self.finish(GameResult::Winner(seat))));
        }

        match bot.choose_active_house() {
            Some(house) => {
                log::info!("{} chose house {}", bot.name(), house);
                bot.play_all_cards_in_house(&house, policy)?;
            }
            None => log::warn!("{} has no cards to declare a house from", bot.name()),
        }

        bot.player_mut().draw_up_to_hand_size(&mut self.rng);
        log::debug!("{}'s hand: {}", bot.name(), bot.player().hand_titles().join(", "));

        self.turn += 1;
        if let Some(limit) = self.config.max_turns {
            if self.turn >= limit {
                log::info!("turn limit of {} reached, calling a stalemate", limit);
                return Ok(Some(self.finish(GameResult::Stalemate)));
            }
        }
        Ok(None)
    }

    /// Play one turn for each seat, coin-flip winner first.
    pub fn execute_round(&mut self) -> Result<Option<GameResult>, GameError> {
        self.expect_phase(MatchPhase::TurnLoop)?;
        let first = self.first_player.unwrap_or(PlayerId::new(0));

        for seat in [first, first.opponent()] {
            if let Some(result) = self.execute_turn(seat)? {
                return Ok(Some(result));
            }
        }
        self.rounds += 1;
        Ok(None)
    }

    /// Run the match from wherever it is to the end.
    pub fn run(&mut self) -> Result<MatchSummary, GameError> {
        if self.phase == MatchPhase::NotStarted {
            self.setup()?;
        }
        if self.phase == MatchPhase::Mulligan {
            self.resolve_mulligans()?;
        }
        while self.phase == MatchPhase::TurnLoop {
            self.execute_round()?;
        }

        let summary = self.summary().ok_or(GameError::InvalidPhase {
            expected: MatchPhase::Finished,
            found: self.phase,
        })?;
        log::info!(
            "#### Game results #### rounds: {}, turns: {}",
            summary.rounds,
            summary.turns
        );
        Ok(summary)
    }

    /// Final tallies, once the match is finished.
    #[must_use]
    pub fn summary(&self) -> Option<MatchSummary> {
        let result = self.result?;
        Some(MatchSummary {
            result,
            winner_name: result.winner().map(|seat| self.bots[seat].name().to_string()),
            turns: self.turn,
            rounds: self.rounds,
            seed: self.seed(),
            seats: self.bots.map(|bot| {
                let player = bot.player();
                SeatSummary {
                    name: player.name.clone(),
                    first_turn: player.first_turn,
                    amber: player.amber,
                    keys: player.keys,
                    chains: player.chains,
                }
            }),
        })
    }

    fn finish(&mut self, result: GameResult) -> GameResult {
        self.result = Some(result);
        self.advance();
        result
    }

    fn advance(&mut self) {
        self.phase = self.phase.next();
    }

    fn expect_phase(&self, expected: MatchPhase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidPhase {
                expected,
                found: self.phase,
            })
        }
    }
}
