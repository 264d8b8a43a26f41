use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::player::Player;

/// Face-down cards each side places during a war unless configured otherwise.
pub const DEFAULT_WAR_FACE_DOWN_COUNT: usize = 3;

/// Engine construction parameters.
///
/// `seed: None` resolves to a random seed at construction; pass `Some` for
/// reproducible deals. The face-down count is fixed for the engine's
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub war_face_down_count: usize,
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            war_face_down_count: DEFAULT_WAR_FACE_DOWN_COUNT,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Validates a raw count as supplied by command-line flags or other
    /// untyped configuration surfaces. A negative count is the one hard
    /// construction-time failure.
    pub fn from_raw(war_face_down_count: i64, seed: Option<u64>) -> Result<Self, GameError> {
        if war_face_down_count < 0 {
            return Err(GameError::InvalidConfig {
                value: war_face_down_count,
            });
        }
        Ok(Self {
            war_face_down_count: war_face_down_count as usize,
            seed,
        })
    }
}

/// Which side took a round or the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Player,
    Cpu,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::Player => "player",
            Winner::Cpu => "cpu",
        }
    }
}

/// The atomic transition a [`GameEngine::next_step`] call performed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepAction {
    /// Both sides drew a fresh face-up card into the pot.
    Draw,
    /// The pot was awarded to the round winner.
    Award,
    /// Equal strength was detected; a war begins.
    WarStart,
    /// Face-down cards were placed into the pot.
    WarDown,
    /// War face-up cards were revealed into the pot.
    WarUp,
    /// The game reached (or repeated) its terminal state.
    GameOver,
}

impl StepAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepAction::Draw => "draw",
            StepAction::Award => "award",
            StepAction::WarStart => "war_start",
            StepAction::WarDown => "war_down",
            StepAction::WarUp => "war_up",
            StepAction::GameOver => "game_over",
        }
    }
}

/// Engine control state between steps.
///
/// `Compare` carries the face-up pair it will resolve, and `GameOver` carries
/// the frozen winner, so neither a missing face nor a drifting terminal
/// verdict is representable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    /// No round in progress; the next step starts one.
    Idle,
    /// Two face-up cards are on the table awaiting comparison.
    Compare { player_face: Card, cpu_face: Card },
    /// A tie was detected; face-down cards are about to be placed.
    WarDown,
    /// Face-down cards are in the pot; the face-up reveal comes next.
    WarUp,
    /// Terminal. Further steps repeat the same summary.
    GameOver { winner: Option<Winner> },
}

/// Snapshot returned by every [`GameEngine::next_step`] call.
///
/// This is the entire observable contract with the driving layer: the action
/// taken, the display-relevant cards, the face-down counts placed this step,
/// the pot size, round/game completion flags, the resolved winner if any,
/// and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    pub action: StepAction,
    pub player_card: Option<Card>,
    pub cpu_card: Option<Card>,
    pub player_down_count: usize,
    pub cpu_down_count: usize,
    pub pot_size: usize,
    pub round_over: bool,
    pub game_over: bool,
    pub winner: Option<Winner>,
    pub message: String,
}

/// Step-driven engine for the card game War.
///
/// Each [`next_step`](GameEngine::next_step) call performs exactly one atomic
/// transition so an external driver can visualize the round flow:
/// draw, compare, war_start, war_down, war_up, award, game_over. The engine
/// performs no scheduling of its own; pacing belongs to the caller.
///
/// # Examples
///
/// ```
/// use war_engine::engine::{EngineConfig, GameEngine};
///
/// let mut engine = GameEngine::new(EngineConfig {
///     seed: Some(42),
///     ..EngineConfig::default()
/// });
/// engine.reset_game();
/// assert_eq!(engine.get_scores(), (26, 26));
///
/// for _ in 0..10_000 {
///     let step = engine.next_step();
///     if step.game_over {
///         break;
///     }
/// }
/// ```
#[derive(Debug)]
pub struct GameEngine {
    war_face_down_count: usize,
    deck: Deck,
    player: Player,
    cpu: Player,
    pot: Vec<Card>,
    state: GameState,
    last_player_face: Option<Card>,
    last_cpu_face: Option<Card>,
}

impl GameEngine {
    /// Creates an engine with empty piles. Call [`reset_game`](Self::reset_game)
    /// to shuffle and deal before stepping.
    pub fn new(config: EngineConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            war_face_down_count: config.war_face_down_count,
            deck: Deck::new_with_seed(seed),
            player: Player::new("You"),
            cpu: Player::new("CPU"),
            pot: Vec::new(),
            state: GameState::Idle,
            last_player_face: None,
            last_cpu_face: None,
        }
    }

    /// Reinitializes a full game: fresh shuffled deck, the 52 cards split
    /// evenly by dealing alternately starting with the player, pot cleared,
    /// state back to idle.
    pub fn reset_game(&mut self) {
        self.deck.reset();
        self.deck.shuffle();

        self.player.clear();
        self.cpu.clear();
        self.pot.clear();
        self.state = GameState::Idle;
        self.last_player_face = None;
        self.last_cpu_face = None;

        let mut to_player = true;
        while let Some(card) = self.deck.draw() {
            if to_player {
                self.player.add_to_bottom([card]);
            } else {
                self.cpu.add_to_bottom([card]);
            }
            to_player = !to_player;
        }
    }

    /// True iff either side's pile is empty.
    pub fn is_game_over(&self) -> bool {
        !self.player.has_cards() || !self.cpu.has_cards()
    }

    /// Current pile sizes as (player, cpu).
    pub fn get_scores(&self) -> (usize, usize) {
        (self.player.card_count(), self.cpu.card_count())
    }

    /// True iff a round is in flight (state is neither idle nor terminal).
    pub fn in_round(&self) -> bool {
        !matches!(
            self.state,
            GameState::Idle | GameState::GameOver { .. }
        )
    }

    pub fn pot_size(&self) -> usize {
        self.pot.len()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn war_face_down_count(&self) -> usize {
        self.war_face_down_count
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn cpu(&self) -> &Player {
        &self.cpu
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn cpu_mut(&mut self) -> &mut Player {
        &mut self.cpu
    }

    /// Advances the game by exactly one transition and reports what happened.
    ///
    /// Pile exhaustion is discovered at the draw attempt inside whichever
    /// step draws; it ends the game as a regular transition, never as an
    /// error. Once terminal, further calls are idempotent.
    pub fn next_step(&mut self) -> StepResult {
        match self.state {
            GameState::Idle => self.step_draw(),
            GameState::Compare {
                player_face,
                cpu_face,
            } => self.step_compare(player_face, cpu_face),
            GameState::WarDown => self.step_war_down(),
            GameState::WarUp => self.step_war_up(),
            GameState::GameOver { winner } => self.terminal_result(winner, "Game over."),
        }
    }

    /// idle -> compare: clear the pot, both sides draw a fresh face-up card.
    fn step_draw(&mut self) -> StepResult {
        self.pot.clear();

        let p = self.player.draw_card();
        let c = self.cpu.draw_card();

        let (Some(p_face), Some(c_face)) = (p, c) else {
            // A side could not produce a card: the game ends on the spot.
            self.last_player_face = p;
            self.last_cpu_face = c;
            let winner = match (p, c) {
                (Some(_), None) => Some(Winner::Player),
                (None, Some(_)) => Some(Winner::Cpu),
                _ => None,
            };
            self.state = GameState::GameOver { winner };
            return StepResult {
                round_over: true,
                game_over: true,
                winner,
                ..self.snapshot(
                    StepAction::GameOver,
                    "Game over (not enough cards to draw).",
                )
            };
        };

        self.last_player_face = Some(p_face);
        self.last_cpu_face = Some(c_face);
        self.pot.push(p_face);
        self.pot.push(c_face);
        self.state = GameState::Compare {
            player_face: p_face,
            cpu_face: c_face,
        };

        self.snapshot(StepAction::Draw, "Draw.")
    }

    /// compare -> idle (decisive) or war_down (tie). No cards move on a tie;
    /// the war announcement is its own visualized step.
    fn step_compare(&mut self, player_face: Card, cpu_face: Card) -> StepResult {
        match player_face.strength().cmp(&cpu_face.strength()) {
            Ordering::Greater => self.award_pot(Winner::Player, "Player wins the pot."),
            Ordering::Less => self.award_pot(Winner::Cpu, "CPU wins the pot."),
            Ordering::Equal => {
                self.state = GameState::WarDown;
                self.snapshot(StepAction::WarStart, "War!")
            }
        }
    }

    /// war_down -> war_up: each side places up to the configured number of
    /// face-down cards. Running short (even to zero) is not a loss here.
    fn step_war_down(&mut self) -> StepResult {
        let p_down = draw_up_to(&mut self.player, self.war_face_down_count);
        let c_down = draw_up_to(&mut self.cpu, self.war_face_down_count);

        let player_down_count = p_down.len();
        let cpu_down_count = c_down.len();
        self.pot.extend(p_down);
        self.pot.extend(c_down);

        self.state = GameState::WarUp;
        StepResult {
            player_down_count,
            cpu_down_count,
            ..self.snapshot(StepAction::WarDown, "War: face-down cards placed.")
        }
    }

    /// war_up -> compare, idle (pot forfeited to the side that could still
    /// reveal), or game_over (neither side could).
    fn step_war_up(&mut self) -> StepResult {
        let p_face = self.player.draw_card();
        let c_face = self.cpu.draw_card();

        if let Some(card) = p_face {
            self.pot.push(card);
            self.last_player_face = Some(card);
        }
        if let Some(card) = c_face {
            self.pot.push(card);
            self.last_cpu_face = Some(card);
        }

        match (p_face, c_face) {
            (None, None) => {
                self.state = GameState::GameOver { winner: None };
                StepResult {
                    round_over: true,
                    game_over: true,
                    ..self.snapshot(
                        StepAction::GameOver,
                        "Game over: both ran out of cards during war.",
                    )
                }
            }
            (None, Some(_)) => self.award_pot(
                Winner::Cpu,
                "War resolved: player had no face-up card. CPU wins pot.",
            ),
            (Some(_), None) => self.award_pot(
                Winner::Player,
                "War resolved: CPU had no face-up card. Player wins pot.",
            ),
            (Some(p), Some(c)) => {
                self.state = GameState::Compare {
                    player_face: p,
                    cpu_face: c,
                };
                self.snapshot(StepAction::WarUp, "War: face-up reveal.")
            }
        }
    }

    /// Drains the pot to the winner's pile bottom in accumulation order and
    /// returns the round to idle. The snapshot reports the awarded size.
    fn award_pot(&mut self, winner: Winner, message: &str) -> StepResult {
        let awarded = self.pot.len();
        let pot = std::mem::take(&mut self.pot);
        match winner {
            Winner::Player => self.player.add_to_bottom(pot),
            Winner::Cpu => self.cpu.add_to_bottom(pot),
        }
        self.state = GameState::Idle;

        StepResult {
            pot_size: awarded,
            round_over: true,
            game_over: self.is_game_over(),
            winner: Some(winner),
            ..self.snapshot(StepAction::Award, message)
        }
    }

    fn terminal_result(&self, winner: Option<Winner>, message: &str) -> StepResult {
        StepResult {
            round_over: true,
            game_over: true,
            winner,
            ..self.snapshot(StepAction::GameOver, message)
        }
    }

    /// Baseline snapshot of the current display state; steps override the
    /// fields they change.
    fn snapshot(&self, action: StepAction, message: &str) -> StepResult {
        StepResult {
            action,
            player_card: self.last_player_face,
            cpu_card: self.last_cpu_face,
            player_down_count: 0,
            cpu_down_count: 0,
            pot_size: self.pot.len(),
            round_over: false,
            game_over: false,
            winner: None,
            message: message.to_string(),
        }
    }
}

/// Draws up to `n` cards from the front of a pile, stopping early when the
/// pile runs out.
fn draw_up_to(player: &mut Player, n: usize) -> Vec<Card> {
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        match player.draw_card() {
            Some(card) => out.push(card),
            None => break,
        }
    }
    out
}
