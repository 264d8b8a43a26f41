//! # war-engine: Step-Driven War Card Game Core
//!
//! A deterministic engine for the card game War, exposing one atomic
//! transition per call so an external driver can visualize the round flow:
//! draw, compare, war announcement, face-down placement, face-up reveal,
//! award, game over. Reproducible RNG makes whole sessions replayable.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`player`] - FIFO card pile shared by the human and CPU sides
//! - [`engine`] - The step-granular game state machine and its snapshots
//! - [`logger`] - Game record serialization to JSONL
//! - [`errors`] - Error types for parsing and configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use war_engine::engine::{EngineConfig, GameEngine, StepAction};
//!
//! let mut engine = GameEngine::new(EngineConfig {
//!     seed: Some(7),
//!     ..EngineConfig::default()
//! });
//! engine.reset_game();
//! assert_eq!(engine.get_scores(), (26, 26));
//!
//! // The first step of every round draws one card per side into the pot.
//! let step = engine.next_step();
//! assert_eq!(step.action, StepAction::Draw);
//! assert_eq!(step.pot_size, 2);
//! assert!(step.player_card.is_some());
//! assert!(step.cpu_card.is_some());
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All game outcomes are reproducible using seeded RNG:
//!
//! ```rust
//! use war_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! // deck1 and deck2 will have identical card order
//! ```
//!
//! ## Strength Comparison
//!
//! Rounds are decided by the pure rank strength function:
//!
//! ```rust
//! use war_engine::cards::Rank;
//!
//! assert_eq!(Rank::Two.strength(), 2);
//! assert_eq!(Rank::Ten.strength(), 10);
//! assert_eq!(Rank::Ace.strength(), 14);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod logger;
pub mod player;
