//! Core types: randomness, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{
    CurveSlot, GeneratorConfig, RepositoryConfig, DECK_SIZE, MAX_COST, MIN_COST, PREVIEW_SIZE,
};
pub use error::{Error, Result};
pub use rng::{CardRng, CardRngState, StatRng};
