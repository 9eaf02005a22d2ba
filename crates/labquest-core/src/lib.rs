//! # Labquest Core Library
//!
//! This library provides the progression logic for Labquest, a virtual
//! science lab where students run simulated experiments, earn XP, level up,
//! and unlock achievement badges. It implements a library-first philosophy:
//! the engine is a pure computation over snapshots fetched from a pluggable
//! store, with the CLI (and any future GUI) being thin layers over the same
//! core.
//!
//! ## Architecture
//!
//! - **Progression Engine**: fetches a user's attempt history, badge catalog,
//!   earned grants and XP, evaluates badge criteria, and records new grants
//! - **Criteria**: loosely-typed catalog blobs lowered into a closed set of
//!   criterion blocks, OR-combined per badge
//! - **Storage**: a `ProgressionStore` trait with JSON-file and in-memory
//!   implementations; production deployments supply their own backend
//!
//! ## Key Components
//!
//! - [`ProgressionEngine`]: evaluation and awarding over a store
//! - [`evaluate_badges`]: the pure eligibility computation
//! - [`compute_level`] / [`compute_streak`]: level and daily-streak math
//! - [`ProgressionStore`]: boundary trait for the external record store

pub mod attempt;
pub mod badge;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod matching;
pub mod progress;
pub mod store;
pub mod streak;

pub use attempt::{AttemptStatus, ExperimentAttempt};
pub use badge::{BadgeDefinition, BadgeTier, EarnedBadge};
pub use criteria::{CriteriaSpec, Criterion, EvalContext};
pub use engine::{evaluate_badges, ProgressionEngine};
pub use error::StoreError;
pub use matching::{name_matches, normalize};
pub use progress::{compute_level, UserProfile, LEVEL_XP_UNIT};
pub use store::{InsertOutcome, JsonStore, MemoryStore, ProgressionStore};
pub use streak::compute_streak;
