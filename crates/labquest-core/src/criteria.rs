//! Badge eligibility criteria.
//!
//! The badge catalog stores criteria as loosely-typed camelCase blobs
//! (a leftover of the hosted backend's schema-free columns). At load time
//! a [`CriteriaSpec`] is lowered into zero or more [`Criterion`] blocks,
//! a closed set of predicate shapes. Blocks extracted from one definition
//! are OR-combined: the badge is awarded if any block evaluates true.
//!
//! A blob matching none of the known shapes lowers to zero blocks and is
//! simply never satisfied. That is intentional: a miswritten catalog row
//! stays unearnable until an administrator corrects it, without ever
//! failing an evaluation.

use serde::{Deserialize, Serialize};

use crate::attempt::ExperimentAttempt;
use crate::matching::name_matches;

/// Raw criteria blob as stored in the badge catalog.
///
/// Every field is optional; unknown fields are ignored. Which fields are
/// present determines which [`Criterion`] blocks [`CriteriaSpec::blocks`]
/// extracts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CriteriaSpec {
    /// Completed-attempt count threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiments_completed: Option<u32>,
    /// Experiment name fragment, matched after normalization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_type: Option<String>,
    /// Subject category, matched case-insensitively
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Per-attempt score floor (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_accuracy: Option<f64>,
    /// Best-score threshold (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy_threshold: Option<f64>,
    /// Total-XP threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp_threshold: Option<u32>,
    /// Explicit "just finish it" marker for type-completion badges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// One self-contained predicate shape within a badge's eligibility rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// N completed attempts matching an experiment type, optionally at a
    /// minimum score
    CountByType {
        required: u32,
        experiment_type: String,
        min_accuracy: Option<f64>,
    },
    /// N completed attempts in a subject
    CountBySubject { required: u32, subject: String },
    /// N completed attempts overall
    CountOverall { required: u32 },
    /// The attempt that triggered this evaluation completed a matching
    /// experiment
    TypeCompletion { experiment_type: String },
    /// Best score across (optionally type-filtered) completed attempts
    /// reaches the threshold
    AccuracyThreshold {
        threshold: f64,
        experiment_type: Option<String>,
    },
    /// Current XP total reaches the threshold
    XpThreshold { threshold: u32 },
    /// Every attempt ever made in a subject is completed, all at or above
    /// the minimum score
    SubjectMastery { subject: String, min_accuracy: f64 },
}

impl CriteriaSpec {
    /// Lower the raw blob into its criterion blocks.
    ///
    /// One spec can yield several blocks when it mixes fields from more
    /// than one shape; they are OR-combined at evaluation time, matching
    /// the catalog's historical semantics.
    pub fn blocks(&self) -> Vec<Criterion> {
        let mut blocks = Vec::new();

        if let Some(required) = self.experiments_completed {
            if let Some(experiment_type) = &self.experiment_type {
                blocks.push(Criterion::CountByType {
                    required,
                    experiment_type: experiment_type.clone(),
                    min_accuracy: self.min_accuracy,
                });
            } else if let Some(subject) = &self.subject {
                blocks.push(Criterion::CountBySubject {
                    required,
                    subject: subject.clone(),
                });
            } else {
                blocks.push(Criterion::CountOverall { required });
            }
        }

        if let Some(experiment_type) = &self.experiment_type {
            let explicit = self.completed == Some(true);
            let bare = self.experiments_completed.is_none()
                && self.accuracy_threshold.is_none()
                && self.min_accuracy.is_none();
            if explicit || bare {
                blocks.push(Criterion::TypeCompletion {
                    experiment_type: experiment_type.clone(),
                });
            }
        }

        if let Some(threshold) = self.accuracy_threshold {
            blocks.push(Criterion::AccuracyThreshold {
                threshold,
                experiment_type: self.experiment_type.clone(),
            });
        }

        if let Some(threshold) = self.xp_threshold {
            blocks.push(Criterion::XpThreshold { threshold });
        }

        if let (Some(subject), Some(min_accuracy)) = (&self.subject, self.min_accuracy) {
            blocks.push(Criterion::SubjectMastery {
                subject: subject.clone(),
                min_accuracy,
            });
        }

        blocks
    }
}

/// Inputs a criterion is evaluated against: one user's full attempt
/// history, their current XP, and (when triggered by a completion) the
/// attempt that just finished.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    pub current_xp: u32,
    pub attempts: &'a [ExperimentAttempt],
    pub just_completed: Option<&'a ExperimentAttempt>,
}

impl<'a> EvalContext<'a> {
    fn completed(&self) -> impl Iterator<Item = &'a ExperimentAttempt> + '_ {
        self.attempts.iter().filter(|a| a.is_completed())
    }
}

impl Criterion {
    /// Evaluate this block against a user's history.
    pub fn is_satisfied(&self, cx: &EvalContext<'_>) -> bool {
        match self {
            Criterion::CountByType {
                required,
                experiment_type,
                min_accuracy,
            } => {
                let count = cx
                    .completed()
                    .filter(|a| name_matches(experiment_type, &a.experiment_name))
                    .filter(|a| match min_accuracy {
                        Some(min) => a.score.is_some_and(|s| s >= *min),
                        None => true,
                    })
                    .count();
                count as u32 >= *required
            }
            Criterion::CountBySubject { required, subject } => {
                let count = cx
                    .completed()
                    .filter(|a| a.subject.eq_ignore_ascii_case(subject))
                    .count();
                count as u32 >= *required
            }
            Criterion::CountOverall { required } => cx.completed().count() as u32 >= *required,
            Criterion::TypeCompletion { experiment_type } => cx
                .just_completed
                .is_some_and(|a| a.is_completed() && name_matches(experiment_type, &a.experiment_name)),
            Criterion::AccuracyThreshold {
                threshold,
                experiment_type,
            } => cx
                .completed()
                .filter(|a| match experiment_type.as_deref() {
                    Some(t) => name_matches(t, &a.experiment_name),
                    None => true,
                })
                .filter_map(|a| a.score)
                .any(|s| s >= *threshold),
            Criterion::XpThreshold { threshold } => cx.current_xp >= *threshold,
            Criterion::SubjectMastery {
                subject,
                min_accuracy,
            } => {
                let total = cx
                    .attempts
                    .iter()
                    .filter(|a| a.subject.eq_ignore_ascii_case(subject))
                    .count();
                let completed: Vec<_> = cx
                    .completed()
                    .filter(|a| a.subject.eq_ignore_ascii_case(subject))
                    .collect();
                total > 0
                    && completed.len() == total
                    && completed
                        .iter()
                        .all(|a| a.score.is_some_and(|s| s >= *min_accuracy))
            }
        }
    }
}
