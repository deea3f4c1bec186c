//! Rule engine for multi-criteria dispatching.
//!
//! Applies rules in sequence; a later rule is consulted only when every
//! earlier rule ties. Candidates still tied after the last rule keep their
//! input order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, SchedulingContext};
use crate::models::Job;

/// A composable rule engine for job prioritization.
///
/// # Example
/// ```
/// use core_sched::dispatching::{RuleEngine, SchedulingContext};
/// use core_sched::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Spt)
///     .with_tie_breaker(rules::Fifo);
/// assert_eq!(engine.rule_names(), vec!["SPT", "FIFO"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted when all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts candidates by priority (highest priority first).
    ///
    /// Returns indices into `jobs`. The sort is stable, so fully tied jobs
    /// keep their relative order.
    pub fn sort_indices(&self, jobs: &[&Job], context: &SchedulingContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..jobs.len()).collect();
        indices.sort_by(|&a, &b| self.compare(jobs[a], jobs[b], context));
        indices
    }

    /// Returns the index of the highest-priority candidate.
    ///
    /// Equivalent to the head of [`sort_indices`](Self::sort_indices)
    /// without sorting the whole slice.
    pub fn select_best(&self, jobs: &[&Job], context: &SchedulingContext) -> Option<usize> {
        let mut best: Option<usize> = None;
        for idx in 0..jobs.len() {
            best = match best {
                Some(b) if self.compare(jobs[idx], jobs[b], context) != Ordering::Less => Some(b),
                _ => Some(idx),
            };
        }
        best
    }

    fn compare(&self, a: &Job, b: &Job, context: &SchedulingContext) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a, context).cmp(&rule.evaluate(b, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
