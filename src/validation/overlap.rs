//! Overlap validator that runs all lineup checks

use super::{OrderingValidator, StructuralValidator, Violation, ViolationCode};
use crate::core::config::EngineConfig;
use crate::core::types::PlayerState;
use crate::rotation::Lineup;
use crate::spatial::tolerance::Tolerance;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Verdict for one lineup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapResult {
    pub is_legal: bool,
    pub violations: Vec<Violation>,
}

impl OverlapResult {
    pub fn new() -> Self {
        Self {
            is_legal: true,
            violations: Vec::new(),
        }
    }

    pub fn add_violations(&mut self, violations: Vec<Violation>) {
        if !violations.is_empty() {
            self.is_legal = false;
            self.violations.extend(violations);
        }
    }

    pub fn has_code(&self, code: ViolationCode) -> bool {
        self.violations.iter().any(|v| v.code == code)
    }

    pub fn violations_with(&self, code: ViolationCode) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.code == code)
    }

    /// True when shape problems stopped positional checks
    pub fn is_structurally_invalid(&self) -> bool {
        self.violations.iter().any(|v| v.code.is_structural())
    }
}

impl Default for OverlapResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateless rule engine; the only fields are fixed settings
#[derive(Debug, Clone, Copy)]
pub struct OverlapValidator {
    tolerance: Tolerance,
    parallel_threshold: usize,
}

impl Default for OverlapValidator {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl OverlapValidator {
    pub fn new(tolerance: Tolerance) -> Self {
        Self {
            tolerance,
            parallel_threshold: EngineConfig::default().parallel_threshold,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            tolerance: Tolerance::new(config.tolerance),
            parallel_threshold: config.parallel_threshold,
        }
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Validate a raw snapshot. Never fails: malformed input comes back as
    /// structural violations and skips the positional checks.
    pub fn validate(&self, players: &[PlayerState]) -> OverlapResult {
        let mut result = OverlapResult::new();

        result.add_violations(StructuralValidator::validate(players));
        if !result.is_legal {
            tracing::debug!(
                players = players.len(),
                violations = result.violations.len(),
                "lineup rejected on shape"
            );
            return result;
        }

        match Lineup::from_checked(players.to_vec()) {
            Some(lineup) => self.validate_positions(&lineup, &mut result),
            None => {
                // Structural checks passed, so construction cannot fail
                tracing::warn!("lineup construction failed after shape checks");
            }
        }

        tracing::debug!(
            legal = result.is_legal,
            violations = result.violations.len(),
            "lineup validated"
        );
        result
    }

    /// Validate an already well-formed lineup
    pub fn validate_lineup(&self, lineup: &Lineup) -> OverlapResult {
        let mut result = OverlapResult::new();
        self.validate_positions(lineup, &mut result);
        result
    }

    fn validate_positions(&self, lineup: &Lineup, result: &mut OverlapResult) {
        result.add_violations(OrderingValidator::validate_row_order(lineup, self.tolerance));
        result.add_violations(OrderingValidator::validate_front_back(lineup, self.tolerance));
    }

    /// Boolean verdict without building messages; agrees with `validate`
    pub fn is_legal(&self, players: &[PlayerState]) -> bool {
        if !StructuralValidator::is_well_formed(players) {
            return false;
        }
        Lineup::from_checked(players.to_vec())
            .map(|lineup| !OrderingValidator::any_violation(&lineup, self.tolerance))
            .unwrap_or(false)
    }

    /// Validate many lineups; results are in input order
    pub fn validate_batch(&self, lineups: &[Vec<PlayerState>]) -> Vec<OverlapResult> {
        let results: Vec<OverlapResult> = if lineups.len() >= self.parallel_threshold {
            lineups.par_iter().map(|l| self.validate(l)).collect()
        } else {
            lineups.iter().map(|l| self.validate(l)).collect()
        };

        tracing::debug!(
            lineups = lineups.len(),
            illegal = results.iter().filter(|r| !r.is_legal).count(),
            "batch validated"
        );
        results
    }
}
