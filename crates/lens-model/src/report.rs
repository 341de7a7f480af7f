//! Per-column validation outcomes.

use std::fmt;

use serde::Serialize;

/// Pass/fail outcome for a single checked column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnOutcome {
    pub column: String,
    pub passed: bool,
}

/// Ordered mapping from column name to pass/fail, accumulated across the
/// uniqueness pass and the custom-predicate pass of one validation call.
///
/// Entry order follows schema column order, unique-checked columns first.
/// A column carrying both check kinds keeps a single entry whose value is
/// the logical AND of both outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Validator/dataset context the checks ran under, for diagnostics.
    pub dataset: String,
    pub outcomes: Vec<ColumnOutcome>,
}

impl ValidationReport {
    pub fn new(dataset: &str) -> Self {
        Self {
            dataset: dataset.to_string(),
            outcomes: Vec::new(),
        }
    }

    /// Record an outcome for a column. A second record for the same column
    /// keeps the entry's position and ANDs the values, so a column checked
    /// for both uniqueness and a custom predicate only passes when both do.
    pub fn record(&mut self, column: &str, passed: bool) {
        if let Some(existing) = self
            .outcomes
            .iter_mut()
            .find(|outcome| outcome.column == column)
        {
            existing.passed = existing.passed && passed;
            return;
        }
        self.outcomes.push(ColumnOutcome {
            column: column.to_string(),
            passed,
        });
    }

    pub fn get(&self, column: &str) -> Option<bool> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.column == column)
            .map(|outcome| outcome.passed)
    }

    /// An empty report means no checks were configured for the dataset.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    pub fn failed_columns(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.passed)
            .map(|outcome| outcome.column.as_str())
            .collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, outcome) in self.outcomes.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", outcome.column, outcome.passed)?;
        }
        write!(f, "}}")
    }
}
