//! Pipeline validation.
//!
//! [`validate_rules`] runs once at engine construction to reject malformed
//! rule lists and record each rule's position and [`WriteMode`] in a
//! [`RulePlan`]. The step loop then consults the plan instead of calling
//! back into the trait objects for buffer preparation.

use indexmap::IndexMap;

use crate::rule::{FlowRule, WriteMode};

use std::error::Error;
use std::fmt;

/// Ordered routing table built by [`validate_rules`].
///
/// Iteration order is pipeline order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct RulePlan {
    entries: IndexMap<String, WriteMode>,
}

impl RulePlan {
    /// Number of passes per step.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the plan is empty. Never true for a validated plan.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pipeline position of the rule called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name)
    }

    /// Write mode of the pass at `index`.
    pub fn write_mode(&self, index: usize) -> Option<WriteMode> {
        self.entries.get_index(index).map(|(_, m)| *m)
    }

    /// Rule names in execution order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

/// Structural errors in a rule pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// No rules registered.
    EmptyPipeline,

    /// Two rules share a name, which would make metrics ambiguous.
    DuplicateName {
        /// The repeated name.
        name: String,
        /// Position of the first rule with this name.
        first: usize,
        /// Position of the repeat.
        second: usize,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPipeline => write!(f, "pipeline has no rules"),
            Self::DuplicateName {
                name,
                first,
                second,
            } => write!(
                f,
                "rule name '{name}' used at positions {first} and {second}"
            ),
        }
    }
}

impl Error for RuleError {}

/// Validate a rule pipeline and build its [`RulePlan`].
///
/// # Errors
///
/// [`RuleError::EmptyPipeline`] for an empty list,
/// [`RuleError::DuplicateName`] when two rules report the same name.
pub fn validate_rules(rules: &[Box<dyn FlowRule>]) -> Result<RulePlan, RuleError> {
    if rules.is_empty() {
        return Err(RuleError::EmptyPipeline);
    }

    let mut entries = IndexMap::with_capacity(rules.len());
    for (i, rule) in rules.iter().enumerate() {
        let name = rule.name();
        if let Some(first) = entries.get_index_of(name) {
            return Err(RuleError::DuplicateName {
                name: name.to_string(),
                first,
                second: i,
            });
        }
        entries.insert(name.to_string(), rule.write_mode());
    }

    Ok(RulePlan { entries })
}
