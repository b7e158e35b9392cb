//! Fixed registry of the available rule sets.
//!
//! `RuleSetKind` is the serializable tag stored with a game; it resolves to
//! a shared, stateless `RuleSet` instance. Adding a variant means adding an
//! enum arm here and nothing else.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::STANDARD_RULE_SET_NAME;
use crate::rule_sets::rule_set_trait::RuleSet;
use crate::rule_sets::standard_rule_set::StandardRuleSet;

static STANDARD_RULE_SET: StandardRuleSet = StandardRuleSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleSetKind {
    #[default]
    StandardRuleSet,
}

impl RuleSetKind {
    pub const ALL: [RuleSetKind; 1] = [RuleSetKind::StandardRuleSet];

    /// Look up a rule set by its registered name.
    pub fn from_name(name: &str) -> CheckersResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| CheckersError::UnknownRuleSet(name.to_owned()))
    }

    pub fn name(self) -> &'static str {
        match self {
            RuleSetKind::StandardRuleSet => STANDARD_RULE_SET_NAME,
        }
    }

    pub fn rule_set(self) -> &'static dyn RuleSet {
        match self {
            RuleSetKind::StandardRuleSet => &STANDARD_RULE_SET,
        }
    }
}

impl FromStr for RuleSetKind {
    type Err = CheckersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl Display for RuleSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up a rule set instance by name.
pub fn get_rule_set(name: &str) -> CheckersResult<&'static dyn RuleSet> {
    RuleSetKind::from_name(name).map(RuleSetKind::rule_set)
}
