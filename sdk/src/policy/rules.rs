// Copyright 2024 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use serde::{Deserialize, Serialize};

pub use ades_verdict::Level;

/// Value accepted by a [`ValueRule`] or [`MultiValuesRule`] to match any
/// actual value.
pub const ANY_VALUE: &str = "*";

/// A constraint carrying only a severity level.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LevelRule {
    /// Severity of the constraint.
    pub level: Level,
}

impl LevelRule {
    /// A `FAIL`-level rule.
    pub fn fail() -> Self {
        LevelRule { level: Level::Fail }
    }

    /// A `WARN`-level rule.
    pub fn warn() -> Self {
        LevelRule { level: Level::Warn }
    }

    /// An `INFORM`-level rule.
    pub fn inform() -> Self {
        LevelRule {
            level: Level::Inform,
        }
    }
}

/// A constraint comparing the actual value against one expected value.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ValueRule {
    /// Severity of the constraint.
    pub level: Level,

    /// Expected value; [`ANY_VALUE`] accepts any present value.
    pub value: String,
}

impl ValueRule {
    /// Returns `true` when the actual value satisfies this rule.
    pub fn matches(&self, actual: Option<&str>) -> bool {
        match actual {
            Some(actual) => self.value == ANY_VALUE || self.value == actual,
            None => false,
        }
    }
}

/// A constraint comparing actual values against a set of accepted values.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MultiValuesRule {
    /// Severity of the constraint.
    pub level: Level,

    /// Accepted values; [`ANY_VALUE`] accepts anything present.
    #[serde(default)]
    pub values: Vec<String>,
}

impl MultiValuesRule {
    /// Returns `true` when every expected value appears among the actual
    /// values.
    ///
    /// With [`ANY_VALUE`] in the accepted set, any non-empty actual set
    /// passes.
    pub fn all_present<'a, I: IntoIterator<Item = &'a str>>(&self, actual: I) -> bool {
        let actual: Vec<&str> = actual.into_iter().collect();
        if self.values.iter().any(|v| v.as_str() == ANY_VALUE) {
            return !actual.is_empty();
        }
        self.values.iter().all(|v| actual.contains(&v.as_str()))
    }

    /// Returns `true` when the actual values are non-empty and every one of
    /// them appears in the accepted set.
    pub fn all_accepted<'a, I: IntoIterator<Item = &'a str>>(&self, actual: I) -> bool {
        let actual: Vec<&str> = actual.into_iter().collect();
        if actual.is_empty() {
            return false;
        }
        if self.values.iter().any(|v| v.as_str() == ANY_VALUE) {
            return true;
        }
        actual
            .iter()
            .all(|a| self.values.iter().any(|v| v.as_str() == *a))
    }

    /// Returns `true` when the accepted set contains the given value.
    pub fn accepts(&self, value: &str) -> bool {
        self.values
            .iter()
            .any(|v| v.as_str() == ANY_VALUE || v.as_str() == value)
    }
}

/// Returns the effective level of an optional rule; an absent rule is
/// `IGNORE` and is never evaluated.
pub fn level_of(rule: Option<&LevelRule>) -> Level {
    rule.map(|r| r.level).unwrap_or(Level::Ignore)
}
