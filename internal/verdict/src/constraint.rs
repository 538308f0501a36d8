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

use crate::MessageTag;

/// Severity attached to a validation constraint by the policy.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    /// The constraint is not evaluated at all.
    Ignore,

    /// The constraint is evaluated; a failure is recorded as information and
    /// does not affect the conclusion.
    Inform,

    /// The constraint is evaluated; a failure is recorded as a warning on
    /// the conclusion, which otherwise remains unaffected.
    Warn,

    /// The constraint is evaluated; a failure determines the conclusion's
    /// indication and sub-indication.
    Fail,
}

/// Outcome of evaluating one constraint.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstraintStatus {
    /// The predicate held.
    Ok,

    /// The predicate failed at `FAIL` level.
    NotOk,

    /// The predicate failed at `WARN` level.
    Warning,

    /// The predicate failed at `INFORM` level.
    Information,

    /// The constraint was scheduled but not evaluated. Ignored constraints
    /// never appear in a block result; this status exists for callers that
    /// track evaluation state outside a block.
    Ignored,
}

/// Result of one evaluated constraint, in block evaluation order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ConstraintResult {
    /// Rule that was evaluated.
    pub name: MessageTag,

    /// Outcome of the evaluation.
    pub status: ConstraintStatus,

    /// Answer tag recorded when the rule failed at `FAIL` level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<MessageTag>,

    /// Answer tag recorded when the rule failed at `WARN` level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<MessageTag>,

    /// Answer tag recorded when the rule failed at `INFORM` level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<MessageTag>,

    /// Free-form context for the report (e.g. the certificate id a chain
    /// check applies to).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl ConstraintResult {
    /// Returns an `OK` result for the given rule.
    pub fn ok(name: MessageTag) -> Self {
        ConstraintResult {
            name,
            status: ConstraintStatus::Ok,
            error: None,
            warning: None,
            info: None,
            additional_info: None,
        }
    }

    /// Attaches free-form context to this result.
    #[must_use]
    pub fn with_info<S: Into<String>>(mut self, info: S) -> Self {
        self.additional_info = Some(info.into());
        self
    }
}
