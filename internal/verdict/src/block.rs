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

use crate::{
    Conclusion, ConstraintResult, ConstraintStatus, Indication, Level, MessageTag, SubIndication,
};

/// Identifies which basic building block produced a [`BlockResult`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BlockType {
    /// Identification of the signing certificate.
    Isc,

    /// Cryptographic verification.
    Cv,

    /// X.509 certificate validation.
    Xcv,

    /// Validation context initialisation.
    Vci,

    /// Signature acceptance validation.
    Sav,
}

/// Outcome of one basic building block: the evaluated constraints in order,
/// plus the block's conclusion.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BlockResult {
    /// Which building block this result belongs to.
    pub block_type: BlockType,

    /// Evaluated constraints, in evaluation order. Ignored constraints are
    /// omitted entirely.
    pub constraints: Vec<ConstraintResult>,

    /// The block's conclusion.
    pub conclusion: Conclusion,
}

/// One constraint evaluation, handed to [`BlockResultBuilder::check`].
///
/// The failure indication and sub-indication only apply when `level` is
/// [`Level::Fail`]; at `WARN`/`INFORM` levels the answer tag is recorded on
/// the conclusion without touching the indication.
#[derive(Clone, Debug)]
pub struct Check {
    /// Rule being evaluated.
    pub tag: MessageTag,

    /// Whether the rule's predicate held.
    pub passed: bool,

    /// Severity from the policy.
    pub level: Level,

    /// Indication set on the conclusion when a `FAIL`-level check fails.
    pub indication: Indication,

    /// Sub-indication set on the conclusion when a `FAIL`-level check fails.
    pub sub_indication: Option<SubIndication>,

    /// Answer tag recorded on failure.
    pub answer: MessageTag,

    /// Free-form context for the report.
    pub info: Option<String>,
}

impl Check {
    /// Creates a check failing with the given indication and sub-indication.
    pub fn new(
        tag: MessageTag,
        passed: bool,
        level: Level,
        indication: Indication,
        sub_indication: SubIndication,
        answer: MessageTag,
    ) -> Self {
        Check {
            tag,
            passed,
            level,
            indication,
            sub_indication: Some(sub_indication),
            answer,
            info: None,
        }
    }

    /// Attaches free-form context to this check.
    #[must_use]
    pub fn with_info<S: Into<String>>(mut self, info: S) -> Self {
        self.info = Some(info.into());
        self
    }
}

/// Accumulates [`ConstraintResult`]s for one building block and finalizes
/// them into an immutable [`BlockResult`].
///
/// The builder applies the constraint-evaluation rules shared by every
/// block:
///
/// * `IGNORE`-level checks are skipped and never recorded;
/// * a passing predicate records `OK`;
/// * a failing `INFORM`/`WARN` check records `INFORMATION`/`WARNING` and
///   appends the answer tag to the conclusion's infos/warnings;
/// * the first failing `FAIL`-level check records `NOT_OK`, fixes the
///   conclusion's indication and sub-indication, and short-circuits every
///   later `FAIL`-level check (they cannot change the outcome). Later
///   `INFORM`/`WARN` checks are still evaluated and recorded.
#[derive(Debug)]
pub struct BlockResultBuilder {
    block_type: BlockType,
    constraints: Vec<ConstraintResult>,
    conclusion: Option<Conclusion>,
    warnings: Vec<MessageTag>,
    infos: Vec<MessageTag>,
}

impl BlockResultBuilder {
    /// Returns a builder for the given block.
    pub fn new(block_type: BlockType) -> Self {
        BlockResultBuilder {
            block_type,
            constraints: vec![],
            conclusion: None,
            warnings: vec![],
            infos: vec![],
        }
    }

    /// Returns `true` once a `FAIL`-level check has failed.
    pub fn failed(&self) -> bool {
        self.conclusion.is_some()
    }

    /// Evaluates one check and records its result.
    ///
    /// Returns `true` when the predicate held (or the check was skipped),
    /// so callers can gate dependent checks.
    pub fn check(&mut self, check: Check) -> bool {
        if matches!(check.level, Level::Ignore) {
            return true;
        }

        // A settled FAIL-level conclusion cannot change; skip the rest of
        // the block's FAIL-level checks.
        if self.failed() && matches!(check.level, Level::Fail) {
            return true;
        }

        let mut result = ConstraintResult::ok(check.tag);
        result.additional_info = check.info;

        if check.passed {
            self.constraints.push(result);
            return true;
        }

        match check.level {
            Level::Inform => {
                result.status = ConstraintStatus::Information;
                result.info = Some(check.answer);
                self.infos.push(check.answer);
            }
            Level::Warn => {
                result.status = ConstraintStatus::Warning;
                result.warning = Some(check.answer);
                self.warnings.push(check.answer);
            }
            Level::Fail => {
                result.status = ConstraintStatus::NotOk;
                result.error = Some(check.answer);
                self.conclusion = Some(Conclusion {
                    indication: check.indication,
                    sub_indication: check.sub_indication,
                    errors: vec![check.answer],
                    warnings: vec![],
                    infos: vec![],
                });
            }
            Level::Ignore => {}
        }

        self.constraints.push(result);
        false
    }

    /// Finalizes the block. A builder with no failed `FAIL`-level check
    /// concludes `VALID`, carrying any accumulated warnings and infos.
    pub fn finish(self) -> BlockResult {
        let mut conclusion = self.conclusion.unwrap_or_else(Conclusion::passed);
        conclusion.warnings = self.warnings;
        conclusion.infos = self.infos;

        BlockResult {
            block_type: self.block_type,
            constraints: self.constraints,
            conclusion,
        }
    }
}
