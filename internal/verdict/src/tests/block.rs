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

use crate::{
    BlockResultBuilder, BlockType, Check, ConstraintStatus, Indication, Level, MessageTag,
    SubIndication,
};

fn failing(level: Level) -> Check {
    Check::new(
        MessageTag::BbbSavIcerrm,
        false,
        level,
        Indication::Invalid,
        SubIndication::SigConstraintsFailure,
        MessageTag::BbbSavIcerrmAns,
    )
}

fn passing(level: Level) -> Check {
    Check::new(
        MessageTag::BbbSavIsqpstp,
        true,
        level,
        Indication::Invalid,
        SubIndication::SigConstraintsFailure,
        MessageTag::BbbSavIsqpstpAns,
    )
}

#[test]
fn ignore_level_records_nothing() {
    let mut builder = BlockResultBuilder::new(BlockType::Sav);
    builder.check(failing(Level::Ignore));
    let result = builder.finish();

    assert!(result.constraints.is_empty());
    assert_eq!(result.conclusion.indication, Indication::Valid);
    assert!(result.conclusion.errors.is_empty());
}

#[test]
fn passing_check_records_ok_at_any_level() {
    for level in [Level::Inform, Level::Warn, Level::Fail] {
        let mut builder = BlockResultBuilder::new(BlockType::Sav);
        builder.check(passing(level));
        let result = builder.finish();

        assert_eq!(result.constraints.len(), 1);
        assert_eq!(result.constraints[0].status, ConstraintStatus::Ok);
        assert!(result.conclusion.is_valid());
    }
}

#[test]
fn inform_failure_leaves_conclusion_valid() {
    let mut builder = BlockResultBuilder::new(BlockType::Sav);
    builder.check(failing(Level::Inform));
    let result = builder.finish();

    assert_eq!(result.constraints[0].status, ConstraintStatus::Information);
    assert!(result.conclusion.is_valid());
    assert_eq!(result.conclusion.infos, vec![MessageTag::BbbSavIcerrmAns]);
}

#[test]
fn warn_failure_records_warning_on_valid_conclusion() {
    let mut builder = BlockResultBuilder::new(BlockType::Sav);
    builder.check(failing(Level::Warn));
    let result = builder.finish();

    assert_eq!(result.constraints[0].status, ConstraintStatus::Warning);
    assert!(result.conclusion.is_valid());
    assert_eq!(
        result.conclusion.warnings,
        vec![MessageTag::BbbSavIcerrmAns]
    );
}

#[test]
fn fail_failure_settles_the_conclusion() {
    let mut builder = BlockResultBuilder::new(BlockType::Sav);
    builder.check(failing(Level::Fail));
    let result = builder.finish();

    assert_eq!(result.constraints[0].status, ConstraintStatus::NotOk);
    assert_eq!(result.conclusion.indication, Indication::Invalid);
    assert_eq!(
        result.conclusion.sub_indication,
        Some(SubIndication::SigConstraintsFailure)
    );
    assert_eq!(result.conclusion.errors, vec![MessageTag::BbbSavIcerrmAns]);
}

#[test]
fn first_fail_wins_and_later_fail_checks_are_skipped() {
    let mut builder = BlockResultBuilder::new(BlockType::Sav);
    builder.check(failing(Level::Fail));
    builder.check(Check::new(
        MessageTag::BbbSavIcrm,
        false,
        Level::Fail,
        Indication::Indeterminate,
        SubIndication::TryLater,
        MessageTag::BbbSavIcrmAns,
    ));
    let result = builder.finish();

    // The second FAIL-level check was short-circuited.
    assert_eq!(result.constraints.len(), 1);
    assert_eq!(result.conclusion.indication, Indication::Invalid);
    assert_eq!(result.conclusion.errors, vec![MessageTag::BbbSavIcerrmAns]);
}

#[test]
fn warn_checks_still_run_after_a_fail() {
    let mut builder = BlockResultBuilder::new(BlockType::Sav);
    builder.check(failing(Level::Fail));
    builder.check(Check::new(
        MessageTag::BbbSavIcrm,
        false,
        Level::Warn,
        Indication::Invalid,
        SubIndication::SigConstraintsFailure,
        MessageTag::BbbSavIcrmAns,
    ));
    let result = builder.finish();

    assert_eq!(result.constraints.len(), 2);
    assert_eq!(result.constraints[1].status, ConstraintStatus::Warning);
    assert_eq!(result.conclusion.warnings, vec![MessageTag::BbbSavIcrmAns]);
    // The settled indication is untouched.
    assert_eq!(result.conclusion.indication, Indication::Invalid);
}

#[test]
fn check_returns_predicate_outcome() {
    let mut builder = BlockResultBuilder::new(BlockType::Isc);
    assert!(builder.check(passing(Level::Fail)));
    assert!(!builder.check(failing(Level::Fail)));
}

#[test]
fn serde_round_trip() {
    let mut builder = BlockResultBuilder::new(BlockType::Cv);
    builder.check(failing(Level::Fail));
    let result = builder.finish();

    let json = serde_json::to_string(&result).unwrap();
    let back: crate::BlockResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);
}
