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

//! Constraint severity handling across the policy surface.

#![allow(clippy::unwrap_used)]

mod common;

use ades_validation::{
    policy::{Level, LevelRule, MultiValuesRule, ValueRule},
    verdict::{ConstraintStatus, Indication, MessageTag, SubIndication},
    BasicBuildingBlocks,
};
use common::*;

#[test]
fn ignored_constraints_never_appear_in_results() {
    // An absent constraint and a Level::Ignore constraint behave the same:
    // the result list must not mention them at all.
    let mut policy = strict_policy();
    let constraints = policy.signature_constraints.as_mut().unwrap();
    constraints.certified_roles = Some(MultiValuesRule {
        level: Level::Ignore,
        values: vec!["manager".to_owned()],
    });

    let model = good_model();
    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());
    let result = engine.validate_signature(SIGNATURE).unwrap();

    let sav = result.sav.as_ref().unwrap();
    assert!(sav
        .constraints
        .iter()
        .all(|c| c.name != MessageTag::BbbSavIcerrm));
    assert!(!result
        .conclusion
        .errors
        .contains(&MessageTag::BbbSavIcerrmAns));
    assert_eq!(result.conclusion.indication, Indication::Valid);
}

#[test]
fn warn_level_failure_keeps_the_conclusion_valid() {
    let mut policy = strict_policy();
    let constraints = policy.signature_constraints.as_mut().unwrap();
    constraints.signing_time = Some(LevelRule::warn());

    let mut model = good_model();
    model.signatures[0].claimed_signing_time = None;

    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());
    let result = engine.validate_signature(SIGNATURE).unwrap();

    assert_eq!(result.conclusion.indication, Indication::Valid);
    assert_eq!(
        result.conclusion.warnings,
        vec![MessageTag::BbbSavIsqpstpAns]
    );

    let sav = result.sav.as_ref().unwrap();
    let signing_time = sav
        .constraints
        .iter()
        .find(|c| c.name == MessageTag::BbbSavIsqpstp)
        .unwrap();
    assert_eq!(signing_time.status, ConstraintStatus::Warning);
}

#[test]
fn inform_level_failure_is_recorded_as_information() {
    let mut policy = strict_policy();
    let constraints = policy.signature_constraints.as_mut().unwrap();
    constraints.content_type = Some(ValueRule {
        level: Level::Inform,
        value: "text/xml".to_owned(),
    });

    let model = good_model(); // carries no content-type property
    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());
    let result = engine.validate_signature(SIGNATURE).unwrap();

    assert_eq!(result.conclusion.indication, Indication::Valid);
    assert_eq!(result.conclusion.infos, vec![MessageTag::BbbSavIsqpctpAns]);
    assert!(result.conclusion.warnings.is_empty());
}

#[test]
fn fail_level_content_type_mismatch_fails() {
    let mut policy = strict_policy();
    let constraints = policy.signature_constraints.as_mut().unwrap();
    constraints.content_type = Some(ValueRule {
        level: Level::Fail,
        value: "text/xml".to_owned(),
    });

    let mut model = good_model();
    model.signatures[0].content_type = Some("application/pdf".to_owned());

    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());
    let result = engine.validate_signature(SIGNATURE).unwrap();

    assert_eq!(result.conclusion.indication, Indication::Invalid);
    assert_eq!(
        result.conclusion.sub_indication,
        Some(SubIndication::SigConstraintsFailure)
    );
}

#[test]
fn sav_short_circuits_after_first_fail_level_failure() {
    let mut policy = strict_policy();
    let constraints = policy.signature_constraints.as_mut().unwrap();
    constraints.signing_time = Some(LevelRule::fail());
    require_certified_role(constraints, "manager");

    let mut model = good_model();
    model.signatures[0].claimed_signing_time = None;

    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());
    let result = engine.validate_signature(SIGNATURE).unwrap();

    let sav = result.sav.as_ref().unwrap();
    // The certified-roles FAIL check after the failed signing-time check
    // was not evaluated.
    assert!(sav
        .constraints
        .iter()
        .all(|c| c.name != MessageTag::BbbSavIcerrm));
    assert_eq!(sav.conclusion.errors, vec![MessageTag::BbbSavIsqpstpAns]);
}

#[test]
fn mandatory_signature_policy_missing_is_no_policy() {
    let mut policy = strict_policy();
    let constraints = policy.signature_constraints.as_mut().unwrap();
    constraints.signature_policy = Some(MultiValuesRule {
        level: Level::Fail,
        values: vec!["1.2.3.4.5".to_owned()],
    });

    let model = good_model(); // no explicit policy in the signature
    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());
    let result = engine.validate_signature(SIGNATURE).unwrap();

    assert_eq!(result.conclusion.indication, Indication::Indeterminate);
    assert_eq!(result.conclusion.sub_indication, Some(SubIndication::NoPolicy));

    // VCI failure short-circuits the run: no other block was evaluated.
    assert!(result.vci.is_some());
    assert!(result.isc.is_none());
    assert!(result.cv.is_none());
    assert!(result.xcv.is_none());
    assert!(result.sav.is_none());
}

#[test]
fn accepted_signature_policy_passes_vci() {
    let mut policy = strict_policy();
    let constraints = policy.signature_constraints.as_mut().unwrap();
    constraints.signature_policy = Some(MultiValuesRule {
        level: Level::Fail,
        values: vec!["1.2.3.4.5".to_owned()],
    });

    let mut model = good_model();
    model.signatures[0].signature_policy_id = Some("1.2.3.4.5".to_owned());

    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());
    let result = engine.validate_signature(SIGNATURE).unwrap();

    assert_eq!(result.conclusion.indication, Indication::Valid);
    let vci = result.vci.as_ref().unwrap();
    assert_eq!(vci.constraints.len(), 2);
}

#[test]
fn unknown_signature_policy_is_policy_processing_error() {
    let mut policy = strict_policy();
    let constraints = policy.signature_constraints.as_mut().unwrap();
    constraints.signature_policy = Some(MultiValuesRule {
        level: Level::Fail,
        values: vec!["1.2.3.4.5".to_owned()],
    });

    let mut model = good_model();
    model.signatures[0].signature_policy_id = Some("9.9.9".to_owned());

    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());
    let result = engine.validate_signature(SIGNATURE).unwrap();

    assert_eq!(result.conclusion.indication, Indication::Indeterminate);
    assert_eq!(
        result.conclusion.sub_indication,
        Some(SubIndication::PolicyProcessingError)
    );
}

#[test]
fn key_usage_constraint_checks_the_signing_certificate() {
    let mut policy = strict_policy();
    let constraints = policy.signature_constraints.as_mut().unwrap();
    constraints.signing_certificate_key_usage = Some(MultiValuesRule {
        level: Level::Fail,
        values: vec!["nonRepudiation".to_owned()],
    });

    // The fixture signer asserts nonRepudiation: passes.
    let model = good_model();
    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());
    let result = engine.validate_signature(SIGNATURE).unwrap();
    assert_eq!(result.conclusion.indication, Indication::Valid);

    // Remove the bit: the ISC policy check fails.
    let mut model = good_model();
    model.certificates[0].key_usage =
        vec![ades_validation::algorithms::KeyUsageBit::DigitalSignature];
    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());
    let result = engine.validate_signature(SIGNATURE).unwrap();

    let isc = result.isc.as_ref().unwrap();
    assert_eq!(isc.conclusion.indication, Indication::Invalid);
    assert_eq!(
        isc.conclusion.sub_indication,
        Some(SubIndication::ChainConstraintsFailure)
    );
    assert_eq!(result.conclusion.indication, Indication::Invalid);
}
