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

//! Timestamp, revocation and counter-signature token validation, plus the
//! whole-model entry point.

#![allow(clippy::unwrap_used)]

mod common;

use ades_validation::{
    diagnostic::{DigestMatcherType, SignatureNode},
    verdict::{Indication, SubIndication},
    BasicBuildingBlocks, Context, Error,
};
use common::*;

#[test]
fn timestamp_token_validates_through_its_own_blocks() {
    let mut model = good_model();
    model.timestamps.push(signature_timestamp());

    let policy = strict_policy();
    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());
    let result = engine.validate_timestamp(SIG_TIMESTAMP).unwrap();

    assert_eq!(result.context, Context::Timestamp);
    assert!(result.vci.is_none());
    assert!(result.isc.is_some());
    assert!(result.cv.is_some());
    assert!(result.xcv.is_some());
    assert!(result.sav.is_some());
    assert_eq!(result.conclusion.indication, Indication::Valid);
}

#[test]
fn timestamp_with_broken_imprint_is_hash_failure() {
    let mut model = good_model();
    let mut timestamp = signature_timestamp();
    timestamp
        .digest_matchers
        .iter_mut()
        .find(|m| m.matcher_type == DigestMatcherType::MessageImprint)
        .unwrap()
        .intact = false;
    model.timestamps.push(timestamp);

    let policy = strict_policy();
    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());
    let result = engine.validate_timestamp(SIG_TIMESTAMP).unwrap();

    assert_eq!(result.conclusion.indication, Indication::Invalid);
    assert_eq!(
        result.conclusion.sub_indication,
        Some(SubIndication::HashFailure)
    );
}

#[test]
fn revocation_token_validates_its_issuer_chain() {
    let model = good_model();
    let policy = strict_policy();
    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());

    let result = engine.validate_revocation(CRL).unwrap();

    assert_eq!(result.context, Context::Revocation);
    assert!(result.cv.is_none());
    assert!(result.sav.is_none());
    // The CRL is signed by the trust anchor directly.
    assert_eq!(result.conclusion.indication, Indication::Valid);
}

#[test]
fn counter_signature_uses_its_own_constraint_group() {
    let mut model = good_model();
    let mut counter = SignatureNode::new("sig-counter");
    counter.parent_id = Some(SIGNATURE.to_owned());
    counter.digest_matchers = vec![
        matcher(DigestMatcherType::SignedData, true, true),
        matcher(DigestMatcherType::SignatureValue, true, true),
    ];
    counter.signing_certificate_ref = model.signatures[0].signing_certificate_ref.clone();
    counter.signature_algorithm = Some(rsa_sha256());
    model.signatures.push(counter);

    let mut policy = strict_policy();
    // Counter-signatures require a certified role; top-level signatures do
    // not.
    require_certified_role(
        policy.counter_signature_constraints.as_mut().unwrap(),
        "notary",
    );

    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());

    let top = engine.validate_signature(SIGNATURE).unwrap();
    assert_eq!(top.context, Context::Signature);
    assert_eq!(top.conclusion.indication, Indication::Valid);

    let counter = engine.validate_signature("sig-counter").unwrap();
    assert_eq!(counter.context, Context::CounterSignature);
    assert_eq!(counter.conclusion.indication, Indication::Invalid);
    assert_eq!(
        counter.conclusion.sub_indication,
        Some(SubIndication::SigConstraintsFailure)
    );
}

#[test]
fn validate_all_walks_every_token_in_model_order() {
    let mut model = good_model();
    model.timestamps.push(signature_timestamp());

    let policy = strict_policy();
    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());

    let results = engine.validate_all().unwrap();
    let ids: Vec<&str> = results.iter().map(|r| r.token_id.as_str()).collect();
    assert_eq!(ids, vec![SIGNATURE, SIG_TIMESTAMP, CRL]);
}

#[test]
fn one_broken_token_does_not_disturb_its_siblings() {
    let mut model = good_model();
    model.timestamps.push(signature_timestamp());

    // An orphan signing-certificate reference on a second signature.
    let mut orphan = SignatureNode::new("sig-orphan");
    orphan.signing_certificate_ref = Some(ades_validation::diagnostic::SigningCertificateRef {
        certificate_id: Some("cert-not-in-model".to_owned()),
        ..Default::default()
    });
    model.signatures.push(orphan);

    let policy = strict_policy();
    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());
    let results = engine.validate_all().unwrap();

    let orphan_result = results.iter().find(|r| r.token_id == "sig-orphan").unwrap();
    assert_eq!(
        orphan_result.conclusion.sub_indication,
        Some(SubIndication::NoSigningCertificateFound)
    );

    let good = results.iter().find(|r| r.token_id == SIGNATURE).unwrap();
    assert_eq!(good.conclusion.indication, Indication::Valid);
}

#[test]
fn unknown_token_id_is_a_contract_error() {
    let model = good_model();
    let policy = strict_policy();
    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());

    assert!(matches!(
        engine.validate_signature("no-such-signature"),
        Err(Error::UnknownToken(_))
    ));
}

#[test]
fn missing_context_group_is_a_contract_error() {
    let mut model = good_model();
    model.timestamps.push(signature_timestamp());

    let mut policy = strict_policy();
    policy.timestamp_constraints = None;

    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());
    assert!(matches!(
        engine.validate_timestamp(SIG_TIMESTAMP),
        Err(Error::UnsupportedContext(Context::Timestamp))
    ));
}

#[test]
fn results_round_trip_through_serde() {
    let mut model = good_model();
    model.timestamps.push(signature_timestamp());

    let policy = strict_policy();
    let engine = BasicBuildingBlocks::at(&model, &policy, validation_time());
    let results = engine.validate_all().unwrap();

    let json = serde_json::to_string_pretty(&results).unwrap();
    assert!(json.contains("\"VALID\""));
    assert!(json.contains("BBB_CV_ISI"));

    let back: Vec<ades_validation::BasicBuildingBlocksResult> =
        serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), results.len());
    assert_eq!(back[0].conclusion, results[0].conclusion);
}
