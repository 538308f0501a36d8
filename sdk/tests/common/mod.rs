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

//! Fixture builders shared by the integration tests: a two-certificate
//! chain ending in a trust anchor, a signature over intact data, and a
//! policy exercising the constraints at FAIL level.

#![allow(dead_code)] // not every test binary uses every fixture

use ades_validation::{
    algorithms::{DigestAlgorithm, EncryptionAlgorithm, KeyUsageBit, SignatureAlgorithm},
    diagnostic::{
        CertificateDigest, CertificateNode, CertificateRevocationStatus, DigestMatcher,
        DigestMatcherType, DigestValue, RevocationNode, RevocationType, SignatureNode,
        SigningCertificateRef, TimestampNode, TimestampType, TimestampedObject,
        TimestampedObjectType,
    },
    policy::{CryptographicSuite, Level, LevelRule, MultiValuesRule, TokenConstraints},
    DiagnosticModel, ValidationPolicy,
};
use chrono::{DateTime, TimeZone, Utc};

pub const SIGNER_CERT: &str = "cert-signer";
pub const CA_CERT: &str = "cert-ca";
pub const SIGNATURE: &str = "sig-1";
pub const CRL: &str = "crl-1";
pub const SIG_TIMESTAMP: &str = "tst-1";

/// The fixed validation instant used by the tests.
pub fn validation_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
}

pub fn matcher(matcher_type: DigestMatcherType, found: bool, intact: bool) -> DigestMatcher {
    DigestMatcher {
        matcher_type,
        name: None,
        digest_algorithm: Some(DigestAlgorithm::Sha256),
        found,
        intact,
    }
}

/// An RSA-2048/SHA-256 suite.
pub fn rsa_sha256() -> SignatureAlgorithm {
    SignatureAlgorithm {
        encryption: EncryptionAlgorithm::Rsa,
        digest: DigestAlgorithm::Sha256,
        key_length: Some(2048),
    }
}

pub fn signer_certificate() -> CertificateNode {
    CertificateNode {
        id: SIGNER_CERT.to_owned(),
        subject_name: "CN=Good Signer,O=Example".to_owned(),
        issuer_name: "CN=Example CA,O=Example".to_owned(),
        serial_number: "1001".to_owned(),
        not_before: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        not_after: Utc.with_ymd_and_hms(2028, 1, 1, 0, 0, 0).unwrap(),
        key_usage: vec![KeyUsageBit::DigitalSignature, KeyUsageBit::NonRepudiation],
        self_signed: false,
        trusted: false,
        public_key_algorithm: EncryptionAlgorithm::Rsa,
        public_key_size: 2048,
        certificate_signature: Some(rsa_sha256()),
        digests: vec![CertificateDigest {
            algorithm: DigestAlgorithm::Sha256,
            value: DigestValue(vec![0x11; 32]),
        }],
        issuer_certificate_id: Some(CA_CERT.to_owned()),
        revocation_ids: vec![CRL.to_owned()],
    }
}

pub fn ca_certificate() -> CertificateNode {
    CertificateNode {
        id: CA_CERT.to_owned(),
        subject_name: "CN=Example CA,O=Example".to_owned(),
        issuer_name: "CN=Example CA,O=Example".to_owned(),
        serial_number: "1".to_owned(),
        not_before: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        not_after: Utc.with_ymd_and_hms(2035, 1, 1, 0, 0, 0).unwrap(),
        key_usage: vec![KeyUsageBit::KeyCertSign, KeyUsageBit::CrlSign],
        self_signed: true,
        trusted: true,
        public_key_algorithm: EncryptionAlgorithm::Rsa,
        public_key_size: 4096,
        certificate_signature: Some(rsa_sha256()),
        digests: vec![],
        issuer_certificate_id: None,
        revocation_ids: vec![],
    }
}

pub fn fresh_crl() -> RevocationNode {
    RevocationNode {
        id: CRL.to_owned(),
        revocation_type: RevocationType::Crl,
        issuer_certificate_id: Some(CA_CERT.to_owned()),
        produced_at: Some(Utc.with_ymd_and_hms(2026, 5, 30, 0, 0, 0).unwrap()),
        this_update: Some(Utc.with_ymd_and_hms(2026, 5, 30, 0, 0, 0).unwrap()),
        next_update: Some(Utc.with_ymd_and_hms(2026, 6, 30, 0, 0, 0).unwrap()),
        statuses: vec![CertificateRevocationStatus {
            certificate_id: SIGNER_CERT.to_owned(),
            revoked: false,
            revocation_time: None,
            reason: None,
        }],
    }
}

/// A signature over intact data, referencing the signer certificate.
pub fn good_signature() -> SignatureNode {
    let mut signature = SignatureNode::new(SIGNATURE);
    signature.claimed_signing_time = Some(Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap());
    signature.digest_matchers = vec![
        matcher(DigestMatcherType::SignedData, true, true),
        matcher(DigestMatcherType::SignedProperties, true, true),
        matcher(DigestMatcherType::SignatureValue, true, true),
    ];
    signature.signing_certificate_ref = Some(SigningCertificateRef {
        certificate_id: Some(SIGNER_CERT.to_owned()),
        digest_algorithm: Some(DigestAlgorithm::Sha256),
        digest_value: Some(DigestValue(vec![0x11; 32])),
        issuer_serial: None,
        reference_count: 1,
    });
    signature.signature_algorithm = Some(rsa_sha256());
    signature
}

/// A signature timestamp over the fixture signature, produced shortly after
/// the claimed signing time.
pub fn signature_timestamp() -> TimestampNode {
    TimestampNode {
        id: SIG_TIMESTAMP.to_owned(),
        timestamp_type: TimestampType::SignatureTimestamp,
        production_time: Utc.with_ymd_and_hms(2026, 5, 1, 9, 5, 0).unwrap(),
        digest_matchers: vec![matcher(DigestMatcherType::MessageImprint, true, true)],
        signing_certificate_ref: Some(SigningCertificateRef {
            certificate_id: Some(SIGNER_CERT.to_owned()),
            digest_algorithm: None,
            digest_value: None,
            issuer_serial: None,
            reference_count: 1,
        }),
        signature_algorithm: Some(rsa_sha256()),
        timestamped_objects: vec![TimestampedObject {
            object_type: TimestampedObjectType::Signature,
            id: SIGNATURE.to_owned(),
        }],
    }
}

/// A model with one good signature, its chain, and a fresh CRL.
pub fn good_model() -> DiagnosticModel {
    DiagnosticModel {
        signatures: vec![good_signature()],
        certificates: vec![signer_certificate(), ca_certificate()],
        timestamps: vec![],
        revocations: vec![fresh_crl()],
    }
}

/// Constraints evaluating the chain, revocation and crypto checks at FAIL
/// level.
pub fn fail_level_constraints() -> TokenConstraints {
    TokenConstraints {
        certificate_chain_trust: Some(LevelRule::fail()),
        certificate_validity_range: Some(LevelRule::fail()),
        revocation_data_available: Some(LevelRule::fail()),
        revocation_data_fresh: Some(LevelRule::fail()),
        certificate_not_revoked: Some(LevelRule::fail()),
        ca_certificate_key_usage: Some(LevelRule::fail()),
        certificate_cryptographic: Some(LevelRule::fail()),
        signature_cryptographic: Some(LevelRule::fail()),
        ..Default::default()
    }
}

/// A policy with FAIL-level core constraints for every context.
pub fn strict_policy() -> ValidationPolicy {
    ValidationPolicy {
        name: Some("strict".to_owned()),
        description: None,
        signature_constraints: Some(fail_level_constraints()),
        counter_signature_constraints: Some(fail_level_constraints()),
        timestamp_constraints: Some(fail_level_constraints()),
        revocation_constraints: Some(fail_level_constraints()),
        cryptographic: Some(CryptographicSuite::default()),
    }
}

/// Adds a FAIL-level certified-roles requirement to a constraint group.
pub fn require_certified_role(constraints: &mut TokenConstraints, role: &str) {
    constraints.certified_roles = Some(MultiValuesRule {
        level: Level::Fail,
        values: vec![role.to_owned()],
    });
}
