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

//! Identification of the signing certificate (ISC).
//!
//! Resolves the token's signed signing-certificate reference against the
//! certificates of the diagnostic model. Failure to identify a candidate —
//! including a declared digest or issuer-serial that does not match the
//! resolved certificate — concludes `INDETERMINATE` /
//! `NO_SIGNING_CERTIFICATE_FOUND`; the reference checks are inherent to the
//! identification and are not policy-leveled. The key-usage and
//! reference-uniqueness checks are driven by the policy.

use ades_verdict::{BlockResult, BlockResultBuilder, BlockType, Check, Indication, Level,
    MessageTag, SubIndication};

use crate::{
    diagnostic::CertificateNode,
    policy::TokenConstraints,
    process::token::TokenRef,
    DiagnosticModel,
};

pub(crate) fn identify_signing_certificate(
    model: &DiagnosticModel,
    token: TokenRef<'_>,
    constraints: &TokenConstraints,
) -> BlockResult {
    let mut builder = BlockResultBuilder::new(BlockType::Isc);

    let candidate: Option<&CertificateNode> = token
        .signing_certificate_id()
        .and_then(|id| model.certificate(id));

    builder.check(Check::new(
        MessageTag::BbbIcsIsci,
        candidate.is_some(),
        Level::Fail,
        Indication::Indeterminate,
        SubIndication::NoSigningCertificateFound,
        MessageTag::BbbIcsIsciAns,
    ));

    let Some(certificate) = candidate else {
        return builder.finish();
    };

    if let Some(reference) = token.signing_certificate_ref() {
        // A declared digest that does not match means the reference does
        // not actually designate this certificate: the candidate is lost.
        if let (Some(algorithm), Some(declared)) =
            (reference.digest_algorithm, reference.digest_value.as_ref())
        {
            let digest_valid = certificate
                .digest(algorithm)
                .map(|actual| actual == declared)
                .unwrap_or(false);

            if !builder.check(Check::new(
                MessageTag::BbbIcsIcdvv,
                digest_valid,
                Level::Fail,
                Indication::Indeterminate,
                SubIndication::NoSigningCertificateFound,
                MessageTag::BbbIcsIcdvvAns,
            )) {
                return builder.finish();
            }
        }

        if let Some(issuer_serial) = reference.issuer_serial.as_ref() {
            let issuer_serial_matches = issuer_serial.issuer_name == certificate.issuer_name
                && issuer_serial.serial_number == certificate.serial_number;

            if !builder.check(Check::new(
                MessageTag::BbbIcsAidnasne,
                issuer_serial_matches,
                Level::Fail,
                Indication::Indeterminate,
                SubIndication::NoSigningCertificateFound,
                MessageTag::BbbIcsAidnasneAns,
            )) {
                return builder.finish();
            }
        }

        if let Some(rule) = &constraints.unique_signing_certificate_reference {
            builder.check(Check::new(
                MessageTag::BbbIcsScioo,
                reference.reference_count == 1,
                rule.level,
                Indication::Invalid,
                SubIndication::ChainConstraintsFailure,
                MessageTag::BbbIcsSciooAns,
            ));
        }
    }

    if let Some(rule) = &constraints.signing_certificate_key_usage {
        let key_usage_ok = rule.all_present(certificate.key_usage.iter().map(|b| b.name()));
        builder.check(
            Check::new(
                MessageTag::BbbIcsIscgku,
                key_usage_ok,
                rule.level,
                Indication::Invalid,
                SubIndication::ChainConstraintsFailure,
                MessageTag::BbbIcsIscgkuAns,
            )
            .with_info(certificate.id.clone()),
        );
    }

    builder.finish()
}
