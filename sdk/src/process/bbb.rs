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

//! The basic building blocks orchestrator.
//!
//! Runs the blocks applicable to a token in their fixed order and combines
//! their conclusions. Every applicable block is evaluated even after one of
//! them fails, so reports stay complete; the token's conclusion is the one
//! of the first block in pipeline order (ISC, CV, XCV, SAV) that did not
//! conclude `VALID` — earlier blocks mask later ones. Warnings and infos
//! are aggregated across all blocks.
//!
//! The one exception is VCI: a failed context initialisation means the
//! remaining blocks would run against an unestablished context, so the run
//! short-circuits with VCI's conclusion alone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ades_verdict::{BlockResult, Conclusion};

use crate::{
    diagnostic::{RevocationNode, SignatureNode, TimestampNode},
    policy::ValidationPolicy,
    process::{cv, isc, poe::PoeSet, sav, token::TokenRef, vci, xcv},
    Context, DiagnosticModel, Result,
};

/// Verdict tree for one validated token: one result per building block that
/// ran, plus the combined conclusion.
///
/// The field names of this type and of the nested block results are the
/// stable contract consumed by report renderers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BasicBuildingBlocksResult {
    /// Id of the validated token.
    pub token_id: String,

    /// Context the token was validated in.
    pub context: Context,

    /// Validation context initialisation; signature contexts only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vci: Option<BlockResult>,

    /// Identification of the signing certificate.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub isc: Option<BlockResult>,

    /// Cryptographic verification; not applicable to revocation tokens.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cv: Option<BlockResult>,

    /// X.509 certificate validation.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub xcv: Option<BlockResult>,

    /// Signature acceptance validation; abbreviated for timestamps, absent
    /// for revocation tokens.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sav: Option<BlockResult>,

    /// The combined conclusion for the token.
    pub conclusion: Conclusion,
}

pub(crate) fn validate_signature_token(
    model: &DiagnosticModel,
    signature: &SignatureNode,
    context: Context,
    policy: &ValidationPolicy,
    poe: &PoeSet,
    validation_time: DateTime<Utc>,
) -> Result<BasicBuildingBlocksResult> {
    let constraints = policy.constraints_for(context)?;
    let suite = policy.cryptographic_suite();
    let token = TokenRef::Signature(signature);

    log::debug!("running basic building blocks for signature {}", signature.id);

    let vci = vci::initialize_validation_context(signature, constraints);
    if !vci.conclusion.is_valid() {
        let conclusion = vci.conclusion.clone();
        return Ok(BasicBuildingBlocksResult {
            token_id: signature.id.clone(),
            context,
            vci: Some(vci),
            isc: None,
            cv: None,
            xcv: None,
            sav: None,
            conclusion,
        });
    }

    let isc = isc::identify_signing_certificate(model, token, constraints);
    let cv = cv::cryptographic_verification(token);
    let xcv = xcv::certificate_chain_validation(
        model,
        token.signing_certificate_id(),
        context,
        constraints,
        &suite,
        poe,
        validation_time,
    );
    let sav = sav::signature_acceptance(model, signature, constraints, &suite, poe, validation_time);

    let conclusion = combine([&vci, &isc, &cv, &xcv, &sav]);

    Ok(BasicBuildingBlocksResult {
        token_id: signature.id.clone(),
        context,
        vci: Some(vci),
        isc: Some(isc),
        cv: Some(cv),
        xcv: Some(xcv),
        sav: Some(sav),
        conclusion,
    })
}

pub(crate) fn validate_timestamp_token(
    model: &DiagnosticModel,
    timestamp: &TimestampNode,
    policy: &ValidationPolicy,
    poe: &PoeSet,
    validation_time: DateTime<Utc>,
) -> Result<BasicBuildingBlocksResult> {
    let context = Context::Timestamp;
    let constraints = policy.constraints_for(context)?;
    let suite = policy.cryptographic_suite();
    let token = TokenRef::Timestamp(timestamp);

    log::debug!("running basic building blocks for timestamp {}", timestamp.id);

    let isc = isc::identify_signing_certificate(model, token, constraints);
    let cv = cv::cryptographic_verification(token);
    let xcv = xcv::certificate_chain_validation(
        model,
        token.signing_certificate_id(),
        context,
        constraints,
        &suite,
        poe,
        validation_time,
    );
    let sav = sav::timestamp_acceptance(timestamp, constraints, &suite, poe, validation_time);

    let conclusion = combine([&isc, &cv, &xcv, &sav]);

    Ok(BasicBuildingBlocksResult {
        token_id: timestamp.id.clone(),
        context,
        vci: None,
        isc: Some(isc),
        cv: Some(cv),
        xcv: Some(xcv),
        sav: Some(sav),
        conclusion,
    })
}

pub(crate) fn validate_revocation_token(
    model: &DiagnosticModel,
    revocation: &RevocationNode,
    policy: &ValidationPolicy,
    poe: &PoeSet,
    validation_time: DateTime<Utc>,
) -> Result<BasicBuildingBlocksResult> {
    let context = Context::Revocation;
    let constraints = policy.constraints_for(context)?;
    let suite = policy.cryptographic_suite();
    let token = TokenRef::Revocation(revocation);

    log::debug!(
        "running basic building blocks for revocation data {}",
        revocation.id
    );

    let isc = isc::identify_signing_certificate(model, token, constraints);
    let xcv = xcv::certificate_chain_validation(
        model,
        token.signing_certificate_id(),
        context,
        constraints,
        &suite,
        poe,
        validation_time,
    );

    let conclusion = combine([&isc, &xcv]);

    Ok(BasicBuildingBlocksResult {
        token_id: revocation.id.clone(),
        context,
        vci: None,
        isc: Some(isc),
        cv: None,
        xcv: Some(xcv),
        sav: None,
        conclusion,
    })
}

/// Combines block conclusions: the first non-`VALID` block in pipeline
/// order supplies the indication, sub-indication and errors; warnings and
/// infos are aggregated across every block.
fn combine<const N: usize>(blocks: [&BlockResult; N]) -> Conclusion {
    let mut conclusion = blocks
        .iter()
        .find(|b| !b.conclusion.is_valid())
        .map(|b| b.conclusion.clone())
        .unwrap_or_else(Conclusion::passed);

    conclusion.warnings = blocks
        .iter()
        .flat_map(|b| b.conclusion.warnings.iter().copied())
        .collect();
    conclusion.infos = blocks
        .iter()
        .flat_map(|b| b.conclusion.infos.iter().copied())
        .collect();

    conclusion
}
