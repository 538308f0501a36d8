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

//! The validation process: per-block evaluation and the orchestrator that
//! composes them.

mod bbb;
mod cv;
mod isc;
mod poe;
mod sav;
mod token;
mod vci;
mod xcv;

use chrono::{DateTime, Utc};

pub use bbb::BasicBuildingBlocksResult;
pub use poe::PoeSet;
pub use vci::{ANY_POLICY, NO_POLICY};

use crate::{Context, DiagnosticModel, Error, Result, ValidationPolicy};

/// The basic building blocks engine for one validation run.
///
/// Evaluation is a pure function of the diagnostic model, the policy, the
/// token and the validation instant: no I/O, no shared mutable state, and
/// the same inputs always produce the same results. Tokens are independent
/// of each other, so callers may evaluate them from parallel threads; the
/// engine itself borrows the model and policy immutably and allocates all
/// result objects per call.
#[derive(Clone, Copy, Debug)]
pub struct BasicBuildingBlocks<'a> {
    model: &'a DiagnosticModel,
    policy: &'a ValidationPolicy,
    validation_time: DateTime<Utc>,
}

impl<'a> BasicBuildingBlocks<'a> {
    /// Creates an engine validating at the current time.
    pub fn new(model: &'a DiagnosticModel, policy: &'a ValidationPolicy) -> Self {
        Self::at(model, policy, Utc::now())
    }

    /// Creates an engine validating at the given instant.
    pub fn at(
        model: &'a DiagnosticModel,
        policy: &'a ValidationPolicy,
        validation_time: DateTime<Utc>,
    ) -> Self {
        BasicBuildingBlocks {
            model,
            policy,
            validation_time,
        }
    }

    /// The validation instant of this run.
    pub fn validation_time(&self) -> DateTime<Utc> {
        self.validation_time
    }

    /// Validates one signature (context `SIGNATURE`, or
    /// `COUNTER_SIGNATURE` when the signature has a parent).
    pub fn validate_signature(&self, id: &str) -> Result<BasicBuildingBlocksResult> {
        let signature = self
            .model
            .signature(id)
            .ok_or_else(|| Error::UnknownToken(id.to_owned()))?;

        let context = if signature.parent_id.is_some() {
            Context::CounterSignature
        } else {
            Context::Signature
        };

        let poe = PoeSet::bootstrap(self.model, self.validation_time);
        bbb::validate_signature_token(
            self.model,
            signature,
            context,
            self.policy,
            &poe,
            self.validation_time,
        )
    }

    /// Validates one timestamp token.
    pub fn validate_timestamp(&self, id: &str) -> Result<BasicBuildingBlocksResult> {
        let timestamp = self
            .model
            .timestamp(id)
            .ok_or_else(|| Error::UnknownToken(id.to_owned()))?;

        let poe = PoeSet::bootstrap(self.model, self.validation_time);
        bbb::validate_timestamp_token(
            self.model,
            timestamp,
            self.policy,
            &poe,
            self.validation_time,
        )
    }

    /// Validates one revocation token.
    pub fn validate_revocation(&self, id: &str) -> Result<BasicBuildingBlocksResult> {
        let revocation = self
            .model
            .revocation(id)
            .ok_or_else(|| Error::UnknownToken(id.to_owned()))?;

        let poe = PoeSet::bootstrap(self.model, self.validation_time);
        bbb::validate_revocation_token(
            self.model,
            revocation,
            self.policy,
            &poe,
            self.validation_time,
        )
    }

    /// Validates every signature, timestamp and revocation token of the
    /// model, in model order.
    ///
    /// Fails fast on configuration bugs (a context without a constraint
    /// group); everything a malformed model can express — orphan
    /// references, cycles, missing data — is reported on the per-token
    /// conclusions instead.
    pub fn validate_all(&self) -> Result<Vec<BasicBuildingBlocksResult>> {
        let poe = PoeSet::bootstrap(self.model, self.validation_time);
        let mut results =
            Vec::with_capacity(self.model.signatures.len() + self.model.timestamps.len());

        for signature in &self.model.signatures {
            let context = if signature.parent_id.is_some() {
                Context::CounterSignature
            } else {
                Context::Signature
            };
            results.push(bbb::validate_signature_token(
                self.model,
                signature,
                context,
                self.policy,
                &poe,
                self.validation_time,
            )?);
        }

        for timestamp in &self.model.timestamps {
            results.push(bbb::validate_timestamp_token(
                self.model,
                timestamp,
                self.policy,
                &poe,
                self.validation_time,
            )?);
        }

        for revocation in &self.model.revocations {
            results.push(bbb::validate_revocation_token(
                self.model,
                revocation,
                self.policy,
                &poe,
                self.validation_time,
            )?);
        }

        Ok(results)
    }
}
