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

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::DiagnosticModel;

/// Proof-of-existence baseline for one validation run.
///
/// Each timestamp whose message imprint verified contributes a POE at its
/// production time for every token it covers (and for itself). Tokens
/// without any usable POE fall back to the validation instant: the engine
/// can only assert they exist "now".
///
/// The set is computed once during validation context initialisation and
/// passed by reference into the blocks that consume it; blocks never mutate
/// it.
#[derive(Clone, Debug)]
pub struct PoeSet {
    validation_time: DateTime<Utc>,
    earliest: HashMap<String, DateTime<Utc>>,
}

impl PoeSet {
    /// Builds the POE set for a model at the given validation instant.
    pub fn bootstrap(model: &DiagnosticModel, validation_time: DateTime<Utc>) -> Self {
        let mut earliest: HashMap<String, DateTime<Utc>> = HashMap::new();

        for timestamp in &model.timestamps {
            if !timestamp.message_imprint_intact() {
                continue;
            }

            let mut record = |id: &str| {
                let entry = earliest
                    .entry(id.to_owned())
                    .or_insert(timestamp.production_time);
                if timestamp.production_time < *entry {
                    *entry = timestamp.production_time;
                }
            };

            record(&timestamp.id);
            for object in &timestamp.timestamped_objects {
                record(&object.id);
            }
        }

        PoeSet {
            validation_time,
            earliest,
        }
    }

    /// Returns the earliest proven existence time for the given token,
    /// falling back to the validation instant.
    pub fn poe_time(&self, token_id: &str) -> DateTime<Utc> {
        self.earliest
            .get(token_id)
            .copied()
            .unwrap_or(self.validation_time)
    }

    /// Returns `true` when a proof of existence for the token predates the
    /// given instant.
    pub fn has_poe_before(&self, token_id: &str, instant: DateTime<Utc>) -> bool {
        self.poe_time(token_id) < instant
    }

    /// The validation instant this set was built for.
    pub fn validation_time(&self) -> DateTime<Utc> {
        self.validation_time
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::TimeZone;

    use super::*;
    use crate::diagnostic::{
        DigestMatcher, DigestMatcherType, TimestampNode, TimestampType, TimestampedObject,
        TimestampedObjectType,
    };

    fn imprint(intact: bool) -> DigestMatcher {
        DigestMatcher {
            matcher_type: DigestMatcherType::MessageImprint,
            name: None,
            digest_algorithm: None,
            found: true,
            intact,
        }
    }

    fn timestamp(id: &str, time: DateTime<Utc>, covers: &str, intact: bool) -> TimestampNode {
        TimestampNode {
            id: id.to_owned(),
            timestamp_type: TimestampType::SignatureTimestamp,
            production_time: time,
            digest_matchers: vec![imprint(intact)],
            signing_certificate_ref: None,
            signature_algorithm: None,
            timestamped_objects: vec![TimestampedObject {
                object_type: TimestampedObjectType::Signature,
                id: covers.to_owned(),
            }],
        }
    }

    #[test]
    fn earliest_intact_timestamp_wins() {
        let t1 = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

        let model = DiagnosticModel {
            timestamps: vec![
                timestamp("tst-1", t1, "sig-1", true),
                timestamp("tst-2", t2, "sig-1", true),
            ],
            ..Default::default()
        };

        let poe = PoeSet::bootstrap(&model, now);
        assert_eq!(poe.poe_time("sig-1"), t2);
        assert_eq!(poe.poe_time("tst-1"), t1);
    }

    #[test]
    fn broken_imprint_contributes_nothing() {
        let t1 = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

        let model = DiagnosticModel {
            timestamps: vec![timestamp("tst-1", t1, "sig-1", false)],
            ..Default::default()
        };

        let poe = PoeSet::bootstrap(&model, now);
        assert_eq!(poe.poe_time("sig-1"), now);
        assert!(!poe.has_poe_before("sig-1", now));
    }
}
