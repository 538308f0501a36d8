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

use crate::{Indication, MessageTag, SubIndication};

/// Overall outcome of a building block or of a whole token validation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Conclusion {
    /// Top-level verdict.
    pub indication: Indication,

    /// Refinement code; absent when the indication is `VALID`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_indication: Option<SubIndication>,

    /// Answer tags of the `FAIL`-level rules that failed.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<MessageTag>,

    /// Answer tags of the `WARN`-level rules that failed.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<MessageTag>,

    /// Answer tags of the `INFORM`-level rules that failed.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub infos: Vec<MessageTag>,
}

impl Conclusion {
    /// Returns a `VALID` conclusion with no messages.
    pub fn passed() -> Self {
        Conclusion {
            indication: Indication::Valid,
            sub_indication: None,
            errors: vec![],
            warnings: vec![],
            infos: vec![],
        }
    }

    /// Returns `true` when the indication is `VALID`.
    pub fn is_valid(&self) -> bool {
        self.indication.is_valid()
    }
}

impl Default for Conclusion {
    fn default() -> Self {
        Self::passed()
    }
}
