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

//! This crate provides the verdict primitives used by the `ades-validation`
//! crate and related crates: indications and sub-indications, the message-tag
//! taxonomy describing individual validation rules, constraint severity
//! levels, and the building-block result types accumulated while a token is
//! validated.
//!
//! The types in this crate are the stable contract consumed by report
//! renderers; all of them serialize with the field and code names those
//! renderers rely on.

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![deny(warnings)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg, doc_cfg_hide))]

mod block;
mod conclusion;
mod constraint;
mod indication;
mod message_tag;

#[cfg(test)]
pub(crate) mod tests;

pub use block::{BlockResult, BlockResultBuilder, BlockType, Check};
pub use conclusion::Conclusion;
pub use constraint::{ConstraintResult, ConstraintStatus, Level};
pub use indication::{Indication, SubIndication};
pub use message_tag::MessageTag;
