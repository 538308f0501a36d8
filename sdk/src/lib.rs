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

//! Basic building blocks validation engine for AdES signatures.
//!
//! This crate implements the basic building blocks (BBB) of the ETSI
//! EN 319 102-1 signature validation model: identification of the signing
//! certificate (ISC), cryptographic verification (CV), X.509 certificate
//! validation (XCV), validation context initialisation (VCI) and signature
//! acceptance validation (SAV), composed per token by an orchestrator that
//! applies the standard indication precedence rules.
//!
//! The engine is a pure computation library. It consumes a read-only
//! [`DiagnosticModel`] produced by upstream signature parsers, a read-only
//! [`ValidationPolicy`], and a validation instant, and produces one
//! [`BasicBuildingBlocksResult`] per signature, timestamp or revocation
//! token. Format decoding, revocation fetching and report rendering are the
//! caller's concern.
//!
//! # Example
//!
//! ```
//! use ades_validation::{BasicBuildingBlocks, DiagnosticModel, ValidationPolicy};
//!
//! let model = DiagnosticModel::default();
//! let policy = ValidationPolicy::default();
//!
//! let engine = BasicBuildingBlocks::new(&model, &policy);
//! let results = engine.validate_all().unwrap();
//! assert!(results.is_empty());
//! ```

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![deny(warnings)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg, doc_cfg_hide))]

pub mod algorithms;
mod context;
pub mod diagnostic;
mod error;
pub mod policy;
pub mod process;

/// Re-export of the verdict primitives shared with report renderers.
pub use ades_verdict as verdict;
pub use context::Context;
pub use diagnostic::DiagnosticModel;
pub use error::{Error, Result};
pub use policy::ValidationPolicy;
pub use process::{BasicBuildingBlocks, BasicBuildingBlocksResult};
