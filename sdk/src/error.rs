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

use thiserror::Error;

use crate::Context;

/// Errors raised by the validation engine.
///
/// These describe caller or configuration bugs only. Every verdict the
/// validation model can express — missing revocation data, broken digests,
/// untrusted chains, orphan references — is reported as data on a
/// conclusion, never as an `Error`.
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The validation policy defines no constraint group for the requested
    /// context.
    #[error("the validation policy defines no constraint group for context {0:?}")]
    UnsupportedContext(Context),

    /// A validation entry point was called with a token id that is not
    /// present in the diagnostic model.
    #[error("token {0:?} is not present in the diagnostic model")]
    UnknownToken(String),
}

/// A specialized `Result` type for validation engine errors.
pub type Result<T> = std::result::Result<T, Error>;
