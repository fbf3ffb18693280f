// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Error represents the various errors which can come up while declaring
/// arguments, registering them in a Context, or looking them up again.
#[derive(Debug, Error)]
pub enum Error {
    /// An Argument was added to a Context, but one of its names was already
    /// registered by some other Argument.
    #[error("duplicate argument name: {0}")]
    DuplicateName(String),
    /// Errors akin to EINVAL - essentially, an argument passed into a function
    /// was invalid in some way..
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A flag spelling was looked up which no Argument in the Context
    /// registered.
    #[error("invalid flag: {0}")]
    InvalidFlag(String),
    /// A raw command-line value couldn't be interpreted according to the kind
    /// of the Argument it was assigned to.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// An I/O error, generally encountered while writing help output.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// A Result type which uses taskctx's internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
