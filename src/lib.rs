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

#![deny(
    anonymous_parameters,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! taskctx resolves the command-line arguments a single task accepts. A
//! Context collects the task's declared Arguments, lets a parser look them up
//! by name or by flag spelling to assign their values, and renders sorted
//! help output for them.

/// argument defines a single declared parameter, along with its kind and
/// value.
pub mod argument;
/// context defines the queryable set of Arguments for one task invocation.
pub mod context;
/// error defines error types specific to taskctx.
pub mod error;
/// help provides the formatting and sorting used when rendering help output
/// for a Context.
pub mod help;

#[cfg(test)]
mod tests;

// Re-export most commonly used symbols, to allow using this library with just
// one "use".

pub use self::argument::{Argument, Kind, Value};
pub use self::context::Context;
pub use self::error::{Error, Result};
pub use self::help::{to_flag, HelpTuple, Placeholders};
