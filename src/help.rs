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

use crate::argument::{is_short_name, Argument, Kind};
use crate::error::*;
use lazy_static::lazy_static;
#[cfg(feature = "configuration")]
use serde::{Deserialize, Serialize};
use std::io::Write;

/// A HelpTuple is a single line of help output: the usage string for an
/// Argument (e.g. "-f STRING, --foo=STRING"), and its description.
pub type HelpTuple = (String, String);

/// Placeholders maps each argument Kind to the placeholder shown after the
/// argument's flags in help output. A Kind with no placeholder (by default,
/// only Boolean) is rendered as a bare flag.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "configuration", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "configuration", serde(default))]
pub struct Placeholders {
    pub string: Option<String>,
    pub integer: Option<String>,
    pub boolean: Option<String>,
}

impl Placeholders {
    /// Returns the placeholder to use for the given Kind, if any.
    pub fn for_kind(&self, kind: Kind) -> Option<&str> {
        let placeholder = match kind {
            Kind::String => self.string.as_ref(),
            Kind::Integer => self.integer.as_ref(),
            Kind::Boolean => self.boolean.as_ref(),
        };
        placeholder.map(|p| p.as_str())
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Placeholders {
            string: Some("STRING".to_owned()),
            integer: Some("INT".to_owned()),
            boolean: None,
        }
    }
}

lazy_static! {
    static ref DEFAULT_PLACEHOLDERS: Placeholders = Placeholders::default();
}

/// Returns the shared default Placeholders table.
pub(crate) fn default_placeholders() -> &'static Placeholders {
    &*DEFAULT_PLACEHOLDERS
}

/// Render the given name the way it must be spelled on the command line:
/// "-f" for single-character names, "--foo" for everything else.
pub fn to_flag(name: &str) -> String {
    match is_short_name(name) {
        true => format!("-{}", name),
        false => format!("--{}", name),
    }
}

/// Builds the usage half of a HelpTuple for the given Argument. Short flags
/// are listed before long ones, and each group keeps its declared order.
/// Short flags take their value as "-f VALUE", long ones as "--foo=VALUE".
pub(crate) fn usage_for(argument: &Argument, placeholders: &Placeholders) -> String {
    let placeholder = placeholders.for_kind(argument.get_kind());
    let (short, long): (Vec<&String>, Vec<&String>) = argument
        .get_names()
        .iter()
        .partition(|n| is_short_name(n.as_str()));

    short
        .into_iter()
        .map(|n| match placeholder {
            None => to_flag(n),
            Some(p) => format!("{} {}", to_flag(n), p),
        })
        .chain(long.into_iter().map(|n| match placeholder {
            None => to_flag(n),
            Some(p) => format!("{}={}", to_flag(n), p),
        }))
        .collect::<Vec<String>>()
        .join(", ")
}

/// The key help output is sorted by. Arguments are keyed by their first
/// short name, or their first long name if they have no short names at all.
/// Arguments with only long names sort before any with a short name, and
/// keys compare case-insensitively with lowercase winning ties. Keys which
/// still tie (e.g. "Ab" and "AB") are ordered by their case-inverted
/// spelling, so more lowercase letters sort first.
pub(crate) fn sort_key(argument: &Argument) -> (bool, String, bool, String) {
    let short = argument
        .get_names()
        .iter()
        .find(|n| is_short_name(n.as_str()));
    let key = short.unwrap_or(&argument.get_names()[0]);
    let lowercase = key.to_lowercase();
    let is_uppercase = *key != lowercase;
    let inverted: String = key
        .chars()
        .flat_map(|c| -> Vec<char> {
            match c.is_uppercase() {
                true => c.to_lowercase().collect(),
                false => c.to_uppercase().collect(),
            }
        })
        .collect();
    (short.is_some(), lowercase, is_uppercase, inverted)
}

/// Write the given help tuples out as an aligned, human-readable list, one
/// Argument per line.
pub fn write_help<W: Write>(f: &mut W, tuples: &[HelpTuple]) -> Result<()> {
    let width = tuples
        .iter()
        .map(|t| t.0.chars().count())
        .max()
        .unwrap_or(0);

    let mut s = String::new();
    for (usage, description) in tuples {
        let line = format!("  {:<width$}    {}", usage, description, width = width);
        s.push_str(line.trim_end());
        s.push('\n');
    }

    f.write_all(s.as_bytes())?;
    Ok(())
}
