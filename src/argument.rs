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

use crate::error::*;
use log::trace;
#[cfg(feature = "configuration")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind denotes the type of value an Argument holds. It decides how raw
/// command-line values are interpreted, and which placeholder (if any) is
/// shown for the Argument in help output.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "configuration", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "configuration", serde(rename_all = "lowercase"))]
pub enum Kind {
    /// A freeform string value.
    String,
    /// A signed integer value.
    Integer,
    /// A boolean value, which is either on or off. Boolean arguments never
    /// take a separate value on the command line.
    Boolean,
}

impl Kind {
    /// Returns the value an Argument of this kind reports before anything has
    /// been assigned to it.
    pub fn default_value(&self) -> Value {
        match *self {
            Kind::String => Value::String(String::new()),
            Kind::Integer => Value::Integer(0),
            Kind::Boolean => Value::Boolean(false),
        }
    }
}

impl Default for Kind {
    fn default() -> Self {
        Kind::String
    }
}

/// Return the boolean interpretation of a string, or an error if the string
/// isn't recognized as a valid boolean value.
fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_ref() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::InvalidValue(format!(
            "invalid boolean value '{}'",
            value
        ))),
    }
}

/// A Value is the value associated with a given Argument.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    /// Returns the string this Value holds, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match *self {
            Value::String(ref s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the integer this Value holds, if it is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Returns the boolean this Value holds, if it is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Boolean(b) => Some(b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::String(ref s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

/// Returns true if the given name is a "short" name, i.e. one which is
/// spelled on the command line with a single hyphen ("-f").
pub(crate) fn is_short_name(name: &str) -> bool {
    name.chars().count() == 1
}

/// An Argument is a single parameter some task accepts. It has one or more
/// names (the first one is canonical, the rest are aliases), a Kind, and
/// possibly a value once the command line has been parsed.
///
/// Arguments deliberately don't implement PartialEq: two Arguments with the
/// same names are still different Arguments. Use `std::ptr::eq` to check
/// whether two references point at the same one.
#[derive(Clone, Debug)]
pub struct Argument {
    names: Vec<String>,
    kind: Kind,
    positional: bool,
    help: Option<String>,
    value: Option<Value>,
}

impl Argument {
    /// Constructs a new string-typed, named (non-positional) Argument with
    /// the given single name.
    pub fn new(name: &str) -> Argument {
        Argument {
            names: vec![name.to_owned()],
            kind: Kind::default(),
            positional: false,
            help: None,
            value: None,
        }
    }

    /// Constructs a new Argument which can be referred to by any of the given
    /// names. The first name is the canonical one. Repeated names are only
    /// kept once. An empty list of names is an error.
    pub fn with_names<S: AsRef<str>>(names: &[S]) -> Result<Argument> {
        let mut deduped: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            let name: &str = name.as_ref();
            if !deduped.iter().any(|n| n == name) {
                deduped.push(name.to_owned());
            }
        }

        if deduped.is_empty() {
            return Err(Error::InvalidArgument(
                "an argument must have at least one name".to_owned(),
            ));
        }

        Ok(Argument {
            names: deduped,
            kind: Kind::default(),
            positional: false,
            help: None,
            value: None,
        })
    }

    /// Sets the Kind of this Argument.
    pub fn kind(mut self, kind: Kind) -> Argument {
        self.kind = kind;
        self
    }

    /// Marks this Argument as positional (or not).
    pub fn positional(mut self, positional: bool) -> Argument {
        self.positional = positional;
        self
    }

    /// Adds another name this Argument can be referred to by. Names it already
    /// has are ignored.
    pub fn alias(mut self, name: &str) -> Argument {
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_owned());
        }
        self
    }

    /// Sets the human-readable help text for this Argument.
    pub fn help(mut self, help: &str) -> Argument {
        self.help = Some(help.to_owned());
        self
    }

    /// Returns this Argument's canonical name.
    pub fn get_name(&self) -> &str {
        self.names[0].as_str()
    }

    /// Returns every name this Argument accepts, canonical name first.
    pub fn get_names(&self) -> &[String] {
        self.names.as_slice()
    }

    /// Returns this Argument's aliases, i.e. every name except the canonical
    /// one.
    pub fn get_nicknames(&self) -> &[String] {
        &self.names[1..]
    }

    /// Returns the Kind of value this Argument holds.
    pub fn get_kind(&self) -> Kind {
        self.kind
    }

    /// Returns true if this Argument is identified by its position rather
    /// than by a flag.
    pub fn is_positional(&self) -> bool {
        self.positional
    }

    /// Returns the human-readable help text for this Argument, if any.
    pub fn get_help(&self) -> Option<&str> {
        self.help.as_ref().map(|h| h.as_str())
    }

    /// Returns true if this Argument expects a value on the command line.
    /// Only boolean arguments don't.
    pub fn takes_value(&self) -> bool {
        self.kind != Kind::Boolean
    }

    /// Returns true if a value has been assigned to this Argument.
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Returns this Argument's current value, or the default value for its
    /// Kind if nothing has been assigned yet.
    pub fn get_value(&self) -> Value {
        self.value
            .clone()
            .unwrap_or_else(|| self.kind.default_value())
    }

    /// Assign a value to this Argument, replacing any previous one.
    pub fn set_value<V: Into<Value>>(&mut self, value: V) {
        self.value = Some(value.into());
    }

    /// Resets this Argument back to having no value.
    pub fn clear_value(&mut self) {
        self.value = None;
    }

    /// Interpret the given raw command-line value according to this
    /// Argument's Kind, and assign it. If the value can't be interpreted, an
    /// error is returned and the Argument is left unchanged.
    pub fn set_raw_value(&mut self, raw: &str) -> Result<()> {
        trace!("interpreting '{}' for argument '{}'", raw, self.get_name());
        let value = match self.kind {
            Kind::String => Value::String(raw.to_owned()),
            Kind::Integer => Value::Integer(raw.trim().parse::<i64>().map_err(|e| {
                Error::InvalidValue(format!(
                    "invalid integer value '{}' for '{}': {}",
                    raw,
                    self.get_name(),
                    e
                ))
            })?),
            Kind::Boolean => Value::Boolean(parse_bool(raw)?),
        };
        self.value = Some(value);
        Ok(())
    }
}

impl From<&str> for Argument {
    fn from(name: &str) -> Self {
        Argument::new(name)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Argument: {}", self.get_name())?;
        if !self.get_nicknames().is_empty() {
            write!(f, " ({})", self.get_nicknames().join(", "))?;
        }
        f.write_str(">")
    }
}
