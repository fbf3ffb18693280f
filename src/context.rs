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

use crate::argument::{is_short_name, Argument, Value};
use crate::error::*;
use crate::help::{self, HelpTuple, Placeholders};
use indexmap::IndexMap;
use log::{debug, trace};
use std::fmt;
use std::io::Write;

/// A Context is the full set of Arguments one task (or the core program
/// itself) accepts, along with the task's own name and aliases.
///
/// Every Argument is stored exactly once. The by-name, by-flag and positional
/// views all refer back to that single copy, so a value assigned through one
/// view is visible through all of the others.
#[derive(Clone, Default)]
pub struct Context {
    name: Option<String>,
    aliases: Vec<String>,
    /// The Arguments this Context owns, in the order they were added.
    arguments: Vec<Argument>,
    /// Every name of every Argument, mapped to its index in `arguments`.
    args: IndexMap<String, usize>,
    /// Every flag spelling ("--foo", "-f") of every Argument, mapped to its
    /// index in `arguments`.
    flags: IndexMap<String, usize>,
    /// Indices of positional Arguments, in the order they were added.
    positional: Vec<usize>,
    placeholders: Option<Placeholders>,
}

impl Context {
    /// Constructs a new Context with the given name, aliases and initial
    /// Arguments. The Arguments are added in order, exactly as if `add_arg`
    /// were called for each one, so any name collision is an error.
    pub fn new(name: Option<&str>, aliases: &[&str], args: Vec<Argument>) -> Result<Context> {
        let mut context = Context {
            name: name.map(|n| n.to_owned()),
            ..Default::default()
        };
        for &alias in aliases {
            if !context.aliases.iter().any(|a| a == alias) {
                context.aliases.push(alias.to_owned());
            }
        }
        for arg in args {
            context.add_arg(arg)?;
        }

        debug!(
            "constructed context {:?} with {} argument(s)",
            context.name,
            context.len()
        );
        Ok(context)
    }

    /// Constructs a new Context exactly like `new`, except that every
    /// Argument with no short name is first given one: the first character of
    /// its canonical name. Arguments are visited in the order given, and a
    /// character which any Argument already uses as a name (or which an
    /// earlier Argument was just given) is skipped, so that Argument stays
    /// long-only.
    pub fn with_short_flags(
        name: Option<&str>,
        aliases: &[&str],
        args: Vec<Argument>,
    ) -> Result<Context> {
        let mut taken: Vec<String> = args
            .iter()
            .flat_map(|a| a.get_names().iter().cloned())
            .collect();

        let args = args
            .into_iter()
            .map(|arg| {
                if arg.get_names().iter().any(|n| is_short_name(n)) {
                    return arg;
                }
                let initial = match arg.get_name().chars().next() {
                    None => return arg,
                    Some(c) => c.to_string(),
                };
                if taken.contains(&initial) {
                    trace!("short flag '-{}' for {} is taken", initial, arg);
                    return arg;
                }
                taken.push(initial.clone());
                arg.alias(&initial)
            })
            .collect();

        Context::new(name, aliases, args)
    }

    /// Constructs a new, empty Context with the given name.
    pub fn named(name: &str) -> Context {
        Context {
            name: Some(name.to_owned()),
            ..Default::default()
        }
    }

    /// Returns this Context's name, if it has one.
    pub fn get_name(&self) -> Option<&str> {
        self.name.as_ref().map(|n| n.as_str())
    }

    /// Returns the alternate names this Context (not its Arguments) can be
    /// referred to by.
    pub fn get_aliases(&self) -> &[String] {
        self.aliases.as_slice()
    }

    /// Returns true if the given name is either this Context's name, or one
    /// of its aliases.
    pub fn has_alias(&self, name: &str) -> bool {
        self.get_name() == Some(name) || self.aliases.iter().any(|a| a == name)
    }

    /// Add the given Argument to this Context. It becomes reachable through
    /// every one of its names, every one of its flag spellings and, if it is
    /// positional, through the list of positional arguments.
    ///
    /// If any of its names (or flag spellings) are already taken, an error is
    /// returned and this Context is left untouched.
    pub fn add_arg<A: Into<Argument>>(&mut self, arg: A) -> Result<()> {
        let arg = arg.into();

        for name in arg.get_names() {
            if self.args.contains_key(name) || self.flags.contains_key(&help::to_flag(name)) {
                return Err(Error::DuplicateName(format!(
                    "tried to add argument '{}', but '{}' is already registered",
                    arg.get_name(),
                    name
                )));
            }
        }

        let idx = self.arguments.len();
        for name in arg.get_names() {
            self.args.insert(name.clone(), idx);
            self.flags.insert(help::to_flag(name), idx);
        }
        if arg.is_positional() {
            self.positional.push(idx);
        }

        debug!(
            "registered {} in context {:?} (positional: {})",
            arg,
            self.name,
            arg.is_positional()
        );
        self.arguments.push(arg);
        Ok(())
    }

    /// Returns the number of distinct Arguments in this Context (not the
    /// number of names they have).
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns true if this Context holds no Arguments at all.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    pub fn has_arg(&self, name: &str) -> bool {
        self.args.contains_key(name)
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains_key(flag)
    }

    /// Look up an Argument by any of its names.
    pub fn arg(&self, name: &str) -> Option<&Argument> {
        self.args.get(name).map(|&idx| &self.arguments[idx])
    }

    pub fn arg_mut(&mut self, name: &str) -> Option<&mut Argument> {
        match self.args.get(name) {
            None => None,
            Some(&idx) => Some(&mut self.arguments[idx]),
        }
    }

    /// Look up an Argument by any of its flag spellings, e.g. "--foo" or "-f".
    pub fn flag(&self, flag: &str) -> Option<&Argument> {
        self.flags.get(flag).map(|&idx| &self.arguments[idx])
    }

    pub fn flag_mut(&mut self, flag: &str) -> Option<&mut Argument> {
        match self.flags.get(flag) {
            None => None,
            Some(&idx) => Some(&mut self.arguments[idx]),
        }
    }

    /// Returns every registered name, in the order they were added.
    pub fn arg_names(&self) -> impl Iterator<Item = &str> {
        self.args.keys().map(|k| k.as_str())
    }

    /// Returns every registered flag spelling, in the order they were added.
    pub fn flag_names(&self) -> impl Iterator<Item = &str> {
        self.flags.keys().map(|k| k.as_str())
    }

    /// Returns every distinct Argument in this Context, in the order they
    /// were added.
    pub fn arguments(&self) -> impl ExactSizeIterator<Item = &Argument> {
        self.arguments.iter()
    }

    /// Returns the positional Arguments, in the order they were added.
    pub fn positional_args(&self) -> impl ExactSizeIterator<Item = &Argument> {
        self.positional.iter().map(move |&idx| &self.arguments[idx])
    }

    pub fn positional_arg(&self, i: usize) -> Option<&Argument> {
        self.positional.get(i).map(|&idx| &self.arguments[idx])
    }

    pub fn positional_arg_mut(&mut self, i: usize) -> Option<&mut Argument> {
        match self.positional.get(i) {
            None => None,
            Some(&idx) => Some(&mut self.arguments[idx]),
        }
    }

    /// Returns true if any positional Argument still has no value.
    pub fn needs_positional_arg(&self) -> bool {
        self.positional_args().any(|a| !a.is_set())
    }

    fn flag_index(&self, flag: &str) -> Result<usize> {
        match self.flags.get(flag) {
            Some(&idx) => Ok(idx),
            None => Err(Error::InvalidFlag(format!(
                "'{}' is not a valid flag for this context; valid flags are: {}",
                flag,
                self.flags
                    .keys()
                    .map(|k| k.as_str())
                    .collect::<Vec<&str>>()
                    .join(", ")
            ))),
        }
    }

    /// Returns every flag spelling of the Argument which owns the given flag.
    pub fn names_for(&self, flag: &str) -> Result<Vec<String>> {
        let idx = self.flag_index(flag)?;
        Ok(self.arguments[idx]
            .get_names()
            .iter()
            .map(|n| help::to_flag(n))
            .collect())
    }

    /// Assign a raw command-line value to the Argument which owns the given
    /// flag, interpreting it according to that Argument's Kind.
    pub fn set_flag_value(&mut self, flag: &str, raw: &str) -> Result<()> {
        let idx = self.flag_index(flag)?;
        trace!("setting {} from flag '{}'", self.arguments[idx], flag);
        self.arguments[idx].set_raw_value(raw)
    }

    /// Returns the current value of every Argument, keyed by its canonical
    /// name.
    pub fn as_kwargs(&self) -> IndexMap<String, Value> {
        self.arguments
            .iter()
            .map(|a| (a.get_name().to_owned(), a.get_value()))
            .collect()
    }

    /// Returns the placeholder table this Context renders help with.
    pub fn get_placeholders(&self) -> &Placeholders {
        self.placeholders
            .as_ref()
            .unwrap_or_else(|| help::default_placeholders())
    }

    /// Replace the placeholder table used when rendering help for this
    /// Context.
    pub fn set_placeholders(&mut self, placeholders: Placeholders) {
        self.placeholders = Some(placeholders);
    }

    /// Returns the (usage, description) help tuple for the Argument which
    /// owns the given flag. Only flag spellings are accepted: passing "foo"
    /// instead of "--foo" is an error.
    pub fn help_for(&self, flag: &str) -> Result<HelpTuple> {
        let idx = self.flag_index(flag)?;
        let arg = &self.arguments[idx];
        Ok((
            help::usage_for(arg, self.get_placeholders()),
            arg.get_help().unwrap_or("").to_owned(),
        ))
    }

    /// Returns a help tuple for every distinct Argument in this Context, in
    /// the order they should be displayed.
    pub fn help_tuples(&self) -> Vec<HelpTuple> {
        let mut sorted: Vec<&Argument> = self.arguments.iter().collect();
        // The elements are &Argument, so the key fn sees &&Argument.
        sorted.sort_by_cached_key(|a| help::sort_key(a));
        sorted
            .into_iter()
            .map(|a| {
                (
                    help::usage_for(a, self.get_placeholders()),
                    a.get_help().unwrap_or("").to_owned(),
                )
            })
            .collect()
    }

    /// Write this Context's help tuples to the given writer, aligned into two
    /// columns.
    pub fn write_help<W: Write>(&self, f: &mut W) -> Result<()> {
        help::write_help(f, &self.help_tuples())
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("<Context")?;
        if let Some(name) = self.name.as_ref() {
            write!(f, " '{}'", name)?;
            if !self.aliases.is_empty() {
                write!(f, " ({})", self.aliases.join(", "))?;
            }
        }
        if !self.args.is_empty() {
            f.write_str(": {")?;
            for (i, (name, &idx)) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "'{}': {}", name, self.arguments[idx])?;
            }
            f.write_str("}")?;
        }
        f.write_str(">")
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
