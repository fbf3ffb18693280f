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

use crate::argument::*;
use crate::context::*;
use crate::error::*;
use crate::help::*;

fn vanilla_context() -> Context {
    Context::new(
        None,
        &[],
        vec![Argument::new("foo"), Argument::new("bar").help("bar the baz")],
    )
    .unwrap()
}

// Mirrors what a task collection would generate for a task with two string
// parameters, one of which has help text.
fn tasked_context() -> Context {
    Context::with_short_flags(
        Some("mytask"),
        &[],
        vec![
            Argument::new("myarg"),
            Argument::new("otherarg").help("other help"),
        ],
    )
    .unwrap()
}

fn assert_order(names: &[&[&str]], expected_flag_order: &[&str]) {
    let ctx = Context::new(
        None,
        &[],
        names
            .iter()
            .map(|n| Argument::with_names(*n).unwrap())
            .collect(),
    )
    .unwrap();
    let expected: Vec<HelpTuple> = expected_flag_order
        .iter()
        .map(|f| ctx.help_for(f).unwrap())
        .collect();
    assert_eq!(expected, ctx.help_tuples());
}

#[test]
fn test_to_flag() {
    assert_eq!("-f", to_flag("f"));
    assert_eq!("--foo", to_flag("foo"));
    assert_eq!("--foo-bar", to_flag("foo-bar"));
}

#[test]
fn test_help_for_rejects_non_flag_values() {
    match vanilla_context().help_for("foo") {
        Err(Error::InvalidFlag(_)) => {}
        r => panic!("expected InvalidFlag error, got {:?}", r),
    }
    assert!(vanilla_context().help_for("--nope").is_err());
}

#[test]
fn test_help_for_vanilla_no_helpstr() {
    assert_eq!(
        ("--foo=STRING".to_owned(), "".to_owned()),
        vanilla_context().help_for("--foo").unwrap()
    );
}

#[test]
fn test_help_for_vanilla_with_helpstr() {
    assert_eq!(
        ("--bar=STRING".to_owned(), "bar the baz".to_owned()),
        vanilla_context().help_for("--bar").unwrap()
    );
}

#[test]
fn test_help_for_task_driven_with_helpstr() {
    assert_eq!(
        (
            "-o STRING, --otherarg=STRING".to_owned(),
            "other help".to_owned()
        ),
        tasked_context().help_for("--otherarg").unwrap()
    );
}

#[test]
fn test_help_for_short_form_before_long_form() {
    assert_eq!(
        ("-m STRING, --myarg=STRING".to_owned(), "".to_owned()),
        tasked_context().help_for("--myarg").unwrap()
    );
}

#[test]
fn test_help_for_short_flag_inputs() {
    let c = tasked_context();
    assert_eq!(c.help_for("--myarg").unwrap(), c.help_for("-m").unwrap());
}

#[test]
fn test_help_for_preserves_declared_order_within_groups() {
    let c = Context::new(
        None,
        &[],
        vec![Argument::with_names(&["verbose", "v", "loud", "V"])
            .unwrap()
            .kind(Kind::Boolean)],
    )
    .unwrap();
    assert_eq!(
        ("-v, -V, --verbose, --loud".to_owned(), "".to_owned()),
        c.help_for("--loud").unwrap()
    );
}

#[test]
fn test_help_for_kind_placeholders() {
    let c = Context::new(
        None,
        &[],
        vec![
            Argument::with_names(&["count", "c"])
                .unwrap()
                .kind(Kind::Integer),
            Argument::new("debug").kind(Kind::Boolean),
        ],
    )
    .unwrap();
    assert_eq!("-c INT, --count=INT", c.help_for("--count").unwrap().0);
    assert_eq!("--debug", c.help_for("--debug").unwrap().0);
}

#[test]
fn test_custom_placeholders() {
    let mut c = vanilla_context();
    assert_eq!(&Placeholders::default(), c.get_placeholders());

    c.set_placeholders(Placeholders {
        string: Some("VALUE".to_owned()),
        ..Default::default()
    });
    assert_eq!("--foo=VALUE", c.help_for("--foo").unwrap().0);

    c.set_placeholders(Placeholders {
        string: None,
        ..Default::default()
    });
    assert_eq!("--foo", c.help_for("--foo").unwrap().0);
}

#[test]
fn test_placeholders_survive_clone() {
    let mut c = vanilla_context();
    c.set_placeholders(Placeholders {
        string: Some("TEXT".to_owned()),
        ..Default::default()
    });
    assert_eq!("--foo=TEXT", c.clone().help_for("--foo").unwrap().0);
}

#[cfg(feature = "configuration")]
#[test]
fn test_placeholders_deserialize_with_defaults() {
    let p: Placeholders = serde_json::from_str(r#"{"integer": "NUM"}"#).unwrap();
    assert_eq!(
        Placeholders {
            string: Some("STRING".to_owned()),
            integer: Some("NUM".to_owned()),
            boolean: None,
        },
        p
    );

    let kind: Kind = serde_json::from_str(r#""integer""#).unwrap();
    assert_eq!(Kind::Integer, kind);
}

#[test]
fn test_help_tuples_returns_help_for_every_argument() {
    let c = tasked_context();
    assert_eq!(
        vec![
            c.help_for("--myarg").unwrap(),
            c.help_for("--otherarg").unwrap()
        ],
        c.help_tuples()
    );
}

#[test]
fn test_help_tuples_one_entry_per_argument() {
    let c = Context::new(
        None,
        &[],
        vec![Argument::with_names(&["a", "b", "c", "ddd"]).unwrap()],
    )
    .unwrap();
    assert_eq!(1, c.help_tuples().len());
}

#[test]
fn test_sorts_alphabetically_by_shortflag_first() {
    assert_order(&[&["zarg", "a"], &["arg", "z"]], &["--zarg", "--arg"]);
}

#[test]
fn test_case_ignored_during_sorting() {
    assert_order(&[&["a"], &["B"]], &["-a", "-B"]);
}

#[test]
fn test_lowercase_wins_when_values_identical_otherwise() {
    assert_order(&[&["V"], &["v"]], &["-v", "-V"]);
}

#[test]
fn test_sorts_alphabetically_by_longflag_when_no_shortflag() {
    assert_order(
        &[&["otherarg"], &["longarg"]],
        &["--longarg", "--otherarg"],
    );
}

#[test]
fn test_sorts_heterogenous_help_output_with_longflag_only_options_first() {
    assert_order(
        &[&["c"], &["a", "aaagh"], &["b", "bah"], &["beta"], &["alpha"]],
        &["--alpha", "--beta", "-a", "-b", "-c"],
    );
}

#[test]
fn test_mixed_corelike_options() {
    assert_order(
        &[
            &["V", "version"],
            &["c", "collection"],
            &["h", "help"],
            &["l", "list"],
            &["r", "root"],
        ],
        &["-c", "-h", "-l", "-r", "-V"],
    );
}

#[test]
fn test_remaining_case_ties_prefer_lowercase_letters() {
    assert_order(&[&["AB"], &["Ab"], &["ab"]], &["--ab", "--Ab", "--AB"]);
}

#[test]
fn test_write_help() {
    let c = Context::new(
        None,
        &[],
        vec![
            Argument::with_names(&["help", "h"])
                .unwrap()
                .kind(Kind::Boolean)
                .help("Show help"),
            Argument::new("root").help("Change root directory"),
            Argument::new("quiet").kind(Kind::Boolean),
        ],
    )
    .unwrap();

    let mut out: Vec<u8> = Vec::new();
    c.write_help(&mut out).unwrap();
    assert_eq!(
        "  --quiet\n  --root=STRING    Change root directory\n  -h, --help       Show help\n",
        String::from_utf8(out).unwrap()
    );
}

#[test]
fn test_write_help_empty_context() {
    let mut out: Vec<u8> = Vec::new();
    Context::default().write_help(&mut out).unwrap();
    assert!(out.is_empty());
}
