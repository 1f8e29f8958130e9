//! Log output of the aggregator under the `tracing` feature

#![cfg(feature = "tracing")]

use paramshape::prelude::*;
use tracing_test::traced_test;

#[traced_test]
#[test]
fn failures_are_logged_with_param_name() {
    let model = model! { "port" => types::number().is_required() };
    assert!(!validate(&model, &params! { "port" => "eighty" }));
    assert!(logs_contain("param failed validation"));
    assert!(logs_contain("port"));
}

#[traced_test]
#[test]
fn non_validator_entries_are_warned_about() {
    let model = model! { "flag" => false };
    assert!(!validate(&model, &Params::new()));
    assert!(logs_contain("model entry is not a validator"));
}

#[traced_test]
#[test]
fn passing_params_log_no_failures() {
    let model = model! { "name" => types::string() };
    assert!(validate(&model, &params! { "name" => "ok" }));
    assert!(!logs_contain("param failed validation"));
}
