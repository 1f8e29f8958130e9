//! Params read from JSON under the `serde` feature

#![cfg(feature = "serde")]

use paramshape::prelude::*;
use paramshape::{assert_invalid, assert_valid};

fn server_model() -> Result<Model, ConfigError> {
    Ok(model! {
        "name" => types::string().is_required(),
        "mode" => types::one_of(serde_json::from_str::<Value>(r#"["dev", "prod"]"#).unwrap())?,
        "listen" => types::array_of(types::shape(model! {
            "host" => types::string().is_required(),
            "port" => types::number().is_required(),
        }))?,
        "debug" => types::boolean(),
    })
}

#[test]
fn valid_config_from_json() -> Result<(), ConfigError> {
    let params: Params = serde_json::from_str(
        r#"{
            "name": "api",
            "mode": "prod",
            "listen": [{"host": "0.0.0.0", "port": 80}],
            "debug": false
        }"#,
    )
    .unwrap();
    assert_valid!(&server_model()?, &params);
    Ok(())
}

#[test]
fn invalid_config_from_json() -> Result<(), ConfigError> {
    let params: Params = serde_json::from_str(
        r#"{"name": "api", "mode": "staging", "listen": [{"host": "h"}]}"#,
    )
    .unwrap();

    match check(&server_model()?, &params) {
        Validation::Failure(errors) => {
            let params: Vec<&str> = errors.iter().map(ParamError::param).collect();
            assert_eq!(params, vec!["listen", "mode"]);
        }
        Validation::Success(()) => panic!("expected failure"),
    }
    Ok(())
}

#[test]
fn json_object_definition_is_rejected_by_one_of() {
    let definition: Value = serde_json::from_str(r#"{"dev": true}"#).unwrap();
    assert_eq!(
        types::one_of(definition).unwrap_err(),
        ConfigError::OneOfExpectsArray { found: "object" }
    );
}

#[test]
fn empty_string_and_zero_are_present() {
    let params: Params = serde_json::from_str(r#"{"name": "", "port": 0}"#).unwrap();
    let model = model! {
        "name" => types::string().is_required(),
        "port" => types::number().is_required(),
    };
    assert_valid!(&model, &params);
    assert_invalid!(&model, &Params::new());
}
