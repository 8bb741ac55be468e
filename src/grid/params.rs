use super::error::Error;
use serde::Deserialize;
use std::sync::OnceLock;

const DEFAULT_PARAMS_TOML: &str = include_str!("../../resources/default.params.toml");

static DEFAULT_PARAMS: OnceLock<GridParams> = OnceLock::new();

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GridParams {
    #[serde(default)]
    pub receptor: ReceptorParams,
    #[serde(default)]
    pub ligand_box: LigandBoxParams,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReceptorParams {
    #[serde(default = "crate::model::types::default_supported_types")]
    pub supported_types: Vec<String>,
}

impl Default for ReceptorParams {
    fn default() -> Self {
        Self {
            supported_types: crate::model::types::default_supported_types(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LigandBoxParams {
    #[serde(default = "default_padding")]
    pub padding: f64,
}

fn default_padding() -> f64 {
    super::DEFAULT_PADDING
}

impl Default for LigandBoxParams {
    fn default() -> Self {
        Self {
            padding: default_padding(),
        }
    }
}

pub fn load_parameters(custom_toml: Option<&str>) -> Result<GridParams, Error> {
    match custom_toml {
        Some(toml) => {
            let params: GridParams = toml::from_str(toml)?;
            validate(&params)?;
            Ok(params)
        }
        None => Ok(get_default_parameters().clone()),
    }
}

pub fn get_default_parameters() -> &'static GridParams {
    DEFAULT_PARAMS.get_or_init(|| {
        toml::from_str(DEFAULT_PARAMS_TOML)
            .expect("Failed to parse embedded default grid parameters. This is a library bug.")
    })
}

fn validate(params: &GridParams) -> Result<(), Error> {
    if !params.ligand_box.padding.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "ligand_box.padding must be finite, got {}",
            params.ligand_box.padding
        )));
    }
    if let Some(bad) = params
        .receptor
        .supported_types
        .iter()
        .find(|t| t.is_empty() || t.chars().any(char::is_whitespace))
    {
        return Err(Error::InvalidParameter(format!(
            "receptor.supported_types entry '{}' must be a single non-empty token",
            bad
        )));
    }
    Ok(())
}
