//! Typed view over the flat name/value parameter list.

use std::collections::HashMap;

use storefront_catalog::SearchCriteria;

use crate::envelope::Parameter;
use crate::error::HandlerError;

/// Name → value mapping built from the envelope's parameter list. On
/// duplicate names the last value wins.
#[derive(Debug, Default)]
pub struct ParamMap(HashMap<String, String>);

impl ParamMap {
    pub fn from_parameters(parameters: &[Parameter]) -> Self {
        Self(
            parameters
                .iter()
                .map(|p| (p.name.clone(), p.value.clone()))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Absent and empty-valued parameters are both treated as not supplied.
    fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    /// A parameter the operation cannot run without.
    pub fn required(&self, name: &str, label: &'static str) -> Result<&str, HandlerError> {
        self.get_non_empty(name)
            .ok_or(HandlerError::missing(label))
    }

    /// Optional decimal parameter. Empty values count as absent; anything
    /// non-empty must parse as a number.
    pub fn price(&self, name: &str) -> Result<Option<f64>, HandlerError> {
        match self.get_non_empty(name) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<f64>()
                .map(Some)
                .map_err(|_| HandlerError::invalid_price(raw)),
        }
    }

    /// Assemble the typed search criteria, validating numeric fields.
    pub fn search_criteria(&self) -> Result<SearchCriteria, HandlerError> {
        Ok(SearchCriteria {
            query: self.get_non_empty("query").map(str::to_string),
            category: self.get_non_empty("category").map(str::to_string),
            min_price: self.price("minPrice")?,
            max_price: self.price("maxPrice")?,
        })
    }
}
