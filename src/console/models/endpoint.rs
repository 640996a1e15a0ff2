//! # Endpoint Descriptions
//!
//! Static description of one remote API operation: name, method, path,
//! declared parameters and optional documentation. Never mutated once built.

use crate::console::errors::{ConsoleError, ConsoleResult};
use crate::console::models::documentation::Documentation;
use crate::console::models::parameter::{Parameter, ParameterDecl};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

fn default_method() -> String {
    Method::GET.to_string()
}

/// Catalog declaration of an endpoint, as read from configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDecl {
    pub name: String,
    #[serde(default = "default_method")]
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDecl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documentation: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EndpointSpec {
    name: String,
    method: Method,
    path: String,
    parameters: Vec<Parameter>,
    subtitle: Option<String>,
    documentation: Option<Documentation>,
}

impl EndpointSpec {
    /// A `GET` endpoint with no parameters
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method: Method::GET,
            path: path.into(),
            parameters: Vec::new(),
            subtitle: None,
            documentation: None,
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_documentation<S: Into<String>>(
        mut self,
        paragraphs: impl IntoIterator<Item = S>,
    ) -> Self {
        let documentation = Documentation::new(paragraphs);
        self.documentation = (!documentation.is_empty()).then_some(documentation);
        self
    }

    /// Build and validate an endpoint from its declaration
    pub fn from_decl(decl: EndpointDecl) -> ConsoleResult<Self> {
        let method = Method::from_bytes(decl.method.trim().to_uppercase().as_bytes()).map_err(
            |_| ConsoleError::InvalidMethod {
                endpoint: decl.name.clone(),
                method: decl.method.clone(),
            },
        )?;

        let parameters = decl
            .parameters
            .into_iter()
            .map(Parameter::create)
            .collect::<ConsoleResult<Vec<_>>>()?;

        let mut spec = Self::new(decl.name, decl.path)
            .with_method(method)
            .with_documentation(decl.documentation);
        spec.parameters = parameters;
        spec.subtitle = decl.subtitle;
        spec.validate()?;

        Ok(spec)
    }

    /// Check that parameter names are unique within this endpoint
    pub fn validate(&self) -> ConsoleResult<()> {
        let mut seen = HashSet::new();
        for parameter in &self.parameters {
            if !seen.insert(parameter.name()) {
                return Err(ConsoleError::DuplicateParameter {
                    endpoint: self.name.clone(),
                    name: parameter.name().to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn documentation(&self) -> Option<&Documentation> {
        self.documentation.as_ref()
    }
}
