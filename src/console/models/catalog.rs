//! # Endpoint Catalog
//!
//! The set of endpoints offered by the console. The catalog is injected into
//! the view model, so the console can be driven by the built-in endpoints of
//! the random generation API or by a JSON file describing any other set.

use crate::console::errors::{ConsoleError, ConsoleResult};
use crate::console::models::endpoint::{EndpointDecl, EndpointSpec};
use crate::console::models::parameter::Parameter;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk catalog layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub endpoints: Vec<EndpointDecl>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    endpoints: Vec<EndpointSpec>,
}

impl Catalog {
    /// Build a catalog, validating every endpoint
    pub fn new(endpoints: Vec<EndpointSpec>) -> ConsoleResult<Self> {
        for endpoint in &endpoints {
            endpoint.validate()?;
        }
        Ok(Self { endpoints })
    }

    pub fn from_json_str(json: &str) -> ConsoleResult<Self> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| ConsoleError::CatalogLoad {
                path: "<inline>".to_string(),
                reason: e.to_string(),
            })?;

        let endpoints = file
            .endpoints
            .into_iter()
            .map(EndpointSpec::from_decl)
            .collect::<ConsoleResult<Vec<_>>>()?;

        Self::new(endpoints)
    }

    /// Load a JSON catalog file
    pub fn load(path: &Path) -> ConsoleResult<Self> {
        tracing::debug!("Loading endpoint catalog from '{}'", path.display());

        let json = std::fs::read_to_string(path).map_err(|e| ConsoleError::CatalogLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::from_json_str(&json).map_err(|e| match e {
            ConsoleError::CatalogLoad { reason, .. } => ConsoleError::CatalogLoad {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    pub fn endpoints(&self) -> &[EndpointSpec] {
        &self.endpoints
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&EndpointSpec> {
        self.endpoints.iter().find(|e| e.name() == name)
    }

    /// The endpoints served by the random generation API
    pub fn builtin() -> Self {
        let endpoints = vec![
            EndpointSpec::new("Integer", "/v1/int")
                .with_subtitle("Returns a random integer, a subset of whole numbers.")
                .with_parameter(Parameter::number("min", None))
                .with_parameter(Parameter::number("max", None))
                .with_documentation([
                    "The limits are inclusive of `min`, but exclusive of `max`. So for example, \
                     with `min` set to 0 and `max` set to 10, the output will be between 0 and 9.",
                    "If no `min` is specified, the default is 0. If no `max` is specified, the \
                     default is 100. You may use negative numbers for `min` and `max`. `min` must \
                     be strictly less than `max`.",
                    "These limits are also bound by the minimum and maximum values of the \
                     server's integer type, practically 32-bit integers.",
                ]),
            EndpointSpec::new("Floating-Point Number", "/v1/float")
                .with_subtitle("Returns a random floating-point number, a subset of real numbers.")
                .with_parameter(Parameter::number("min", Some("any")))
                .with_parameter(Parameter::number("max", Some("any")))
                .with_documentation([
                    "Returns a floating point number, a subset of real numbers.",
                    "If no `min` is specified, the default is 0. If no `max` is specified, the \
                     default is 1. You may use negative numbers for `min` and `max`. `min` must \
                     be strictly less than `max`.",
                ]),
            EndpointSpec::new("Dice", "/v1/dice")
                .with_subtitle("Rolls dice in a variety of formats, like 2d8.")
                .with_parameter(Parameter::text("input"))
                .with_parameter(Parameter::choice("output", &["sum", "full"]))
                .with_documentation([
                    "Generates a random number following an RPG dice format. Use the `input` \
                     parameter to specify what dice you are trying to roll. If not specified, \
                     the default is 1d6.",
                    "Standard: xdy[[k|d][h|l]z][+/-c] rolls and sums x y-sided dice, keeping or \
                     dropping the lowest or highest z dice and optionally adding or subtracting \
                     c. Example: 4d6kh3+4.",
                    "Fudge: xdf[+/-c] rolls and sums x fudge dice, returning numbers between -1 \
                     and 1. Example: 4df+4.",
                    "Versus: xdy[e|r]vt rolls x y-sided dice, counting the number that roll t or \
                     greater. An e makes dice explode, an r adds another die to the pool.",
                    "EotE: xc [xc ...] rolls x dice of color c (b, blk, g, p, r, w, y) and \
                     returns the aggregate result.",
                    "Use the `output` parameter to specify what you want to get back. The \
                     default is sum. With full you get the sum and the individual rolls, \
                     including discarded ones.",
                ]),
            EndpointSpec::new("ULID", "/v1/ulid").with_documentation([
                "Generate a Universally Unique Lexicographically Sortable Identifier, a more \
                 compact and sortable alternative to UUID. There are no parameters, the output \
                 is always a 26 character string.",
            ]),
            EndpointSpec::new("UUID", "/v1/uuid")
                .with_parameter(Parameter::choice("version", &["4", "7"]))
                .with_documentation([
                    "Generate a Universally Unique Identifier. Only `version`s 4 and 7 are \
                     supported. 4 is completely random, while 7 starts with a timestamp that \
                     makes it sortable by time. If not specified, the default `version` is 4.",
                ]),
            EndpointSpec::new("Nano ID", "/v1/nanoid")
                .with_parameter(Parameter::number("size", None))
                .with_documentation([
                    "An even more compact random identifier than ULID, with a customizable \
                     `size`. The default `size` is 21 characters, and it must always be 1 or \
                     higher. Unlike ULIDs, nano IDs are not sortable.",
                ]),
            EndpointSpec::new("Word", "/v1/word")
                .with_subtitle("Generate one or more random words, from a variety of categories.")
                .with_parameter(Parameter::choice(
                    "category",
                    &[
                        "words",
                        "animals",
                        "cities",
                        "countries",
                        "fruits",
                        "vegetables",
                        "lorem-ipsum",
                        "nouns",
                    ],
                ))
                .with_parameter(Parameter::number("count", None))
                .with_parameter(Parameter::text("separator"))
                .with_documentation([
                    "Use `category` to pick what type of word you want.",
                    "words: the default category, over 9000 common English words at least 3 \
                     letters long. animals: almost 300 animal names. cities: over 2500 city \
                     names without spaces or symbols. countries: 195 countries. fruits and \
                     vegetables: around 50 single word names each. lorem-ipsum: around 140 \
                     placeholder words. nouns: the 1000 most common English nouns.",
                    "The `count` parameter specifies how many words you want. This must be 1 or \
                     higher. The default is 1. If the `count` is higher than 1, the words will \
                     be separated by the `separator`, a space by default.",
                ]),
        ];

        Self { endpoints }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::models::parameter::ParameterKind;

    #[test]
    fn builtin_catalog_should_be_valid() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.len(), 7);
        assert!(Catalog::new(catalog.endpoints().to_vec()).is_ok());
    }

    #[test]
    fn builtin_catalog_should_describe_word_endpoint() {
        let catalog = Catalog::builtin();
        let word = catalog.find("Word").unwrap();

        assert_eq!(word.path(), "/v1/word");
        let kinds: Vec<ParameterKind> = word.parameters().iter().map(|p| p.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ParameterKind::Choice,
                ParameterKind::Number,
                ParameterKind::Text
            ]
        );
    }

    #[test]
    fn builtin_keywords_should_fit_default_palette() {
        let catalog = Catalog::builtin();
        let mut keywords: Vec<String> = Vec::new();
        for endpoint in catalog.endpoints() {
            let names = endpoint.parameters().iter().map(|p| p.name().to_string());
            let docs = endpoint
                .documentation()
                .map(|d| d.keywords())
                .unwrap_or_default();
            for keyword in names.chain(docs) {
                if !keywords.contains(&keyword) {
                    keywords.push(keyword);
                }
            }
        }

        assert!(keywords.len() <= crate::console::view_models::DEFAULT_PALETTE.len());
    }

    #[test]
    fn from_json_should_report_parse_errors() {
        let result = Catalog::from_json_str("{ not json");

        assert!(matches!(result, Err(ConsoleError::CatalogLoad { .. })));
    }

    #[test]
    fn from_json_should_build_endpoints() {
        let catalog = Catalog::from_json_str(
            r#"{"endpoints": [
                {"name": "Integer", "path": "/v1/int",
                 "parameters": [{"name": "min", "kind": "number"}],
                 "documentation": ["`min` is inclusive"]}
            ]}"#,
        )
        .unwrap();

        let endpoint = catalog.find("Integer").unwrap();
        assert_eq!(endpoint.parameters().len(), 1);
        assert_eq!(
            endpoint.documentation().unwrap().keywords(),
            vec!["min".to_string()]
        );
    }
}
