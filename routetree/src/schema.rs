//! Route schema loading.
//!
//! A route schema is a YAML or JSON document describing a [`RouteNode`]:
//! string values are path fragments, mappings are nested trees, and a
//! `_basePath` string inside a mapping becomes that node's base path
//! override. Functions cannot be expressed in a schema.
//!
//! ```yaml
//! index: ""
//! aboutUs: /about-us
//! dashboard:
//!   home: /
//! auth:
//!   _basePath: ""
//!   login: /login
//! ```
//!
//! Any other value (numbers, booleans, null, sequences) is rejected with
//! [`Error::InvalidRouteValue`] naming the key and the dotted chain of the
//! mapping it appeared in.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::route::{RouteNode, RouteValue, BASE_PATH_KEY};

/// Text format of a route schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// YAML document.
    Yaml,
    /// JSON document.
    Json,
}

impl SchemaFormat {
    /// Pick a format from a file extension.
    ///
    /// `.json` selects JSON; everything else (including `.yaml`, `.yml`, and
    /// no extension) is read as YAML.
    ///
    /// # Examples
    ///
    /// ```
    /// use routetree::schema::SchemaFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(SchemaFormat::from_path(Path::new("routes.json")), SchemaFormat::Json);
    /// assert_eq!(SchemaFormat::from_path(Path::new("routes.yml")), SchemaFormat::Yaml);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parse a route schema from text.
///
/// # Errors
///
/// Returns an error if the text is not valid in the given format, if the
/// document is not a mapping, or if any entry is not a string or mapping.
pub fn parse(text: &str, format: SchemaFormat) -> Result<RouteNode> {
    let value: Value = match format {
        SchemaFormat::Yaml => serde_yaml::from_str(text)?,
        SchemaFormat::Json => serde_json::from_str(text)?,
    };

    match &value {
        Value::Mapping(mapping) => node_from_mapping(mapping, ""),
        other => Err(Error::Validation {
            field: "routes".to_string(),
            message: format!("route schema must be a mapping, found {}", describe(other)),
        }),
    }
}

/// Load a route schema file, choosing the format by extension.
///
/// # Errors
///
/// Returns [`Error::SchemaRead`] if the file cannot be read, or any error
/// from [`parse`].
///
/// # Examples
///
/// ```no_run
/// use routetree::schema::load_file;
/// use std::path::Path;
///
/// let routes = load_file(Path::new("routes.yaml")).unwrap();
/// println!("{} top-level routes", routes.len());
/// ```
pub fn load_file(path: &Path) -> Result<RouteNode> {
    let text = fs::read_to_string(path).map_err(|source| Error::SchemaRead {
        path: path.to_path_buf(),
        source,
    })?;

    let format = SchemaFormat::from_path(path);
    log::debug!("loading {format:?} route schema from {}", path.display());
    parse(&text, format)
}

impl RouteNode {
    /// Parse a YAML route schema.
    ///
    /// # Errors
    ///
    /// See [`parse`].
    ///
    /// # Examples
    ///
    /// ```
    /// use routetree::RouteNode;
    ///
    /// let routes = RouteNode::from_yaml_str("auth:\n  _basePath: ''\n  login: /login\n").unwrap();
    /// assert_eq!(routes.len(), 1);
    /// ```
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        parse(text, SchemaFormat::Yaml)
    }

    /// Parse a JSON route schema.
    ///
    /// # Errors
    ///
    /// See [`parse`].
    pub fn from_json_str(text: &str) -> Result<Self> {
        parse(text, SchemaFormat::Json)
    }
}

fn node_from_mapping(mapping: &Mapping, trail: &str) -> Result<RouteNode> {
    let mut node = RouteNode::new();

    for (raw_key, value) in mapping {
        let Value::String(key) = raw_key else {
            return Err(Error::InvalidKey {
                path: trail.to_string(),
                found: describe(raw_key),
            });
        };

        if key == BASE_PATH_KEY {
            match value {
                Value::String(base_path) => node.set_base_path(Some(base_path.clone())),
                other => {
                    return Err(Error::InvalidBasePath {
                        path: trail.to_string(),
                        found: describe(other),
                    })
                }
            }
            continue;
        }

        let route = match value {
            Value::String(fragment) => RouteValue::Path(fragment.clone()),
            Value::Mapping(child) => {
                let child_trail = if trail.is_empty() {
                    key.clone()
                } else {
                    format!("{trail}.{key}")
                };
                RouteValue::Tree(node_from_mapping(child, &child_trail)?)
            }
            other => {
                return Err(Error::InvalidRouteValue {
                    key: key.clone(),
                    path: trail.to_string(),
                    found: describe(other),
                })
            }
        };
        node.insert(key.clone(), route);
    }

    Ok(node)
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(_) => "string".to_string(),
        Value::Sequence(_) => "sequence".to_string(),
        Value::Mapping(_) => "mapping".to_string(),
        Value::Tagged(tagged) => format!("tagged value {}", tagged.tag),
    }
}
