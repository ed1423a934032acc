//! Output formatter implementations.

use crate::route::ResolvedRouteNode;
use crate::Result;

use super::OutputFormatter;

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, routes: &ResolvedRouteNode) -> Result<String> {
        Ok(serde_json::to_string_pretty(routes)?)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, routes: &ResolvedRouteNode) -> Result<String> {
        let yaml = serde_yaml::to_string(routes)?;
        Ok(yaml.trim_end().to_string())
    }
}

/// Formatter for a flat, tab-separated listing.
pub struct ListFormatter;

impl OutputFormatter for ListFormatter {
    fn format(&self, routes: &ResolvedRouteNode) -> Result<String> {
        let flat = routes.flatten();
        if flat.is_empty() {
            return Ok("No routes defined.".to_string());
        }

        let lines: Vec<String> = flat
            .into_iter()
            .map(|(key, path)| format!("{key}\t{path}"))
            .collect();

        Ok(lines.join("\n"))
    }
}
