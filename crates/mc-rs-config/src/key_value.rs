//! Generic `key = "value"` tables with caller-supplied converters.

use std::fmt::Display;

use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::section::ConfigSection;

/// Parse the table `identifier` inside `parent` into `output`.
///
/// Each string entry is converted with `key_converter` (which may reject the
/// key) and `value_converter`. Rejected keys and non-string values are
/// reported and skipped; a missing table does nothing. Later entries
/// overwrite earlier ones with the same converted key.
pub fn parse_key_value_map<K, V, E, KC, VC, M>(
    parent: &ConfigSection<'_>,
    identifier: &str,
    key_converter: KC,
    value_converter: VC,
    output: &mut M,
) -> Vec<Diagnostic>
where
    KC: Fn(&str) -> Result<K, E>,
    E: Display,
    VC: Fn(&str) -> V,
    M: Extend<(K, V)>,
{
    let mut diags = Diagnostics::default();
    let Some(section) = parent.section(identifier) else {
        return diags.into_vec();
    };

    for key_string in section.keys() {
        let Some(raw_value) = section.get_string(key_string) else {
            diags.warn(
                section.path(),
                format!("Ignoring invalid {identifier} entry {key_string}"),
            );
            continue;
        };
        let key = match key_converter(key_string) {
            Ok(key) => key,
            Err(e) => {
                diags.warn(
                    section.path(),
                    format!("Failed to parse {identifier} {key_string}: {e}"),
                );
                continue;
            }
        };
        output.extend(std::iter::once((key, value_converter(raw_value))));
    }
    diags.into_vec()
}
