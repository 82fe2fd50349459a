use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// Operates on the raw config text before deserialization, so config
/// structs stay plain `String`/`SecretString`. Lines starting with `#`
/// (TOML comments) are passed through unchanged; a referenced variable
/// that is unset fails expansion as a whole.
pub(crate) fn expand_env(input: &str) -> Result<String, String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\{\{\s*env\.([A-Za-z0-9_]+)\s*\}\}").expect("must be valid regex"));

    let mut missing: Option<String> = None;
    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let replaced = re.replace_all(line, |caps: &regex::Captures<'_>| {
            let name = &caps[1];
            std::env::var(name).unwrap_or_else(|_| {
                missing.get_or_insert_with(|| name.to_owned());
                String::new()
            })
        });
        output.push_str(&replaced);
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    match missing {
        Some(name) => Err(format!("environment variable not found: `{name}`")),
        None => Ok(output),
    }
}
