//! Input document loading shared by the subcommands.

use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Read a JSON or YAML document from `path`, or from stdin when absent.
pub fn read_document(path: Option<&Path>) -> anyhow::Result<serde_yaml::Value> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };
    serde_yaml::from_str(&text).context("parsing input document")
}
