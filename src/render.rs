use std::io::Write;

use package_graph::{Package, ResolveStats, Violation};
use serde::Deserialize;

mod json;
mod text;

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    #[value(name = "json")]
    Json,
    #[value(name = "text")]
    Text,
}

/// Writes query results to an output stream.
pub trait Render: Send + Sync + std::fmt::Debug {
    fn packages(&self, out: &mut dyn Write, packages: &[Package]) -> anyhow::Result<()>;
    fn package(&self, out: &mut dyn Write, package: &Package) -> anyhow::Result<()>;
    fn stats(&self, out: &mut dyn Write, stats: &ResolveStats) -> anyhow::Result<()>;
    fn violations(&self, out: &mut dyn Write, violations: &[Violation]) -> anyhow::Result<()>;
}

pub fn renderer(format: OutputFormat) -> Box<dyn Render> {
    match format {
        OutputFormat::Json => Box::new(json::JsonRenderer),
        OutputFormat::Text => Box::new(text::TextRenderer),
    }
}
