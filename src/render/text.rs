use std::io::Write;

use package_graph::{Package, ResolveStats, Violation};

use super::Render;

#[derive(Debug)]
pub struct TextRenderer;

impl Render for TextRenderer {
    fn packages(&self, out: &mut dyn Write, packages: &[Package]) -> anyhow::Result<()> {
        for package in packages {
            writeln!(out, "{} {}", package.name, package.version)?;
        }
        Ok(())
    }

    fn package(&self, out: &mut dyn Write, package: &Package) -> anyhow::Result<()> {
        write!(out, "{}", package.format_text())?;
        Ok(())
    }

    fn stats(&self, out: &mut dyn Write, stats: &ResolveStats) -> anyhow::Result<()> {
        writeln!(out, "packages: {}", stats.packages)?;
        writeln!(out, "edges:    {}", stats.edges)?;
        writeln!(out, "dropped:  {}", stats.dropped)?;
        Ok(())
    }

    fn violations(&self, out: &mut dyn Write, violations: &[Violation]) -> anyhow::Result<()> {
        if violations.is_empty() {
            writeln!(out, "ok")?;
        }
        for violation in violations {
            writeln!(out, "{violation}")?;
        }
        Ok(())
    }
}
