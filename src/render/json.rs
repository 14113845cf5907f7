use std::io::Write;

use package_graph::{Package, ResolveStats, Violation};
use serde::Serialize;

use super::Render;

#[derive(Debug)]
pub struct JsonRenderer;

impl JsonRenderer {
    fn write<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
        Ok(())
    }
}

impl Render for JsonRenderer {
    fn packages(&self, out: &mut dyn Write, packages: &[Package]) -> anyhow::Result<()> {
        Self::write(out, packages)
    }

    fn package(&self, out: &mut dyn Write, package: &Package) -> anyhow::Result<()> {
        Self::write(out, package)
    }

    fn stats(&self, out: &mut dyn Write, stats: &ResolveStats) -> anyhow::Result<()> {
        Self::write(out, stats)
    }

    fn violations(&self, out: &mut dyn Write, violations: &[Violation]) -> anyhow::Result<()> {
        Self::write(out, violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_json() {
        let package = Package {
            name: "a".to_string(),
            version: "1.0".to_string(),
            dependencies: vec!["b".to_string()],
            ..Default::default()
        };

        let mut out = Vec::new();
        JsonRenderer.package(&mut out, &package).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["name"], "a");
        assert_eq!(value["dependencies"], serde_json::json!(["b"]));
        assert_eq!(value["required_by"], serde_json::json!([]));
    }

    #[test]
    fn test_violations_json() {
        let violations = vec![Violation::DanglingDependency {
            package: "a".to_string(),
            dependency: "b".to_string(),
        }];

        let mut out = Vec::new();
        JsonRenderer.violations(&mut out, &violations).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["kind"], "dangling_dependency");
        assert_eq!(value[0]["package"], "a");
    }
}
