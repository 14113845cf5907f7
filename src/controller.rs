use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use package_graph::PackageTable;
use tracing::{info, warn};

use crate::render::Render;

/// A read-only question asked of a loaded table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    List,
    Show(String),
    Stats,
    Check,
}

/// How a query ended, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    NotFound,
    Inconsistent,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::NotFound => ExitCode::from(1),
            Status::Inconsistent => ExitCode::from(2),
        }
    }
}

/// Answers queries against one immutable table.
#[derive(Debug)]
pub struct Controller {
    table: Arc<PackageTable>,
    renderer: Box<dyn Render>,
}

impl Controller {
    pub fn new(table: Arc<PackageTable>, renderer: Box<dyn Render>) -> Self {
        Self { table, renderer }
    }

    pub fn handle(&self, query: &Query, out: &mut dyn Write) -> anyhow::Result<Status> {
        match query {
            Query::List => {
                self.renderer.packages(out, self.table.get_all())?;
            }
            Query::Show(name) => match self.table.get_by_name(name) {
                Ok(package) => self.renderer.package(out, package)?,
                Err(e) => {
                    eprintln!("{e}");
                    return Ok(Status::NotFound);
                }
            },
            Query::Stats => {
                self.renderer.stats(out, &self.table.stats())?;
            }
            Query::Check => {
                let violations = self.table.check_consistency();
                self.renderer.violations(out, &violations)?;
                if !violations.is_empty() {
                    warn!("{} consistency violations", violations.len());
                    return Ok(Status::Inconsistent);
                }
                info!("{} packages consistent", self.table.len());
            }
        }
        Ok(Status::Success)
    }
}
