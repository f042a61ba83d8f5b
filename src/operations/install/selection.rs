//! Package selection
//!
//! Turns package identifiers into specs and dispatches them, identifiers in
//! the order given and specs in declaration order.

use tracing::{error, info, warn};

use super::InstallDispatcher;
use crate::config::SpecStore;
use crate::domain::{InstallRequest, InstallResult, PackageVersionSpec};
use crate::error::Result;

/// Keep the specs selected by a request: all of them without a version,
/// otherwise those whose constraint equals it exactly.
pub fn select_specs(
    specs: Vec<PackageVersionSpec>,
    request: &InstallRequest,
) -> Vec<PackageVersionSpec> {
    specs
        .into_iter()
        .filter(|spec| request.matches(&spec.source_version_constraint))
        .collect()
}

/// Drives the dispatcher over a list of package identifiers
pub struct InstallSelection<'a> {
    store: &'a SpecStore,
    dispatcher: &'a InstallDispatcher<'a>,
    keep_going: bool,
}

impl<'a> InstallSelection<'a> {
    pub fn new(store: &'a SpecStore, dispatcher: &'a InstallDispatcher<'a>) -> Self {
        Self {
            store,
            dispatcher,
            keep_going: false,
        }
    }

    /// Record failures per identifier and continue instead of aborting the run
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Process every identifier (`name` or `name:version`)
    pub fn run<S: AsRef<str>>(&self, package_ids: &[S], release: bool) -> Result<InstallResult> {
        let mut result = InstallResult::default();

        for package_id in package_ids {
            let package_id = package_id.as_ref();
            info!("processing {} ...", package_id);

            let request = InstallRequest::parse(package_id);
            match self.process(&request, release, &mut result) {
                Ok(()) => {}
                Err(e) if self.keep_going => {
                    error!("{} failed: {}", package_id, e);
                    result.push_failure(package_id, e.to_string());
                }
                Err(e) => return Err(e),
            }
        }

        Ok(result)
    }

    fn process(
        &self,
        request: &InstallRequest,
        release: bool,
        result: &mut InstallResult,
    ) -> Result<()> {
        let specs = select_specs(self.store.load(&request.name)?, request);

        if specs.is_empty() {
            warn!("no spec of {} matches {}", request.name, request);
            return Ok(());
        }

        for spec in specs {
            let runtimes = self.dispatcher.dispatch(&spec, release)?;
            result.push(spec, runtimes);
        }

        Ok(())
    }
}
