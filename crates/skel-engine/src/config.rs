//! Engine configuration and validation.
//!
//! [`SkeletonizeConfig`] is the builder-input for constructing a
//! [`SkeletonizeEngine`](crate::SkeletonizeEngine). [`materialize`](SkeletonizeConfig::materialize)
//! checks structural invariants and fills in the default simplicity and
//! terminality predicates when the caller left them unset.

use skel_connectivity::{Connectivity, ConnectivityError};
use skel_core::{ConfigurationError, SkeletonizeError};
use skel_predicates::{Predicate, SimplicityCriterion, TerminalityCriterion};

/// Complete configuration for constructing a [`SkeletonizeEngine`](crate::SkeletonizeEngine).
///
/// Built with the `new` + chained-setter pattern; [`materialize`](Self::materialize)
/// consumes it and produces the finalized, default-filled configuration
/// the engine actually runs with.
pub struct SkeletonizeConfig<P> {
    foreground: P,
    background: P,
    fg_connectivity: Connectivity,
    simplicity: Option<Predicate<P>>,
    terminality: Option<Predicate<P>>,
}

impl<P: PartialEq + Clone + 'static> SkeletonizeConfig<P> {
    /// Start a configuration for the `(n, k)` foreground connectivity
    /// and the given foreground/background pixel values.
    ///
    /// Defaults: default simplicity criterion, default one-neighbor
    /// terminality rule. The priority direction itself is not part of
    /// this configuration — it is a property of the
    /// [`HierarchicalQueue`](skel_queue::HierarchicalQueue) the caller
    /// builds and passes to [`run`](crate::SkeletonizeEngine::run).
    pub fn new(n: usize, k: usize, foreground: P, background: P) -> Result<Self, SkeletonizeError> {
        let fg_connectivity = Connectivity::new(n, k).map_err(connectivity_error)?;
        Ok(Self { foreground, background, fg_connectivity, simplicity: None, terminality: None })
    }

    /// Override the default topological-number simplicity predicate
    /// with any `(image, index) -> bool` capability.
    pub fn simplicity_predicate(mut self, predicate: Predicate<P>) -> Self {
        self.simplicity = Some(predicate);
        self
    }

    /// Override the default one-neighbor terminality rule.
    pub fn terminality_predicate(mut self, predicate: Predicate<P>) -> Self {
        self.terminality = Some(predicate);
        self
    }

    /// The foreground connectivity configured so far.
    pub fn fg_connectivity(&self) -> &Connectivity {
        &self.fg_connectivity
    }

    /// Validate and materialize defaults.
    pub fn materialize(self) -> Result<MaterializedConfig<P>, SkeletonizeError> {
        if self.foreground == self.background {
            return Err(skel_core::PreconditionViolated::PixelValueAliasing.into());
        }

        let simplicity = match self.simplicity {
            Some(p) => p,
            None => SimplicityCriterion::new(self.fg_connectivity.clone(), self.foreground.clone())
                .map_err(connectivity_error)?
                .into_predicate(),
        };
        let terminality = self.terminality.unwrap_or_else(|| {
            TerminalityCriterion::new(self.fg_connectivity.clone(), self.foreground.clone()).into_predicate()
        });

        Ok(MaterializedConfig {
            foreground: self.foreground,
            background: self.background,
            fg_connectivity: self.fg_connectivity,
            simplicity,
            terminality,
        })
    }
}

/// The validated, default-filled configuration a
/// [`SkeletonizeEngine`](crate::SkeletonizeEngine) runs with.
pub struct MaterializedConfig<P> {
    pub(crate) foreground: P,
    pub(crate) background: P,
    pub(crate) fg_connectivity: Connectivity,
    pub(crate) simplicity: Predicate<P>,
    pub(crate) terminality: Predicate<P>,
}

fn connectivity_error(e: ConnectivityError) -> SkeletonizeError {
    let ConnectivityError::OutOfRange { n, k } = e;
    ConfigurationError::InvalidConnectivity { n, k }.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn materialize_valid_config_succeeds() {
        let cfg = SkeletonizeConfig::new(2, 1, 1u8, 0u8).unwrap();
        assert!(cfg.materialize().is_ok());
    }

    #[test]
    fn materialize_rejects_aliased_values() {
        let cfg = SkeletonizeConfig::new(2, 1, 1u8, 1u8).unwrap();
        match cfg.materialize() {
            Err(SkeletonizeError::Precondition(skel_core::PreconditionViolated::PixelValueAliasing)) => {}
            other => panic!("expected PixelValueAliasing, got {other:?}"),
        }
    }

    #[test]
    fn invalid_connectivity_is_rejected_at_construction() {
        match SkeletonizeConfig::new(2, 2, 1u8, 0u8) {
            Err(SkeletonizeError::Configuration(ConfigurationError::InvalidConnectivity { n: 2, k: 2 })) => {}
            other => panic!("expected InvalidConnectivity, got {other:?}"),
        }
    }
}
