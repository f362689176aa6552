//! Builder for configuring the single-linkage engine.

use crate::single_linkage::{DEFAULT_THRESHOLD, SingleLinkage};

/// Configures and constructs [`SingleLinkage`] instances.
///
/// The only knob is the stopping threshold, kept for interface symmetry
/// with other linkage criteria; any non-default value is rejected by
/// [`SingleLinkage::cluster`] before work begins.
///
/// # Examples
/// ```
/// use dendra_core::{DEFAULT_THRESHOLD, SingleLinkageBuilder};
///
/// let engine = SingleLinkageBuilder::new().build();
/// assert_eq!(engine.threshold(), DEFAULT_THRESHOLD);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SingleLinkageBuilder {
    threshold: f64,
}

impl Default for SingleLinkageBuilder {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SingleLinkageBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the stopping threshold.
    ///
    /// The value is stored verbatim; validation happens when clustering
    /// starts so the rejection is observable on the clustering call itself.
    ///
    /// # Examples
    /// ```
    /// use dendra_core::SingleLinkageBuilder;
    ///
    /// let builder = SingleLinkageBuilder::new().with_threshold(0.5);
    /// assert_eq!(builder.threshold(), 0.5);
    /// ```
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns the currently configured threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Constructs a [`SingleLinkage`] engine from this configuration.
    #[must_use]
    pub const fn build(self) -> SingleLinkage {
        SingleLinkage::new(self.threshold)
    }
}
