//! Container configuration parameters.

use crate::error::VectorError;

/// Initial capacity preset for a new container.
///
/// The preset is chosen per container at construction time. The crate-level
/// default is picked at build time by the `verification` feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CapacityPreset {
    /// Small starting capacity for general use.
    Small,
    /// Large starting capacity for environments where reallocation is
    /// expensive or must be avoided (e.g. code run under a model checker).
    Large,
}

impl CapacityPreset {
    /// Initial capacity of the `Small` preset, in elements.
    pub const SMALL_INITIAL_CAPACITY: usize = 20;

    /// Initial capacity of the `Large` preset, in elements.
    pub const LARGE_INITIAL_CAPACITY: usize = 10_000;

    /// Number of elements a container built with this preset can hold
    /// before its first growth.
    pub fn initial_capacity(self) -> usize {
        match self {
            Self::Small => Self::SMALL_INITIAL_CAPACITY,
            Self::Large => Self::LARGE_INITIAL_CAPACITY,
        }
    }
}

impl Default for CapacityPreset {
    #[cfg(not(feature = "verification"))]
    fn default() -> Self {
        Self::Small
    }

    #[cfg(feature = "verification")]
    fn default() -> Self {
        Self::Large
    }
}

/// Configuration for [`DynamicArray`](crate::DynamicArray) and
/// [`TypedArray`](crate::TypedArray).
///
/// Validated at construction; a container never changes its configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VectorConfig {
    /// Initial capacity in elements.
    ///
    /// Set from a [`CapacityPreset`] or an exact value via
    /// [`with_initial_capacity`](Self::with_initial_capacity). Must be non-zero.
    pub initial_capacity: usize,

    /// Multiplier applied to the capacity when an append finds the
    /// container full.
    ///
    /// Default: 2. Must be at least 2 so that growth always makes progress.
    pub growth_factor: usize,
}

impl VectorConfig {
    /// Default multiplicative growth factor.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Create a config starting at the given preset's capacity.
    pub fn new(preset: CapacityPreset) -> Self {
        Self::with_initial_capacity(preset.initial_capacity())
    }

    /// Create a config with an exact initial capacity.
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Check the invariants a container relies on.
    pub fn validate(&self) -> Result<(), VectorError> {
        if self.initial_capacity == 0 {
            return Err(VectorError::ZeroCapacity);
        }
        if self.growth_factor < 2 {
            return Err(VectorError::InvalidGrowthFactor {
                factor: self.growth_factor,
            });
        }
        Ok(())
    }

    /// Capacity to grow to when a container holding `current` elements is full.
    ///
    /// Returns `None` if the multiplication overflows `usize`.
    pub fn next_capacity(&self, current: usize) -> Option<usize> {
        current.checked_mul(self.growth_factor)
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self::new(CapacityPreset::default())
    }
}

impl From<CapacityPreset> for VectorConfig {
    fn from(preset: CapacityPreset) -> Self {
        Self::new(preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_have_expected_capacities() {
        assert_eq!(CapacityPreset::Small.initial_capacity(), 20);
        assert_eq!(CapacityPreset::Large.initial_capacity(), 10_000);
    }

    #[cfg(not(feature = "verification"))]
    #[test]
    fn default_preset_is_small() {
        assert_eq!(CapacityPreset::default(), CapacityPreset::Small);
        assert_eq!(VectorConfig::default().initial_capacity, 20);
    }

    #[cfg(feature = "verification")]
    #[test]
    fn verification_build_defaults_to_large() {
        assert_eq!(CapacityPreset::default(), CapacityPreset::Large);
        assert_eq!(VectorConfig::default().initial_capacity, 10_000);
    }

    #[test]
    fn doubling_by_default() {
        let config = VectorConfig::new(CapacityPreset::Small);
        assert_eq!(config.next_capacity(20), Some(40));
        assert_eq!(config.next_capacity(usize::MAX), None);
    }

    #[test]
    fn validate_rejects_zero_capacity() {
        let config = VectorConfig::with_initial_capacity(0);
        assert_eq!(config.validate(), Err(VectorError::ZeroCapacity));
    }

    #[test]
    fn validate_rejects_non_growing_factor() {
        let mut config = VectorConfig::default();
        config.growth_factor = 1;
        assert_eq!(
            config.validate(),
            Err(VectorError::InvalidGrowthFactor { factor: 1 })
        );
    }
}
