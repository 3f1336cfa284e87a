//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] is the builder input for [`FluidEngine`](crate::FluidEngine).
//! [`validate()`](EngineConfig::validate) checks structural invariants; the
//! engine constructor calls [`validate_rules`] itself to obtain the plan.

use std::error::Error;
use std::fmt;

use seep_grid::{GridError, GridGeometry};
use seep_rule::{validate_rules, FlowRule, RuleError};
use seep_rules::{
    LateralFlow, VerticalFlow, DEFAULT_CAPACITY, DEFAULT_DAMPING, DEFAULT_MIN_TRANSFER,
};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building or validating an [`EngineConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Pixel geometry or grid dimensions are unusable.
    Grid(GridError),
    /// Rule pipeline validation failed.
    Rules(RuleError),
    /// A rule builder rejected its parameters.
    InvalidRule {
        /// Builder message.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Rules(e) => write!(f, "rules: {e}"),
            Self::InvalidRule { reason } => write!(f, "invalid rule: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Rules(e) => Some(e),
            Self::InvalidRule { .. } => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<RuleError> for ConfigError {
    fn from(e: RuleError) -> Self {
        Self::Rules(e)
    }
}

// ── FlowParams ─────────────────────────────────────────────────────

/// Constants for the standard vertical-then-lateral pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowParams {
    /// Saturation level shared by both rules. Default: 1.0.
    pub capacity: f64,
    /// Exclusive fill threshold for falling. Default: 0.02.
    pub min_transfer: f64,
    /// Lateral damping divisor. Default: 3.0.
    pub damping: f64,
}

impl Default for FlowParams {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            min_transfer: DEFAULT_MIN_TRANSFER,
            damping: DEFAULT_DAMPING,
        }
    }
}

impl FlowParams {
    /// Build the standard pipeline with these constants.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidRule`] with the builder's message.
    pub fn build_rules(&self) -> Result<Vec<Box<dyn FlowRule>>, ConfigError> {
        let vertical = VerticalFlow::builder()
            .capacity(self.capacity)
            .min_transfer(self.min_transfer)
            .build()
            .map_err(|reason| ConfigError::InvalidRule { reason })?;
        let lateral = LateralFlow::builder()
            .capacity(self.capacity)
            .damping(self.damping)
            .build()
            .map_err(|reason| ConfigError::InvalidRule { reason })?;
        Ok(vec![Box::new(vertical), Box::new(lateral)])
    }
}

// ── EngineConfig ───────────────────────────────────────────────────

/// Complete configuration for constructing a [`FluidEngine`](crate::FluidEngine).
pub struct EngineConfig {
    /// Simulated area and cell size; fixes the grid dimensions.
    pub geometry: GridGeometry,
    /// Rules executed in pipeline order each step.
    pub rules: Vec<Box<dyn FlowRule>>,
}

impl EngineConfig {
    /// The standard pipeline ([`VerticalFlow`] then [`LateralFlow`]) with
    /// default constants.
    pub fn new(geometry: GridGeometry) -> Self {
        Self {
            geometry,
            rules: vec![
                Box::new(VerticalFlow::default()),
                Box::new(LateralFlow::default()),
            ],
        }
    }

    /// The standard pipeline with custom constants.
    pub fn with_params(geometry: GridGeometry, params: FlowParams) -> Result<Self, ConfigError> {
        Ok(Self {
            geometry,
            rules: params.build_rules()?,
        })
    }

    /// A config for an explicit `rows x cols` grid with the standard pipeline.
    pub fn from_dims(rows: u32, cols: u32) -> Result<Self, ConfigError> {
        let geometry = GridGeometry::from_dims(rows, cols, GridGeometry::DEFAULT_CELL_PX)?;
        Ok(Self::new(geometry))
    }

    /// Replace the rule pipeline.
    pub fn with_rules(mut self, rules: Vec<Box<dyn FlowRule>>) -> Self {
        self.rules = rules;
        self
    }

    /// Validate structural invariants.
    ///
    /// Geometry is validated when it is constructed, so this checks the
    /// rule pipeline.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let _ = validate_rules(&self.rules)?;
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(GridGeometry::default())
    }
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.rules.iter().map(|r| r.name()).collect();
        f.debug_struct("EngineConfig")
            .field("rows", &self.geometry.dims().rows())
            .field("cols", &self.geometry.dims().cols())
            .field("cell_px", &self.geometry.cell_px())
            .field("rules", &names)
            .finish()
    }
}
