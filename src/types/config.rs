use crate::error::SprintKitError;
use crate::report::OutputFormat;
use serde::Deserialize;

pub const DEFAULT_CAPACITY: u32 = 40;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SprintKitConfig {
    pub rice: Option<RiceConfig>,
    pub velocity: Option<VelocityConfig>,
    pub burndown: Option<BurndownConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RiceConfig {
    pub auto_export: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VelocityConfig {
    pub default_capacity: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BurndownConfig {
    pub format: Option<OutputFormat>,
}

impl SprintKitConfig {
    pub fn auto_export(&self) -> bool {
        self.rice
            .as_ref()
            .and_then(|rice| rice.auto_export)
            .unwrap_or(true)
    }

    pub fn default_capacity(&self) -> u32 {
        self.velocity
            .as_ref()
            .and_then(|velocity| velocity.default_capacity)
            .unwrap_or(DEFAULT_CAPACITY)
    }

    pub fn burndown_format(&self) -> OutputFormat {
        self.burndown
            .as_ref()
            .and_then(|burndown| burndown.format)
            .unwrap_or(OutputFormat::Table)
    }

    pub fn validate(&self) -> Result<(), SprintKitError> {
        if self.default_capacity() == 0 {
            return Err(SprintKitError::ConfigParse(
                "velocity.default_capacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
