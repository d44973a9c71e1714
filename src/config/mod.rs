pub mod console;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    pub operand_a: f64,

    pub operand_b: f64,

    pub verbose: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            operand_a: 10.0,
            operand_b: 5.0,
            verbose: false,
        }
    }
}

impl ConfigProvider for DemoConfig {
    fn operand_a(&self) -> f64 {
        self.operand_a
    }

    fn operand_b(&self) -> f64 {
        self.operand_b
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_finite("operand_a", self.operand_a)?;
        validate_finite("operand_b", self.operand_b)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_operands() {
        let config = DemoConfig::default();
        assert_eq!(config.operand_a, 10.0);
        assert_eq!(config.operand_b, 5.0);
        assert!(!config.verbose);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(DemoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_non_finite_operand_rejected() {
        let config = DemoConfig {
            operand_a: f64::NAN,
            ..DemoConfig::default()
        };
        assert!(config.validate().is_err());

        let config = DemoConfig {
            operand_b: f64::INFINITY,
            ..DemoConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
