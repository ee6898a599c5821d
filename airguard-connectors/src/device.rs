//! Device configuration file
//!
//! Addressing for the sensor and, optionally, the filter parameters live in a
//! line-oriented `KEY=VALUE` file:
//!
//! ```text
//! ADDR=24
//! BAUD=4800
//! PATH=/dev/ttyUSB0
//! MEDIAN_WINDOW=3
//! AVERAGE_WINDOW=6
//! CALIBRATION=0.5
//! ```
//!
//! `ADDR` is hexadecimal, with or without a `0x` prefix. Filter keys are
//! optional; keys that are absent keep their defaults. A missing file
//! yields the factory defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use airguard_core::{AbnormalDataCheck, DataCorrector};
use log::info;

use crate::{registers::AirSensor, ConnectorError, ConnectorResult};

/// Factory baud rate of the sensors
pub const DEFAULT_BAUDRATE: u32 = 4800;

/// Serial device used when none is configured
pub const DEFAULT_DEVICE_PATH: &str = "/dev/ttyUSB0";

/// Addressing and filter parameters for one sensor bus
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceConfig {
    /// Slave address of the particulate sensor
    pub slave_addr: u8,
    /// Serial line speed
    pub baudrate: u32,
    /// Serial device node
    pub device_path: String,
    /// Median window to apply, if configured
    pub median_window: Option<usize>,
    /// Moving-average window to apply, if configured
    pub average_window: Option<usize>,
    /// Calibration offset to store, if configured
    pub calibration_offset: Option<f32>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            slave_addr: AirSensor::Epam.default_slave(),
            baudrate: DEFAULT_BAUDRATE,
            device_path: DEFAULT_DEVICE_PATH.to_string(),
            median_window: None,
            average_window: None,
            calibration_offset: None,
        }
    }
}

impl DeviceConfig {
    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> ConnectorResult<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => text.parse(),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("{} not found, using default device configuration", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write the configuration to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConnectorResult<()> {
        fs::write(path, self.to_config_string())?;
        Ok(())
    }

    /// Render in the on-disk format
    pub fn to_config_string(&self) -> String {
        let mut out = format!(
            "ADDR={:02x}\nBAUD={}\nPATH={}\n",
            self.slave_addr, self.baudrate, self.device_path
        );
        if let Some(size) = self.median_window {
            out.push_str(&format!("MEDIAN_WINDOW={}\n", size));
        }
        if let Some(size) = self.average_window {
            out.push_str(&format!("AVERAGE_WINDOW={}\n", size));
        }
        if let Some(offset) = self.calibration_offset {
            out.push_str(&format!("CALIBRATION={}\n", offset));
        }
        out
    }

    /// Push the configured filter parameters into `corrector`
    ///
    /// Window sizes go through the corrector's validated setters, so an
    /// out-of-range value fails here and leaves the previous window in place.
    pub fn apply_filters<H: AbnormalDataCheck>(
        &self,
        corrector: &mut DataCorrector<H>,
    ) -> ConnectorResult<()> {
        if let Some(size) = self.median_window {
            corrector.set_median_window(size)?;
        }
        if let Some(size) = self.average_window {
            corrector.set_average_window(size)?;
        }
        if let Some(offset) = self.calibration_offset {
            corrector.set_calibration_offset(offset);
        }
        Ok(())
    }
}

impl FromStr for DeviceConfig {
    type Err = ConnectorError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut config = Self::default();

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| config_error(line_no, format!("expected KEY=VALUE, got {:?}", line)))?;
            let value = value.trim();

            match key.trim() {
                "ADDR" => config.slave_addr = parse_hex_addr(line_no, value)?,
                "BAUD" => config.baudrate = parse_value(line_no, "BAUD", value)?,
                "PATH" => {
                    if value.is_empty() {
                        return Err(config_error(line_no, "PATH is empty".to_string()));
                    }
                    config.device_path = value.to_string();
                }
                "MEDIAN_WINDOW" => config.median_window = Some(parse_value(line_no, "MEDIAN_WINDOW", value)?),
                "AVERAGE_WINDOW" => config.average_window = Some(parse_value(line_no, "AVERAGE_WINDOW", value)?),
                "CALIBRATION" => config.calibration_offset = Some(parse_value(line_no, "CALIBRATION", value)?),
                other => return Err(config_error(line_no, format!("unknown key {:?}", other))),
            }
        }

        Ok(config)
    }
}

fn parse_value<T>(line: usize, key: &str, value: &str) -> ConnectorResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| config_error(line, format!("{} {:?}: {}", key, value, e)))
}

fn parse_hex_addr(line: usize, value: &str) -> ConnectorResult<u8> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    u8::from_str_radix(digits, 16)
        .map_err(|e| config_error(line, format!("ADDR {:?}: {}", value, e)))
}

fn config_error(line: usize, reason: String) -> ConnectorError {
    ConnectorError::Config { line, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airguard_core::{Channel, CorrectionError};

    #[test]
    fn parses_addressing() {
        let config: DeviceConfig = "ADDR=2a\nBAUD=9600\nPATH=/dev/ttyS1".parse().unwrap();
        assert_eq!(config.slave_addr, 0x2a);
        assert_eq!(config.baudrate, 9600);
        assert_eq!(config.device_path, "/dev/ttyS1");
        assert_eq!(config.median_window, None);
    }

    #[test]
    fn parses_prefixed_hex_address() {
        let config: DeviceConfig = "ADDR=0x24\nBAUD=4800\nPATH=/dev/ttyUSB0".parse().unwrap();
        assert_eq!(config.slave_addr, 0x24);
        assert_eq!(config.baudrate, 4800);

        let config: DeviceConfig = "ADDR=0X2A\n".parse().unwrap();
        assert_eq!(config.slave_addr, 0x2a);

        let err = "ADDR=0x\n".parse::<DeviceConfig>().unwrap_err();
        assert!(matches!(err, ConnectorError::Config { line: 1, .. }));
    }

    #[test]
    fn parses_filter_keys() {
        let text = "ADDR=24\nBAUD=4800\nPATH=/dev/ttyUSB0\nMEDIAN_WINDOW=5\nAVERAGE_WINDOW=10\nCALIBRATION=-1.5\n";
        let config: DeviceConfig = text.parse().unwrap();
        assert_eq!(config.median_window, Some(5));
        assert_eq!(config.average_window, Some(10));
        assert_eq!(config.calibration_offset, Some(-1.5));
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let config: DeviceConfig = "BAUD=9600\n".parse().unwrap();
        assert_eq!(config.slave_addr, 0x24);
        assert_eq!(config.device_path, DEFAULT_DEVICE_PATH);
    }

    #[test]
    fn malformed_lines_report_line_number() {
        let err = "ADDR=24\nBAUD=fast\n".parse::<DeviceConfig>().unwrap_err();
        assert!(matches!(err, ConnectorError::Config { line: 2, .. }));

        let err = "ADDR=24\nnonsense\n".parse::<DeviceConfig>().unwrap_err();
        assert!(matches!(err, ConnectorError::Config { line: 2, .. }));

        let err = "ADDR=1ff\n".parse::<DeviceConfig>().unwrap_err();
        assert!(matches!(err, ConnectorError::Config { line: 1, .. }));

        let err = "PARITY=N\n".parse::<DeviceConfig>().unwrap_err();
        assert!(matches!(err, ConnectorError::Config { line: 1, .. }));
    }

    #[test]
    fn renders_lowercase_hex_address() {
        let config = DeviceConfig {
            slave_addr: 0x0b,
            ..DeviceConfig::default()
        };
        assert_eq!(config.to_config_string(), "ADDR=0b\nBAUD=4800\nPATH=/dev/ttyUSB0\n");
    }

    #[test]
    fn apply_filters_uses_validated_setters() {
        let mut corrector = DataCorrector::new();
        let config = DeviceConfig {
            median_window: Some(5),
            average_window: Some(0),
            calibration_offset: Some(2.0),
            ..DeviceConfig::default()
        };

        let err = config.apply_filters(&mut corrector).unwrap_err();
        assert!(matches!(
            err,
            ConnectorError::Correction(CorrectionError::InvalidWindowSize { requested: 0, .. })
        ));
        assert_eq!(corrector.config().median_window(), 5);
        assert_eq!(corrector.config().average_window(), 6);
        assert_eq!(corrector.correct(Channel::Pm, 1.0).unwrap(), 1.0);
    }
}
