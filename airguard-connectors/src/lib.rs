//! Sensor Connectors for Air-Quality Field-Bus Devices
//!
//! ## Overview
//!
//! This crate is the glue between physical sensors and the correction engine
//! in `airguard-core`. It knows the register layout of the supported RS485
//! sensors, reads and scales their values, persists device addressing in a
//! small text file, and runs a polling station that feeds readings through a
//! [`DataCorrector`](airguard_core::DataCorrector).
//!
//! ## Supported Sensors
//!
//! | Sensor | Quantity       | Register | Scaling   | Default slave |
//! |--------|----------------|----------|-----------|---------------|
//! | EPAM   | PM2.5, PM10    | 0x04/0x09| none      | 0x24          |
//! | EPCO   | CO (ppm)       | 0x06     | ÷ 100     | 0x25          |
//! | EPNO2  | NO2 (ppm)      | 0x06     | ÷ 100     | 0x23          |
//!
//! ## Transport
//!
//! No serial driver is bundled. Anything that can select a slave and read or
//! write holding registers implements [`RegisterBus`]; a libmodbus binding, a
//! TCP gateway client, or an in-memory mock in tests.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use airguard_connectors::{DeviceConfig, Station};
//! use airguard_core::time::SystemTime;
//!
//! let config = DeviceConfig::load("/etc/airguard/device.conf")?;
//! let bus = open_rtu(&config.device_path, config.baudrate)?;
//!
//! let mut station = Station::new(bus, SystemTime);
//! config.apply_filters(station.corrector_mut())?;
//!
//! loop {
//!     let report = station.poll()?;
//!     publish(report.to_json()?);
//! }
//! ```

use std::fmt;

use airguard_core::CorrectionError;
use thiserror::Error;

pub mod device;
pub mod registers;
pub mod rs485;
pub mod station;

// Re-export common types
pub use device::DeviceConfig;
pub use registers::AirSensor;
pub use station::{SlaveIds, Station, StationReport};

/// Common connector errors
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("{sensor} (slave 0x{slave:02X}): bus transfer at register 0x{register:04X} failed: {reason}")]
    Bus {
        sensor: &'static str,
        slave: u8,
        register: u16,
        reason: String,
    },

    #[error("Configuration error on line {line}: {reason}")]
    Config { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Correction error: {0}")]
    Correction(#[from] CorrectionError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for connector operations
pub type ConnectorResult<T> = Result<T, ConnectorError>;

/// Holding-register access on a multi-drop field bus
pub trait RegisterBus {
    type Error: fmt::Display;

    /// Address subsequent transfers to `slave`
    fn set_slave(&mut self, slave: u8) -> Result<(), Self::Error>;

    /// Fill `dest` with consecutive holding registers starting at `address`
    fn read_holding_registers(&mut self, address: u16, dest: &mut [u16]) -> Result<(), Self::Error>;

    /// Write a single holding register
    fn write_register(&mut self, address: u16, value: u16) -> Result<(), Self::Error>;
}
