//! Register map of the supported RS485 air sensors
//!
//! Offsets and scaling come from the vendor datasheets. All values are
//! single 16-bit holding registers.

// ===== EPAM (PM2.5 / PM10) =====

/// PM2.5 concentration, µg/m³, unscaled
pub const EPAM_REG_PM25: u16 = 0x0004;

/// PM10 concentration, µg/m³, unscaled
pub const EPAM_REG_PM10: u16 = 0x0009;

/// Device slave address register
pub const EPAM_REG_ADDR: u16 = 0x0100;

/// Device baud-rate code register
pub const EPAM_REG_BAUD: u16 = 0x0101;

// ===== EPCO (CO) =====

/// CO concentration register
pub const EPCO_REG_CO: u16 = 0x0006;

/// Raw CO register value is ppm × 100
pub const EPCO_CO_DIVISOR: f32 = 100.0;

// ===== EPNO2 (NO2) =====

/// NO2 concentration register
pub const EPNO2_REG_NO2: u16 = 0x0006;

/// Raw NO2 register value is ppm × 100
pub const EPNO2_NO2_DIVISOR: f32 = 100.0;

/// Divisor meaning "use the raw register value"
pub const NO_SCALING: f32 = 0.0;

// ===== BAUD CODES =====

/// Baud code written to [`EPAM_REG_BAUD`] for 2400 baud (and any unsupported rate)
pub const BAUD_CODE_2400: u16 = 0;

/// Baud code for 4800 baud
pub const BAUD_CODE_4800: u16 = 1;

/// Baud code for 9600 baud
pub const BAUD_CODE_9600: u16 = 2;

/// Sensor models on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AirSensor {
    /// Particulate matter sensor
    Epam,
    /// Carbon monoxide sensor
    Epco,
    /// Nitrogen dioxide sensor
    Epno2,
}

impl AirSensor {
    /// Every supported sensor
    pub const ALL: [AirSensor; 3] = [AirSensor::Epam, AirSensor::Epco, AirSensor::Epno2];

    /// Factory slave address
    pub const fn default_slave(&self) -> u8 {
        match self {
            AirSensor::Epam => 0x24,
            AirSensor::Epco => 0x25,
            AirSensor::Epno2 => 0x23,
        }
    }

    /// Name used in logs
    pub const fn name(&self) -> &'static str {
        match self {
            AirSensor::Epam => "EPAM",
            AirSensor::Epco => "EPCO",
            AirSensor::Epno2 => "EPNO2",
        }
    }
}

/// Map a baud rate to the code the EPAM baud register expects
pub fn baud_code(baudrate: u32) -> u16 {
    match baudrate {
        9600 => BAUD_CODE_9600,
        4800 => BAUD_CODE_4800,
        _ => BAUD_CODE_2400,
    }
}

/// Apply a register divisor; [`NO_SCALING`] keeps the raw value
pub fn scale(raw: u16, divisor: f32) -> f32 {
    if divisor != NO_SCALING {
        raw as f32 / divisor
    } else {
        raw as f32
    }
}
