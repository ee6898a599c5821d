//! Sensor reads and device maintenance over a [`RegisterBus`]
//!
//! Every read selects the slave first, so sensors sharing one bus can be
//! polled in any order. Failures are logged with the sensor, slave and
//! register before being returned.

use log::{debug, warn};

use crate::{
    device::DeviceConfig,
    registers::{
        baud_code, scale, AirSensor, EPAM_REG_ADDR, EPAM_REG_BAUD, EPAM_REG_PM10, EPAM_REG_PM25,
        EPCO_CO_DIVISOR, EPCO_REG_CO, EPNO2_NO2_DIVISOR, EPNO2_REG_NO2, NO_SCALING,
    },
    ConnectorError, ConnectorResult, RegisterBus,
};

/// Read one register from `slave` and apply `divisor`
pub fn read_scaled<B: RegisterBus>(
    bus: &mut B,
    sensor: &'static str,
    slave: u8,
    register: u16,
    divisor: f32,
) -> ConnectorResult<f32> {
    let mut raw = [0u16; 1];

    bus.set_slave(slave)
        .and_then(|()| bus.read_holding_registers(register, &mut raw))
        .map_err(|e| bus_error(sensor, slave, register, e))?;

    let value = scale(raw[0], divisor);
    debug!("{} (slave 0x{:02X}) register 0x{:04X} = {}", sensor, slave, register, value);
    Ok(value)
}

/// Read PM2.5 and PM10 (µg/m³) from an EPAM sensor
pub fn read_epam<B: RegisterBus>(bus: &mut B, slave: u8) -> ConnectorResult<(f32, f32)> {
    let pm2_5 = read_scaled(bus, "EPAM (PM2.5)", slave, EPAM_REG_PM25, NO_SCALING)?;
    let pm10 = read_scaled(bus, "EPAM (PM10)", slave, EPAM_REG_PM10, NO_SCALING)?;
    Ok((pm2_5, pm10))
}

/// Read CO (ppm) from an EPCO sensor
pub fn read_epco<B: RegisterBus>(bus: &mut B, slave: u8) -> ConnectorResult<f32> {
    read_scaled(bus, "EPCO (CO)", slave, EPCO_REG_CO, EPCO_CO_DIVISOR)
}

/// Read NO2 (ppm) from an EPNO2 sensor
pub fn read_epno2<B: RegisterBus>(bus: &mut B, slave: u8) -> ConnectorResult<f32> {
    read_scaled(bus, "EPNO2 (NO2)", slave, EPNO2_REG_NO2, EPNO2_NO2_DIVISOR)
}

/// Check the EPAM sensor at `config.slave_addr` answers on the bus
pub fn check_connection<B: RegisterBus>(bus: &mut B, config: &DeviceConfig) -> bool {
    let mut dummy = [0u16; 1];
    let result = bus
        .set_slave(config.slave_addr)
        .and_then(|()| bus.read_holding_registers(EPAM_REG_ADDR, &mut dummy));

    match result {
        Ok(()) => true,
        Err(e) => {
            debug!("{} at slave 0x{:02X} not responding: {}", AirSensor::Epam.name(), config.slave_addr, e);
            false
        }
    }
}

/// Reprogram the sensor's baud rate and record it in `config`
///
/// `config` is only updated once the device accepted the write.
pub fn update_baud<B: RegisterBus>(
    bus: &mut B,
    config: &mut DeviceConfig,
    baudrate: u32,
) -> ConnectorResult<()> {
    let slave = config.slave_addr;

    bus.set_slave(slave)
        .and_then(|()| bus.write_register(EPAM_REG_BAUD, baud_code(baudrate)))
        .map_err(|e| bus_error(AirSensor::Epam.name(), slave, EPAM_REG_BAUD, e))?;

    config.baudrate = baudrate;
    Ok(())
}

fn bus_error<E: std::fmt::Display>(sensor: &'static str, slave: u8, register: u16, e: E) -> ConnectorError {
    warn!("{} (slave 0x{:02X}): register 0x{:04X} transfer failed: {}", sensor, slave, register, e);
    ConnectorError::Bus {
        sensor,
        slave,
        register,
        reason: e.to_string(),
    }
}
