//! Polling station
//!
//! Reads every sensor on the bus once per [`Station::poll`], runs PM2.5 and
//! CO through the correction pipeline, and stamps the result. A sensor that
//! fails to answer is logged and reported as `None`; the remaining sensors
//! are still read.

use airguard_core::{
    time::{TimeSource, Timestamp},
    Channel, Correction, DataCorrector,
};
use log::{debug, warn};
use serde::Serialize;

use crate::{
    registers::AirSensor,
    rs485::{read_epam, read_epco, read_epno2},
    ConnectorResult, RegisterBus,
};

/// Slave addresses of the sensors sharing the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlaveIds {
    pub epam: u8,
    pub epco: u8,
    pub epno2: u8,
}

impl Default for SlaveIds {
    fn default() -> Self {
        Self {
            epam: AirSensor::Epam.default_slave(),
            epco: AirSensor::Epco.default_slave(),
            epno2: AirSensor::Epno2.default_slave(),
        }
    }
}

/// One polling cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationReport {
    /// When the cycle started
    pub timestamp: Timestamp,
    /// Corrected PM2.5, µg/m³
    pub pm2_5: Option<Correction>,
    /// Raw PM10, µg/m³
    pub pm10: Option<f32>,
    /// Corrected CO, ppm
    pub co: Option<Correction>,
    /// Raw NO2, ppm
    pub no2: Option<f32>,
}

impl StationReport {
    /// Serialize as the JSON payload handed to downstream transport
    pub fn to_json(&self) -> ConnectorResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check if no sensor answered
    pub fn is_empty(&self) -> bool {
        self.pm2_5.is_none() && self.pm10.is_none() && self.co.is_none() && self.no2.is_none()
    }
}

/// Sensor bus plus the correction pipeline fed from it
pub struct Station<B, T> {
    bus: B,
    clock: T,
    slaves: SlaveIds,
    corrector: DataCorrector,
}

impl<B: RegisterBus, T: TimeSource> Station<B, T> {
    /// Station with factory slave addresses and default filters
    pub fn new(bus: B, clock: T) -> Self {
        Self {
            bus,
            clock,
            slaves: SlaveIds::default(),
            corrector: DataCorrector::new(),
        }
    }

    /// Use non-default slave addresses
    pub fn with_slaves(mut self, slaves: SlaveIds) -> Self {
        self.slaves = slaves;
        self
    }

    /// Correction pipeline, e.g. to apply a [`DeviceConfig`](crate::DeviceConfig)
    pub fn corrector_mut(&mut self) -> &mut DataCorrector {
        &mut self.corrector
    }

    /// Correction pipeline
    pub fn corrector(&self) -> &DataCorrector {
        &self.corrector
    }

    /// Underlying bus
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Read every sensor once
    ///
    /// Only correction failures abort the cycle; bus failures leave the
    /// affected fields empty.
    pub fn poll(&mut self) -> ConnectorResult<StationReport> {
        let timestamp = self.clock.now();

        let (pm2_5, pm10) = match read_epam(&mut self.bus, self.slaves.epam) {
            Ok((pm2_5, pm10)) => (Some(self.corrector.correct_detailed(Channel::Pm, pm2_5)?), Some(pm10)),
            Err(e) => {
                warn!("skipping particulate reading: {}", e);
                (None, None)
            }
        };

        let co = match read_epco(&mut self.bus, self.slaves.epco) {
            Ok(co) => Some(self.corrector.correct_detailed(Channel::Co, co)?),
            Err(e) => {
                warn!("skipping CO reading: {}", e);
                None
            }
        };

        let no2 = read_epno2(&mut self.bus, self.slaves.epno2)
            .map_err(|e| warn!("skipping NO2 reading: {}", e))
            .ok();

        let report = StationReport { timestamp, pm2_5, pm10, co, no2 };
        debug!("poll at {}: {:?}", timestamp, report);
        Ok(report)
    }

    /// Release the correction history and hand back the bus
    pub fn shutdown(mut self) -> B {
        self.corrector.shutdown();
        self.bus
    }
}
