//! Shared fixtures for connector integration tests

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use airguard_connectors::{
    registers::{EPAM_REG_ADDR, EPAM_REG_PM10, EPAM_REG_PM25, EPCO_REG_CO, EPNO2_REG_NO2},
    RegisterBus, SlaveIds,
};

/// Bus that replays a queue of values per register, then repeats the last one
#[derive(Default)]
pub struct ScriptedBus {
    script: HashMap<(u8, u16), VecDeque<u16>>,
    last: HashMap<(u8, u16), u16>,
    slave: u8,
    pub writes: Vec<(u8, u16, u16)>,
    pub reads: usize,
}

impl ScriptedBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue successive values for one register
    pub fn script(mut self, slave: u8, register: u16, values: &[u16]) -> Self {
        self.script
            .entry((slave, register))
            .or_default()
            .extend(values.iter().copied());
        self
    }

    /// A bus where every sensor at the default slaves answers with fixed values
    pub fn healthy(slaves: SlaveIds) -> Self {
        Self::new()
            .script(slaves.epam, EPAM_REG_PM25, &[12])
            .script(slaves.epam, EPAM_REG_PM10, &[20])
            .script(slaves.epam, EPAM_REG_ADDR, &[slaves.epam as u16])
            .script(slaves.epco, EPCO_REG_CO, &[80])
            .script(slaves.epno2, EPNO2_REG_NO2, &[3])
    }
}

impl RegisterBus for ScriptedBus {
    type Error = String;

    fn set_slave(&mut self, slave: u8) -> Result<(), Self::Error> {
        self.slave = slave;
        Ok(())
    }

    fn read_holding_registers(&mut self, address: u16, dest: &mut [u16]) -> Result<(), Self::Error> {
        self.reads += 1;
        for (offset, slot) in dest.iter_mut().enumerate() {
            let key = (self.slave, address + offset as u16);
            let next = self.script.get_mut(&key).and_then(VecDeque::pop_front);
            let value = match next {
                Some(v) => {
                    self.last.insert(key, v);
                    v
                }
                None => *self
                    .last
                    .get(&key)
                    .ok_or_else(|| format!("timeout waiting for slave 0x{:02X}", key.0))?,
            };
            *slot = value;
        }
        Ok(())
    }

    fn write_register(&mut self, address: u16, value: u16) -> Result<(), Self::Error> {
        self.writes.push((self.slave, address, value));
        Ok(())
    }
}
