// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;

/// A measurement reported by a device, used as a non-trivial item type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SensorReading {
    pub device: String,
    pub sequence: u32,
    pub value: i64,
}

impl SensorReading {
    pub fn new(device: impl Into<String>, sequence: u32, value: i64) -> Self {
        Self {
            device: device.into(),
            sequence,
            value,
        }
    }
}

impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}={}", self.device, self.sequence, self.value)
    }
}

#[must_use]
pub fn thermostat(sequence: u32) -> SensorReading {
    SensorReading::new("thermostat", sequence, 21)
}

#[must_use]
pub fn doorbell(sequence: u32) -> SensorReading {
    SensorReading::new("doorbell", sequence, 1)
}
