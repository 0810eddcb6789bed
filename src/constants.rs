//! Field Node Telemetry Constants
//!
//! Frame geometry and sensor type codes shared by the decoders and the
//! value interpreter.

/// Length of the fixed scalar frame header
pub const FRAME_HEADER_LEN: usize = 8;

/// Length of one sensor record inside a scalar frame
pub const FRAME_RECORD_LEN: usize = 10;

/// Trailing checksum bytes at the end of a scalar frame
pub const FRAME_CHECKSUM_LEN: usize = 2;

/// Header offset of the device id
pub const FRAME_OFFSET_DEVICE_ID: usize = 0;

/// Header offset of the declared sensor count
pub const FRAME_OFFSET_SENSOR_COUNT: usize = 6;

/// Label prefix for numeric device ids, rendered as `ARDUINO_MEGA_007`
pub const DEFAULT_DEVICE_LABEL_PREFIX: &str = "ARDUINO_MEGA_";

/// Minimum number of integers in a compact array entry (id, type, address, channel)
pub const COMPACT_ENTRY_MIN_LEN: usize = 4;

/// Combined address mask for the sub-type code (low 5 bits)
pub const COMBINED_ADDRESS_SUB_TYPE_MASK: u8 = 0x1F;

/// Combined address shift for the bus position (high 3 bits)
pub const COMBINED_ADDRESS_POSITION_SHIFT: u8 = 5;

/// First type code of the modbus-class range
pub const MODBUS_TYPE_RANGE_START: u8 = 11;

/// SHT20 temperature/humidity (I2C)
pub const TYPE_SHT20: u8 = 1;
/// TSL2591 light sensor
pub const TYPE_TSL2591: u8 = 2;
/// ADS1115 pH/EC front end
pub const TYPE_ADS1115: u8 = 3;
/// SCD30 CO2 sensor
pub const TYPE_SCD30: u8 = 4;
/// DS18B20 temperature probe
pub const TYPE_DS18B20: u8 = 5;
/// Modbus temperature/humidity
pub const TYPE_MODBUS_TEMP_HUMID: u8 = 11;
/// Modbus pressure
pub const TYPE_MODBUS_PRESSURE: u8 = 12;
/// Modbus flow
pub const TYPE_MODBUS_FLOW: u8 = 13;
/// Modbus relay module
pub const TYPE_MODBUS_RELAY: u8 = 14;
/// Modbus energy meter
pub const TYPE_MODBUS_ENERGY: u8 = 15;
/// Wind direction
pub const TYPE_WIND_DIRECTION: u8 = 16;
/// Wind speed
pub const TYPE_WIND_SPEED: u8 = 17;
/// Rain/snow precipitation
pub const TYPE_PRECIPITATION: u8 = 18;
/// Soil humidity/temperature/EC/pH
pub const TYPE_SOIL: u8 = 19;
/// SHT20 temperature/humidity behind a Modbus bridge
pub const TYPE_SHT20_MODBUS: u8 = 21;
