// BME280 registers

#![allow(nonstandard_style)]
pub const BME280_REG_CALIB_TP: u8 = 0x88;  // 24 bytes at 0x88 - 0x9f, dig_T1..dig_T3 then dig_P1..dig_P9, little endian pairs
pub const BME280_REG_CALIB_H1: u8 = 0xa1;  // single byte, dig_H1, sits apart from the other humidity pars
pub const BME280_REG_CHIP_ID: u8 = 0xd0;   // Chip ID, expect value 0x60 (0x58 is the humidity-less BMP280)
pub const BME280_REG_RESET: u8 = 0xe0;     // writing BME280_SOFT_RESET here power-on resets the device
pub const BME280_REG_CALIB_HUM: u8 = 0xe1; // 7 bytes at 0xe1 - 0xe7, dig_H2..dig_H6, H4/H5 nibble packed over 0xe5
pub const BME280_REG_CTRL_HUM: u8 = 0xf2;  // humidity oversampling; only latches on the next CTRL_MEAS write
pub const BME280_REG_STATUS: u8 = 0xf3;    // measuring / im_update flags
pub const BME280_REG_CTRL_MEAS: u8 = 0xf4; // temperature and pressure oversampling plus power mode
pub const BME280_REG_CONFIG: u8 = 0xf5;    // standby time, IIR filter, 3-wire SPI enable
pub const BME280_REG_MEAS_DATA: u8 = 0xf7; // 8 bytes at 0xf7 - 0xfe: press msb/lsb/xlsb, temp msb/lsb/xlsb, hum msb/lsb

pub const BME280_SOFT_RESET: u8 = 0xb6;    // yap, a software initiated device reset


#[repr(u8)]
/// BME280 I2C device address
#[derive(Debug, Clone, Copy)]
pub enum DeviceAddress {
    /// SDO pin high or floating (breakout board default)
    Primary = 0x77,
    /// SDO pin tied low
    Secondary = 0x76,
}

impl From<DeviceAddress> for u8 {
    fn from(value: DeviceAddress) -> Self {
        match value {
            DeviceAddress::Primary => 0x77,
            DeviceAddress::Secondary => 0x76,
        }
    }
}

impl Default for DeviceAddress {
    fn default() -> Self {
        Self::Primary
    }
}
