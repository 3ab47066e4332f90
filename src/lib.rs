#![cfg_attr(not(test), no_std)]
#![allow(dead_code)]

pub mod error;

use crate::error::Error;

pub mod data;

pub mod constants;

use constants::{
    BME280_REG_CALIB_H1, BME280_REG_CALIB_HUM, BME280_REG_CALIB_TP, BME280_REG_CHIP_ID,
    BME280_REG_CONFIG, BME280_REG_CTRL_HUM, BME280_REG_CTRL_MEAS, BME280_REG_MEAS_DATA,
    BME280_REG_RESET, BME280_REG_STATUS, BME280_SOFT_RESET,
};

use data::{
    Bme280Configuration, CalibrationPars, ConfigReg, CtrlHum, CtrlMeas, DeviceInfo, DeviceModel,
    Measurements, PowerMode, RawMeasurement, Status,
};

#[cfg(not(feature = "async"))]
use embedded_hal::{delay::DelayNs, i2c::I2c};
#[cfg(feature = "async")]
use embedded_hal_async::{delay::DelayNs as AsyncDelayNs, i2c::I2c as AsyncI2c};

use libm::pow;
use log::{debug, info};

const STANDARD_SEA_LEVEL_AIR_PRESSURE: f64 = 101325.0; // Pa


/// the BME280 device
pub struct BME280<I2C, D> {
    /// I²C interface
    i2c: I2C,
    /// I²C device address
    address: u8,
    delayer: D,
    pub device_info: DeviceInfo,
    /// None until all three calibration spans were read from the device
    cal_pars: Option<CalibrationPars>,
    /// additive offset applied to the reported temperature only
    temperature_correction_c: f64,
    /// sea level reference in Pa, used for altitude derivation
    reference_pressure_pa: f64,
}

#[cfg(not(feature = "async"))]
impl<I2C, D, E> BME280<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    /// create new BME280 driver.  0x77 is the usual address, 0x76 with the
    /// address pin pulled low
    pub fn new(i2c: I2C, address: u8, delayer: D) -> Self {
        log::debug!("new called");
        Self {
            i2c,
            address,
            delayer,
            device_info: DeviceInfo {
                ..Default::default()
            },
            cal_pars: None,
            temperature_correction_c: 0.0,
            reference_pressure_pa: STANDARD_SEA_LEVEL_AIR_PRESSURE,
        }
    }

    /// create new BME280 driver with a local sea level reference pressure in
    /// Pa for altitude derivation
    pub fn new_with_reference_pressure(
        i2c: I2C,
        address: u8,
        delayer: D,
        reference_pa: f64,
    ) -> Self {
        log::debug!("new_with_reference_pressure called");
        Self {
            i2c,
            address,
            delayer,
            device_info: DeviceInfo {
                ..Default::default()
            },
            cal_pars: None,
            temperature_correction_c: 0.0,
            reference_pressure_pa: reference_pa,
        }
    }

    /// give back the I2C interface
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[cfg(feature = "async")]
impl<I2C, D, E> BME280<I2C, D>
where
    I2C: AsyncI2c<Error = E>,
    D: AsyncDelayNs,
{
    /// create new BME280 driver.  0x77 is the usual address, 0x76 with the
    /// address pin pulled low
    pub fn new(i2c: I2C, address: u8, delayer: D) -> Self {
        debug!("new called");
        Self {
            i2c,
            address,
            delayer,
            device_info: DeviceInfo {
                ..Default::default()
            },
            cal_pars: None,
            temperature_correction_c: 0.0,
            reference_pressure_pa: STANDARD_SEA_LEVEL_AIR_PRESSURE,
        }
    }

    /// create new BME280 driver with a local sea level reference pressure in
    /// Pa for altitude derivation
    pub fn new_with_reference_pressure(
        i2c: I2C,
        address: u8,
        delayer: D,
        reference_pa: f64,
    ) -> Self {
        debug!("new_with_reference_pressure called");
        Self {
            i2c,
            address,
            delayer,
            device_info: DeviceInfo {
                ..Default::default()
            },
            cal_pars: None,
            temperature_correction_c: 0.0,
            reference_pressure_pa: reference_pa,
        }
    }

    /// give back the I2C interface
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[maybe_async_cfg::maybe(
    sync(
        cfg(not(feature = "async")),
        self = "BME280",
        idents(AsyncI2c(sync = "I2c"), AsyncDelayNs(sync = "DelayNs"))
    ),
    async(feature = "async", keep_self)
)]
impl<I2C, D, E> BME280<I2C, D>
where
    I2C: AsyncI2c<Error = E>,
    D: AsyncDelayNs,
{
    // command_buf is an u8 array that starts with the register byte followed by the value byte(s)
    async fn write_command<const N: usize>(&mut self, command_buf: [u8; N]) -> Result<(), Error<E>> {
        self.i2c
            .write(self.address, &command_buf)
            .await
            .map_err(Error::I2c)?;
        Ok(())
    }

    async fn read_register(&mut self, register_address: u8, buffer: &mut [u8]) -> Result<(), Error<E>> {
        let command_buffer = [register_address];
        self.i2c
            .write_read(self.address, &command_buffer, buffer)
            .await
            .map_err(Error::I2c)?;
        Ok(())
    }

    /// reset BME280 soft reset.  All configuration registers fall back to
    /// their power-on defaults and calibration must be considered stale
    pub async fn reset_device(&mut self) -> Result<(), Error<E>> {
        debug!("in reset_device()");
        self.write_command([BME280_REG_RESET, BME280_SOFT_RESET]).await?;
        self.delayer.delay_ms(2).await; // t_startup
        Ok(())
    }

    /// initial BME280 device: soft reset, chip id check, calibration load and
    /// the default configuration (normal mode, x1 oversampling on all channels)
    pub async fn init_device(&mut self) -> Result<(), Error<E>> {
        debug!("in init_device(), doing reset_device");
        self.reset_device().await?;

        let mut result_buf: [u8; 1] = [0; 1];
        self.read_register(BME280_REG_CHIP_ID, &mut result_buf).await?;
        let model = DeviceModel::from(result_buf[0]);
        self.device_info.id = model;
        if model != DeviceModel::BME280 {
            // a BMP280 answers on the same addresses but has no humidity channel
            return Err(Error::UnexpectedChipId(result_buf[0]));
        }
        info!("found BME280, chip id {:#04x}", result_buf[0]);

        debug!("reading calibration pars");
        self.read_calibration_pars().await?;
        self.set_bme280_configuration(Bme280Configuration::default()).await?;
        Ok(())
    }

    /// read device model
    pub async fn get_chip_id(&mut self) -> Result<DeviceModel, Error<E>> {
        let mut result_buf: [u8; 1] = [0; 1];
        self.read_register(BME280_REG_CHIP_ID, &mut result_buf).await?;
        self.device_info.id = DeviceModel::from(result_buf[0]);

        Ok(DeviceModel::from(result_buf[0]))
    }

    /// get status
    pub async fn get_status(&mut self) -> Result<Status, Error<E>> {
        debug!("in get_status()");
        let mut result_buf: [u8; 1] = [0; 1];
        self.read_register(BME280_REG_STATUS, &mut result_buf).await?;
        let status = Status(result_buf[0]);
        Ok(status)
    }

    /// true while a conversion is running and the data registers are stale
    pub async fn is_measuring(&mut self) -> Result<bool, Error<E>> {
        let status = self.get_status().await?;
        Ok(status.get_measuring())
    }

    /// set power mode, preserving the oversampling bits of CTRL_MEAS
    pub async fn set_power_mode(&mut self, power_mode: PowerMode) -> Result<(), Error<E>> {
        debug!("in set_power_mode( {:?} )", power_mode);
        let mut result_buf: [u8; 1] = [0; 1];
        self.read_register(BME280_REG_CTRL_MEAS, &mut result_buf).await?;
        let mut ctrl_meas: CtrlMeas = CtrlMeas(result_buf[0]);
        ctrl_meas.set_mode(power_mode as u8);
        self.write_command([BME280_REG_CTRL_MEAS, ctrl_meas.0]).await?;
        Ok(())
    }

    /// get the power mode
    pub async fn get_power_mode(&mut self) -> Result<PowerMode, Error<E>> {
        debug!("in get_power_mode");
        let mut result_buf: [u8; 1] = [0; 1];
        self.read_register(BME280_REG_CTRL_MEAS, &mut result_buf).await?;
        Ok(CtrlMeas(result_buf[0]).get_mode())
    }

    /// set BME280 configuration.  CTRL_HUM only latches on the following
    /// CTRL_MEAS write, so that register is always written last
    pub async fn set_bme280_configuration(
        &mut self,
        config: Bme280Configuration,
    ) -> Result<(), Error<E>> {
        debug!("in set_bme280_configuration({:?})", config);
        self.write_command([BME280_REG_CTRL_HUM, config.ctrl_hum_byte()]).await?;
        self.write_command([BME280_REG_CONFIG, config.config_byte()]).await?;
        self.write_command([BME280_REG_CTRL_MEAS, config.ctrl_meas_byte()]).await?;
        Ok(())
    }

    /// get BME280 configuration: power mode, oversampling, filter, standby time
    pub async fn get_bme280_configuration(&mut self) -> Result<Bme280Configuration, Error<E>> {
        debug!("in get_bme280_configuration");
        let mut result_buf: [u8; 4] = [0; 4];
        // first byte is CTRL_HUM, then STATUS (skip), CTRL_MEAS, CONFIG
        self.read_register(BME280_REG_CTRL_HUM, &mut result_buf).await?;
        let ctrl_hum = CtrlHum(result_buf[0]);
        let ctrl_meas = CtrlMeas(result_buf[2]);
        let config_reg = ConfigReg(result_buf[3]);

        Ok(Bme280Configuration {
            power_mode: ctrl_meas.get_mode(),
            over_sampling_temp: ctrl_meas.get_osrs_t(),
            over_sampling_press: ctrl_meas.get_osrs_p(),
            over_sampling_hum: ctrl_hum.get_osrs_h(),
            iir_filter_coef: config_reg.get_filter(),
            standby_time: config_reg.get_t_sb(),
        })
    }

    /// read the three calibration register spans and save into device property.
    /// the temperature/pressure block is contiguous, the humidity constants
    /// are split around the chip id area and need two more reads
    pub async fn read_calibration_pars(&mut self) -> Result<(), Error<E>> {
        debug!("in read_calibration_pars()");
        let mut tp_block: [u8; 24] = [0; 24];
        self.read_register(BME280_REG_CALIB_TP, &mut tp_block).await?;

        let mut h1_buf: [u8; 1] = [0; 1];
        self.read_register(BME280_REG_CALIB_H1, &mut h1_buf).await?;

        let mut hum_block: [u8; 7] = [0; 7];
        self.read_register(BME280_REG_CALIB_HUM, &mut hum_block).await?;

        self.cal_pars = Some(CalibrationPars::from_registers(
            &tp_block, h1_buf[0], &hum_block,
        ));
        Ok(())
    }

    /// one burst read of the raw ADC words so pressure, temperature and
    /// humidity come from the same measurement cycle
    pub async fn read_raw_measurements(&mut self) -> Result<RawMeasurement, Error<E>> {
        debug!("in read_raw_measurements");
        let mut result_buf: [u8; 8] = [0; 8];
        self.read_register(BME280_REG_MEAS_DATA, &mut result_buf).await?;
        Ok(RawMeasurement::from_burst(&result_buf))
    }

    /// read and compensate a full measurement set
    pub async fn read_measurements(&mut self) -> Result<Measurements, Error<E>> {
        debug!("in read_measurements");
        let cal = self.cal_pars.ok_or(Error::Uncalibrated)?;
        let raw = self.read_raw_measurements().await?;

        // temperature first, pressure and humidity both need its t_fine
        let (temperature_c, t_fine) = cal.compensate_temperature(raw.temperature_adc);
        let air_pressure_pa = cal.compensate_pressure(raw.pressure_adc, t_fine);
        let humidity_rh = cal.compensate_humidity(raw.humidity_adc, t_fine);

        // the user offset shifts the reported temperature only; pressure and
        // humidity keep using the uncorrected t_fine, as the reference does
        let temperature_c = temperature_c + self.temperature_correction_c;
        let altitude_m = self.altitude_from_pressure(air_pressure_pa);

        Ok(Measurements {
            temperature_c,
            air_pressure_pa,
            humidity_rh,
            altitude_m,
        })
    }
}

// bus-independent helpers, available for both the sync and async builds
impl<I2C, D> BME280<I2C, D> {
    /// additive correction in degrees C applied to reported temperatures.
    /// it does not feed into the t_fine used by pressure and humidity
    pub fn set_temperature_correction(&mut self, correction_c: f64) {
        self.temperature_correction_c = correction_c;
    }

    /// set local sea level reference pressure in Pa, default 101325
    pub fn set_reference_pressure(&mut self, reference_pa: f64) {
        self.reference_pressure_pa = reference_pa;
    }

    pub fn get_reference_pressure(&self) -> f64 {
        self.reference_pressure_pa
    }

    /// barometric altitude in metres for a pressure reading, against the
    /// configured sea level reference
    pub fn altitude_from_pressure(&self, pressure_pa: f64) -> f64 {
        44330.0 * (1.0 - pow(pressure_pa / self.reference_pressure_pa, 1.0 / 5.255))
    }
}
