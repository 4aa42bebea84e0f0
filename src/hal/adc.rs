//! Photodiode ADC input.
//!
//! One-shot ADC reads of the photodiode channel, exposed to the core
//! through [`IntensitySource`]. 12 dB attenuation for the full input
//! range; raw units are whatever the ADC gives us, the configured
//! threshold is expressed in the same units.

use esp_idf_svc::hal::adc::attenuation;
use esp_idf_svc::hal::adc::oneshot::config::AdcChannelConfig;
use esp_idf_svc::hal::adc::oneshot::{AdcChannelDriver, AdcDriver};
use esp_idf_svc::hal::gpio::ADCPin;
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::sys::EspError;

use crate::source::{IntensitySource, SourceError};

/// Photodiode sampling via one-shot ADC reads.
pub struct AdcSource<'d, P: ADCPin> {
    channel: AdcChannelDriver<'d, P, AdcDriver<'d, P::Adc>>,
}

impl<'d, P: ADCPin> AdcSource<'d, P> {
    /// Configure the ADC unit and channel for the photodiode pin.
    pub fn new(
        adc: impl Peripheral<P = P::Adc> + 'd,
        pin: impl Peripheral<P = P> + 'd,
    ) -> Result<Self, EspError> {
        let driver = AdcDriver::new(adc)?;
        let config = AdcChannelConfig {
            attenuation: attenuation::DB_12,
            ..Default::default()
        };
        let channel = AdcChannelDriver::new(driver, pin, &config)?;
        Ok(Self { channel })
    }

    /// Raw one-shot read, surfacing the driver error.
    pub fn read_raw(&mut self) -> Result<u16, EspError> {
        self.channel.read()
    }
}

impl<'d, P: ADCPin> IntensitySource for AdcSource<'d, P> {
    fn read_intensity(&mut self) -> Result<u16, SourceError> {
        self.read_raw().map_err(|_| SourceError::ReadFailed)
    }
}
