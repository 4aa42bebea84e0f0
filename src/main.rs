//! OpticalMorseReader - Firmware entry point
//!
//! Polls the photodiode ADC every sample period, drives the decode
//! pipeline inline, and drains decoded characters plus diagnostics to
//! the UART. Everything interesting happens in the library; this file
//! is wiring.

#![no_std]
#![no_main]

use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::sys as esp_idf_sys;
use esp_idf_svc::sys::EspError;

use optical_morse_reader::{
    hal::AdcSource,
    rt_error, rt_info, rt_warn,
    uart_logger::{drain_logs_to_uart, init_uart_logger, UartLoggerConfig},
    FaultCode, IntensitySource, MorseReader, ReaderConfig, DIAG_LOG, FAULT_STATE, TEXT_STREAM,
};

#[no_mangle]
fn main() {
    // Initialize ESP-IDF
    esp_idf_sys::link_patches();

    if let Err(err) = run() {
        FAULT_STATE.set(FaultCode::HardwareFault, err.code() as u32);
    }

    // Faulted or halted: stay idle so the log drain (if any) can finish.
    loop {
        unsafe {
            esp_idf_sys::vTaskDelay(100);
        }
    }
}

fn run() -> Result<(), EspError> {
    let peripherals = Peripherals::take()?;

    // Photodiode on ADC1 channel 0 (GPIO1 on the S3 board)
    let mut source = AdcSource::new(peripherals.adc1, peripherals.pins.gpio1)?;
    let mut uart = init_uart_logger(
        peripherals.uart1,
        peripherals.pins.gpio6,
        &UartLoggerConfig::default(),
    )?;

    let config = ReaderConfig::default();
    let mut reader: MorseReader = MorseReader::new(config);

    let start = now_us();
    rt_info!(
        DIAG_LOG,
        start,
        "{} up, unit {} us, threshold {}",
        env!("VERSION_STRING"),
        config.unit_us,
        config.threshold
    );

    // One FreeRTOS tick is 10 ms at the default 100 Hz tick rate,
    // matching sample_period_us.
    let delay_ticks = (config.sample_period_us / 10_000).max(1) as u32;

    let mut reported_overflow = 0u32;

    loop {
        let now = now_us();

        match source.read_intensity() {
            Ok(raw) => {
                let decoded = reader.feed_raw(now, raw);
                if let Some(c) = decoded.character {
                    rt_info!(DIAG_LOG, now, "decoded: {}", c);
                }
                if decoded.word_boundary {
                    rt_info!(DIAG_LOG, now, "(space)");
                }
                TEXT_STREAM.push_decoded(decoded);

                let overflow = reader.overflowed();
                if overflow != reported_overflow {
                    rt_warn!(DIAG_LOG, now, "symbol buffer full, {} dropped", overflow);
                    reported_overflow = overflow;
                }
            }
            Err(_) => {
                // Acquisition failure: latch the fault and halt decoding,
                // a partial letter is discarded rather than guessed at.
                FAULT_STATE.set(FaultCode::AcquisitionFailed, 0);
                rt_error!(DIAG_LOG, now, "ADC read failed, halting decode");
                reader.reset();
                drain_logs_to_uart(&mut uart);
                return Ok(());
            }
        }

        drain_logs_to_uart(&mut uart);

        unsafe {
            esp_idf_sys::vTaskDelay(delay_ticks);
        }
    }
}

fn now_us() -> i64 {
    // SAFETY: esp_timer_get_time is always safe to call
    unsafe { esp_idf_sys::esp_timer_get_time() }
}
