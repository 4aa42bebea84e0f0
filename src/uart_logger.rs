//! UART drain for the diagnostic log.
//!
//! The sampling loop only ever pushes into [`crate::DIAG_LOG`]; this
//! task owns the (blocking) UART writes. Formatting is pure and tested
//! on host, the driver glue only builds for device.

use crate::logging::LogEntry;

#[cfg(feature = "esp32")]
use esp_idf_svc::hal::gpio;
#[cfg(feature = "esp32")]
use esp_idf_svc::hal::peripheral::Peripheral;
#[cfg(feature = "esp32")]
use esp_idf_svc::hal::uart::{self, UartTxDriver};

/// UART configuration for log output.
pub struct UartLoggerConfig {
    pub baud_rate: u32,
    pub tx_pin: u8,
}

impl Default for UartLoggerConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115_200,
            tx_pin: 6,
        }
    }
}

/// Format a log entry: `[timestamp_us] LEVEL: message\n`.
pub fn format_log_entry(entry: &LogEntry, buf: &mut [u8]) -> usize {
    use crate::logging::format_to_buffer;

    format_to_buffer(
        buf,
        format_args!(
            "[{:10}] {}: {}\n",
            entry.timestamp_us,
            entry.level.as_str(),
            core::str::from_utf8(&entry.msg[..entry.len as usize]).unwrap_or("<invalid utf8>")
        ),
    )
}

/// Initialize UART1 TX-only for logging output.
#[cfg(feature = "esp32")]
pub fn init_uart_logger<'d>(
    uart: impl Peripheral<P = esp_idf_svc::hal::uart::UART1> + 'd,
    tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
    config: &UartLoggerConfig,
) -> Result<UartTxDriver<'d>, esp_idf_svc::sys::EspError> {
    let uart_config = uart::config::Config::default()
        .baudrate(esp_idf_svc::hal::units::Hertz(config.baud_rate));

    UartTxDriver::new(
        uart,
        tx_pin,
        Option::<gpio::AnyIOPin>::None, // CTS
        Option::<gpio::AnyIOPin>::None, // RTS
        &uart_config,
    )
}

/// Drain pending log entries to the UART. Call from a background task.
#[cfg(feature = "esp32")]
pub fn drain_logs_to_uart(uart: &mut UartTxDriver<'_>) {
    let mut format_buf = [0u8; 192];
    while let Some(entry) = crate::DIAG_LOG.drain() {
        let len = format_log_entry(&entry, &mut format_buf);
        let _ = uart.write(&format_buf[..len]);
    }

    let dropped = crate::DIAG_LOG.dropped();
    if dropped > 0 {
        let len = crate::logging::format_to_buffer(
            &mut format_buf,
            format_args!("[WARN] dropped {} log lines\n", dropped),
        );
        let _ = uart.write(&format_buf[..len]);
        crate::DIAG_LOG.reset_dropped();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;

    #[test]
    fn test_format_log_entry() {
        let entry = LogEntry {
            timestamp_us: 1_234_567,
            level: LogLevel::Info,
            len: 10,
            msg: {
                let mut msg = [0u8; crate::logging::MAX_MSG_LEN];
                msg[..10].copy_from_slice(b"decoded: A");
                msg
            },
        };

        let mut buf = [0u8; 192];
        let len = format_log_entry(&entry, &mut buf);

        let formatted = core::str::from_utf8(&buf[..len]).unwrap();
        assert!(formatted.contains("1234567"));
        assert!(formatted.contains("INFO"));
        assert!(formatted.contains("decoded: A"));
        assert!(formatted.ends_with('\n'));
    }

    #[test]
    fn test_format_respects_entry_len() {
        let entry = LogEntry {
            timestamp_us: 999,
            level: LogLevel::Error,
            len: 5,
            msg: {
                let mut msg = [0u8; crate::logging::MAX_MSG_LEN];
                msg[..10].copy_from_slice(b"TRUNCATEDX");
                msg
            },
        };

        let mut buf = [0u8; 192];
        let len = format_log_entry(&entry, &mut buf);

        let formatted = core::str::from_utf8(&buf[..len]).unwrap();
        assert!(formatted.contains("ERROR"));
        assert!(formatted.contains("TRUNC"));
        assert!(!formatted.contains("ATEDX"));
    }
}
