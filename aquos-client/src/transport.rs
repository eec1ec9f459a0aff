//! Byte-level channel to the device.

use std::io::{self, BufRead, BufReader, Write};
use std::time::Duration;

use serialport::SerialPort;

/// A duplex byte channel carrying one command frame out and one reply line
/// back per exchange.
///
/// Implementations own the underlying device handle for the lifetime of the
/// session and release it when dropped. The trait carries no locking; the
/// session type serializes all exchanges through `&mut self`.
pub trait Transport {
    /// Write a complete frame to the device.
    fn send(&mut self, frame: &[u8]) -> io::Result<()>;

    /// Read one line, up to and including the terminator.
    ///
    /// A read timeout surfaces as an [`io::Error`] with kind
    /// [`io::ErrorKind::TimedOut`].
    fn read_line(&mut self) -> io::Result<Vec<u8>>;
}

/// [`Transport`] over a local serial port.
///
/// The Aquos service port runs at a fixed 9600 baud, 8N1.
pub struct SerialTransport {
    port: BufReader<Box<dyn SerialPort>>,
}

impl SerialTransport {
    /// Baud rate of the television's service port.
    pub const BAUD_RATE: u32 = 9600;

    /// Default read timeout for one reply line.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

    /// Open the serial device at `path` with the default timeout.
    pub fn open(path: &str) -> serialport::Result<SerialTransport> {
        SerialTransport::open_with_timeout(path, Self::DEFAULT_TIMEOUT)
    }

    /// Open the serial device at `path` with an explicit read timeout.
    pub fn open_with_timeout(
        path: &str,
        timeout: Duration,
    ) -> serialport::Result<SerialTransport> {
        let port = serialport::new(path, Self::BAUD_RATE)
            .timeout(timeout)
            .open()?;
        log::debug!("Opened serial device {} at {} baud", path, Self::BAUD_RATE);
        Ok(SerialTransport {
            port: BufReader::with_capacity(64, port),
        })
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, frame: &[u8]) -> io::Result<()> {
        let port = self.port.get_mut();
        port.write_all(frame)?;
        port.flush()
    }

    fn read_line(&mut self) -> io::Result<Vec<u8>> {
        let mut line = Vec::with_capacity(16);
        let n = self.port.read_until(b'\n', &mut line)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "device closed the channel",
            ));
        }
        Ok(line)
    }
}
