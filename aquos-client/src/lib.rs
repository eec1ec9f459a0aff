//! # Aquos Client
//!
//! A Rust client library for controlling Sharp Aquos LCD televisions
//! (LC-32D59U, LC-42D59U and related models) over their RS-232 serial
//! interface.
//!
//! ## Overview
//!
//! This crate provides a high-level session interface to a television,
//! exposing one method per device capability: power, volume, mute, input
//! selection, VGA screen geometry, AV and widescreen modes, the sleep timer,
//! closed captioning, surround sound, and the power-command lock. It handles
//! argument validation, frame encoding, and reply interpretation; for the
//! wire format itself see the [`aquos_protocol`] crate.
//!
//! ## Basic Usage
//!
//! ### Connecting to a Television
//!
//! ```ignore
//! use aquos_client::AquosTv;
//!
//! let mut tv = AquosTv::open("/dev/ttyUSB0")?;
//!
//! // Turn the set on and bring the volume up
//! tv.set_power(true)?;
//! tv.set_volume(45)?;
//! println!("Volume is now {}", tv.volume()?);
//! ```
//!
//! ### Adjusting the VGA Picture
//!
//! ```ignore
//! use aquos_client::ScreenPosition;
//!
//! let ok = tv.set_screen_position(ScreenPosition {
//!     horizontal: 50,
//!     vertical: 50,
//!     clock: 90,
//!     phase: 20,
//! })?;
//! ```
//!
//! ## Session Discipline
//!
//! The wire protocol carries no request tagging: exactly one command may be
//! in flight per device at any time. [`AquosTv`] enforces this by taking
//! `&mut self` on every operation, so the borrow checker rules out
//! concurrent calls on one session. After a read timeout the pairing of
//! requests to replies can no longer be trusted; the session refuses all
//! further operations with [`Error::Desynchronized`] and must be reopened.
//!
//! ## Related Crates
//!
//! - [`aquos_protocol`] - Frame encoding and reply parsing

pub mod transport;
pub use transport::{SerialTransport, Transport};

use std::error;
use std::fmt::Display;
use std::io::{self, ErrorKind};

use aquos_protocol::error::ReplyError;
use aquos_protocol::{Command, Opcode, Reply};

/// Errors surfaced by session operations.
#[derive(Debug)]
pub enum Error {
    /// The caller passed a value outside the documented range. Nothing was
    /// written to the device.
    InvalidArgument(String),
    /// The serial channel failed or timed out.
    Transport(io::Error),
    /// A reply arrived but could not be interpreted as the expected type.
    Protocol(ReplyError),
    /// An earlier read timed out, so request/response pairing is no longer
    /// trustworthy. The session must be reopened.
    Desynchronized,
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::Transport(value)
    }
}

impl From<ReplyError> for Error {
    fn from(value: ReplyError) -> Self {
        Error::Protocol(value)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidArgument(detail) => write!(f, "{}", detail),
            Error::Transport(err) => write!(f, "Transport failure: {}", err),
            Error::Protocol(err) => write!(f, "Unexpected reply: {}", err),
            Error::Desynchronized => {
                write!(f, "Session desynchronized by an earlier timeout; reopen the device")
            }
        }
    }
}

impl error::Error for Error {}

/// VGA screen geometry settings.
///
/// Adjusting these re-centers the picture on the PC input; clock and phase
/// tune the sampling of the analog signal.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ScreenPosition {
    /// Horizontal offset, 0 to 100.
    pub horizontal: u16,
    /// Vertical offset, 0 to 100.
    pub vertical: u16,
    /// Clock frequency, 0 to 180.
    pub clock: u16,
    /// Phase offset, 0 to 40.
    pub phase: u16,
}

/// Sleep timer levels accepted by the device, in minutes.
const SLEEP_MINUTES: [u16; 5] = [0, 30, 60, 90, 120];

fn check_range(what: &str, value: u16, min: u16, max: u16) -> Result<(), Error> {
    if value < min || value > max {
        return Err(Error::InvalidArgument(format!(
            "{} must be between {} and {}, got {}",
            what, min, max, value
        )));
    }
    Ok(())
}

/// A live session with one television.
///
/// The session owns its transport for its entire lifetime and issues all
/// commands sequentially; dropping it closes the device.
pub struct AquosTv {
    transport: Box<dyn Transport>,
    desynchronized: bool,
}

impl AquosTv {
    /// Open a session on the serial device at `path`.
    pub fn open(path: &str) -> Result<AquosTv, Error> {
        let transport = SerialTransport::open(path).map_err(io::Error::from)?;
        Ok(AquosTv::with_transport(Box::new(transport)))
    }

    /// Build a session over an already-open transport.
    pub fn with_transport(transport: Box<dyn Transport>) -> AquosTv {
        AquosTv {
            transport,
            desynchronized: false,
        }
    }

    /// Power the set on or off.
    pub fn set_power(&mut self, on: bool) -> Result<bool, Error> {
        self.send_command(Command::set(Opcode::POWER, on as u16))
    }

    /// Whether the set is currently powered on.
    pub fn power(&mut self) -> Result<bool, Error> {
        self.query_state(Opcode::POWER, '1')
    }

    /// Enable or disable the power command.
    ///
    /// While locked, the set ignores [`set_power`](AquosTv::set_power).
    pub fn lock_power(&mut self, locked: bool) -> Result<bool, Error> {
        self.send_command(Command::set(Opcode::POWER_LOCK, locked as u16))
    }

    /// Whether the power command is currently locked out.
    pub fn power_locked(&mut self) -> Result<bool, Error> {
        self.query_state(Opcode::POWER_LOCK, '1')
    }

    /// Set the volume, from 1 (low) to 99 (high).
    pub fn set_volume(&mut self, level: u16) -> Result<bool, Error> {
        check_range("Volume", level, 1, 99)?;
        self.send_command(Command::set(Opcode::VOLUME, level))
    }

    /// The current volume level.
    pub fn volume(&mut self) -> Result<u16, Error> {
        self.query_value(Opcode::VOLUME)
    }

    /// Mute or unmute the audio.
    pub fn set_mute(&mut self, muted: bool) -> Result<bool, Error> {
        self.send_command(Command::set(Opcode::MUTE, if muted { 1 } else { 2 }))
    }

    /// Whether the audio is currently muted.
    pub fn muted(&mut self) -> Result<bool, Error> {
        self.query_state(Opcode::MUTE, '1')
    }

    /// Select an AV input, 1 through 8.
    ///
    /// On the LC-32D59U the inputs are HDMI 1-4, component 1-2, composite,
    /// and the VGA PC input. Input 0 is the TV tuner, reached through
    /// [`select_tuner`](AquosTv::select_tuner).
    pub fn select_input(&mut self, input: u16) -> Result<bool, Error> {
        check_range("Input", input, 1, 8)?;
        self.send_command(Command::set(Opcode::INPUT, input))
    }

    /// The currently selected input number.
    pub fn input(&mut self) -> Result<u16, Error> {
        self.query_value(Opcode::INPUT)
    }

    /// Cycle to the next AV input, wrapping from 8 back to 1.
    pub fn next_input(&mut self) -> Result<bool, Error> {
        self.send_command(Command::set(Opcode::INPUT_TOGGLE, 1))
    }

    /// Switch to the built-in TV tuner.
    pub fn select_tuner(&mut self) -> Result<bool, Error> {
        self.send_command(Command::set(Opcode::INPUT_TUNER, 0))
    }

    /// Set the VGA screen position, clock, and phase.
    ///
    /// All four values are validated before anything is written. The device
    /// applies them through four independent commands (horizontal, vertical,
    /// clock, phase, in that order) and cannot roll back: if one is
    /// rejected, the remaining commands are still issued and the aggregate
    /// result is `false`.
    pub fn set_screen_position(&mut self, position: ScreenPosition) -> Result<bool, Error> {
        check_range("Horizontal offset", position.horizontal, 0, 100)?;
        check_range("Vertical offset", position.vertical, 0, 100)?;
        check_range("Clock frequency", position.clock, 0, 180)?;
        check_range("Phase offset", position.phase, 0, 40)?;
        let mut ok = self.send_command(Command::set(Opcode::H_POSITION, position.horizontal))?;
        ok &= self.send_command(Command::set(Opcode::V_POSITION, position.vertical))?;
        ok &= self.send_command(Command::set(Opcode::CLOCK, position.clock))?;
        ok &= self.send_command(Command::set(Opcode::PHASE, position.phase))?;
        Ok(ok)
    }

    /// The current VGA screen geometry.
    pub fn screen_position(&mut self) -> Result<ScreenPosition, Error> {
        Ok(ScreenPosition {
            horizontal: self.query_value(Opcode::H_POSITION)?,
            vertical: self.query_value(Opcode::V_POSITION)?,
            clock: self.query_value(Opcode::CLOCK)?,
            phase: self.query_value(Opcode::PHASE)?,
        })
    }

    /// Set the AV picture mode, 0 through 5.
    pub fn set_av_mode(&mut self, mode: u16) -> Result<bool, Error> {
        check_range("AV mode", mode, 0, 5)?;
        self.send_command(Command::set(Opcode::AV_MODE, mode))
    }

    /// Set the widescreen/view mode, 0 through 7.
    pub fn set_view_mode(&mut self, mode: u16) -> Result<bool, Error> {
        check_range("View mode", mode, 0, 7)?;
        self.send_command(Command::set(Opcode::VIEW_MODE, mode))
    }

    /// Set the sleep timer. Accepted values are 0 (off), 30, 60, 90, and
    /// 120 minutes; the device encodes them as levels 0 through 4.
    pub fn set_sleep_timer(&mut self, minutes: u16) -> Result<bool, Error> {
        let level = SLEEP_MINUTES
            .iter()
            .position(|m| *m == minutes)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "Sleep timer must be one of {:?} minutes, got {}",
                    SLEEP_MINUTES, minutes
                ))
            })?;
        self.send_command(Command::set(Opcode::SLEEP_TIMER, level as u16))
    }

    /// The remaining sleep timer setting in minutes, 0 when off.
    ///
    /// The device reports a level, 0 through 4; anything outside that range
    /// is an uninterpretable reply.
    pub fn sleep_timer(&mut self) -> Result<u16, Error> {
        let level = self.query_value(Opcode::SLEEP_TIMER)?;
        let minutes = SLEEP_MINUTES.get(level as usize).ok_or_else(|| {
            Error::Protocol(ReplyError::UnexpectedValue(format!(
                "Sleep timer level {} is outside the device's 0-4 range",
                level
            )))
        })?;
        Ok(*minutes)
    }

    /// Toggle closed captioning.
    pub fn toggle_closed_captions(&mut self) -> Result<bool, Error> {
        self.send_command(Command::set(Opcode::CLOSED_CAPTION, 0))
    }

    /// Whether closed captioning is currently enabled.
    pub fn closed_captions(&mut self) -> Result<bool, Error> {
        self.query_state(Opcode::CLOSED_CAPTION, '1')
    }

    /// Switch surround sound on or off.
    pub fn set_surround(&mut self, on: bool) -> Result<bool, Error> {
        self.send_command(Command::set(Opcode::SURROUND, if on { 2 } else { 1 }))
    }

    /// Whether surround sound is currently on.
    pub fn surround(&mut self) -> Result<bool, Error> {
        self.query_state(Opcode::SURROUND, '2')
    }

    /// Issue one command and read its reply line. Every operation funnels
    /// through here, so a session performs exactly one write and one read
    /// per command.
    fn execute(&mut self, command: Command) -> Result<Reply, Error> {
        if self.desynchronized {
            return Err(Error::Desynchronized);
        }
        let mut frame = Vec::with_capacity(Command::ENCODED_LEN);
        command.write_to(&mut frame)?;
        log::trace!("-> {}", String::from_utf8_lossy(frame.trim_ascii_end()));
        self.transport.send(&frame).map_err(|e| self.fail(e))?;
        let line = self.transport.read_line().map_err(|e| self.fail(e))?;
        let reply = Reply::from_line(&line);
        log::trace!("<- {}", String::from_utf8_lossy(reply.payload()));
        Ok(reply)
    }

    /// A timed-out read leaves the device free to emit a stale reply for
    /// the abandoned command, so the session is poisoned rather than risk
    /// pairing that reply with the next request.
    fn fail(&mut self, err: io::Error) -> Error {
        if err.kind() == ErrorKind::TimedOut {
            log::warn!("Read timed out; closing session as desynchronized");
            self.desynchronized = true;
        }
        Error::Transport(err)
    }

    fn send_command(&mut self, command: Command) -> Result<bool, Error> {
        Ok(self.execute(command)?.is_ack())
    }

    fn query_value(&mut self, opcode: Opcode) -> Result<u16, Error> {
        Ok(self.execute(Command::query(opcode))?.as_u16()?)
    }

    fn query_state(&mut self, opcode: Opcode, on: char) -> Result<bool, Error> {
        Ok(self.execute(Command::query(opcode))?.state() == Some(on))
    }
}
