/// Read and write implementations for the protocol frames
use std::io::{self, Write};

use crate::{
    error::ReplyError,
    protocol::{Command, Param, Reply},
};

/// Width of the parameter field. Shorter parameters are right-padded with
/// spaces so that every frame has the same length.
pub const PARAM_WIDTH: usize = 4;

/// Canonical line terminator for both commands and replies.
pub const TERMINATOR: &[u8] = b"\r\n";

/// The acknowledgement token a mutating command receives on success.
pub const ACK_TOKEN: &[u8] = b"OK";

impl Command {
    /// Length of every encoded frame: opcode, parameter field, terminator.
    pub const ENCODED_LEN: usize = 4 + PARAM_WIDTH + TERMINATOR.len();

    /// Encode this command into its 10-byte wire frame.
    ///
    /// # Panics
    ///
    /// Panics if a [`Param::Set`] value does not fit the opcode's digit
    /// width. Silently truncating the high digits would put a different
    /// command on the wire, so an oversized value is a caller bug.
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        let digits = self.opcode().digits();
        let mut field = [b' '; PARAM_WIDTH];
        match self.param() {
            Param::Set(value) => {
                assert!(
                    (value as u32) < 10_u32.pow(digits as u32),
                    "parameter does not fit the opcode's digit width"
                );
                let mut rest = value;
                for slot in field[..digits].iter_mut().rev() {
                    *slot = b'0' + (rest % 10) as u8;
                    rest /= 10;
                }
            }
            Param::Query => field[..digits].fill(b'?'),
        }
        writer.write_all(self.opcode().code())?;
        writer.write_all(&field)?;
        writer.write_all(TERMINATOR)
    }
}

impl Reply {
    /// Build a reply from one received line, stripping the terminator and
    /// any trailing control bytes the transport may not have consumed.
    pub fn from_line(line: &[u8]) -> Reply {
        Reply::new(line.trim_ascii_end().to_vec())
    }

    /// Whether this reply acknowledges a mutating command.
    ///
    /// Only the canonical token counts as success; the failure token and any
    /// malformed line decode to `false`, never to an error.
    pub fn is_ack(&self) -> bool {
        self.payload() == ACK_TOKEN
    }

    /// Parse the whole payload as a base-10 integer.
    pub fn as_u16(&self) -> Result<u16, ReplyError> {
        Ok(str::from_utf8(self.payload())?.parse::<u16>()?)
    }

    /// The first character of the payload, used as the state indicator for
    /// on/off style queries. Looking only at the first character tolerates
    /// trailing bytes some firmware revisions append to the reply.
    pub fn state(&self) -> Option<char> {
        self.payload().first().map(|b| *b as char)
    }
}
