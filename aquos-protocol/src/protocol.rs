/// A device function identifier.
///
/// An opcode is exactly 4 ASCII characters. Each opcode family has a fixed
/// parameter digit width (the protocol is positional, not delimited): simple
/// on/off functions carry one digit, volume two, the screen geometry family
/// three. A query fills the same digit positions with `?`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Opcode {
    code: &'static [u8; 4],
    digits: usize,
}

impl Opcode {
    /// Power the set on or off (`1`/`0`).
    pub const POWER: Opcode = Opcode::new(b"POWR", 1);
    /// Enable or disable the power command (`1` locked, `0` unlocked).
    pub const POWER_LOCK: Opcode = Opcode::new(b"RSPW", 1);
    /// Audio volume, 1 (low) to 99 (high).
    pub const VOLUME: Opcode = Opcode::new(b"VOLM", 2);
    /// Audio mute (`1` muted, `2` unmuted).
    pub const MUTE: Opcode = Opcode::new(b"MUTE", 1);
    /// AV input selection, inputs 1 through 8.
    pub const INPUT: Opcode = Opcode::new(b"IAVD", 1);
    /// Cycle to the next AV input (wraps from 8 back to 1).
    pub const INPUT_TOGGLE: Opcode = Opcode::new(b"ITGD", 1);
    /// Switch to the built-in TV tuner (input 0).
    pub const INPUT_TUNER: Opcode = Opcode::new(b"ITVD", 1);
    /// VGA horizontal position, 0 to 100.
    pub const H_POSITION: Opcode = Opcode::new(b"HPOS", 3);
    /// VGA vertical position, 0 to 100.
    pub const V_POSITION: Opcode = Opcode::new(b"VPOS", 3);
    /// VGA clock frequency, 0 to 180.
    pub const CLOCK: Opcode = Opcode::new(b"CLCK", 3);
    /// VGA phase offset, 0 to 40.
    pub const PHASE: Opcode = Opcode::new(b"PHSE", 3);
    /// AV picture mode, 0 to 5.
    pub const AV_MODE: Opcode = Opcode::new(b"AVMD", 1);
    /// Widescreen/view mode, 0 to 7.
    pub const VIEW_MODE: Opcode = Opcode::new(b"WIDE", 1);
    /// Sleep timer level, 0 (off) to 4 (120 minutes).
    pub const SLEEP_TIMER: Opcode = Opcode::new(b"OFTM", 1);
    /// Closed captioning toggle.
    pub const CLOSED_CAPTION: Opcode = Opcode::new(b"CLCP", 1);
    /// Surround sound (`2` on, `1` off).
    pub const SURROUND: Opcode = Opcode::new(b"ACSU", 1);

    const fn new(code: &'static [u8; 4], digits: usize) -> Opcode {
        Opcode { code, digits }
    }

    /// The 4-byte ASCII code as written on the wire.
    pub fn code(&self) -> &'static [u8; 4] {
        self.code
    }

    /// The digit width of this opcode's parameter field.
    pub fn digits(&self) -> usize {
        self.digits
    }
}

#[test]
fn opcode_digit_widths() {
    assert_eq!(Opcode::POWER.digits(), 1);
    assert_eq!(Opcode::VOLUME.digits(), 2);
    assert_eq!(Opcode::H_POSITION.digits(), 3);
}

/// The parameter of a [`Command`].
///
/// Commands and queries share the opcode space; filling the parameter digit
/// positions with `?` instead of a value asks the device to report its
/// current state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Param {
    /// Set a new value, encoded as a zero-padded decimal of the opcode's
    /// digit width. The value must fit in that width.
    Set(u16),
    /// Ask for the current value.
    Query,
}

/// One complete command, transferred from the controller to the television.
///
/// For each command, the controller is expected to write the frame and wait
/// for the single reply line before issuing the next command. The protocol
/// has no request tagging; a second in-flight command would desynchronize
/// request/response pairing.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Command {
    opcode: Opcode,
    param: Param,
}

impl Command {
    /// A mutating command setting `value`.
    pub fn set(opcode: Opcode, value: u16) -> Command {
        Command {
            opcode,
            param: Param::Set(value),
        }
    }

    /// A query for the opcode's current value.
    pub fn query(opcode: Opcode) -> Command {
        Command {
            opcode,
            param: Param::Query,
        }
    }

    /// The command's opcode.
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// The command's parameter.
    pub fn param(&self) -> Param {
        self.param
    }
}

/// One reply line received from the television, terminator stripped.
///
/// A reply is interpreted in exactly one of two ways: as an acknowledgement
/// of a mutating command ([`Reply::is_ack`]) or as a value answering a query
/// ([`Reply::as_u16`], [`Reply::state`]).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reply {
    line: Vec<u8>,
}

impl Reply {
    pub(crate) fn new(line: Vec<u8>) -> Reply {
        Reply { line }
    }

    /// The stripped reply payload.
    pub fn payload(&self) -> &[u8] {
        &self.line
    }
}
