//! Shared test support: an in-memory transport that replays scripted device
//! replies and records every frame the session writes.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use aquos_client::Transport;

/// What the scripted device does in response to the next read.
pub enum Reaction {
    /// Answer with this line (terminator included, as on the wire).
    Reply(&'static [u8]),
    /// Let the read time out.
    Timeout,
}

/// Frames written by the session, in order.
#[derive(Default)]
pub struct FrameLog {
    pub frames: Vec<Vec<u8>>,
}

/// A [`Transport`] backed by a fixed script instead of a serial port.
pub struct ScriptedTransport {
    reactions: VecDeque<Reaction>,
    log: Rc<RefCell<FrameLog>>,
}

impl ScriptedTransport {
    /// Build a transport that reacts to successive reads as scripted, and a
    /// handle to the log of written frames for later inspection.
    pub fn new(
        reactions: impl IntoIterator<Item = Reaction>,
    ) -> (ScriptedTransport, Rc<RefCell<FrameLog>>) {
        let log = Rc::new(RefCell::new(FrameLog::default()));
        let transport = ScriptedTransport {
            reactions: reactions.into_iter().collect(),
            log: Rc::clone(&log),
        };
        (transport, log)
    }
}

impl Transport for ScriptedTransport {
    fn send(&mut self, frame: &[u8]) -> io::Result<()> {
        self.log.borrow_mut().frames.push(frame.to_vec());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Vec<u8>> {
        match self.reactions.pop_front() {
            Some(Reaction::Reply(line)) => Ok(line.to_vec()),
            Some(Reaction::Timeout) => Err(io::Error::new(
                io::ErrorKind::TimedOut,
                "scripted timeout",
            )),
            None => panic!("session issued more reads than the script expects"),
        }
    }
}
