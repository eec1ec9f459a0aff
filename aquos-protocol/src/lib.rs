//! # Aquos Protocol Library
//!
//! This crate implements the text-based RS-232 control protocol spoken by
//! Sharp Aquos LCD televisions (LC-32D59U, LC-42D59U and related models),
//! enabling command/response communication with a device over a serial link.
//!
//! ## Overview
//!
//! The Aquos service protocol is a fixed-width, positional ASCII protocol.
//! Every exchange is a single round trip: the controller writes one command
//! frame, the television answers with one reply line. This library implements
//! the wire format, allowing you to:
//!
//! - Build command frames for every documented device function
//! - Express both mutations and queries through the same opcode space
//! - Parse acknowledgement and value replies into typed results
//!
//! ## Frame Format
//!
//! A command frame is always 10 bytes:
//!
//! - **Opcode**: exactly 4 ASCII characters (e.g. `POWR`, `VOLM`)
//! - **Parameter**: zero-padded decimal digits for a set, `?` fill for a
//!   query, right-padded with spaces to a 4-character field
//! - **Terminator**: `\r\n`
//!
//! Replies are a single ASCII line terminated by `\r\n`: the literal token
//! `OK` acknowledging a mutation (anything else counts as failure), or the
//! raw requested value for a query.
//!
//! ## Basic Usage
//!
//! ### Building Command Frames
//!
//! ```
//! use aquos_protocol::{Command, Opcode};
//!
//! // Set the volume to 45
//! let cmd = Command::set(Opcode::VOLUME, 45);
//! let mut frame = Vec::new();
//! cmd.write_to(&mut frame).expect("Writing to vector shouldn't fail");
//! assert_eq!(frame, b"VOLM45  \r\n");
//!
//! // Ask for the current volume
//! let query = Command::query(Opcode::VOLUME);
//! let mut frame = Vec::new();
//! query.write_to(&mut frame).expect("Writing to vector shouldn't fail");
//! assert_eq!(frame, b"VOLM??  \r\n");
//! ```
//!
//! ### Interpreting Replies
//!
//! ```
//! use aquos_protocol::Reply;
//!
//! // Acknowledgement of a mutating command
//! let reply = Reply::from_line(b"OK\r\n");
//! assert!(reply.is_ack());
//!
//! // Value reply to a query
//! let reply = Reply::from_line(b"45\r\n");
//! assert_eq!(reply.as_u16().expect("Reply should be numeric"), 45);
//! ```
//!
//! ## Error Handling
//!
//! Reply interpretation errors are reported through [`error::ReplyError`].
//! A device-reported command failure is not an error: it decodes to a plain
//! `false` acknowledgement, mirroring the device's own success reporting.
//!
//! ## Thread Safety
//!
//! The types in this library are thread-safe and can be safely shared across
//! threads. However, the wire protocol carries no request tagging, so I/O on
//! one device channel must be serialized externally; see the `aquos-client`
//! crate for a session type that enforces this.

pub mod protocol;
pub use protocol::*;
pub mod codec;
pub mod error;
