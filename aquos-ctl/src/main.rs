//! # Aquos Remote Control CLI
//!
//! Issues single commands to a Sharp Aquos television attached over RS-232.
//! Each invocation opens the serial device, performs one operation through
//! the `aquos-client` facade, prints the result, and exits.

use std::error::Error;

use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;

use aquos_client::{AquosTv, ScreenPosition};

#[derive(Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Switch {
    On,
    Off,
}

impl Switch {
    fn is_on(self) -> bool {
        self == Switch::On
    }
}

#[derive(Subcommand)]
enum Operation {
    /// Switch the set on or off, or report the power state
    Power {
        #[arg(value_enum)]
        state: Option<Switch>,
    },
    /// Set the volume (1-99), or report the current level
    Volume { level: Option<u16> },
    /// Mute or unmute the audio, or report the mute state
    Mute {
        #[arg(value_enum)]
        state: Option<Switch>,
    },
    /// Select an AV input (1-8), or report the current input
    Input { number: Option<u16> },
    /// Cycle to the next AV input
    NextInput,
    /// Switch to the built-in TV tuner
    Tuner,
    /// Set the VGA screen geometry, or report the current values when no
    /// arguments are given
    Position {
        horizontal: Option<u16>,
        vertical: Option<u16>,
        clock: Option<u16>,
        phase: Option<u16>,
    },
    /// Set the AV picture mode (0-5)
    AvMode { mode: u16 },
    /// Set the widescreen/view mode (0-7)
    ViewMode { mode: u16 },
    /// Set the sleep timer (0, 30, 60, 90 or 120 minutes), or report it
    Sleep { minutes: Option<u16> },
    /// Toggle closed captioning, or report whether it is enabled
    Captions {
        #[arg(long, help = "Report the current state instead of toggling")]
        query: bool,
    },
    /// Switch surround sound on or off, or report the surround state
    Surround {
        #[arg(value_enum)]
        state: Option<Switch>,
    },
    /// Lock or unlock the power command, or report the lock state
    Lock {
        #[arg(value_enum)]
        state: Option<Switch>,
    },
}

#[derive(Parser)]
#[command(about = "Remote control for Sharp Aquos televisions over RS-232", long_about = None)]
struct Args {
    /// Serial device the television is attached to
    #[arg(short, long, default_value = "/dev/ttyUSB0")]
    device: String,

    #[clap(subcommand)]
    operation: Operation,
}

/// Print the device's answer to a mutating command.
fn report(accepted: bool) {
    if accepted {
        println!("ok");
    } else {
        println!("rejected by device");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::debug!("Opening serial device {}", args.device);
    let mut tv = AquosTv::open(&args.device)?;

    match args.operation {
        Operation::Power { state: Some(state) } => report(tv.set_power(state.is_on())?),
        Operation::Power { state: None } => {
            println!("{}", if tv.power()? { "on" } else { "off" })
        }
        Operation::Volume { level: Some(level) } => report(tv.set_volume(level)?),
        Operation::Volume { level: None } => println!("{}", tv.volume()?),
        Operation::Mute { state: Some(state) } => report(tv.set_mute(state.is_on())?),
        Operation::Mute { state: None } => {
            println!("{}", if tv.muted()? { "muted" } else { "unmuted" })
        }
        Operation::Input {
            number: Some(number),
        } => report(tv.select_input(number)?),
        Operation::Input { number: None } => println!("{}", tv.input()?),
        Operation::NextInput => report(tv.next_input()?),
        Operation::Tuner => report(tv.select_tuner()?),
        Operation::Position {
            horizontal: None,
            vertical: None,
            clock: None,
            phase: None,
        } => {
            let position = tv.screen_position()?;
            println!(
                "horizontal={} vertical={} clock={} phase={}",
                position.horizontal, position.vertical, position.clock, position.phase
            );
        }
        Operation::Position {
            horizontal: Some(horizontal),
            vertical: Some(vertical),
            clock: Some(clock),
            phase: Some(phase),
        } => report(tv.set_screen_position(ScreenPosition {
            horizontal,
            vertical,
            clock,
            phase,
        })?),
        Operation::Position { .. } => {
            return Err("position takes either no values or all four".into());
        }
        Operation::AvMode { mode } => report(tv.set_av_mode(mode)?),
        Operation::ViewMode { mode } => report(tv.set_view_mode(mode)?),
        Operation::Sleep {
            minutes: Some(minutes),
        } => report(tv.set_sleep_timer(minutes)?),
        Operation::Sleep { minutes: None } => println!("{} minutes", tv.sleep_timer()?),
        Operation::Captions { query: true } => {
            println!("{}", if tv.closed_captions()? { "enabled" } else { "disabled" })
        }
        Operation::Captions { query: false } => report(tv.toggle_closed_captions()?),
        Operation::Surround { state: Some(state) } => report(tv.set_surround(state.is_on())?),
        Operation::Surround { state: None } => {
            println!("{}", if tv.surround()? { "on" } else { "off" })
        }
        Operation::Lock { state: Some(state) } => report(tv.lock_power(state.is_on())?),
        Operation::Lock { state: None } => {
            println!("{}", if tv.power_locked()? { "locked" } else { "unlocked" })
        }
    }
    Ok(())
}
