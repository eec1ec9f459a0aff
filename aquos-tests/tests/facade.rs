//! End-to-end tests of the session facade against a scripted transport.

use aquos_client::{AquosTv, Error, ScreenPosition};
use aquos_protocol::Command;
use aquos_tests::{Reaction, ScriptedTransport};

fn session(
    reactions: impl IntoIterator<Item = Reaction>,
) -> (
    AquosTv,
    std::rc::Rc<std::cell::RefCell<aquos_tests::FrameLog>>,
) {
    let (transport, log) = ScriptedTransport::new(reactions);
    (AquosTv::with_transport(Box::new(transport)), log)
}

#[test]
fn set_volume_encodes_zero_padded() {
    let (mut tv, log) = session([Reaction::Reply(b"OK\r\n")]);
    assert!(tv.set_volume(5).unwrap());
    assert_eq!(log.borrow().frames, vec![b"VOLM05  \r\n".to_vec()]);
}

#[test]
fn volume_out_of_range_writes_nothing() {
    let (mut tv, log) = session([]);
    for level in [0, 100] {
        match tv.set_volume(level) {
            Err(Error::InvalidArgument(_)) => {}
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }
    assert!(log.borrow().frames.is_empty());
}

#[test]
fn input_selection_boundaries() {
    let (mut tv, log) = session([Reaction::Reply(b"OK\r\n"), Reaction::Reply(b"OK\r\n")]);
    assert!(tv.select_input(1).unwrap());
    assert!(tv.select_input(8).unwrap());
    assert_eq!(
        log.borrow().frames,
        vec![b"IAVD1   \r\n".to_vec(), b"IAVD8   \r\n".to_vec()]
    );

    let (mut tv, log) = session([]);
    for input in [0, 9] {
        assert!(matches!(
            tv.select_input(input),
            Err(Error::InvalidArgument(_))
        ));
    }
    assert!(log.borrow().frames.is_empty());
}

#[test]
fn screen_position_sends_four_frames_in_order() {
    let (mut tv, log) = session([
        Reaction::Reply(b"OK\r\n"),
        Reaction::Reply(b"OK\r\n"),
        Reaction::Reply(b"OK\r\n"),
        Reaction::Reply(b"OK\r\n"),
    ]);
    let ok = tv
        .set_screen_position(ScreenPosition {
            horizontal: 5,
            vertical: 10,
            clock: 90,
            phase: 20,
        })
        .unwrap();
    assert!(ok);
    assert_eq!(
        log.borrow().frames,
        vec![
            b"HPOS005 \r\n".to_vec(),
            b"VPOS010 \r\n".to_vec(),
            b"CLCK090 \r\n".to_vec(),
            b"PHSE020 \r\n".to_vec(),
        ]
    );
}

#[test]
fn screen_position_aggregates_sub_results() {
    // A rejected sub-command does not stop the sequence; the aggregate
    // result reports the failure.
    let (mut tv, log) = session([
        Reaction::Reply(b"OK\r\n"),
        Reaction::Reply(b"ERR\r\n"),
        Reaction::Reply(b"OK\r\n"),
        Reaction::Reply(b"OK\r\n"),
    ]);
    let ok = tv.set_screen_position(ScreenPosition::default()).unwrap();
    assert!(!ok);
    assert_eq!(log.borrow().frames.len(), 4);
}

#[test]
fn screen_position_validates_before_any_write() {
    let (mut tv, log) = session([]);
    let result = tv.set_screen_position(ScreenPosition {
        horizontal: 5,
        vertical: 10,
        clock: 90,
        phase: 41,
    });
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
    assert!(log.borrow().frames.is_empty());
}

#[test]
fn volume_query_roundtrip() {
    let (mut tv, log) = session([Reaction::Reply(b"45\r\n")]);
    assert_eq!(tv.volume().unwrap(), 45);
    assert_eq!(log.borrow().frames, vec![b"VOLM??  \r\n".to_vec()]);
}

#[test]
fn screen_position_query() {
    let (mut tv, log) = session([
        Reaction::Reply(b"50\r\n"),
        Reaction::Reply(b"60\r\n"),
        Reaction::Reply(b"120\r\n"),
        Reaction::Reply(b"30\r\n"),
    ]);
    let position = tv.screen_position().unwrap();
    assert_eq!(
        position,
        ScreenPosition {
            horizontal: 50,
            vertical: 60,
            clock: 120,
            phase: 30,
        }
    );
    assert_eq!(log.borrow().frames[0], b"HPOS??? \r\n".to_vec());
}

#[test]
fn sleep_timer_maps_minutes_to_levels() {
    let (mut tv, log) = session([Reaction::Reply(b"OK\r\n")]);
    assert!(tv.set_sleep_timer(90).unwrap());
    assert_eq!(log.borrow().frames, vec![b"OFTM3   \r\n".to_vec()]);

    let (mut tv, _log) = session([Reaction::Reply(b"2\r\n")]);
    assert_eq!(tv.sleep_timer().unwrap(), 60);
}

#[test]
fn sleep_timer_rejects_an_implausible_level() {
    // A corrupt reply must surface as a protocol error, not wrap into a
    // bogus minute count.
    let (mut tv, _log) = session([Reaction::Reply(b"3000\r\n")]);
    assert!(matches!(tv.sleep_timer(), Err(Error::Protocol(_))));

    let (mut tv, _log) = session([Reaction::Reply(b"5\r\n")]);
    assert!(matches!(tv.sleep_timer(), Err(Error::Protocol(_))));
}

#[test]
fn sleep_timer_rejects_unsupported_durations() {
    let (mut tv, log) = session([]);
    assert!(matches!(
        tv.set_sleep_timer(45),
        Err(Error::InvalidArgument(_))
    ));
    assert!(log.borrow().frames.is_empty());
}

#[test]
fn device_failure_token_is_a_result_not_an_error() {
    let (mut tv, _log) = session([Reaction::Reply(b"ERR\r\n")]);
    assert!(!tv.set_power(true).unwrap());
}

#[test]
fn non_numeric_value_reply_is_a_protocol_error() {
    let (mut tv, _log) = session([Reaction::Reply(b"OK\r\n")]);
    assert!(matches!(tv.volume(), Err(Error::Protocol(_))));
}

#[test]
fn mute_uses_distinct_on_and_off_parameters() {
    let (mut tv, log) = session([Reaction::Reply(b"OK\r\n"), Reaction::Reply(b"OK\r\n")]);
    assert!(tv.set_mute(true).unwrap());
    assert!(tv.set_mute(false).unwrap());
    assert_eq!(
        log.borrow().frames,
        vec![b"MUTE1   \r\n".to_vec(), b"MUTE2   \r\n".to_vec()]
    );
}

#[test]
fn surround_is_on_when_device_reports_two() {
    let (mut tv, _log) = session([Reaction::Reply(b"2\r\n")]);
    assert!(tv.surround().unwrap());

    let (mut tv, _log) = session([Reaction::Reply(b"1\r\n")]);
    assert!(!tv.surround().unwrap());
}

#[test]
fn boolean_query_reads_first_character() {
    // Some firmware revisions append stray bytes; only the first character
    // of the stripped reply decides the state.
    let (mut tv, _log) = session([Reaction::Reply(b"1\x07\r\n")]);
    assert!(tv.power().unwrap());
}

#[test]
fn power_lock_uses_a_single_opcode() {
    let (mut tv, log) = session([Reaction::Reply(b"OK\r\n"), Reaction::Reply(b"OK\r\n")]);
    assert!(tv.lock_power(true).unwrap());
    assert!(tv.lock_power(false).unwrap());
    assert_eq!(
        log.borrow().frames,
        vec![b"RSPW1   \r\n".to_vec(), b"RSPW0   \r\n".to_vec()]
    );
}

#[test]
fn timeout_poisons_the_session() {
    let (mut tv, log) = session([Reaction::Timeout]);
    assert!(matches!(tv.power(), Err(Error::Transport(_))));
    // The abandoned command's reply may still arrive; refuse further use.
    assert!(matches!(tv.power(), Err(Error::Desynchronized)));
    assert_eq!(log.borrow().frames.len(), 1);
}

#[test]
fn every_frame_has_the_protocol_width() {
    let (mut tv, log) = session([
        Reaction::Reply(b"OK\r\n"),
        Reaction::Reply(b"OK\r\n"),
        Reaction::Reply(b"OK\r\n"),
        Reaction::Reply(b"OK\r\n"),
    ]);
    tv.set_power(true).unwrap();
    tv.set_volume(99).unwrap();
    tv.set_av_mode(3).unwrap();
    tv.toggle_closed_captions().unwrap();
    for frame in &log.borrow().frames {
        assert_eq!(frame.len(), Command::ENCODED_LEN);
    }
}
