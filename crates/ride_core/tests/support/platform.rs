use std::io::Cursor;

use ride_core::session::{LineIo, Session, SessionOutcome};
use ride_core::test_helpers::{add_driver, add_rider, scripted_io, test_platform};
use ride_core::Platform;

/// Scenario A setup: driver "alice" offering "Downtown", rider "bob".
pub fn downtown_platform() -> Platform {
    let mut platform = test_platform();
    add_driver(&mut platform, "alice", &["Downtown"]);
    add_rider(&mut platform, "bob");
    platform
}

/// Drivers spread over a few destinations, registered in the listed order.
pub fn city_platform() -> Platform {
    let mut platform = test_platform();
    add_driver(&mut platform, "alice", &["Downtown", "Airport"]);
    add_driver(&mut platform, "dave", &["Harbor"]);
    add_driver(&mut platform, "erin", &["Downtown", "Downtown"]);
    add_driver(&mut platform, "idle", &[]);
    add_rider(&mut platform, "bob");
    add_rider(&mut platform, "dan");
    platform
}

/// Run a scripted session and return its outcome and full transcript.
pub fn run_script(platform: &mut Platform, lines: &[&str]) -> (SessionOutcome, String) {
    let mut session = Session::new(platform, scripted_io(lines));
    let outcome = session.run().expect("scripted io never fails");
    let io: LineIo<Cursor<Vec<u8>>, Vec<u8>> = session.into_io();
    let transcript = String::from_utf8(io.into_writer()).expect("utf-8 transcript");
    (outcome, transcript)
}
