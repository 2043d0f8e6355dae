//! Session orchestrator: sequences interactive rounds against a [`Platform`].
//!
//! One round is role selection, registration or login, then either the rider
//! flow (destination, match, request, accept/reject) or the driver flow
//! (offer, pending requests, accept/reject). All I/O goes through
//! [`SessionIo`]; the platform itself never prompts.

mod driver;
pub mod io;
mod rider;

use std::io as std_io;

use tracing::debug;

use crate::account::Role;
use crate::error::PlatformError;
use crate::platform::Platform;

pub use io::{LineIo, SessionIo};

const YES: &str = "yes";

/// Why a round stopped before running to completion.
#[derive(Debug)]
enum RoundError {
    Domain(PlatformError),
    Io(std_io::Error),
    EndOfInput,
}

impl From<PlatformError> for RoundError {
    fn from(err: PlatformError) -> Self {
        Self::Domain(err)
    }
}

impl From<std_io::Error> for RoundError {
    fn from(err: std_io::Error) -> Self {
        Self::Io(err)
    }
}

type RoundResult = Result<(), RoundError>;

/// How far a round got. A round counts once its role answer has been read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Completed,
    InputEndedBeforeRole,
    InputEndedMidRound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub rounds: usize,
    /// False when input ran out before the user answered the exit prompt with `yes`.
    pub exited_by_user: bool,
}

pub struct Session<'p, IO> {
    platform: &'p mut Platform,
    io: IO,
}

impl<'p, IO: SessionIo> Session<'p, IO> {
    pub fn new(platform: &'p mut Platform, io: IO) -> Self {
        Self { platform, io }
    }

    pub fn into_io(self) -> IO {
        self.io
    }

    /// Run rounds until the user asks to exit or input ends.
    pub fn run(&mut self) -> std_io::Result<SessionOutcome> {
        let mut rounds = 0;
        loop {
            let end = self.finish_round()?;
            if end != RoundEnd::InputEndedBeforeRole {
                rounds += 1;
            }
            if end != RoundEnd::Completed {
                return Ok(SessionOutcome {
                    rounds,
                    exited_by_user: false,
                });
            }

            match self.ask("Do you want to exit? Enter 'yes' to exit, 'no' to continue: ") {
                Ok(answer) if normalize(&answer) == YES => break,
                Ok(_) => continue,
                Err(RoundError::Io(err)) => return Err(err),
                Err(_) => {
                    return Ok(SessionOutcome {
                        rounds,
                        exited_by_user: false,
                    })
                }
            }
        }

        self.io.write_line("Exiting the program. Thank you!")?;
        Ok(SessionOutcome {
            rounds,
            exited_by_user: true,
        })
    }

    /// Play one round and report any domain error.
    fn finish_round(&mut self) -> std_io::Result<RoundEnd> {
        let (role, result) = match self.play_round() {
            Ok(outcome) => outcome,
            Err(RoundError::Io(err)) => return Err(err),
            Err(_) => return Ok(RoundEnd::InputEndedBeforeRole),
        };

        match result {
            Ok(()) => Ok(RoundEnd::Completed),
            Err(RoundError::Domain(err)) => {
                debug!(error = %err, "round ended early");
                self.io.write_line(&user_message(role, &err))?;
                Ok(RoundEnd::Completed)
            }
            Err(RoundError::Io(err)) => Err(err),
            Err(RoundError::EndOfInput) => Ok(RoundEnd::InputEndedMidRound),
        }
    }

    /// Select a role and dispatch; the outer error covers role selection itself.
    fn play_round(&mut self) -> Result<(Option<Role>, RoundResult), RoundError> {
        let answer =
            self.ask("Are you a Rider or a Driver? Enter 'r' for Rider, 'd' for Driver: ")?;
        let outcome = match normalize(&answer).as_str() {
            "r" => (Some(Role::Rider), self.rider_round()),
            "d" => (Some(Role::Driver), self.driver_round()),
            _ => {
                self.io.write_line("Invalid input. Exiting.")?;
                (None, Ok(()))
            }
        };
        Ok(outcome)
    }

    /// Registration (if requested) followed by login. Returns the logged-in username.
    fn sign_in(&mut self, role: Role) -> Result<String, RoundError> {
        let banner = match role {
            Role::Rider => "-------RIDER LOGIN/REGISTRATION-------",
            Role::Driver => "--------DRIVER LOGIN/REGISTRATION-------",
        };
        self.io.write_line(banner)?;

        let new_user = self.ask(
            "Are you a new user? Enter 'yes' for new registration, 'no' for login: ",
        )?;
        if normalize(&new_user) == YES {
            self.register(role)?;
        }

        let username = self.ask("Enter username for login: ")?;
        let password = self.ask("Enter password for login: ")?;
        self.platform.login(role, &username, &password)?;
        self.io
            .write_line(&format!("{} login successful!\n", title(role)))?;
        Ok(username)
    }

    fn register(&mut self, role: Role) -> RoundResult {
        let mut username = self.ask("Enter your username: ")?;
        while self.platform.exists(role, &username) {
            self.io
                .write_line("Username already taken. Choose a different username.")?;
            username = self.ask("Enter your username: ")?;
        }

        let password = self.ask("Enter password: ")?;
        self.platform.register(role, &username, &password)?;
        self.io
            .write_line(&format!("{} registration successful!\n", title(role)))?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, RoundError> {
        self.io.write(prompt)?;
        self.io.read_line()?.ok_or(RoundError::EndOfInput)
    }

    /// Ask for a zero-based index into a list of `len` entries.
    fn ask_index(&mut self, prompt: &str, len: usize) -> Result<usize, RoundError> {
        let answer = self.ask(prompt)?;
        parse_index(&answer, len).map_err(RoundError::from)
    }

    fn ask_yes(&mut self, prompt: &str) -> Result<bool, RoundError> {
        Ok(normalize(&self.ask(prompt)?) == YES)
    }
}

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

fn title(role: Role) -> &'static str {
    match role {
        Role::Rider => "Rider",
        Role::Driver => "Driver",
    }
}

fn parse_index(answer: &str, len: usize) -> Result<usize, PlatformError> {
    answer
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&index| index < len)
        .ok_or_else(|| PlatformError::InvalidIndex {
            index: answer.trim().to_string(),
            len,
        })
}

/// User-facing text for a domain error that ends a round.
fn user_message(role: Option<Role>, err: &PlatformError) -> String {
    match (role, err) {
        (_, PlatformError::InvalidCredentials(role)) => {
            format!("Invalid {role} credentials. Exiting.")
        }
        (_, PlatformError::NoMatchingDrivers { destination }) => {
            format!("Sorry, no available drivers for {destination}. Try again later.")
        }
        (Some(Role::Driver), PlatformError::InvalidIndex { .. }) => {
            "Invalid ride request index. Exiting.".to_string()
        }
        (_, PlatformError::InvalidIndex { .. }) => "Invalid driver index. Exiting.".to_string(),
        (_, PlatformError::NoMatchingOffer { .. }) => {
            "Invalid driver selection. Exiting.".to_string()
        }
        (_, PlatformError::NoSuchPendingRequest { .. }) => {
            "Error responding to ride request: no such pending request. Exiting.".to_string()
        }
        (_, other) => format!("{other}. Exiting."),
    }
}
