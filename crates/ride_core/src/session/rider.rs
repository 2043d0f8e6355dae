use crate::account::Role;
use crate::error::PlatformError;

use super::{RoundResult, Session, SessionIo};

impl<IO: SessionIo> Session<'_, IO> {
    /// Rider flow: pick a destination, choose a matching driver, send the
    /// request and decide on it.
    pub(super) fn rider_round(&mut self) -> RoundResult {
        let rider = self.sign_in(Role::Rider)?;

        let destination = self.ask("Enter your desired destination: ")?;
        let drivers = self.platform.find_drivers(&destination);
        if drivers.is_empty() {
            return Err(PlatformError::NoMatchingDrivers { destination }.into());
        }

        self.io
            .write_line(&format!("Available Drivers for {destination}:"))?;
        for (index, driver) in drivers.iter().enumerate() {
            self.io.write_line(&format!("{index}: {driver}"))?;
        }

        let index = self.ask_index(
            "Enter the index of the driver you want to request: ",
            drivers.len(),
        )?;
        let driver = &drivers[index];

        self.platform.propose(&rider, driver, &destination)?;
        self.io
            .write_line(&format!("Ride request sent to {driver}"))?;

        if self.ask_yes("Do you want to accept the ride request? (yes/no): ")? {
            self.platform.accept(driver, &rider)?;
            self.io
                .write_line("Ride request accepted. Enjoy your ride!")?;
        } else {
            self.platform.reject(driver, &rider)?;
            self.io.write_line("Ride request rejected.")?;
        }
        Ok(())
    }
}
