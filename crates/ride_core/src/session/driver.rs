use crate::account::Role;

use super::{RoundResult, Session, SessionIo};

impl<IO: SessionIo> Session<'_, IO> {
    /// Driver flow: add an offer, then respond to one pending rider request.
    pub(super) fn driver_round(&mut self) -> RoundResult {
        let driver = self.sign_in(Role::Driver)?;

        let destination = self.ask("Enter your offered destination: ")?;
        self.platform.offer_ride(&driver, &destination)?;

        // Cloned so the listing stays fixed while the platform is mutated below.
        let requests = self.platform.pending_for(&driver).to_vec();
        if requests.is_empty() {
            self.io.write_line("No ride requests at the moment.")?;
            return Ok(());
        }

        self.io.write_line("Ride Requests:")?;
        for (index, request) in requests.iter().enumerate() {
            self.io.write_line(&format!(
                "{index}: {} -> {}",
                request.rider_username, request.destination
            ))?;
        }

        let index = self.ask_index(
            "Enter the index of the rider request you want to respond to: ",
            requests.len(),
        )?;
        let rider = &requests[index].rider_username;

        if self.ask_yes("Do you want to accept the ride request? (yes/no): ")? {
            self.platform.accept(&driver, rider)?;
            self.io.write_line("Ride request accepted. Enjoy the ride!")?;
        } else {
            self.platform.reject(&driver, rider)?;
            self.io.write_line("Ride request rejected.")?;
        }
        Ok(())
    }
}
