//! The main menu: one state, seventeen transitions, all returning to
//! the same state.

use std::io::{BufRead, Write};

use tracing::{debug, error};

use crate::error::CliError;
use crate::handlers;
use crate::input::Console;
use persistence::repositories::Repositories;

pub const BANNER: &str = "\n\n*******************************************************\n\
                          \x20             Hotel Operations Client\n\
                          *******************************************************\n";

const MENU: &str = "MAIN MENU\n\
                    ---------\n\
                    1. Add new customer\n\
                    2. Add new room\n\
                    3. Add new maintenance company\n\
                    4. Add new repair\n\
                    5. Add new Booking\n\
                    6. Assign house cleaning staff to a room\n\
                    7. Raise a repair request\n\
                    8. Get number of available rooms\n\
                    9. Get number of booked rooms\n\
                    10. Get hotel bookings for a week\n\
                    11. Get top k rooms with highest price for a date range\n\
                    12. Get top k highest booking price for a customer\n\
                    13. Get customer total cost occurred for a given date range\n\
                    14. List the repairs made by maintenance company\n\
                    15. Get top k maintenance companies based on repair count\n\
                    16. Get number of repairs occurred per year for a given hotel room\n\
                    17. < EXIT";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCustomer,
    AddRoom,
    AddMaintenanceCompany,
    AddRepair,
    BookRoom,
    AssignHouseCleaning,
    RepairRequest,
    AvailableRooms,
    BookedRooms,
    WeekBookings,
    TopPricedBookings,
    TopCustomerBookings,
    CustomerStayCost,
    CompanyRepairs,
    TopCompanies,
    RoomRepairsPerYear,
    Exit,
}

impl TryFrom<u32> for MenuChoice {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, u32> {
        let choice = match value {
            1 => Self::AddCustomer,
            2 => Self::AddRoom,
            3 => Self::AddMaintenanceCompany,
            4 => Self::AddRepair,
            5 => Self::BookRoom,
            6 => Self::AssignHouseCleaning,
            7 => Self::RepairRequest,
            8 => Self::AvailableRooms,
            9 => Self::BookedRooms,
            10 => Self::WeekBookings,
            11 => Self::TopPricedBookings,
            12 => Self::TopCustomerBookings,
            13 => Self::CustomerStayCost,
            14 => Self::CompanyRepairs,
            15 => Self::TopCompanies,
            16 => Self::RoomRepairsPerYear,
            17 => Self::Exit,
            other => return Err(other),
        };
        Ok(choice)
    }
}

/// Runs the menu loop until the operator exits.
///
/// Handler failures are reported and the loop continues; only a failure
/// at the menu prompt itself (for example, stdin closing) ends the
/// session.
pub async fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<(), CliError> {
    loop {
        console.say(MENU)?;
        let choice = match MenuChoice::try_from(console.read_choice()?) {
            Ok(choice) => choice,
            Err(other) => {
                debug!(choice = other, "unmapped menu choice");
                console.say("Unrecognized choice!")?;
                continue;
            }
        };

        if choice == MenuChoice::Exit {
            return Ok(());
        }

        debug!(?choice, "dispatching menu choice");
        if let Err(err) = dispatch(choice, console, repos).await {
            error!("menu action failed: {err}");
            console.say(&err.to_string())?;
        }
    }
}

async fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<(), CliError> {
    match choice {
        MenuChoice::AddCustomer => handlers::customers::add_customer(console, repos).await,
        MenuChoice::AddRoom => handlers::rooms::add_room(console, repos).await,
        MenuChoice::AddMaintenanceCompany => {
            handlers::companies::add_maintenance_company(console, repos).await
        }
        MenuChoice::AddRepair => handlers::repairs::add_repair(console, repos).await,
        MenuChoice::BookRoom => handlers::bookings::book_room(console, repos).await,
        MenuChoice::AssignHouseCleaning => {
            handlers::staff::assign_house_cleaning(console, repos).await
        }
        MenuChoice::RepairRequest => handlers::requests::repair_request(console, repos).await,
        MenuChoice::AvailableRooms => {
            handlers::reports::number_of_available_rooms(console, repos).await
        }
        MenuChoice::BookedRooms => handlers::reports::number_of_booked_rooms(console, repos).await,
        MenuChoice::WeekBookings => {
            handlers::reports::list_hotel_room_bookings_for_a_week(console, repos).await
        }
        MenuChoice::TopPricedBookings => {
            handlers::reports::top_k_highest_room_price_for_a_date_range(console, repos).await
        }
        MenuChoice::TopCustomerBookings => {
            handlers::reports::top_k_highest_price_bookings_for_a_customer(console, repos).await
        }
        MenuChoice::CustomerStayCost => {
            handlers::reports::total_cost_for_customer(console, repos).await
        }
        MenuChoice::CompanyRepairs => handlers::reports::list_repairs_made(console, repos).await,
        MenuChoice::TopCompanies => {
            handlers::reports::top_k_maintenance_company(console, repos).await
        }
        MenuChoice::RoomRepairsPerYear => {
            handlers::reports::number_of_repairs_for_each_room_per_year(console, repos).await
        }
        // Exit never reaches dispatch; the loop returns first.
        MenuChoice::Exit => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_number_maps() {
        let choices: Vec<MenuChoice> = (1..=17)
            .map(|n| MenuChoice::try_from(n).unwrap())
            .collect();
        assert_eq!(choices.len(), 17);
        assert_eq!(choices[0], MenuChoice::AddCustomer);
        assert_eq!(choices[16], MenuChoice::Exit);

        // All seventeen entries are distinct.
        for (i, a) in choices.iter().enumerate() {
            for b in &choices[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_out_of_range_numbers_are_rejected() {
        assert_eq!(MenuChoice::try_from(0), Err(0));
        assert_eq!(MenuChoice::try_from(18), Err(18));
        assert_eq!(MenuChoice::try_from(99), Err(99));
    }
}
