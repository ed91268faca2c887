//! Cleaning-staff room assignment.

use std::io::{BufRead, Write};

use domain::{ids, models::NewAssignment};
use persistence::repositories::Repositories;

use crate::error::CliError;
use crate::input::Console;

/// Assigns a house-cleaning staff member to one of their employer's
/// rooms. The staff lookup requires the matching employer and role in
/// one step.
pub async fn assign_house_cleaning<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<(), CliError> {
    let staff_ssn: i32 = console.prompt_parse("\tEnter the Staff's Social Security Number: ")?;
    let hotel_id: i32 = console.prompt_parse("\tEnter the Hotel ID: ")?;
    let Some(staff) = repos.staff.find_house_cleaner(staff_ssn, hotel_id).await? else {
        console.say("\tStaff Member Does not exist!")?;
        return Ok(());
    };

    let room_no: i32 = console.prompt_parse(&format!(
        "\tEnter the Room Number you wish to assign to {}: ",
        staff.fname
    ))?;
    if repos.rooms.find(hotel_id, room_no).await?.is_none() {
        console.say("\tRoom does not exist in the Hotel!")?;
        return Ok(());
    }

    let id = ids::next_id(repos.assignments.max_id().await?);
    let assignment = NewAssignment {
        staff_ssn,
        hotel_id,
        room_no,
    };
    repos.assignments.insert(id, &assignment).await?;
    console.say(&format!(
        "\tSuccessfully Assigned {} to Room Number {}!",
        staff.fname, room_no
    ))?;
    Ok(())
}
