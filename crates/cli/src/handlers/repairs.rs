//! Repair registration.

use std::io::{BufRead, Write};

use domain::{ids, models::NewRepair};
use persistence::repositories::Repositories;

use crate::error::CliError;
use crate::input::Console;

/// Records a repair on an existing room, performed by a certified
/// maintenance company. An uncertified company is reported the same
/// way as a missing one.
pub async fn add_repair<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<(), CliError> {
    let hotel_id: i32 = console.prompt_parse("\tEnter the Hotel ID: ")?;
    let room_no: i32 = console.prompt_parse("\tEnter the Room Number: ")?;
    if repos.rooms.find(hotel_id, room_no).await?.is_none() {
        console.say("\tNo Such Room Exists!")?;
        return Ok(());
    }

    let company_id: i32 = console.prompt_parse("\tEnter the Maintenance Company ID: ")?;
    if repos.companies.find_certified(company_id).await?.is_none() {
        console.say("\tMaintenance Company Does Not Exist!")?;
        return Ok(());
    }

    let id = ids::next_id(repos.repairs.max_id().await?);
    let repair_date = console.prompt_iso_date("\tEnter the Repair Date in YYYY-MM-DD Format: ")?;
    let description = console.prompt("\tEnter a Description of the maintenance required: ")?;
    let repair_type = console.prompt("\tEnter the Repair Type: ")?;

    let repair = NewRepair {
        hotel_id,
        room_no,
        company_id,
        repair_date,
        description,
        repair_type,
    };
    repos.repairs.insert(id, &repair).await?;
    console.say("Successfully Added a Maintenance Request")?;
    Ok(())
}
