//! Maintenance company registration.

use std::io::{BufRead, Write};

use domain::{ids, models::NewMaintenanceCompany};
use persistence::repositories::Repositories;

use crate::error::CliError;
use crate::input::Console;

/// Registers a maintenance company, unless one already exists with
/// exactly the same name and address.
pub async fn add_maintenance_company<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<(), CliError> {
    let name = console.prompt("\tEnter the Company Name: ")?;
    let address = console.prompt("\tEnter the Company Address: ")?;
    if repos
        .companies
        .find_by_name_and_address(&name, &address)
        .await?
        .is_some()
    {
        console.say("\tCompany Already Exists in Database")?;
        return Ok(());
    }

    let certified = console.prompt("\tIs the Company Certified (Y/N): ")? == "Y";
    let id = ids::next_id(repos.companies.max_id().await?);

    let company = NewMaintenanceCompany {
        name,
        address,
        certified,
    };
    repos.companies.insert(id, &company).await?;
    console.say("\tSuccessfully Added a Maintenance Company!")?;
    Ok(())
}
