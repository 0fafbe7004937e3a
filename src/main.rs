mod args;
mod config;
mod reader;
mod writer;

use bank::{input::InputCommand, services::LedgerService, Result};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let service = bank::build_ledger_service();

    process_commands(&service)?;

    log::debug!("Process complete. Beginning report...");

    report_to_std_out(&service)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read the commands file and apply each command to the ledger, skipping the ones that fail
fn process_commands(service: &LedgerService) -> Result {
    let input_path = args::parse_input_arg()?;
    log::debug!("Found filepath as input arg: {input_path:?}");

    let mut rdr = reader::build_csv_reader(input_path)?;

    log::debug!("Deserializing reader...");
    for (row, record) in rdr.deserialize::<InputCommand>().enumerate() {
        log::debug!("Parsing record {row} into InputCommand: {record:?}");
        let command = match record {
            Ok(command) => command,
            Err(e) => {
                log::warn!("Skipping row {row}: {e}");
                continue;
            }
        };

        log::debug!("Parsing command into LedgerEvent: {command:?}");
        let event = match command.parse_event() {
            Ok(event) => event,
            Err(e) => {
                log::warn!("Skipping row {row}: {e}");
                continue;
            }
        };

        if let Err(e) = service.process_event(event) {
            log::warn!("Rejected row {row}: {e}");
        }
    }

    Ok(())
}

/// Build report from the ledger, and write report to stdout
fn report_to_std_out(service: &LedgerService) -> Result {
    let report = service.build_report();
    log::debug!("Successfully built reports for {} accounts", report.len());

    let mut wtr = writer::build_csv_writer();

    log::debug!("Serializing reports...");
    for account_report in report.iter() {
        log::debug!("Serializing report: {account_report:?}");
        wtr.serialize(account_report)?;
    }

    let output = writer::write_to_string(wtr)?;

    log::debug!("Writing to stdout: {output:?}");
    print!("{}", output);

    Ok(())
}
