//! Send command implementation.

use anyhow::Result;
use pushover_client::{CommandRecord, Priority, SendCommand};
use pushover_config::Config;

use crate::formatters::{OutputFormat, get_formatter};

#[allow(clippy::too_many_arguments)]
pub async fn run(
    config: Config,
    account: String,
    message: String,
    title: Option<String>,
    url: Option<String>,
    url_title: Option<String>,
    priority: i64,
    sound: Option<String>,
    output_format: &str,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let priority = Priority::new(priority)?;
    let client = crate::commands::build_client_from_config(&config)?;

    let command = SendCommand {
        account,
        message,
        title,
        url,
        url_title,
        priority,
        sound,
    };

    let result = command.execute(&config, &client).await;
    let record = CommandRecord::from_result(&command.account, &result);

    let formatter = get_formatter(format);
    print!("{}", formatter.format_command_record(&record)?);

    result?;
    Ok(())
}
