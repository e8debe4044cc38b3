use sawt_core::config::ClientConfig;

use crate::error::CliError;

pub fn run_config_show(as_json: bool) -> Result<(), CliError> {
    let config = ClientConfig::from_env()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config_json(&config))?);
    } else {
        for line in format_config_lines(&config) {
            println!("{line}");
        }
    }
    Ok(())
}

pub fn format_config_lines(config: &ClientConfig) -> Vec<String> {
    config
        .describe()
        .into_iter()
        .map(|(label, value)| format!("{label:<24}{value}"))
        .collect()
}

pub fn config_json(config: &ClientConfig) -> serde_json::Value {
    config
        .describe()
        .into_iter()
        .map(|(label, value)| (label.to_string(), serde_json::Value::String(value)))
        .collect::<serde_json::Map<_, _>>()
        .into()
}
