//! `greybrainer config` handlers.

use greybrainer::{GreybrainerConfig, GreybrainerResult};

/// Print the merged configuration and where state is kept.
pub fn show_config(config: &GreybrainerConfig) -> GreybrainerResult<()> {
    println!("{}", config.to_toml()?);
    println!("# state directory: {}", config.state_dir().display());
    for provider in [greybrainer::Provider::Gemini, greybrainer::Provider::Groq] {
        let var = provider.api_key_var();
        let status = if std::env::var(var).is_ok_and(|v| !v.trim().is_empty()) {
            "set"
        } else {
            "not set"
        };
        println!("# {var}: {status}");
    }
    Ok(())
}
