//! Interactive script generation (`slsart script`).

use anyhow::{Context, Result};
use console::style;

use slsart_core::wizard::collector::ScriptWizard;
use slsart_infra::filesystem::LocalFileSystem;
use slsart_infra::prompt::DialoguerPrompter;
use slsart_infra::settings::resolve_settings;

/// Run the wizard and write the resulting script.
///
/// A user cancellation (Ctrl-C at any prompt) is not an error: the run
/// ends with a short notice and a zero exit code.
pub async fn generate_script() -> Result<()> {
    let settings = resolve_settings();
    let wizard = ScriptWizard::new(DialoguerPrompter::new(), settings);
    let fs = LocalFileSystem::new();

    match wizard.run(&fs).await {
        Ok(written) => {
            println!();
            println!(
                "  {} Test script written to '{}'.",
                style("✓").green().bold(),
                style(written.path.display()).cyan()
            );
            Ok(())
        }

        Err(err) if err.is_aborted() => {
            println!();
            println!("  Cancelled.");
            Ok(())
        }

        Err(err) => Err(err).context("Script wizard failed"),
    }
}
