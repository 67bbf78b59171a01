//! Output formatting utilities

use crate::application::BuildOutcome;
use crate::infrastructure::Config;

/// Format the result of a build for display
pub fn format_outcome(outcome: &BuildOutcome) -> String {
    match outcome {
        BuildOutcome::File(path) => format!("Wrote sitemap to: {}", path.display()),
        BuildOutcome::Disk { name, path } => format!("Wrote sitemap to disk {}: {}", name, path),
        BuildOutcome::Rendered(xml) => xml.clone(),
    }
}

/// Format the resolved configuration for display
pub fn format_config(config: &Config, list_disks: bool) -> String {
    let mut output = format!("output = {}\n", config.output.display());

    if list_disks {
        if config.disks.is_empty() {
            output.push_str("No disks configured\n");
        }
        for (name, disk) in &config.disks {
            output.push_str(&format!("disk {} = {}\n", name, disk.root.display()));
        }
    } else {
        let names: Vec<&str> = config.disks.keys().map(String::as_str).collect();
        output.push_str(&format!("disks = {}\n", names.join(", ")));
    }

    output
}
