use anyhow::Result;

use crate::cli::OutputFormat;

use super::{ModuleReport, ProjectReport};

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(report: &ProjectReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Text => Ok(Self::format_text(report)),
        }
    }

    /// One line per module: `name: first` with further tests on tab-indented
    /// lines, or `name: null` when the module has no test source directory.
    pub fn format_text(report: &ProjectReport) -> String {
        let mut out = String::new();
        for module in &report.modules {
            out.push_str(&Self::format_module(module));
            out.push('\n');
        }
        out
    }

    fn format_module(module: &ModuleReport) -> String {
        match &module.tests {
            None => format!("{}: null", module.name),
            Some(tests) => {
                let joined = tests
                    .iter()
                    .map(|t| t.display().to_string())
                    .collect::<Vec<_>>()
                    .join("\n\t");
                format!("{}: {joined}", module.name)
            }
        }
    }
}
