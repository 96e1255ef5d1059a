//! ADR CLI commands

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::storage::Workspace;

pub fn init(workspace: &Workspace, output: &Output, base: Option<&Path>) -> Result<()> {
    let target = base.unwrap_or_else(|| workspace.paths().default_base_dir());
    output.verbose_ctx("init", &format!("Initializing ADR base at: {}", target.display()));

    let report = workspace.init(base)?;

    if !report.base_created {
        output.notice(&format!(
            "{} already exists, skipping folder creation",
            report.base_directory.display()
        ));
    }
    output.verbose_ctx("init", &format!("Wrote config: {}", report.config_file.display()));
    output.verbose_ctx("init", &format!("Installed template: {}", report.template_file.display()));

    if output.is_json() {
        output.data(&serde_json::json!({
            "base_directory": report.base_directory,
            "base_created": report.base_created,
            "config_file": report.config_file,
            "template_file": report.template_file,
            "current_id": 0,
        }));
    } else {
        output.success(&format!(
            "Initialized ADR base at {}",
            report.base_directory.display()
        ));
    }

    Ok(())
}

pub fn new(workspace: &Workspace, output: &Output, title_words: &[String]) -> Result<()> {
    output.verbose_ctx("new", &format!("Title words: {:?}", title_words));

    let created = workspace.create_adr(title_words)?;
    let adr = &created.adr;

    output.verbose_ctx("new", &format!("Counter advanced to {}", adr.number));

    if output.is_json() {
        output.data(&serde_json::json!({
            "number": adr.number,
            "title": adr.title,
            "status": adr.status,
            "date": adr.formatted_date(),
            "path": created.path,
        }));
    } else {
        output.success(&format!(
            "ADR number {} was successfully written to: {}",
            adr.number,
            created.path.display()
        ));
    }

    Ok(())
}
