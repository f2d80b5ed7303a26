use craftgrid_board::report::{self, OVERWRITE_PROMPT, TEMPLATES};
use craftgrid_board::{TemplateOutcome, WorkReport};

use crate::render;

pub fn fill(key: Option<&str>, mut report: WorkReport, force: bool, format: &str) -> anyhow::Result<()> {
    let Some(key) = key else {
        match format {
            "json" => println!("{}", serde_json::to_string_pretty(TEMPLATES)?),
            _ => println!("{}", render::format_templates(TEMPLATES)),
        }
        return Ok(());
    };

    let Some(template) = report::template(key) else {
        let known: Vec<&str> = TEMPLATES.iter().map(|t| t.key).collect();
        anyhow::bail!("unknown template '{key}' (known: {})", known.join(", "));
    };

    let outcome = template.apply(&mut report, force);

    match format {
        "json" => {
            let doc = serde_json::json!({ "result": outcome, "report": report });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        _ => {
            if outcome == TemplateOutcome::NeedsConfirmation {
                println!("· {OVERWRITE_PROMPT} Re-run with --force to replace the description.");
            } else {
                println!("✓ Applied template {}", template.key);
            }
            println!("{}", render::format_report(&report));
        }
    }

    Ok(())
}
