//! Work-report templates for the field-worker view.
//!
//! A worker filling in a report after a job can pick one of a few canned
//! texts. Applying a template fills in the description and materials and
//! leaves the title alone; the worker has already named the project.
//! A description the worker has typed is only replaced after confirmation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Descriptions up to this many characters are replaced without asking.
pub const OVERWRITE_THRESHOLD: usize = 5;

/// Question put to the worker before replacing their text.
pub const OVERWRITE_PROMPT: &str = "Vorhandenen Text überschreiben?";

/// The report being filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkReport {
    pub title: String,
    pub description: String,
    pub materials: String,
}

impl WorkReport {
    /// Whether the description holds enough text to need confirmation.
    pub fn has_own_description(&self) -> bool {
        self.description.chars().count() > OVERWRITE_THRESHOLD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportTemplate {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub materials: &'static str,
}

/// Result of applying a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateOutcome {
    Applied,
    /// The report was left untouched; ask [`OVERWRITE_PROMPT`] and retry.
    NeedsConfirmation,
}

pub const TEMPLATES: &[ReportTemplate] = &[
    ReportTemplate {
        key: "wartung_gas",
        title: "Wartung Gastherme",
        description: "- Brenner gereinigt\n- Zündelektroden geprüft\n- Druckausgleichsbehälter geprüft\n- Abgasmessung durchgeführt",
        materials: "1x Dichtungssatz A\n1x Zündelektrode Typ B",
    },
    ReportTemplate {
        key: "bad_sani",
        title: "Badsanierung Rohbau",
        description: "- Alte Leitungen entfernt\n- Schlitze gestemmt\n- Abflussleitungen DN50 verlegt\n- Spülkasten montiert",
        materials: "5m HT-Rohr DN50\n4x Bogen 45°\n1x GIS-Modul WC",
    },
    ReportTemplate {
        key: "heizung_stoerung",
        title: "Störungsbehebung Heizung",
        description: "- Fehlerspeicher ausgelesen (Fehler F4)\n- Pumpe gängig gemacht\n- Anlage entlüftet\n- Probelauf erfolgreich",
        materials: "Kleinmaterial",
    },
];

/// Look up a template by key.
pub fn template(key: &str) -> Option<&'static ReportTemplate> {
    TEMPLATES.iter().find(|t| t.key == key)
}

impl ReportTemplate {
    /// Fill `report` from this template.
    ///
    /// Without `overwrite`, a report with its own description is left as is.
    pub fn apply(&self, report: &mut WorkReport, overwrite: bool) -> TemplateOutcome {
        if report.has_own_description() && !overwrite {
            debug!(template = self.key, "report has own description, asking first");
            return TemplateOutcome::NeedsConfirmation;
        }
        report.description = self.description.to_string();
        report.materials = self.materials.to_string();
        info!(template = self.key, "report template applied");
        TemplateOutcome::Applied
    }
}
