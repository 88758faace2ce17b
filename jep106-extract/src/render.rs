//! Literal rendering
//!
//! Serializes a [`ManufacturerTable`] into the data literal embedded in the
//! template: a list of bank records, each holding its number and a
//! `Dictionary<byte, string>` of IDs to names.

use crate::config::TemplateConfig;
use crate::types::ManufacturerTable;

/// Closes the previous bank record before a new one opens
const BANK_SEPARATOR: &str = "        }\n    },\n";

/// Closes the last dictionary and bank record, then the list
const LITERAL_CLOSE: &str = "        }}\n";

/// Render the full data literal, from the opening line to the closing bracket
pub fn render_literal(table: &ManufacturerTable, config: &TemplateConfig) -> String {
    let mut out = String::new();
    out.push_str(&config.block_start);
    out.push('\n');

    for (id, name) in &table.orphans {
        push_entry(&mut out, *id, name);
    }

    for bank in &table.banks {
        if bank.number > 1 {
            out.push_str(BANK_SEPARATOR);
        }
        out.push_str(&format!(
            "    {{\n        {n}, //Bank {n}\n        new Dictionary<byte, string>\n        {{\n",
            n = bank.number
        ));
        for (id, name) in &bank.entries {
            push_entry(&mut out, *id, name);
        }
    }

    out.push_str(LITERAL_CLOSE);
    out.push_str(&config.block_end);
    out
}

/// Render the version comment for a PDF, e.g. `# Version: JEDEC JEP106BL.pdf`
pub fn version_line(pdf_name: &str, config: &TemplateConfig) -> String {
    format!("{}: {} {}", config.version_prefix, config.version_label, pdf_name)
}

fn push_entry(out: &mut String, id: u8, name: &str) {
    out.push_str(&format!("            {{ 0x{:02X}, \"{}\" }},\n", id, name));
}
