//! Human-readable partitioner report.
//!
//! ```text
//! ================================================================================
//! Windows-Compatible Partitioners
//! ================================================================================
//!
//! Backend-Specific:
//! --------------------------------------------------------------------------------
//!   • XnnpackPartitioner
//!     Module: executorch.backends.xnnpack.partition.xnnpack_partitioner
//!     Description: Main XNNPACK partitioner for CPU acceleration
//!     Variants: XnnpackDynamicallyQuantizedPartitioner, ...
//!
//! ...
//! ================================================================================
//! Total: 9 Windows-compatible partitioners
//! ================================================================================
//! ```

use std::io::Write;

use tracing::debug;

use crate::error::Result;
use crate::flatten::flatten;
use crate::registry::Registry;

const RULE_WIDTH: usize = 80;

/// Format the full report as a string.
pub fn format_report(registry: &Registry) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut out = format!("{heavy}\nWindows-Compatible Partitioners\n{heavy}\n\n");

    for (category, entries) in registry.iter() {
        out.push_str(&format!("{category}:\n{light}\n"));
        for entry in entries {
            out.push_str(&format!("  • {}\n", entry.name));
            out.push_str(&format!("    Module: {}\n", entry.module));
            out.push_str(&format!("    Description: {}\n", entry.description));
            if let Some(variants) = entry.variants_display() {
                out.push_str(&format!("    Variants: {variants}\n"));
            }
            out.push('\n');
        }
    }

    // The total always comes from the flattener, never a separate count.
    let total = flatten(registry).len();
    out.push_str(&format!(
        "{heavy}\nTotal: {total} Windows-compatible partitioners\n{heavy}\n"
    ));

    out
}

/// Write the report to `writer` in a single write.
pub fn render<W: Write>(registry: &Registry, mut writer: W) -> Result<()> {
    let report = format_report(registry);
    writer.write_all(report.as_bytes())?;
    writer.flush()?;
    debug!(bytes = report.len(), "rendered partitioner report");
    Ok(())
}

/// Write the report to standard output.
pub fn print_report(registry: &Registry) -> Result<()> {
    render(registry, std::io::stdout().lock())
}
