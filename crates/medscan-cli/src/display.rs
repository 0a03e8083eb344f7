use medscan_core::ScanSummary;

const LABEL_WIDTH: usize = 16;

/// Renders the summary as a two-column `FIELD`/`VALUE` table.
pub(crate) fn render_table(summary: &ScanSummary) -> String {
    let mut out = format!("{:<LABEL_WIDTH$}VALUE\n", "FIELD");
    for (label, value) in summary.rows() {
        out.push_str(&format!("{label:<LABEL_WIDTH$}{value}\n"));
    }
    out
}
