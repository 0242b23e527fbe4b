//! Plain-text table of converted records for `fabridge preview`.

use fabridge_core::NormalizedRecord;

const HEADERS: [&str; 3] = ["Date", "Amount", "Description"];

pub fn render_table(records: &[NormalizedRecord], limit: usize) -> String {
    let shown = &records[..records.len().min(limit)];

    let date_w = HEADERS[0].len().max(10);
    let amount_w = shown
        .iter()
        .map(|r| r.amount.len())
        .chain([HEADERS[1].len()])
        .max()
        .unwrap_or(0);

    let mut s = String::new();
    s.push_str(&format!(
        "{:<date_w$}  {:>amount_w$}  {}\n",
        HEADERS[0], HEADERS[1], HEADERS[2]
    ));
    s.push_str(&format!(
        "{}  {}  {}\n",
        "-".repeat(date_w),
        "-".repeat(amount_w),
        "-".repeat(HEADERS[2].len())
    ));
    for r in shown {
        s.push_str(&format!(
            "{:<date_w$}  {:>amount_w$}  {}\n",
            r.date, r.amount, r.description
        ));
    }

    if records.len() > shown.len() {
        s.push_str(&format!("... {} more\n", records.len() - shown.len()));
    }
    s
}
