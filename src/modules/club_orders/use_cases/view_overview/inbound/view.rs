use std::fmt::Write as _;

use crate::modules::club_orders::use_cases::view_overview::projection::{
    OverviewRow, total_quantity,
};
use crate::shell::html::{escape, layout};

pub fn render_overview_page(rows: &[OverviewRow]) -> String {
    let mut body = String::from("<h1>Bestellübersicht</h1>\n");

    if rows.is_empty() {
        body.push_str("<p>Noch keine Bestellungen.</p>\n");
        return layout("Bestellübersicht", "", &body);
    }

    body.push_str(
        "<table>\n<thead><tr><th>Zahlung</th><th>Artikel</th><th>Größe</th><th>Farbe</th><th>Besteller</th><th>Menge</th></tr></thead>\n<tbody>\n",
    );
    for row in rows {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&row.payment),
            escape(&row.item),
            escape(&row.size),
            escape(&row.color),
            escape(&row.buyer),
            row.qty,
        );
    }
    let _ = write!(
        body,
        "</tbody>\n<tfoot><tr><th colspan=\"5\">Gesamt</th><th>{}</th></tr></tfoot>\n</table>\n",
        total_quantity(rows)
    );

    layout("Bestellübersicht", "", &body)
}
