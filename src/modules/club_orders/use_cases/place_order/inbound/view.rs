use std::fmt::Write as _;

use crate::modules::club_orders::core::catalog::{Catalog, CatalogItem};
use crate::modules::club_orders::core::order::{Payment, Size, UNSPECIFIED_SIZE};
use crate::modules::club_orders::use_cases::place_order::inbound::notice::Notice;
use crate::shell::html::{escape, layout};

const RECAPTCHA_SCRIPT: &str =
    r#"<script src="https://www.google.com/recaptcha/api.js" async defer></script>"#;

const CUSTOM_ITEMS_SCRIPT: &str = r#"<script>
(function () {
  var next = 0;
  var template = document.getElementById("custom-item-template");
  var rows = document.getElementById("custom-items");
  document.getElementById("add-custom-item").addEventListener("click", function () {
    var html = template.innerHTML.split("__INDEX__").join(String(next));
    next += 1;
    rows.insertAdjacentHTML("beforeend", html);
  });
})();
</script>"#;

pub fn render_order_page(
    catalog: &Catalog,
    notice: Option<Notice>,
    captcha_site_key: Option<&str>,
) -> String {
    let mut body = String::new();
    body.push_str("<h1>Vereinskleidung bestellen</h1>\n");

    if let Some(notice) = notice {
        let _ = writeln!(
            body,
            r#"<div class="notice notice-{}" role="alert">{}</div>"#,
            notice.level(),
            escape(notice.message()),
        );
    }

    body.push_str(
        r#"<form method="post" action="/">
<p><label>Name <input type="text" name="name" required></label></p>
"#,
    );

    if catalog.is_empty() {
        body.push_str("<p>Derzeit sind keine Katalogartikel verfügbar.</p>\n");
    } else {
        body.push_str(
            "<table>\n<thead><tr><th>Artikel</th><th>Menge</th><th>Größe</th><th>Farbe</th><th>Zahlung</th></tr></thead>\n<tbody>\n",
        );
        for (name, item) in catalog.iter() {
            render_catalog_row(&mut body, name, item);
        }
        body.push_str("</tbody>\n</table>\n");
    }

    let _ = write!(
        body,
        r#"<h2>Individuelle Artikel</h2>
<div id="custom-items"></div>
<template id="custom-item-template">
<fieldset>
<label>Artikel <input type="text" name="c_item___INDEX__" required></label>
<label>Menge <input type="number" name="c_qty___INDEX__" min="1" value="1" required></label>
<label>Größe {sizes}</label>
<label>Farbe <input type="text" name="c_color___INDEX__" placeholder="Standard"></label>
<label>Zahlung {payments}</label>
</fieldset>
</template>
<p><button type="button" id="add-custom-item">Weiteren Artikel hinzufügen</button></p>
"#,
        sizes = size_select("c_size___INDEX__"),
        payments = payment_select("c_pay___INDEX__"),
    );

    if let Some(site_key) = captcha_site_key {
        let _ = writeln!(
            body,
            r#"<div class="g-recaptcha" data-sitekey="{}"></div>"#,
            escape(site_key)
        );
    }

    body.push_str("<p><button type=\"submit\">Bestellung absenden</button></p>\n</form>\n");
    body.push_str(CUSTOM_ITEMS_SCRIPT);

    let head_extra = if captcha_site_key.is_some() {
        RECAPTCHA_SCRIPT
    } else {
        ""
    };
    layout("Vereinskleidung", head_extra, &body)
}

fn render_catalog_row(body: &mut String, name: &str, item: &CatalogItem) {
    let color = if item.default_colors.is_empty() {
        format!(
            r#"<input type="text" name="{}" placeholder="Standard">"#,
            escape(&format!("color_{name}"))
        )
    } else {
        let mut select = format!(r#"<select name="{}">"#, escape(&format!("color_{name}")));
        for color in &item.default_colors {
            let color = escape(color);
            let _ = write!(select, r#"<option value="{color}">{color}</option>"#);
        }
        select.push_str("</select>");
        select
    };

    let _ = writeln!(
        body,
        r#"<tr><td>{label}</td><td><input type="number" name="{qty}" min="0" value="0"></td><td>{size}</td><td>{color}</td><td>{payment}</td></tr>"#,
        label = escape(name),
        qty = escape(&format!("qty_{name}")),
        size = size_select(&format!("size_{name}")),
        payment = payment_select(&format!("pay_{name}")),
    );
}

fn size_select(field: &str) -> String {
    let mut select = format!(
        r#"<select name="{}"><option value="">{UNSPECIFIED_SIZE}</option>"#,
        escape(field)
    );
    for size in Size::OFFERED {
        let _ = write!(select, r#"<option value="{size}">{size}</option>"#);
    }
    select.push_str("</select>");
    select
}

fn payment_select(field: &str) -> String {
    let mut select = format!(r#"<select name="{}">"#, escape(field));
    for payment in Payment::OFFERED.iter() {
        let _ = write!(
            select,
            r#"<option value="{}">{}</option>"#,
            payment.key(),
            payment.label()
        );
    }
    select.push_str("</select>");
    select
}
