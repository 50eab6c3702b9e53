use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use textbaustein_core::{DocumentContext, Language};
use textbaustein_engine::TemplateEngine;

const INVOICE_TEMPLATE: &str = "\
[%VOLLEANREDE%]\n\n\
[%INVOICE_INTRO_TEXT%]\n\n\
Rechnung [%RECHNUNGSNUMMER%] vom [%RECHNUNGSDATUM%]\n\
Netto: [%NETTOBETRAG%]  USt ([%STEUERSATZ%]): [%STEUERBETRAG%]\n\
Gesamt: [%GESAMTBETRAG%]\n\n\
[%INVOICE_CLOSING_TEXT%]\n\n\
[%CLOSING_SALUTATION%]\n\n\
[%FIRMENNAME%] | [%IBAN%] | [%BIC%]";

fn bench_rendering(c: &mut Criterion) {
    let context: DocumentContext = serde_json::from_str(
        r#"{
            "companyName": "Muster GmbH",
            "contactPersonName": "Petra Beispiel",
            "bankDetails": {
                "iban": "DE02120300000000202051",
                "bic": "BYLADEM1001"
            },
            "customerName": "Frau Anna Schmidt",
            "invoiceNumber": "RE-2025-044",
            "date": "01.05.2025",
            "total": 1234.5,
            "netAmount": 1037.39,
            "tax": 197.11,
            "taxRate": 19.0,
            "paymentTerms": "Zahlbar binnen 14 Tagen ohne Abzug"
        }"#,
    )
    .expect("failed to parse benchmark context");

    let now = NaiveDate::from_ymd_opt(2025, 5, 14).unwrap();

    c.bench_function("Render invoice template (de)", |b| {
        let engine = TemplateEngine::new(Language::De);
        b.iter(|| engine.render_at(black_box(INVOICE_TEMPLATE), black_box(&context), now))
    });

    c.bench_function("Render token-free template", |b| {
        let engine = TemplateEngine::new(Language::De);
        b.iter(|| engine.render_at(black_box("No markers in here at all."), black_box(&context), now))
    });
}

criterion_group!(benches, bench_rendering);
criterion_main!(benches);
