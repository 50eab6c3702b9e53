/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 textbaustein contributors
*/

//! Localized standard paragraphs for each document kind.
//!
//! Boilerplate strings are injected during the first render pass and may
//! themselves embed placeholder markers (a quote closing embeds
//! `[%GUELTIGBIS%]`, an invoice closing embeds `[%ZAHLUNGSZIEL%]`), which
//! is why the renderer runs a second pass over the expanded text.

use serde::{Deserialize, Serialize};

/// The business document kinds with dedicated boilerplate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Quote,
    #[default]
    Invoice,
    Reminder,
    #[serde(alias = "lieferschein")]
    DeliveryNote,
    #[serde(alias = "auftragsbestaetigung")]
    OrderConfirmation,
}

/// Position of a boilerplate paragraph within the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoilerplateSlot {
    Intro,
    Closing,
}

/// Standard paragraphs for one language.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BoilerplateTexts {
    pub quote_intro: String,
    pub quote_closing: String,
    pub invoice_intro: String,
    pub invoice_closing: String,
    pub reminder_intro: String,
    pub reminder_closing: String,
    pub delivery_note_intro: String,
    pub delivery_note_closing: String,
    pub order_confirmation_intro: String,
    pub order_confirmation_closing: String,
    /// The closing salutation line shared by all document kinds.
    pub closing_salutation: String,
}

impl BoilerplateTexts {
    /// Look up the paragraph for a document kind and slot.
    pub fn text(&self, kind: DocumentKind, slot: BoilerplateSlot) -> &str {
        match (kind, slot) {
            (DocumentKind::Quote, BoilerplateSlot::Intro) => &self.quote_intro,
            (DocumentKind::Quote, BoilerplateSlot::Closing) => &self.quote_closing,
            (DocumentKind::Invoice, BoilerplateSlot::Intro) => &self.invoice_intro,
            (DocumentKind::Invoice, BoilerplateSlot::Closing) => &self.invoice_closing,
            (DocumentKind::Reminder, BoilerplateSlot::Intro) => &self.reminder_intro,
            (DocumentKind::Reminder, BoilerplateSlot::Closing) => &self.reminder_closing,
            (DocumentKind::DeliveryNote, BoilerplateSlot::Intro) => &self.delivery_note_intro,
            (DocumentKind::DeliveryNote, BoilerplateSlot::Closing) => &self.delivery_note_closing,
            (DocumentKind::OrderConfirmation, BoilerplateSlot::Intro) => {
                &self.order_confirmation_intro
            }
            (DocumentKind::OrderConfirmation, BoilerplateSlot::Closing) => {
                &self.order_confirmation_closing
            }
        }
    }

    /// German boilerplate, the default table.
    pub fn de() -> Self {
        Self {
            quote_intro: "vielen Dank für Ihre Anfrage. Gerne unterbreiten wir Ihnen \
                          folgendes Angebot:"
                .into(),
            quote_closing: "Dieses Angebot ist gültig bis zum [%GUELTIGBIS%]. Wir freuen \
                            uns auf Ihre Rückmeldung."
                .into(),
            invoice_intro: "wir bedanken uns für Ihren Auftrag und erlauben uns, Ihnen \
                            folgende Leistungen in Rechnung zu stellen:"
                .into(),
            invoice_closing: "Wir bitten Sie, den Rechnungsbetrag von [%GESAMTBETRAG%] \
                              unter Angabe der Rechnungsnummer [%RECHNUNGSNUMMER%] auf das \
                              unten angegebene Konto zu überweisen. Zahlungsziel: \
                              [%ZAHLUNGSZIEL%]\nVielen Dank für Ihr Vertrauen und die \
                              angenehme Zusammenarbeit!"
                .into(),
            reminder_intro: "auf unsere Rechnung [%RECHNUNGSNUMMER%] vom \
                             [%RECHNUNGSDATUM%] konnten wir bislang keinen \
                             Zahlungseingang feststellen."
                .into(),
            reminder_closing: "Wir bitten Sie, den offenen Betrag von [%GESAMTBETRAG%] \
                               bis spätestens [%FAELLIGKEITSDATUM%] zu begleichen. Sollte \
                               sich Ihre Zahlung mit diesem Schreiben überschnitten haben, \
                               betrachten Sie es bitte als gegenstandslos."
                .into(),
            delivery_note_intro: "wir liefern Ihnen die nachfolgend aufgeführten \
                                  Positionen:"
                .into(),
            delivery_note_closing: "Bitte prüfen Sie die Lieferung auf Vollständigkeit \
                                    und Unversehrtheit."
                .into(),
            order_confirmation_intro: "vielen Dank für Ihren Auftrag, den wir hiermit \
                                       bestätigen:"
                .into(),
            order_confirmation_closing: "Die Lieferung erfolgt voraussichtlich zum \
                                         [%LIEFERDATUM%]. Wir bedanken uns für Ihr \
                                         Vertrauen."
                .into(),
            closing_salutation: "Mit freundlichen Grüßen\n[%KONTAKTPERSON%]".into(),
        }
    }

    /// English boilerplate.
    pub fn en() -> Self {
        Self {
            quote_intro: "thank you for your inquiry. We are pleased to submit the \
                          following quotation:"
                .into(),
            quote_closing: "This quotation is valid until [%GUELTIGBIS%]. We look \
                            forward to hearing from you."
                .into(),
            invoice_intro: "thank you for your order. We hereby invoice the following \
                            services:"
                .into(),
            invoice_closing: "Please transfer the invoice amount of [%GESAMTBETRAG%], \
                              quoting invoice number [%RECHNUNGSNUMMER%], to the account \
                              stated below. Payment due: [%ZAHLUNGSZIEL%]\nThank you for \
                              your trust and the pleasant cooperation!"
                .into(),
            reminder_intro: "we have not yet been able to register a payment for our \
                             invoice [%RECHNUNGSNUMMER%] dated [%RECHNUNGSDATUM%]."
                .into(),
            reminder_closing: "Please settle the outstanding amount of [%GESAMTBETRAG%] \
                               by [%FAELLIGKEITSDATUM%] at the latest. If your payment \
                               has crossed this letter, please disregard it."
                .into(),
            delivery_note_intro: "we are delivering the items listed below:".into(),
            delivery_note_closing: "Please check the delivery for completeness and \
                                    integrity."
                .into(),
            order_confirmation_intro: "thank you for your order, which we hereby \
                                       confirm:"
                .into(),
            order_confirmation_closing: "Delivery is expected by [%LIEFERDATUM%]. Thank \
                                         you for your trust."
                .into(),
            closing_salutation: "Kind regards\n[%KONTAKTPERSON%]".into(),
        }
    }

    /// French boilerplate.
    pub fn fr() -> Self {
        Self {
            quote_intro: "nous vous remercions de votre demande. Nous avons le plaisir \
                          de vous soumettre l'offre suivante :"
                .into(),
            quote_closing: "Cette offre est valable jusqu'au [%GUELTIGBIS%]. Nous nous \
                            réjouissons de votre retour."
                .into(),
            invoice_intro: "nous vous remercions de votre commande et nous permettons \
                            de vous facturer les prestations suivantes :"
                .into(),
            invoice_closing: "Nous vous prions de virer le montant de [%GESAMTBETRAG%] \
                              en indiquant le numéro de facture [%RECHNUNGSNUMMER%] sur \
                              le compte indiqué ci-dessous. Échéance : [%ZAHLUNGSZIEL%]\n\
                              Merci de votre confiance et de l'agréable collaboration !"
                .into(),
            reminder_intro: "nous n'avons pas encore pu constater de paiement pour \
                             notre facture [%RECHNUNGSNUMMER%] du [%RECHNUNGSDATUM%]."
                .into(),
            reminder_closing: "Nous vous prions de régler le montant dû de \
                               [%GESAMTBETRAG%] au plus tard le [%FAELLIGKEITSDATUM%]. \
                               Si votre paiement a croisé ce courrier, veuillez ne pas \
                               en tenir compte."
                .into(),
            delivery_note_intro: "nous vous livrons les positions listées ci-dessous :"
                .into(),
            delivery_note_closing: "Veuillez vérifier que la livraison est complète et \
                                    en bon état."
                .into(),
            order_confirmation_intro: "nous vous remercions de votre commande, que nous \
                                       confirmons par la présente :"
                .into(),
            order_confirmation_closing: "La livraison est prévue pour le \
                                         [%LIEFERDATUM%]. Merci de votre confiance."
                .into(),
            closing_salutation: "Cordialement\n[%KONTAKTPERSON%]".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_kind_and_slot() {
        let texts = BoilerplateTexts::de();
        assert!(texts
            .text(DocumentKind::Quote, BoilerplateSlot::Closing)
            .contains("[%GUELTIGBIS%]"));
        assert!(texts
            .text(DocumentKind::Invoice, BoilerplateSlot::Closing)
            .contains("[%ZAHLUNGSZIEL%]"));
        assert!(texts
            .text(DocumentKind::OrderConfirmation, BoilerplateSlot::Closing)
            .contains("[%LIEFERDATUM%]"));
    }

    #[test]
    fn test_all_languages_cover_all_slots() {
        for texts in [
            BoilerplateTexts::de(),
            BoilerplateTexts::en(),
            BoilerplateTexts::fr(),
        ] {
            for kind in [
                DocumentKind::Quote,
                DocumentKind::Invoice,
                DocumentKind::Reminder,
                DocumentKind::DeliveryNote,
                DocumentKind::OrderConfirmation,
            ] {
                for slot in [BoilerplateSlot::Intro, BoilerplateSlot::Closing] {
                    assert!(!texts.text(kind, slot).is_empty());
                }
            }
            assert!(!texts.closing_salutation.is_empty());
        }
    }

    #[test]
    fn test_document_kind_aliases() {
        let kind: DocumentKind = serde_json::from_str("\"lieferschein\"").unwrap();
        assert_eq!(kind, DocumentKind::DeliveryNote);
        let kind: DocumentKind = serde_json::from_str("\"order_confirmation\"").unwrap();
        assert_eq!(kind, DocumentKind::OrderConfirmation);
    }
}
