//! Invoice generator: line items, discount, tax, and the computed total.
//!
//! DESIGN
//! ======
//! The arithmetic lives in [`compute_totals`], a pure function over parsed
//! numbers. The draft keeps raw form strings and converts them leniently for
//! the live preview, so a half-typed price never blanks the total.

#[cfg(test)]
#[path = "invoice_test.rs"]
mod invoice_test;

use serde::{Deserialize, Serialize};

use super::{ActionError, Reducer, required};
use crate::util::money::lenient_amount;

/// Currency code shown next to the generated total.
pub const INVOICE_CURRENCY: &str = "LKR";

/// Every figure of an invoice calculation. Unrounded.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub discount_amount: f64,
    pub discounted: f64,
    pub tax_amount: f64,
    pub total: f64,
}

/// `total = sum(prices) × (1 − discount/100) × (1 + tax/100)`.
///
/// `discount_pct` is clamped to `0..=100` and a negative `tax_pct` counts as
/// zero.
#[must_use]
pub fn compute_totals(prices: &[f64], discount_pct: f64, tax_pct: f64) -> InvoiceTotals {
    let subtotal: f64 = prices.iter().sum();
    let discount_pct = discount_pct.clamp(0.0, 100.0);
    let tax_pct = tax_pct.max(0.0);

    let discount_amount = subtotal * discount_pct / 100.0;
    let discounted = subtotal - discount_amount;
    let tax_amount = discounted * tax_pct / 100.0;

    InvoiceTotals { subtotal, discount_amount, discounted, tax_amount, total: discounted + tax_amount }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub service_type: String,
    pub price: String,
    pub description: String,
}

impl LineItem {
    fn blank() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            service_type: String::new(),
            price: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemField {
    ServiceType,
    Price,
    Description,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderField {
    InvoiceNumber,
    InvoiceDate,
    DueDate,
    ClientName,
    PetName,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceGeneratorState {
    pub invoice_number: String,
    pub invoice_date: String,
    pub due_date: String,
    pub client_name: String,
    pub pet_name: String,
    pub items: Vec<LineItem>,
    pub discount: String,
    pub tax_rate: String,
    pub send_via_email: bool,
}

impl Default for InvoiceGeneratorState {
    fn default() -> Self {
        Self {
            invoice_number: "INV-001".to_owned(),
            invoice_date: String::new(),
            due_date: String::new(),
            client_name: String::new(),
            pet_name: String::new(),
            items: vec![LineItem::blank()],
            discount: "75".to_owned(),
            tax_rate: "6".to_owned(),
            send_via_email: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceGeneratorAction {
    SetHeader(HeaderField, String),
    AddItem,
    UpdateItem { id: String, field: LineItemField, value: String },
    RemoveItem(String),
    SetDiscount(String),
    SetTaxRate(String),
    ToggleSendViaEmail,
    Reset,
}

/// Summary handed off (logged) when the invoice is generated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedInvoice {
    pub invoice_number: String,
    pub invoice_date: String,
    pub due_date: String,
    pub client_name: String,
    pub pet_name: String,
    pub items: Vec<LineItem>,
    pub totals: InvoiceTotals,
    pub send_via_email: bool,
}

impl InvoiceGeneratorState {
    /// Line prices read leniently: blank, non-numeric, and negative count as 0.
    #[must_use]
    pub fn prices(&self) -> Vec<f64> {
        self.items.iter().map(|i| lenient_amount(&i.price)).collect()
    }

    #[must_use]
    pub fn totals(&self) -> InvoiceTotals {
        compute_totals(&self.prices(), lenient_amount(&self.discount), lenient_amount(&self.tax_rate))
    }

    /// Validate the header and produce the summary.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for a blank invoice number, client name, or pet
    /// name.
    pub fn generate(&self) -> Result<GeneratedInvoice, ActionError> {
        Ok(GeneratedInvoice {
            invoice_number: required("invoice_number", &self.invoice_number)?,
            invoice_date: self.invoice_date.clone(),
            due_date: self.due_date.clone(),
            client_name: required("client_name", &self.client_name)?,
            pet_name: required("pet_name", &self.pet_name)?,
            items: self.items.clone(),
            totals: self.totals(),
            send_via_email: self.send_via_email,
        })
    }

    fn item_mut(&mut self, id: &str) -> Result<&mut LineItem, ActionError> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| ActionError::UnknownId(id.to_owned()))
    }
}

impl Reducer for InvoiceGeneratorState {
    type Action = InvoiceGeneratorAction;
    const NAME: &'static str = "invoice";

    fn apply(&mut self, action: InvoiceGeneratorAction) -> Result<(), ActionError> {
        match action {
            InvoiceGeneratorAction::SetHeader(field, value) => {
                let slot = match field {
                    HeaderField::InvoiceNumber => &mut self.invoice_number,
                    HeaderField::InvoiceDate => &mut self.invoice_date,
                    HeaderField::DueDate => &mut self.due_date,
                    HeaderField::ClientName => &mut self.client_name,
                    HeaderField::PetName => &mut self.pet_name,
                };
                *slot = value;
            }
            InvoiceGeneratorAction::AddItem => self.items.push(LineItem::blank()),
            InvoiceGeneratorAction::UpdateItem { id, field, value } => {
                let item = self.item_mut(&id)?;
                match field {
                    LineItemField::ServiceType => item.service_type = value,
                    LineItemField::Price => item.price = value,
                    LineItemField::Description => item.description = value,
                }
            }
            InvoiceGeneratorAction::RemoveItem(id) => {
                let index = self
                    .items
                    .iter()
                    .position(|i| i.id == id)
                    .ok_or(ActionError::UnknownId(id))?;
                if self.items.len() <= 1 {
                    return Err(ActionError::LastLineItem);
                }
                self.items.remove(index);
            }
            InvoiceGeneratorAction::SetDiscount(value) => self.discount = value,
            InvoiceGeneratorAction::SetTaxRate(value) => self.tax_rate = value,
            InvoiceGeneratorAction::ToggleSendViaEmail => self.send_via_email = !self.send_via_email,
            InvoiceGeneratorAction::Reset => *self = Self::default(),
        }
        Ok(())
    }
}
