//! Invoices, payment summary, fee settings, and accepted payment methods.

#[cfg(test)]
#[path = "billing_test.rs"]
mod billing_test;

use serde::{Deserialize, Serialize};

use super::{ActionError, Reducer, fixtures, required};
use crate::util::money::parse_amount;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    Unpaid,
}

/// How an invoice is (or will be) paid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    Cash,
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [Self; 3] = [Self::CreditCard, Self::Cash, Self::BankTransfer];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::Cash => "Cash",
            Self::BankTransfer => "Bank Transfer",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

/// Payment channels the practice accepts, toggled on the settings tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentChannel {
    Card,
    Cash,
    BankTransfer,
    DigitalWallet,
}

impl PaymentChannel {
    pub const ALL: [Self; 4] = [Self::Card, Self::Cash, Self::BankTransfer, Self::DigitalWallet];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Card => "Credit/Debit Cards",
            Self::Cash => "Cash Payment",
            Self::BankTransfer => "Bank Transfer",
            Self::DigitalWallet => "Digital Wallets",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentChannels {
    pub card: bool,
    pub cash: bool,
    pub bank_transfer: bool,
    pub digital_wallet: bool,
}

impl Default for PaymentChannels {
    fn default() -> Self {
        Self { card: true, cash: true, bank_transfer: false, digital_wallet: false }
    }
}

impl PaymentChannels {
    #[must_use]
    pub fn enabled(&self, channel: PaymentChannel) -> bool {
        match channel {
            PaymentChannel::Card => self.card,
            PaymentChannel::Cash => self.cash,
            PaymentChannel::BankTransfer => self.bank_transfer,
            PaymentChannel::DigitalWallet => self.digital_wallet,
        }
    }

    fn toggle(&mut self, channel: PaymentChannel) {
        let flag = match channel {
            PaymentChannel::Card => &mut self.card,
            PaymentChannel::Cash => &mut self.cash,
            PaymentChannel::BankTransfer => &mut self.bank_transfer,
            PaymentChannel::DigitalWallet => &mut self.digital_wallet,
        };
        *flag = !*flag;
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub date: String,
    pub pet: String,
    pub owner: String,
    pub service: String,
    pub payment: PaymentMethod,
    pub amount: f64,
    pub tax: f64,
    pub total: f64,
    pub status: InvoiceStatus,
}

/// Fee defaults, in dollars and percent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeeSettings {
    pub consultation_fee: f64,
    pub tax_rate: f64,
    pub default_discount: f64,
}

impl Default for FeeSettings {
    fn default() -> Self {
        Self { consultation_fee: 75.0, tax_rate: 6.0, default_discount: 75.0 }
    }
}

/// Raw fee form values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeDraft {
    pub consultation_fee: String,
    pub tax_rate: String,
    pub default_discount: String,
}

impl From<FeeSettings> for FeeDraft {
    fn from(fees: FeeSettings) -> Self {
        Self {
            consultation_fee: fees.consultation_fee.to_string(),
            tax_rate: fees.tax_rate.to_string(),
            default_discount: fees.default_discount.to_string(),
        }
    }
}

/// Raw create-invoice form values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub pet: String,
    pub owner: String,
    pub service: String,
    pub amount: String,
    pub payment: PaymentMethod,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingTab {
    #[default]
    Invoices,
    Settings,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillingState {
    pub invoices: Vec<Invoice>,
    pub active_tab: BillingTab,
    pub fees: FeeSettings,
    pub channels: PaymentChannels,
}

impl Default for BillingState {
    fn default() -> Self {
        Self {
            invoices: fixtures::invoices(),
            active_tab: BillingTab::Invoices,
            fees: FeeSettings::default(),
            channels: PaymentChannels::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BillingAction {
    SelectTab(BillingTab),
    MarkPaid(String),
    Create { draft: InvoiceDraft, today: String },
    TogglePaymentChannel(PaymentChannel),
    SaveFees(FeeDraft),
}

/// Invoice id for the `n`th invoice: `INV-001`, `INV-002`, ...
#[must_use]
pub fn invoice_id(n: usize) -> String {
    format!("INV-{n:03}")
}

impl BillingState {
    fn sum_totals(&self, status: InvoiceStatus) -> f64 {
        self.invoices.iter().filter(|i| i.status == status).map(|i| i.total).sum()
    }

    /// Sum of totals of paid invoices.
    #[must_use]
    pub fn total_revenue(&self) -> f64 {
        self.sum_totals(InvoiceStatus::Paid)
    }

    #[must_use]
    pub fn paid_count(&self) -> usize {
        self.invoices.iter().filter(|i| i.status == InvoiceStatus::Paid).count()
    }

    /// Sum of totals still awaiting payment.
    #[must_use]
    pub fn pending_amount(&self) -> f64 {
        self.sum_totals(InvoiceStatus::Unpaid)
    }

    /// Validate a create-invoice draft into an unpaid invoice dated `today`.
    ///
    /// Tax uses the configured rate. The id continues the `INV-###` sequence.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for a blank pet, owner, service, or amount and
    /// `InvalidNumber` for an amount that is not a non-negative number.
    pub fn build_invoice(&self, draft: &InvoiceDraft, today: &str) -> Result<Invoice, ActionError> {
        let pet = required("pet", &draft.pet)?;
        let owner = required("owner", &draft.owner)?;
        let service = required("service", &draft.service)?;
        let amount = parse_amount("amount", &required("amount", &draft.amount)?)?;
        let tax = amount * self.fees.tax_rate / 100.0;

        Ok(Invoice {
            id: invoice_id(self.invoices.len() + 1),
            date: today.to_owned(),
            pet,
            owner,
            service,
            payment: draft.payment,
            amount,
            tax,
            total: amount + tax,
            status: InvoiceStatus::Unpaid,
        })
    }
}

/// Validate the fee form.
///
/// # Errors
///
/// Returns `InvalidNumber` for any blank, negative, or non-numeric field.
pub fn parse_fees(draft: &FeeDraft) -> Result<FeeSettings, ActionError> {
    Ok(FeeSettings {
        consultation_fee: parse_amount("consultation_fee", &draft.consultation_fee)?,
        tax_rate: parse_amount("tax_rate", &draft.tax_rate)?,
        default_discount: parse_amount("default_discount", &draft.default_discount)?.min(100.0),
    })
}

impl Reducer for BillingState {
    type Action = BillingAction;
    const NAME: &'static str = "billing";

    fn apply(&mut self, action: BillingAction) -> Result<(), ActionError> {
        match action {
            BillingAction::SelectTab(tab) => self.active_tab = tab,
            BillingAction::MarkPaid(id) => {
                let invoice = self
                    .invoices
                    .iter_mut()
                    .find(|i| i.id == id)
                    .ok_or(ActionError::UnknownId(id))?;
                invoice.status = InvoiceStatus::Paid;
            }
            BillingAction::Create { draft, today } => {
                let invoice = self.build_invoice(&draft, &today)?;
                self.invoices.push(invoice);
            }
            BillingAction::TogglePaymentChannel(channel) => self.channels.toggle(channel),
            BillingAction::SaveFees(draft) => self.fees = parse_fees(&draft)?,
        }
        Ok(())
    }
}
