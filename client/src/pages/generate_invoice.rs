//! Invoice generator: header fields, editable line items, and a live total.

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::button::{ButtonVariant, button_class};
use crate::components::card::Card;
use crate::components::toggle::Toggle;
use crate::routes::AppRoute;
use crate::state::invoice::{
    HeaderField, INVOICE_CURRENCY, InvoiceGeneratorAction, InvoiceGeneratorState, LineItem, LineItemField,
};
use crate::util::dispatch::dispatch;
use crate::util::money::format_with_currency;

#[component]
pub fn GenerateInvoicePage() -> impl IntoView {
    let invoice = expect_context::<RwSignal<InvoiceGeneratorState>>();
    let navigate = use_navigate();

    let back = {
        let navigate = navigate.clone();
        move |_: leptos::ev::MouseEvent| navigate(AppRoute::Billing.path(), NavigateOptions::default())
    };
    let cancel = back.clone();

    let generate = move |_: leptos::ev::MouseEvent| match invoice.with_untracked(InvoiceGeneratorState::generate) {
        Ok(summary) => {
            let json = serde_json::to_string(&summary).unwrap_or_else(|_| format!("{summary:?}"));
            log!("generated invoice {json}");
            dispatch(invoice, InvoiceGeneratorAction::Reset);
            navigate(AppRoute::Billing.path(), NavigateOptions::default());
        }
        Err(err) => warn!("invoice not generated: {err}"),
    };

    let total = move || invoice.with(|s| format_with_currency(INVOICE_CURRENCY, s.totals().total));

    view! {
        <div class="generate-invoice-page">
            <div class="page-intro page-intro--with-back">
                <button class=button_class(ButtonVariant::Ghost) title="Back to billing" on:click=back>
                    "←"
                </button>
                <div>
                    <h2>"Generate Invoice"</h2>
                    <p>"Create and send an invoice for your services"</p>
                </div>
            </div>

            <div class="generate-invoice-page__columns">
                <div class="generate-invoice-page__main">
                    <Card>
                        <div class="card__header">
                            <h3>"Invoice Details"</h3>
                        </div>
                        <div class="card__body form-grid">
                            {header_input(invoice, "Invoice Number", HeaderField::InvoiceNumber, "text", "")}
                            {header_input(invoice, "Invoice Date", HeaderField::InvoiceDate, "date", "")}
                            {header_input(invoice, "Due Date", HeaderField::DueDate, "date", "")}
                            {header_input(invoice, "Client Name", HeaderField::ClientName, "text", "Client Name")}
                            {header_input(invoice, "Pet Name", HeaderField::PetName, "text", "Enter pet name")}
                        </div>
                    </Card>

                    <Card>
                        <div class="card__header">
                            <h3>"Services"</h3>
                            <button
                                class=button_class(ButtonVariant::Primary)
                                on:click=move |_| {
                                    dispatch(invoice, InvoiceGeneratorAction::AddItem);
                                }
                            >
                                "+ Add Service"
                            </button>
                        </div>
                        <div class="card__body line-items">
                            <For
                                each=move || invoice.get().items
                                key=|item| item.id.clone()
                                children=move |item| view! { <LineItemEditor item invoice/> }
                            />
                        </div>
                    </Card>
                </div>

                <Card class="generate-invoice-page__summary">
                    <div class="card__header">
                        <h3>"Summary"</h3>
                    </div>
                    <div class="card__body">
                        <label class="field">
                            <span class="field__label">"Discount (%)"</span>
                            <input
                                class="field__input"
                                type="number"
                                prop:value=move || invoice.with(|s| s.discount.clone())
                                on:input=move |ev| {
                                    dispatch(invoice, InvoiceGeneratorAction::SetDiscount(event_target_value(&ev)));
                                }
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Tax Rate (%)"</span>
                            <input
                                class="field__input"
                                type="number"
                                prop:value=move || invoice.with(|s| s.tax_rate.clone())
                                on:input=move |ev| {
                                    dispatch(invoice, InvoiceGeneratorAction::SetTaxRate(event_target_value(&ev)));
                                }
                            />
                        </label>
                        <div class="invoice-summary__total">
                            <span>"Total:"</span>
                            <span>{total}</span>
                        </div>
                        <Toggle
                            title="Send via Email"
                            checked=Signal::derive(move || invoice.with(|s| s.send_via_email))
                            on_toggle=Callback::new(move |()| {
                                dispatch(invoice, InvoiceGeneratorAction::ToggleSendViaEmail);
                            })
                        />
                        <div class="invoice-summary__actions">
                            <button class=button_class(ButtonVariant::Primary) on:click=generate>
                                "Generate Invoice"
                            </button>
                            <button class=button_class(ButtonVariant::Secondary) on:click=cancel>
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </Card>
            </div>
        </div>
    }
}

fn header_input(
    invoice: RwSignal<InvoiceGeneratorState>,
    label: &'static str,
    field: HeaderField,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let current = move || {
        invoice.with(|s| match field {
            HeaderField::InvoiceNumber => s.invoice_number.clone(),
            HeaderField::InvoiceDate => s.invoice_date.clone(),
            HeaderField::DueDate => s.due_date.clone(),
            HeaderField::ClientName => s.client_name.clone(),
            HeaderField::PetName => s.pet_name.clone(),
        })
    };

    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type
                placeholder=placeholder
                prop:value=current
                on:input=move |ev| {
                    dispatch(invoice, InvoiceGeneratorAction::SetHeader(field, event_target_value(&ev)));
                }
            />
        </label>
    }
}

#[component]
fn LineItemEditor(item: LineItem, invoice: RwSignal<InvoiceGeneratorState>) -> impl IntoView {
    let id = item.id;
    let position = {
        let id = id.clone();
        move || invoice.with(|s| s.items.iter().position(|i| i.id == id).map_or(0, |p| p + 1))
    };
    let removable = move || invoice.with(|s| s.items.len() > 1);

    let update = {
        let id = id.clone();
        move |field: LineItemField, value: String| {
            dispatch(invoice, InvoiceGeneratorAction::UpdateItem { id: id.clone(), field, value });
        }
    };
    let value_of = {
        let id = id.clone();
        move |field: LineItemField| {
            let id = id.clone();
            move || {
                invoice.with(|s| {
                    s.items
                        .iter()
                        .find(|i| i.id == id)
                        .map(|i| match field {
                            LineItemField::ServiceType => i.service_type.clone(),
                            LineItemField::Price => i.price.clone(),
                            LineItemField::Description => i.description.clone(),
                        })
                        .unwrap_or_default()
                })
            }
        }
    };
    let update_type = update.clone();
    let update_price = update.clone();
    let update_description = update;

    view! {
        <div class="line-item">
            <div class="line-item__header">
                <h4>"Service " {position}</h4>
                <Show when=removable>
                    {
                        let id = id.clone();
                        view! {
                            <button
                                class=button_class(ButtonVariant::Ghost)
                                on:click=move |_| {
                                    dispatch(invoice, InvoiceGeneratorAction::RemoveItem(id.clone()));
                                }
                            >
                                "Remove"
                            </button>
                        }
                    }
                </Show>
            </div>
            <div class="form-grid">
                <label class="field">
                    <span class="field__label">"Service Type"</span>
                    <input
                        class="field__input"
                        placeholder="Service type"
                        prop:value=value_of(LineItemField::ServiceType)
                        on:input=move |ev| update_type(LineItemField::ServiceType, event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Price"</span>
                    <input
                        class="field__input"
                        type="number"
                        placeholder="0.00"
                        prop:value=value_of(LineItemField::Price)
                        on:input=move |ev| update_price(LineItemField::Price, event_target_value(&ev))
                    />
                </label>
            </div>
            <label class="field">
                <span class="field__label">"Description"</span>
                <textarea
                    class="field__input field__input--multiline"
                    rows=3
                    placeholder="Enter service description"
                    prop:value=value_of(LineItemField::Description)
                    on:input=move |ev| update_description(LineItemField::Description, event_target_value(&ev))
                ></textarea>
            </label>
        </div>
    }
}
