//! Billing: revenue summary, invoice list with mark-paid, quick invoice
//! dialog, fee settings, and accepted payment channels.

use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::badge::{Badge, BadgeTone};
use crate::components::button::{Button, ButtonVariant, button_class};
use crate::components::card::Card;
use crate::components::modal::Modal;
use crate::components::stat_card::StatCard;
use crate::components::tab_button::TabButton;
use crate::components::text_input::TextInput;
use crate::components::toggle::Toggle;
use crate::routes::AppRoute;
use crate::state::billing::{
    BillingAction, BillingState, BillingTab, FeeDraft, Invoice, InvoiceDraft, InvoiceStatus, PaymentChannel,
    PaymentMethod,
};
use crate::util::clock::today_iso;
use crate::util::dispatch::dispatch;
use crate::util::money::format_money;

#[component]
pub fn BillingPage() -> impl IntoView {
    let billing = expect_context::<RwSignal<BillingState>>();
    let navigate = use_navigate();
    let show_create = RwSignal::new(false);

    let open_generator = move |_: leptos::ev::MouseEvent| {
        navigate(AppRoute::GenerateInvoice.path(), NavigateOptions::default());
    };
    let tab = move |t: BillingTab| billing.with(|b| b.active_tab == t);

    view! {
        <div class="billing-page">
            <div class="page-intro page-intro--with-action">
                <div>
                    <h2>"Billing & Payments"</h2>
                    <p>"Manage invoices, payment and billing setting"</p>
                </div>
                <div class="page-intro__actions">
                    <Button variant=ButtonVariant::Secondary on_click=Callback::new(move |()| show_create.set(true))>
                        "+ Quick Invoice"
                    </Button>
                    <button class=button_class(ButtonVariant::Primary) on:click=open_generator>
                        "📄 Create Invoice"
                    </button>
                </div>
            </div>

            <div class="stat-grid stat-grid--three">
                <StatCard
                    title="Total Revenue"
                    value=Signal::derive(move || format_money(billing.with(BillingState::total_revenue)))
                    subtitle="This month"
                />
                <StatCard
                    title="Paid Invoices"
                    value=Signal::derive(move || billing.with(BillingState::paid_count).to_string())
                    subtitle=Signal::derive(move || billing.with(|b| format!("Out of {} total", b.invoices.len())))
                />
                <StatCard
                    title="Pending Amount"
                    value=Signal::derive(move || format_money(billing.with(BillingState::pending_amount)))
                    subtitle="Awaiting payment"
                />
            </div>

            <div class="tabs" role="tablist">
                <TabButton
                    label="Invoices & Payments"
                    active=Signal::derive(move || tab(BillingTab::Invoices))
                    on_select=Callback::new(move |()| {
                        dispatch(billing, BillingAction::SelectTab(BillingTab::Invoices));
                    })
                />
                <TabButton
                    label="Billing Setting"
                    active=Signal::derive(move || tab(BillingTab::Settings))
                    on_select=Callback::new(move |()| {
                        dispatch(billing, BillingAction::SelectTab(BillingTab::Settings));
                    })
                />
            </div>

            <Show when=move || tab(BillingTab::Invoices) fallback=move || view! { <BillingSettings billing/> }>
                <div class="billing-page__invoices">
                    <For
                        each=move || billing.get().invoices
                        key=|i| (i.id.clone(), i.status)
                        children=move |invoice| view! { <InvoiceCard invoice billing/> }
                    />
                </div>
            </Show>

            <Show when=move || show_create.get()>
                <CreateInvoiceDialog billing on_close=Callback::new(move |()| show_create.set(false))/>
            </Show>
        </div>
    }
}

#[component]
fn InvoiceCard(invoice: Invoice, billing: RwSignal<BillingState>) -> impl IntoView {
    let Invoice { id, date, pet, owner, service, payment, amount, tax, total, status } = invoice;
    let pdf_id = id.clone();
    let email_id = id.clone();
    let paid_id = id.clone();
    let status_label = match status {
        InvoiceStatus::Paid => "✓ Paid",
        InvoiceStatus::Unpaid => "Unpaid",
    };

    view! {
        <Card class="invoice-card">
            <div class="invoice-card__header">
                <div>
                    <h3>{id}</h3>
                    <p>{date}</p>
                </div>
                <Badge tone=BadgeTone::from(status) label=status_label/>
            </div>
            <dl class="invoice-card__fields">
                <dt>"Pet:"</dt>
                <dd>{pet}</dd>
                <dt>"Owner:"</dt>
                <dd>{owner}</dd>
                <dt>"Service:"</dt>
                <dd>{service}</dd>
                <dt>"Payment:"</dt>
                <dd>{payment.label()}</dd>
            </dl>
            <dl class="invoice-card__totals">
                <dt>"Amount:"</dt>
                <dd>{format_money(amount)}</dd>
                <dt>"Tax:"</dt>
                <dd>{format_money(tax)}</dd>
                <dt class="invoice-card__total">"Total:"</dt>
                <dd class="invoice-card__total">{format_money(total)}</dd>
            </dl>
            <div class="invoice-card__actions">
                <Button variant=ButtonVariant::Ghost on_click=Callback::new(move |()| log!("download pdf for {pdf_id}"))>
                    "⭳ PDF"
                </Button>
                <Button variant=ButtonVariant::Ghost on_click=Callback::new(move |()| log!("email invoice {email_id}"))>
                    "✉ Email"
                </Button>
                {(status == InvoiceStatus::Unpaid)
                    .then(move || {
                        view! {
                            <button class="btn btn--success" on:click=move |_| {
                                dispatch(billing, BillingAction::MarkPaid(paid_id.clone()));
                            }>
                                "Mark Paid"
                            </button>
                        }
                    })}
            </div>
        </Card>
    }
}

#[component]
fn BillingSettings(billing: RwSignal<BillingState>) -> impl IntoView {
    let initial = FeeDraft::from(billing.with_untracked(|b| b.fees));
    let consultation_fee = RwSignal::new(initial.consultation_fee);
    let tax_rate = RwSignal::new(initial.tax_rate);
    let default_discount = RwSignal::new(initial.default_discount);

    let save = Callback::new(move |()| {
        let draft = FeeDraft {
            consultation_fee: consultation_fee.get_untracked(),
            tax_rate: tax_rate.get_untracked(),
            default_discount: default_discount.get_untracked(),
        };
        dispatch(billing, BillingAction::SaveFees(draft));
    });

    view! {
        <div class="billing-page__settings">
            <Card>
                <div class="card__header">
                    <h3>"$ Fee Setting"</h3>
                </div>
                <div class="card__body">
                    <TextInput label="Default Consultation Fees ($)" value=consultation_fee input_type="number"/>
                    <TextInput label="Tax Rate (%)" value=tax_rate input_type="number"/>
                    <TextInput label="Default Discount (%)" value=default_discount input_type="number"/>
                    <Button on_click=save>"Save Setting"</Button>
                </div>
            </Card>

            <Card>
                <div class="card__header">
                    <h3>"💳 Payment Methods"</h3>
                </div>
                <div class="card__body">
                    {PaymentChannel::ALL
                        .into_iter()
                        .map(|channel| {
                            view! {
                                <Toggle
                                    title=channel.label()
                                    checked=Signal::derive(move || billing.with(|b| b.channels.enabled(channel)))
                                    on_toggle=Callback::new(move |()| {
                                        dispatch(billing, BillingAction::TogglePaymentChannel(channel));
                                    })
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Card>
        </div>
    }
}

#[component]
fn CreateInvoiceDialog(billing: RwSignal<BillingState>, on_close: Callback<()>) -> impl IntoView {
    let pet = RwSignal::new(String::new());
    let owner = RwSignal::new(String::new());
    let service = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let payment = RwSignal::new(PaymentMethod::default());

    let submit = Callback::new(move |()| {
        let draft = InvoiceDraft {
            pet: pet.get_untracked(),
            owner: owner.get_untracked(),
            service: service.get_untracked(),
            amount: amount.get_untracked(),
            payment: payment.get_untracked(),
        };
        if dispatch(billing, BillingAction::Create { draft, today: today_iso() }) {
            on_close.run(());
        }
    });

    view! {
        <Modal title="Create Invoice" on_close>
            <div class="dialog__body">
                <TextInput label="Pet Name" value=pet placeholder="Enter pet name"/>
                <TextInput label="Owner Name" value=owner placeholder="Enter owner name"/>
                <TextInput label="Service" value=service placeholder="Enter service"/>
                <TextInput label="Amount ($)" value=amount placeholder="0.00" input_type="number"/>
                <label class="field">
                    <span class="field__label">"Payment Method"</span>
                    <select
                        class="field__input"
                        prop:value=move || payment.get().label()
                        on:change=move |ev| {
                            if let Some(method) = PaymentMethod::from_label(&event_target_value(&ev)) {
                                payment.set(method);
                            }
                        }
                    >
                        {PaymentMethod::ALL
                            .into_iter()
                            .map(|m| view! { <option value=m.label()>{m.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </div>
            <div class="dialog__actions">
                <Button variant=ButtonVariant::Secondary on_click=on_close>"Cancel"</Button>
                <Button on_click=submit>"Create Invoice"</Button>
            </div>
        </Modal>
    }
}
