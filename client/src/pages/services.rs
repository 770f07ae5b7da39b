//! Service catalogue: stats, per-service emergency toggle, add-service dialog.

use leptos::logging::log;
use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeTone};
use crate::components::button::{Button, ButtonVariant};
use crate::components::card::Card;
use crate::components::modal::Modal;
use crate::components::stat_card::StatCard;
use crate::components::text_input::{TextArea, TextInput};
use crate::components::toggle::Toggle;
use crate::state::services::{SERVICE_CATEGORIES, Service, ServiceDraft, ServicesAction, ServicesState};
use crate::util::dispatch::dispatch;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let services = expect_context::<RwSignal<ServicesState>>();
    let show_add = RwSignal::new(false);

    view! {
        <div class="services-page">
            <div class="page-intro page-intro--with-action">
                <div>
                    <h2>"My Services"</h2>
                    <p>"Manage your pet care services and pricing"</p>
                </div>
                <Button on_click=Callback::new(move |()| show_add.set(true))>"+ Add New Service"</Button>
            </div>

            <div class="stat-grid stat-grid--three">
                <StatCard
                    title="Total Services"
                    value=Signal::derive(move || services.with(ServicesState::total).to_string())
                    subtitle="Active services"
                />
                <StatCard
                    title="Average Price"
                    value=Signal::derive(move || format!("${}", services.with(ServicesState::average_price)))
                    subtitle="Per service"
                />
                <StatCard
                    title="Emergency Services"
                    value=Signal::derive(move || services.with(ServicesState::emergency_count).to_string())
                    subtitle="Available 24/7"
                />
            </div>

            <div class="services-page__grid">
                <For
                    each=move || services.get().items
                    key=|s| (s.id.clone(), s.emergency_available)
                    children=move |service| view! { <ServiceCard service state=services/> }
                />
            </div>

            <Show when=move || show_add.get()>
                <AddServiceDialog services on_close=Callback::new(move |()| show_add.set(false))/>
            </Show>
        </div>
    }
}

#[component]
fn ServiceCard(service: Service, state: RwSignal<ServicesState>) -> impl IntoView {
    let Service { id, name, category, description, price, duration, emergency_available, is_emergency } = service;
    let edit_name = name.clone();

    view! {
        <Card class="service-card">
            <div class="service-card__header">
                <h3>{name}</h3>
                {is_emergency.then(|| view! { <Badge tone=BadgeTone::Danger label="Emergency"/> })}
            </div>
            <Badge label=category/>
            <p class="service-card__description">{description}</p>
            <div class="service-card__meta">
                <span class="service-card__price">{format!("${price}")}</span>
                <span class="service-card__duration">{format!("🕒 {duration} min")}</span>
            </div>
            <div class="service-card__footer">
                <Toggle
                    title="Emergency Available"
                    checked=Signal::derive(move || emergency_available)
                    on_toggle=Callback::new(move |()| {
                        dispatch(state, ServicesAction::ToggleEmergency(id.clone()));
                    })
                />
                <Button on_click=Callback::new(move |()| log!("edit service: {edit_name}"))>"Edit Service"</Button>
            </div>
        </Card>
    }
}

#[component]
fn AddServiceDialog(services: RwSignal<ServicesState>, on_close: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let duration = RwSignal::new(String::new());
    let category = RwSignal::new(SERVICE_CATEGORIES[0].to_owned());
    let emergency = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let draft = ServiceDraft {
            name: name.get_untracked(),
            description: description.get_untracked(),
            price: price.get_untracked(),
            duration: duration.get_untracked(),
            emergency_available: emergency.get_untracked(),
            category: category.get_untracked(),
        };
        if dispatch(services, ServicesAction::Add(draft)) {
            on_close.run(());
        }
    });

    view! {
        <Modal title="Add New Service" on_close>
            <div class="dialog__body">
                <TextInput label="Service Title" value=name placeholder="Enter Service Title"/>
                <TextArea label="Description" value=description placeholder="Describe your service"/>
                <label class="field">
                    <span class="field__label">"Category"</span>
                    <select
                        class="field__input"
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        {SERVICE_CATEGORIES
                            .into_iter()
                            .map(|c| view! { <option value=c>{c}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <div class="field-row">
                    <TextInput label="Price ($)" value=price placeholder="0" input_type="number"/>
                    <TextInput label="Duration (minutes)" value=duration placeholder="30" input_type="number"/>
                </div>
                <Toggle
                    title="Available for emergencies"
                    checked=Signal::derive(move || emergency.get())
                    on_toggle=Callback::new(move |()| emergency.update(|on| *on = !*on))
                />
            </div>
            <div class="dialog__actions">
                <Button variant=ButtonVariant::Secondary on_click=on_close>"Cancel"</Button>
                <Button on_click=submit>"Add Service"</Button>
            </div>
        </Modal>
    }
}
