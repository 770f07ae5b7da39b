//! Appointment list with status tabs, search, and accept/decline/complete.

use leptos::logging::log;
use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::badge::{Badge, BadgeTone};
use crate::components::tab_button::TabButton;
use crate::state::appointments::{Appointment, AppointmentStatus, AppointmentsAction, AppointmentsState};
use crate::util::dispatch::dispatch;

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let appointments = expect_context::<RwSignal<AppointmentsState>>();

    let visible = move || appointments.with(|s| s.visible().into_iter().cloned().collect::<Vec<_>>());
    let is_empty = move || appointments.with(|s| s.visible().is_empty());

    view! {
        <div class="appointments-page">
            <div class="page-intro">
                <h2>"Appointments"</h2>
                <p>"Manage your pet care appointments"</p>
            </div>

            <input
                class="search-input"
                type="search"
                placeholder="Search by pet name or owner"
                prop:value=move || appointments.with(|s| s.search.clone())
                on:input=move |ev| {
                    dispatch(appointments, AppointmentsAction::SetSearch(event_target_value(&ev)));
                }
            />

            <div class="tabs" role="tablist">
                {AppointmentStatus::ALL
                    .into_iter()
                    .map(|status| {
                        view! {
                            <TabButton
                                label=status.label()
                                active=Signal::derive(move || appointments.with(|s| s.active_tab == status))
                                count=Signal::derive(move || appointments.with(|s| s.tab_count(status)))
                                on_select=Callback::new(move |()| {
                                    dispatch(appointments, AppointmentsAction::SelectTab(status));
                                })
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="appointments-page__list">
                <For
                    each=visible
                    key=|a| (a.id, a.status)
                    children=move |appointment| view! { <AppointmentCard appointment=appointment state=appointments/> }
                />
                <Show when=is_empty>
                    <p class="empty-state">"No appointments found."</p>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn AppointmentCard(appointment: Appointment, state: RwSignal<AppointmentsState>) -> impl IntoView {
    let Appointment { id, pet_name, breed, owner_name, date, time, emergency, status, cancel_reason } = appointment;
    let avatar_name = pet_name.clone();
    let chat_pet = pet_name.clone();
    let profile_pet = pet_name.clone();

    let actions = match status {
        AppointmentStatus::Request => view! {
            <button class="btn btn--primary" on:click=move |_| {
                dispatch(state, AppointmentsAction::Accept(id));
            }>
                "Accept"
            </button>
            <button class="btn btn--secondary" on:click=move |_| {
                dispatch(state, AppointmentsAction::Decline(id));
            }>
                "Decline"
            </button>
        }
        .into_any(),
        AppointmentStatus::Upcoming => view! {
            <button class="btn btn--secondary" on:click=move |_| log!("open chat with owner of {chat_pet}")>
                "💬 Chat"
            </button>
            <button class="btn btn--success" on:click=move |_| {
                dispatch(state, AppointmentsAction::Complete(id));
            }>
                "✔ Complete"
            </button>
        }
        .into_any(),
        AppointmentStatus::Past => view! { <Badge tone=BadgeTone::Success label="✔ Completed"/> }.into_any(),
        AppointmentStatus::Canceled => view! {
            <div class="appointment-card__canceled">
                <div class="appointment-card__canceled-title">"Canceled"</div>
                <div>{format!("Reason: {}", cancel_reason.unwrap_or_default())}</div>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="appointment-card">
            <div class="appointment-card__main">
                <Avatar name=avatar_name/>
                <div class="appointment-card__details">
                    <div class="appointment-card__name">
                        <h3>{pet_name}</h3>
                        {emergency.then(|| view! { <Badge tone=BadgeTone::Danger label="Emergency"/> })}
                    </div>
                    <p>{breed}</p>
                    <p>"👤 " {owner_name}</p>
                    <p>"📅 " {date}</p>
                    <p>"🕒 " {time}</p>
                    {(status == AppointmentStatus::Upcoming)
                        .then(move || {
                            view! {
                                <button class="link-button" on:click=move |_| log!("view pet profile: {profile_pet}")>
                                    "View Pet Profile"
                                </button>
                            }
                        })}
                </div>
            </div>
            <div class="appointment-card__actions">{actions}</div>
        </div>
    }
}
