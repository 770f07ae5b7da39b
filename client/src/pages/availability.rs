//! Availability: weekly overview, today's slots, blocked dates, booking
//! settings, and the add-slot dialog.

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeTone};
use crate::components::button::{Button, ButtonVariant};
use crate::components::card::Card;
use crate::components::modal::Modal;
use crate::components::stat_card::StatCard;
use crate::components::text_input::TextInput;
use crate::components::toggle::Toggle;
use crate::state::availability::{
    AvailabilityAction, AvailabilityState, DEFAULT_SLOT_END, DEFAULT_SLOT_START, SlotDraft, SlotStatus, Weekday,
};
use crate::util::dispatch::dispatch;

fn slot_class(status: SlotStatus) -> &'static str {
    match status {
        SlotStatus::Available => "slot slot--available",
        SlotStatus::Booked => "slot slot--booked",
        SlotStatus::Unavailable => "slot slot--unavailable",
    }
}

#[component]
pub fn AvailabilityPage() -> impl IntoView {
    let availability = expect_context::<RwSignal<AvailabilityState>>();
    let show_add = RwSignal::new(false);
    let block_label = RwSignal::new(String::new());

    let status_label = move || {
        if availability.with(|a| a.is_available) { "Available" } else { "Unavailable" }
    };

    let on_block = Callback::new(move |()| {
        if dispatch(availability, AvailabilityAction::BlockDate(block_label.get_untracked())) {
            block_label.set(String::new());
        }
    });

    view! {
        <div class="availability-page">
            <div class="page-intro page-intro--with-action">
                <div>
                    <h2>"Availability"</h2>
                    <p>"Manage your schedule and time slots"</p>
                </div>
                <Toggle
                    title="Available"
                    checked=Signal::derive(move || availability.with(|a| a.is_available))
                    on_toggle=Callback::new(move |()| {
                        dispatch(availability, AvailabilityAction::ToggleAvailable);
                    })
                />
            </div>

            <div class="stat-grid">
                <StatCard
                    title="Today's slots"
                    value=Signal::derive(move || availability.with(AvailabilityState::slot_count).to_string())
                    subtitle="Available"
                />
                <StatCard
                    title="Booked"
                    value=Signal::derive(move || {
                        availability.with(|a| a.count_with_status(SlotStatus::Booked)).to_string()
                    })
                    subtitle="Appointment"
                />
                <StatCard title="Status" value=Signal::derive(move || status_label().to_owned()) subtitle="Current status"/>
                <StatCard
                    title="Emergency"
                    value=Signal::derive(move || {
                        let label = if availability.with(|a| a.allow_urgent) { "Available" } else { "Off" };
                        label.to_owned()
                    })
                    subtitle=availability.with_untracked(|a| format!("{} - {}", a.emergency_start, a.emergency_end))
                />
            </div>

            <div class="availability-page__columns">
                <Card>
                    <div class="card__header">
                        <h3>"📅 This Week"</h3>
                    </div>
                    <div class="card__body">
                        {move || {
                            availability
                                .with(|a| a.week.clone())
                                .into_iter()
                                .map(|day| {
                                    let added = availability.with(|a| a.added_for(day.day));
                                    view! {
                                        <div class="week-day">
                                            <div>
                                                <p class="week-day__name">{day.day.label()}</p>
                                                <p class="week-day__date">{day.date}</p>
                                            </div>
                                            {(added > 0)
                                                .then(|| view! { <span class="week-day__added">{format!("+{added} slots")}</span> })}
                                            <Badge tone=BadgeTone::from(day.status) label=day.status.label()/>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Card>

                <Card>
                    <div class="card__header">
                        <h3>"🕐 Today's Schedule"</h3>
                        <Button on_click=Callback::new(move |()| show_add.set(true))>"Add Slot"</Button>
                    </div>
                    <div class="card__body">
                        <div class="slot-grid">
                            {move || {
                                availability
                                    .with(|a| a.today_slots.clone())
                                    .into_iter()
                                    .map(|slot| {
                                        view! {
                                            <div class=slot_class(slot.status) title=slot.status.label()>
                                                {slot.time}
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                        <div class="slot-legend">
                            {[SlotStatus::Available, SlotStatus::Booked, SlotStatus::Unavailable]
                                .into_iter()
                                .map(|status| view! { <Badge tone=BadgeTone::from(status) label=status.label()/> })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </Card>

                <div class="availability-page__side">
                    <Card>
                        <div class="card__header">
                            <h3>"Block/Unblock date"</h3>
                        </div>
                        <div class="card__body">
                            <p class="card__hint">
                                "Select dates to block from booking. Click selected dates to unblock them."
                            </p>
                            <div class="blocked-dates">
                                {move || {
                                    availability
                                        .with(|a| a.blocked_dates.clone())
                                        .into_iter()
                                        .map(|label| {
                                            let target = label.clone();
                                            view! {
                                                <button
                                                    class="badge badge--warning blocked-dates__chip"
                                                    title="Unblock"
                                                    on:click=move |_| {
                                                        dispatch(availability, AvailabilityAction::UnblockDate(target.clone()));
                                                    }
                                                >
                                                    {format!("{label} ✕")}
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                            <div class="field-row">
                                <TextInput label="Block Date" value=block_label placeholder="Dec 31"/>
                                <Button variant=ButtonVariant::Secondary on_click=on_block>"Block"</Button>
                            </div>
                        </div>
                    </Card>

                    <Card>
                        <div class="card__header">
                            <h3>"Booking Setting"</h3>
                        </div>
                        <div class="card__body">
                            <Toggle
                                title="Auto Block When Booked"
                                description="Automatically mark time slots as unavailable when booked"
                                checked=Signal::derive(move || availability.with(|a| a.auto_block))
                                on_toggle=Callback::new(move |()| {
                                    dispatch(availability, AvailabilityAction::ToggleAutoBlock);
                                })
                            />
                            <Toggle
                                title="Allow Urgent Booking"
                                description="Accept emergency bookings outside regular hours"
                                checked=Signal::derive(move || availability.with(|a| a.allow_urgent))
                                on_toggle=Callback::new(move |()| {
                                    dispatch(availability, AvailabilityAction::ToggleAllowUrgent);
                                })
                            />
                            <div class="emergency-hours">
                                <p class="emergency-hours__title">"Emergency Hours"</p>
                                <div class="emergency-hours__row">
                                    <div>
                                        <p>"Start Time"</p>
                                        <p class="emergency-hours__time">
                                            {move || availability.with(|a| a.emergency_start.clone())}
                                        </p>
                                    </div>
                                    <div>
                                        <p>"End Time"</p>
                                        <p class="emergency-hours__time">
                                            {move || availability.with(|a| a.emergency_end.clone())}
                                        </p>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </Card>
                </div>
            </div>

            <Show when=move || show_add.get()>
                <AddSlotDialog availability on_close=Callback::new(move |()| show_add.set(false))/>
            </Show>
        </div>
    }
}

#[component]
fn AddSlotDialog(availability: RwSignal<AvailabilityState>, on_close: Callback<()>) -> impl IntoView {
    let day = RwSignal::new(String::new());
    let start = RwSignal::new(DEFAULT_SLOT_START.to_owned());
    let end = RwSignal::new(DEFAULT_SLOT_END.to_owned());
    let mark_available = RwSignal::new(true);

    let save = Callback::new(move |()| {
        let draft = SlotDraft {
            day: Weekday::from_value(&day.get_untracked()),
            start: start.get_untracked(),
            end: end.get_untracked(),
            mark_available: mark_available.get_untracked(),
        };
        if dispatch(availability, AvailabilityAction::AddSlot(draft)) {
            on_close.run(());
        }
    });

    view! {
        <Modal title="Add New Time Slot" on_close>
            <div class="dialog__body">
                <label class="field">
                    <span class="field__label">"Select Day"</span>
                    <select
                        class="field__input"
                        prop:value=move || day.get()
                        on:change=move |ev| day.set(event_target_value(&ev))
                    >
                        <option value="">"Choose a day"</option>
                        {Weekday::ALL
                            .into_iter()
                            .map(|d| view! { <option value=d.value()>{d.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <div class="field-row">
                    <TextInput label="Start time" value=start/>
                    <TextInput label="End Time" value=end/>
                </div>
                <Toggle
                    title="Mark as Available"
                    checked=Signal::derive(move || mark_available.get())
                    on_toggle=Callback::new(move |()| mark_available.update(|on| *on = !*on))
                />
            </div>
            <div class="dialog__actions">
                <Button variant=ButtonVariant::Secondary on_click=on_close>"Cancel"</Button>
                <Button on_click=save>"Save Slot"</Button>
            </div>
        </Modal>
    }
}
