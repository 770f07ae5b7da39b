//! Notification feed with type tabs, read/delete actions, and delivery
//! preferences on the Settings tab.

use leptos::logging::log;
use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeTone};
use crate::components::button::{Button, ButtonVariant};
use crate::components::card::Card;
use crate::components::stat_card::StatCard;
use crate::components::tab_button::TabButton;
use crate::components::toggle::Toggle;
use crate::state::notifications::{
    Frequency, Notification, NotificationKind, NotificationTab, NotificationTopic, NotificationsAction,
    NotificationsState,
};
use crate::util::dispatch::dispatch;

const NO_FREQUENCY: &str = "Select frequency";

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Appointment => "📅",
        NotificationKind::Review => "★",
        NotificationKind::Setting => "⚙",
    }
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let count = move |f: fn(&NotificationsState) -> usize| move || notifications.with(f).to_string();

    view! {
        <div class="notifications-page">
            <div class="page-intro page-intro--with-action">
                <div>
                    <h2>
                        "Notifications "
                        <span class="pill pill--accent">
                            {move || notifications.with(NotificationsState::unread_count)} " Unread"
                        </span>
                    </h2>
                    <p>"Stay Update with your practice activities"</p>
                </div>
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |()| {
                        dispatch(notifications, NotificationsAction::MarkAllRead);
                    })
                >
                    "Mark all Read"
                </Button>
            </div>

            <div class="stat-grid">
                <StatCard
                    title="Total Notifications"
                    value=Signal::derive(count(|n| n.items.len()))
                    subtitle="All time"
                />
                <StatCard
                    title="Unread"
                    value=Signal::derive(count(NotificationsState::unread_count))
                    subtitle="Require Action"
                />
                <StatCard
                    title="Action Required"
                    value=Signal::derive(count(NotificationsState::action_required_count))
                    subtitle="Pending action"
                />
                <StatCard title="Today" value=Signal::derive(count(NotificationsState::today_count)) subtitle="New notification"/>
            </div>

            <div class="tabs" role="tablist">
                {NotificationTab::ALL
                    .into_iter()
                    .map(|tab| {
                        let label = Signal::derive(move || notifications.with(|n| n.tab_label(tab)));
                        view! {
                            <TabButton
                                label
                                active=Signal::derive(move || notifications.with(|n| n.active_tab == tab))
                                on_select=Callback::new(move |()| {
                                    dispatch(notifications, NotificationsAction::SelectTab(tab));
                                })
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show
                when=move || notifications.with(|n| n.active_tab != NotificationTab::Settings)
                fallback=move || view! { <PreferencesCard notifications/> }
            >
                <div class="notifications-page__feed">
                    <For
                        each=move || notifications.with(|n| n.visible().into_iter().cloned().collect::<Vec<_>>())
                        key=|n| (n.id.clone(), n.is_read)
                        children=move |notification| view! { <NotificationCard notification notifications/> }
                    />
                    <Show when=move || notifications.with(|n| n.visible().is_empty())>
                        <div class="empty-state">
                            <span class="empty-state__icon">"🔔"</span>
                            <h3>"No notifications"</h3>
                            <p>"You're all caught up!"</p>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn NotificationCard(notification: Notification, notifications: RwSignal<NotificationsState>) -> impl IntoView {
    let Notification { id, kind, title, description, timestamp, is_read, requires_action, category } = notification;
    let read_id = id.clone();

    let tag = if requires_action {
        Some(view! { <Badge tone=BadgeTone::Warning label="Action Required"/> }.into_any())
    } else {
        category.map(|c| view! { <Badge label=c/> }.into_any())
    };
    let mark_read = (!is_read && requires_action).then(move || {
        view! {
            <Button
                variant=ButtonVariant::Secondary
                on_click=Callback::new(move |()| {
                    dispatch(notifications, NotificationsAction::MarkRead(read_id.clone()));
                })
            >
                "✓ Mark Read"
            </Button>
        }
    });

    view! {
        <Card class="notification-card">
            <div class="notification-card__main" class:notification-card--unread=!is_read>
                <span class="notification-card__icon">{kind_icon(kind)}</span>
                <div class="notification-card__text">
                    <div class="notification-card__title-row">
                        <h3>{title}</h3>
                        <span class="notification-card__time">{timestamp}</span>
                    </div>
                    <div class="notification-card__tags">{tag}</div>
                    <p>{description}</p>
                </div>
            </div>
            <div class="notification-card__actions">
                {mark_read}
                <Button
                    variant=ButtonVariant::Ghost
                    on_click=Callback::new(move |()| {
                        dispatch(notifications, NotificationsAction::Delete(id.clone()));
                    })
                >
                    "✕ Delete"
                </Button>
            </div>
        </Card>
    }
}

#[component]
fn PreferencesCard(notifications: RwSignal<NotificationsState>) -> impl IntoView {
    let save = Callback::new(move |()| {
        let prefs = notifications.with_untracked(|n| n.preferences);
        let json = serde_json::to_string(&prefs).unwrap_or_else(|_| format!("{prefs:?}"));
        log!("notification preferences saved {json}");
    });

    view! {
        <Card>
            <div class="card__header">
                <h3>"👤 Notifications Preference"</h3>
            </div>
            <div class="card__body">
                {NotificationTopic::ALL
                    .into_iter()
                    .map(|topic| {
                        view! {
                            <Toggle
                                title=topic.title()
                                description=topic.description()
                                checked=Signal::derive(move || notifications.with(|n| n.preferences.enabled(topic)))
                                on_toggle=Callback::new(move |()| {
                                    dispatch(notifications, NotificationsAction::TogglePreference(topic));
                                })
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
                <label class="field">
                    <span class="field__label">"Notification Frequency"</span>
                    <select
                        class="field__input"
                        prop:value=move || {
                            notifications.with(|n| n.preferences.frequency.map_or(NO_FREQUENCY, Frequency::label))
                        }
                        on:change=move |ev| {
                            let frequency = Frequency::from_label(&event_target_value(&ev));
                            dispatch(notifications, NotificationsAction::SetFrequency(frequency));
                        }
                    >
                        <option value=NO_FREQUENCY>{NO_FREQUENCY}</option>
                        {Frequency::ALL
                            .into_iter()
                            .map(|f| view! { <option value=f.label()>{f.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <Button on_click=save>"Save Preference"</Button>
            </div>
        </Card>
    }
}
