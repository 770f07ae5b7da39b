//! Account settings: password change, contact preferences, language and
//! region, and privacy switches.

use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::card::Card;
use crate::components::tab_button::TabButton;
use crate::components::toggle::Toggle;
use crate::state::notifications::Frequency;
use crate::state::settings::{
    LanguageField, PasswordForm, SettingsAction, SettingsState, SettingsTab, SettingsToggle, validate_password_change,
};
use crate::util::dispatch::dispatch;

fn tab_icon(tab: SettingsTab) -> &'static str {
    match tab {
        SettingsTab::Password => "🔒",
        SettingsTab::Notifications => "🔔",
        SettingsTab::Language => "🌐",
        SettingsTab::Privacy => "🛡",
    }
}

fn language_label(field: LanguageField) -> (&'static str, &'static str) {
    match field {
        LanguageField::Language => ("Display Language", "Select language"),
        LanguageField::Timezone => ("Timezone", "Select timezone"),
        LanguageField::DateFormat => ("Date Format", "Select date format"),
        LanguageField::TimeFormat => ("Time Format", "Select time format"),
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let active = move || settings.with(|s| s.active_tab);

    view! {
        <div class="settings-page">
            <div class="page-intro">
                <h2>"Settings"</h2>
                <p>"Manage your account and application preferences"</p>
            </div>

            <div class="tabs" role="tablist">
                {SettingsTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <TabButton
                                label=format!("{} {}", tab_icon(tab), tab.label())
                                active=Signal::derive(move || active() == tab)
                                on_select=Callback::new(move |()| {
                                    dispatch(settings, SettingsAction::SelectTab(tab));
                                })
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Card class="settings-page__panel">
                {move || match active() {
                    SettingsTab::Password => view! { <PasswordPanel/> }.into_any(),
                    SettingsTab::Notifications => view! { <ContactPanel settings/> }.into_any(),
                    SettingsTab::Language => view! { <LanguagePanel settings/> }.into_any(),
                    SettingsTab::Privacy => view! { <PrivacyPanel settings/> }.into_any(),
                }}
            </Card>
        </div>
    }
}

#[component]
fn PasswordField(label: &'static str, placeholder: &'static str, value: RwSignal<String>) -> impl IntoView {
    let visible = RwSignal::new(false);
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <div class="field__with-action">
                <input
                    class="field__input"
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="field__action"
                    title=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "🙈" } else { "👁" }}
                </button>
            </div>
        </label>
    }
}

#[component]
fn PasswordPanel() -> impl IntoView {
    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let form = PasswordForm { current: current.get_untracked(), new: new.get_untracked(), confirm: confirm.get_untracked() };
        match validate_password_change(&form) {
            Ok(()) => {
                log!("password update requested");
                current.set(String::new());
                new.set(String::new());
                confirm.set(String::new());
            }
            Err(err) => warn!("password not updated: {err}"),
        }
    });

    view! {
        <div class="settings-panel">
            <h3>"🔒 Change Password"</h3>
            <PasswordField label="Current Password" placeholder="Enter current password" value=current/>
            <div class="form-grid">
                <PasswordField label="New Password" placeholder="Enter new password" value=new/>
                <PasswordField label="Confirm New Password" placeholder="Confirm new password" value=confirm/>
            </div>
            <div class="settings-panel__note">
                <h4>"Password Requirements"</h4>
                <ul>
                    <li>"At least 8 characters long"</li>
                    <li>"Contains uppercase and lowercase letter"</li>
                    <li>"Contains at least one number"</li>
                    <li>"Contains at least one special character"</li>
                </ul>
            </div>
            <Button on_click=submit>"Update Password"</Button>
        </div>
    }
}

fn toggle_list(settings: RwSignal<SettingsState>, toggles: [SettingsToggle; 4]) -> impl IntoView {
    toggles
        .into_iter()
        .map(|toggle| {
            view! {
                <Toggle
                    title=toggle.title()
                    description=toggle.description()
                    checked=Signal::derive(move || settings.with(|s| s.enabled(toggle)))
                    on_toggle=Callback::new(move |()| {
                        dispatch(settings, SettingsAction::Toggle(toggle));
                    })
                />
            }
        })
        .collect::<Vec<_>>()
}

fn log_saved<T: serde::Serialize + std::fmt::Debug>(what: &str, value: &T) {
    let json = serde_json::to_string(value).unwrap_or_else(|_| format!("{value:?}"));
    log!("{what} saved {json}");
}

#[component]
fn ContactPanel(settings: RwSignal<SettingsState>) -> impl IntoView {
    let save = Callback::new(move |()| {
        let prefs = settings.with_untracked(|s| {
            (
                SettingsToggle::CONTACT.map(|t| (t, s.enabled(t))),
                s.frequency,
            )
        });
        log_saved("contact preferences", &prefs);
    });

    view! {
        <div class="settings-panel">
            <h3>"🔔 Notifications Preference"</h3>
            {toggle_list(settings, SettingsToggle::CONTACT)}
            <label class="field">
                <span class="field__label">"Notification Frequency"</span>
                <select
                    class="field__input"
                    prop:value=move || settings.with(|s| s.frequency.map_or("", Frequency::label))
                    on:change=move |ev| {
                        let frequency = Frequency::from_label(&event_target_value(&ev));
                        dispatch(settings, SettingsAction::SetFrequency(frequency));
                    }
                >
                    <option value="">"Select frequency"</option>
                    {Frequency::ALL
                        .into_iter()
                        .map(|f| view! { <option value=f.label()>{f.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <Button on_click=save>"Save Preference"</Button>
        </div>
    }
}

#[component]
fn LanguagePanel(settings: RwSignal<SettingsState>) -> impl IntoView {
    let save = Callback::new(move |()| log_saved("language settings", &settings.with_untracked(|s| s.language.clone())));

    let select = move |field: LanguageField| {
        let (label, placeholder) = language_label(field);
        view! {
            <label class="field">
                <span class="field__label">{label}</span>
                <select
                    class="field__input"
                    prop:value=move || settings.with(|s| s.language_value(field).unwrap_or_default().to_owned())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let value = (!value.is_empty()).then_some(value);
                        dispatch(settings, SettingsAction::SetLanguage(field, value));
                    }
                >
                    <option value="">{placeholder}</option>
                    {field
                        .options()
                        .iter()
                        .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
        }
    };

    view! {
        <div class="settings-panel">
            <h3>"🌐 Language & Region Setting"</h3>
            {select(LanguageField::Language)}
            {select(LanguageField::Timezone)}
            <div class="form-grid">
                {select(LanguageField::DateFormat)}
                {select(LanguageField::TimeFormat)}
            </div>
            <Button on_click=save>"Save Language Setting"</Button>
        </div>
    }
}

#[component]
fn PrivacyPanel(settings: RwSignal<SettingsState>) -> impl IntoView {
    let save = Callback::new(move |()| {
        let privacy = settings.with_untracked(|s| SettingsToggle::PRIVACY.map(|t| (t, s.enabled(t))));
        log_saved("privacy settings", &privacy);
    });

    view! {
        <div class="settings-panel">
            <h3>"🛡 Privacy Settings"</h3>
            {toggle_list(settings, SettingsToggle::PRIVACY)}
            <Button on_click=save>"Update Privacy Settings"</Button>
        </div>
    }
}
