//! Landing page: headline metrics, today's schedule, quick actions, and the
//! latest reviews.

use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::avatar::Avatar;
use crate::components::badge::{Badge, BadgeTone};
use crate::components::card::Card;
use crate::components::star_rating::StarRating;
use crate::components::stat_card::StatCard;
use crate::routes::AppRoute;
use crate::state::dashboard::{DashboardState, ReviewSnippet, ScheduleEntry};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let navigate = use_navigate();

    let go = |route: AppRoute| {
        let navigate = navigate.clone();
        move |_: leptos::ev::MouseEvent| navigate(route.path(), NavigateOptions::default())
    };
    let view_all = go(AppRoute::Appointments);
    let new_appointment = go(AppRoute::Appointments);
    let set_availability = go(AppRoute::Availability);
    let view_reviews = go(AppRoute::Reviews);

    let state = dashboard.get_untracked();

    view! {
        <div class="dashboard-page">
            <div class="page-intro">
                <h2>{format!("Welcome Back, {}! 👋", state.practitioner)}</h2>
                <p>"Here's what's happening with your practice today."</p>
            </div>

            <div class="stat-grid">
                {state
                    .metrics
                    .into_iter()
                    .map(|m| {
                        view! {
                            <StatCard
                                title=m.title
                                value=Signal::derive(move || m.value.clone())
                                subtitle=m.subtitle
                                trend=m.trend
                                badge=m.badge
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="dashboard-page__columns">
                <Card class="dashboard-page__schedule">
                    <div class="card__header">
                        <h3>"Today's Schedule"</h3>
                        <button class="btn btn--secondary" on:click=view_all>
                            "View All"
                        </button>
                    </div>
                    <div class="card__body">
                        {state.schedule.into_iter().map(|entry| view! { <ScheduleRow entry/> }).collect::<Vec<_>>()}
                    </div>
                </Card>

                <div class="dashboard-page__side">
                    <Card>
                        <div class="card__header">
                            <h3>"Quick Actions"</h3>
                        </div>
                        <div class="card__body quick-actions">
                            <button class="btn btn--primary" on:click=new_appointment>
                                "📅 New Appointment"
                            </button>
                            <button class="btn btn--primary" on:click=set_availability>
                                "🕒 Set Availability"
                            </button>
                            <button class="btn btn--primary" on:click=view_reviews>
                                "★ View Reviews"
                            </button>
                        </div>
                    </Card>

                    <Card>
                        <div class="card__header">
                            <h3>"Recent Reviews"</h3>
                        </div>
                        <div class="card__body">
                            {state
                                .recent_reviews
                                .into_iter()
                                .map(|review| view! { <ReviewSnippetRow review/> })
                                .collect::<Vec<_>>()}
                        </div>
                    </Card>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ScheduleRow(entry: ScheduleEntry) -> impl IntoView {
    let ScheduleEntry { pet_name, owner_name, service, time, emergency } = entry;
    let avatar_name = pet_name.clone();
    let session_pet = pet_name.clone();
    let on_start = move |_: leptos::ev::MouseEvent| log!("start session: {session_pet}");

    view! {
        <div class="schedule-row">
            <Avatar name=avatar_name/>
            <div class="schedule-row__details">
                <div class="schedule-row__name">
                    <h4>{pet_name}</h4>
                    {emergency.then(|| view! { <Badge tone=BadgeTone::Danger label="Emergency"/> })}
                </div>
                <p>{owner_name}</p>
                <p>{service}</p>
            </div>
            <div class="schedule-row__aside">
                <span class="schedule-row__time">"🕒 " {time}</span>
                <button class="btn btn--secondary" on:click=on_start>
                    "Start Session"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ReviewSnippetRow(review: ReviewSnippet) -> impl IntoView {
    let ReviewSnippet { rating, text, author } = review;
    let quoted = format!("\"{text}\"");
    let avatar_name = author.clone();

    view! {
        <div class="review-snippet">
            <div class="review-snippet__header">
                <Avatar name=avatar_name small=true/>
                <StarRating rating/>
            </div>
            <p class="review-snippet__text">{quoted}</p>
            <p class="review-snippet__author">{author}</p>
        </div>
    }
}
