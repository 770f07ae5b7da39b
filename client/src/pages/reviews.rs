//! Reviews: rating overview, quick status, and the reply workflow.

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::button::{Button, ButtonVariant};
use crate::components::card::Card;
use crate::components::star_rating::StarRating;
use crate::state::reviews::{Review, ReviewsAction, ReviewsState};
use crate::util::clock::today_iso;
use crate::util::dispatch::dispatch;

#[component]
pub fn ReviewsPage() -> impl IntoView {
    let reviews = expect_context::<RwSignal<ReviewsState>>();
    // One reply form open at a time.
    let replying_to = RwSignal::new(None::<String>);
    let reply_text = RwSignal::new(String::new());

    view! {
        <div class="reviews-page">
            <div class="page-intro">
                <h2>"Reviews & Ratings"</h2>
                <p>"View and respond to client reviews"</p>
            </div>

            <div class="reviews-page__overview">
                <RatingOverview reviews/>
                <Card>
                    <div class="card__header">
                        <h3>"Quick Status"</h3>
                    </div>
                    <dl class="card__body quick-status">
                        <dt>"Total Reviews"</dt>
                        <dd>{move || reviews.with(ReviewsState::total)}</dd>
                        <dt>"5 Star Reviews"</dt>
                        <dd>{move || reviews.with(|r| r.breakdown()[0].count)}</dd>
                        <dt>"Reply To"</dt>
                        <dd>{move || reviews.with(ReviewsState::awaiting_reply)}</dd>
                        <dt>"Response rate"</dt>
                        <dd>{move || format!("{}%", reviews.with(ReviewsState::response_rate))}</dd>
                    </dl>
                </Card>
            </div>

            <div class="reviews-page__list">
                <For
                    each=move || reviews.get().items
                    key=|r| (r.id.clone(), r.has_reply())
                    children=move |review| view! { <ReviewCard review reviews replying_to reply_text/> }
                />
            </div>
        </div>
    }
}

#[component]
fn RatingOverview(reviews: RwSignal<ReviewsState>) -> impl IntoView {
    view! {
        <Card>
            <div class="card__header">
                <h3>"Rating Overview"</h3>
            </div>
            <div class="card__body rating-overview">
                <div class="rating-overview__score">
                    <span class="rating-overview__average">
                        {move || format!("{:.1}", reviews.with(ReviewsState::average_rating))}
                    </span>
                    {move || view! { <StarRating rating=reviews.with(ReviewsState::average_stars)/> }}
                    <p>{move || format!("Based on {} reviews", reviews.with(ReviewsState::total))}</p>
                </div>
                {move || {
                    reviews
                        .with(|r| r.breakdown().map(|bucket| (bucket, r.bucket_percent(bucket))))
                        .into_iter()
                        .map(|(bucket, percent)| {
                            view! {
                                <div class="rating-bar">
                                    <span class="rating-bar__stars">{bucket.stars} " ★"</span>
                                    <div class="rating-bar__track">
                                        <div class="rating-bar__fill" style:width=format!("{percent}%")></div>
                                    </div>
                                    <span class="rating-bar__count">{bucket.count}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Card>
    }
}

#[component]
fn ReviewCard(
    review: Review,
    reviews: RwSignal<ReviewsState>,
    replying_to: RwSignal<Option<String>>,
    reply_text: RwSignal<String>,
) -> impl IntoView {
    let Review { id, pet_name, pet_breed, service, rating, date, comment, reply, .. } = review;
    let has_reply = reply.is_some();

    let is_open = {
        let id = id.clone();
        move || replying_to.with(|open| open.as_deref() == Some(id.as_str()))
    };
    let close = Callback::new(move |()| {
        reply_text.set(String::new());
        replying_to.set(None);
    });
    let send = {
        let id = id.clone();
        Callback::new(move |()| {
            let action = ReviewsAction::SendReply { id: id.clone(), text: reply_text.get_untracked(), today: today_iso() };
            if dispatch(reviews, action) {
                close.run(());
            }
        })
    };
    let open = Callback::new(move |()| {
        reply_text.set(String::new());
        replying_to.set(Some(id.clone()));
    });

    let comment = (!comment.is_empty()).then(|| view! { <p class="review-card__comment">{comment}</p> });
    let reply = reply.map(|r| {
        view! {
            <div class="review-card__reply">
                <div class="review-card__reply-header">
                    <span class="pill">"Your Reply"</span>
                    <span class="review-card__reply-date">{r.date}</span>
                </div>
                <p>{r.text}</p>
            </div>
        }
    });

    view! {
        <Card class="review-card">
            <Avatar name=pet_name.clone()/>
            <div class="review-card__body">
                <h4>{pet_name}</h4>
                <p class="review-card__meta">{pet_breed} " - " {service}</p>
                <div class="review-card__rating">
                    <StarRating rating/>
                    <span>{date}</span>
                </div>
                {comment}
                {reply}
                <Show
                    when=is_open
                    fallback=move || {
                        (!has_reply)
                            .then(|| {
                                view! {
                                    <Button variant=ButtonVariant::Secondary on_click=open>
                                        "💬 Reply"
                                    </Button>
                                }
                            })
                    }
                >
                    <div class="review-card__form">
                        <textarea
                            class="field__input field__input--multiline"
                            placeholder="Write your reply..."
                            prop:value=move || reply_text.get()
                            on:input=move |ev| reply_text.set(event_target_value(&ev))
                        ></textarea>
                        <div class="review-card__form-actions">
                            <Button on_click=send>"Send reply"</Button>
                            <Button variant=ButtonVariant::Secondary on_click=close>"Cancel"</Button>
                        </div>
                    </div>
                </Show>
            </div>
        </Card>
    }
}
