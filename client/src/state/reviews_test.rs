use super::*;

fn reply(id: &str, text: &str) -> ReviewsAction {
    ReviewsAction::SendReply { id: id.into(), text: text.into(), today: "2025-09-20".into() }
}

#[test]
fn breakdown_counts_from_reviews() {
    let s = ReviewsState::default();
    let buckets = s.breakdown();
    assert_eq!(buckets[0], RatingBucket { stars: 5, count: 3 });
    assert!(buckets[1..].iter().all(|b| b.count == 0));
    assert_eq!(buckets[4].stars, 1);
}

#[test]
fn average_and_percent() {
    let s = ReviewsState::default();
    assert!((s.average_rating() - 5.0).abs() < 1e-9);
    assert!((s.bucket_percent(s.breakdown()[0]) - 100.0).abs() < 1e-9);
}

#[test]
fn empty_reviews_average_zero() {
    let s = ReviewsState { items: Vec::new() };
    assert_eq!(s.average_rating(), 0.0);
    assert_eq!(s.bucket_percent(RatingBucket { stars: 5, count: 0 }), 0.0);
}

#[test]
fn send_reply_attaches_trimmed_text() {
    let mut s = ReviewsState::default();
    assert_eq!(s.awaiting_reply(), 2);
    s.apply(reply("2", "  Thanks, Luna was a star!  ")).unwrap();
    let review = s.items.iter().find(|r| r.id == "2").unwrap();
    assert_eq!(review.reply, Some(Reply { text: "Thanks, Luna was a star!".into(), date: "2025-09-20".into() }));
    assert_eq!(s.awaiting_reply(), 1);
}

#[test]
fn blank_reply_is_rejected() {
    let mut s = ReviewsState::default();
    assert_eq!(s.apply(reply("2", "   ")), Err(ActionError::MissingField("reply")));
    assert_eq!(s.awaiting_reply(), 2);
}

#[test]
fn second_reply_is_rejected() {
    let mut s = ReviewsState::default();
    assert_eq!(s.apply(reply("1", "again")), Err(ActionError::AlreadyReplied("1".into())));
    assert_eq!(s.items[0].reply.as_ref().map(|r| r.text.as_str()), Some("Thank you for your feedback!"));
}

#[test]
fn reply_to_unknown_review_is_rejected() {
    let mut s = ReviewsState::default();
    assert!(matches!(s.apply(reply("9", "hi")), Err(ActionError::UnknownId(_))));
}

#[test]
fn response_rate_and_average_stars() {
    let mut s = ReviewsState::default();
    assert_eq!(s.response_rate(), 33);
    assert_eq!(s.average_stars(), 5);

    s.items[1].rating = 4;
    s.items[2].rating = 3;
    assert_eq!(s.average_stars(), 4);

    s.apply(reply("2", "thanks")).unwrap();
    assert_eq!(s.response_rate(), 67);
    assert_eq!(ReviewsState { items: Vec::new() }.response_rate(), 0);
}
