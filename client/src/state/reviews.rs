//! Client reviews, provider replies, and the rating overview.

#[cfg(test)]
#[path = "reviews_test.rs"]
mod reviews_test;

use serde::{Deserialize, Serialize};

use super::{ActionError, Reducer, fixtures, required};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub pet_name: String,
    pub pet_breed: String,
    pub service: String,
    pub owner_name: String,
    /// 1 to 5 stars.
    pub rating: u8,
    pub date: String,
    pub comment: String,
    pub reply: Option<Reply>,
}

impl Review {
    #[must_use]
    pub fn has_reply(&self) -> bool {
        self.reply.is_some()
    }
}

/// Number of reviews with a given star count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBucket {
    pub stars: u8,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewsState {
    pub items: Vec<Review>,
}

impl Default for ReviewsState {
    fn default() -> Self {
        Self { items: fixtures::reviews() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewsAction {
    SendReply { id: String, text: String, today: String },
}

impl ReviewsState {
    /// Star buckets from 5 down to 1.
    #[must_use]
    pub fn breakdown(&self) -> [RatingBucket; 5] {
        [5, 4, 3, 2, 1].map(|stars| RatingBucket {
            stars,
            count: self.items.iter().filter(|r| r.rating == stars).count(),
        })
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Mean star rating; 0.0 with no reviews.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_rating(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.items.iter().map(|r| u32::from(r.rating)).sum();
        f64::from(sum) / self.items.len() as f64
    }

    /// Share of reviews in a bucket, as a 0-100 bar width.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn bucket_percent(&self, bucket: RatingBucket) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        bucket.count as f64 * 100.0 / self.items.len() as f64
    }

    /// Whole stars for the average, rounded down.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn average_stars(&self) -> u8 {
        self.average_rating().floor() as u8
    }

    #[must_use]
    pub fn awaiting_reply(&self) -> usize {
        self.items.iter().filter(|r| !r.has_reply()).count()
    }

    /// Percentage of reviews with a reply, rounded to a whole number.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn response_rate(&self) -> u32 {
        if self.items.is_empty() {
            return 0;
        }
        let replied = self.items.len() - self.awaiting_reply();
        (replied as f64 * 100.0 / self.items.len() as f64).round() as u32
    }
}

impl Reducer for ReviewsState {
    type Action = ReviewsAction;
    const NAME: &'static str = "reviews";

    fn apply(&mut self, action: ReviewsAction) -> Result<(), ActionError> {
        match action {
            ReviewsAction::SendReply { id, text, today } => {
                let text = required("reply", &text)?;
                let review = self
                    .items
                    .iter_mut()
                    .find(|r| r.id == id)
                    .ok_or_else(|| ActionError::UnknownId(id.clone()))?;
                if review.has_reply() {
                    return Err(ActionError::AlreadyReplied(id));
                }
                review.reply = Some(Reply { text, date: today });
            }
        }
        Ok(())
    }
}
