use crate::gate::RequiredReviewers;
use crate::github::Review;

/// Returns `true` if the latest review of at least one required reviewer is an approval.
///
/// Reviews are expected in submission order, so a later review from the same author replaces
/// the earlier ones. A required reviewer without any review counts as not approved.
/// The check stops at the first approving reviewer.
pub fn has_required_approval(required: &RequiredReviewers, reviews: &[Review]) -> bool {
    for reviewer in required.iter() {
        tracing::info!("Checking for an approved review from {reviewer}...");

        let latest = reviews
            .iter()
            .rev()
            .find(|review| review.is_authored_by(reviewer));
        match latest {
            Some(review) if review.state.is_approval() => {
                tracing::info!("An approved review was found from {reviewer}");
                return true;
            }
            Some(review) => {
                tracing::info!(
                    "No approved review was found from {reviewer} (latest review: {})",
                    review.state
                );
            }
            None => {
                tracing::info!("No review was found from {reviewer}");
            }
        }
    }
    false
}
