//! Recommendation endpoint.

use tracing::instrument;

use amazin_core::{RecommendationResponse, UserId};

use super::{ApiError, BookstoreClient};

impl BookstoreClient {
    /// Fetch up to `limit` book recommendations for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the user is unknown.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn get_recommendations(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<RecommendationResponse, ApiError> {
        let mut url = self.endpoint(&["recommendations", user_id.as_str()])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        self.send_json(self.http().get(url)).await
    }
}
