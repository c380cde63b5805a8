//! Art Institute of Chicago archive client.
//!
//! Not a generator at all: searches the museum's public-domain collection
//! for a work whose medium matches the requested mood and returns its
//! IIIF URL. Good for etchings, engravings and vintage photography.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use serde::Deserialize;

use crate::infrastructure::ports::{PortraitArt, PortraitGenError, PortraitGenPort, PortraitRequest};

/// Client for the Art Institute of Chicago public API.
#[derive(Clone)]
pub struct ArtInstituteClient {
    client: Client,
    base_url: String,
    iiif_url: String,
}

impl ArtInstituteClient {
    pub fn new(base_url: &str, iiif_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            iiif_url: iiif_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the search query for a (mood, subject) pair.
    ///
    /// The gendered prefix is stripped from the subject - the profession
    /// alone is a stronger visual-search key than the full phrasing.
    fn search_query(mood: &str, subject: &str) -> String {
        let archetype = subject
            .trim_start_matches("Male ")
            .trim_start_matches("Female ")
            .trim();

        match mood {
            "Grim Engraving" => format!("{archetype} etching | engraving | lithograph"),
            "Desaturated Oil" => format!("{archetype} oil painting | portrait"),
            "Ethereal Watercolor" => format!("{archetype} watercolor | wash drawing | sketch"),
            "Vintage Daguerreotype" => {
                format!("{archetype} photograph | daguerreotype | tintype")
            }
            _ => format!("{archetype} portrait"),
        }
    }
}

#[async_trait]
impl PortraitGenPort for ArtInstituteClient {
    async fn generate(&self, request: PortraitRequest) -> Result<PortraitArt, PortraitGenError> {
        let query = Self::search_query(&request.mood, &request.subject);

        let response = self
            .client
            .get(format!("{}/api/v1/artworks/search", self.base_url))
            .query(&[
                ("q", query.as_str()),
                ("query[term][is_public_domain]", "true"),
                // Fetch a batch to allow random selection
                ("limit", "15"),
                ("fields", "id,title,image_id"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(PortraitGenError::Failed(format!("status {status}")));
        }

        let search: SearchResponse = response
            .json()
            .await
            .map_err(|e| PortraitGenError::Malformed(e.to_string()))?;

        let candidates: Vec<String> = search
            .data
            .into_iter()
            .filter_map(|artwork| artwork.image_id)
            .collect();

        if candidates.is_empty() {
            return Err(PortraitGenError::NotFound(format!(
                "no archive image for '{query}'"
            )));
        }

        // Pick a random one for variety
        let pick = rand::thread_rng().gen_range(0..candidates.len());
        let image_id = &candidates[pick];

        Ok(PortraitArt {
            url: format!("{}/{}/full/843,/0/default.jpg", self.iiif_url, image_id),
        })
    }

    async fn check_health(&self) -> Result<bool, PortraitGenError> {
        let response = self
            .client
            .get(format!("{}/api/v1/artworks", self.base_url))
            .query(&[("limit", "1")])
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .map_err(|_| PortraitGenError::Unavailable)?;

        Ok(response.status().is_success())
    }
}

// =============================================================================
// Art Institute API types
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Artwork>,
}

#[derive(Debug, Deserialize)]
struct Artwork {
    image_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_strips_the_gendered_prefix() {
        let query = ArtInstituteClient::search_query("Desaturated Oil", "Male Coal Miner");
        assert_eq!(query, "Coal Miner oil painting | portrait");
        let query = ArtInstituteClient::search_query("Grim Engraving", "Female Whaler");
        assert_eq!(query, "Whaler etching | engraving | lithograph");
    }

    #[test]
    fn each_mood_searches_its_own_medium() {
        assert!(ArtInstituteClient::search_query("Ethereal Watercolor", "Actor")
            .contains("watercolor"));
        assert!(
            ArtInstituteClient::search_query("Vintage Daguerreotype", "Actor")
                .contains("daguerreotype")
        );
    }

    #[test]
    fn unknown_moods_fall_back_to_a_plain_portrait_search() {
        let query = ArtInstituteClient::search_query("Mixed Media", "Female Butler");
        assert_eq!(query, "Butler portrait");
    }
}
