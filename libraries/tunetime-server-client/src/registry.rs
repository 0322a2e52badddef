//! Playlist registry implementation backed by the Tune Time server.

use async_trait::async_trait;
use tunetime_control::{FavoritesScope, PlaylistRegistry};
use tunetime_core::error::{Result, TuneError};

use crate::client::TuneServerClient;
use crate::types::PlaylistType;

#[async_trait]
impl PlaylistRegistry for TuneServerClient {
    async fn register_playlist(
        &self,
        playlist_id: &str,
        scope: FavoritesScope,
        name: &str,
    ) -> Result<()> {
        self.save_playlist(playlist_id, PlaylistType::from(scope), name)
            .await
            .map_err(|err| TuneError::network(err.to_string()))
    }
}
