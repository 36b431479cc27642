use std::sync::Arc;

use futures::stream::{BoxStream, StreamExt};
use poem_openapi::{param::Path, payload::EventStream, payload::Json, OpenApi, Tags};

use crate::api::{require_admin, require_session, SessionAuth};
use crate::errors::ApiError;
use crate::services::TokenService;
use crate::stores::AnnouncementStore;
use crate::types::dto::announcements::{
    AnnouncementForm, AnnouncementListResponse, AnnouncementView,
};
use crate::types::dto::common::{ChangeEventDto, MessageResponse};
use crate::validation::validate_announcement;

/// Announcement API: everyone reads, the admin writes
pub struct AnnouncementsApi {
    announcement_store: Arc<AnnouncementStore>,
    token_service: Arc<TokenService>,
}

impl AnnouncementsApi {
    pub fn new(announcement_store: Arc<AnnouncementStore>, token_service: Arc<TokenService>) -> Self {
        Self {
            announcement_store,
            token_service,
        }
    }
}

#[derive(Tags)]
enum AnnouncementTags {
    /// Announcement endpoints
    Announcements,
}

#[OpenApi]
impl AnnouncementsApi {
    /// All announcements, newest first
    #[oai(path = "/announcements", method = "get", tag = "AnnouncementTags::Announcements")]
    async fn list(&self, auth: SessionAuth) -> Result<Json<AnnouncementListResponse>, ApiError> {
        require_session(&self.token_service, &auth)?;
        let announcements = self.announcement_store.list().await?;
        Ok(Json(AnnouncementListResponse {
            announcements: announcements
                .into_iter()
                .map(AnnouncementView::from)
                .collect(),
        }))
    }

    /// Live change feed of the announcements collection
    ///
    /// A second client holding the list sees a first client's publication
    /// through this stream without refreshing.
    #[oai(path = "/announcements/watch", method = "get", tag = "AnnouncementTags::Announcements")]
    async fn watch(
        &self,
        auth: SessionAuth,
    ) -> Result<EventStream<BoxStream<'static, ChangeEventDto>>, ApiError> {
        require_session(&self.token_service, &auth)?;
        let subscription = self.announcement_store.watch();
        let stream = futures::stream::unfold(subscription, |mut sub| async move {
            sub.recv().await.map(|event| (ChangeEventDto::from(event), sub))
        });
        Ok(EventStream::new(stream.boxed()))
    }

    /// Publish an announcement
    #[oai(path = "/announcements", method = "post", tag = "AnnouncementTags::Announcements")]
    async fn create(
        &self,
        auth: SessionAuth,
        body: Json<AnnouncementForm>,
    ) -> Result<Json<AnnouncementView>, ApiError> {
        require_admin(&self.token_service, &auth)?;
        let validated = validate_announcement(&body.0)?;
        let ann = self.announcement_store.create(validated).await?;
        Ok(Json(AnnouncementView::from(ann)))
    }

    /// Edit an announcement; its publication date is kept
    #[oai(path = "/announcements/:id", method = "put", tag = "AnnouncementTags::Announcements")]
    async fn update(
        &self,
        auth: SessionAuth,
        id: Path<String>,
        body: Json<AnnouncementForm>,
    ) -> Result<Json<AnnouncementView>, ApiError> {
        require_admin(&self.token_service, &auth)?;
        let validated = validate_announcement(&body.0)?;
        let ann = self.announcement_store.update(&id.0, validated).await?;
        Ok(Json(AnnouncementView::from(ann)))
    }

    /// Delete an announcement
    #[oai(path = "/announcements/:id", method = "delete", tag = "AnnouncementTags::Announcements")]
    async fn delete(
        &self,
        auth: SessionAuth,
        id: Path<String>,
    ) -> Result<Json<MessageResponse>, ApiError> {
        require_admin(&self.token_service, &auth)?;
        self.announcement_store.delete(&id.0).await?;
        Ok(Json(MessageResponse {
            message: "Pengumuman telah berhasil dihapus.".to_string(),
        }))
    }
}
