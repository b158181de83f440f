use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::message_dto::MessageResponse;
use crate::error::Result;
use crate::models::{
    batch::Batch,
    camp::Camp,
    message::{CreateMessage, Message},
};
use crate::services::feed_service::{FeedEvent, FeedService};

const MESSAGE_COLUMNS: &str =
    "id, name, content, camp, batch, font, image_url, open_on, created_at";

#[derive(Clone)]
pub struct MessageService {
    pool: PgPool,
    feed: FeedService,
}

impl MessageService {
    pub fn new(pool: PgPool, feed: FeedService) -> Self {
        Self { pool, feed }
    }

    pub async fn create(&self, msg: CreateMessage) -> Result<Message> {
        let message = sqlx::query_as::<_, Message>(&format!(
            r#"
            INSERT INTO messages (name, content, camp, batch, font, image_url, open_on)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {MESSAGE_COLUMNS}
            "#
        ))
        .bind(&msg.name)
        .bind(&msg.content)
        .bind(msg.camp.code())
        .bind(msg.batch.as_i16())
        .bind(&msg.font)
        .bind(&msg.image_url)
        .bind(msg.open_on)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            message_id = %message.id,
            camp = %msg.camp,
            batch = %msg.batch,
            has_image = msg.image_url.is_some(),
            "message stored"
        );
        self.feed.publish(FeedEvent::Created {
            message: MessageResponse::from(&message),
        });

        Ok(message)
    }

    /// Every message, newest first.
    pub async fn list_all(&self) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(&format!(
            r#"
            SELECT {MESSAGE_COLUMNS} FROM messages
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    /// Messages of one cohort, newest first. Rows stored under the legacy
    /// numeric camp code are included.
    pub async fn list_cohort(&self, camp: Camp, batch: Batch) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(&format!(
            r#"
            SELECT {MESSAGE_COLUMNS} FROM messages
            WHERE camp IN ($1, $2) AND batch = $3
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .bind(camp.code())
        .bind(camp.numeric_alias())
        .bind(batch.as_i16())
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Message> {
        let message = sqlx::query_as::<_, Message>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages WHERE id = $1"
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Message> {
        let deleted = sqlx::query_as::<_, Message>(&format!(
            "DELETE FROM messages WHERE id = $1 RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(message_id = %id, "message deleted");
        self.feed.publish(FeedEvent::Deleted {
            id,
            camp: deleted.camp(),
            batch: deleted.batch(),
        });

        Ok(deleted)
    }
}
