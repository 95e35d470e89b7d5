use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::invite::{Invite, NewInvite};

const INVITE_COLUMNS: &str = "id, event_type, receiver_name, title, message, date, time, venue, \
     map_link, bride, groom, created_at";

#[derive(Clone)]
pub struct PgInviteStore {
    pool: PgPool,
}

impl PgInviteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }

    pub async fn insert(&self, new: &NewInvite) -> Result<Invite, AppError> {
        let event_type = new.require_event_type()?;
        new.reject_nul()?;

        let invite = sqlx::query_as::<_, Invite>(&format!(
            "INSERT INTO invites
                 (event_type, receiver_name, title, message, date, time, venue, map_link, bride, groom)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {INVITE_COLUMNS}"
        ))
        .bind(event_type.as_str())
        .bind(&new.receiver_name)
        .bind(&new.title)
        .bind(&new.message)
        .bind(&new.date)
        .bind(&new.time)
        .bind(&new.venue)
        .bind(&new.map_link)
        .bind(&new.bride)
        .bind(&new.groom)
        .fetch_one(&self.pool)
        .await?;

        Ok(invite)
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Invite>, AppError> {
        let invite = sqlx::query_as::<_, Invite>(&format!(
            "SELECT {INVITE_COLUMNS} FROM invites WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(invite)
    }

    pub async fn ping(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|one| one == 1)
            .unwrap_or(false)
    }
}

/// Process-local store. Contents are lost on restart.
#[derive(Clone, Default)]
pub struct MemoryInviteStore {
    invites: Arc<RwLock<HashMap<Uuid, Invite>>>,
}

impl MemoryInviteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, new: &NewInvite) -> Result<Invite, AppError> {
        let invite = Invite {
            id: Uuid::new_v4(),
            event_type: new.require_event_type()?,
            receiver_name: new.receiver_name.clone(),
            title: new.title.clone(),
            message: new.message.clone(),
            date: new.date.clone(),
            time: new.time.clone(),
            venue: new.venue.clone(),
            map_link: new.map_link.clone(),
            bride: new.bride.clone(),
            groom: new.groom.clone(),
            created_at: Utc::now(),
        };

        self.invites.write().await.insert(invite.id, invite.clone());
        Ok(invite)
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Invite>, AppError> {
        Ok(self.invites.read().await.get(&id).cloned())
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.invites.read().await.len()
    }
}

/// Handle to wherever invites live. Built once at startup and shared
/// through `AppState`.
#[derive(Clone)]
pub enum InviteStore {
    Postgres(PgInviteStore),
    Memory(MemoryInviteStore),
}

impl InviteStore {
    /// `memory://` selects the in-process store; anything else is treated as
    /// a Postgres connection string.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        if database_url.starts_with("memory:") {
            tracing::warn!("using in-memory invite store, invites will not survive a restart");
            return Ok(Self::Memory(MemoryInviteStore::new()));
        }

        let pool = PgPool::connect(database_url).await?;
        Ok(Self::Postgres(PgInviteStore::new(pool)))
    }

    pub async fn migrate(&self) -> Result<(), AppError> {
        match self {
            Self::Postgres(s) => s.migrate().await,
            Self::Memory(_) => Ok(()),
        }
    }

    pub async fn insert(&self, new: &NewInvite) -> Result<Invite, AppError> {
        match self {
            Self::Postgres(s) => s.insert(new).await,
            Self::Memory(s) => s.insert(new).await,
        }
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Invite>, AppError> {
        match self {
            Self::Postgres(s) => s.find(id).await,
            Self::Memory(s) => s.find(id).await,
        }
    }

    pub async fn ping(&self) -> bool {
        match self {
            Self::Postgres(s) => s.ping().await,
            Self::Memory(_) => true,
        }
    }
}
