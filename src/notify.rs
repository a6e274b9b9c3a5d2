//! Notification contracts and the recording sink
//!
//! The workflow decides *when* to notify and *with what payload*; recipient
//! resolution and recording live behind the emitter. Delivery transport is a
//! collaborator concern — this side only records rows in notifications_tb.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};

use crate::core_types::UserId;
use crate::error::CoreResult;
use crate::transfer::Transfer;

/// Roles the workflow addresses. Stored as display strings in users_tb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    OperationsManager,
    AssetManager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::OperationsManager => "Operations Manager",
            Role::AssetManager => "Asset Manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Workflow event a notification announces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationEvent {
    TransferSubmitted,
    TransferOpsApproved,
    TransferCompleted,
}

impl NotificationEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationEvent::TransferSubmitted => "transfer_submitted",
            NotificationEvent::TransferOpsApproved => "transfer_ops_approved",
            NotificationEvent::TransferCompleted => "transfer_completed",
        }
    }
}

/// What gets recorded per recipient
#[derive(Debug, Clone, Serialize)]
pub struct NotificationPayload {
    pub event: NotificationEvent,
    pub transfer_code: String,
    pub message: String,
}

impl NotificationPayload {
    pub fn transfer_submitted(transfer: &Transfer) -> Self {
        Self {
            event: NotificationEvent::TransferSubmitted,
            transfer_code: transfer.transfer_code.clone(),
            message: format!(
                "Transfer {} requested: {} to {}",
                transfer.transfer_code, transfer.from_location, transfer.destination
            ),
        }
    }

    pub fn transfer_ops_approved(transfer: &Transfer) -> Self {
        Self {
            event: NotificationEvent::TransferOpsApproved,
            transfer_code: transfer.transfer_code.clone(),
            message: format!(
                "Transfer {} cleared operations review, awaiting asset manager",
                transfer.transfer_code
            ),
        }
    }

    pub fn transfer_completed(transfer: &Transfer) -> Self {
        Self {
            event: NotificationEvent::TransferCompleted,
            transfer_code: transfer.transfer_code.clone(),
            message: format!(
                "Transfer {} completed: asset relocated to {}",
                transfer.transfer_code, transfer.destination
            ),
        }
    }
}

/// Role membership lookup, injected so tests can substitute it.
#[async_trait]
pub trait RoleDirectory: Send + Sync {
    async fn users_with_role(&self, role: Role) -> CoreResult<Vec<UserId>>;
}

/// Notification recording contract.
///
/// Fire-and-forget from the workflow's perspective: a failure here never
/// rolls back the governing write. The one exception — the final-approval
/// broadcast — is written by the transfer store inside its own transaction
/// and does not pass through this trait.
#[async_trait]
pub trait NotificationEmitter: Send + Sync {
    /// Record one notification per user currently holding the role.
    async fn notify_role(&self, role: Role, payload: &NotificationPayload) -> CoreResult<()>;

    /// Record one broadcast notification (no recipient).
    async fn notify_broadcast(&self, payload: &NotificationPayload) -> CoreResult<()>;
}

/// users_tb-backed role lookup
pub struct PgRoleDirectory {
    pool: PgPool,
}

impl PgRoleDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleDirectory for PgRoleDirectory {
    async fn users_with_role(&self, role: Role) -> CoreResult<Vec<UserId>> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT user_id FROM users_tb WHERE role = $1 ORDER BY user_id",
        )
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }
}

/// notifications_tb-backed emitter
pub struct PgNotificationEmitter {
    pool: PgPool,
    roles: Arc<dyn RoleDirectory>,
}

impl PgNotificationEmitter {
    pub fn new(pool: PgPool, roles: Arc<dyn RoleDirectory>) -> Self {
        Self { pool, roles }
    }
}

#[async_trait]
impl NotificationEmitter for PgNotificationEmitter {
    async fn notify_role(&self, role: Role, payload: &NotificationPayload) -> CoreResult<()> {
        let recipients = self.roles.users_with_role(role).await?;

        let mut conn = self.pool.acquire().await?;
        for recipient in recipients {
            insert_notification(&mut conn, Some(recipient), payload).await?;
        }
        Ok(())
    }

    async fn notify_broadcast(&self, payload: &NotificationPayload) -> CoreResult<()> {
        let mut conn = self.pool.acquire().await?;
        insert_notification(&mut conn, None, payload).await?;
        Ok(())
    }
}

/// Row insert usable inside a caller's transaction (the final-approval
/// bundle writes its broadcast through this).
pub async fn insert_notification(
    conn: &mut PgConnection,
    recipient: Option<UserId>,
    payload: &NotificationPayload,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO notifications_tb (recipient_id, event, transfer_code, message)
           VALUES ($1, $2, $3, $4)"#,
    )
    .bind(recipient)
    .bind(payload.event.as_str())
    .bind(&payload.transfer_code)
    .bind(&payload.message)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_as_str() {
        assert_eq!(Role::Admin.as_str(), "Admin");
        assert_eq!(Role::OperationsManager.as_str(), "Operations Manager");
        assert_eq!(Role::AssetManager.as_str(), "Asset Manager");
    }

    #[test]
    fn test_event_as_str() {
        assert_eq!(
            NotificationEvent::TransferSubmitted.as_str(),
            "transfer_submitted"
        );
        assert_eq!(
            NotificationEvent::TransferCompleted.as_str(),
            "transfer_completed"
        );
    }
}
