//! Background maintenance
//!
//! Periodic sweep of tags left without any post association.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Maintenance service
pub struct MaintenanceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MaintenanceService<'a> {
    /// Create a new MaintenanceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Delete every tag with zero post associations
    #[instrument(skip(self))]
    pub async fn sweep_orphan_tags(&self) -> ServiceResult<u64> {
        let purged = self.ctx.tag_repo().purge_orphans().await?;

        if purged > 0 {
            info!(purged, "Orphan tags removed");
        }

        Ok(purged)
    }

    /// Spawn a background task running the orphan sweep on a fixed interval.
    ///
    /// The first tick fires after one full interval, not at startup. A failed
    /// sweep is logged and retried on the next tick.
    pub fn spawn_sweeper(ctx: ServiceContext, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            interval.tick().await; // immediate first tick

            loop {
                interval.tick().await;
                let service = MaintenanceService::new(&ctx);
                if let Err(e) = service.sweep_orphan_tags().await {
                    error!(error = %e, "Orphan tag sweep failed");
                }
            }
        })
    }
}
