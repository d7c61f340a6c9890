use super::create_event::CreateEventUseCase;
use crate::shared::usecase::Subscriber;
use flowerstation_domain::{Event, Notification};
use flowerstation_infra::StationContext;
use tracing::error;

/// Leaves a notification for the owner about the created event
pub struct NotifyOwnerOnEventCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateEventUseCase> for NotifyOwnerOnEventCreated {
    async fn notify(&self, e: &Event, ctx: &StationContext) {
        let notification =
            Notification::event_created(e, &ctx.config.timezone, ctx.sys.get_timestamp_millis());

        // Sideeffect, the event is created either way
        if let Err(err) = ctx.repos.notifications.insert(&notification).await {
            error!(
                "Unable to create notification for event {}: {:?}",
                e.id, err
            );
        }
    }
}
