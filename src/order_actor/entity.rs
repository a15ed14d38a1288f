use chrono::Utc;

use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{Order, OrderStatus, OrderSubmission};

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Overwrites the status. No transition is refused.
    SetStatus(OrderStatus),
}

#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// The order as stored after the status change.
    StatusSet(Order),
}

impl Entity for Order {
    type Id = String;
    type CreatePayload = OrderSubmission;
    type Patch = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    fn id(&self) -> &String {
        &self.id
    }

    /// Stamps the creation time. The submitted total is stored as given.
    fn from_create(id: String, submission: OrderSubmission) -> Result<Self, FrameworkError> {
        Ok(Order::from_submission(id, submission, Utc::now()))
    }

    /// Orders only change through [`OrderAction`].
    fn on_update(&mut self, _patch: ()) -> Result<(), FrameworkError> {
        Err(FrameworkError::Rejected("orders are not patched".into()))
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, FrameworkError> {
        match action {
            OrderAction::SetStatus(status) => {
                self.status = status;
                Ok(OrderActionResult::StatusSet(self.clone()))
            }
        }
    }
}
