use std::collections::BTreeMap;

use tracing::{debug, info, instrument, warn};

use crate::clients::{OrderClient, UserClient};
use crate::domain::{CustomerDetails, Role};
use crate::error::CustomerError;

/// Customer directory built from the identity and order stores.
///
/// This client owns no state; it reads and writes through the other two.
#[derive(Clone)]
pub struct CustomerClient {
    user_client: UserClient,
    order_client: OrderClient,
}

impl CustomerClient {
    pub fn new(user_client: UserClient, order_client: OrderClient) -> Self {
        Self { user_client, order_client }
    }

    /// One entry per email. Registered customers seed the list with blank
    /// phone and address; each order then overwrites its customer's entry with
    /// the snapshot it carries, walking orders in storage order.
    #[instrument(skip(self))]
    pub async fn list_customers(&self) -> Result<Vec<CustomerDetails>, CustomerError> {
        debug!("Building customer directory");
        let mut customers: BTreeMap<String, CustomerDetails> = BTreeMap::new();

        for user in self.user_client.list_users().await? {
            if user.role == Role::Customer {
                let details = CustomerDetails::new(user.name, user.email.clone(), "", "");
                customers.insert(user.email, details);
            }
        }

        for order in self.order_client.stored_orders().await? {
            if order.customer.email.is_empty() {
                continue;
            }
            customers.insert(order.customer.email.clone(), order.customer);
        }

        info!(customer_count = customers.len(), "Customer directory built");
        Ok(customers.into_values().collect())
    }

    /// Removes the user with this email and all of their orders.
    ///
    /// The two removals are not atomic: if the order store fails after the
    /// user was removed, the user stays removed.
    #[instrument(skip(self))]
    pub async fn delete_customer(&self, email: &str) -> Result<(), CustomerError> {
        debug!("Deleting customer");
        let users_removed = self.user_client.remove_by_email(email).await?;
        let orders_removed = self.order_client.remove_by_customer_email(email).await?;

        if users_removed == 0 && orders_removed == 0 {
            warn!("No user or order matched");
            return Err(CustomerError::NotFound(email.to_string()));
        }

        info!(users_removed, orders_removed, "Customer deleted");
        Ok(())
    }
}
