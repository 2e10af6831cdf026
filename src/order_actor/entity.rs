//! [`ActorEntity`] implementation for the Order domain type.
//!
//! Orders reach the store fully composed. The hook only guards the record's
//! invariants: an allocator-issued id and both catalog references present.

use super::OrderError;
use crate::model::{Order, OrderId};
use actor_framework::ActorEntity;

impl ActorEntity for Order {
    type Id = OrderId;
    type Create = Order;
    type Error = OrderError;

    fn from_create_params(params: Order) -> Result<Self, Self::Error> {
        Ok(params)
    }

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn on_create(&mut self) -> Result<(), Self::Error> {
        if self.id.0.trim().is_empty() {
            return Err(OrderError::ValidationError("order id must not be empty".into()));
        }
        if self.broth_id.0.trim().is_empty() || self.protein_id.0.trim().is_empty() {
            return Err(OrderError::ValidationError(format!(
                "order {} must reference a broth and a protein",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Broth, Protein};

    #[test]
    fn test_order_without_id_is_rejected() {
        let mut order = Order::compose(
            OrderId::from(""),
            &Broth::new("b1", "Miso"),
            &Protein::new("p1", "Pork"),
        );
        assert!(matches!(order.on_create(), Err(OrderError::ValidationError(_))));
    }

    #[test]
    fn test_order_without_broth_is_rejected() {
        let mut order = Order::compose(
            OrderId::from("ord-1"),
            &Broth::new("", "Miso"),
            &Protein::new("p1", "Pork"),
        );
        assert!(matches!(order.on_create(), Err(OrderError::ValidationError(_))));
    }
}
