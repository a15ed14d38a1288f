use chrono::{DateTime, Duration, Utc};

use crate::domain::{
    BookingDetails, BookingType, CartItem, CustomerDetails, Order, OrderStatus, Product, ProductCreate, Role,
    UnitOfMeasure, UserRecord,
};

/// Records loaded into the stores before their actors start.
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub products: Vec<Product>,
    pub users: Vec<UserRecord>,
    pub orders: Vec<Order>,
}

fn product(id: &str, name: &str, description: &str, price: f64, unit: UnitOfMeasure, stock: f64, image: &str) -> Product {
    Product::from_parts(
        id,
        ProductCreate {
            name: name.to_string(),
            description: description.to_string(),
            price,
            unit,
            stock,
            image_url: format!("https://picsum.photos/seed/{image}/400/300"),
        },
    )
}

fn line(product: &Product, quantity: f64) -> CartItem {
    CartItem { product: product.clone(), quantity }
}

fn total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

impl Seed {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Demo catalog, accounts and order history. Dates are relative to `now`.
    pub fn demo(now: DateTime<Utc>) -> Self {
        use UnitOfMeasure::{Count, Weight};

        let products = vec![
            product("1", "Manzanas Fuji", "Crujientes y dulces, perfectas para comer solas o en tartas.", 2.5, Weight, 150.0, "apple"),
            product("2", "Plátanos de Canarias", "Con indicación geográfica protegida, sabor único y dulzor natural.", 1.9, Weight, 200.0, "banana"),
            product("3", "Aguacate Hass", "Cremoso y perfecto para guacamole, tostadas o ensaladas.", 2.1, Count, 80.0, "avocado"),
            product("4", "Tomates de Rama", "Ideales para ensaladas y salsas caseras.", 3.0, Weight, 120.0, "tomato"),
            product("5", "Zanahorias", "Frescas y llenas de vitaminas.", 1.2, Weight, 300.0, "carrot"),
            product("6", "Lechuga Iceberg", "Refrescante y crujiente para tus mejores ensaladas.", 0.9, Count, 90.0, "lettuce"),
            product("7", "Fresas de Huelva", "Dulces, jugosas y perfectas para postres o batidos.", 4.5, Weight, 50.0, "strawberry"),
            product("8", "Patatas Nuevas", "Versátiles y deliciosas, de piel fina y carne tierna.", 1.5, Weight, 400.0, "potato"),
        ];

        let users = vec![
            UserRecord::seeded("user-1", "Admin User", "admin@example.com", "password", Role::Admin),
            UserRecord::seeded("user-2", "Ana García", "cliente@example.com", "password123", Role::Customer),
            UserRecord::seeded("user-3", "Carlos Sanchez", "carlos.sanchez@example.com", "password456", Role::Customer),
        ];

        let juan = CustomerDetails::new("Juan Pérez", "juan.perez@example.com", "611223344", "Calle Falsa 123, Madrid");
        let ana = CustomerDetails::new("Ana García", "cliente@example.com", "655667788", "Avenida Siempreviva 742, Barcelona");
        let today = now.date_naive();

        let mut history = Vec::new();
        for (id, customer, items, booking_type, day_offset, slot, status, age_days) in [
            (
                "a1b2c3d4",
                juan,
                vec![line(&products[0], 2.0), line(&products[2], 3.0)],
                BookingType::HomeDelivery,
                1,
                "10:00 - 11:00",
                OrderStatus::Completed,
                2,
            ),
            (
                "e5f6g7h8",
                ana.clone(),
                vec![line(&products[3], 1.5), line(&products[5], 1.0)],
                BookingType::StorePickup,
                2,
                "17:00 - 18:00",
                OrderStatus::Preparing,
                1,
            ),
            (
                "i9j0k1l2",
                ana,
                vec![line(&products[6], 1.0)],
                BookingType::HomeDelivery,
                -5,
                "12:00 - 13:00",
                OrderStatus::Completed,
                5,
            ),
        ] {
            history.push(Order {
                id: id.to_string(),
                customer,
                total: total(&items),
                items,
                booking: BookingDetails {
                    booking_type,
                    date: today + Duration::days(day_offset),
                    time_slot: slot.to_string(),
                },
                status,
                created_at: now - Duration::days(age_days),
            });
        }

        Self { products, users, orders: history }
    }
}
