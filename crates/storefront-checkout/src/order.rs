// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Customer details and the human-readable order summary.

use std::fmt;

use serde::{Deserialize, Serialize};
use storefront_core::{StoreConfig, StorefrontError};

use crate::cart::Cart;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━";

/// Delivery details collected from the customer at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub payment_method: String,
    #[serde(default)]
    pub preferred_time: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl CustomerInfo {
    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("full_name", &self.full_name),
            ("phone", &self.phone),
            ("address", &self.address),
            ("payment_method", &self.payment_method),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// A validated order, rendered through `Display`.
#[derive(Debug)]
pub struct OrderSummary<'a> {
    store: &'a StoreConfig,
    tagline: &'a str,
    cart: &'a Cart,
    customer: &'a CustomerInfo,
}

impl<'a> OrderSummary<'a> {
    /// Refuses an empty cart, then any blank required customer field.
    pub fn new(
        store: &'a StoreConfig,
        tagline: &'a str,
        cart: &'a Cart,
        customer: &'a CustomerInfo,
    ) -> Result<Self, StorefrontError> {
        if cart.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }
        let missing = customer.missing_fields();
        if !missing.is_empty() {
            return Err(StorefrontError::MissingFields { fields: missing });
        }
        Ok(Self {
            store,
            tagline,
            cart,
            customer,
        })
    }
}

fn optional(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl fmt::Display for OrderSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🎯 *¡NUEVA ORDEN DE COMPRA!* 🎯")?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;
        writeln!(f, "🏪 *Tienda:* {}", self.store.name)?;
        if !self.tagline.is_empty() {
            writeln!(f, "💡 *\"{}\"*", self.tagline)?;
        }
        writeln!(f)?;

        writeln!(f, "📦 *PRODUCTOS SELECCIONADOS:*")?;
        writeln!(f, "{RULE}")?;
        for (index, item) in self.cart.items().iter().enumerate() {
            writeln!(f, "{}. 🧸 {} x{}", index + 1, item.name, item.quantity)?;
            writeln!(
                f,
                "   💰 ${:.2} c/u = ${:.2}",
                item.price,
                item.subtotal()
            )?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "💎 *TOTAL A PAGAR: ${:.2}*", self.cart.total())?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;

        let customer = self.customer;
        writeln!(f, "👤 *DATOS DE ENTREGA:*")?;
        writeln!(f, "Nombre completo: {}", customer.full_name.trim())?;
        writeln!(f, "Teléfono de contacto: {}", customer.phone.trim())?;
        writeln!(f, "Dirección de entrega: {}", customer.address.trim())?;
        writeln!(f, "Método de pago: {}", customer.payment_method.trim())?;
        if let Some(time) = optional(customer.preferred_time.as_ref()) {
            writeln!(f, "Horario preferido: {time}")?;
        }
        if let Some(comments) = optional(customer.comments.as_ref()) {
            writeln!(f, "Comentarios: {comments}")?;
        }
        writeln!(f)?;

        writeln!(f, "📞 *INFORMACIÓN DE CONTACTO:*")?;
        writeln!(f, "📧 Email: {}", self.store.email)?;
        writeln!(f, "📍 Dirección: {}", self.store.address)?;
        writeln!(f)?;

        writeln!(f, "💳 *MÉTODOS DE PAGO DISPONIBLES:*")?;
        for (index, method) in self.store.payment_methods.iter().enumerate() {
            writeln!(f, "{}. ✅ {method}", index + 1)?;
        }
        writeln!(f)?;
        writeln!(f, "🚚 *ZONAS DE DELIVERY DISPONIBLES:*")?;
        for (index, zone) in self.store.delivery_zones.iter().enumerate() {
            writeln!(f, "{}. 📍 {zone}", index + 1)?;
        }
        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "¡Gracias por confiar en nosotros! 🌟")?;
        write!(f, "Responderemos tu pedido a la brevedad 🚀")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Product, ProductId};

    fn customer() -> CustomerInfo {
        CustomerInfo {
            full_name: "Ana Pérez".into(),
            phone: "555-0101".into(),
            address: "Calle 5 #10".into(),
            payment_method: "Efectivo".into(),
            preferred_time: Some("Tarde".into()),
            comments: None,
        }
    }

    fn cart() -> Cart {
        let mut cart = Cart::new();
        let product = Product {
            id: ProductId(1),
            name: "Pelota".into(),
            price: 12.5,
            description: String::new(),
            age: "3+".into(),
            skills: vec![],
            collection: "General".into(),
            image: None,
            visible: true,
            stock: 0,
        };
        cart.add(&product);
        cart.add(&product);
        cart
    }

    #[test]
    fn blank_required_fields_are_listed() {
        let info = CustomerInfo {
            phone: "  ".into(),
            ..customer()
        };
        assert_eq!(info.missing_fields(), vec!["phone"]);
        assert_eq!(
            CustomerInfo::default().missing_fields(),
            vec!["full_name", "phone", "address", "payment_method"]
        );
    }

    #[test]
    fn empty_cart_is_refused() {
        let store = StoreConfig::default();
        let err = OrderSummary::new(&store, "", &Cart::new(), &customer()).expect_err("empty");
        assert!(matches!(err, StorefrontError::EmptyCart));
    }

    #[test]
    fn incomplete_customer_is_refused() {
        let store = StoreConfig::default();
        let cart = cart();
        let info = CustomerInfo {
            address: String::new(),
            ..customer()
        };
        let err = OrderSummary::new(&store, "", &cart, &info).expect_err("missing address");
        assert!(matches!(err, StorefrontError::MissingFields { fields } if fields == vec!["address"]));
    }

    #[test]
    fn summary_lists_items_totals_and_store_info() {
        let store = StoreConfig::default();
        let cart = cart();
        let info = customer();
        let text = OrderSummary::new(&store, "Lema", &cart, &info)
            .expect("valid order")
            .to_string();

        assert!(text.contains(&format!("*Tienda:* {}", store.name)));
        assert!(text.contains("\"Lema\""));
        assert!(text.contains("1. 🧸 Pelota x2"));
        assert!(text.contains("$12.50 c/u = $25.00"));
        assert!(text.contains("TOTAL A PAGAR: $25.00"));
        assert!(text.contains("Nombre completo: Ana Pérez"));
        assert!(text.contains("Horario preferido: Tarde"));
        assert!(!text.contains("Comentarios:"));
        assert!(text.contains("1. ✅ Efectivo"));
        assert!(text.contains("5. 📍 Oeste"));
    }
}
