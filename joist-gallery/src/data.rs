//! Sample datasets and column definitions for the stories and demo.

use joist::node::Node;
use joist::style::Style;
use joist::widgets::{CellValue, Column};

/// A user record for the table demos.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub active: bool,
    pub last_login: String,
}

impl User {
    fn new(id: u32, name: &str, email: &str, role: &str, active: bool, last_login: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            active,
            last_login: last_login.to_string(),
        }
    }
}

/// A product record for the table demos.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    pub rating: f64,
}

impl Product {
    fn new(id: &str, name: &str, price: f64, category: &str, in_stock: bool, rating: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            category: category.to_string(),
            in_stock,
            rating,
        }
    }
}

/// Create the sample users shown across the table stories and the demo page.
pub fn sample_users() -> Vec<User> {
    vec![
        User::new(1, "John Doe", "john@example.com", "Developer", true, "2024-01-15"),
        User::new(2, "Jane Smith", "jane@example.com", "Designer", true, "2024-01-14"),
        User::new(3, "Bob Johnson", "bob@example.com", "Manager", false, "2024-01-10"),
        User::new(4, "Alice Brown", "alice@example.com", "Developer", true, "2024-01-13"),
        User::new(5, "Charlie Wilson", "charlie@example.com", "Analyst", true, "2024-01-12"),
        User::new(6, "Diana Prince", "diana@example.com", "Designer", true, "2024-01-11"),
    ]
}

/// Create the sample products for the product table story.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("P001", "Laptop", 999.99, "Electronics", true, 4.5),
        Product::new("P002", "Mouse", 29.99, "Electronics", true, 4.2),
        Product::new("P003", "Keyboard", 89.99, "Electronics", false, 4.0),
        Product::new("P004", "Monitor", 299.99, "Electronics", true, 4.7),
        Product::new("P005", "Headphones", 149.99, "Audio", true, 4.3),
    ]
}

/// Column definitions for the user tables.
pub fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("id", "ID", |u: &User| u.id.into())
            .sortable()
            .width(4),
        Column::new("name", "Name", |u: &User| u.name.as_str().into()).sortable(),
        Column::new("email", "Email", |u: &User| u.email.as_str().into()).sortable(),
        Column::new("role", "Role", |u: &User| u.role.as_str().into()).sortable(),
        Column::new("status", "Status", |u: &User| {
            if u.active { "Active" } else { "Inactive" }.into()
        })
        .sortable()
        .width(8)
        .render_with(|value, _, _| status_badge(value)),
        Column::new("last_login", "Last Login", |u: &User| {
            u.last_login.as_str().into()
        })
        .sortable(),
    ]
}

/// Column definitions for the product table.
pub fn product_columns() -> Vec<Column<Product>> {
    vec![
        Column::new("id", "Product ID", |p: &Product| p.id.as_str().into()).sortable(),
        Column::new("name", "Product Name", |p: &Product| {
            p.name.as_str().into()
        })
        .sortable(),
        Column::new("price", "Price", |p: &Product| p.price.into())
            .sortable()
            .width(8)
            .render_with(|value, _, _| match value {
                CellValue::Float(price) => Node::text(format!("${price:.2}")),
                other => Node::text(other.to_string()),
            }),
        Column::new("category", "Category", |p: &Product| {
            p.category.as_str().into()
        })
        .sortable(),
        Column::new("in_stock", "In Stock", |p: &Product| p.in_stock.into())
            .sortable()
            .width(8)
            .render_with(|value, _, _| match value {
                CellValue::Bool(true) => {
                    Node::text_styled("Yes", Style::new().fg_named("success"))
                }
                _ => Node::text_styled("No", Style::new().fg_named("error")),
            }),
        Column::new("rating", "Rating", |p: &Product| p.rating.into())
            .sortable()
            .width(8)
            .render_with(|value, _, _| {
                Node::row(vec![
                    Node::text_styled("★", Style::new().fg_named("warning")),
                    Node::text(format!(" {value}")),
                ])
            }),
    ]
}

/// Badge-style status cell, green for active and red otherwise.
fn status_badge(value: &CellValue) -> Node {
    let text = value.to_string();
    let style = if text == "Active" {
        Style::new().fg_named("success")
    } else {
        Style::new().fg_named("error")
    };
    Node::text_styled(text, style)
}
