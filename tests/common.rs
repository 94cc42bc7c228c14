//! Common test utilities and fixtures for schema filtering tests
//!
//! This module provides a shared shop schema and helpers to check the
//! consistency of a filtered graph.

#![allow(dead_code)]

use schemascope::{Column, Schema, SchemaBuilder, Table};
use std::collections::HashSet;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A small shop database.
///
/// ```text
/// user_profiles ─┐
/// user_secret ───┼─> users <─ orders <─ order_items ─> products ─> categories
/// legacy_orders ─┘              ^
///                  invoices ────┘
/// settings (isolated), order_summary (view over orders, users)
/// ```
pub fn shop_schema() -> Schema {
    SchemaBuilder::new("shop")
        .table(
            Table::new("users")
                .with_column(Column::new("id", "int"))
                .with_column(Column::new("email", "text").with_label("pii")),
        )
        .table(Table::new("user_profiles").with_column(Column::new("user_id", "int")))
        .table(
            Table::new("user_secret")
                .with_label("pii")
                .with_column(Column::new("user_id", "int"))
                .with_column(Column::new("password_hash", "text")),
        )
        .table(
            Table::new("orders")
                .with_column(Column::new("id", "int"))
                .with_column(Column::new("user_id", "int")),
        )
        .table(
            Table::new("order_items")
                .with_column(Column::new("order_id", "int"))
                .with_column(Column::new("product_id", "int")),
        )
        .table(
            Table::new("products")
                .with_column(Column::new("id", "int"))
                .with_column(Column::new("category_id", "int").nullable()),
        )
        .table(Table::new("categories").with_column(Column::new("id", "int")))
        .table(Table::new("legacy_orders").with_column(Column::new("user_id", "int")))
        .table(
            Table::new("invoices")
                .with_label("billing")
                .with_column(Column::new("order_id", "int")),
        )
        .table(Table::new("settings").with_column(Column::new("key", "text")))
        .table(
            Table::new("order_summary")
                .with_type("VIEW")
                .with_referenced_table("orders")
                .with_referenced_table("users"),
        )
        .relation("user_profiles", &["user_id"], "users", &["id"])
        .relation("user_secret", &["user_id"], "users", &["id"])
        .relation("orders", &["user_id"], "users", &["id"])
        .relation("order_items", &["order_id"], "orders", &["id"])
        .relation("order_items", &["product_id"], "products", &["id"])
        .relation("products", &["category_id"], "categories", &["id"])
        .relation("legacy_orders", &["user_id"], "users", &["id"])
        .relation("invoices", &["order_id"], "orders", &["id"])
        .build()
        .expect("shop schema is consistent")
}

pub fn names(tables: &[&Table]) -> Vec<String> {
    tables.iter().map(|t| t.name.clone()).collect()
}

pub fn sorted(names: &[&str]) -> Vec<String> {
    let mut names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    names.sort();
    names
}

/// Panics if any relation, column back-reference or view reference points
/// at something no longer in the schema.
pub fn assert_no_dangling_references(schema: &Schema) {
    let tables: HashSet<&str> = schema.tables.iter().map(|t| t.name.as_str()).collect();
    let relations: HashSet<_> = schema.relations.iter().map(|r| r.id).collect();

    for relation in &schema.relations {
        assert!(
            tables.contains(relation.table.as_str()),
            "relation {} references removed table {}",
            relation.id,
            relation.table
        );
        assert!(
            tables.contains(relation.parent_table.as_str()),
            "relation {} references removed table {}",
            relation.id,
            relation.parent_table
        );
    }

    for table in &schema.tables {
        for column in &table.columns {
            for id in column.child_relations.iter().chain(&column.parent_relations) {
                assert!(
                    relations.contains(id),
                    "column {}.{} still lists removed relation {}",
                    table.name,
                    column.name,
                    id
                );
            }
        }
        for referenced in &table.referenced_tables {
            assert!(
                tables.contains(referenced.as_str()),
                "view {} still references removed table {}",
                table.name,
                referenced
            );
        }
    }
}
