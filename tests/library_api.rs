//! Drives the public library API against a mock server.

mod common;

use std::collections::BTreeMap;

use catalog_mirror::domain::ApiConfig;
use catalog_mirror::{
    AppError, AssumeYes, CatalogService, CatalogView, HttpProductStore, Message, Product,
    ProductAction, ProductField, ProductForm, RenderMode,
};
use common::{MOUSE, TestContext};
use mockito::Matcher;

#[derive(Default)]
struct Transcript {
    lines: Vec<String>,
}

impl CatalogView for Transcript {
    fn render_all(&mut self, products: &[Product]) {
        let names: Vec<&str> = products.iter().map(|product| product.name.as_str()).collect();
        self.lines.push(format!("listing [{}]", names.join(", ")));
    }

    fn render_match(&mut self, product: &Product, category: &str, actions: &[ProductAction]) {
        let line = format!("match {} in {} ({} actions)", product.name, category, actions.len());
        self.lines.push(line);
    }

    fn render_not_found(&mut self, term: &str) {
        self.lines.push(format!("missing {}", term));
    }

    fn update_field(&mut self, name: &str, field: ProductField, value: &str) {
        self.lines.push(format!("{} {} {}", name, field.label(), value));
    }

    fn render_categories(&mut self, categories: &BTreeMap<String, String>) {
        self.lines.push(format!("{} categories", categories.len()));
    }

    fn show_message(&mut self, message: &Message) {
        self.lines.push(message.to_string());
    }

    fn reset_form(&mut self) {
        self.lines.push("reset".into());
    }
}

fn session(ctx: &TestContext) -> CatalogService<HttpProductStore, Transcript> {
    let config = ApiConfig { base_url: ctx.api_url().parse().unwrap(), ..ApiConfig::default() };
    let store = HttpProductStore::new(&config).unwrap();
    CatalogService::new(store, Transcript::default(), RenderMode::Incremental)
}

#[test]
fn create_find_delete_lifecycle() {
    let mut ctx = TestContext::new();
    ctx.serve_listing("[]");
    ctx.server()
        .mock("POST", "/products")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(MOUSE)
        .create();
    ctx.serve_search("mouse", &format!("[{}]", MOUSE));
    let deleted = ctx.server().mock("DELETE", "/products/7").with_status(200).create();

    let mut service = session(&ctx);
    assert_eq!(service.load().unwrap(), 0);

    let created = service.create(&ProductForm::new("Mouse", "19.99", "Accessories")).unwrap();
    assert_eq!(created.name, "mouse");
    assert!(service.mirror().contains_name("mouse"));
    assert_eq!(service.category_of("mouse"), "accessories");
    assert_eq!(service.category_of("pad"), "uncategorized");

    let found = service.find_by_name("MOUSE").unwrap();
    assert_eq!(found.map(|product| product.price), Some(19.99));

    service.delete("mouse", &mut AssumeYes).unwrap();
    assert!(service.mirror().is_empty());
    deleted.assert();

    assert_eq!(service.view().lines, vec![
        "listing []".to_string(),
        "listing [mouse]".to_string(),
        "✅ Product \"mouse\" added successfully.".to_string(),
        "reset".to_string(),
        "match mouse in accessories (4 actions)".to_string(),
        "listing []".to_string(),
        "✅ Product deleted successfully.".to_string(),
    ]);
}

#[test]
fn remote_failure_during_edit_keeps_mirror() {
    let mut ctx = TestContext::new();
    ctx.serve_listing(&format!("[{}]", MOUSE));
    ctx.serve_search("mouse", &format!("[{}]", MOUSE));
    ctx.server()
        .mock("PATCH", "/products/7")
        .match_body(Matcher::Json(serde_json::json!({ "category": "pointing" })))
        .with_status(503)
        .create();

    let mut service = session(&ctx);
    service.load().unwrap();

    let err = service.edit_category("mouse", "Pointing").unwrap_err();
    assert!(matches!(err, AppError::Api { status: Some(503), .. }));
    assert_eq!(err.to_string(), "Error updating category: Server error");
    assert_eq!(service.mirror().get("mouse").unwrap().category, "accessories");
}
