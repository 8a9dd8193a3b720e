//! HTML page rendering.
//!
//! Templates are compiled into the binary and registered once at startup.
//! Tera escapes every interpolated value because all template names end in
//! `.html`.

use axum::response::Html;
use serde::Serialize;
use tailorshop_core::price::format_cents;
use tailorshop_core::types::DbId;
use tailorshop_core::validation::FieldErrors;
use tailorshop_db::models::account::{Account, AccountSummary};
use tailorshop_db::models::dress::Dress;
use tera::{Context, Tera};

use crate::error::{AppError, AppResult};
use crate::forms::FormEcho;

pub const LOGIN_TEMPLATE: &str = "login.html";
pub const REGISTER_TEMPLATE: &str = "register.html";
pub const HOME_TEMPLATE: &str = "home.html";
pub const SUBMIT_MEASUREMENTS_TEMPLATE: &str = "submit_measurements.html";
pub const TAILOR_WORK_TEMPLATE: &str = "tailor_work.html";

/// Compile every page template.
pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        (LOGIN_TEMPLATE, include_str!("../templates/login.html")),
        (REGISTER_TEMPLATE, include_str!("../templates/register.html")),
        (HOME_TEMPLATE, include_str!("../templates/home.html")),
        (
            SUBMIT_MEASUREMENTS_TEMPLATE,
            include_str!("../templates/submit_measurements.html"),
        ),
        (TAILOR_WORK_TEMPLATE, include_str!("../templates/tailor_work.html")),
    ])?;
    Ok(tera)
}

/// Render `template` with `context` into an HTML response body.
pub fn render(tera: &Tera, template: &str, context: &Context) -> AppResult<Html<String>> {
    tera.render(template, context)
        .map(Html)
        .map_err(|e| AppError::InternalError(format!("Template error in {template}: {e}")))
}

/// Start a page context, with the navigation bar's account when logged in.
pub fn page_context(account: Option<&Account>) -> Context {
    let mut context = Context::new();
    if let Some(account) = account {
        context.insert("current_user", &AccountSummary::from(account));
    }
    context
}

/// Page context for a (re-)rendered form.
pub fn form_context(account: Option<&Account>, form: &FormEcho, errors: &FieldErrors) -> Context {
    let mut context = page_context(account);
    context.insert("form", form);
    context.insert("errors", errors);
    context
}

/// A dress as shown in a list or on a form page.
#[derive(Debug, Serialize)]
pub struct DressCard {
    pub id: DbId,
    pub tailor_id: DbId,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: Option<String>,
}

impl From<Dress> for DressCard {
    fn from(dress: Dress) -> Self {
        let image_url = (!dress.image_path.is_empty())
            .then(|| format!("/media/{}", dress.image_path.trim_start_matches('/')));
        Self {
            id: dress.id,
            tailor_id: dress.tailor_id,
            name: dress.name,
            description: dress.description,
            price: format_cents(dress.price_cents),
            image_url,
        }
    }
}

pub fn dress_cards(dresses: Vec<Dress>) -> Vec<DressCard> {
    dresses.into_iter().map(DressCard::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_templates_compile() {
        let tera = build_templates().expect("templates should compile");
        for name in [
            LOGIN_TEMPLATE,
            REGISTER_TEMPLATE,
            HOME_TEMPLATE,
            SUBMIT_MEASUREMENTS_TEMPLATE,
            TAILOR_WORK_TEMPLATE,
        ] {
            assert!(
                tera.get_template_names().any(|n| n == name),
                "missing template {name}"
            );
        }
    }

    #[test]
    fn dress_card_formats_price_and_image() {
        let card = DressCard::from(Dress {
            id: 1,
            tailor_id: 2,
            name: "Test Dress".into(),
            description: "Test description".into(),
            price_cents: 10_000,
            image_path: "dresses/test_image.jpg".into(),
        });
        assert_eq!(card.price, "100.00");
        assert_eq!(card.image_url.as_deref(), Some("/media/dresses/test_image.jpg"));

        let card = DressCard::from(Dress {
            id: 1,
            tailor_id: 2,
            name: "Plain".into(),
            description: String::new(),
            price_cents: 0,
            image_path: String::new(),
        });
        assert!(card.image_url.is_none());
    }

    #[test]
    fn rendered_values_are_escaped() {
        let tera = build_templates().unwrap();
        let mut context = page_context(None);
        context.insert(
            "dresses",
            &vec![DressCard {
                id: 1,
                tailor_id: 1,
                name: "<script>alert(1)</script>".into(),
                description: String::new(),
                price: "1.00".into(),
                image_url: None,
            }],
        );
        let html = render(&tera, HOME_TEMPLATE, &context).unwrap().0;
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
