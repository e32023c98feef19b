use actix_web::{
    body::BoxBody,
    http::header::{self, ContentType},
    HttpRequest, HttpResponse, Responder,
};

use crate::modules::products::controllers::views;
use crate::modules::products::models::Product;

/// Action name of the product list page
pub const INDEX_ACTION: &str = "Index";

/// Outcome of a page request
#[derive(Debug)]
pub enum PageResult {
    /// Render a view with its model
    View(View),
    /// Send the browser to another page action
    RedirectToAction(&'static str),
    NotFound,
}

#[derive(Debug)]
pub struct View {
    pub name: &'static str,
    pub model: ViewModel,
    pub errors: Vec<String>,
}

#[derive(Debug)]
pub enum ViewModel {
    Products(Vec<Product>),
    Product(Product),
    Blank,
}

impl View {
    pub fn new(name: &'static str, model: ViewModel) -> Self {
        Self {
            name,
            model,
            errors: Vec::new(),
        }
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    pub fn product(&self) -> Option<&Product> {
        match &self.model {
            ViewModel::Product(product) => Some(product),
            _ => None,
        }
    }

    pub fn products(&self) -> Option<&[Product]> {
        match &self.model {
            ViewModel::Products(products) => Some(products),
            _ => None,
        }
    }
}

impl PageResult {
    pub fn view(name: &'static str, model: ViewModel) -> Self {
        PageResult::View(View::new(name, model))
    }

    pub fn redirect_to_index() -> Self {
        PageResult::RedirectToAction(INDEX_ACTION)
    }
}

/// URL of a page action
pub fn action_path(action: &str) -> String {
    if action == INDEX_ACTION {
        "/products".to_string()
    } else {
        format!("/products/{}", action.to_ascii_lowercase())
    }
}

impl Responder for PageResult {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        match self {
            PageResult::View(view) => HttpResponse::Ok()
                .content_type(ContentType::html())
                .body(views::render(&view)),
            PageResult::RedirectToAction(action) => HttpResponse::Found()
                .insert_header((header::LOCATION, action_path(action)))
                .finish(),
            PageResult::NotFound => HttpResponse::NotFound()
                .content_type(ContentType::html())
                .body(views::not_found()),
        }
    }
}
