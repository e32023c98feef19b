//! Minimal HTML rendering for the product pages.

use std::fmt::Write;

use crate::modules::products::controllers::page::{View, ViewModel};
use crate::modules::products::models::Product;

pub fn render(view: &View) -> String {
    let body = match (&view.model, view.name) {
        (ViewModel::Products(products), _) => index(products),
        (ViewModel::Product(product), "Details") => details(product),
        (ViewModel::Product(product), "Delete") => delete(product),
        (ViewModel::Product(product), "Edit") => {
            form(&format!("/products/edit/{}", product.id), Some(product), &view.errors)
        }
        (ViewModel::Product(product), _) => form("/products/create", Some(product), &view.errors),
        (ViewModel::Blank, _) => form("/products/create", None, &view.errors),
    };

    layout(view.name, &body)
}

pub fn not_found() -> String {
    layout("Not Found", "<p>The requested product does not exist.</p>")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title} - Products</title></head>\n\
         <body>\n<h1>{title}</h1>\n{body}\n<p><a href=\"/products\">Back to List</a></p>\n</body>\n</html>\n",
        title = escape(title),
        body = body
    )
}

fn index(products: &[Product]) -> String {
    let mut html = String::from(
        "<p><a href=\"/products/create\">Create New</a></p>\n<table>\n\
         <tr><th>Name</th><th>Price</th><th>Stock</th><th>Color</th><th></th></tr>\n",
    );

    for product in products {
        let _ = writeln!(
            html,
            "<tr><td>{name}</td><td>{price}</td><td>{stock}</td><td>{color}</td>\
             <td><a href=\"/products/edit/{id}\">Edit</a> | \
             <a href=\"/products/details/{id}\">Details</a> | \
             <a href=\"/products/delete/{id}\">Delete</a></td></tr>",
            id = product.id,
            name = escape(&product.name),
            price = product.price,
            stock = product.stock,
            color = escape(&product.color),
        );
    }

    html.push_str("</table>");
    html
}

fn details(product: &Product) -> String {
    format!(
        "<dl>\n<dt>Name</dt><dd>{}</dd>\n<dt>Price</dt><dd>{}</dd>\n\
         <dt>Stock</dt><dd>{}</dd>\n<dt>Color</dt><dd>{}</dd>\n</dl>\n\
         <p><a href=\"/products/edit/{}\">Edit</a></p>",
        escape(&product.name),
        product.price,
        product.stock,
        escape(&product.color),
        product.id
    )
}

fn delete(product: &Product) -> String {
    format!(
        "<h3>Are you sure you want to delete this?</h3>\n{}\n\
         <form method=\"post\" action=\"/products/delete/{}\">\
         <input type=\"submit\" value=\"Delete\"></form>",
        details(product),
        product.id
    )
}

fn form(action: &str, product: Option<&Product>, errors: &[String]) -> String {
    let mut html = String::new();

    if !errors.is_empty() {
        html.push_str("<ul class=\"errors\">\n");
        for error in errors {
            let _ = writeln!(html, "<li>{}</li>", escape(error));
        }
        html.push_str("</ul>\n");
    }

    let _ = writeln!(html, "<form method=\"post\" action=\"{}\">", escape(action));

    if let Some(product) = product.filter(|p| p.id != 0) {
        let _ = writeln!(
            html,
            "<input type=\"hidden\" name=\"id\" value=\"{}\">",
            product.id
        );
    }

    let name = product.map(|p| p.name.as_str()).unwrap_or_default();
    let color = product.map(|p| p.color.as_str()).unwrap_or_default();
    let price = product.map(|p| p.price.to_string()).unwrap_or_default();
    let stock = product.map(|p| p.stock.to_string()).unwrap_or_default();

    for (label, field, value) in [
        ("Name", "name", name.to_string()),
        ("Price", "price", price),
        ("Stock", "stock", stock),
        ("Color", "color", color.to_string()),
    ] {
        let _ = writeln!(
            html,
            "<label>{label} <input name=\"{field}\" value=\"{value}\"></label><br>",
            label = label,
            field = field,
            value = escape(&value)
        );
    }

    html.push_str("<input type=\"submit\" value=\"Save\">\n</form>");
    html
}

/// Escape text for HTML element and attribute content
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
