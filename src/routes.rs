use crate::inference::PriceModel;
use crate::models::PredictForm;
use actix_web::{get, post, web, HttpResponse, Responder};
use log::{info, warn};
use std::sync::Arc;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
const RESULT_SLOT: &str = "{{ prediction_text }}";

/// Registers every route of the service. Shared between `main` and the
/// integration tests so both run the exact same app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(health).service(predict);
}

#[get("/")]
async fn index() -> impl Responder {
    html_page(render_page(""))
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

#[post("/predict")]
async fn predict(
    model: web::Data<Arc<PriceModel>>,
    form: web::Form<PredictForm>,
) -> impl Responder {
    let text = match form.parse() {
        Ok(input) => {
            let price = model.predict(&input);
            info!(
                "predicted {:.2} for area={} bedrooms={} location='{}'",
                price, input.area, input.bedrooms, input.location
            );
            format!("Predicted Price: {:.2} units", price)
        }
        Err(message) => {
            warn!("rejected form input: {}", message);
            format!("Error: {}", message)
        }
    };

    html_page(render_page(&text))
}

/// Substitute the result line into the form page. The text may echo user
/// input, so it is escaped before landing in the markup.
fn render_page(prediction_text: &str) -> String {
    INDEX_TEMPLATE.replace(RESULT_SLOT, &escape_html(prediction_text))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

fn html_page(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}
