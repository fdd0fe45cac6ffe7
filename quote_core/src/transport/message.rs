//! Seller notification composed from a quote request

use super::sink::NotificationMessage;
use crate::models::QuoteRequest;

pub fn quote_subject(subject_name: &str) -> String {
    format!("New Quote Request for {}", subject_name)
}

pub fn compose_quote_message(request: &QuoteRequest, sender: &str) -> NotificationMessage {
    NotificationMessage {
        from: sender.to_string(),
        to: vec![request.recipient_address.clone()],
        subject: quote_subject(&request.subject_name),
        html: html_body(request),
        text: text_body(request),
    }
}

fn html_body(request: &QuoteRequest) -> String {
    let mut html = String::new();
    html.push_str("<h2>New Domain Quote Request</h2>\n");
    html.push_str(&format!(
        "<p><strong>Domain:</strong> {}</p>\n",
        escape_html(&request.subject_name)
    ));
    html.push_str(&format!(
        "<p><strong>Offered Price:</strong> {}</p>\n",
        escape_html(&request.formatted_offer())
    ));
    html.push_str("<h3>Buyer Information:</h3>\n");
    html.push_str(&format!("<p><strong>Name:</strong> {}</p>\n", escape_html(&request.buyer_name)));
    html.push_str(&format!("<p><strong>Email:</strong> {}</p>\n", escape_html(&request.buyer_email)));
    html.push_str(&format!("<p><strong>Phone:</strong> {}</p>\n", escape_html(&request.buyer_phone)));
    if let Some(message) = &request.message {
        html.push_str(&format!("<p><strong>Message:</strong> {}</p>\n", escape_html(message)));
    }
    html
}

fn text_body(request: &QuoteRequest) -> String {
    let mut text = format!(
        "New Domain Quote Request\n\nDomain: {}\nOffered Price: {}\n\nBuyer Information:\nName: {}\nEmail: {}\nPhone: {}\n",
        request.subject_name,
        request.formatted_offer(),
        request.buyer_name,
        request.buyer_email,
        request.buyer_phone,
    );
    if let Some(message) = &request.message {
        text.push_str(&format!("Message: {}\n", message));
    }
    text
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
