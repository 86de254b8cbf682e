//! HTML pages for the booking form and its confirmation.

use axum::response::Html;
use deskbooker_core::page::Confirmation;
use deskbooker_core::validation::{DATE_KEY, EMAIL_KEY, FIRST_NAME_KEY, LAST_NAME_KEY};
use deskbooker_core::{BookingForm, ModelState};

use crate::utils::escape_html;

pub const BOOK_PATH: &str = "/api/desks/book";
pub const CONFIRMATION_PATH: &str = "/api/desks/confirmation";

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} - DeskBooker</title>\n</head>\n<body>\n<main>\n{body}</main>\n</body>\n</html>\n",
        title = escape_html(title),
    ))
}

fn field(
    html: &mut String,
    state: &ModelState,
    key: &str,
    name: &str,
    label: &str,
    input_type: &str,
    value: &str,
) {
    html.push_str(&format!(
        "<div class=\"field\">\n<label for=\"{name}\">{label}</label>\n\
         <input id=\"{name}\" name=\"{name}\" type=\"{input_type}\" value=\"{value}\">\n",
        value = escape_html(value),
    ));
    for message in state.errors_for(key) {
        html.push_str(&format!(
            "<span class=\"field-validation-error\" data-valmsg-for=\"{key}\">{}</span>\n",
            escape_html(message)
        ));
    }
    html.push_str("</div>\n");
}

/// The booking form, showing submitted values and any model errors.
pub fn book_form(form: &BookingForm, state: &ModelState) -> Html<String> {
    let mut body = String::from("<h1>Book a desk</h1>\n");

    if !state.is_valid() {
        body.push_str("<div class=\"validation-summary-errors\">\n<ul>\n");
        for (_, messages) in state.iter() {
            for message in messages {
                body.push_str(&format!("<li>{}</li>\n", escape_html(message)));
            }
        }
        body.push_str("</ul>\n</div>\n");
    }

    body.push_str(&format!("<form method=\"post\" action=\"{BOOK_PATH}\">\n"));
    field(&mut body, state, FIRST_NAME_KEY, "first_name", "First Name", "text", &form.first_name);
    field(&mut body, state, LAST_NAME_KEY, "last_name", "Last Name", "text", &form.last_name);
    field(&mut body, state, EMAIL_KEY, "email", "Email", "email", &form.email);
    field(&mut body, state, DATE_KEY, "date", "Date", "date", &form.date);
    body.push_str("<button type=\"submit\">Book desk</button>\n</form>\n");

    layout("Book a desk", &body)
}

pub fn confirmation(confirmation: &Confirmation) -> Html<String> {
    let body = format!(
        "<h1>Desk booked</h1>\n<p>Thank you {first_name}, your desk is booked for {date}.</p>\n\
         <p>Booking number: <strong>{booking_id}</strong></p>\n\
         <p><a href=\"{BOOK_PATH}\">Book another desk</a></p>\n",
        first_name = escape_html(&confirmation.first_name),
        date = confirmation.date,
        booking_id = confirmation.booking_id,
    );
    layout("Desk booked", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use deskbooker_core::BookingId;

    #[test]
    fn form_keeps_submitted_values_escaped() {
        let form = BookingForm {
            first_name: "<Eddie>".to_string(),
            ..BookingForm::default()
        };

        let Html(html) = book_form(&form, &ModelState::default());

        assert!(html.contains("value=\"&lt;Eddie&gt;\""));
        assert!(!html.contains("validation-summary-errors"));
    }

    #[test]
    fn form_lists_errors_next_to_fields() {
        let mut state = ModelState::default();
        state.add_error(DATE_KEY, "No desk available");

        let Html(html) = book_form(&BookingForm::default(), &state);

        assert!(html.contains("<li>No desk available</li>"));
        assert!(html.contains(&format!(
            "data-valmsg-for=\"{DATE_KEY}\">No desk available</span>"
        )));
    }

    #[test]
    fn confirmation_shows_booking_details() {
        let Html(html) = confirmation(&Confirmation {
            booking_id: BookingId(666),
            first_name: "Eddie".to_string(),
            date: NaiveDate::from_ymd_opt(2020, 7, 12).unwrap(),
        });

        assert!(html.contains("Thank you Eddie"));
        assert!(html.contains("2020-07-12"));
        assert!(html.contains("<strong>666</strong>"));
    }
}
