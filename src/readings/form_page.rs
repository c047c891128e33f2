//! The readings form and the result shown after submitting it.

use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    client::{CalculatedResult, ReadingInputs, Submission},
    endpoints,
    html::format_amount,
    readings::{PANEL_ID, ReadingsPageState, readings_page},
    theme::ThemeStyles,
};

/// Renders the readings form.
///
/// The inputs are pre-filled from the query string so that going back from
/// the result keeps what the user typed.
pub async fn get_readings_page(
    State(state): State<ReadingsPageState>,
    Query(inputs): Query<ReadingInputs>,
) -> Response {
    let mut client = state.client();
    client.set_inputs(inputs);

    let panel = form_view(client.inputs(), state.theme.styles());

    readings_page("Meter Readings", &panel, state.theme).into_response()
}

/// Handles the readings form: computes the result, stores it and responds with the result panel.
///
/// Responds with an error alert and stores nothing if any input is not a number.
pub async fn calculate_endpoint(
    State(state): State<ReadingsPageState>,
    Form(inputs): Form<ReadingInputs>,
) -> Response {
    let mut client = state.client();
    client.set_inputs(inputs);

    match client.calculate().await {
        Ok(result) => (StatusCode::OK, result_view(result, state.theme.styles())).into_response(),
        Err(error) => error.into_alert_response(),
    }
}

fn form_view(inputs: &ReadingInputs, styles: &ThemeStyles) -> Markup {
    let number_input = |name: &str, label: &str, value: &str| {
        html! {
            div
            {
                label for=(name) class=(styles.label) { (label) }

                input
                    id=(name)
                    type="number"
                    step="any"
                    name=(name)
                    placeholder=(label)
                    value=(value)
                    required
                    class=(styles.input);
            }
        }
    };

    html! {
        div id=(PANEL_ID) class=(styles.panel)
        {
            h1 class=(styles.heading) { "Meter Readings" }

            form
                hx-post=(endpoints::CALCULATE)
                hx-target={ "#" (PANEL_ID) }
                hx-swap="outerHTML"
                hx-target-error="#alert-container"
                class="w-full space-y-4"
            {
                (number_input("morning", "Morning Reading", &inputs.morning))
                (number_input("evening", "Evening Reading", &inputs.evening))
                (number_input("price", "Price", &inputs.price))

                button type="submit" class=(styles.button_primary) { "Calculate" }
            }

            div class="flex gap-4 mt-4"
            {
                a href=(endpoints::ROOT) class=(styles.button_secondary) { "Clear" }
                a href=(endpoints::CALCULATIONS_VIEW) class=(styles.button_secondary) { "Show Data" }
            }
        }
    }
}

fn result_view(result: &CalculatedResult, styles: &ThemeStyles) -> Markup {
    let go_back_url = format!(
        "{}?morning={}&evening={}&price={}",
        endpoints::ROOT,
        result.morning_reading,
        result.evening_reading,
        result.price
    );

    html! {
        div id=(PANEL_ID) class=(styles.panel)
        {
            h1 class=(styles.heading) { "Calculation Result" }

            p class=(styles.text)
            {
                "Morning Reading: " span class="font-semibold" { (result.morning_reading) }
            }
            p class=(styles.text)
            {
                "Evening Reading: " span class="font-semibold" { (result.evening_reading) }
            }
            p class=(styles.text)
            {
                "Price: " span class="font-semibold" { (result.price) }
            }
            p class={ (styles.text) " mt-4" }
            {
                "Total Cost: "
                span id="total-cost" class=(styles.result_value) { (format_amount(result.result)) }
            }

            @match &result.submission {
                Submission::Saved(_) => {
                    p data-submission="saved" class="mt-2 text-sm" { "Saved." }
                }
                Submission::Failed(reason) => {
                    p data-submission="failed" class="mt-2 text-sm text-red-500"
                    {
                        "This result could not be saved: " (reason)
                    }
                }
                Submission::Pending => {
                    p data-submission="pending" class="mt-2 text-sm" { "Saving..." }
                }
            }

            a href=(go_back_url) class={ (styles.button_back) " w-full mt-4" } { "Go Back" }
        }
    }
}


#[cfg(test)]
mod calculate_endpoint_tests {
    use axum::{Form, extract::State, http::StatusCode};
    use scraper::Selector;

    use crate::{
        calculation::get_all_calculations,
        client::ReadingInputs,
        readings::{form_page::calculate_endpoint, tests::get_test_state},
        test_utils::{assert_valid_html, parse_html_fragment},
    };

    fn inputs(morning: &str, evening: &str, price: &str) -> ReadingInputs {
        ReadingInputs {
            morning: morning.to_owned(),
            evening: evening.to_owned(),
            price: price.to_owned(),
        }
    }

    #[tokio::test]
    async fn shows_and_stores_result() {
        let state = get_test_state();

        let response = calculate_endpoint(State(state.clone()), Form(inputs("100", "150", "5"))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let total = html
            .select(&Selector::parse("#total-cost").unwrap())
            .next()
            .expect("Could not find total cost");
        assert_eq!(total.text().collect::<String>(), "250.00");
        assert!(
            html.select(&Selector::parse("[data-submission='saved']").unwrap())
                .next()
                .is_some(),
            "want the result to be marked as saved"
        );
        let go_back = html
            .select(&Selector::parse("a").unwrap())
            .next()
            .expect("Could not find go back link");
        assert_eq!(
            go_back.value().attr("href"),
            Some("/?morning=100&evening=150&price=5")
        );

        let connection = state.db_connection.lock().unwrap();
        let stored = get_all_calculations(&connection).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].result, 250.0);
    }

    #[tokio::test]
    async fn rejects_overflowing_result_without_storing() {
        let state = get_test_state();

        let response =
            calculate_endpoint(State(state.clone()), Form(inputs("-1e308", "1e308", "1"))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(get_all_calculations(&connection), Ok(vec![]));
    }

    #[tokio::test]
    async fn rejects_non_numeric_input_without_storing() {
        let state = get_test_state();

        let response = calculate_endpoint(State(state.clone()), Form(inputs("abc", "150", "5"))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Please enter valid numbers for all fields."));

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(get_all_calculations(&connection), Ok(vec![]));
    }
}
