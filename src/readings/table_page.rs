//! The table of stored calculations, one page at a time.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use time::UtcOffset;

use crate::{
    Error,
    calculation::{Calculation, CalculationId},
    client::{LocalReadingsApi, ReadingsClient},
    endpoints::{self, format_endpoint},
    html::{LINK_STYLE, format_amount},
    pagination::{Page, PaginationIndicator, create_pagination_indicators},
    readings::{PANEL_ID, ReadingsPageState, readings_page},
    theme::ThemeStyles,
    timezone::{format_long_date, get_local_offset},
};

/// The query parameters for the calculations page.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// The 1-based page to show. Defaults to the first page.
    pub page: Option<usize>,
}

/// Renders one page of the stored calculations.
///
/// If the calculations cannot be loaded the table is shown empty.
pub async fn get_calculations_page(
    State(state): State<ReadingsPageState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, Error> {
    let local_offset = get_local_offset(&state.local_timezone)
        .ok_or_else(|| Error::InvalidTimezoneError(state.local_timezone.clone()))?;

    let mut client = state.client();
    // Errors are logged by the client, an empty table is shown instead.
    let _ = client.load().await;
    client.show_data();
    client.go_to_page(query.page.unwrap_or(1));

    let panel = render_table(&client, &state, local_offset);

    Ok(readings_page("Calculations", &panel, state.theme).into_response())
}

/// Deletes a calculation from the table and responds with the table re-rendered.
///
/// The table stays on the requested page unless that page no longer exists,
/// in which case the last page is shown. Errors are sent back as an alert.
pub async fn delete_calculation_from_table(
    State(state): State<ReadingsPageState>,
    Path(calculation_id): Path<CalculationId>,
    Query(query): Query<PageQuery>,
) -> Response {
    let Some(local_offset) = get_local_offset(&state.local_timezone) else {
        return Error::InvalidTimezoneError(state.local_timezone.clone()).into_alert_response();
    };

    let mut client = state.client();
    if let Err(error) = client.load().await {
        return error.into_alert_response();
    }
    client.show_data();
    client.go_to_page(query.page.unwrap_or(1));

    if let Err(error) = client.delete(calculation_id).await {
        return error.into_alert_response();
    }

    render_table(&client, &state, local_offset).into_response()
}

fn render_table(
    client: &ReadingsClient<LocalReadingsApi>,
    state: &ReadingsPageState,
    local_offset: UtcOffset,
) -> Markup {
    let page = client.page();
    let indicators = create_pagination_indicators(
        page.number,
        page.page_count,
        state.pagination_config.max_pages,
    );

    table_view(&page, &indicators, local_offset, state.theme.styles())
}

fn page_url(page: usize) -> String {
    format!("{}?page={page}", endpoints::CALCULATIONS_VIEW)
}

fn delete_url(calculation_id: CalculationId, page: usize) -> String {
    format!(
        "{}?page={page}",
        format_endpoint(endpoints::CALCULATION_VIEW, calculation_id)
    )
}

fn calculation_row(
    serial: usize,
    page: usize,
    calculation: &Calculation,
    local_offset: UtcOffset,
    styles: &ThemeStyles,
) -> Markup {
    html! {
        tr class=(styles.table_row) data-calculation-id=(calculation.id)
        {
            td class=(styles.table_cell) { (serial) }
            td class=(styles.table_cell) { (calculation.morning_reading) }
            td class=(styles.table_cell) { (calculation.evening_reading) }
            td class=(styles.table_cell) { (calculation.price) }
            td class=(styles.table_cell) { (format_amount(calculation.result)) }
            td class=(styles.table_cell) { (format_long_date(calculation.timestamp, local_offset)) }
            td class=(styles.table_cell)
            {
                button
                    type="button"
                    hx-delete=(delete_url(calculation.id, page))
                    hx-target={ "#" (PANEL_ID) }
                    hx-swap="outerHTML"
                    hx-target-error="#alert-container"
                    hx-confirm="Are you sure you want to delete this calculation?"
                    class=(styles.button_delete)
                {
                    "Delete"
                }
            }
        }
    }
}

fn pagination_view(
    page: &Page<'_, Calculation>,
    indicators: &[PaginationIndicator],
    styles: &ThemeStyles,
) -> Markup {
    html! {
        nav class="flex flex-wrap items-center justify-center gap-2 mt-4" aria-label="Pagination"
        {
            @if !page.has_previous {
                button type="button" disabled class={ (styles.button_previous) " opacity-50 cursor-not-allowed" }
                {
                    "Previous"
                }
            }

            @for indicator in indicators {
                @match indicator {
                    PaginationIndicator::BackButton(number) => {
                        a href=(page_url(*number)) class=(styles.button_previous) { "Previous" }
                    }
                    PaginationIndicator::Page(number) => {
                        a href=(page_url(*number)) class=(styles.text) { (number) }
                    }
                    PaginationIndicator::CurrPage(number) => {
                        span aria-current="page" class={ (styles.text) " font-bold underline" } { (number) }
                    }
                    PaginationIndicator::Ellipsis => {
                        span class=(styles.text) { "..." }
                    }
                    PaginationIndicator::NextButton(number) => {
                        a href=(page_url(*number)) class=(styles.button_next) { "Next" }
                    }
                }
            }

            @if !page.has_next {
                button type="button" disabled class={ (styles.button_next) " opacity-50 cursor-not-allowed" }
                {
                    "Next"
                }
            }
        }
    }
}

fn table_view(
    page: &Page<'_, Calculation>,
    indicators: &[PaginationIndicator],
    local_offset: UtcOffset,
    styles: &ThemeStyles,
) -> Markup {
    html! {
        div id=(PANEL_ID) class={ (styles.panel) " max-w-5xl" }
        {
            h1 class=(styles.heading) { "Calculations" }

            div class="overflow-x-auto"
            {
                table class="w-full text-left"
                {
                    thead class=(styles.table_header)
                    {
                        tr
                        {
                            th class=(styles.table_cell) { "Serial Number" }
                            th class=(styles.table_cell) { "Morning Reading" }
                            th class=(styles.table_cell) { "Evening Reading" }
                            th class=(styles.table_cell) { "Price" }
                            th class=(styles.table_cell) { "Result" }
                            th class=(styles.table_cell) { "Date" }
                            th class=(styles.table_cell) { "Actions" }
                        }
                    }

                    tbody
                    {
                        @for (offset, calculation) in page.items.iter().enumerate() {
                            (calculation_row(
                                page.first_serial + offset,
                                page.number,
                                calculation,
                                local_offset,
                                styles,
                            ))
                        }

                        @if page.items.is_empty() {
                            tr
                            {
                                td colspan="7" class={ (styles.table_cell) " text-center" }
                                {
                                    "No calculations yet. "
                                    a href=(endpoints::ROOT) class=(LINK_STYLE) { "Enter some readings" }
                                    " to get started."
                                }
                            }
                        }
                    }
                }
            }

            (pagination_view(page, indicators, styles))

            a href=(endpoints::ROOT) class={ (styles.button_back) " mt-4" } { "Go Back" }
        }
    }
}
