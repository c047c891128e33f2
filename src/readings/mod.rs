//! The pages for entering meter readings and browsing stored calculations.
//!
//! Each request drives a fresh [ReadingsClient] over the application
//! database and renders the panel for the client's view mode.

mod form_page;
mod table_page;

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState,
    client::{LocalReadingsApi, ReadingsClient},
    html::{PAGE_CONTAINER_STYLE, base},
    pagination::PaginationConfig,
    theme::Theme,
};

pub use form_page::{calculate_endpoint, get_readings_page};
pub use table_page::{delete_calculation_from_table, get_calculations_page};

/// The state needed for the readings pages.
#[derive(Debug, Clone)]
pub struct ReadingsPageState {
    pub db_connection: Arc<Mutex<Connection>>,
    pub pagination_config: PaginationConfig,
    pub local_timezone: String,
    pub theme: Theme,
}

impl FromRef<AppState> for ReadingsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            pagination_config: state.pagination_config.clone(),
            local_timezone: state.local_timezone.clone(),
            theme: state.theme,
        }
    }
}

impl ReadingsPageState {
    fn client(&self) -> ReadingsClient<LocalReadingsApi> {
        ReadingsClient::new(
            LocalReadingsApi::new(self.db_connection.clone()),
            self.pagination_config.page_size,
        )
    }
}

/// The id of the element that holds the current panel.
const PANEL_ID: &str = "readings-panel";

fn readings_page(title: &str, panel: &Markup, theme: Theme) -> Markup {
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            (panel)
        }
    );

    base(title, theme.styles().body, &content)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{db::initialize, pagination::PaginationConfig, theme::Theme};

    use super::ReadingsPageState;

    pub(crate) fn get_test_state() -> ReadingsPageState {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");
        initialize(&connection).expect("Could not create tables");

        ReadingsPageState {
            db_connection: Arc::new(Mutex::new(connection)),
            pagination_config: PaginationConfig::default(),
            local_timezone: "Etc/UTC".to_owned(),
            theme: Theme::default(),
        }
    }
}
