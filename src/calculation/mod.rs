//! Storage and JSON API for calculation records.

mod api;
mod core;

pub use api::{
    CalculationApiState, create_calculation_endpoint, delete_calculation_endpoint,
    list_calculations_endpoint,
};
pub use core::{
    Calculation, CalculationId, NewCalculation, compute_result, create_calculation,
    create_calculation_table, delete_calculation, get_all_calculations, get_calculation,
    map_row_to_calculation,
};
