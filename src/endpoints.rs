//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/calculations/{calculation_id}', use [format_endpoint].

/// The page with the form for entering meter readings.
pub const ROOT: &str = "/";
/// The route the readings form is submitted to.
pub const CALCULATE: &str = "/calculate";
/// The page that lists stored calculations.
pub const CALCULATIONS_VIEW: &str = "/calculations";
/// The route the table's delete buttons send to. Responds with the re-rendered table.
pub const CALCULATION_VIEW: &str = "/calculations/{calculation_id}";

/// The route to create and list calculations.
pub const CALCULATIONS_API: &str = "/api/calculations";
/// The route to access a single calculation.
pub const CALCULATION_API: &str = "/api/calculations/{calculation_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/users/{user_id}', '{user_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
