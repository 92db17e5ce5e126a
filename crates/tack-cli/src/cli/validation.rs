/// Parse and validate a dev-server port.
///
/// Must be a number between 1 and 65535.
///
/// # Errors
///
/// Returns an error message if the port is invalid.
pub fn parse_port(s: &str) -> Result<u16, String> {
    if s.is_empty() {
        return Err("Port cannot be empty".to_string());
    }

    let port: u16 = s
        .parse()
        .map_err(|_| format!("Port must be a number between 1 and 65535: '{}'", s))?;

    if port == 0 {
        return Err("Port 0 is not allowed; pick a fixed port".to_string());
    }

    Ok(port)
}
