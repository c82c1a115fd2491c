//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: color error (a value outside its color model's domain)
//! - 11: I/O error (config file)
//! - 12: input error (unknown format or scheme, point off the wheel)
//! - 13: serialization error (config JSON, JSON output)

use colorgear_core::ColorError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A color value failed validation in the core.
    Color(ColorError),
    /// The config file could not be read.
    Io(String),
    /// A user input error that is not a color value.
    Input(String),
    /// JSON could not be parsed or produced.
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Color(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ColorError> for CliError {
    fn from(e: ColorError) -> Self {
        match e {
            ColorError::UnknownName { .. } => CliError::Input(e.to_string()),
            ColorError::InvalidColorValue { .. } => CliError::Color(e),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_exit_code_is_10() {
        let err = CliError::Color(ColorError::invalid("red", 256, "[0, 255]"));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io("read failed".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        let err = CliError::Input("bad format".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn from_color_error_routes_value_errors_to_color() {
        let cli_err = CliError::from(ColorError::invalid("hue", 370, "[0, 360)"));
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("370"));
    }

    #[test]
    fn from_color_error_routes_unknown_names_to_input() {
        let format_err = "lab".parse::<colorgear_core::ColorFormat>().unwrap_err();
        assert_eq!(CliError::from(format_err).exit_code(), 12);

        let harmony_err = "mono".parse::<colorgear_core::Harmony>().unwrap_err();
        let cli_err = CliError::from(harmony_err);
        assert_eq!(cli_err.exit_code(), 12);
        assert!(cli_err.to_string().contains("mono"));
    }

    #[test]
    fn from_color_error_routes_by_variant_not_field_name() {
        let value_err = ColorError::invalid("format", "x", "anything");
        assert_eq!(CliError::from(value_err).exit_code(), 10);

        let lookup_err = ColorError::unknown("scheme", "mono", "a known scheme");
        assert_eq!(CliError::from(lookup_err).exit_code(), 12);
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
