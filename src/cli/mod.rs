//! Command-line interface.

pub mod commands;
pub mod display;
pub mod runtime;
pub mod types;

pub use types::{Cli, Commands};

/// Format a command failure for stderr, as JSON or as a styled message.
pub fn render_error(err: &anyhow::Error, json_mode: bool) -> String {
    if json_mode {
        let causes: Vec<String> = err.chain().skip(1).map(ToString::to_string).collect();
        let body = serde_json::json!({
            "success": false,
            "error": err.to_string(),
            "causes": causes,
        });
        serde_json::to_string_pretty(&body).unwrap_or_default()
    } else {
        format!("{} {:#}", console::style("Error:").red().bold(), err)
    }
}

/// Report a command failure on stderr.
pub fn report_error(err: &anyhow::Error, json_mode: bool) {
    eprintln!("{}", render_error(err, json_mode));
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn failure() -> anyhow::Error {
        Err::<(), _>(std::io::Error::other("disk full"))
            .context("Failed to open content database")
            .unwrap_err()
    }

    #[test]
    fn test_render_error_json_lists_causes() {
        let json: serde_json::Value = serde_json::from_str(&render_error(&failure(), true)).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Failed to open content database");
        assert_eq!(json["causes"][0], "disk full");
    }

    #[test]
    fn test_render_error_human_includes_chain() {
        let human = render_error(&failure(), false);
        assert!(human.contains("Failed to open content database: disk full"));
    }
}
