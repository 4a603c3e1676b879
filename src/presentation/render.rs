use crate::domain::model::ResponseEnvelope;
use colored::Colorize;

/// Render an envelope for the terminal: a status line, the server message if
/// any, then data and meta pretty-printed.
pub fn render_envelope(envelope: &ResponseEnvelope) -> String {
    let mut out = String::new();

    let status = match envelope.success {
        Some(true) => "✔ success".green().bold().to_string(),
        Some(false) => "✘ failed".red().bold().to_string(),
        None => "? no status reported".yellow().to_string(),
    };
    out.push_str(&status);
    out.push('\n');

    if let Some(message) = &envelope.message {
        out.push_str(&format!("{}\n", message.white().italic()));
    }

    if let Some(data) = &envelope.data {
        out.push_str(&format!("{}\n", "data".bright_black().dimmed()));
        out.push_str(&pretty(data));
        out.push('\n');
    }

    if let Some(meta) = &envelope.meta {
        out.push_str(&format!("{}\n", "meta".bright_black().dimmed()));
        out.push_str(&pretty(meta));
        out.push('\n');
    }

    out
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
