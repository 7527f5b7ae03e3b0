use pujan::PujanError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn hint(err: &PujanError) -> Option<&'static str> {
    match err {
        PujanError::InvalidConfig { .. } => {
            Some("Fix the config file or pass --config with a different path.")
        }
        PujanError::CatalogFormat { .. } | PujanError::Catalog(_) => {
            Some("Fix the catalog file, or unset catalog.path to use the bundled catalog.")
        }
        PujanError::UnknownProduct { .. } => Some("Run `pujan list` to see product ids."),
        PujanError::Auth(_) | PujanError::Io(_) => None,
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(format!("{err:#}")).render(supports_color)
    );
    if let Some(fix) = err.downcast_ref::<PujanError>().and_then(hint) {
        out.push_str(&format!("  {}\n", ColoredText::dim(fix).render(supports_color)));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{err:#}"),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
