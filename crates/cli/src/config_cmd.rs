//! `finconsult config` — show and validate the configuration.

use colored::Colorize;

use fc_domain::Config;

pub fn show(config: &Config) {
    match toml::to_string_pretty(config) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => eprintln!("{}", format!("could not render config: {e}").red()),
    }
}

/// Print every problem found; returns `true` when the config is usable.
pub fn validate(config: &Config) -> bool {
    let mut problems = config.assistant.validate();

    if config.provider.model_options.is_empty() {
        problems.push("provider.model_options must not be empty".into());
    }
    if config.provider.caption_model.trim().is_empty() {
        problems.push("provider.caption_model must not be empty".into());
    }
    if config.limits.document_preview_chars > config.limits.max_document_chars {
        problems.push(format!(
            "limits.document_preview_chars ({}) exceeds limits.max_document_chars ({})",
            config.limits.document_preview_chars, config.limits.max_document_chars
        ));
    }

    if problems.is_empty() {
        println!("{}", "configuration OK".green());
        true
    } else {
        for problem in &problems {
            eprintln!("{}", problem.red());
        }
        false
    }
}
