//! Persona instruction block composer.
//!
//! The line order is load-bearing: mission before constraints, and the
//! reply-language directive last so earlier instructions cannot override
//! it. Callers must not reorder or filter the output.

use fc_catalog::strings::MessageKey;
use fc_catalog::{domain_label, horizon_label, playbook, resolve, tone_style};
use fc_domain::Configuration;

/// Render the configuration into the ordered persona block.
///
/// Deterministic: the same snapshot always yields byte-identical output.
pub fn compose_persona(config: &Configuration) -> String {
    let locale = config.locale;
    let case = playbook(config.use_case, locale);

    // An empty domain set substitutes the generic phrase; joining an empty
    // list would render a malformed "lean on: ." sentence.
    let knowledge = if config.knowledge_domains.is_empty() {
        resolve(locale, MessageKey::DefaultKnowledge).to_string()
    } else {
        config
            .knowledge_domains
            .iter()
            .map(|d| domain_label(locale, *d))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let creativity_key = if config.creativity <= 0.3 {
        MessageKey::CreativityLow
    } else if config.creativity >= 0.7 {
        MessageKey::CreativityHigh
    } else {
        MessageKey::CreativityBalanced
    };

    let mut lines = vec![
        resolve(locale, MessageKey::PersonaIntro).replace("{title}", case.title),
        resolve(locale, MessageKey::PersonaMission).replace("{tagline}", case.tagline),
        resolve(locale, MessageKey::PersonaExpertise).replace("{knowledge}", &knowledge),
        resolve(locale, MessageKey::PersonaStyle)
            .replace("{style}", tone_style(locale, config.tone)),
        resolve(locale, MessageKey::PersonaRisk)
            .replace("{risk}", &config.risk_level.to_string()),
        resolve(locale, MessageKey::PersonaHorizon)
            .replace("{horizon}", horizon_label(locale, config.horizon)),
        resolve(locale, creativity_key).to_string(),
        resolve(locale, MessageKey::PersonaGrounding).to_string(),
        resolve(locale, MessageKey::PersonaAssumptions).to_string(),
    ];

    if config.include_actions {
        lines.push(resolve(locale, MessageKey::PersonaActions).to_string());
    }
    if config.include_disclaimer {
        lines.push(resolve(locale, MessageKey::PersonaDisclaimer).to_string());
    }
    lines.push(resolve(locale, MessageKey::PersonaLanguage).to_string());

    lines.join("\n")
}
