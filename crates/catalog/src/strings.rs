use fc_domain::Locale;

/// Every template and fixed phrase the composers and the REPL surface need.
///
/// Templates carry `{placeholder}` markers filled in by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    // Persona block templates, in composition order.
    PersonaIntro,
    PersonaMission,
    PersonaExpertise,
    PersonaStyle,
    PersonaRisk,
    PersonaHorizon,
    CreativityLow,
    CreativityBalanced,
    CreativityHigh,
    PersonaGrounding,
    PersonaAssumptions,
    PersonaActions,
    PersonaDisclaimer,
    PersonaLanguage,
    /// Expertise fallback when no knowledge domain is selected.
    DefaultKnowledge,

    // Structured request sections.
    MemoryPrefix,
    DocumentsLabel,
    UserRequestLabel,
    ResponseFormatTitle,
    ResponseStep1,
    ResponseStep2,
    ResponseStep3,
    ResponseStep4,
    ResponseStep5,
    DocumentPrefix,
    TruncatedSuffix,

    // REPL surface.
    NeedApiKey,
    StatusEnabled,
    StatusDisabled,
    CharactersLabel,
    FocusHeading,
    SamplesHeading,
    ConfigHeading,
    ConfigModel,
    ConfigTone,
    ConfigDomains,
    ConfigRisk,
    ConfigHorizon,
    ConfigMemory,
}

impl MessageKey {
    pub const ALL: &'static [MessageKey] = &[
        MessageKey::PersonaIntro,
        MessageKey::PersonaMission,
        MessageKey::PersonaExpertise,
        MessageKey::PersonaStyle,
        MessageKey::PersonaRisk,
        MessageKey::PersonaHorizon,
        MessageKey::CreativityLow,
        MessageKey::CreativityBalanced,
        MessageKey::CreativityHigh,
        MessageKey::PersonaGrounding,
        MessageKey::PersonaAssumptions,
        MessageKey::PersonaActions,
        MessageKey::PersonaDisclaimer,
        MessageKey::PersonaLanguage,
        MessageKey::DefaultKnowledge,
        MessageKey::MemoryPrefix,
        MessageKey::DocumentsLabel,
        MessageKey::UserRequestLabel,
        MessageKey::ResponseFormatTitle,
        MessageKey::ResponseStep1,
        MessageKey::ResponseStep2,
        MessageKey::ResponseStep3,
        MessageKey::ResponseStep4,
        MessageKey::ResponseStep5,
        MessageKey::DocumentPrefix,
        MessageKey::TruncatedSuffix,
        MessageKey::NeedApiKey,
        MessageKey::StatusEnabled,
        MessageKey::StatusDisabled,
        MessageKey::CharactersLabel,
        MessageKey::FocusHeading,
        MessageKey::SamplesHeading,
        MessageKey::ConfigHeading,
        MessageKey::ConfigModel,
        MessageKey::ConfigTone,
        MessageKey::ConfigDomains,
        MessageKey::ConfigRisk,
        MessageKey::ConfigHorizon,
        MessageKey::ConfigMemory,
    ];
}

/// Resolve a template for the given locale.
pub fn resolve(locale: Locale, key: MessageKey) -> &'static str {
    use Locale::{English, Indonesian};
    use MessageKey as K;

    match key {
        K::PersonaIntro => match locale {
            English => {
                "You are a Gemini-powered financial consultant specialised in the '{title}' playbook."
            }
            Indonesian => {
                "Anda adalah konsultan keuangan bertenaga Gemini yang fokus pada playbook '{title}'."
            }
        },
        K::PersonaMission => match locale {
            English => "Mission: {tagline}",
            Indonesian => "Misi: {tagline}",
        },
        K::PersonaExpertise => match locale {
            English => "Expertise modules to lean on: {knowledge}.",
            Indonesian => "Modul keahlian yang perlu diutamakan: {knowledge}.",
        },
        K::PersonaStyle => match locale {
            English => "Language style directive: {style}",
            Indonesian => "Instruksi gaya bahasa: {style}",
        },
        K::PersonaRisk => match locale {
            English => {
                "Target risk posture: level {risk} on a 1-5 scale (1=capital preservation, 5=aggressive growth)."
            }
            Indonesian => {
                "Selera risiko target: level {risk} pada skala 1-5 (1=melindungi modal, 5=pertumbuhan agresif)."
            }
        },
        K::PersonaHorizon => match locale {
            English => "Planning horizon: {horizon}.",
            Indonesian => "Horizon perencanaan: {horizon}.",
        },
        K::CreativityLow => match locale {
            English => "Prioritise precision and policy alignment over creativity.",
            Indonesian => "Utamakan ketepatan dan kepatuhan kebijakan dibanding kreativitas.",
        },
        K::CreativityBalanced => match locale {
            English => "Blend strategic insight with practical examples.",
            Indonesian => "Padukan wawasan strategis dengan contoh praktis.",
        },
        K::CreativityHigh => match locale {
            English => "Incorporate creative storytelling while staying financially sound.",
            Indonesian => "Gunakan cerita kreatif tanpa mengorbankan ketepatan finansial.",
        },
        K::PersonaGrounding => match locale {
            English => {
                "Ground every recommendation in verifiable finance principles and up-to-date best practices."
            }
            Indonesian => {
                "Dasarkan setiap rekomendasi pada prinsip keuangan yang dapat diverifikasi dan praktik terbaru."
            }
        },
        K::PersonaAssumptions => match locale {
            English => "Cite assumptions when precise data is unavailable.",
            Indonesian => "Sebutkan asumsi saat data presisi tidak tersedia.",
        },
        K::PersonaActions => match locale {
            English => {
                "Always convert insights into a prioritised action plan with owners or suggested tools."
            }
            Indonesian => {
                "Selalu ubah wawasan menjadi daftar tindakan terurut lengkap dengan penanggung jawab atau alat yang disarankan."
            }
        },
        K::PersonaDisclaimer => match locale {
            English => {
                "Close with a compliance reminder that personalised advice requires a licensed professional."
            }
            Indonesian => {
                "Akhiri dengan pengingat bahwa saran personal memerlukan profesional berlisensi."
            }
        },
        K::PersonaLanguage => match locale {
            English => "Respond in English.",
            Indonesian => "Gunakan bahasa Indonesia dalam setiap jawaban.",
        },
        K::DefaultKnowledge => match locale {
            English => "general financial guidance",
            Indonesian => "panduan keuangan umum",
        },
        K::MemoryPrefix => match locale {
            English => "Session memory: key user preferences so far -> ",
            Indonesian => "Memori sesi: preferensi pengguna sejauh ini -> ",
        },
        K::DocumentsLabel => match locale {
            English => "Reference documents supplied by the user:",
            Indonesian => "Dokumen referensi dari pengguna:",
        },
        K::UserRequestLabel => match locale {
            English => "User request:",
            Indonesian => "Permintaan pengguna:",
        },
        K::ResponseFormatTitle => match locale {
            English => "Response format:",
            Indonesian => "Format respons:",
        },
        K::ResponseStep1 => match locale {
            English => "1. Executive insight (1-2 sentences).",
            Indonesian => "1. Wawasan utama (1-2 kalimat).",
        },
        K::ResponseStep2 => match locale {
            English => "2. Detailed guidance with numbered recommendations.",
            Indonesian => "2. Rekomendasi rinci dengan penomoran.",
        },
        K::ResponseStep3 => match locale {
            English => "3. Scenario or calculation examples when useful.",
            Indonesian => "3. Contoh skenario atau perhitungan bila relevan.",
        },
        K::ResponseStep4 => match locale {
            English => "4. Resource suggestions (articles, tools, or checklists).",
            Indonesian => "4. Rekomendasi sumber daya (artikel, alat, atau daftar periksa).",
        },
        K::ResponseStep5 => match locale {
            English => "5. Compliance or risk caveats (keep concise).",
            Indonesian => "5. Catatan kepatuhan atau risiko (singkat saja).",
        },
        K::DocumentPrefix => match locale {
            English => "Document",
            Indonesian => "Dokumen",
        },
        K::TruncatedSuffix => match locale {
            English => " (truncated)",
            Indonesian => " (dipersingkat)",
        },
        K::NeedApiKey => match locale {
            English => "Add your Google AI API key (/key) to start the consultation.",
            Indonesian => "Tambahkan Google AI API key (/key) untuk mulai berkonsultasi.",
        },
        K::StatusEnabled => match locale {
            English => "enabled",
            Indonesian => "aktif",
        },
        K::StatusDisabled => match locale {
            English => "disabled",
            Indonesian => "nonaktif",
        },
        K::CharactersLabel => match locale {
            English => "characters",
            Indonesian => "karakter",
        },
        K::FocusHeading => match locale {
            English => "Focus Areas",
            Indonesian => "Bidang Fokus",
        },
        K::SamplesHeading => match locale {
            English => "Sample Prompts",
            Indonesian => "Contoh Pertanyaan",
        },
        K::ConfigHeading => match locale {
            English => "Current Configuration",
            Indonesian => "Konfigurasi Saat Ini",
        },
        K::ConfigModel => match locale {
            English => "Model",
            Indonesian => "Model",
        },
        K::ConfigTone => match locale {
            English => "Tone",
            Indonesian => "Gaya",
        },
        K::ConfigDomains => match locale {
            English => "Knowledge modules",
            Indonesian => "Modul pengetahuan",
        },
        K::ConfigRisk => match locale {
            English => "Risk appetite",
            Indonesian => "Selera risiko",
        },
        K::ConfigHorizon => match locale {
            English => "Planning horizon",
            Indonesian => "Horizon perencanaan",
        },
        K::ConfigMemory => match locale {
            English => "Session memory",
            Indonesian => "Memori sesi",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_resolves_in_every_locale() {
        for &locale in Locale::ALL {
            for &key in MessageKey::ALL {
                assert!(
                    !resolve(locale, key).is_empty(),
                    "empty string for {key:?} in {locale:?}"
                );
            }
        }
    }

    #[test]
    fn templates_carry_their_placeholders() {
        for &locale in Locale::ALL {
            assert!(resolve(locale, MessageKey::PersonaIntro).contains("{title}"));
            assert!(resolve(locale, MessageKey::PersonaMission).contains("{tagline}"));
            assert!(resolve(locale, MessageKey::PersonaExpertise).contains("{knowledge}"));
            assert!(resolve(locale, MessageKey::PersonaStyle).contains("{style}"));
            assert!(resolve(locale, MessageKey::PersonaRisk).contains("{risk}"));
            assert!(resolve(locale, MessageKey::PersonaHorizon).contains("{horizon}"));
        }
    }
}
