//! Localized display labels for the profile id enums.

use fc_domain::{Horizon, KnowledgeDomain, Locale, Tone};

pub fn domain_label(locale: Locale, domain: KnowledgeDomain) -> &'static str {
    use KnowledgeDomain as D;
    use Locale::{English, Indonesian};

    match domain {
        D::AssetAllocation => match locale {
            English => "Asset Allocation",
            Indonesian => "Alokasi Aset",
        },
        D::BehavioralFinance => match locale {
            English => "Behavioral Finance",
            Indonesian => "Keuangan Perilaku",
        },
        D::Budgeting => match locale {
            English => "Budgeting",
            Indonesian => "Penganggaran",
        },
        D::CorporateFinance => match locale {
            English => "Corporate Finance",
            Indonesian => "Keuangan Korporat",
        },
        D::CreditManagement => match locale {
            English => "Credit Management",
            Indonesian => "Manajemen Kredit",
        },
        D::CustomerService => match locale {
            English => "Customer Service",
            Indonesian => "Layanan Pelanggan",
        },
        D::Education => match locale {
            English => "Education",
            Indonesian => "Pendidikan",
        },
        D::FxMarkets => match locale {
            English => "FX Markets",
            Indonesian => "Pasar Valuta Asing",
        },
        D::PersonalFinance => match locale {
            English => "Personal Finance",
            Indonesian => "Keuangan Pribadi",
        },
        D::Regulations => match locale {
            English => "Regulations",
            Indonesian => "Regulasi",
        },
        D::RetailBanking => match locale {
            English => "Retail Banking",
            Indonesian => "Perbankan Ritel",
        },
        D::RiskManagement => match locale {
            English => "Risk Management",
            Indonesian => "Manajemen Risiko",
        },
        D::Savings => match locale {
            English => "Savings",
            Indonesian => "Tabungan",
        },
        D::SmallBusiness => match locale {
            English => "Small Business",
            Indonesian => "Usaha Kecil",
        },
        D::TaxPlanning => match locale {
            English => "Tax Planning",
            Indonesian => "Perencanaan Pajak",
        },
        D::Travel => match locale {
            English => "Travel",
            Indonesian => "Perjalanan",
        },
    }
}

pub fn tone_label(locale: Locale, tone: Tone) -> &'static str {
    use Locale::{English, Indonesian};

    match tone {
        Tone::Formal => "Formal",
        Tone::Conversational => match locale {
            English => "Conversational",
            Indonesian => "Percakapan",
        },
        Tone::Analytical => match locale {
            English => "Analytical",
            Indonesian => "Analitis",
        },
    }
}

/// The style sentence injected into the persona block, not the short label.
pub fn tone_style(locale: Locale, tone: Tone) -> &'static str {
    use Locale::{English, Indonesian};

    match tone {
        Tone::Formal => match locale {
            English => "Deliver polished, compliance-friendly prose with structured paragraphs.",
            Indonesian => "Gunakan bahasa resmi yang sesuai kepatuhan dengan paragraf terstruktur.",
        },
        Tone::Conversational => match locale {
            English => "Use approachable, empathetic language with practical analogies.",
            Indonesian => "Gunakan bahasa akrab dan empatik dengan analogi yang mudah dipahami.",
        },
        Tone::Analytical => match locale {
            English => "Lead with metrics, benchmarks, and scenario analysis.",
            Indonesian => "Fokus pada metrik, tolok ukur, dan analisis skenario.",
        },
    }
}

pub fn horizon_label(locale: Locale, horizon: Horizon) -> &'static str {
    use Locale::{English, Indonesian};

    match horizon {
        Horizon::Immediate => match locale {
            English => "Immediate",
            Indonesian => "Segera",
        },
        Horizon::ThirtyDays => match locale {
            English => "30 Days",
            Indonesian => "30 Hari",
        },
        Horizon::Quarter => match locale {
            English => "Quarter",
            Indonesian => "Triwulan",
        },
        Horizon::Annual => match locale {
            English => "Annual",
            Indonesian => "Tahunan",
        },
        Horizon::MultiYear => match locale {
            English => "Multi-Year",
            Indonesian => "Multi-Tahun",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_domain_has_labels_in_both_locales() {
        for &locale in Locale::ALL {
            for &domain in KnowledgeDomain::ALL {
                assert!(!domain_label(locale, domain).is_empty());
            }
        }
    }

    #[test]
    fn tone_styles_are_sentences() {
        for &locale in Locale::ALL {
            for &tone in Tone::ALL {
                assert!(tone_style(locale, tone).ends_with('.'));
            }
        }
    }
}
