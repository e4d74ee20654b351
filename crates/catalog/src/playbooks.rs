//! Consultation playbooks: one per use case, localized.
//!
//! A playbook carries the persona title and tagline used by the prompt
//! composer, plus the focus areas and sample prompts shown on the REPL
//! surface, and the knowledge domains seeded when the use case is
//! selected.

use fc_domain::{KnowledgeDomain, Locale, UseCase};

#[derive(Debug, Clone, Copy)]
pub struct Playbook {
    pub title: &'static str,
    pub tagline: &'static str,
    pub focus: &'static [&'static str],
    pub sample_prompts: &'static [&'static str],
}

/// Knowledge domains pre-selected when this use case becomes active.
pub fn default_domains(use_case: UseCase) -> &'static [KnowledgeDomain] {
    use KnowledgeDomain as D;

    match use_case {
        UseCase::RetailBanking => &[D::RetailBanking, D::CustomerService, D::Regulations],
        UseCase::FinancialLiteracy => &[D::Education, D::Budgeting, D::BehavioralFinance],
        UseCase::TravelBudget => &[D::Travel, D::FxMarkets, D::Savings],
        UseCase::ProductivityPartner => &[D::PersonalFinance, D::Budgeting, D::BehavioralFinance],
    }
}

pub fn playbook(use_case: UseCase, locale: Locale) -> &'static Playbook {
    use Locale::{English, Indonesian};

    match (use_case, locale) {
        (UseCase::RetailBanking, English) => &RETAIL_BANKING_EN,
        (UseCase::RetailBanking, Indonesian) => &RETAIL_BANKING_ID,
        (UseCase::FinancialLiteracy, English) => &FINANCIAL_LITERACY_EN,
        (UseCase::FinancialLiteracy, Indonesian) => &FINANCIAL_LITERACY_ID,
        (UseCase::TravelBudget, English) => &TRAVEL_BUDGET_EN,
        (UseCase::TravelBudget, Indonesian) => &TRAVEL_BUDGET_ID,
        (UseCase::ProductivityPartner, English) => &PRODUCTIVITY_PARTNER_EN,
        (UseCase::ProductivityPartner, Indonesian) => &PRODUCTIVITY_PARTNER_ID,
    }
}

static RETAIL_BANKING_EN: Playbook = Playbook {
    title: "Retail Banking Concierge",
    tagline: "Resolve account questions, fees, and loan inquiries with empathetic clarity.",
    focus: &[
        "Explain account activity, fees, and policy details",
        "Guide users through loan or card application steps",
        "Escalate red-flag scenarios with clear next actions",
    ],
    sample_prompts: &[
        "Help me understand why I was charged overdraft fees last week.",
        "Walk me through the steps to dispute a credit card transaction.",
    ],
};

static RETAIL_BANKING_ID: Playbook = Playbook {
    title: "Konsier Perbankan Ritel",
    tagline: "Selesaikan pertanyaan rekening, biaya, dan pengajuan pinjaman dengan empati dan kejelasan.",
    focus: &[
        "Menjelaskan aktivitas rekening, biaya, dan detail kebijakan",
        "Memandu nasabah melalui tahapan pengajuan pinjaman atau kartu",
        "Mengeskalasi situasi berisiko dengan langkah lanjutan yang jelas",
    ],
    sample_prompts: &[
        "Jelaskan mengapa saya dikenakan biaya overdraft minggu lalu.",
        "Panduan langkah demi langkah untuk menggugat transaksi kartu kredit.",
    ],
};

static FINANCIAL_LITERACY_EN: Playbook = Playbook {
    title: "Financial Literacy Coach",
    tagline: "Teach core money concepts with digestible lessons and practical activities.",
    focus: &[
        "Simplify jargon and reinforce the fundamentals",
        "Offer budgeting drills and literacy challenges",
        "Adapt explanations to the learner's confidence level",
    ],
    sample_prompts: &[
        "Create a lesson plan to explain compound interest to college students.",
        "Give me a weekly challenge to build emergency savings.",
    ],
};

static FINANCIAL_LITERACY_ID: Playbook = Playbook {
    title: "Pelatih Literasi Keuangan",
    tagline: "Ajarkan konsep uang penting dengan sesi yang mudah dipahami dan latihan praktis.",
    focus: &[
        "Menyederhanakan istilah teknis dan menegaskan dasar-dasarnya",
        "Memberikan latihan anggaran dan tantangan literasi",
        "Menyesuaikan penjelasan dengan tingkat kepercayaan diri peserta",
    ],
    sample_prompts: &[
        "Buat rencana pembelajaran untuk menjelaskan bunga majemuk kepada mahasiswa.",
        "Berikan tantangan mingguan agar saya bisa membangun dana darurat.",
    ],
};

static TRAVEL_BUDGET_EN: Playbook = Playbook {
    title: "Travel Budget Strategist",
    tagline: "Blend itinerary planning with real-world cost controls and currency tips.",
    focus: &[
        "Design itineraries aligned to spending caps",
        "Highlight cross-border fees, FX, and insurance needs",
        "Suggest savings tactics before and during the trip",
    ],
    sample_prompts: &[
        "Plan a 5-day Tokyo trip under $2,000 all-in.",
        "How should I budget for a family vacation across three EU cities?",
    ],
};

static TRAVEL_BUDGET_ID: Playbook = Playbook {
    title: "Strateg Keuangan Perjalanan",
    tagline: "Padukan perencanaan perjalanan dengan pengendalian biaya dan tips mata uang.",
    focus: &[
        "Mendesain itinerary yang sesuai batas pengeluaran",
        "Menyoroti biaya lintas negara, valuta asing, dan kebutuhan asuransi",
        "Menyarankan cara menghemat sebelum dan selama perjalanan",
    ],
    sample_prompts: &[
        "Rencanakan perjalanan 5 hari ke Tokyo dengan total anggaran di bawah $2.000.",
        "Bagaimana saya harus menyusun anggaran liburan keluarga ke tiga kota di Uni Eropa?",
    ],
};

static PRODUCTIVITY_PARTNER_EN: Playbook = Playbook {
    title: "Productivity & Savings Partner",
    tagline: "Turn financial goals into repeatable rituals and smart nudges.",
    focus: &[
        "Translate goals into trackable milestones",
        "Recommend automations, alerts, and review cadences",
        "Keep momentum with motivational check-ins",
    ],
    sample_prompts: &[
        "Help me build a 90-day sprint to pay down $5k of debt.",
        "What automation rules should I create to stay on budget?",
    ],
};

static PRODUCTIVITY_PARTNER_ID: Playbook = Playbook {
    title: "Partner Produktivitas & Tabungan",
    tagline: "Ubah tujuan keuangan menjadi rutinitas dan pengingat yang konsisten.",
    focus: &[
        "Menerjemahkan tujuan ke dalam tonggak yang dapat dilacak",
        "Merekomendasikan otomatisasi, pengingat, dan ritme evaluasi",
        "Menjaga momentum dengan check-in yang memotivasi",
    ],
    sample_prompts: &[
        "Bantu saya menyusun sprint 90 hari untuk melunasi utang $5k.",
        "Otomatisasi apa yang perlu saya buat agar anggaran tetap terjaga?",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_use_case_has_a_playbook_in_both_locales() {
        for &use_case in UseCase::ALL {
            for &locale in Locale::ALL {
                let pb = playbook(use_case, locale);
                assert!(!pb.title.is_empty());
                assert!(!pb.tagline.is_empty());
                assert!(!pb.focus.is_empty());
                assert!(!pb.sample_prompts.is_empty());
            }
        }
    }

    #[test]
    fn default_domains_are_distinct() {
        for &use_case in UseCase::ALL {
            let domains = default_domains(use_case);
            let mut sorted: Vec<_> = domains.to_vec();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), domains.len());
        }
    }
}
