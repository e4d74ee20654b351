//! The conversational profile: every user-chosen setting that determines
//! the assistant's persona and session identity.

use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Id enums
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Reply language for the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    English,
    Indonesian,
}

impl Locale {
    pub const ALL: &'static [Locale] = &[Locale::English, Locale::Indonesian];

    pub fn id(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Indonesian => "id",
        }
    }

    pub fn parse(s: &str) -> Option<Locale> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Locale::English),
            "id" | "indonesian" => Some(Locale::Indonesian),
            _ => None,
        }
    }
}

/// Consultation playbook the persona is built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCase {
    RetailBanking,
    FinancialLiteracy,
    TravelBudget,
    ProductivityPartner,
}

impl UseCase {
    pub const ALL: &'static [UseCase] = &[
        UseCase::RetailBanking,
        UseCase::FinancialLiteracy,
        UseCase::TravelBudget,
        UseCase::ProductivityPartner,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            UseCase::RetailBanking => "retail_banking",
            UseCase::FinancialLiteracy => "financial_literacy",
            UseCase::TravelBudget => "travel_budget",
            UseCase::ProductivityPartner => "productivity_partner",
        }
    }

    pub fn parse(s: &str) -> Option<UseCase> {
        Self::ALL.iter().copied().find(|u| u.id() == s.trim())
    }
}

/// Language style directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Formal,
    Conversational,
    Analytical,
}

impl Tone {
    pub const ALL: &'static [Tone] = &[Tone::Formal, Tone::Conversational, Tone::Analytical];

    pub fn id(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Conversational => "conversational",
            Tone::Analytical => "analytical",
        }
    }

    pub fn parse(s: &str) -> Option<Tone> {
        Self::ALL.iter().copied().find(|t| t.id() == s.trim().to_lowercase())
    }
}

/// Planning horizon the advice should target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    Immediate,
    #[serde(rename = "30_days")]
    ThirtyDays,
    Quarter,
    Annual,
    MultiYear,
}

impl Horizon {
    pub const ALL: &'static [Horizon] = &[
        Horizon::Immediate,
        Horizon::ThirtyDays,
        Horizon::Quarter,
        Horizon::Annual,
        Horizon::MultiYear,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Horizon::Immediate => "immediate",
            Horizon::ThirtyDays => "30_days",
            Horizon::Quarter => "quarter",
            Horizon::Annual => "annual",
            Horizon::MultiYear => "multi_year",
        }
    }

    pub fn parse(s: &str) -> Option<Horizon> {
        Self::ALL.iter().copied().find(|h| h.id() == s.trim().to_lowercase())
    }
}

/// Knowledge modules the persona may lean on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeDomain {
    AssetAllocation,
    BehavioralFinance,
    Budgeting,
    CorporateFinance,
    CreditManagement,
    CustomerService,
    Education,
    FxMarkets,
    PersonalFinance,
    Regulations,
    RetailBanking,
    RiskManagement,
    Savings,
    SmallBusiness,
    TaxPlanning,
    Travel,
}

impl KnowledgeDomain {
    pub const ALL: &'static [KnowledgeDomain] = &[
        KnowledgeDomain::AssetAllocation,
        KnowledgeDomain::BehavioralFinance,
        KnowledgeDomain::Budgeting,
        KnowledgeDomain::CorporateFinance,
        KnowledgeDomain::CreditManagement,
        KnowledgeDomain::CustomerService,
        KnowledgeDomain::Education,
        KnowledgeDomain::FxMarkets,
        KnowledgeDomain::PersonalFinance,
        KnowledgeDomain::Regulations,
        KnowledgeDomain::RetailBanking,
        KnowledgeDomain::RiskManagement,
        KnowledgeDomain::Savings,
        KnowledgeDomain::SmallBusiness,
        KnowledgeDomain::TaxPlanning,
        KnowledgeDomain::Travel,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            KnowledgeDomain::AssetAllocation => "asset_allocation",
            KnowledgeDomain::BehavioralFinance => "behavioral_finance",
            KnowledgeDomain::Budgeting => "budgeting",
            KnowledgeDomain::CorporateFinance => "corporate_finance",
            KnowledgeDomain::CreditManagement => "credit_management",
            KnowledgeDomain::CustomerService => "customer_service",
            KnowledgeDomain::Education => "education",
            KnowledgeDomain::FxMarkets => "fx_markets",
            KnowledgeDomain::PersonalFinance => "personal_finance",
            KnowledgeDomain::Regulations => "regulations",
            KnowledgeDomain::RetailBanking => "retail_banking",
            KnowledgeDomain::RiskManagement => "risk_management",
            KnowledgeDomain::Savings => "savings",
            KnowledgeDomain::SmallBusiness => "small_business",
            KnowledgeDomain::TaxPlanning => "tax_planning",
            KnowledgeDomain::Travel => "travel",
        }
    }

    pub fn parse(s: &str) -> Option<KnowledgeDomain> {
        Self::ALL.iter().copied().find(|d| d.id() == s.trim().to_lowercase())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Configuration snapshot
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Immutable-per-turn snapshot of every user-chosen assistant setting.
///
/// Owned by the interactive layer; the core receives a read-only snapshot
/// each turn. Knowledge domains preserve the user's selection order (the
/// persona lists them in that order); the profile signature sorts them so
/// that selection order does not affect session identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub model_id: String,
    pub use_case: UseCase,
    pub tone: Tone,
    pub knowledge_domains: Vec<KnowledgeDomain>,
    /// Risk posture, 1 (capital preservation) to 5 (aggressive growth).
    pub risk_level: u8,
    pub horizon: Horizon,
    pub include_actions: bool,
    pub include_disclaimer: bool,
    /// Creativity bias in [0, 1]; the slider moves in 0.05 steps.
    pub creativity: f32,
    pub locale: Locale,
    pub memory_enabled: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            model_id: "gemini-2.5-flash".into(),
            use_case: UseCase::RetailBanking,
            tone: Tone::Conversational,
            knowledge_domains: vec![
                KnowledgeDomain::RetailBanking,
                KnowledgeDomain::CustomerService,
                KnowledgeDomain::Regulations,
            ],
            risk_level: 3,
            horizon: Horizon::Quarter,
            include_actions: true,
            include_disclaimer: true,
            creativity: 0.4,
            locale: Locale::English,
            memory_enabled: true,
        }
    }
}

impl Configuration {
    /// Range checks for the numeric fields. Returns one message per
    /// violated constraint; empty means the snapshot is well-formed.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !(1..=5).contains(&self.risk_level) {
            problems.push(format!(
                "risk_level must be between 1 and 5 (got {})",
                self.risk_level
            ));
        }
        if !(0.0..=1.0).contains(&self.creativity) {
            problems.push(format!(
                "creativity must be between 0.0 and 1.0 (got {})",
                self.creativity
            ));
        }
        if self.model_id.trim().is_empty() {
            problems.push("model_id must not be empty".into());
        }
        problems
    }
}
