// src/models.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::i18n::{Language, Localized};

/// Closed category enumeration; every service carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Main,
    Security,
    Social,
    ECommerce,
    Games,
    Tools,
    Ai,
    MarketOfAccounts,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Main,
        Category::Security,
        Category::Social,
        Category::ECommerce,
        Category::Games,
        Category::Tools,
        Category::Ai,
        Category::MarketOfAccounts,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Main => "main",
            Category::Security => "security",
            Category::Social => "social",
            Category::ECommerce => "e-commerce",
            Category::Games => "games",
            Category::Tools => "tools",
            Category::Ai => "ai",
            Category::MarketOfAccounts => "market-of-accounts",
        }
    }

    pub fn label(self, lang: Language) -> &'static str {
        self.localized_label().get(lang)
    }

    fn localized_label(self) -> Localized {
        match self {
            Category::Main => Localized::new("رئيسية", "Main"),
            Category::Security => Localized::new("الأمن والحماية", "Security & Protection"),
            Category::Social => Localized::new("التوثيق والفك", "Verification & Unlocking"),
            Category::ECommerce => Localized::new("متجر الأرقام والبطاقات", "Numbers & Cards Store"),
            Category::Games => Localized::new("شحن الألعاب", "Game Topup"),
            Category::Tools => Localized::new("أدوات ذكية", "Smart Tools"),
            Category::Ai => Localized::new("الذكاء اصطناعي", "Artificial Intelligence"),
            Category::MarketOfAccounts => Localized::new("سوق الحسابات", "Accounts Market"),
        }
    }

    /// Accepts the slug or the display label in either language.
    pub fn parse(raw: &str) -> Option<Category> {
        let raw = raw.trim();
        Category::ALL.iter().copied().find(|c| {
            let label = c.localized_label();
            raw == c.slug() || raw == label.ar || raw == label.en
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Select,
    Textarea,
    File,
}

/// One input slot in a service's order form.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub id: &'static str,
    pub label: Localized,
    pub kind: FieldType,
    pub options: &'static [Localized],
    pub placeholder: Option<Localized>,
    pub required: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub title: Localized,
    pub icon: &'static str,
    pub description: Localized,
}

#[derive(Debug, Clone, Copy)]
pub struct Details {
    pub benefits: &'static [Localized],
    pub requirements: &'static [Localized],
    pub duration: Localized,
    pub notes: Localized,
}

/// A single catalog offering. Immutable after load; owned by the catalog.
#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub id: &'static str,
    pub title: Localized,
    pub description: Localized,
    pub icon: &'static str,
    pub category: Category,
    pub image: &'static str,
    pub steps: &'static [Step],
    pub details: Option<Details>,
    pub fields: &'static [Field],
}

impl Service {
    pub fn summary(&self, lang: Language) -> ServiceSummary {
        ServiceSummary {
            id: self.id.to_string(),
            title: self.title.get(lang).to_string(),
            description: self.description.get(lang).to_string(),
            icon: self.icon.to_string(),
            category: self.category.slug().to_string(),
            category_label: self.category.label(lang).to_string(),
        }
    }

    pub fn view(&self, lang: Language) -> ServiceView {
        ServiceView {
            id: self.id.to_string(),
            title: self.title.get(lang).to_string(),
            description: self.description.get(lang).to_string(),
            icon: self.icon.to_string(),
            category: self.category.slug().to_string(),
            category_label: self.category.label(lang).to_string(),
            image: self.image.to_string(),
            steps: self
                .steps
                .iter()
                .map(|s| StepView {
                    title: s.title.get(lang).to_string(),
                    icon: s.icon.to_string(),
                    description: s.description.get(lang).to_string(),
                })
                .collect(),
            details: self.details.as_ref().map(|d| DetailsView {
                benefits: d.benefits.iter().map(|b| b.get(lang).to_string()).collect(),
                requirements: d.requirements.iter().map(|r| r.get(lang).to_string()).collect(),
                duration: d.duration.get(lang).to_string(),
                notes: d.notes.get(lang).to_string(),
            }),
            fields: self
                .fields
                .iter()
                .map(|f| FieldView {
                    id: f.id.to_string(),
                    label: f.label.get(lang).to_string(),
                    kind: f.kind,
                    options: f.options.iter().map(|o| o.get(lang).to_string()).collect(),
                    placeholder: f.placeholder.map(|p| p.get(lang).to_string()),
                    required: f.required,
                })
                .collect(),
        }
    }
}

// Language-resolved API views.

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub category_label: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldView {
    pub id: String,
    pub label: String,
    pub kind: FieldType,
    pub options: Vec<String>,
    pub placeholder: Option<String>,
    pub required: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StepView {
    pub title: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DetailsView {
    pub benefits: Vec<String>,
    pub requirements: Vec<String>,
    pub duration: String,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub category_label: String,
    pub image: String,
    pub steps: Vec<StepView>,
    pub details: Option<DetailsView>,
    pub fields: Vec<FieldView>,
}

// Secondary storefronts: same read-only shape pattern as Service, no form
// schema. Selection goes straight to order encoding.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberType {
    Sms,
    Call,
    Both,
}

#[derive(Debug, Clone, Copy)]
pub struct VirtualNumber {
    pub id: &'static str,
    pub country: Localized,
    pub flag: &'static str,
    pub code: &'static str,
    pub price: u32,
    pub apps: &'static [Localized],
    pub kind: NumberType,
    pub duration: Localized,
    pub available: bool,
}

impl VirtualNumber {
    pub fn view(&self, lang: Language) -> VirtualNumberView {
        VirtualNumberView {
            id: self.id.to_string(),
            country: self.country.get(lang).to_string(),
            flag: self.flag.to_string(),
            code: self.code.to_string(),
            price: self.price,
            apps: self.apps.iter().map(|a| a.get(lang).to_string()).collect(),
            kind: self.kind,
            duration: self.duration.get(lang).to_string(),
            available: self.available,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VirtualNumberView {
    pub id: String,
    pub country: String,
    pub flag: String,
    pub code: String,
    pub price: u32,
    pub apps: Vec<String>,
    pub kind: NumberType,
    pub duration: String,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Verified,
    Pending,
}

#[derive(Debug, Clone, Copy)]
pub struct GameAccount {
    pub id: &'static str,
    pub game: &'static str,
    pub level: u32,
    pub skins: u32,
    pub server: Localized,
    pub binding: Localized,
    pub price: u32,
    pub status: AccountStatus,
    pub images: &'static [&'static str],
    pub description: Localized,
}

impl GameAccount {
    pub fn view(&self, lang: Language, with_images: bool) -> GameAccountView {
        GameAccountView {
            id: self.id.to_string(),
            game: self.game.to_string(),
            level: self.level,
            skins: self.skins,
            server: self.server.get(lang).to_string(),
            binding: self.binding.get(lang).to_string(),
            price: self.price,
            status: self.status,
            images: if with_images {
                self.images.iter().map(|i| i.to_string()).collect()
            } else {
                Vec::new()
            },
            description: self.description.get(lang).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GameAccountView {
    pub id: String,
    pub game: String,
    pub level: u32,
    pub skins: u32,
    pub server: String,
    pub binding: String,
    pub price: u32,
    pub status: AccountStatus,
    pub images: Vec<String>,
    pub description: String,
}

/// Listing request for the sell-account form.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SellRequest {
    pub game: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub skins: u32,
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub binding: String,
    pub price: u32,
    #[serde(default)]
    pub description: String,
}

// Persisted UI preferences. Every field carries its own serde default so a
// record stored by an older release deserializes with defaults for the keys
// it lacks; there is no version field and no migration step.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeColor {
    Professional,
    DarkBlue,
    LightBlue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeChoice {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketSorting {
    Price,
    Level,
    Status,
}

fn default_theme() -> ThemeColor {
    ThemeColor::Professional
}
fn default_display() -> DisplayMode {
    DisplayMode::Dark
}
fn default_size() -> SizeChoice {
    SizeChoice::Medium
}
fn default_quality() -> ImageQuality {
    ImageQuality::Medium
}
fn default_sorting() -> MarketSorting {
    MarketSorting::Price
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme")]
    pub theme_color: ThemeColor,
    #[serde(default = "default_display")]
    pub display_mode: DisplayMode,
    #[serde(default = "default_size")]
    pub card_size: SizeChoice,
    #[serde(default = "default_size")]
    pub text_size: SizeChoice,
    #[serde(default = "default_quality")]
    pub image_quality: ImageQuality,
    #[serde(default)]
    pub data_saving: bool,
    #[serde(default = "default_sorting")]
    pub market_sorting: MarketSorting,
    #[serde(default = "default_true")]
    pub show_market_images: bool,
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,
    #[serde(default = "default_true")]
    pub order_notifications: bool,
    #[serde(default = "default_true")]
    pub offer_notifications: bool,
    #[serde(default = "default_true")]
    pub market_notifications: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            theme_color: default_theme(),
            display_mode: default_display(),
            card_size: default_size(),
            text_size: default_size(),
            image_quality: default_quality(),
            data_saving: false,
            market_sorting: default_sorting(),
            show_market_images: true,
            notifications_enabled: true,
            order_notifications: true,
            offer_notifications: true,
            market_notifications: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Security,
    Order,
    Promo,
}

/// Transient notification banner; auto-expires unless dismissed earlier.
#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub icon: String,
}
