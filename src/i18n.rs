// src/i18n.rs

use serde::{Deserialize, Serialize};

/// Active display language. Every user-visible string, including error
/// bodies, is rendered in this language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ar,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim() {
            "ar" => Some(Language::Ar),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Ar
    }
}

/// A piece of display text carried in both languages.
#[derive(Debug, Clone, Copy)]
pub struct Localized {
    pub ar: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub const fn new(ar: &'static str, en: &'static str) -> Self {
        Self { ar, en }
    }

    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::Ar => self.ar,
            Language::En => self.en,
        }
    }
}

/// The category wildcard literal is language-dependent.
pub fn wildcard(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "الكل",
        Language::En => "All",
    }
}

/// Accepts either language's wildcard literal, so a selection made before a
/// language toggle keeps its meaning afterwards.
pub fn is_wildcard(raw: &str) -> bool {
    let raw = raw.trim();
    raw == "الكل" || raw == "All"
}

pub struct Messages {
    pub title: &'static str,
    pub subtitle: &'static str,

    // Order message building blocks.
    pub order_header: &'static str,
    pub order_id_label: &'static str,
    pub order_service_label: &'static str,
    pub number_order_header: &'static str,
    pub country_label: &'static str,
    pub code_label: &'static str,
    pub requested_app_label: &'static str,
    pub price_label: &'static str,
    pub level_label: &'static str,
    pub skins_label: &'static str,
    pub server_label: &'static str,
    pub binding_label: &'static str,
    pub description_label: &'static str,
    pub game_label: &'static str,
    pub market_buy_intro: &'static str,
    pub sell_header: &'static str,
    pub currency: &'static str,

    // Errors.
    pub service_not_found: &'static str,
    pub missing_required: &'static str,
    pub ai_failed: &'static str,
    pub url_scan_failed: &'static str,
    pub video_failed: &'static str,
    pub network_failed: &'static str,
    pub unknown_tool: &'static str,
    pub invalid_language: &'static str,
    pub invalid_settings: &'static str,
    pub live_connect_failed: &'static str,
    pub number_not_found: &'static str,
    pub account_not_found: &'static str,
    pub attachment_missing: &'static str,

    // One-shot security alert.
    pub security_alert_title: &'static str,
    pub security_alert_body: &'static str,

    // Vendor prompts.
    pub assistant_system: &'static str,
    pub url_scan_system: &'static str,
    pub url_scan_prompt: &'static str,
}

static AR: Messages = Messages {
    title: "المجال الإلكترونية",
    subtitle: "الخدمات الرقمية والأمنية الشاملة",

    order_header: "طلب جديد من المجال الإلكترونية",
    order_id_label: "رقم الطلب",
    order_service_label: "الخدمة",
    number_order_header: "طلب رقم وهمي جديد من المجال الإلكترونية",
    country_label: "الدولة",
    code_label: "الكود",
    requested_app_label: "الخدمة المطلوبة",
    price_label: "السعر",
    level_label: "المستوى",
    skins_label: "السكنات",
    server_label: "السيرفر",
    binding_label: "الربط",
    description_label: "الوصف",
    game_label: "اللعبة",
    market_buy_intro: "مهتم بشراء حساب",
    sell_header: "طلب بيع حساب جديد عبر المجال الإلكترونية",
    currency: "ريال",

    service_not_found: "الخدمة غير موجودة",
    missing_required: "يرجى تعبئة الحقول المطلوبة",
    ai_failed: "حدث خطأ أثناء معالجة الطلب الذكي.",
    url_scan_failed: "حدث خطأ أثناء فحص الرابط.",
    video_failed: "حدث خطأ أثناء توليد الفيديو.",
    network_failed: "فشل في جلب البيانات. تأكد من اتصال الإنترنت.",
    unknown_tool: "الأداة غير متوفرة",
    invalid_language: "اللغة غير مدعومة",
    invalid_settings: "قيمة الإعدادات غير صالحة",
    live_connect_failed: "تعذر بدء الجلسة الصوتية.",
    number_not_found: "الرقم غير متوفر",
    account_not_found: "الحساب غير موجود",
    attachment_missing: "لم يتم إرفاق أي ملف",

    security_alert_title: "تنبيه أمني مهم",
    security_alert_body: "تم رصد محاولات دخول مشبوهة عالمياً، ننصح بتفعيل المصادقة الثنائية لحساباتك.",

    assistant_system: "أنت مجال AI، المساعد الذكي الرسمي لمنصة المجال الإلكترونية. تتحدث بلهجة عربية احترافية وودودة. إجاباتك سريعة جداً ومختصرة. ساعد المستخدمين في توثيق الحسابات، شحن الألعاب، وفحص الأمان.",
    url_scan_system: "أنت خبير أمن سيبراني. قدم إجابة قصيرة جداً ومباشرة بالعربية. صنف الرابط كـ (آمن، مشبوه، خطر).",
    url_scan_prompt: "قم بتحليل هذا الرابط من الناحية الأمنية واذكر إذا كان يبدو آمناً أم محاولة تصيد احتيالي (Phishing). اذكر الأسباب باختصار شديد جداً. الرابط هو:",
};

static EN: Messages = Messages {
    title: "Al-Majal Electronic",
    subtitle: "Comprehensive Digital & Security Services",

    order_header: "New order from Al-Majal Electronic",
    order_id_label: "Order no.",
    order_service_label: "Service",
    number_order_header: "New virtual number order from Al-Majal Electronic",
    country_label: "Country",
    code_label: "Code",
    requested_app_label: "Requested app",
    price_label: "Price",
    level_label: "Level",
    skins_label: "Skins",
    server_label: "Server",
    binding_label: "Binding",
    description_label: "Description",
    game_label: "Game",
    market_buy_intro: "Interested in buying an account",
    sell_header: "New account listing request via Al-Majal Electronic",
    currency: "SAR",

    service_not_found: "Service not found",
    missing_required: "Please fill in the required fields",
    ai_failed: "The AI request failed.",
    url_scan_failed: "An error occurred while scanning the link.",
    video_failed: "An error occurred while generating the video.",
    network_failed: "Failed to fetch data. Check your connection.",
    unknown_tool: "Tool not available",
    invalid_language: "Unsupported language",
    invalid_settings: "Invalid settings value",
    live_connect_failed: "Could not start the voice session.",
    number_not_found: "Number not available",
    account_not_found: "Account not found",
    attachment_missing: "No file was attached",

    security_alert_title: "Important Security Alert",
    security_alert_body: "Suspicious login attempts detected globally. We recommend enabling 2FA for your accounts.",

    assistant_system: "You are Majal AI, the official assistant of the Al-Majal Electronic platform. You answer quickly and concisely, in a professional and friendly tone. Help users with account verification, game top-ups and security checks.",
    url_scan_system: "You are a cybersecurity expert. Give a very short, direct answer in English. Classify the link as (safe, suspicious, danger).",
    url_scan_prompt: "Analyse this link from a security standpoint and state whether it looks safe or like a phishing attempt. Give very brief reasons. The link is:",
};

pub fn messages(lang: Language) -> &'static Messages {
    match lang {
        Language::Ar => &AR,
        Language::En => &EN,
    }
}
