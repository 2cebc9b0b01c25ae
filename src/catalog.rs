// src/catalog.rs
//
// Static service catalog plus the two secondary storefronts. Everything here
// is read-only after load; the query functions are pure.

use crate::i18n::{is_wildcard, wildcard, Language, Localized};
use crate::models::{
    AccountStatus, Category, Details, Field, FieldType, GameAccount, MarketSorting, NumberType,
    Service, Step, VirtualNumber,
};

const fn l(ar: &'static str, en: &'static str) -> Localized {
    Localized::new(ar, en)
}

const NO_OPTIONS: &[Localized] = &[];
const NO_STEPS: &[Step] = &[];
const NO_FIELDS: &[Field] = &[];

pub static SERVICES: &[Service] = &[
    Service {
        id: "verify-social",
        title: l("توثيق الحسابات", "Account Verification"),
        description: l(
            "توثيق حسابات التواصل الاجتماعي بالعلامة الزرقاء",
            "Get the blue badge on your social media accounts",
        ),
        icon: "✅",
        category: Category::Social,
        image: "/images/verify-social.jpg",
        steps: &[
            Step {
                title: l("إرسال البيانات", "Send your details"),
                icon: "📋",
                description: l("عبّئ النموذج بحساباتك", "Fill in the form with your accounts"),
            },
            Step {
                title: l("مراجعة الطلب", "Request review"),
                icon: "🔎",
                description: l("يراجع الفريق أهلية الحساب", "The team checks account eligibility"),
            },
            Step {
                title: l("استلام التوثيق", "Receive the badge"),
                icon: "🏅",
                description: l("تصلك العلامة الزرقاء بعد الاعتماد", "The blue badge lands after approval"),
            },
        ],
        details: Some(Details {
            benefits: &[
                l("مصداقية أعلى أمام جمهورك", "More credibility with your audience"),
                l("حماية من انتحال الشخصية", "Protection against impersonation"),
            ],
            requirements: &[
                l("حساب نشط بهوية واضحة", "An active account with a clear identity"),
                l("وثيقة هوية سارية", "A valid identity document"),
            ],
            duration: l("من 3 إلى 14 يوم عمل", "3 to 14 business days"),
            notes: l(
                "التوثيق يخضع لسياسات المنصة المستهدفة",
                "Verification is subject to the target platform's policies",
            ),
        }),
        fields: &[
            Field {
                id: "platform",
                label: l("المنصة", "Platform"),
                kind: FieldType::Select,
                options: &[
                    l("انستغرام", "Instagram"),
                    l("تويتر", "Twitter"),
                    l("تيك توك", "TikTok"),
                    l("سناب شات", "Snapchat"),
                ],
                placeholder: None,
                required: true,
            },
            Field {
                id: "username",
                label: l("اسم المستخدم", "Username"),
                kind: FieldType::Text,
                options: NO_OPTIONS,
                placeholder: Some(l("@username", "@username")),
                required: true,
            },
            Field {
                id: "phone",
                label: l("رقم الهاتف", "Phone Number"),
                kind: FieldType::Text,
                options: NO_OPTIONS,
                placeholder: Some(l("05xxxxxxxx", "05xxxxxxxx")),
                required: true,
            },
            Field {
                id: "id-photo",
                label: l("صورة الهوية", "Identity Photo"),
                kind: FieldType::File,
                options: NO_OPTIONS,
                placeholder: None,
                required: false,
            },
            Field {
                id: "notes",
                label: l("ملاحظات إضافية", "Additional Notes"),
                kind: FieldType::Textarea,
                options: NO_OPTIONS,
                placeholder: None,
                required: false,
            },
        ],
    },
    Service {
        id: "account-unlock",
        title: l("فك حظر الحسابات", "Account Unlocking"),
        description: l(
            "استعادة الحسابات الموقوفة أو المخترقة",
            "Recover suspended or compromised accounts",
        ),
        icon: "🔓",
        category: Category::Social,
        image: "/images/account-unlock.jpg",
        steps: &[
            Step {
                title: l("وصف المشكلة", "Describe the problem"),
                icon: "📝",
                description: l("أخبرنا ماذا حدث للحساب", "Tell us what happened to the account"),
            },
            Step {
                title: l("معالجة الطلب", "Processing"),
                icon: "⚙️",
                description: l("يتواصل الفريق مع الدعم المختص", "The team escalates to the right support"),
            },
        ],
        details: None,
        fields: &[
            Field {
                id: "platform",
                label: l("المنصة", "Platform"),
                kind: FieldType::Select,
                options: &[
                    l("واتساب", "WhatsApp"),
                    l("انستغرام", "Instagram"),
                    l("فيسبوك", "Facebook"),
                    l("تيك توك", "TikTok"),
                ],
                placeholder: None,
                required: true,
            },
            Field {
                id: "username",
                label: l("اسم المستخدم أو الرقم", "Username or Number"),
                kind: FieldType::Text,
                options: NO_OPTIONS,
                placeholder: None,
                required: true,
            },
            Field {
                id: "issue",
                label: l("وصف المشكلة", "Issue Description"),
                kind: FieldType::Textarea,
                options: NO_OPTIONS,
                placeholder: Some(l("متى وكيف توقف الحساب؟", "When and how did the account stop?")),
                required: true,
            },
            Field {
                id: "screenshot",
                label: l("لقطة شاشة", "Screenshot"),
                kind: FieldType::File,
                options: NO_OPTIONS,
                placeholder: None,
                required: false,
            },
        ],
    },
    Service {
        id: "game-topup",
        title: l("شحن الألعاب", "Game Top-Up"),
        description: l(
            "شحن شدات وجواهر لجميع الألعاب الشهيرة",
            "UC, diamonds and credits for all popular games",
        ),
        icon: "🎮",
        category: Category::Games,
        image: "/images/game-topup.jpg",
        steps: &[
            Step {
                title: l("اختيار الباقة", "Pick a package"),
                icon: "🛒",
                description: l("حدد اللعبة والباقة المناسبة", "Choose the game and package"),
            },
            Step {
                title: l("الشحن الفوري", "Instant top-up"),
                icon: "⚡",
                description: l("يصل الشحن إلى معرف اللاعب مباشرة", "Credits land on your player ID directly"),
            },
        ],
        details: None,
        fields: &[
            Field {
                id: "game",
                label: l("اللعبة", "Game"),
                kind: FieldType::Select,
                options: &[
                    l("ببجي موبايل", "PUBG Mobile"),
                    l("فري فاير", "Free Fire"),
                    l("كول أوف ديوتي", "Call of Duty"),
                    l("فورتنايت", "Fortnite"),
                ],
                placeholder: None,
                required: true,
            },
            Field {
                id: "player-id",
                label: l("معرف اللاعب", "Player ID"),
                kind: FieldType::Number,
                options: NO_OPTIONS,
                placeholder: Some(l("512345678", "512345678")),
                required: true,
            },
            Field {
                id: "package",
                label: l("الباقة", "Package"),
                kind: FieldType::Select,
                options: &[
                    l("60 شدة", "60 UC"),
                    l("325 شدة", "325 UC"),
                    l("660 شدة", "660 UC"),
                    l("1800 شدة", "1800 UC"),
                ],
                placeholder: None,
                required: true,
            },
        ],
    },
    Service {
        id: "gift-cards",
        title: l("بطاقات هدايا", "Gift Cards"),
        description: l(
            "بطاقات آيتونز وقوقل بلاي وبلايستيشن بأفضل الأسعار",
            "iTunes, Google Play and PlayStation cards at the best prices",
        ),
        icon: "🎁",
        category: Category::ECommerce,
        image: "/images/gift-cards.jpg",
        steps: NO_STEPS,
        details: None,
        fields: &[
            Field {
                id: "card",
                label: l("نوع البطاقة", "Card Type"),
                kind: FieldType::Select,
                options: &[
                    l("آيتونز", "iTunes"),
                    l("قوقل بلاي", "Google Play"),
                    l("بلايستيشن", "PlayStation"),
                    l("إكس بوكس", "Xbox"),
                ],
                placeholder: None,
                required: true,
            },
            Field {
                id: "amount",
                label: l("الفئة", "Amount"),
                kind: FieldType::Select,
                options: &[l("10$", "$10"), l("25$", "$25"), l("50$", "$50"), l("100$", "$100")],
                placeholder: None,
                required: true,
            },
            Field {
                id: "email",
                label: l("البريد الإلكتروني للاستلام", "Delivery Email"),
                kind: FieldType::Text,
                options: NO_OPTIONS,
                placeholder: Some(l("name@example.com", "name@example.com")),
                required: true,
            },
        ],
    },
    Service {
        id: "virtual-numbers-service",
        title: l("الأرقام الوهمية", "Virtual Numbers"),
        description: l(
            "أرقام عالمية لتفعيل واتساب وتليجرام وكل التطبيقات",
            "International numbers to activate WhatsApp, Telegram and more",
        ),
        icon: "📱",
        category: Category::ECommerce,
        image: "/images/virtual-numbers.jpg",
        steps: NO_STEPS,
        details: None,
        fields: NO_FIELDS,
    },
    Service {
        id: "phone-inspection",
        title: l("فحص الهاتف", "Phone Security Check"),
        description: l(
            "فحص شامل لهاتفك ضد الاختراق والتجسس",
            "A full device check against compromise and spyware",
        ),
        icon: "🛡️",
        category: Category::Security,
        image: "/images/phone-inspection.jpg",
        steps: &[
            Step {
                title: l("وصف الأعراض", "Describe the symptoms"),
                icon: "📋",
                description: l("اذكر ما لاحظته على الجهاز", "List what you noticed on the device"),
            },
            Step {
                title: l("جلسة فحص", "Inspection session"),
                icon: "🧰",
                description: l("يرتب الفريق جلسة فحص مباشرة", "The team schedules a live inspection"),
            },
        ],
        details: None,
        fields: &[
            Field {
                id: "device",
                label: l("نوع الجهاز", "Device Type"),
                kind: FieldType::Select,
                options: &[l("آيفون", "iPhone"), l("أندرويد", "Android")],
                placeholder: None,
                required: true,
            },
            Field {
                id: "symptoms",
                label: l("الأعراض الملاحظة", "Observed Symptoms"),
                kind: FieldType::Textarea,
                options: NO_OPTIONS,
                placeholder: Some(l("سخونة، بطء، رسائل غريبة...", "Heat, slowness, strange messages...")),
                required: true,
            },
        ],
    },
    Service {
        id: "cyber-protection",
        title: l("حماية الحسابات", "Account Protection"),
        description: l(
            "تأمين حساباتك وتفعيل المصادقة الثنائية",
            "Lock down your accounts and enable two-factor auth",
        ),
        icon: "🔐",
        category: Category::Security,
        image: "/images/cyber-protection.jpg",
        steps: NO_STEPS,
        details: None,
        fields: &[
            Field {
                id: "email",
                label: l("البريد الإلكتروني", "Email"),
                kind: FieldType::Text,
                options: NO_OPTIONS,
                placeholder: None,
                required: true,
            },
            Field {
                id: "concerns",
                label: l("ما الذي يقلقك؟", "What worries you?"),
                kind: FieldType::Textarea,
                options: NO_OPTIONS,
                placeholder: None,
                required: false,
            },
        ],
    },
    Service {
        id: "digital-consult",
        title: l("استشارة رقمية", "Digital Consultation"),
        description: l(
            "استشارة مباشرة مع مختص في الخدمات الرقمية",
            "A direct consultation with a digital services specialist",
        ),
        icon: "💬",
        category: Category::Main,
        image: "/images/digital-consult.jpg",
        steps: NO_STEPS,
        details: None,
        fields: &[
            Field {
                id: "topic",
                label: l("موضوع الاستشارة", "Consultation Topic"),
                kind: FieldType::Select,
                options: &[
                    l("حسابات التواصل", "Social accounts"),
                    l("الأمن الرقمي", "Digital security"),
                    l("المتاجر الإلكترونية", "Online stores"),
                ],
                placeholder: None,
                required: true,
            },
            Field {
                id: "details",
                label: l("تفاصيل طلبك", "Request Details"),
                kind: FieldType::Textarea,
                options: NO_OPTIONS,
                placeholder: None,
                required: true,
            },
        ],
    },
    Service {
        id: "super-ai",
        title: l("المساعد الخارق", "Super Assistant"),
        description: l("أقوى ذكاء اصطناعي يجيب عن كل شيء", "The most capable AI, answering anything"),
        icon: "🧠",
        category: Category::Ai,
        image: "/images/super-ai.jpg",
        steps: NO_STEPS,
        details: None,
        fields: NO_FIELDS,
    },
    Service {
        id: "ai-image",
        title: l("استوديو الصور الذكي", "AI Image Studio"),
        description: l("توليد وتعديل الصور بالذكاء الاصطناعي", "Generate and edit images with AI"),
        icon: "🎨",
        category: Category::Ai,
        image: "/images/ai-image.jpg",
        steps: NO_STEPS,
        details: None,
        fields: NO_FIELDS,
    },
    Service {
        id: "ai-video-gen",
        title: l("استوديو Veo للفيديو", "Veo Video Studio"),
        description: l("توليد فيديوهات سينمائية من نص أو صورة", "Cinematic video generation from text or image"),
        icon: "🎬",
        category: Category::Ai,
        image: "/images/ai-video.jpg",
        steps: NO_STEPS,
        details: None,
        fields: NO_FIELDS,
    },
    Service {
        id: "password-gen",
        title: l("كلمات المرور", "Passwords"),
        description: l("توليد كلمات مرور قوية ومشفرة", "Generate strong, hardened passwords"),
        icon: "🔑",
        category: Category::Tools,
        image: "/images/password-gen.jpg",
        steps: NO_STEPS,
        details: None,
        fields: NO_FIELDS,
    },
    Service {
        id: "url-scanner",
        title: l("فحص الروابط الذكي", "Smart Link Scanner"),
        description: l("تحليل الروابط وكشف التصيد الاحتيالي", "Analyse links and catch phishing attempts"),
        icon: "🔍",
        category: Category::Tools,
        image: "/images/url-scanner.jpg",
        steps: NO_STEPS,
        details: None,
        fields: NO_FIELDS,
    },
    Service {
        id: "network-info",
        title: l("معلومات الشبكة و IP", "Network & IP Info"),
        description: l("اعرف عنوانك العام وتفاصيل اتصالك", "See your public address and connection details"),
        icon: "🌐",
        category: Category::Tools,
        image: "/images/network-info.jpg",
        steps: NO_STEPS,
        details: None,
        fields: NO_FIELDS,
    },
    Service {
        id: "accounts-market",
        title: l("سوق الحسابات", "Accounts Market"),
        description: l("بيع وشراء حسابات الألعاب الموثقة", "Buy and sell verified game accounts"),
        icon: "🛒",
        category: Category::MarketOfAccounts,
        image: "/images/accounts-market.jpg",
        steps: NO_STEPS,
        details: None,
        fields: NO_FIELDS,
    },
];

pub static VIRTUAL_NUMBERS: &[VirtualNumber] = &[
    VirtualNumber {
        id: "1",
        country: l("الولايات المتحدة", "United States"),
        flag: "🇺🇸",
        code: "+1",
        price: 15,
        apps: &[l("واتساب", "WhatsApp"), l("تليجرام", "Telegram"), l("جوجل", "Google")],
        kind: NumberType::Sms,
        duration: l("صلاحية شهر", "Valid one month"),
        available: true,
    },
    VirtualNumber {
        id: "2",
        country: l("المملكة المتحدة", "United Kingdom"),
        flag: "🇬🇧",
        code: "+44",
        price: 20,
        apps: &[l("واتساب", "WhatsApp"), l("تيك توك", "TikTok"), l("تويتر", "Twitter")],
        kind: NumberType::Both,
        duration: l("صلاحية 3 أشهر", "Valid three months"),
        available: true,
    },
    VirtualNumber {
        id: "3",
        country: l("روسيا", "Russia"),
        flag: "🇷🇺",
        code: "+7",
        price: 8,
        apps: &[l("تليجرام", "Telegram"), l("واتساب", "WhatsApp")],
        kind: NumberType::Sms,
        duration: l("استخدام مرة واحدة", "Single use"),
        available: true,
    },
    VirtualNumber {
        id: "4",
        country: l("ألمانيا", "Germany"),
        flag: "🇩🇪",
        code: "+49",
        price: 25,
        apps: &[l("واتساب", "WhatsApp"), l("تليجرام", "Telegram"), l("باي بال", "PayPal")],
        kind: NumberType::Sms,
        duration: l("صلاحية سنة", "Valid one year"),
        available: true,
    },
    VirtualNumber {
        id: "5",
        country: l("فرنسا", "France"),
        flag: "🇫🇷",
        code: "+33",
        price: 22,
        apps: &[l("واتساب", "WhatsApp"), l("إنستغرام", "Instagram")],
        kind: NumberType::Sms,
        duration: l("صلاحية شهر", "Valid one month"),
        available: true,
    },
    VirtualNumber {
        id: "6",
        country: l("تركيا", "Turkey"),
        flag: "🇹🇷",
        code: "+90",
        price: 12,
        apps: &[l("واتساب", "WhatsApp"), l("تليجرام", "Telegram")],
        kind: NumberType::Sms,
        duration: l("صلاحية 15 يوم", "Valid 15 days"),
        available: true,
    },
    VirtualNumber {
        id: "7",
        country: l("كندا", "Canada"),
        flag: "🇨🇦",
        code: "+1",
        price: 18,
        apps: &[l("واتساب", "WhatsApp"), l("فيسبوك", "Facebook")],
        kind: NumberType::Sms,
        duration: l("صلاحية شهر", "Valid one month"),
        available: true,
    },
    VirtualNumber {
        id: "8",
        country: l("هولندا", "Netherlands"),
        flag: "🇳🇱",
        code: "+31",
        price: 30,
        apps: &[l("واتساب", "WhatsApp"), l("تليجرام", "Telegram"), l("بنوك", "Banks")],
        kind: NumberType::Both,
        duration: l("دائم", "Permanent"),
        available: true,
    },
    VirtualNumber {
        id: "9",
        country: l("إندونيسيا", "Indonesia"),
        flag: "🇮🇩",
        code: "+62",
        price: 5,
        apps: &[l("تليجرام", "Telegram")],
        kind: NumberType::Sms,
        duration: l("استخدام مرة واحدة", "Single use"),
        available: true,
    },
    VirtualNumber {
        id: "10",
        country: l("الهند", "India"),
        flag: "🇮🇳",
        code: "+91",
        price: 7,
        apps: &[l("واتساب", "WhatsApp")],
        kind: NumberType::Sms,
        duration: l("صلاحية أسبوع", "Valid one week"),
        available: true,
    },
];

pub static GAME_ACCOUNTS: &[GameAccount] = &[
    GameAccount {
        id: "1",
        game: "PUBG",
        level: 75,
        skins: 120,
        server: l("أوروبا", "Europe"),
        binding: l("تويتر", "Twitter"),
        price: 450,
        status: AccountStatus::Verified,
        images: &["https://images.unsplash.com/photo-1542751371-adc38448a05e"],
        description: l("حساب مشحون 8 مواسم رويال باس", "Account with 8 seasons of Royale Pass"),
    },
    GameAccount {
        id: "2",
        game: "Free Fire",
        level: 60,
        skins: 85,
        server: l("الشرق الأوسط", "Middle East"),
        binding: l("فيسبوك", "Facebook"),
        price: 200,
        status: AccountStatus::Pending,
        images: &["https://images.unsplash.com/photo-1511512578047-dfb367046420"],
        description: l("حساب قديم سكنات نادرة", "Old account with rare skins"),
    },
    GameAccount {
        id: "3",
        game: "COD",
        level: 150,
        skins: 50,
        server: l("عالمي", "Global"),
        binding: l("جيميل", "Gmail"),
        price: 300,
        status: AccountStatus::Verified,
        images: &["https://images.unsplash.com/photo-1509198397868-475647b2a1e5"],
        description: l("حساب ميثيك كامل", "Full mythic account"),
    },
];

/// Category selection made against the language-dependent wildcard sentinel.
/// `Unmatched` keeps filtering total for labels the catalog does not know:
/// such a selection matches nothing instead of failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
    Unmatched,
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> CategoryFilter {
        let trimmed = raw.trim();
        if trimmed.is_empty() || is_wildcard(trimmed) {
            return CategoryFilter::All;
        }
        match Category::parse(trimmed) {
            Some(c) => CategoryFilter::Only(c),
            None => CategoryFilter::Unmatched,
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
            CategoryFilter::Unmatched => false,
        }
    }
}

/// Case-sensitive substring filter over title and description in the active
/// language, combined with the category selection. Catalog order, no ranking.
pub fn filter_services(
    lang: Language,
    filter: CategoryFilter,
    query: &str,
) -> Vec<&'static Service> {
    SERVICES
        .iter()
        .filter(|s| {
            filter.matches(s.category)
                && (s.title.get(lang).contains(query) || s.description.get(lang).contains(query))
        })
        .collect()
}

/// Live suggestions: top 5 matches in catalog order. A blank query yields
/// nothing, which is distinct from "show all".
pub fn suggest_services(lang: Language, query: &str) -> Vec<&'static Service> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    SERVICES
        .iter()
        .filter(|s| s.title.get(lang).contains(query) || s.description.get(lang).contains(query))
        .take(5)
        .collect()
}

/// Distinct category labels derived from the catalog, wildcard first.
pub fn categories(lang: Language) -> Vec<&'static str> {
    let mut out = vec![wildcard(lang)];
    for service in SERVICES {
        let label = service.category.label(lang);
        if !out.contains(&label) {
            out.push(label);
        }
    }
    out
}

pub fn service_by_id(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

pub fn number_by_id(id: &str) -> Option<&'static VirtualNumber> {
    VIRTUAL_NUMBERS.iter().find(|n| n.id == id)
}

pub fn account_by_id(id: &str) -> Option<&'static GameAccount> {
    GAME_ACCOUNTS.iter().find(|a| a.id == id)
}

/// Country/code substring search plus supported-app filter with its own
/// wildcard sentinel.
pub fn filter_numbers(lang: Language, query: &str, app: &str) -> Vec<&'static VirtualNumber> {
    VIRTUAL_NUMBERS
        .iter()
        .filter(|n| {
            (n.country.get(lang).contains(query) || n.code.contains(query))
                && (is_wildcard(app)
                    || app.trim().is_empty()
                    || n.apps.iter().any(|a| a.ar == app.trim() || a.en == app.trim()))
        })
        .collect()
}

/// Game filter plus the ordering chosen in the market settings.
pub fn filter_accounts(game: &str, sorting: MarketSorting) -> Vec<&'static GameAccount> {
    let game = game.trim();
    let mut list: Vec<&'static GameAccount> = GAME_ACCOUNTS
        .iter()
        .filter(|a| game.is_empty() || is_wildcard(game) || a.game == game)
        .collect();
    match sorting {
        MarketSorting::Price => list.sort_by_key(|a| a.price),
        MarketSorting::Level => list.sort_by_key(|a| std::cmp::Reverse(a.level)),
        MarketSorting::Status => list.sort_by_key(|a| a.status != AccountStatus::Verified),
    }
    list
}
