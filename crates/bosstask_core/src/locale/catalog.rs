//! Localized string catalog for every screen and the demo data.
//!
//! # Invariants
//! - Every entry carries all four translations; there are no partial rows.
//! - Lookup never fails: an unknown key resolves to the key itself.

use crate::locale::tag::{primary_language, LanguageTag};

/// Translation column selected for a language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogLanguage {
    English,
    CanadianFrench,
    HongKongChinese,
    Arabic,
}

impl CatalogLanguage {
    /// Resolves the column for a stored code.
    ///
    /// Order: exact tag (case/separator-insensitive), then primary language,
    /// then English.
    pub fn resolve(code: &str) -> Self {
        if let Some(tag) = LanguageTag::parse(code) {
            match tag.canonical().as_str() {
                "en" | "en-US" => return Self::English,
                "fr-CA" => return Self::CanadianFrench,
                "zh-HK" | "zh-Hant-HK" => return Self::HongKongChinese,
                "ar" => return Self::Arabic,
                _ => {}
            }
        }

        match primary_language(code).as_str() {
            "fr" => Self::CanadianFrench,
            "zh" => Self::HongKongChinese,
            "ar" => Self::Arabic,
            _ => Self::English,
        }
    }
}

struct CatalogEntry {
    key: &'static str,
    en: &'static str,
    fr_ca: &'static str,
    zh_hk: &'static str,
    ar: &'static str,
}

impl CatalogEntry {
    fn text(&self, language: CatalogLanguage) -> &'static str {
        match language {
            CatalogLanguage::English => self.en,
            CatalogLanguage::CanadianFrench => self.fr_ca,
            CatalogLanguage::HongKongChinese => self.zh_hk,
            CatalogLanguage::Arabic => self.ar,
        }
    }
}

macro_rules! entry {
    ($key:literal, $en:literal, $fr:literal, $zh:literal, $ar:literal) => {
        CatalogEntry {
            key: $key,
            en: $en,
            fr_ca: $fr,
            zh_hk: $zh,
            ar: $ar,
        }
    };
}

const CATALOG: &[CatalogEntry] = &[
    // Home
    entry!("app_title", "BOSS Task Tracker", "Suivi des tâches BOSS", "BOSS 任務追蹤", "متتبع مهام BOSS"),
    entry!("welcome_title", "Welcome!", "Bienvenue!", "歡迎！", "!مرحبًا"),
    entry!(
        "welcome_message",
        "Organize your tasks in any language.",
        "Organisez vos tâches dans la langue de votre choix.",
        "用任何語言整理你的任務。",
        "نظّم مهامك بأي لغة."
    ),
    entry!("localized_image_section_title", "Local theme", "Thème local", "本地主題", "السمة المحلية"),
    entry!(
        "localized_image_caption",
        "The background image changes with your language.",
        "L'image de fond change selon votre langue.",
        "背景圖片會隨語言而改變。",
        "تتغير صورة الخلفية حسب لغتك."
    ),
    entry!("locale_section_title", "Regional formats", "Formats régionaux", "地區格式", "التنسيقات الإقليمية"),
    entry!("today_is", "Today is", "Nous sommes le", "今天是", "اليوم هو"),
    entry!("locale_time_label", "Current time", "Heure actuelle", "現在時間", "الوقت الحالي"),
    entry!("locale_number_label", "Sample amount", "Montant d'exemple", "示例金額", "مبلغ نموذجي"),
    entry!(
        "cta_description",
        "Ready to get things done?",
        "Prêt à passer à l'action?",
        "準備好完成任務了嗎？",
        "هل أنت مستعد لإنجاز المهام؟"
    ),
    entry!("cta_primary_button", "Get started", "Commencer", "開始使用", "ابدأ الآن"),
    entry!(
        "cultural_section_title",
        "Cultural layout",
        "Disposition culturelle",
        "文化化版面",
        "التخطيط الثقافي"
    ),
    entry!(
        "cultural_section_body",
        "Button order and icons follow your reading direction.",
        "L'ordre des boutons et les icônes suivent votre sens de lecture.",
        "按鈕次序及圖示會跟隨你的閱讀方向。",
        "يتبع ترتيب الأزرار والرموز اتجاه القراءة لديك."
    ),
    entry!("ok_button_label", "OK", "OK", "確定", "موافق"),
    entry!("cancel_button_label", "Cancel", "Annuler", "取消", "إلغاء"),
    entry!("language_switcher_title", "Language", "Langue", "語言", "اللغة"),
    entry!(
        "language_picker_accessibility_label",
        "Choose language",
        "Choisir la langue",
        "選擇語言",
        "اختر اللغة"
    ),
    entry!("nav_manage_groups", "Manage groups", "Gérer les groupes", "管理群組", "إدارة المجموعات"),
    entry!("nav_profile", "Profile", "Profil", "個人檔案", "الملف الشخصي"),
    // Settings
    entry!("settings_title", "Settings", "Paramètres", "設定", "الإعدادات"),
    entry!("settings_language_section_title", "App language", "Langue de l'application", "應用程式語言", "لغة التطبيق"),
    entry!("settings_reset_section_title", "Reset", "Réinitialiser", "重設", "إعادة التعيين"),
    entry!(
        "settings_reset_description",
        "Restores English as the app language.",
        "Rétablit l'anglais comme langue de l'application.",
        "將應用程式語言還原為英文。",
        "يعيد الإنجليزية لغةً للتطبيق."
    ),
    entry!("settings_reset_button", "Reset language", "Réinitialiser la langue", "重設語言", "إعادة تعيين اللغة"),
    // Groups and tasks
    entry!("manage_groups_title", "Groups", "Groupes", "群組", "المجموعات"),
    entry!("groups_header", "Your groups", "Vos groupes", "你的群組", "مجموعاتك"),
    entry!("new_group_default_name", "New group", "Nouveau groupe", "新群組", "مجموعة جديدة"),
    entry!("a11y_add_group", "Add group", "Ajouter un groupe", "新增群組", "إضافة مجموعة"),
    entry!("tasks_header", "Tasks", "Tâches", "任務", "المهام"),
    entry!("placeholder_new_task", "New task", "Nouvelle tâche", "新任務", "مهمة جديدة"),
    entry!("add_task_button", "Add", "Ajouter", "新增", "إضافة"),
    // Profile
    entry!("profile_title", "Profile", "Profil", "個人檔案", "الملف الشخصي"),
    entry!("profile_header", "Account", "Compte", "帳戶", "الحساب"),
    entry!("profile_label_username", "Username", "Nom d'utilisateur", "用戶名稱", "اسم المستخدم"),
    entry!("profile_value_username_example", "boss.user", "boss.user", "boss.user", "boss.user"),
    entry!("profile_label_role", "Role", "Rôle", "角色", "الدور"),
    entry!("profile_value_role_example", "Team lead", "Chef d'équipe", "團隊主管", "قائد الفريق"),
    entry!(
        "profile_footer_note",
        "Profile data is sample content.",
        "Les données du profil sont des exemples.",
        "個人檔案資料僅為示例。",
        "بيانات الملف الشخصي محتوى تجريبي."
    ),
    // Demo data
    entry!("demo_group_personal", "Personal", "Personnel", "個人", "شخصي"),
    entry!("demo_group_work", "Work", "Travail", "工作", "العمل"),
    entry!("demo_task_buy_groceries", "Buy groceries", "Faire l'épicerie", "買餸", "شراء البقالة"),
    entry!("demo_task_call_mom", "Call mom", "Appeler maman", "打電話給媽媽", "الاتصال بأمي"),
    entry!("demo_task_read", "Read a book", "Lire un livre", "看書", "قراءة كتاب"),
    entry!("demo_task_review_prs", "Review pull requests", "Réviser les demandes de fusion", "審閱合併請求", "مراجعة طلبات الدمج"),
    entry!("demo_task_standup", "Daily standup", "Mêlée quotidienne", "每日站會", "الاجتماع اليومي"),
];

/// Returns the text for `key` in the language resolved from `code`.
///
/// Unknown keys come back unchanged so the shell shows the key, not a blank.
pub fn localize<'a>(code: &str, key: &'a str) -> &'a str {
    match localize_in(CatalogLanguage::resolve(code), key) {
        Some(text) => text,
        None => {
            log::debug!("event=catalog_miss module=locale status=noop key={key}");
            key
        }
    }
}

/// Returns the text for `key` in an already-resolved column.
pub fn localize_in(language: CatalogLanguage, key: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| entry.text(language))
}
