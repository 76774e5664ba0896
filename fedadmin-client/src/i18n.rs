//! Translation lookup
//!
//! Static dictionary for the dashboard's chrome strings. Content itself is
//! bilingual data, not translation keys; this table only covers labels,
//! actions, and the notification titles. Unknown keys fall back to the key.

use shared::Locale;

/// (key, arabic, english)
static TABLE: &[(&str, &str, &str)] = &[
    ("nav.dashboard", "لوحة التحكم", "Dashboard"),
    ("nav.news", "الأخبار", "News"),
    ("nav.events", "الفعاليات", "Events"),
    ("nav.members", "الأعضاء", "Members"),
    ("nav.users", "المستخدمون", "Users"),
    ("nav.profile", "الملف الشخصي", "Profile"),
    ("nav.settings", "الإعدادات", "Settings"),
    ("action.save", "حفظ", "Save"),
    ("action.delete", "حذف", "Delete"),
    ("action.edit", "تعديل", "Edit"),
    ("action.cancel", "إلغاء", "Cancel"),
    ("action.login", "تسجيل الدخول", "Log in"),
    ("action.logout", "تسجيل الخروج", "Log out"),
    ("notify.saved.title", "تم الحفظ", "Saved"),
    ("notify.saved.body", "تم حفظ التغييرات بنجاح", "Changes saved successfully"),
    ("notify.deleted.title", "تم الحذف", "Deleted"),
    ("notify.deleted.body", "تم حذف السجل", "The record was deleted"),
    ("error.network.title", "خطأ في الاتصال", "Connection error"),
    (
        "error.network.body",
        "تعذر الوصول إلى الخادم، حاول مرة أخرى",
        "Could not reach the server, please try again",
    ),
    ("error.unauthorized.title", "انتهت الجلسة", "Session expired"),
    (
        "error.unauthorized.body",
        "يرجى تسجيل الدخول مرة أخرى",
        "Please log in again",
    ),
    ("error.request.title", "فشل الطلب", "Request failed"),
    ("error.notfound.title", "غير موجود", "Not found"),
    (
        "error.notfound.body",
        "السجل المطلوب غير موجود",
        "The requested record does not exist",
    ),
    ("error.validation.title", "تحقق من الحقول", "Check the form"),
    (
        "error.validation.body",
        "بعض الحقول ناقصة أو غير صحيحة",
        "Some fields are missing or invalid",
    ),
    ("error.response.title", "استجابة غير متوقعة", "Unexpected response"),
    (
        "error.response.body",
        "أعاد الخادم استجابة غير متوقعة",
        "The server returned an unexpected response",
    ),
];

/// Look up a chrome string for the locale, falling back to the key itself
pub fn translate(locale: Locale, key: &str) -> &str {
    match TABLE.iter().find(|(k, _, _)| *k == key) {
        Some((_, ar, en)) => match locale {
            Locale::Ar => ar,
            Locale::En => en,
        },
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_both_locales() {
        assert_eq!(translate(Locale::En, "nav.news"), "News");
        assert_eq!(translate(Locale::Ar, "nav.news"), "الأخبار");
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(translate(Locale::En, "nav.missing"), "nav.missing");
    }
}
