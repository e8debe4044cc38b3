//! User-facing strings. The app ships in Arabic only.

use crate::auth::{AuthError, AuthErrorCode};

pub const APP_TITLE: &str = "صوت العرب";
pub const APP_SUBTITLE: &str = "أهلاً بك في عالم الدردشة الصوتية";
pub const APP_FOOTER: &str = "صوت العرب © 2025 - النسخة الإدارية";

pub const NAME_PLACEHOLDER: &str = "الاسم المستعار";
pub const EMAIL_PLACEHOLDER: &str = "البريد الإلكتروني";
pub const PASSWORD_PLACEHOLDER: &str = "كلمة المرور";

pub const LOGIN_BUTTON: &str = "تسجيل الدخول";
pub const ADMIN_LOGIN_BUTTON: &str = "دخول المدير";
pub const SIGNUP_BUTTON: &str = "إنشاء حساب جديد";
pub const SWITCH_TO_SIGNUP: &str = "ليس لديك حساب؟ سجل الآن";
pub const SWITCH_TO_LOGIN: &str = "لديك حساب بالفعل؟ تسجيل الدخول";
pub const ADMIN_RECOGNIZED_BANNER: &str = "تم التعرف على حساب المدير العام";
pub const SIGN_OUT_BUTTON: &str = "تسجيل الخروج";
pub const OFFLINE_NOTICE: &str = "وضع تجريبي بدون اتصال بالخادم";

pub const FILL_ALL_FIELDS: &str = "الرجاء ملء جميع الحقول";
pub const USER_NOT_FOUND: &str = "المستخدم غير موجود";
pub const WRONG_PASSWORD: &str = "كلمة المرور خاطئة";
pub const EMAIL_ALREADY_IN_USE: &str = "البريد الإلكتروني مستخدم بالفعل";
pub const WEAK_PASSWORD: &str = "كلمة المرور ضعيفة جداً";
pub const CONNECTION_ERROR: &str = "حدث خطأ أثناء الاتصال بالقاعدة";

/// Inline message for a provider error code.
#[must_use]
pub const fn message_for_code(code: &AuthErrorCode) -> &'static str {
    match code {
        AuthErrorCode::UserNotFound => USER_NOT_FOUND,
        AuthErrorCode::WrongPassword => WRONG_PASSWORD,
        AuthErrorCode::EmailAlreadyInUse => EMAIL_ALREADY_IN_USE,
        AuthErrorCode::WeakPassword => WEAK_PASSWORD,
        _ => CONNECTION_ERROR,
    }
}

/// Inline message for any failed submission. Transport, store and
/// configuration failures all read as a connection error.
#[must_use]
pub fn message_for_error(error: &AuthError) -> &'static str {
    match error.code() {
        Some(code) => message_for_code(code),
        None => CONNECTION_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_have_dedicated_messages() {
        let cases = [
            (AuthErrorCode::UserNotFound, USER_NOT_FOUND),
            (AuthErrorCode::WrongPassword, WRONG_PASSWORD),
            (AuthErrorCode::EmailAlreadyInUse, EMAIL_ALREADY_IN_USE),
            (AuthErrorCode::WeakPassword, WEAK_PASSWORD),
        ];
        for (code, expected) in cases {
            assert_eq!(message_for_code(&code), expected);
        }
    }

    #[test]
    fn other_codes_fall_back_to_connection_error() {
        for code in [
            AuthErrorCode::InvalidCredential,
            AuthErrorCode::TooManyRequests,
            AuthErrorCode::Other("auth/network-request-failed".to_string()),
            AuthErrorCode::Other(String::new()),
        ] {
            assert_eq!(message_for_code(&code), CONNECTION_ERROR);
        }
    }

    #[test]
    fn non_provider_errors_read_as_connection_error() {
        assert_eq!(
            message_for_error(&AuthError::Store("unavailable".to_string())),
            CONNECTION_ERROR
        );
        assert_eq!(message_for_error(&AuthError::NotConfigured), CONNECTION_ERROR);
    }
}
