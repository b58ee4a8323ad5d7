mod home;
pub use home::Home;

mod wear;
pub use wear::Wear;

mod story;
pub use story::Story;

mod progress;
pub use progress::Progress;

use api::ApiError;

/// Map API failures to user-facing words. Data panels keep showing stale
/// content where they can; this string goes in the soft banner next to it.
/// `Validation` carries the backend's own message and is passed through.
pub(crate) fn describe_error(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => crate::t!("error-network"),
        ApiError::Auth => crate::t!("error-auth"),
        ApiError::Validation { message, .. } => message.clone(),
        ApiError::NotFound => crate::t!("error-not-found"),
        ApiError::Decode(_) => crate::t!("error-decode"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_banners_use_localized_strings() {
        crate::i18n::init();
        assert_eq!(
            describe_error(&ApiError::Network("timeout".into())),
            "Couldn't reach the server. Showing the last data we have."
        );
        // Backend validation messages pass through untranslated.
        assert_eq!(
            describe_error(&ApiError::Validation {
                status: 422,
                message: "bad date".into()
            }),
            "bad date"
        );
    }
}
