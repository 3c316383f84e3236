use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Failure reported by the client's location provider (browser geolocation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationFailure {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unknown,
}

impl LocationFailure {
    const MESSAGE_PREFIX: &'static str = "Tidak dapat mengakses lokasi Anda. ";

    /// Parse a provider error code; anything unrecognised is `Unknown`.
    ///
    /// Accepts both the symbolic names and the numeric codes of the
    /// W3C Geolocation API (1, 2, 3).
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "PERMISSION_DENIED" | "1" => Self::PermissionDenied,
            "POSITION_UNAVAILABLE" | "2" => Self::PositionUnavailable,
            "TIMEOUT" | "3" => Self::Timeout,
            _ => Self::Unknown,
        }
    }

    fn detail(&self) -> &'static str {
        match self {
            Self::PermissionDenied => "Mohon izinkan akses lokasi pada browser.",
            Self::PositionUnavailable => "Informasi lokasi tidak tersedia.",
            Self::Timeout => "Permintaan lokasi timeout.",
            Self::Unknown => "Terjadi kesalahan tidak dikenal.",
        }
    }

    /// Localized message shown to the user
    pub fn message(&self) -> String {
        format!("{}{}", Self::MESSAGE_PREFIX, self.detail())
    }
}

impl std::fmt::Display for LocationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "PERMISSION_DENIED"),
            Self::PositionUnavailable => write!(f, "POSITION_UNAVAILABLE"),
            Self::Timeout => write!(f, "TIMEOUT"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_names_and_numbers() {
        assert_eq!(
            LocationFailure::from_code("PERMISSION_DENIED"),
            LocationFailure::PermissionDenied
        );
        assert_eq!(
            LocationFailure::from_code("position_unavailable"),
            LocationFailure::PositionUnavailable
        );
        assert_eq!(LocationFailure::from_code("3"), LocationFailure::Timeout);
        assert_eq!(LocationFailure::from_code("weird"), LocationFailure::Unknown);
        assert_eq!(LocationFailure::from_code(""), LocationFailure::Unknown);
    }

    #[test]
    fn test_messages_are_localized() {
        assert_eq!(
            LocationFailure::PermissionDenied.message(),
            "Tidak dapat mengakses lokasi Anda. Mohon izinkan akses lokasi pada browser."
        );
        assert_eq!(
            LocationFailure::Timeout.message(),
            "Tidak dapat mengakses lokasi Anda. Permintaan lokasi timeout."
        );
    }
}
