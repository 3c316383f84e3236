/// Upper bound accepted for a per-request `radius_km` override
pub const MAX_SEARCH_RADIUS_KM: f64 = 50.0;

// =============================================================================
// USER-FACING MESSAGES
// =============================================================================

pub const LOCATION_REQUIRED_MESSAGE: &str =
    "Lokasi diperlukan. Izinkan akses lokasi lalu coba lagi.";

pub const SOURCE_UNAVAILABLE_MESSAGE: &str =
    "Data masjid sedang tidak dapat dimuat. Silakan coba lagi.";

pub const SUBMISSION_SUCCESS_MESSAGE: &str =
    "Terima kasih! Data masjid telah dikirim dan akan diverifikasi terlebih dahulu.";

pub const SUBMISSION_FAILURE_MESSAGE: &str = "Terjadi kesalahan. Silakan coba lagi.";
