use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{AcStatus, Mosque, ShoeStorage, WudhuCleanliness};

/// Visual tone the frontend maps to a badge color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LabelTone {
    Positive,
    Warning,
    Negative,
    Info,
    Neutral,
}

/// Human readable (Indonesian) label for a facility attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FacilityLabel {
    pub text: String,
    pub tone: LabelTone,
}

impl FacilityLabel {
    fn new(text: &str, tone: LabelTone) -> Self {
        Self {
            text: text.to_string(),
            tone,
        }
    }
}

/// Short AC label used on list cards
pub fn ac_card_label(has_ac: bool, status: Option<AcStatus>) -> FacilityLabel {
    if !has_ac {
        return FacilityLabel::new("Tidak ada AC", LabelTone::Neutral);
    }
    match status {
        Some(AcStatus::Working) => FacilityLabel::new("AC berfungsi", LabelTone::Positive),
        Some(AcStatus::Broken) => FacilityLabel::new("AC rusak", LabelTone::Negative),
        Some(AcStatus::Partial) => FacilityLabel::new("AC sebagian", LabelTone::Warning),
        None => FacilityLabel::new("AC tersedia", LabelTone::Info),
    }
}

/// Long AC label used on the detail view
pub fn ac_detail_label(has_ac: bool, status: Option<AcStatus>) -> FacilityLabel {
    if !has_ac {
        return FacilityLabel::new("Tidak ada AC", LabelTone::Neutral);
    }
    match status {
        Some(AcStatus::Working) => {
            FacilityLabel::new("AC berfungsi dengan baik", LabelTone::Positive)
        }
        Some(AcStatus::Broken) => {
            FacilityLabel::new("AC rusak/tidak berfungsi", LabelTone::Negative)
        }
        Some(AcStatus::Partial) => FacilityLabel::new("AC sebagian ruangan", LabelTone::Warning),
        None => FacilityLabel::new("AC tersedia", LabelTone::Info),
    }
}

fn cleanliness_label(
    cleanliness: Option<WudhuCleanliness>,
    unknown_text: &'static str,
) -> FacilityLabel {
    match cleanliness {
        Some(WudhuCleanliness::VeryClean) => {
            FacilityLabel::new("Sangat bersih", LabelTone::Positive)
        }
        Some(WudhuCleanliness::Clean) => FacilityLabel::new("Bersih", LabelTone::Positive),
        Some(WudhuCleanliness::Average) => FacilityLabel::new("Cukup bersih", LabelTone::Warning),
        Some(WudhuCleanliness::NeedsCleaning) => {
            FacilityLabel::new("Perlu dibersihkan", LabelTone::Negative)
        }
        None => FacilityLabel::new(unknown_text, LabelTone::Neutral),
    }
}

pub fn cleanliness_card_label(cleanliness: Option<WudhuCleanliness>) -> FacilityLabel {
    cleanliness_label(cleanliness, "Belum ada info")
}

pub fn cleanliness_detail_label(cleanliness: Option<WudhuCleanliness>) -> FacilityLabel {
    cleanliness_label(cleanliness, "Belum ada informasi")
}

pub fn shoe_storage_text(storage: Option<ShoeStorage>) -> &'static str {
    match storage {
        Some(ShoeStorage::Shelves) => "Rak sepatu tersedia",
        Some(ShoeStorage::Lockers) => "Loker sepatu tersedia",
        Some(ShoeStorage::FloorOnly) => "Lantai saja",
        Some(ShoeStorage::None) => "Tidak ada tempat khusus",
        None => "Belum ada informasi",
    }
}

impl Mosque {
    pub fn ac_card_label(&self) -> FacilityLabel {
        ac_card_label(self.has_ac, self.effective_ac_status())
    }

    pub fn ac_detail_label(&self) -> FacilityLabel {
        ac_detail_label(self.has_ac, self.effective_ac_status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_mosque;

    #[test]
    fn test_ac_card_label() {
        assert_eq!(ac_card_label(false, None).text, "Tidak ada AC");
        assert_eq!(
            ac_card_label(false, Some(AcStatus::Working)).text,
            "Tidak ada AC"
        );
        assert_eq!(ac_card_label(true, Some(AcStatus::Working)).text, "AC berfungsi");
        assert_eq!(ac_card_label(true, Some(AcStatus::Broken)).tone, LabelTone::Negative);
        assert_eq!(ac_card_label(true, Some(AcStatus::Partial)).text, "AC sebagian");
        assert_eq!(ac_card_label(true, None).text, "AC tersedia");
    }

    #[test]
    fn test_ac_detail_label() {
        assert_eq!(
            ac_detail_label(true, Some(AcStatus::Broken)).text,
            "AC rusak/tidak berfungsi"
        );
        assert_eq!(
            ac_detail_label(true, Some(AcStatus::Partial)).text,
            "AC sebagian ruangan"
        );
    }

    #[test]
    fn test_cleanliness_labels_differ_only_when_unknown() {
        assert_eq!(cleanliness_card_label(None).text, "Belum ada info");
        assert_eq!(cleanliness_detail_label(None).text, "Belum ada informasi");
        assert_eq!(
            cleanliness_card_label(Some(WudhuCleanliness::Average)),
            cleanliness_detail_label(Some(WudhuCleanliness::Average))
        );
    }

    #[test]
    fn test_shoe_storage_text() {
        assert_eq!(shoe_storage_text(Some(ShoeStorage::Lockers)), "Loker sepatu tersedia");
        assert_eq!(shoe_storage_text(Some(ShoeStorage::None)), "Tidak ada tempat khusus");
        assert_eq!(shoe_storage_text(None), "Belum ada informasi");
    }

    #[test]
    fn test_mosque_without_ac_never_shows_status() {
        let mut mosque = sample_mosque(3, -6.2, 106.8);
        mosque.has_ac = false;
        mosque.ac_status = Some(AcStatus::Working);
        assert_eq!(mosque.ac_card_label().text, "Tidak ada AC");
        assert_eq!(mosque.ac_detail_label().text, "Tidak ada AC");
    }
}
