mod facility_label;
mod location_failure;
mod mosque;

pub use facility_label::{
    cleanliness_card_label, cleanliness_detail_label, shoe_storage_text, FacilityLabel,
    LabelTone,
};
pub use location_failure::LocationFailure;
pub use mosque::{
    AcStatus, Mosque, NewMosqueSubmission, ShoeStorage, SubmissionReceipt, SubmissionStatus,
    WudhuCleanliness,
};
