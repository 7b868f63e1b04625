pub mod device;
pub mod patient;
pub mod physician;

pub use device::{DeviceLanguage, FacilityDevice};
pub use patient::{
    Address, AddressUpdate, EmergencyContact, EmergencyContactUpdate, EpochTimestamp,
    InsuranceRecord, InsuranceUpdate, PatientUpdate, RemotePatientRecord,
};
pub use physician::Physician;
