// Static reference data: region catalog and selectable specialties.

pub mod regions;
pub mod specialties;
