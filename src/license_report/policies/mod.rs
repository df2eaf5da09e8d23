mod license_override_policy;

pub use license_override_policy::LicenseOverridePolicy;
