/// External (serializable) representations of jobs and solutions
pub mod ext_repr;

/// Converting external representations into library entities
pub mod import;

/// Converting library entities into external representations
pub mod export;
