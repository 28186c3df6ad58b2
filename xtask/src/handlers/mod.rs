pub mod keygen;
pub mod license;
pub mod report;
pub mod version;
